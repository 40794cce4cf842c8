//! Configuration types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration for pcommit
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Changelog configuration
    pub changelog: ChangelogConfig,

    /// Commit message configuration
    pub message: MessageConfig,
}

/// Changelog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// Changelog file path
    pub file: PathBuf,

    /// Version label to start the changelog from
    pub since: Option<String>,

    /// Whether to skip commits that do not follow the convention
    pub skip_unknown: bool,

    /// Per-type section settings
    pub sections: SectionsConfig,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("CHANGELOG.md"),
            since: None,
            skip_unknown: true,
            sections: SectionsConfig::default(),
        }
    }
}

/// Settings for the rendered changelog sections
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionsConfig {
    /// Bug fixes
    pub fix: SectionConfig,
    /// New features
    pub feat: SectionConfig,
    /// Refactors
    #[serde(rename = "ref")]
    pub refactor: SectionConfig,
    /// Test improvements
    pub test: SectionConfig,
}

impl SectionsConfig {
    /// Look up a section by its commit type token
    pub fn get(&self, token: &str) -> Option<&SectionConfig> {
        match token {
            "fix" => Some(&self.fix),
            "feat" => Some(&self.feat),
            "ref" => Some(&self.refactor),
            "test" => Some(&self.test),
            _ => None,
        }
    }

    /// Every section, mutably
    pub fn all_mut(&mut self) -> [&mut SectionConfig; 4] {
        [
            &mut self.fix,
            &mut self.feat,
            &mut self.refactor,
            &mut self.test,
        ]
    }

    /// Mutable lookup by commit type token
    pub fn get_mut(&mut self, token: &str) -> Option<&mut SectionConfig> {
        match token {
            "fix" => Some(&mut self.fix),
            "feat" => Some(&mut self.feat),
            "ref" => Some(&mut self.refactor),
            "test" => Some(&mut self.test),
            _ => None,
        }
    }
}

/// Settings for a single changelog section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionConfig {
    /// Whether the section is rendered at all
    pub include: bool,

    /// Whether long descriptions are rendered under each entry
    pub long_description: bool,

    /// Whether changed files are rendered under each entry
    pub files: bool,
}

impl Default for SectionConfig {
    fn default() -> Self {
        Self {
            include: true,
            long_description: true,
            files: true,
        }
    }
}

/// Commit message configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageConfig {
    /// Print the composed message instead of committing
    pub dry_run: bool,
}
