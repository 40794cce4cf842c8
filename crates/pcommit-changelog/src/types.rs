//! Changelog types

use std::fmt;

use serde::{Deserialize, Serialize};

/// Commit type tag, the token before the first `:` of a commit summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitType {
    /// Initial commits
    Init,
    /// Bug fixes
    Fix,
    /// New features
    Feat,
    /// Refactors
    Ref,
    /// Writing, fixing or refactoring tests
    Test,
    /// Documentation changes
    Doc,
    /// Build system changes (Makefiles, manifests)
    Build,
    /// Indentation, line breaks and other formatting
    Style,
    /// Continuous integration files
    Ci,
    /// Version marker
    Ver,
}

impl CommitType {
    /// Every commit type, in canonical order
    pub const ALL: [CommitType; 10] = [
        Self::Init,
        Self::Fix,
        Self::Feat,
        Self::Ref,
        Self::Test,
        Self::Doc,
        Self::Build,
        Self::Style,
        Self::Ci,
        Self::Ver,
    ];

    /// The token used in commit summaries
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Fix => "fix",
            Self::Feat => "feat",
            Self::Ref => "ref",
            Self::Test => "test",
            Self::Doc => "doc",
            Self::Build => "build",
            Self::Style => "style",
            Self::Ci => "ci",
            Self::Ver => "ver",
        }
    }

    /// Short human description, shown when picking a type
    pub fn description(&self) -> &'static str {
        match self {
            Self::Init => "Initial commits",
            Self::Fix => "Fix bugs",
            Self::Feat => "New features",
            Self::Ref => "Refactors",
            Self::Test => "Writing, fixing, refactoring test code",
            Self::Doc => "Change documentation",
            Self::Build => "Changing Makefiles, etc",
            Self::Style => "Fix indentation, line breaks, etc",
            Self::Ci => "Editing files for continuous integration",
            Self::Ver => "Versioning",
        }
    }
}

impl fmt::Display for CommitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CommitType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or(())
    }
}

/// A commit summary parsed into its fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    /// Commit type
    #[serde(rename = "type")]
    pub commit_type: CommitType,
    /// Single-line summary
    pub short_description: String,
    /// Changed files, in the order they were listed
    pub files: Vec<String>,
    /// Free text after the summary and file list
    pub long_description: String,
}

impl CommitRecord {
    /// Create a record with no files and no long description
    pub fn new(commit_type: CommitType, short_description: impl Into<String>) -> Self {
        Self {
            commit_type,
            short_description: short_description.into(),
            files: Vec::new(),
            long_description: String::new(),
        }
    }

    /// Set the file list
    pub fn with_files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.files = files.into_iter().map(Into::into).collect();
        self
    }

    /// Set the long description
    pub fn with_long_description(mut self, text: impl Into<String>) -> Self {
        self.long_description = text.into();
        self
    }

    /// Whether this record closes a version batch
    pub fn is_version_marker(&self) -> bool {
        self.commit_type == CommitType::Ver
    }
}

/// All commits up to and including the `ver` commit that closes them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionBatch {
    /// Short description of the closing `ver` commit
    pub version_label: String,
    /// Commits in input order, ending with the closing `ver` commit
    pub commits: Vec<CommitRecord>,
}
