//! Markdown changelog renderer

use std::io::Write;

use chrono::{DateTime, Local};
use tracing::{debug, instrument};

use pcommit_core::config::SectionsConfig;

use crate::driver::ChangelogSink;
use crate::types::{CommitRecord, CommitType};
use crate::Result;

/// Rendered sections, in output order
const SECTIONS: [(CommitType, &str); 4] = [
    (CommitType::Fix, "Fix(es)"),
    (CommitType::Feat, "Feature(s)"),
    (CommitType::Ref, "Refactor(s)"),
    (CommitType::Test, "Test improvement(s)"),
];

/// Writes one `###` heading per version with a bullet list per section
pub struct MarkdownRenderer<W: Write> {
    writer: W,
    sections: SectionsConfig,
    generated_at: Option<DateTime<Local>>,
}

impl<W: Write> MarkdownRenderer<W> {
    /// Create a renderer with every section enabled
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            sections: SectionsConfig::default(),
            generated_at: None,
        }
    }

    /// Use the given section settings
    pub fn with_sections(mut self, sections: SectionsConfig) -> Self {
        self.sections = sections;
        self
    }

    /// Stamp the footer with a fixed time instead of the current time
    pub fn with_generated_at(mut self, at: DateTime<Local>) -> Self {
        self.generated_at = Some(at);
        self
    }

    /// Recover the writer
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_section(&mut self, title: &str, commits: &[&CommitRecord], token: &str) -> Result<()> {
        let Some(options) = self.sections.get(token).cloned() else {
            return Ok(());
        };
        if !options.include || commits.is_empty() {
            return Ok(());
        }

        writeln!(self.writer, "* **{}:**", title)?;
        for commit in commits {
            writeln!(self.writer, "    * {}  ", commit.short_description)?;
            if options.long_description && !commit.long_description.is_empty() {
                writeln!(self.writer, "        >{}  \n", commit.long_description)?;
            }
            if options.files && !commit.files.is_empty() {
                writeln!(
                    self.writer,
                    "        Files changed: {}  ",
                    commit.files.join(", ")
                )?;
            }
        }
        Ok(())
    }
}

impl<W: Write> ChangelogSink for MarkdownRenderer<W> {
    #[instrument(skip(self, commits), fields(commit_count = commits.len()))]
    fn on_batch(&mut self, version_label: &str, commits: &[CommitRecord]) -> Result<()> {
        writeln!(self.writer, "### {}", version_label)?;

        for (commit_type, title) in SECTIONS {
            let matching: Vec<&CommitRecord> = commits
                .iter()
                .filter(|c| c.commit_type == commit_type)
                .collect();
            self.write_section(title, &matching, commit_type.as_str())?;
        }

        debug!(version = version_label, "rendered version");
        Ok(())
    }

    fn on_end(&mut self) -> Result<()> {
        let at = self.generated_at.unwrap_or_else(Local::now);
        write!(self.writer, "\nGenerated at {}", at.format("%Y-%m-%d %H:%M"))?;
        self.writer.flush()?;
        Ok(())
    }
}
