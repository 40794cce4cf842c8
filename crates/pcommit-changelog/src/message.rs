//! Composing commit messages in the one-line convention

use pcommit_core::ChangelogError;

use crate::parser::BREAK_MARKER;
use crate::types::{CommitRecord, CommitType};
use crate::Result;

/// Longest accepted short description, in characters
pub const MAX_SHORT_DESCRIPTION_LEN: usize = 65;

/// A commit message that renders to a summary the parser reads back unchanged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
    commit_type: CommitType,
    short_description: String,
    files: Vec<String>,
    long_description: String,
}

fn invalid(message: impl Into<String>) -> ChangelogError {
    ChangelogError::InvalidMessage(message.into())
}

fn check_single_line(field: &str, value: &str) -> Result<()> {
    if value.contains('\n') || value.contains('\r') {
        return Err(invalid(format!("{} must fit on one line", field)));
    }
    if value.contains(BREAK_MARKER) {
        return Err(invalid(format!("{} must not contain {:?}", field, BREAK_MARKER)));
    }
    Ok(())
}

impl CommitMessage {
    /// Start a message, checking the short description.
    ///
    /// The description is trimmed and must be 1 to
    /// [`MAX_SHORT_DESCRIPTION_LEN`] characters long.
    pub fn new(commit_type: CommitType, short_description: &str) -> Result<Self> {
        let short_description = short_description.trim();
        Self::check_short_description(short_description)?;

        Ok(Self {
            commit_type,
            short_description: short_description.to_string(),
            files: Vec::new(),
            long_description: String::new(),
        })
    }

    /// Validate a short description without building a message
    pub fn check_short_description(text: &str) -> Result<()> {
        let text = text.trim();
        if text.is_empty() {
            return Err(invalid("short description cannot be empty"));
        }
        let len = text.chars().count();
        if len > MAX_SHORT_DESCRIPTION_LEN {
            return Err(invalid(format!(
                "short description is {} characters, at most {} allowed",
                len, MAX_SHORT_DESCRIPTION_LEN
            )));
        }
        check_single_line("short description", text)
    }

    /// Set the changed files; blank entries are dropped
    pub fn with_files<I, S>(mut self, files: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Vec::new();
        for file in files {
            let file = file.as_ref().trim();
            if file.is_empty() {
                continue;
            }
            if file.contains(',') {
                return Err(invalid(format!("file name {:?} must not contain ','", file)));
            }
            check_single_line("file name", file)?;
            list.push(file.to_string());
        }
        self.files = list;
        self.check_long_description()?;
        Ok(self)
    }

    /// Set the changed files from comma-separated input
    pub fn with_files_input(self, input: &str) -> Result<Self> {
        self.with_files(input.split(','))
    }

    /// Set the long description; whitespace-only text counts as none
    pub fn with_long_description(mut self, text: &str) -> Result<Self> {
        self.long_description = if text.trim().is_empty() {
            String::new()
        } else {
            text.to_string()
        };
        self.check_long_description()?;
        Ok(self)
    }

    fn check_long_description(&self) -> Result<()> {
        if self.long_description.contains('\n') || self.long_description.contains('\r') {
            return Err(invalid("long description must fit on one line"));
        }
        // Without a file list the parser would read "files: ..." as one.
        if self.files.is_empty() {
            if let Some((label, _)) = self.long_description.split_once(':') {
                if label.eq_ignore_ascii_case("files") {
                    return Err(invalid(
                        "long description cannot start with \"files:\" when no files are listed",
                    ));
                }
            }
        }
        Ok(())
    }

    /// Render the one-line summary: type, short description, files, long description
    pub fn render(&self) -> String {
        let mut text = format!("{}: {}", self.commit_type, self.short_description);
        if !self.files.is_empty() {
            text.push_str(BREAK_MARKER);
            text.push_str("Files: ");
            text.push_str(&self.files.join(", "));
        }
        if !self.long_description.is_empty() {
            text.push_str(BREAK_MARKER);
            text.push_str(&self.long_description);
        }
        text
    }

    /// The record this message parses to
    pub fn to_record(&self) -> CommitRecord {
        CommitRecord::new(self.commit_type, self.short_description.clone())
            .with_files(self.files.iter().cloned())
            .with_long_description(self.long_description.clone())
    }
}
