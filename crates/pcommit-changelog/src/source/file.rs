//! Commit summaries from saved logs and memory

use std::path::PathBuf;

use tracing::debug;

use pcommit_core::ChangelogError;

use super::LogSource;
use crate::Result;

/// Reads a saved `git log --oneline` listing; `-` reads standard input
#[derive(Debug, Clone)]
pub struct OnelineFileSource {
    path: PathBuf,
}

impl OnelineFileSource {
    /// Read the listing at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read(&self) -> std::io::Result<String> {
        if self.path.as_os_str() == "-" {
            std::io::read_to_string(std::io::stdin())
        } else {
            std::fs::read_to_string(&self.path)
        }
    }
}

/// Strip the leading hash from one `--oneline` line
fn strip_hash(line: &str) -> &str {
    line.split_once(' ').map(|(_, summary)| summary).unwrap_or("")
}

impl LogSource for OnelineFileSource {
    fn describe(&self) -> String {
        if self.path.as_os_str() == "-" {
            "standard input".to_string()
        } else {
            format!("log file {}", self.path.display())
        }
    }

    fn lines(&self) -> Result<Vec<String>> {
        let content = self
            .read()
            .map_err(|e| ChangelogError::SourceUnavailable(format!("{}: {}", self.describe(), e)))?;

        let lines: Vec<String> = content
            .lines()
            .map(|l| l.trim_end_matches('\r'))
            .filter(|l| !l.trim().is_empty())
            .map(|l| strip_hash(l).to_string())
            .collect();

        debug!(count = lines.len(), source = %self.describe(), "read summaries from log file");
        Ok(lines)
    }
}

/// Summaries held in memory
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    lines: Vec<String>,
}

impl StaticSource {
    /// Serve the given summaries
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl LogSource for StaticSource {
    fn describe(&self) -> String {
        format!("{} in-memory summaries", self.lines.len())
    }

    fn lines(&self) -> Result<Vec<String>> {
        Ok(self.lines.clone())
    }
}
