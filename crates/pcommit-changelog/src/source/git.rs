//! Commit summaries read from a git repository

use std::path::PathBuf;

use tracing::{debug, instrument, trace};

use pcommit_core::ChangelogError;
use pcommit_git::GitRepo;

use super::LogSource;
use crate::Result;

/// Reads the one-line log of the repository containing a directory
#[derive(Debug, Clone)]
pub struct GitLogSource {
    dir: PathBuf,
}

impl GitLogSource {
    /// Use the repository found at or above `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl LogSource for GitLogSource {
    fn describe(&self) -> String {
        format!("git repository at {}", self.dir.display())
    }

    #[instrument(skip(self), fields(dir = %self.dir.display()))]
    fn lines(&self) -> Result<Vec<String>> {
        let unavailable = |e: pcommit_core::GitError| ChangelogError::SourceUnavailable(e.to_string());

        let repo = GitRepo::discover(&self.dir).map_err(unavailable)?;
        let entries = repo.oneline_log().map_err(unavailable)?;

        debug!(count = entries.len(), "read summaries from git");
        Ok(entries
            .into_iter()
            .map(|e| {
                trace!(commit = %e.short_hash, summary = %e.summary, "log entry");
                e.summary
            })
            .collect())
    }
}
