//! Commit history and commit creation

use git2::Sort;
use tracing::{debug, info, instrument};

use pcommit_core::error::GitError;

use crate::repository::{GitRepo, Result};
use crate::types::LogEntry;

impl GitRepo {
    /// Get the one-line log of the current branch, newest first
    #[instrument(skip(self))]
    pub fn oneline_log(&self) -> Result<Vec<LogEntry>> {
        let head = self.head_commit()?.ok_or(GitError::NoCommits)?;

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
        revwalk.push(head.id())?;

        let mut entries = Vec::new();

        for oid in revwalk {
            let oid = oid?;
            let commit = self.repo.find_commit(oid)?;
            entries.push(commit_to_entry(&commit));
        }

        debug!(count = entries.len(), "read one-line log");
        Ok(entries)
    }

    /// Commit the staged index on top of HEAD with the given message.
    ///
    /// Uses the signature configured for the repository and returns the new
    /// commit hash.
    #[instrument(skip(self, message), fields(message_len = message.len()))]
    pub fn commit_staged(&self, message: &str) -> Result<String> {
        let mut index = self.repo.index()?;
        let tree_id = index.write_tree()?;
        let tree = self.repo.find_tree(tree_id)?;
        let parent = self.head_commit()?;

        let unchanged = match &parent {
            Some(parent) => parent.tree_id() == tree_id,
            None => index.is_empty(),
        };
        if unchanged {
            return Err(GitError::NothingStaged);
        }

        let sig = self.repo.signature()?;
        let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();
        let oid = self
            .repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)?;

        info!(hash = %oid, "created commit");
        Ok(oid.to_string())
    }
}

/// Convert a git2 Commit to a LogEntry
fn commit_to_entry(commit: &git2::Commit<'_>) -> LogEntry {
    LogEntry::new(&commit.id().to_string(), commit.summary().unwrap_or_default())
}
