//! pcommit Git - Git operations for pcommit
//!
//! This crate reads the one-line commit log that changelogs are built from and
//! records new commits composed by the message command.

mod commits;
mod repository;
pub mod types;

pub use repository::{GitRepo, Result};
pub use types::LogEntry;
