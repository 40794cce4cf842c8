//! pcommit Core - Shared foundations for pcommit
//!
//! This crate provides the error taxonomy and the configuration system used by
//! the git, changelog and CLI crates.

pub mod config;
pub mod error;

pub use error::{ChangelogError, ConfigError, GitError, PcommitError, Result};
