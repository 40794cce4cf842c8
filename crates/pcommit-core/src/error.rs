//! Error types for pcommit

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using PcommitError
pub type Result<T> = std::result::Result<T, PcommitError>;

/// Main error type for pcommit operations
#[derive(Debug, Error)]
pub enum PcommitError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Git-related errors
    #[error(transparent)]
    Git(#[from] GitError),

    /// Changelog-related errors
    #[error(transparent)]
    Changelog(#[from] ChangelogError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Git-related errors
#[derive(Debug, Error)]
pub enum GitError {
    /// Repository not found
    #[error("Git repository not found at {0}")]
    RepositoryNotFound(PathBuf),

    /// Not a git repository
    #[error("Not a git repository: {0}")]
    NotARepository(PathBuf),

    /// Failed to open repository
    #[error("Failed to open repository: {0}")]
    OpenFailed(String),

    /// No commits found
    #[error("No commits found in repository")]
    NoCommits,

    /// Nothing staged for commit
    #[error("Nothing staged for commit")]
    NothingStaged,

    /// Git2 library error
    #[error("Git error: {0}")]
    Git2(#[from] git2::Error),
}

/// Changelog-related errors
#[derive(Debug, Error)]
pub enum ChangelogError {
    /// A commit line could not be parsed and unknown commits are not allowed
    #[error("Unknown commit {line:?}: {reason}")]
    UnknownCommit { line: String, reason: String },

    /// The commit log could not be read
    #[error("Commit log unavailable: {0}")]
    SourceUnavailable(String),

    /// A commit message violates the message format
    #[error("Invalid commit message: {0}")]
    InvalidMessage(String),

    /// Failed to write rendered output
    #[error("Failed to render changelog: {0}")]
    Render(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_commit_message_names_line() {
        let err = ChangelogError::UnknownCommit {
            line: "bogus: x".to_string(),
            reason: "unknown commit type \"bogus\"".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("\"bogus: x\""));
        assert!(msg.contains("unknown commit type"));
    }

    #[test]
    fn test_errors_convert_into_pcommit_error() {
        let err: PcommitError = ChangelogError::SourceUnavailable("no repo".into()).into();
        assert!(matches!(err, PcommitError::Changelog(_)));

        let err: PcommitError = GitError::NoCommits.into();
        assert_eq!(err.to_string(), "No commits found in repository");
    }
}
