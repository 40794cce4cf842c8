//! Exit codes for the CLI

use pcommit_core::{ChangelogError, ConfigError, GitError, PcommitError};

/// Success
pub const SUCCESS: i32 = 0;

/// General error
pub const ERROR: i32 = 1;

/// Configuration error
pub const CONFIG_ERROR: i32 = 2;

/// Git error, or the commit log could not be read
pub const GIT_ERROR: i32 = 3;

/// Invalid commit message input
pub const VALIDATION_ERROR: i32 = 5;

/// A commit did not follow the convention in strict mode
pub const UNKNOWN_COMMIT: i32 = 6;

/// User cancelled
pub const CANCELLED: i32 = 130;

fn for_changelog_error(err: &ChangelogError) -> i32 {
    match err {
        ChangelogError::UnknownCommit { .. } => UNKNOWN_COMMIT,
        ChangelogError::SourceUnavailable(_) => GIT_ERROR,
        ChangelogError::InvalidMessage(_) => VALIDATION_ERROR,
        ChangelogError::Render(_) => ERROR,
    }
}

/// Pick the exit code for an error returned by a command
pub fn for_error(err: &anyhow::Error) -> i32 {
    for cause in err.chain() {
        if let Some(e) = cause.downcast_ref::<ChangelogError>() {
            return for_changelog_error(e);
        }
        if let Some(e) = cause.downcast_ref::<PcommitError>() {
            return match e {
                PcommitError::Config(_) => CONFIG_ERROR,
                PcommitError::Git(_) => GIT_ERROR,
                PcommitError::Changelog(c) => for_changelog_error(c),
                PcommitError::Io(_) => ERROR,
            };
        }
        if cause.downcast_ref::<GitError>().is_some() {
            return GIT_ERROR;
        }
        if cause.downcast_ref::<ConfigError>().is_some() {
            return CONFIG_ERROR;
        }
        if let Some(io) = cause.downcast_ref::<std::io::Error>() {
            if io.kind() == std::io::ErrorKind::Interrupted {
                return CANCELLED;
            }
        }
    }
    ERROR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_commit_code() {
        let err = anyhow::Error::new(ChangelogError::UnknownCommit {
            line: "bogus: x".into(),
            reason: "unknown commit type".into(),
        });
        assert_eq!(for_error(&err), UNKNOWN_COMMIT);
    }

    #[test]
    fn test_source_unavailable_code() {
        let err = anyhow::Error::new(ChangelogError::SourceUnavailable("no repo".into()));
        assert_eq!(for_error(&err), GIT_ERROR);
    }

    #[test]
    fn test_wrapped_config_error_code() {
        let err = anyhow::Error::new(PcommitError::from(ConfigError::InvalidValue {
            field: "changelog.file".into(),
            message: "must not be empty".into(),
        }));
        assert_eq!(for_error(&err), CONFIG_ERROR);
    }

    #[test]
    fn test_context_keeps_code() {
        let err = anyhow::Error::new(GitError::NothingStaged).context("committing");
        assert_eq!(for_error(&err), GIT_ERROR);
    }

    #[test]
    fn test_interrupted_is_cancelled() {
        let err = anyhow::Error::new(std::io::Error::from(std::io::ErrorKind::Interrupted));
        assert_eq!(for_error(&err), CANCELLED);
    }

    #[test]
    fn test_other_errors() {
        assert_eq!(for_error(&anyhow::anyhow!("boom")), ERROR);
    }
}
