//! Commit summary parsing
//!
//! A summary has the shape
//!
//! ```text
//! <type>: <short description>[\nFiles: <a>, <b>][\n<long description>]
//! ```
//!
//! where `\n` is the literal two-character marker, not a line break. The
//! one-line log keeps multi-part messages on a single line this way, and
//! [`CommitMessage`](crate::CommitMessage) writes them back the same way.

mod grammar;

pub use grammar::parse;

use thiserror::Error;

/// Literal marker separating the parts of a one-line commit summary
pub const BREAK_MARKER: &str = "\\n";

/// Errors produced while parsing a commit summary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The token before the first `:` is not a known commit type
    #[error("unknown commit type {token:?} in {line:?}")]
    UnknownType { token: String, line: String },

    /// The summary has no `:` after the commit type
    #[error("missing ':' after commit type in {line:?}")]
    MissingSeparator { line: String },
}

impl ParseError {
    /// The raw line that failed to parse
    pub fn line(&self) -> &str {
        match self {
            Self::UnknownType { line, .. } | Self::MissingSeparator { line } => line,
        }
    }
}
