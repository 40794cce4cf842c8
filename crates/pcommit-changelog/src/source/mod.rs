//! Sources of raw one-line commit summaries

mod file;
mod git;

pub use file::{OnelineFileSource, StaticSource};
pub use git::GitLogSource;

use crate::Result;

/// Supplies the raw commit summaries a changelog is built from.
///
/// Summaries come without the leading commit hash, in the order the source
/// lists them.
pub trait LogSource {
    /// Human-readable name of the source, for logs and messages
    fn describe(&self) -> String;

    /// Read every summary
    fn lines(&self) -> Result<Vec<String>>;
}
