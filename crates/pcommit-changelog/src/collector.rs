//! Collecting parsed records from a stream of raw summaries

use tracing::{debug, error, warn};

use pcommit_core::ChangelogError;

use crate::parser::parse;
use crate::types::CommitRecord;
use crate::Result;

/// What to do with a summary that does not follow the commit convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownCommitPolicy {
    /// Warn and leave the line out
    #[default]
    Skip,
    /// Report the line and stop collecting
    Fail,
}

impl UnknownCommitPolicy {
    /// Map the `skip_unknown` switch onto a policy
    pub fn from_skip_unknown(skip_unknown: bool) -> Self {
        if skip_unknown {
            Self::Skip
        } else {
            Self::Fail
        }
    }
}

/// Records collected from a log, with the number of lines left out
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collected {
    /// Parsed records, in input order
    pub records: Vec<CommitRecord>,
    /// Number of lines skipped as unknown
    pub skipped: usize,
}

/// Parse every raw line, applying `policy` to lines that fail to parse.
///
/// Every failure is reported through `tracing` before it is skipped or
/// returned. Under [`UnknownCommitPolicy::Fail`] no records are returned.
pub fn collect<I, S>(lines: I, policy: UnknownCommitPolicy) -> Result<Collected>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut collected = Collected::default();

    for line in lines {
        let line = line.as_ref();
        match parse(line) {
            Ok(record) => collected.records.push(record),
            Err(err) => match policy {
                UnknownCommitPolicy::Skip => {
                    warn!(line, reason = %err, "skipping unknown commit");
                    collected.skipped += 1;
                }
                UnknownCommitPolicy::Fail => {
                    error!(line, reason = %err, "unknown commit");
                    return Err(ChangelogError::UnknownCommit {
                        line: line.to_string(),
                        reason: err.to_string(),
                    });
                }
            },
        }
    }

    debug!(
        records = collected.records.len(),
        skipped = collected.skipped,
        "collected commit records"
    );
    Ok(collected)
}
