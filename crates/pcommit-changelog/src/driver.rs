//! Walking version batches and handing them to a sink

use tracing::{debug, info, warn};

use crate::types::{CommitRecord, VersionBatch};
use crate::Result;

/// Receiver of the batches selected by the [`ChangelogDriver`]
pub trait ChangelogSink {
    /// Called once per emitted batch, in batch order
    fn on_batch(&mut self, version_label: &str, commits: &[CommitRecord]) -> Result<()>;

    /// Called exactly once after the last batch
    fn on_end(&mut self) -> Result<()>;
}

/// Adapts a pair of closures into a [`ChangelogSink`]
pub struct CallbackSink<B, E> {
    on_batch: B,
    on_end: E,
}

impl<B, E> CallbackSink<B, E>
where
    B: FnMut(&str, &[CommitRecord]),
    E: FnMut(),
{
    /// Create a sink from the two callbacks
    pub fn new(on_batch: B, on_end: E) -> Self {
        Self { on_batch, on_end }
    }
}

impl<B, E> ChangelogSink for CallbackSink<B, E>
where
    B: FnMut(&str, &[CommitRecord]),
    E: FnMut(),
{
    fn on_batch(&mut self, version_label: &str, commits: &[CommitRecord]) -> Result<()> {
        (self.on_batch)(version_label, commits);
        Ok(())
    }

    fn on_end(&mut self) -> Result<()> {
        (self.on_end)();
        Ok(())
    }
}

/// Driver state while walking the batches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriveState {
    /// Passing over batches until the since-anchor is reached
    Skipping,
    /// Emitting every remaining batch
    Emitting,
}

/// Walks version batches, starting at an optional since-anchor
#[derive(Debug, Clone, Default)]
pub struct ChangelogDriver {
    since: Option<String>,
}

impl ChangelogDriver {
    /// Create a driver that emits every batch
    pub fn new() -> Self {
        Self::default()
    }

    /// Start emitting at the batch labelled `since`; empty means from the start
    pub fn with_since(mut self, since: Option<impl Into<String>>) -> Self {
        self.since = since.map(Into::into).filter(|s| !s.is_empty());
        self
    }

    /// The state the driver starts in
    pub fn initial_state(&self) -> DriveState {
        if self.since.is_some() {
            DriveState::Skipping
        } else {
            DriveState::Emitting
        }
    }

    /// Hand the selected batches to `sink`, then signal the end.
    ///
    /// Returns the number of emitted batches. When the since-anchor matches
    /// no batch nothing is emitted, but `on_end` still runs.
    pub fn drive<S>(&self, batches: &[VersionBatch], sink: &mut S) -> Result<usize>
    where
        S: ChangelogSink + ?Sized,
    {
        info!(batches = batches.len(), since = ?self.since, "driving changelog");
        let mut state = self.initial_state();
        let mut emitted = 0;

        for batch in batches {
            if state == DriveState::Skipping {
                if self.since.as_deref() != Some(batch.version_label.as_str()) {
                    debug!(version = %batch.version_label, "skipping batch before since-anchor");
                    continue;
                }
                state = DriveState::Emitting;
            }

            sink.on_batch(&batch.version_label, &batch.commits)?;
            emitted += 1;
        }

        if state == DriveState::Skipping {
            warn!(since = ?self.since, "since-anchor matched no version; nothing emitted");
        }

        sink.on_end()?;
        Ok(emitted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CommitType;

    fn batches(labels: &[&str]) -> Vec<VersionBatch> {
        labels
            .iter()
            .map(|label| VersionBatch {
                version_label: label.to_string(),
                commits: vec![CommitRecord::new(CommitType::Ver, *label)],
            })
            .collect()
    }

    fn run(driver: &ChangelogDriver, input: &[VersionBatch]) -> (Vec<String>, usize, usize) {
        let mut seen = Vec::new();
        let mut ends = 0;
        let emitted = {
            let mut sink = CallbackSink::new(
                |label: &str, _: &[CommitRecord]| seen.push(label.to_string()),
                || ends += 1,
            );
            driver.drive(input, &mut sink).unwrap()
        };
        (seen, ends, emitted)
    }

    #[test]
    fn test_since_starts_at_anchor() {
        let driver = ChangelogDriver::new().with_since(Some("1.0"));
        let (seen, ends, emitted) = run(&driver, &batches(&["0.9", "1.0", "1.1"]));
        assert_eq!(seen, vec!["1.0", "1.1"]);
        assert_eq!(ends, 1);
        assert_eq!(emitted, 2);
    }

    #[test]
    fn test_without_since_emits_all() {
        let driver = ChangelogDriver::new();
        let (seen, ends, _) = run(&driver, &batches(&["0.9", "1.0", "1.1"]));
        assert_eq!(seen, vec!["0.9", "1.0", "1.1"]);
        assert_eq!(ends, 1);
    }

    #[test]
    fn test_empty_since_emits_all() {
        let driver = ChangelogDriver::new().with_since(Some(""));
        assert_eq!(driver.initial_state(), DriveState::Emitting);
        let (seen, _, _) = run(&driver, &batches(&["0.9", "1.0"]));
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn test_unmatched_since_emits_nothing() {
        let driver = ChangelogDriver::new().with_since(Some("3.0"));
        let (seen, ends, emitted) = run(&driver, &batches(&["0.9", "1.0"]));
        assert!(seen.is_empty());
        assert_eq!(ends, 1);
        assert_eq!(emitted, 0);
    }

    #[test]
    fn test_no_batches_still_ends() {
        let driver = ChangelogDriver::new();
        let (seen, ends, _) = run(&driver, &[]);
        assert!(seen.is_empty());
        assert_eq!(ends, 1);
    }

    #[test]
    fn test_repeated_label_after_anchor_is_emitted() {
        let driver = ChangelogDriver::new().with_since(Some("1.0"));
        let (seen, _, _) = run(&driver, &batches(&["1.0", "0.5", "1.0"]));
        assert_eq!(seen, vec!["1.0", "0.5", "1.0"]);
    }

    struct FailingSink;

    impl ChangelogSink for FailingSink {
        fn on_batch(&mut self, _: &str, _: &[CommitRecord]) -> Result<()> {
            Err(std::io::Error::other("disk full").into())
        }

        fn on_end(&mut self) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_sink_error_aborts() {
        let driver = ChangelogDriver::new();
        assert!(driver.drive(&batches(&["1.0"]), &mut FailingSink).is_err());
    }
}
