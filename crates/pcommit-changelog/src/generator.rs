//! Changelog generation: source, collector, batcher and driver in sequence

use tracing::{info, instrument, warn};

use pcommit_core::config::ChangelogConfig;

use crate::batcher::batch;
use crate::collector::{collect, UnknownCommitPolicy};
use crate::driver::{ChangelogDriver, ChangelogSink};
use crate::source::LogSource;
use crate::types::VersionBatch;
use crate::Result;

/// Options controlling a generation run
#[derive(Debug, Clone, Default)]
pub struct GeneratorOptions {
    /// Version label to start emitting at; `None` emits every version
    pub since: Option<String>,
    /// Handling of summaries that do not parse
    pub policy: UnknownCommitPolicy,
}

impl From<&ChangelogConfig> for GeneratorOptions {
    fn from(config: &ChangelogConfig) -> Self {
        Self {
            since: config.since.clone().filter(|s| !s.trim().is_empty()),
            policy: UnknownCommitPolicy::from_skip_unknown(config.skip_unknown),
        }
    }
}

/// Counts from one generation run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Records parsed from the log
    pub records: usize,
    /// Lines skipped as unknown
    pub skipped: usize,
    /// Batches closed by a version marker
    pub batches: usize,
    /// Batches handed to the sink
    pub emitted: usize,
    /// Batches closed by a version marker with an empty label
    pub unlabelled: usize,
}

/// Builds changelogs from a [`LogSource`]
#[derive(Debug, Clone, Default)]
pub struct ChangelogGenerator {
    options: GeneratorOptions,
}

impl ChangelogGenerator {
    /// Create a generator with the given options
    pub fn new(options: GeneratorOptions) -> Self {
        Self { options }
    }

    fn collect_batches(&self, source: &dyn LogSource) -> Result<(Vec<VersionBatch>, GenerationReport)> {
        let lines = source.lines()?;
        let collected = collect(&lines, self.options.policy)?;

        let report = GenerationReport {
            records: collected.records.len(),
            skipped: collected.skipped,
            ..GenerationReport::default()
        };
        let batches = batch(collected.records);
        Ok((batches, report))
    }

    /// Read, parse and batch the log without driving a sink
    #[instrument(skip(self, source), fields(source = %source.describe()))]
    pub fn batches(&self, source: &dyn LogSource) -> Result<Vec<VersionBatch>> {
        let (batches, _) = self.collect_batches(source)?;
        Ok(batches)
    }

    /// Read, parse and batch the log, then drive `sink` with the selected batches.
    ///
    /// Nothing reaches the sink if collection fails.
    #[instrument(skip(self, source, sink), fields(source = %source.describe()))]
    pub fn generate<S>(&self, source: &dyn LogSource, sink: &mut S) -> Result<GenerationReport>
    where
        S: ChangelogSink + ?Sized,
    {
        let (batches, mut report) = self.collect_batches(source)?;
        report.batches = batches.len();
        report.unlabelled = batches.iter().filter(|b| b.version_label.is_empty()).count();
        if report.unlabelled > 0 {
            warn!(count = report.unlabelled, "version markers without a label");
        }

        let driver = ChangelogDriver::new().with_since(self.options.since.clone());
        report.emitted = driver.drive(&batches, sink)?;

        info!(
            records = report.records,
            skipped = report.skipped,
            batches = report.batches,
            emitted = report.emitted,
            "changelog generated"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::CallbackSink;
    use crate::source::StaticSource;
    use crate::types::CommitRecord;
    use pcommit_core::ChangelogError;

    fn source() -> StaticSource {
        StaticSource::new([
            "feat: c",
            "ver: 1.1",
            "fix: b",
            "Merge branch 'dev'",
            "ver: 1.0",
            "feat: a",
            "ver: 0.9",
        ])
    }

    fn labels(generator: &ChangelogGenerator) -> (Vec<String>, GenerationReport) {
        let mut seen = Vec::new();
        let report = {
            let mut sink = CallbackSink::new(
                |label: &str, _: &[CommitRecord]| seen.push(label.to_string()),
                || {},
            );
            generator.generate(&source(), &mut sink).unwrap()
        };
        (seen, report)
    }

    #[test]
    fn test_generate_all() {
        let (seen, report) = labels(&ChangelogGenerator::default());
        assert_eq!(seen, vec!["1.1", "1.0", "0.9"]);
        assert_eq!(
            report,
            GenerationReport {
                records: 6,
                skipped: 1,
                batches: 3,
                emitted: 3,
                unlabelled: 0,
            }
        );
    }

    #[test]
    fn test_generate_since() {
        let generator = ChangelogGenerator::new(GeneratorOptions {
            since: Some("1.0".to_string()),
            ..GeneratorOptions::default()
        });
        let (seen, report) = labels(&generator);
        assert_eq!(seen, vec!["1.0", "0.9"]);
        assert_eq!(report.emitted, 2);
    }

    #[test]
    fn test_strict_generation_never_reaches_sink() {
        let generator = ChangelogGenerator::new(GeneratorOptions {
            policy: UnknownCommitPolicy::Fail,
            ..GeneratorOptions::default()
        });
        let mut batch_calls = 0;
        let mut end_calls = 0;
        let result = {
            let mut sink = CallbackSink::new(
                |_: &str, _: &[CommitRecord]| batch_calls += 1,
                || end_calls += 1,
            );
            generator.generate(&source(), &mut sink)
        };
        assert!(matches!(result, Err(ChangelogError::UnknownCommit { .. })));
        assert_eq!(batch_calls + end_calls, 0);
    }

    #[test]
    fn test_options_from_config() {
        let config = ChangelogConfig {
            since: Some("2.0".to_string()),
            skip_unknown: false,
            ..ChangelogConfig::default()
        };
        let options = GeneratorOptions::from(&config);
        assert_eq!(options.since.as_deref(), Some("2.0"));
        assert_eq!(options.policy, UnknownCommitPolicy::Fail);
    }

    #[test]
    fn test_blank_since_emits_everything() {
        for since in ["", "   "] {
            let config = ChangelogConfig {
                since: Some(since.to_string()),
                ..ChangelogConfig::default()
            };
            let options = GeneratorOptions::from(&config);
            assert!(options.since.is_none());

            let (seen, report) = labels(&ChangelogGenerator::new(options));
            assert_eq!(seen, vec!["1.1", "1.0", "0.9"]);
            assert_eq!(report.emitted, 3);
        }
    }

    #[test]
    fn test_counts_unlabelled_versions() {
        let source = StaticSource::new(["feat: b", "ver:", "fix: a", "ver: 1.0"]);
        let mut seen = Vec::new();
        let report = {
            let mut sink = CallbackSink::new(
                |label: &str, _: &[CommitRecord]| seen.push(label.to_string()),
                || {},
            );
            ChangelogGenerator::default().generate(&source, &mut sink).unwrap()
        };
        assert_eq!(seen, vec!["", "1.0"]);
        assert_eq!(report.unlabelled, 1);
    }

    #[test]
    fn test_batches_only() {
        let batches = ChangelogGenerator::default().batches(&source()).unwrap();
        // Newest-first input: each marker collects the newer commits above it.
        assert_eq!(batches.len(), 3);
        assert_eq!(batches[0].version_label, "1.1");
        assert_eq!(batches[0].commits.len(), 2);
        assert_eq!(batches[0].commits[0].short_description, "c");
    }
}
