//! Grouping records into version batches

use tracing::debug;

use crate::types::{CommitRecord, VersionBatch};

/// Group records into batches, each closed by a `ver` record.
///
/// The closing record is the last commit of its batch and its short
/// description becomes the batch label. Records after the last `ver` record
/// belong to no version yet and are dropped. Batches keep input order.
pub fn batch<I>(records: I) -> Vec<VersionBatch>
where
    I: IntoIterator<Item = CommitRecord>,
{
    let mut batches = Vec::new();
    let mut open: Vec<CommitRecord> = Vec::new();

    for record in records {
        let closes = record.is_version_marker();
        let label = closes.then(|| record.short_description.clone());
        open.push(record);

        if let Some(version_label) = label {
            batches.push(VersionBatch {
                version_label,
                commits: std::mem::take(&mut open),
            });
        }
    }

    if !open.is_empty() {
        debug!(dropped = open.len(), "dropping commits with no version marker");
    }
    debug!(batches = batches.len(), "batched commits by version");
    batches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CommitType;

    fn rec(commit_type: CommitType, text: &str) -> CommitRecord {
        CommitRecord::new(commit_type, text)
    }

    #[test]
    fn test_two_batches() {
        let batches = batch(vec![
            rec(CommitType::Feat, "A"),
            rec(CommitType::Ver, "1.0"),
            rec(CommitType::Fix, "B"),
            rec(CommitType::Ver, "2.0"),
        ]);

        assert_eq!(
            batches,
            vec![
                VersionBatch {
                    version_label: "1.0".to_string(),
                    commits: vec![rec(CommitType::Feat, "A"), rec(CommitType::Ver, "1.0")],
                },
                VersionBatch {
                    version_label: "2.0".to_string(),
                    commits: vec![rec(CommitType::Fix, "B"), rec(CommitType::Ver, "2.0")],
                },
            ]
        );
    }

    #[test]
    fn test_trailing_commits_dropped() {
        let batches = batch(vec![
            rec(CommitType::Feat, "A"),
            rec(CommitType::Ver, "1.0"),
            rec(CommitType::Fix, "B"),
        ]);

        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].version_label, "1.0");
        assert!(batches
            .iter()
            .flat_map(|b| &b.commits)
            .all(|c| c.short_description != "B"));
    }

    #[test]
    fn test_consecutive_markers() {
        let batches = batch(vec![rec(CommitType::Ver, "1.0"), rec(CommitType::Ver, "1.1")]);
        assert_eq!(batches.len(), 2);
        assert_eq!(batches[1].commits, vec![rec(CommitType::Ver, "1.1")]);
    }

    #[test]
    fn test_no_markers() {
        let batches = batch(vec![rec(CommitType::Feat, "A"), rec(CommitType::Fix, "B")]);
        assert!(batches.is_empty());
    }

    #[test]
    fn test_newest_first_input_keeps_order() {
        // A newest-first log puts each marker before the commits it released.
        let batches = batch(vec![
            rec(CommitType::Ver, "2.0"),
            rec(CommitType::Fix, "B"),
            rec(CommitType::Ver, "1.0"),
            rec(CommitType::Feat, "A"),
        ]);
        let labels: Vec<&str> = batches.iter().map(|b| b.version_label.as_str()).collect();
        assert_eq!(labels, vec!["2.0", "1.0"]);
        assert_eq!(batches[1].commits.len(), 2);
    }
}
