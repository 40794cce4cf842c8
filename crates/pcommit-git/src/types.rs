//! Git types

use serde::{Deserialize, Serialize};

/// One entry of the one-line commit log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Abbreviated commit id (first 7 characters)
    pub short_hash: String,
    /// Commit summary, as shown by `git log --oneline`
    pub summary: String,
}

impl LogEntry {
    /// Create an entry from a full commit id and its summary
    pub fn new(hash: &str, summary: impl Into<String>) -> Self {
        Self {
            short_hash: hash.chars().take(7).collect(),
            summary: summary.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_entry_abbreviates_hash() {
        let entry = LogEntry::new("abc1234567890", "feat: add feature");
        assert_eq!(entry.short_hash, "abc1234");
        assert_eq!(entry.summary, "feat: add feature");
    }
}
