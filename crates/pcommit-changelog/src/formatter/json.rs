//! JSON renderer

use std::io::Write;

use crate::driver::ChangelogSink;
use crate::types::{CommitRecord, VersionBatch};
use crate::Result;

/// Collects the emitted batches and writes them as a JSON array at the end
pub struct JsonRenderer<W: Write> {
    writer: W,
    batches: Vec<VersionBatch>,
}

impl<W: Write> JsonRenderer<W> {
    /// Create a renderer writing to `writer`
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            batches: Vec::new(),
        }
    }

    /// Recover the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ChangelogSink for JsonRenderer<W> {
    fn on_batch(&mut self, version_label: &str, commits: &[CommitRecord]) -> Result<()> {
        self.batches.push(VersionBatch {
            version_label: version_label.to_string(),
            commits: commits.to_vec(),
        });
        Ok(())
    }

    fn on_end(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.batches).map_err(std::io::Error::from)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
