//! pcommit Changelog - Commit parsing and changelog generation
//!
//! Raw one-line commit summaries are parsed into [`CommitRecord`]s, grouped
//! into [`VersionBatch`]es closed by `ver` commits, and walked by the
//! [`ChangelogDriver`] which hands each batch to a [`ChangelogSink`].

pub mod batcher;
pub mod collector;
pub mod driver;
pub mod formatter;
pub mod generator;
pub mod message;
pub mod parser;
pub mod source;
pub mod types;

pub use batcher::batch;
pub use collector::{collect, Collected, UnknownCommitPolicy};
pub use driver::{CallbackSink, ChangelogDriver, ChangelogSink, DriveState};
pub use formatter::{JsonRenderer, MarkdownRenderer};
pub use generator::{ChangelogGenerator, GenerationReport, GeneratorOptions};
pub use message::{CommitMessage, MAX_SHORT_DESCRIPTION_LEN};
pub use parser::{parse, ParseError, BREAK_MARKER};
pub use source::{GitLogSource, LogSource, OnelineFileSource, StaticSource};
pub use types::{CommitRecord, CommitType, VersionBatch};

/// Result type for changelog operations
pub type Result<T> = std::result::Result<T, pcommit_core::ChangelogError>;
