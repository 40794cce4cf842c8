//! Changelog renderers
//!
//! Both renderers are [`ChangelogSink`](crate::ChangelogSink)s: the driver
//! feeds them the selected batches and they write to any `io::Write`.

mod json;
mod markdown;

pub use json::JsonRenderer;
pub use markdown::MarkdownRenderer;
