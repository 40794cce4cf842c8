//! CLI commands

mod changelog;
mod check;
mod completions;
mod init;
mod message;
mod versions;

pub use changelog::ChangelogCommand;
pub use check::CheckCommand;
pub use completions::CompletionsCommand;
pub use init::InitCommand;
pub use message::MessageCommand;
pub use versions::VersionsCommand;

use std::path::{Path, PathBuf};

use pcommit_changelog::{GitLogSource, LogSource, OnelineFileSource};

/// Pick the log source: a saved one-line log if given, else the repository.
///
/// A relative log path is taken from `cwd`; `-` stays standard input.
pub(crate) fn log_source(log_file: Option<&PathBuf>, cwd: &Path) -> Box<dyn LogSource> {
    match log_file {
        Some(path) if path.as_os_str() == "-" => Box::new(OnelineFileSource::new(path)),
        Some(path) => Box::new(OnelineFileSource::new(cwd.join(path))),
        None => Box::new(GitLogSource::new(cwd)),
    }
}
