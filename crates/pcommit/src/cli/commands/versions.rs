//! Versions command

use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use pcommit_changelog::{ChangelogGenerator, GeneratorOptions, UnknownCommitPolicy};
use pcommit_core::config::load_config_or_default;

use super::log_source;
use crate::cli::{output, Cli, OutputFormat};

/// List the versions found in the commit log
#[derive(Debug, Args)]
pub struct VersionsCommand {
    /// Fail on commits that do not follow the convention instead of skipping them
    #[arg(short = 'n', long = "no-unknown-commits")]
    pub strict: bool,

    /// Read a saved `git log --oneline` listing instead of the repository ("-" for stdin)
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

impl VersionsCommand {
    /// Execute the versions command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(strict = self.strict, "executing versions command");
        let cwd = cli.working_dir()?;
        let (config, _) = load_config_or_default(&cwd)?;

        let skip_unknown = config.changelog.skip_unknown && !self.strict;
        let generator = ChangelogGenerator::new(GeneratorOptions {
            since: None,
            policy: UnknownCommitPolicy::from_skip_unknown(skip_unknown),
        });
        let source = log_source(self.log_file.as_ref(), &cwd);
        let batches = generator.batches(source.as_ref())?;

        match cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&batches)?);
            }
            OutputFormat::Text => {
                if batches.is_empty() {
                    if !cli.quiet {
                        output::warning("No version markers found in the commit log");
                    }
                    return Ok(());
                }
                for batch in &batches {
                    if batch.version_label.is_empty() && !cli.quiet {
                        output::warning("Version marker with an empty label");
                    }
                    println!(
                        "{} {}",
                        output::version_style().apply_to(&batch.version_label),
                        style(format!("({} commits)", batch.commits.len())).dim()
                    );
                }
            }
        }

        Ok(())
    }
}
