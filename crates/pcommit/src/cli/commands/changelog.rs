//! Changelog command

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use tracing::info;

use pcommit_changelog::{
    ChangelogGenerator, GenerationReport, GeneratorOptions, JsonRenderer, MarkdownRenderer,
};
use pcommit_core::config::{load_config_or_default, ChangelogConfig};

use super::log_source;
use crate::cli::{output, Cli, OutputFormat};

/// Generate a changelog from version-marked commits
#[derive(Debug, Args)]
pub struct ChangelogCommand {
    /// Start at this version, leaving out every older version
    #[arg(short, long, value_name = "VERSION")]
    pub since: Option<String>,

    /// Fail on commits that do not follow the convention instead of skipping them
    #[arg(short = 'n', long = "no-unknown-commits")]
    pub strict: bool,

    /// Output file (defaults to the configured changelog file; JSON defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,

    /// Read a saved `git log --oneline` listing instead of the repository ("-" for stdin)
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Leave a section out of the changelog
    #[arg(long, value_name = "TYPE", value_parser = ["fix", "feat", "ref", "test"])]
    pub exclude: Vec<String>,

    /// Leave out long descriptions
    #[arg(long)]
    pub no_long_desc: bool,

    /// Leave out changed files
    #[arg(long)]
    pub no_files: bool,
}

impl ChangelogCommand {
    /// Apply command-line overrides on top of the configured settings
    pub fn apply_overrides(&self, config: &mut ChangelogConfig) {
        if let Some(since) = &self.since {
            config.since = Some(since.clone());
        }
        if self.strict {
            config.skip_unknown = false;
        }
        for token in &self.exclude {
            if let Some(section) = config.sections.get_mut(token) {
                section.include = false;
            }
        }
        for section in config.sections.all_mut() {
            if self.no_long_desc {
                section.long_description = false;
            }
            if self.no_files {
                section.files = false;
            }
        }
    }

    /// Execute the changelog command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(since = ?self.since, strict = self.strict, stdout = self.stdout, "executing changelog command");
        let cwd = cli.working_dir()?;
        let (config, _) = load_config_or_default(&cwd)?;

        let mut changelog = config.changelog;
        self.apply_overrides(&mut changelog);

        let generator = ChangelogGenerator::new(GeneratorOptions::from(&changelog));
        let source = log_source(self.log_file.as_ref(), &cwd);

        // Nothing is written until generation has succeeded.
        let mut rendered = Vec::new();
        let report = match cli.format {
            OutputFormat::Json => {
                let mut renderer = JsonRenderer::new(&mut rendered);
                generator.generate(source.as_ref(), &mut renderer)?
            }
            OutputFormat::Text => {
                let mut renderer =
                    MarkdownRenderer::new(&mut rendered).with_sections(changelog.sections.clone());
                generator.generate(source.as_ref(), &mut renderer)?
            }
        };

        let destination = match (&self.output, cli.format) {
            (Some(path), _) => Some(cwd.join(path)),
            (None, OutputFormat::Json) => None,
            (None, OutputFormat::Text) if self.stdout => None,
            (None, OutputFormat::Text) => Some(cwd.join(&changelog.file)),
        };

        match &destination {
            Some(path) => std::fs::write(path, &rendered)?,
            None => std::io::stdout()
                .lock()
                .write_all(&with_trailing_newline(rendered))?,
        }

        if !cli.quiet {
            self.report(&report, &changelog, destination.as_ref());
        }
        Ok(())
    }

    fn report(&self, report: &GenerationReport, config: &ChangelogConfig, path: Option<&PathBuf>) {
        if report.skipped > 0 {
            output::warning(&format!(
                "Skipped {} commit(s) not following the commit convention",
                report.skipped
            ));
        }
        if report.unlabelled > 0 {
            output::warning(&format!(
                "{} version marker(s) have an empty label",
                report.unlabelled
            ));
        }
        if let Some(since) = &config.since {
            if report.batches > 0 && report.emitted == 0 {
                output::warning(&format!("Version {} not found; no versions written", since));
            }
        }
        if let Some(path) = path {
            output::success(&format!(
                "Changelog with {} version(s) written to {}",
                report.emitted,
                output::path_style().apply_to(path.display())
            ));
        }
    }
}

/// Terminal output ends with exactly one newline
fn with_trailing_newline(mut rendered: Vec<u8>) -> Vec<u8> {
    if rendered.last() != Some(&b'\n') {
        rendered.push(b'\n');
    }
    rendered
}
