//! CLI definition and command handling

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use commands::{
    ChangelogCommand, CheckCommand, CompletionsCommand, InitCommand, MessageCommand,
    VersionsCommand,
};

/// pcommit - Structured commit messages and version changelogs
#[derive(Debug, Parser)]
#[command(name = "pcommit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Working directory
    #[arg(short = 'C', long, global = true)]
    pub directory: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output
    Json,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a changelog from version-marked commits
    Changelog(ChangelogCommand),

    /// Compose a commit message and commit the staged changes
    #[command(alias = "m")]
    Message(MessageCommand),

    /// List the versions found in the commit log
    Versions(VersionsCommand),

    /// Check that a commit message follows the convention
    Check(CheckCommand),

    /// Create a pcommit configuration file
    Init(InitCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

impl Cli {
    /// Directory the command runs in; `-C` is taken relative to the process directory
    pub fn working_dir(&self) -> std::io::Result<PathBuf> {
        let cwd = std::env::current_dir()?;
        Ok(match &self.directory {
            Some(dir) => cwd.join(dir),
            None => cwd,
        })
    }

    /// Execute the CLI command
    pub fn execute(&self) -> anyhow::Result<()> {
        match &self.command {
            Commands::Changelog(cmd) => cmd.execute(self),
            Commands::Message(cmd) => cmd.execute(self),
            Commands::Versions(cmd) => cmd.execute(self),
            Commands::Check(cmd) => cmd.execute(self),
            Commands::Init(cmd) => cmd.execute(self),
            Commands::Completions(cmd) => cmd.execute(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_changelog_flags() {
        let cli = Cli::try_parse_from([
            "pcommit",
            "changelog",
            "--since",
            "1.0",
            "-n",
            "--exclude",
            "ref",
            "--format",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.format, OutputFormat::Json);
        match cli.command {
            Commands::Changelog(cmd) => {
                assert_eq!(cmd.since.as_deref(), Some("1.0"));
                assert!(cmd.strict);
                assert_eq!(cmd.exclude, vec!["ref"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_exclude_rejects_unrendered_type() {
        assert!(Cli::try_parse_from(["pcommit", "changelog", "--exclude", "doc"]).is_err());
    }

    #[test]
    fn test_message_alias() {
        let cli = Cli::try_parse_from(["pcommit", "m", "--type", "fix", "--summary", "bug"]).unwrap();
        assert!(matches!(cli.command, Commands::Message(_)));
    }

    #[test]
    fn test_message_rejects_unknown_type() {
        assert!(Cli::try_parse_from(["pcommit", "message", "--type", "chore"]).is_err());
    }

    #[test]
    fn test_working_dir_from_flag() {
        let cli = Cli::try_parse_from(["pcommit", "-C", "/srv/project", "versions"]).unwrap();
        assert_eq!(cli.working_dir().unwrap(), PathBuf::from("/srv/project"));

        let cli = Cli::try_parse_from(["pcommit", "versions"]).unwrap();
        assert_eq!(cli.working_dir().unwrap(), std::env::current_dir().unwrap());
    }
}
