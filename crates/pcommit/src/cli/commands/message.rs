//! Message command - compose a commit message and commit

use clap::Args;
use console::style;
use dialoguer::{Input, Select};
use tracing::info;

use pcommit_changelog::{CommitMessage, CommitType, MAX_SHORT_DESCRIPTION_LEN};
use pcommit_core::config::load_config_or_default;
use pcommit_git::GitRepo;

use crate::cli::{output, Cli, OutputFormat};

fn parse_commit_type(s: &str) -> Result<CommitType, String> {
    s.parse::<CommitType>().map_err(|_| {
        let tokens: Vec<&str> = CommitType::ALL.iter().map(|t| t.as_str()).collect();
        format!("must be one of: {}", tokens.join(", "))
    })
}

/// Compose a commit message and commit the staged changes
#[derive(Debug, Args)]
pub struct MessageCommand {
    /// Commit type
    #[arg(short = 't', long = "type", value_name = "TYPE", value_parser = parse_commit_type)]
    pub commit_type: Option<CommitType>,

    /// Short description (at most 65 characters)
    #[arg(short, long)]
    pub summary: Option<String>,

    /// Changed files, comma separated
    #[arg(long)]
    pub files: Option<String>,

    /// Long description
    #[arg(long)]
    pub body: Option<String>,

    /// Print the message instead of committing
    #[arg(long)]
    pub dry_run: bool,

    /// Do not prompt; missing optional fields are left empty
    #[arg(short = 'y', long)]
    pub yes: bool,
}

impl MessageCommand {
    /// Execute the message command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(commit_type = ?self.commit_type, dry_run = self.dry_run, yes = self.yes, "executing message command");
        let cwd = cli.working_dir()?;
        let (config, _) = load_config_or_default(&cwd)?;

        let Some(message) = self.compose()? else {
            println!("{}", style("Aborted.").yellow());
            return Ok(());
        };
        let text = message.render();

        if self.dry_run || config.message.dry_run {
            match cli.format {
                OutputFormat::Json => println!(
                    "{}",
                    serde_json::json!({ "message": text, "commit": null })
                ),
                OutputFormat::Text => println!("{}", text),
            }
            return Ok(());
        }

        let repo = GitRepo::discover(&cwd)?;
        let hash = repo.commit_staged(&text)?;

        match cli.format {
            OutputFormat::Json => println!(
                "{}",
                serde_json::json!({ "message": text, "commit": hash })
            ),
            OutputFormat::Text => {
                if !cli.quiet {
                    output::success(&format!("[{}] {}", &hash[..7.min(hash.len())], text));
                }
            }
        }
        Ok(())
    }

    /// Build the message from flags, prompting for whatever is missing.
    ///
    /// Returns `None` when the user backs out of a prompt.
    fn compose(&self) -> anyhow::Result<Option<CommitMessage>> {
        let commit_type = match self.commit_type {
            Some(t) => t,
            None if self.yes => anyhow::bail!("--type is required with --yes"),
            None => match prompt_type()? {
                Some(t) => t,
                None => return Ok(None),
            },
        };

        let mut message = match &self.summary {
            Some(summary) => CommitMessage::new(commit_type, summary)?,
            None if self.yes => anyhow::bail!("--summary is required with --yes"),
            None => CommitMessage::new(commit_type, &prompt_summary()?)?,
        };

        let files = match &self.files {
            Some(files) => files.clone(),
            None if self.yes => String::new(),
            None => prompt_optional("Changed files, comma separated (Enter to skip)")?,
        };
        message = message.with_files_input(&files)?;

        let body = match &self.body {
            Some(body) => body.clone(),
            None if self.yes => String::new(),
            None => prompt_optional("Long description (Enter to skip)")?,
        };
        message = message.with_long_description(&body)?;

        Ok(Some(message))
    }
}

fn prompt_type() -> anyhow::Result<Option<CommitType>> {
    let items: Vec<String> = CommitType::ALL
        .iter()
        .map(|t| format!("{:<6} {}", t.as_str(), t.description()))
        .collect();

    let selection = Select::new()
        .with_prompt("Commit type")
        .items(&items)
        .default(0)
        .interact_opt()?;

    Ok(selection.map(|i| CommitType::ALL[i]))
}

fn prompt_summary() -> anyhow::Result<String> {
    let summary = Input::<String>::new()
        .with_prompt(format!(
            "Short description (at most {} characters)",
            MAX_SHORT_DESCRIPTION_LEN
        ))
        .validate_with(|text: &String| -> Result<(), String> {
            CommitMessage::check_short_description(text).map_err(|e| e.to_string())
        })
        .interact_text()?;
    Ok(summary)
}

fn prompt_optional(prompt: &str) -> anyhow::Result<String> {
    let text = Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    use crate::cli::Commands;

    fn command(args: &[&str]) -> MessageCommand {
        let mut argv = vec!["pcommit", "message"];
        argv.extend_from_slice(args);
        match Cli::try_parse_from(argv).unwrap().command {
            Commands::Message(cmd) => cmd,
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_compose_from_flags() {
        let cmd = command(&[
            "-y", "--type", "fix", "--summary", "bug", "--files", "a.go, b.go", "--body", "long text",
        ]);
        let message = cmd.compose().unwrap().unwrap();
        assert_eq!(message.render(), r"fix: bug\nFiles: a.go, b.go\nlong text");
    }

    #[test]
    fn test_compose_requires_type_with_yes() {
        let cmd = command(&["-y", "--summary", "bug"]);
        assert!(cmd.compose().is_err());
    }

    #[test]
    fn test_compose_rejects_long_summary() {
        let summary = "x".repeat(MAX_SHORT_DESCRIPTION_LEN + 1);
        let cmd = command(&["-y", "--type", "feat", "--summary", &summary]);
        let err = cmd.compose().unwrap_err();
        assert_eq!(crate::exit_codes::for_error(&err), crate::exit_codes::VALIDATION_ERROR);
    }

    #[test]
    fn test_parse_commit_type() {
        assert_eq!(parse_commit_type("ver"), Ok(CommitType::Ver));
        assert!(parse_commit_type("chore").unwrap_err().contains("init, fix, feat"));
    }
}
