//! Check command - validate a single commit message

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use pcommit_changelog::{parse, MAX_SHORT_DESCRIPTION_LEN};
use pcommit_core::ChangelogError;

use crate::cli::{output, Cli, OutputFormat};

/// Check that a commit message follows the convention
#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Message to check
    #[arg(conflicts_with = "file", required_unless_present = "file")]
    pub message: Option<String>,

    /// Read the message from a file, as a commit-msg hook receives it
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

/// First line of a commit message file that is not a git comment
fn first_message_line(content: &str) -> &str {
    content
        .lines()
        .map(|l| l.trim_end_matches('\r'))
        .find(|l| !l.starts_with('#') && !l.trim().is_empty())
        .unwrap_or("")
}

impl CheckCommand {
    /// Execute the check command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(file = ?self.file, "executing check command");
        let content = match (&self.message, &self.file) {
            (Some(message), _) => message.clone(),
            (None, Some(path)) => std::fs::read_to_string(cli.working_dir()?.join(path))?,
            (None, None) => anyhow::bail!("No message given"),
        };
        let line = first_message_line(&content);

        let record = parse(line).map_err(|e| ChangelogError::UnknownCommit {
            line: line.to_string(),
            reason: e.to_string(),
        })?;

        match cli.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&record)?),
            OutputFormat::Text => {
                if !cli.quiet {
                    output::success("Commit message follows the convention");
                    println!("{}", output::key_value("type", record.commit_type.as_str()));
                    println!("{}", output::key_value("short description", &record.short_description));
                    if !record.files.is_empty() {
                        println!("{}", output::key_value("files", &record.files.join(", ")));
                    }
                    if !record.long_description.is_empty() {
                        println!("{}", output::key_value("long description", &record.long_description));
                    }
                }
            }
        }

        let len = record.short_description.chars().count();
        if len > MAX_SHORT_DESCRIPTION_LEN && !cli.quiet {
            output::warning(&format!(
                "Short description is {} characters; keep it within {}",
                len, MAX_SHORT_DESCRIPTION_LEN
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_message_line_skips_comments() {
        let content = "# Please enter the commit message\n\nfeat: add thing\n# trailing\n";
        assert_eq!(first_message_line(content), "feat: add thing");
    }

    #[test]
    fn test_first_message_line_empty() {
        assert_eq!(first_message_line("# only comments\n"), "");
    }
}
