//! Shell completion scripts for pcommit

use std::path::PathBuf;

use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use tracing::info;

use crate::cli::{output, Cli};

/// Print a completion script for the given shell
#[derive(Debug, Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,

    /// Write the script to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl CompletionsCommand {
    /// Execute the completions command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(shell = %self.shell, "generating completions");
        let mut cmd = Cli::command();

        match &self.output {
            Some(path) => {
                let path = cli.working_dir()?.join(path);
                let mut file = std::fs::File::create(&path)?;
                generate(self.shell, &mut cmd, "pcommit", &mut file);
                if !cli.quiet {
                    output::success(&format!("Completions written to {}", path.display()));
                }
            }
            None => generate(self.shell, &mut cmd, "pcommit", &mut std::io::stdout()),
        }

        Ok(())
    }
}
