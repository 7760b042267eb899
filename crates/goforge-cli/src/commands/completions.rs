// Shell completion generation

use std::io::{self, Write};

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use super::Command;
use crate::error::{CliError, CliResult};
use crate::router::Cli;

/// Print completions for one shell
pub struct CompletionsCommand {
    pub shell: String,
}

impl CompletionsCommand {
    pub fn new(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
        }
    }
}

impl Command for CompletionsCommand {
    fn execute(&self) -> CliResult<()> {
        generate_completions(&self.shell, &mut io::stdout())
    }
}

/// Write the completion script for `shell` into `out`
pub fn generate_completions(shell: &str, out: &mut dyn Write) -> CliResult<()> {
    let shell = match shell.to_lowercase().as_str() {
        "bash" => Shell::Bash,
        "zsh" => Shell::Zsh,
        "fish" => Shell::Fish,
        "powershell" | "pwsh" => Shell::PowerShell,
        "elvish" => Shell::Elvish,
        _ => return Err(CliError::UnknownShell(shell.to_string())),
    };

    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "goforge", out);
    Ok(())
}
