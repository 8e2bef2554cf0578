//! Shell completion generation command.
//!
//! This module provides the `completions` command which generates shell completion
//! scripts for bash, zsh, fish, and PowerShell.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

/// Name of the installed binary.
const BIN_NAME: &str = "wishlist";

/// Generate shell completion scripts
#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        match self.shell {
            Shell::Bash => global.report(&format!(
                "# Install with: {BIN_NAME} completions bash > ~/.local/share/bash-completion/completions/{BIN_NAME}"
            )),
            Shell::Zsh => global.report(&format!(
                "# Install with: {BIN_NAME} completions zsh > ~/.zsh/completions/_{BIN_NAME}"
            )),
            Shell::Fish => global.report(&format!(
                "# Install with: {BIN_NAME} completions fish > ~/.config/fish/completions/{BIN_NAME}.fish"
            )),
            Shell::PowerShell => global.report(&format!(
                "# Install with: {BIN_NAME} completions powershell >> $PROFILE"
            )),
            _ => {}
        }

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());
        Ok(())
    }
}
