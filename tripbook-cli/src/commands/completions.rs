//! Shell completion generation command.
//!
//! This module provides the `completions` command which generates shell completion
//! scripts for bash, zsh, fish, and PowerShell.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io;

/// Name of the installed binary.
const BIN_NAME: &str = "tripbook";

/// Generate shell completion scripts
#[derive(Parser)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        if !global.quiet {
            print_install_hints(self.shell);
        }

        generate(self.shell, &mut Cli::command(), BIN_NAME, &mut io::stdout());
        Ok(())
    }
}

/// Install instructions go to stderr so stdout stays a clean script.
fn print_install_hints(shell: Shell) {
    eprintln!("# Generating {shell} completion script");
    eprintln!("# Run the following command to enable completions:");

    match shell {
        Shell::Bash => {
            eprintln!("#   tripbook completions bash \\");
            eprintln!("#     > ~/.local/share/bash-completion/completions/tripbook");
            eprintln!("# Or source it directly in ~/.bashrc:");
            eprintln!("#   eval \"$(tripbook completions bash)\"");
        }
        Shell::Zsh => {
            eprintln!("#   tripbook completions zsh > ~/.zsh/completions/_tripbook");
            eprintln!("# Make sure ~/.zsh/completions is in your $fpath");
        }
        Shell::Fish => {
            eprintln!("#   tripbook completions fish > ~/.config/fish/completions/tripbook.fish");
        }
        Shell::PowerShell => {
            eprintln!("#   tripbook completions powershell | Out-String | Invoke-Expression");
        }
        _ => {}
    }

    eprintln!();
}
