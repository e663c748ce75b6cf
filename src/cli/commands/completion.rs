//! completion command - Generate shell completion scripts

use crate::cli::args::{Cli, Shell};
use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{generate, shells};

/// Generate a completion script for `shell` on stdout.
pub fn completion(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(generator_for(shell), &mut cmd, name, &mut std::io::stdout());
    Ok(())
}

/// Map our CLI-facing shell choice onto its clap_complete generator.
fn generator_for(shell: Shell) -> shells::Shell {
    match shell {
        Shell::Bash => shells::Shell::Bash,
        Shell::Zsh => shells::Shell::Zsh,
        Shell::Fish => shells::Shell::Fish,
        Shell::PowerShell => shells::Shell::PowerShell,
    }
}
