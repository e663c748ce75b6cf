//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--cwd <path>`: Run as if in that directory
//! - `--file <path>`: Use this NEWS file instead of the configured one
//! - `--debug`: Enable debug output
//! - `--quiet` / `-q`: Minimal output

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Newsworthy - A Rust-native CLI for maintaining NEWS files
#[derive(Parser, Debug)]
#[command(name = "news")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run as if news was started in this directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// NEWS file path, relative to the project root
    #[arg(long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the leading entry's release status
    #[command(
        name = "status",
        long_about = "Show the leading entry's release status.\n\n\
            Parses the first version entry of the NEWS file and reports \
            whether it is still pending (its version or date is UNRELEASED) \
            or already released."
    )]
    Status {
        /// Emit machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Mark the pending entry as released
    #[command(
        name = "release",
        long_about = "Mark the pending entry as released.\n\n\
            Stamps the given version and release date into the leading header \
            line, preserving its original layout, and prints the entry's \
            accumulated change notes to stdout.\n\n\
            Fails if the leading entry is already released, or if its version \
            does not match the one given here.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Stamp today's date on the pending 1.3.0 entry
    news release 1.3.0

    # Stamp an explicit date
    news release 1.3.0 --date 2024-05-01"
    )]
    Release {
        /// The version the pending entry is expected to carry
        version: String,

        /// Release date (defaults to today)
        #[arg(long, value_name = "YYYY-MM-DD")]
        date: Option<NaiveDate>,
    },

    /// Open a fresh pending entry for the next release
    #[command(
        name = "add",
        long_about = "Open a fresh pending entry for the next release.\n\n\
            Inserts '<version> UNRELEASED' and a blank line ahead of the \
            current leading entry. Fails if a pending entry already exists, \
            so two pending entries can never stack."
    )]
    Add {
        /// Version of the new pending entry
        version: String,
    },

    /// Check that the NEWS file parses
    #[command(
        name = "validate",
        long_about = "Check that the NEWS file parses.\n\n\
            Succeeds whether the leading entry is pending or released; fails \
            on a malformed version line or an unreadable file."
    )]
    Validate,

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    #[value(name = "powershell")]
    PowerShell,
}
