//! cli
//!
//! Command-line interface layer for Newsworthy.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Resolve the NEWS file path (flag, then config, then default)
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap and dispatches to
//! handlers in [`commands`], which drive the [`crate::news`] operations
//! through a filesystem [`crate::tree::FsTree`].

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use std::path::PathBuf;

use anyhow::Result;

use crate::core::config::Config;
use crate::ui::output::Verbosity;

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let root = cli.cwd.clone().unwrap_or_else(|| PathBuf::from("."));
    let news_path = match &cli.file {
        Some(path) => path.clone(),
        None => Config::load(&root)?.news_file().to_path_buf(),
    };

    let ctx = commands::Context {
        root,
        news_path,
        verbosity: Verbosity::from_flags(cli.quiet, cli.debug),
    };

    commands::dispatch(cli.command, &ctx)
}
