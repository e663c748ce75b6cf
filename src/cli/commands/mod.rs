//! cli::commands
//!
//! Command handlers.
//!
//! Each subcommand has its own module; `dispatch` routes a parsed
//! [`Command`] to its handler. Handlers build an [`FsTree`] rooted at the
//! project directory and drive the [`crate::news`] operations through it.

pub mod add;
pub mod completion;
pub mod release;
pub mod status;
pub mod validate;

use std::path::PathBuf;

use anyhow::Result;

use crate::cli::args::Command;
use crate::ui::output::Verbosity;

/// Execution context shared by all command handlers.
#[derive(Debug, Clone)]
pub struct Context {
    /// Project root directory (from `--cwd`, default `.`).
    pub root: PathBuf,
    /// NEWS file path relative to the root (from `--file`, config, or the
    /// `NEWS` default).
    pub news_path: PathBuf,
    /// Output verbosity derived from `--quiet`/`--debug`.
    pub verbosity: Verbosity,
}

/// Dispatch a parsed command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Status { json } => status::status(ctx, json),
        Command::Release { version, date } => release::release(ctx, &version, date),
        Command::Add { version } => add::add(ctx, &version),
        Command::Validate => validate::validate(ctx),
        Command::Completion { shell } => completion::completion(shell),
    }
}
