//! Newsworthy binary entry point.

use std::process::ExitCode;

fn main() -> ExitCode {
    match newsworthy::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            newsworthy::ui::output::error(format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}
