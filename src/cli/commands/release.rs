//! release command - Mark the pending entry as released

use anyhow::Result;
use chrono::NaiveDate;

use super::Context;
use crate::news;
use crate::tree::FsTree;
use crate::ui::output;

/// Stamp the pending entry with `version` and a release date, printing the
/// collected change notes to stdout.
pub fn release(ctx: &Context, version: &str, date: Option<NaiveDate>) -> Result<()> {
    let mut tree = FsTree::new(&ctx.root);
    let date = date.unwrap_or_else(|| chrono::Local::now().date_naive());

    let notes = news::mark_released(&mut tree, &ctx.news_path, version, date)?;

    output::print(
        format!("Marked {version} as released on {}", date.format("%Y-%m-%d")),
        ctx.verbosity,
    );
    if notes.trim().is_empty() {
        output::warn("released entry has no change notes", ctx.verbosity);
    } else {
        // The notes are the command's payload; emit them even under --quiet
        // so scripts can capture them.
        print!("{notes}");
    }

    Ok(())
}
