//! status command - Show the leading entry's release status

use anyhow::Result;
use serde_json::json;

use super::Context;
use crate::news::{self, PendingStatus};
use crate::tree::FsTree;
use crate::ui::output;

/// Show whether the leading NEWS entry is pending or released.
pub fn status(ctx: &Context, json_output: bool) -> Result<()> {
    let tree = FsTree::new(&ctx.root);
    output::debug(
        format!("reading {}", ctx.news_path.display()),
        ctx.verbosity,
    );

    let status = news::pending_status(&tree, &ctx.news_path)?;

    if json_output {
        let report = match &status {
            PendingStatus::Pending(version) => json!({
                "status": "pending",
                "version": version,
            }),
            PendingStatus::Released => json!({
                "status": "released",
            }),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    match status {
        PendingStatus::Pending(version) => {
            output::print(format!("{version} (pending release)"), ctx.verbosity);
        }
        PendingStatus::Released => {
            output::print("no unreleased changes", ctx.verbosity);
        }
    }

    Ok(())
}
