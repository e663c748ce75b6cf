//! add command - Open a fresh pending entry

use anyhow::Result;

use super::Context;
use crate::news;
use crate::tree::FsTree;
use crate::ui::output;

/// Insert a pending entry for `version` ahead of the current leading entry.
pub fn add(ctx: &Context, version: &str) -> Result<()> {
    let mut tree = FsTree::new(&ctx.root);

    news::add_pending(&mut tree, &ctx.news_path, version)?;

    output::print(
        format!("Added pending entry for {version}"),
        ctx.verbosity,
    );
    Ok(())
}
