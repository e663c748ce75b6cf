//! validate command - Check that the NEWS file parses

use anyhow::Result;

use super::Context;
use crate::news;
use crate::tree::FsTree;
use crate::ui::output;

/// Check the NEWS file's leading entry; pending and released both pass.
pub fn validate(ctx: &Context) -> Result<()> {
    let tree = FsTree::new(&ctx.root);

    news::validate(&tree, &ctx.news_path)?;

    output::print(
        format!("{}: OK", ctx.news_path.display()),
        ctx.verbosity,
    );
    Ok(())
}
