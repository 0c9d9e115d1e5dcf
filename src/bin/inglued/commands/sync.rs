//! `inglued` / `inglued sync` command

use anyhow::Result;

use super::{shell, GlobalOpts};
use inglued::ops::sync;
use inglued::sources::GitSubtree;
use inglued::util::Status;

pub fn execute(opts: GlobalOpts) -> Result<()> {
    let ctx = opts.context()?;
    let shell = shell(&ctx);

    let mut git = GitSubtree::new(ctx.root(), ctx.config(), shell.clone())?;
    let summary = sync(&ctx, &mut git)?;

    for identity in &summary.hoisted {
        shell.status(Status::Hoisted, identity);
    }
    shell.status(
        Status::Finished,
        format!(
            "{} direct, {} transitive dependencies",
            summary.direct, summary.transitive
        ),
    );

    Ok(())
}
