//! `inglued cmaketpl` command

use anyhow::Result;

use super::{shell, GlobalOpts};
use inglued::ops::emit_template_scaffold;
use inglued::util::Status;

pub fn execute(opts: GlobalOpts) -> Result<()> {
    let ctx = opts.context()?;
    let shell = shell(&ctx);

    for path in emit_template_scaffold(ctx.config())? {
        let shown = path.strip_prefix(ctx.root()).unwrap_or(&path);
        shell.status(Status::Created, shown.display());
    }

    Ok(())
}
