//! `inglued cmake` command

use anyhow::Result;

use super::{shell, GlobalOpts};
use crate::cli::CmakeArgs;
use inglued::builder::ProjectInfo;
use inglued::ops::generate;
use inglued::util::Status;

pub fn execute(args: CmakeArgs, opts: GlobalOpts) -> Result<()> {
    let ctx = opts.context()?;
    let shell = shell(&ctx);

    let srcs = args.srcs.unwrap_or_else(|| args.project.clone());
    let project = ProjectInfo::new(args.org, args.project, srcs);

    for path in generate(&ctx, &project)? {
        let shown = path.strip_prefix(ctx.root()).unwrap_or(&path);
        shell.status(Status::Generated, shown.display());
    }

    Ok(())
}
