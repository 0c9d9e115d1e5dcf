//! `inglued list` command

use anyhow::Result;

use super::GlobalOpts;
use inglued::ops::{format_list, list};

pub fn execute(opts: GlobalOpts) -> Result<()> {
    let ctx = opts.context()?;
    let registry = list(ctx.config())?;

    print!("{}", format_list(&registry));

    Ok(())
}
