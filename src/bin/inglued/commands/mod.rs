//! Command implementations

pub mod cmake;
pub mod cmaketpl;
pub mod completions;
pub mod list;
pub mod sync;

use anyhow::Result;

use inglued::util::shell::{Shell, Verbosity};
use inglued::util::GlobalContext;

/// Flags shared by every command.
#[derive(Debug, Clone, Copy)]
pub struct GlobalOpts {
    pub verbose: bool,
    pub color: bool,
}

impl GlobalOpts {
    /// Context for the current directory.
    pub fn context(&self) -> Result<GlobalContext> {
        let mut ctx = GlobalContext::new()?;
        ctx.set_verbose(self.verbose);
        ctx.set_color(self.color);
        Ok(ctx)
    }
}

/// Console output matching the context's preferences.
pub fn shell(ctx: &GlobalContext) -> Shell {
    let verbosity = if ctx.verbose() {
        Verbosity::Verbose
    } else {
        Verbosity::Normal
    };
    Shell::new(verbosity, ctx.color())
}
