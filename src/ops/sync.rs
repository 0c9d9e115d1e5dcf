//! Implementation of `inglued sync`, the default action.

use anyhow::Result;

use crate::core::manifest;
use crate::ops::hoist::hoist;
use crate::sources::Materializer;
use crate::util::GlobalContext;

/// What a sync did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncSummary {
    /// Direct dependencies
    pub direct: usize,

    /// Transitive dependencies after hoisting
    pub transitive: usize,

    /// Identities newly hoisted or refreshed by this run
    pub hoisted: Vec<String>,
}

/// Fetch or update every known dependency, then hoist their own
/// dependencies into the project.
///
/// Any failure aborts the run. The direct manifest is never rewritten.
pub fn sync(ctx: &GlobalContext, materializer: &mut impl Materializer) -> Result<SyncSummary> {
    let config = ctx.config();
    let mut registry = manifest::load(ctx.manifest_path())?;

    tracing::info!(
        "Syncing {} dependencies into {}",
        registry.len(),
        config.paths.deps_root.display()
    );

    for desc in registry.iter() {
        materializer.materialize(desc)?;
    }

    let hoisted = hoist(config, &mut registry, materializer)?;

    Ok(SyncSummary {
        direct: registry.direct().count(),
        transitive: registry.transitive().count(),
        hoisted,
    })
}
