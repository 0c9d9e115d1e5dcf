//! Hoisting of second-order dependencies.

use crate::core::{manifest, GlueResult, MergeOutcome, Registry};
use crate::sources::Materializer;
use crate::util::config::Config;

/// Fold the dependencies declared by each entry of `registry` into it as
/// transitive entries, persist them, then materialize every entry.
///
/// Only the entries present on entry are inspected, so hoisting walks
/// exactly one level and terminates on cyclic declarations. A dependency
/// without a manifest contributes nothing. Direct entries are never
/// replaced; among transitive ones the last discovery wins.
///
/// Returns the identities added or refreshed, in discovery order.
pub fn hoist(
    config: &Config,
    registry: &mut Registry,
    materializer: &mut impl Materializer,
) -> GlueResult<Vec<String>> {
    let snapshot: Vec<_> = registry.iter().cloned().collect();
    let mut hoisted = Vec::new();

    for desc in &snapshot {
        let sub_manifest = config.dependency_manifest(&desc.canonical_name()?);
        if !sub_manifest.exists() {
            tracing::debug!("{} declares no dependencies", desc.identity());
            continue;
        }

        for found in manifest::load(&sub_manifest)? {
            let identity = found.identity().to_string();
            match registry.merge_transitive(found) {
                MergeOutcome::Added | MergeOutcome::Refreshed => {
                    tracing::debug!("hoisted {} from {}", identity, desc.identity());
                    hoisted.retain(|h| h != &identity);
                    hoisted.push(identity);
                }
                MergeOutcome::Shadowed => {
                    tracing::debug!("{} is a direct dependency, not hoisted", identity);
                }
            }
        }
    }

    manifest::save(&config.paths.manifest, registry, false)?;

    for desc in registry.iter() {
        materializer.materialize(desc)?;
    }

    Ok(hoisted)
}
