//! Implementation of `inglued list`.

use std::fmt::Write;

use anyhow::Result;

use crate::core::{manifest, Registry};
use crate::util::config::Config;

/// Load the project's registry, direct and transitive.
pub fn list(config: &Config) -> Result<Registry> {
    Ok(manifest::load(&config.paths.manifest)?)
}

/// One line per dependency, in identity order.
pub fn format_list(registry: &Registry) -> String {
    let mut out = String::new();

    for desc in registry {
        let _ = write!(out, "{}", desc);
        if let Some(include) = desc.include_path() {
            let _ = write!(out, " -I {}", include);
        }
        if desc.is_transitive() {
            out.push_str(" (transitive)");
        }
        out.push('\n');
    }

    out
}
