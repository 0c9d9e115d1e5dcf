//! Implementation of `inglued cmake` and `inglued cmaketpl`.

use std::path::PathBuf;

use anyhow::Result;

use crate::builder::{self, ProjectInfo};
use crate::core::manifest;
use crate::util::config::Config;
use crate::util::GlobalContext;

/// Render CMakeLists.txt and the package-config stub from the project's
/// registry. Returns the written paths.
pub fn generate(ctx: &GlobalContext, project: &ProjectInfo) -> Result<Vec<PathBuf>> {
    let registry = manifest::load(ctx.manifest_path())?;
    tracing::debug!(
        "Generating for {}::{} with {} dependencies",
        project.org,
        project.project,
        registry.len()
    );

    Ok(builder::generate(ctx.config(), project, &registry)?)
}

/// Write editable copies of the built-in templates. Returns the written paths.
pub fn emit_template_scaffold(config: &Config) -> Result<Vec<PathBuf>> {
    Ok(builder::emit_template_scaffold(config)?)
}
