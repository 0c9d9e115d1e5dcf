//! Reading and writing the dependency manifest documents.
//!
//! A project has a direct manifest (by default `deps/inglued`) and, next to
//! it, a `.transitive` manifest holding hoisted dependencies. Both are JSON
//! objects mapping identity to entry:
//!
//! ```json
//! {
//!   "boostorg/fusion": { "@": "boost-1.66.0" },
//!   "acme/widgets": { "@": "v1.0", "-I": "include" }
//! }
//! ```

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::descriptor::Descriptor;
use crate::core::error::{GlueError, GlueResult};
use crate::core::registry::Registry;
use crate::util::fs::write_string;

/// Suffix appended to the direct manifest path for the transitive one.
pub const TRANSITIVE_SUFFIX: &str = ".transitive";

/// One entry of a manifest document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Tag, branch or commit.
    #[serde(rename = "@")]
    pub reference: String,

    /// Subdirectory to expose as include root. Giving both keys is an error.
    #[serde(
        rename = "-I",
        alias = "?",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub include_path: Option<String>,
}

impl ManifestEntry {
    fn into_descriptor(self, identity: String, transitive: bool) -> Descriptor {
        Descriptor::new(identity, self.reference)
            .with_include_path(self.include_path.unwrap_or_default())
            .with_transitive(transitive)
    }
}

impl From<&Descriptor> for ManifestEntry {
    fn from(desc: &Descriptor) -> Self {
        ManifestEntry {
            reference: desc.reference().to_string(),
            include_path: desc.include_path().map(str::to_string),
        }
    }
}

/// Path of the transitive manifest belonging to `path`.
pub fn transitive_path(path: &Path) -> PathBuf {
    let mut raw: OsString = path.as_os_str().to_owned();
    raw.push(TRANSITIVE_SUFFIX);
    PathBuf::from(raw)
}

/// Load the registry stored at `path` and its transitive sibling.
///
/// Entries of the direct document are direct dependencies. Entries of the
/// transitive document are merged as transitive and never replace a direct
/// entry with the same identity.
pub fn load(path: &Path) -> GlueResult<Registry> {
    let mut registry = Registry::new();

    for (identity, entry) in read_document(path)? {
        registry.insert(entry.into_descriptor(identity, false));
    }

    let transitive = transitive_path(path);
    if transitive.exists() {
        for (identity, entry) in read_document(&transitive)? {
            registry.merge_transitive(entry.into_descriptor(identity, true));
        }
    }

    tracing::debug!(
        "Loaded {} dependencies from {}",
        registry.len(),
        path.display()
    );

    Ok(registry)
}

/// Persist `registry` next to `path`.
///
/// The direct document is only rewritten when `write_direct` is set. The
/// transitive document is rewritten when at least one transitive entry
/// exists and left untouched otherwise.
pub fn save(path: &Path, registry: &Registry, write_direct: bool) -> GlueResult<()> {
    if write_direct {
        write_document(path, registry.direct())?;
    }

    if registry.has_transitive() {
        write_document(&transitive_path(path), registry.transitive())?;
    }

    Ok(())
}

fn read_document(path: &Path) -> GlueResult<BTreeMap<String, ManifestEntry>> {
    let contents =
        fs::read_to_string(path).map_err(|e| GlueError::invalid_manifest(path, e))?;

    serde_json::from_str(&contents).map_err(|e| GlueError::invalid_manifest(path, e))
}

fn write_document<'a>(
    path: &Path,
    descriptors: impl Iterator<Item = &'a Descriptor>,
) -> GlueResult<()> {
    let document: BTreeMap<&str, ManifestEntry> = descriptors
        .map(|d| (d.identity(), ManifestEntry::from(d)))
        .collect();

    let mut contents = serde_json::to_string_pretty(&document)
        .map_err(|e| GlueError::write_failure(path, io::Error::from(e)))?;
    contents.push('\n');

    write_string(path, &contents)
}
