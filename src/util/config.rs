//! Configuration file support for inglued.
//!
//! Every file location the tool reads or writes lives in [`Config`], so
//! tests (and unusual project layouts) can redirect them. Defaults match the
//! conventional layout:
//!
//! ```text
//! deps/inglued                      direct dependencies
//! deps/inglued.transitive           hoisted dependencies
//! deps/<name>/                      materialized dependency trees
//! CMakeLists.txt.tpl                optional build-file template
//! cmake/modules/Config.cmake.in.tpl optional package-config template
//! ```
//!
//! A project may override them in `.inglued/config.toml`:
//!
//! ```toml
//! [paths]
//! deps_root = "third_party"
//!
//! [git]
//! host = "gitlab.com"
//!
//! [[package_map]]
//! pattern = "fmtlib/fmt"
//! package = "fmt"
//! target = "fmt::fmt-header-only"
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::descriptor::DEFAULT_GIT_HOST;
use crate::util::fs::rooted;

/// Location of a project's own manifest, relative to its root.
///
/// This is also where the manifest of each materialized dependency is
/// looked up, relative to the dependency's directory.
pub const MANIFEST_PATH: &str = "deps/inglued";

/// Directory holding materialized dependencies.
pub const DEPS_ROOT: &str = "deps";

pub const CMAKELISTS_TPL_PATH: &str = "CMakeLists.txt.tpl";
pub const CMAKE_PACKAGE_CONFIG_TPL_PATH: &str = "cmake/modules/Config.cmake.in.tpl";
pub const CMAKELISTS_PATH: &str = "CMakeLists.txt";
pub const CMAKE_PACKAGE_CONFIG_PATH: &str = "cmake/modules/Config.cmake.in";

/// inglued configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// File locations
    pub paths: PathsConfig,

    /// Version-control settings
    pub git: GitConfig,

    /// Package-name overrides, checked before the built-in ones
    pub package_map: Vec<PackageMapEntry>,
}

/// File locations, relative to the project root unless absolute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Direct manifest; the transitive one sits next to it
    pub manifest: PathBuf,

    /// Where dependencies are materialized
    pub deps_root: PathBuf,

    pub cmakelists_template: PathBuf,
    pub package_config_template: PathBuf,
    pub cmakelists: PathBuf,
    pub package_config: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        PathsConfig {
            manifest: PathBuf::from(MANIFEST_PATH),
            deps_root: PathBuf::from(DEPS_ROOT),
            cmakelists_template: PathBuf::from(CMAKELISTS_TPL_PATH),
            package_config_template: PathBuf::from(CMAKE_PACKAGE_CONFIG_TPL_PATH),
            cmakelists: PathBuf::from(CMAKELISTS_PATH),
            package_config: PathBuf::from(CMAKE_PACKAGE_CONFIG_PATH),
        }
    }
}

/// Version-control settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitConfig {
    /// Host used to expand `org/name` shorthands
    pub host: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        GitConfig {
            host: DEFAULT_GIT_HOST.to_string(),
        }
    }
}

/// A package-name override: identities matching `pattern` (a regex that
/// must match the whole identity) use `package` and `target` in CMake.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageMapEntry {
    pub pattern: String,
    pub package: String,
    pub target: String,
}

impl PackageMapEntry {
    pub fn new(
        pattern: impl Into<String>,
        package: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        PackageMapEntry {
            pattern: pattern.into(),
            package: package.into(),
            target: target.into(),
        }
    }
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration, or defaults if the file doesn't exist.
    ///
    /// A file that exists but cannot be read or parsed is an error.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Resolve every relative path against `root`.
    pub fn rooted(mut self, root: &Path) -> Self {
        let paths = &mut self.paths;
        for path in [
            &mut paths.manifest,
            &mut paths.deps_root,
            &mut paths.cmakelists_template,
            &mut paths.package_config_template,
            &mut paths.cmakelists,
            &mut paths.package_config,
        ] {
            *path = rooted(root, path);
        }
        self
    }

    /// Directory a dependency is materialized into.
    pub fn dependency_dir(&self, canonical_name: &str) -> PathBuf {
        self.paths.deps_root.join(canonical_name)
    }

    /// Where a materialized dependency keeps its own manifest.
    pub fn dependency_manifest(&self, canonical_name: &str) -> PathBuf {
        self.dependency_dir(canonical_name).join(MANIFEST_PATH)
    }
}

/// Get the project config path (.inglued/config.toml).
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(".inglued").join("config.toml")
}
