//! CMake package/target naming for dependencies.
//!
//! By default a dependency `org/name` is consumed as package `org` with
//! target `org::name`. Some projects publish under a different CMake name
//! than their hosting organization; the package map lists those exceptions.
//! Rules are checked in order and the first whose pattern matches the whole
//! identity wins, so more specific patterns must come first.

use regex::Regex;

use crate::core::{Descriptor, GlueError, GlueResult};
use crate::util::config::PackageMapEntry;

/// Built-in overrides, checked after the configured ones.
pub fn builtin_entries() -> Vec<PackageMapEntry> {
    vec![
        PackageMapEntry::new("boostorg/.*", "Boost", "Boost::boost"),
        PackageMapEntry::new("nlohmann/json", "nlohmann_json", "nlohmann_json"),
    ]
}

/// CMake names for one dependency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CMakeNames {
    pub package: String,
    pub target: String,
}

#[derive(Debug, Clone)]
struct PackageRule {
    regex: Regex,
    package: String,
    target: String,
}

/// Ordered list of naming overrides.
#[derive(Debug, Clone, Default)]
pub struct PackageMap {
    rules: Vec<PackageRule>,
}

impl PackageMap {
    /// Compile `entries` in order.
    pub fn new<'a>(entries: impl IntoIterator<Item = &'a PackageMapEntry>) -> GlueResult<Self> {
        let rules = entries
            .into_iter()
            .map(|entry| {
                let regex = Regex::new(&format!("^(?:{})$", entry.pattern)).map_err(|source| {
                    GlueError::InvalidPattern {
                        pattern: entry.pattern.clone(),
                        source,
                    }
                })?;
                Ok(PackageRule {
                    regex,
                    package: entry.package.clone(),
                    target: entry.target.clone(),
                })
            })
            .collect::<GlueResult<Vec<_>>>()?;

        Ok(PackageMap { rules })
    }

    /// Configured entries followed by the built-in ones.
    pub fn with_builtins(configured: &[PackageMapEntry]) -> GlueResult<Self> {
        let builtins = builtin_entries();
        Self::new(configured.iter().chain(builtins.iter()))
    }

    /// The first override matching `identity`, if any.
    pub fn lookup(&self, identity: &str) -> Option<CMakeNames> {
        self.rules
            .iter()
            .find(|rule| rule.regex.is_match(identity))
            .map(|rule| CMakeNames {
                package: rule.package.clone(),
                target: rule.target.clone(),
            })
    }

    /// CMake names for `desc`: an override, or `org` / `org::name`.
    pub fn names_for(&self, desc: &Descriptor) -> GlueResult<CMakeNames> {
        if let Some(names) = self.lookup(desc.identity()) {
            tracing::debug!(
                "{} mapped to CMake package {}",
                desc.identity(),
                names.package
            );
            return Ok(names);
        }

        let parsed = desc.names()?;
        Ok(CMakeNames {
            target: format!("{}::{}", parsed.organization_name, parsed.canonical_name),
            package: parsed.organization_name,
        })
    }
}
