//! Test utilities and mocks for inglued unit tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use inglued::test_support::MockMaterializer;
//!
//! let mut mat = MockMaterializer::new(&deps_root);
//! mat.publish("acme/widgets", r#"{"foo/bar": {"@": "main"}}"#);
//! mat.fail_on("broken/dep");
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::core::{Descriptor, GlueError, GlueResult};
use crate::sources::Materializer;
use crate::util::config::MANIFEST_PATH;
use crate::util::fs::{ensure_dir, write_string};

/// Mock materializer for testing fetch sequencing without git.
///
/// Records every descriptor it is asked to materialize. A successful call
/// creates the dependency directory under the deps root and, when a manifest
/// was published for the identity, writes it where hoisting looks for it.
#[derive(Debug, Default)]
pub struct MockMaterializer {
    deps_root: PathBuf,
    manifests: HashMap<String, String>,
    failures: Vec<String>,
    calls: Vec<Descriptor>,
}

impl MockMaterializer {
    /// Create a mock that materializes into `deps_root`.
    pub fn new(deps_root: &Path) -> Self {
        MockMaterializer {
            deps_root: deps_root.to_path_buf(),
            ..Default::default()
        }
    }

    /// Make `identity` ship `manifest` as its own dependency manifest.
    pub fn publish(&mut self, identity: &str, manifest: &str) -> &mut Self {
        self.manifests
            .insert(identity.to_string(), manifest.to_string());
        self
    }

    /// Make materialization of `identity` fail.
    pub fn fail_on(&mut self, identity: &str) -> &mut Self {
        self.failures.push(identity.to_string());
        self
    }

    /// Every descriptor materialized so far, in call order.
    pub fn calls(&self) -> &[Descriptor] {
        &self.calls
    }

    /// Identities materialized so far, in call order.
    pub fn identities(&self) -> Vec<&str> {
        self.calls.iter().map(|d| d.identity()).collect()
    }
}

impl Materializer for MockMaterializer {
    fn materialize(&mut self, desc: &Descriptor) -> GlueResult<()> {
        self.calls.push(desc.clone());

        if self.failures.iter().any(|f| f == desc.identity()) {
            return Err(GlueError::MaterializationFailure {
                identity: desc.identity().to_string(),
                detail: "working tree has modifications".to_string(),
            });
        }

        let dir = self.deps_root.join(desc.canonical_name()?);
        ensure_dir(&dir)?;

        if let Some(manifest) = self.manifests.get(desc.identity()) {
            write_string(&dir.join(MANIFEST_PATH), manifest)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_mock_materializer_records_and_publishes() {
        let tmp = TempDir::new().unwrap();
        let mut mat = MockMaterializer::new(tmp.path());
        mat.publish("acme/widgets", "{}").fail_on("broken/dep");

        mat.materialize(&Descriptor::new("acme/widgets", "v1")).unwrap();
        assert!(tmp.path().join("widgets/deps/inglued").exists());

        let err = mat
            .materialize(&Descriptor::new("broken/dep", "v1"))
            .unwrap_err();
        assert!(matches!(err, GlueError::MaterializationFailure { .. }));
        assert_eq!(mat.identities(), vec!["acme/widgets", "broken/dep"]);
    }
}
