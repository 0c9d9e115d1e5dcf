//! The set of dependencies known to a project.

use std::collections::BTreeMap;

use crate::core::descriptor::Descriptor;

/// What happened when a transitive descriptor was merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The identity was unknown and has been added.
    Added,
    /// A previous transitive declaration was replaced.
    Refreshed,
    /// A direct declaration exists and was kept.
    Shadowed,
}

/// All descriptors of a project, keyed by identity.
///
/// At most one descriptor exists per identity. Direct declarations always
/// take precedence over transitive ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    entries: BTreeMap<String, Descriptor>,
}

impl Registry {
    pub fn new() -> Self {
        Registry::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, identity: &str) -> Option<&Descriptor> {
        self.entries.get(identity)
    }

    pub fn contains(&self, identity: &str) -> bool {
        self.entries.contains_key(identity)
    }

    /// Iterate over descriptors in identity order.
    pub fn iter(&self) -> impl Iterator<Item = &Descriptor> {
        self.entries.values()
    }

    pub fn direct(&self) -> impl Iterator<Item = &Descriptor> {
        self.iter().filter(|d| !d.is_transitive())
    }

    pub fn transitive(&self) -> impl Iterator<Item = &Descriptor> {
        self.iter().filter(|d| d.is_transitive())
    }

    pub fn has_transitive(&self) -> bool {
        self.transitive().next().is_some()
    }

    /// Insert a descriptor, replacing whatever was stored for its identity.
    pub fn insert(&mut self, desc: Descriptor) -> Option<Descriptor> {
        self.entries.insert(desc.identity().to_string(), desc)
    }

    /// Merge a descriptor discovered through another dependency.
    ///
    /// The descriptor is marked transitive. It is added when the identity is
    /// unknown, replaces an existing transitive entry (last discovery wins),
    /// and never replaces a direct entry.
    pub fn merge_transitive(&mut self, mut desc: Descriptor) -> MergeOutcome {
        desc.set_transitive(true);

        match self.entries.get(desc.identity()) {
            Some(existing) if !existing.is_transitive() => MergeOutcome::Shadowed,
            Some(_) => {
                self.insert(desc);
                MergeOutcome::Refreshed
            }
            None => {
                self.insert(desc);
                MergeOutcome::Added
            }
        }
    }
}

impl FromIterator<Descriptor> for Registry {
    fn from_iter<I: IntoIterator<Item = Descriptor>>(iter: I) -> Self {
        let mut registry = Registry::new();
        for desc in iter {
            registry.insert(desc);
        }
        registry
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Descriptor;
    type IntoIter = std::collections::btree_map::Values<'a, String, Descriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}

impl IntoIterator for Registry {
    type Item = Descriptor;
    type IntoIter = std::collections::btree_map::IntoValues<String, Descriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_values()
    }
}
