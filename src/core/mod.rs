//! Core data structures for inglued.
//!
//! This module contains the foundational types used throughout inglued:
//! - Dependency descriptors and identity naming
//! - The registry of direct and transitive dependencies
//! - Manifest (de)serialization
//! - Error kinds

pub mod descriptor;
pub mod error;
pub mod manifest;
pub mod registry;

pub use descriptor::{
    parse_identity, resolve_fetch_location, Descriptor, ParsedIdentity, DEFAULT_GIT_HOST,
};
pub use error::{GlueError, GlueResult};
pub use manifest::{transitive_path, ManifestEntry};
pub use registry::{MergeOutcome, Registry};
