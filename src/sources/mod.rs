//! Dependency materialization.
//!
//! A materializer is responsible for putting a dependency's files into the
//! project tree (and refreshing them when the reference moves).

pub mod materializer;
pub mod subtree;

pub use materializer::Materializer;
pub use subtree::{GitSubtree, SubtreeAction};
