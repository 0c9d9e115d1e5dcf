//! inglued - source-level dependency manager for header-only C++ libraries
//!
//! This crate provides the library side of inglued: the dependency registry
//! and its manifest documents, transitive hoisting, git subtree
//! materialization and CMake file generation.

pub mod builder;
pub mod core;
pub mod ops;
pub mod sources;
pub mod util;

/// Test utilities and mocks for inglued unit tests.
///
/// This module is only available when compiling with `--cfg test` or
/// running tests.
#[cfg(test)]
pub mod test_support;

pub use core::{Descriptor, GlueError, GlueResult, Registry};
pub use util::context::GlobalContext;
