//! Build-system file generation.
//!
//! Renders a CMake project file and a package-config stub from the resolved
//! dependency set.

pub mod cmakelists;
pub mod package_map;
pub mod templates;

pub use cmakelists::{
    emit_template_scaffold, generate, render, template_context, ProjectInfo, Rendered, Templates,
};
pub use package_map::{CMakeNames, PackageMap};
