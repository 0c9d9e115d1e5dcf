//! High-level operations.
//!
//! This module contains the implementation of inglued commands.

pub mod generate;
pub mod hoist;
pub mod list;
pub mod sync;

pub use generate::{emit_template_scaffold, generate};
pub use hoist::hoist;
pub use list::{format_list, list};
pub use sync::{sync, SyncSummary};
