//! # treknav-core - Core Domain Types
//!
//! Foundation crate for Trek Nav. Provides the navigation tree, routes,
//! the active-path resolver, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, toml, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Navigation Tree (`nav`)
//! - [`NavEntry`] - Authored menu entry (label, optional path, children)
//! - [`NavTree`] / [`NavNode`] - Built tree with synthetic [`EntryId`]s
//! - [`TreeWarning`] - Non-fatal authoring problems found by `NavTree::lint`
//!
//! ### Routes (`route`)
//! - [`Route`] - Current page location, matched by exact equality
//! - [`resolve_active()`] - Highlight status of each top-level entry
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use treknav_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod nav;
pub mod route;

/// Prelude for common imports used throughout all Trek Nav crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use nav::{EntryId, NavEntry, NavNode, NavTree, TreeWarning, MAX_VERIFIED_DEPTH};
pub use route::{active_top_level_ids, is_active, resolve_active, ActiveEntry, Route};
