//! Routes and the active-path resolver
//!
//! A [`Route`] is the current page location. Matching is exact string
//! equality: `/destination` does not match `/destination/nepal`, and no
//! trailing-slash or parameter normalisation is applied.
//!
//! Only top-level entries that carry their own path are ever highlighted.
//! Entries nested under a submenu are never reported active, even when
//! their path is the current route.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::nav::{EntryId, NavNode, NavTree};

/// The current page location.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Route(String);

impl Route {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Route {
    fn default() -> Self {
        Self("/".to_string())
    }
}

impl From<&str> for Route {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for Route {
    fn from(path: String) -> Self {
        Self(path)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Highlight status of one top-level entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveEntry {
    pub id: EntryId,
    pub active: bool,
}

/// Whether `node` is highlighted for `route`.
pub fn is_active(node: &NavNode, route: &Route) -> bool {
    node.path.as_deref() == Some(route.as_str())
}

/// One [`ActiveEntry`] per top-level entry, in tree order.
pub fn resolve_active(tree: &NavTree, route: &Route) -> Vec<ActiveEntry> {
    tree.roots()
        .iter()
        .map(|node| ActiveEntry {
            id: node.id.clone(),
            active: is_active(node, route),
        })
        .collect()
}

/// Ids of the top-level entries highlighted for `route`.
pub fn active_top_level_ids(tree: &NavTree, route: &Route) -> Vec<EntryId> {
    resolve_active(tree, route)
        .into_iter()
        .filter(|entry| entry.active)
        .map(|entry| entry.id)
        .collect()
}
