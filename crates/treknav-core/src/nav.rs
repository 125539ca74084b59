//! # Navigation Tree Domain Types
//!
//! The static menu of the site, as authored ([`NavEntry`]) and as used at
//! runtime ([`NavTree`] of [`NavNode`]s).
//!
//! Authored entries carry no identity. When a tree is built every node gets
//! an [`EntryId`]: its index path from the root (`1.0.2` is the third child
//! of the first child of the second top-level entry). Ids are stable for the
//! lifetime of the tree and do not depend on labels, so two siblings that
//! share a label are still distinct.
//!
//! Nesting is unbounded. The flyout layout is only laid out for
//! [`MAX_VERIFIED_DEPTH`] levels; [`NavTree::lint`] reports anything deeper.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of nesting levels the menu layout has been checked against.
pub const MAX_VERIFIED_DEPTH: usize = 3;

// ============================================================================
// NavEntry
// ============================================================================

/// One authored node of the navigation menu.
///
/// Leaves carry a `path`; submenu triggers carry `children` and usually no
/// path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEntry {
    /// Display text
    pub label: String,

    /// Route target for leaf entries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Ordered child entries; empty for leaves
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavEntry>,
}

impl NavEntry {
    /// A leaf entry linking to `path`.
    pub fn leaf(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: Some(path.into()),
            children: Vec::new(),
        }
    }

    /// A submenu trigger with no route of its own.
    pub fn submenu(label: impl Into<String>, children: Vec<NavEntry>) -> Self {
        Self {
            label: label.into(),
            path: None,
            children,
        }
    }
}

// ============================================================================
// EntryId
// ============================================================================

/// Synthetic identity of a node: its index path from the root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(Vec<usize>);

impl EntryId {
    /// Id of the `index`-th top-level entry.
    pub fn root(index: usize) -> Self {
        Self(vec![index])
    }

    /// Build an id from a raw index path.
    pub fn from_indices(indices: impl Into<Vec<usize>>) -> Self {
        Self(indices.into())
    }

    /// Id of the `index`-th child of this entry.
    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }

    /// Id of the parent entry, `None` for top-level entries.
    pub fn parent(&self) -> Option<Self> {
        if self.0.len() <= 1 {
            return None;
        }
        Some(Self(self.0[..self.0.len() - 1].to_vec()))
    }

    /// Zero-based nesting depth (top-level entries are depth 0).
    pub fn depth(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, index) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{index}")?;
        }
        Ok(())
    }
}

// ============================================================================
// NavNode / NavTree
// ============================================================================

/// A node of a built [`NavTree`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavNode {
    pub id: EntryId,
    pub label: String,
    pub path: Option<String>,
    pub children: Vec<NavNode>,
}

impl NavNode {
    fn build(entry: NavEntry, id: EntryId) -> Self {
        let children = entry
            .children
            .into_iter()
            .enumerate()
            .map(|(i, child)| NavNode::build(child, id.child(i)))
            .collect();
        Self {
            id,
            label: entry.label,
            path: entry.path,
            children,
        }
    }

    pub fn depth(&self) -> usize {
        self.id.depth()
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Pre-order walk over this subtree, passing each node's depth.
    pub fn walk<F>(&self, f: &mut F)
    where
        F: FnMut(&NavNode, usize),
    {
        f(self, self.depth());
        for child in &self.children {
            child.walk(f);
        }
    }

    fn to_entry(&self) -> NavEntry {
        NavEntry {
            label: self.label.clone(),
            path: self.path.clone(),
            children: self.children.iter().map(NavNode::to_entry).collect(),
        }
    }
}

/// Immutable navigation tree with synthetic ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavTree {
    roots: Vec<NavNode>,
}

impl NavTree {
    pub fn new(entries: Vec<NavEntry>) -> Self {
        let roots = entries
            .into_iter()
            .enumerate()
            .map(|(i, entry)| NavNode::build(entry, EntryId::root(i)))
            .collect();
        Self { roots }
    }

    pub fn roots(&self) -> &[NavNode] {
        &self.roots
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Total number of nodes at every depth.
    pub fn len(&self) -> usize {
        let mut count = 0;
        self.walk(|_, _| count += 1);
        count
    }

    pub fn get(&self, id: &EntryId) -> Option<&NavNode> {
        let (first, rest) = id.indices().split_first()?;
        let mut node = self.roots.get(*first)?;
        for index in rest {
            node = node.children.get(*index)?;
        }
        Some(node)
    }

    pub fn parent_of(&self, id: &EntryId) -> Option<&NavNode> {
        self.get(&id.parent()?)
    }

    /// First top-level entry with the given label.
    pub fn find_top_level(&self, label: &str) -> Option<&NavNode> {
        self.roots.iter().find(|node| node.label == label)
    }

    /// First child of `parent` with the given label.
    pub fn find_child(&self, parent: &EntryId, label: &str) -> Option<&NavNode> {
        self.get(parent)?
            .children
            .iter()
            .find(|node| node.label == label)
    }

    /// First node, in pre-order, whose path equals `path` exactly.
    pub fn find_by_path(&self, path: &str) -> Option<&NavNode> {
        let mut found = None;
        self.walk(|node, _| {
            if found.is_none() && node.path.as_deref() == Some(path) {
                found = Some(node.id.clone());
            }
        });
        found.and_then(|id| self.get(&id))
    }

    /// Pre-order walk over the whole tree, passing each node's depth.
    pub fn walk<F>(&self, mut f: F)
    where
        F: FnMut(&NavNode, usize),
    {
        for root in &self.roots {
            root.walk(&mut f);
        }
    }

    /// Number of levels in the tree (0 for an empty tree).
    pub fn max_depth(&self) -> usize {
        let mut deepest = 0;
        self.walk(|_, depth| deepest = deepest.max(depth + 1));
        deepest
    }

    /// Convert back to authored entries (ids are dropped).
    pub fn to_entries(&self) -> Vec<NavEntry> {
        self.roots.iter().map(NavNode::to_entry).collect()
    }

    /// Report authoring mistakes. None of these stop the menu from working.
    pub fn lint(&self) -> Vec<TreeWarning> {
        let mut warnings = Vec::new();
        lint_siblings(&self.roots, &mut warnings);
        self.walk(|node, depth| {
            if node.label.trim().is_empty() {
                warnings.push(TreeWarning::EmptyLabel {
                    id: node.id.clone(),
                });
            }
            if node.is_leaf() && node.path.is_none() {
                warnings.push(TreeWarning::LeafWithoutPath {
                    id: node.id.clone(),
                    label: node.label.clone(),
                });
            }
            if node.has_children() && node.path.is_some() {
                warnings.push(TreeWarning::PathOnSubmenu {
                    id: node.id.clone(),
                    label: node.label.clone(),
                });
            }
            if depth == MAX_VERIFIED_DEPTH {
                warnings.push(TreeWarning::DeeperThanVerified {
                    id: node.id.clone(),
                    label: node.label.clone(),
                });
            }
        });
        warnings
    }
}

fn lint_siblings(nodes: &[NavNode], warnings: &mut Vec<TreeWarning>) {
    for (i, node) in nodes.iter().enumerate() {
        if nodes[..i].iter().any(|earlier| earlier.label == node.label) {
            warnings.push(TreeWarning::DuplicateSiblingLabel {
                id: node.id.clone(),
                label: node.label.clone(),
            });
        }
        lint_siblings(&node.children, warnings);
    }
}

/// Non-fatal problem found by [`NavTree::lint`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeWarning {
    EmptyLabel { id: EntryId },
    LeafWithoutPath { id: EntryId, label: String },
    PathOnSubmenu { id: EntryId, label: String },
    DuplicateSiblingLabel { id: EntryId, label: String },
    DeeperThanVerified { id: EntryId, label: String },
}

impl fmt::Display for TreeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeWarning::EmptyLabel { id } => write!(f, "entry {id} has an empty label"),
            TreeWarning::LeafWithoutPath { id, label } => {
                write!(f, "leaf entry {id} '{label}' has no path and cannot navigate")
            }
            TreeWarning::PathOnSubmenu { id, label } => write!(
                f,
                "entry {id} '{label}' has children, its path is never followed"
            ),
            TreeWarning::DuplicateSiblingLabel { id, label } => {
                write!(f, "entry {id} repeats sibling label '{label}'")
            }
            TreeWarning::DeeperThanVerified { id, label } => write!(
                f,
                "entry {id} '{label}' is nested deeper than {MAX_VERIFIED_DEPTH} levels"
            ),
        }
    }
}
