//! Flattened rows of the mobile accordion
//!
//! The accordion shows the tree vertically. Whether a branch is expanded
//! comes from the same [`MenuUiState`] the desktop flyouts use: depth 0 from
//! `open_top`, depth 1 from `open_sub`. There is no state for deeper
//! branches, so they are always shown expanded.

use treknav_core::{EntryId, NavNode, NavTree};

use crate::state::MenuUiState;

/// What a row does when activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowKind {
    /// Has children; toggles its submenu
    Branch { expanded: bool },
    /// Leaf; navigates to `path` when it has one
    Link { path: Option<String> },
}

/// One visible line of the accordion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccordionRow {
    pub id: EntryId,
    pub label: String,
    pub depth: usize,
    pub kind: RowKind,
}

impl AccordionRow {
    pub fn is_branch(&self) -> bool {
        matches!(self.kind, RowKind::Branch { .. })
    }

    pub fn is_expanded(&self) -> bool {
        matches!(self.kind, RowKind::Branch { expanded: true })
    }
}

/// Whether `node`'s children are visible in the accordion.
pub fn is_expanded(node: &NavNode, menu: &MenuUiState) -> bool {
    match node.depth() {
        0 => menu.open_top.as_ref() == Some(&node.id),
        1 => menu.open_sub.as_ref() == Some(&node.id),
        _ => true,
    }
}

/// Visible rows, in display order.
pub fn accordion_rows(tree: &NavTree, menu: &MenuUiState) -> Vec<AccordionRow> {
    let mut rows = Vec::new();
    push_rows(tree.roots(), menu, &mut rows);
    rows
}

fn push_rows(nodes: &[NavNode], menu: &MenuUiState, rows: &mut Vec<AccordionRow>) {
    for node in nodes {
        let kind = if node.has_children() {
            RowKind::Branch {
                expanded: is_expanded(node, menu),
            }
        } else {
            RowKind::Link {
                path: node.path.clone(),
            }
        };
        let expanded = matches!(kind, RowKind::Branch { expanded: true });

        rows.push(AccordionRow {
            id: node.id.clone(),
            label: node.label.clone(),
            depth: node.depth(),
            kind,
        });

        if expanded {
            push_rows(&node.children, menu, rows);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use treknav_core::NavEntry;

    fn tree() -> NavTree {
        NavTree::new(vec![
            NavEntry::leaf("Home", "/"),
            NavEntry::submenu(
                "Destination",
                vec![
                    NavEntry::submenu(
                        "Nepal",
                        vec![NavEntry::leaf("Everest", "/destination/nepal/everest")],
                    ),
                    NavEntry::leaf("Tibet", "/destination/tibet"),
                ],
            ),
        ])
    }

    fn labels(rows: &[AccordionRow]) -> Vec<(&str, usize)> {
        rows.iter().map(|r| (r.label.as_str(), r.depth)).collect()
    }

    #[test]
    fn test_collapsed_shows_top_level_only() {
        let rows = accordion_rows(&tree(), &MenuUiState::new());
        assert_eq!(labels(&rows), vec![("Home", 0), ("Destination", 0)]);
        assert_eq!(rows[1].kind, RowKind::Branch { expanded: false });
    }

    #[test]
    fn test_open_top_reveals_children() {
        let mut menu = MenuUiState::new();
        menu.toggle_top_level(&EntryId::root(1));

        let rows = accordion_rows(&tree(), &menu);
        assert_eq!(
            labels(&rows),
            vec![("Home", 0), ("Destination", 0), ("Nepal", 1), ("Tibet", 1)]
        );
        assert!(rows[1].is_expanded());
        assert!(!rows[2].is_expanded());
    }

    #[test]
    fn test_open_sub_reveals_grandchildren_with_deeper_indent() {
        let mut menu = MenuUiState::new();
        menu.toggle_top_level(&EntryId::root(1));
        menu.toggle_sub_level(&EntryId::from_indices([1, 0]));

        let rows = accordion_rows(&tree(), &menu);
        assert_eq!(
            labels(&rows),
            vec![
                ("Home", 0),
                ("Destination", 0),
                ("Nepal", 1),
                ("Everest", 2),
                ("Tibet", 1)
            ]
        );
        assert_eq!(
            rows[3].kind,
            RowKind::Link {
                path: Some("/destination/nepal/everest".to_string())
            }
        );
    }

    #[test]
    fn test_branches_below_second_level_are_always_expanded() {
        let tree = NavTree::new(vec![NavEntry::submenu(
            "A",
            vec![NavEntry::submenu(
                "B",
                vec![NavEntry::submenu("C", vec![NavEntry::leaf("D", "/d")])],
            )],
        )]);
        let mut menu = MenuUiState::new();
        menu.toggle_top_level(&EntryId::root(0));
        menu.toggle_sub_level(&EntryId::from_indices([0, 0]));

        let rows = accordion_rows(&tree, &menu);
        assert_eq!(labels(&rows), vec![("A", 0), ("B", 1), ("C", 2), ("D", 3)]);
        assert!(rows[2].is_expanded());
    }
}
