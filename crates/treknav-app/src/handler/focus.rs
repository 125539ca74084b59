//! Keyboard cursor movement and activation
//!
//! The cursor lives in [`MenuFocus`](crate::state::MenuFocus). On the desktop
//! it walks three columns (bar, flyout, side flyout); on mobile it walks the
//! visible accordion rows. Activating an entry produces the same messages a
//! mouse click would.

use std::sync::Arc;

use treknav_core::NavNode;

use crate::accordion::RowKind;
use crate::message::Message;
use crate::state::{AppState, FocusColumn, Presentation};

use super::UpdateResult;

/// Move the cursor by `delta` within its current column
pub fn move_focus(state: &mut AppState, delta: isize) -> UpdateResult {
    match state.presentation {
        Presentation::Mobile => {
            let len = state.accordion_rows().len();
            state.focus.row = step(state.focus.row, len, delta);
        }
        Presentation::Desktop => match state.focus.column {
            FocusColumn::Bar => {
                let tree = Arc::clone(&state.tree);
                state.focus.bar = step(state.focus.bar, tree.roots().len(), delta);

                // With a flyout already open, moving along the bar follows
                // the cursor like a desktop menu bar does
                if state.menu.open_top.is_some() {
                    match tree.roots().get(state.focus.bar) {
                        Some(node) if node.has_children() => {
                            if !state.menu.is_top_open(&node.id) {
                                state.menu.toggle_top_level(&node.id);
                            }
                        }
                        _ => state.menu.close_flyouts(),
                    }
                }
            }
            FocusColumn::Flyout => {
                let len = state.flyout_items().len();
                state.focus.flyout = step(state.focus.flyout, len, delta);
            }
            FocusColumn::Side => {
                let len = state.side_items().len();
                state.focus.side = step(state.focus.side, len, delta);
            }
        },
    }
    UpdateResult::none()
}

/// Move one column deeper, opening the side flyout if needed
pub fn focus_in(state: &mut AppState) -> UpdateResult {
    if state.presentation != Presentation::Desktop {
        return UpdateResult::none();
    }

    match state.focus.column {
        FocusColumn::Bar => {
            if !state.flyout_items().is_empty() {
                state.focus.column = FocusColumn::Flyout;
                state.focus.flyout = 0;
            }
        }
        FocusColumn::Flyout => {
            let Some(node) = state.flyout_items().get(state.focus.flyout) else {
                return UpdateResult::none();
            };
            if !node.has_children() {
                return UpdateResult::none();
            }
            let id = node.id.clone();
            if !state.menu.is_sub_open(&id) {
                state.menu.toggle_sub_level(&id);
            }
            state.focus.column = FocusColumn::Side;
            state.focus.side = 0;
        }
        FocusColumn::Side => {}
    }
    UpdateResult::none()
}

/// Collapse one level and move the cursor back to its parent
pub fn focus_out(state: &mut AppState) -> UpdateResult {
    match state.presentation {
        Presentation::Mobile => {
            if let Some(sub) = state.menu.open_sub.clone() {
                state.menu.toggle_sub_level(&sub);
            } else if let Some(top) = state.menu.open_top.clone() {
                state.menu.toggle_top_level(&top);
            } else if state.menu.mobile_drawer_open {
                state.menu.close_all();
            }
        }
        Presentation::Desktop => match state.focus.column {
            FocusColumn::Side => {
                if let Some(sub) = state.menu.open_sub.clone() {
                    state.menu.toggle_sub_level(&sub);
                }
                state.focus.column = FocusColumn::Flyout;
            }
            FocusColumn::Flyout | FocusColumn::Bar => {
                state.menu.close_flyouts();
                state.focus.column = FocusColumn::Bar;
            }
        },
    }
    UpdateResult::none()
}

/// Toggle the focused branch or follow the focused link
pub fn activate(state: &mut AppState) -> UpdateResult {
    match state.presentation {
        Presentation::Mobile => activate_row(state),
        Presentation::Desktop => activate_desktop(state),
    }
}

fn activate_desktop(state: &mut AppState) -> UpdateResult {
    let tree = Arc::clone(&state.tree);

    match state.focus.column {
        FocusColumn::Bar => {
            let Some(node) = tree.roots().get(state.focus.bar) else {
                return UpdateResult::none();
            };
            if node.has_children() {
                state.menu.toggle_top_level(&node.id);
                if state.menu.is_top_open(&node.id) {
                    state.focus.column = FocusColumn::Flyout;
                    state.focus.flyout = 0;
                }
                UpdateResult::none()
            } else {
                navigate_to(node)
            }
        }
        FocusColumn::Flyout => {
            let Some(node) = state.flyout_items().get(state.focus.flyout).cloned() else {
                return UpdateResult::none();
            };
            if node.has_children() {
                state.menu.toggle_sub_level(&node.id);
                UpdateResult::none()
            } else {
                navigate_to(&node)
            }
        }
        FocusColumn::Side => {
            // Branches in the side flyout have nowhere further to open
            match state.side_items().get(state.focus.side) {
                Some(node) if !node.has_children() => navigate_to(node),
                _ => UpdateResult::none(),
            }
        }
    }
}

fn activate_row(state: &mut AppState) -> UpdateResult {
    if !state.menu.mobile_drawer_open {
        return UpdateResult::none();
    }
    let rows = state.accordion_rows();
    let Some(row) = rows.get(state.focus.row) else {
        return UpdateResult::none();
    };

    match &row.kind {
        RowKind::Branch { .. } => {
            match row.depth {
                0 => state.menu.toggle_top_level(&row.id),
                1 => state.menu.toggle_sub_level(&row.id),
                _ => {}
            }
            UpdateResult::none()
        }
        RowKind::Link { path: Some(path) } => UpdateResult::message(Message::Navigate {
            path: path.clone(),
        }),
        RowKind::Link { path: None } => UpdateResult::none(),
    }
}

fn navigate_to(node: &NavNode) -> UpdateResult {
    match &node.path {
        Some(path) => UpdateResult::message(Message::Navigate { path: path.clone() }),
        None => UpdateResult::none(),
    }
}

/// Move `index` by `delta`, staying within `0..len`
fn step(index: usize, len: usize, delta: isize) -> usize {
    if len == 0 {
        return 0;
    }
    let next = index as isize + delta;
    next.clamp(0, len as isize - 1) as usize
}
