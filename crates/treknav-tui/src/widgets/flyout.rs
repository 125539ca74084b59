//! Desktop menu: a horizontal bar with flyout panels
//!
//! [`flyout_layout`] computes where every visible entry sits. The same
//! geometry drives [`DesktopMenu`] rendering and mouse hit testing, so what
//! is drawn is exactly what is clickable.

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::Style,
    widgets::{Clear, Widget},
};
use unicode_width::UnicodeWidthStr;

use treknav_app::state::{AppState, FocusColumn};
use treknav_app::MenuUiState;
use treknav_core::{EntryId, NavNode, NavTree};

use super::truncate_label;
use crate::theme::{icons::IconSet, palette, styles};

/// Columns between bar entries
const BAR_GAP: u16 = 1;

/// One clickable entry and where it is drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntrySlot {
    pub id: EntryId,
    pub area: Rect,
    pub has_children: bool,
    pub path: Option<String>,
}

impl EntrySlot {
    fn new(node: &NavNode, area: Rect) -> Self {
        Self {
            id: node.id.clone(),
            area,
            has_children: node.has_children(),
            path: node.path.clone(),
        }
    }
}

/// A bordered flyout panel and its rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlyoutPanel {
    /// Outer area, borders included
    pub area: Rect,
    pub items: Vec<EntrySlot>,
}

/// Geometry of the whole desktop menu.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlyoutLayout {
    pub bar: Vec<EntrySlot>,
    /// Children of the open top-level entry
    pub flyout: Option<FlyoutPanel>,
    /// Children of the open second-level entry, beside `flyout`
    pub side: Option<FlyoutPanel>,
}

impl FlyoutLayout {
    /// The entry under a cell, searching the topmost surface first.
    pub fn slot_at(&self, column: u16, row: u16) -> Option<&EntrySlot> {
        let pos = Position::new(column, row);
        let panels = [self.side.as_ref(), self.flyout.as_ref()];
        panels
            .into_iter()
            .flatten()
            .flat_map(|panel| panel.items.iter())
            .chain(self.bar.iter())
            .find(|slot| slot.area.contains(pos))
    }

    /// Whether a cell is on the bar row or inside an open panel.
    pub fn covers(&self, bar_row: Rect, column: u16, row: u16) -> bool {
        let pos = Position::new(column, row);
        bar_row.contains(pos)
            || self.flyout.as_ref().is_some_and(|p| p.area.contains(pos))
            || self.side.as_ref().is_some_and(|p| p.area.contains(pos))
    }
}

/// Width of a bar entry: label, padding, and a chevron for branches.
fn bar_entry_width(node: &NavNode) -> u16 {
    let chevron = if node.has_children() { 2 } else { 0 };
    (node.label.width() as u16).saturating_add(2 + chevron)
}

/// Lay out the bar in `bar_row` and the open flyouts, kept inside `bounds`.
pub fn flyout_layout(
    tree: &NavTree,
    menu: &MenuUiState,
    bar_row: Rect,
    bounds: Rect,
) -> FlyoutLayout {
    let mut layout = FlyoutLayout::default();
    let right = bar_row.right();

    let mut x = bar_row.x;
    for node in tree.roots() {
        if x >= right {
            break;
        }
        let width = bar_entry_width(node).min(right - x);
        layout
            .bar
            .push(EntrySlot::new(node, Rect::new(x, bar_row.y, width, 1)));
        x = x.saturating_add(width + BAR_GAP);
    }

    let Some(top) = menu.open_top.as_ref().and_then(|id| tree.get(id)) else {
        return layout;
    };
    let Some(anchor) = layout.bar.iter().find(|slot| slot.id == top.id) else {
        return layout;
    };
    if top.children.is_empty() {
        return layout;
    }

    let below = bar_row.y.saturating_add(1);
    let flyout = panel(&top.children, anchor.area.x, below, bounds, None);

    if let Some(sub) = menu.open_sub.as_ref().and_then(|id| tree.get(id)) {
        let sub_row = flyout.items.iter().find(|slot| slot.id == sub.id);
        if let (Some(sub_row), false) = (sub_row, sub.children.is_empty()) {
            let y = sub_row.area.y.saturating_sub(1);
            let x = flyout.area.right();
            layout.side = Some(panel(&sub.children, x, y, bounds, Some(flyout.area)));
        }
    }

    layout.flyout = Some(flyout);
    layout
}

/// Place a panel for `nodes` with its top-left corner near (`x`, `y`).
///
/// A side panel (`beside` set) that does not fit to the right of its parent
/// goes to the left instead; any panel is shifted to stay inside `bounds`.
fn panel(nodes: &[NavNode], x: u16, y: u16, bounds: Rect, beside: Option<Rect>) -> FlyoutPanel {
    let label_width = nodes.iter().map(|n| n.label.width()).max().unwrap_or(0) as u16;
    let chevron = if nodes.iter().any(NavNode::has_children) { 2 } else { 0 };
    let width = (label_width + 4 + chevron).min(bounds.width);
    let height = (nodes.len() as u16 + 2).min(bounds.height);

    let mut x = x;
    if x.saturating_add(width) > bounds.right() {
        x = match beside {
            Some(parent) if parent.x >= bounds.x.saturating_add(width) => parent.x - width,
            _ => bounds.right().saturating_sub(width),
        };
    }
    let x = x.max(bounds.x);

    let mut y = y.max(bounds.y);
    if y.saturating_add(height) > bounds.bottom() {
        y = bounds.bottom().saturating_sub(height).max(bounds.y);
    }

    let area = Rect::new(x, y, width, height);
    let inner_rows = height.saturating_sub(2) as usize;
    let items = nodes
        .iter()
        .take(inner_rows)
        .enumerate()
        .map(|(i, node)| {
            let row = Rect::new(x + 1, y + 1 + i as u16, width.saturating_sub(2), 1);
            EntrySlot::new(node, row)
        })
        .collect();

    FlyoutPanel { area, items }
}

// ─────────────────────────────────────────────────────────────────────────────
// Widget
// ─────────────────────────────────────────────────────────────────────────────

/// Renders the bar and any open flyouts from a precomputed layout.
pub struct DesktopMenu<'a> {
    state: &'a AppState,
    layout: &'a FlyoutLayout,
    icons: IconSet,
}

impl<'a> DesktopMenu<'a> {
    pub fn new(state: &'a AppState, layout: &'a FlyoutLayout, icons: IconSet) -> Self {
        Self {
            state,
            layout,
            icons,
        }
    }

    fn render_bar(&self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(palette::BAR_BG));

        let active = self.state.active_top_level();
        let on_bar = self.state.focus.column == FocusColumn::Bar;

        for (index, slot) in self.layout.bar.iter().enumerate() {
            let Some(node) = self.state.tree.get(&slot.id) else {
                continue;
            };
            let is_active = active.iter().any(|a| a.id == slot.id && a.active);
            let style = styles::entry(
                on_bar && self.state.focus.bar == index,
                self.state.menu.is_top_open(&slot.id),
                is_active,
            );

            let text = if node.has_children() {
                format!(" {} {} ", node.label, self.icons.chevron_expanded())
            } else {
                format!(" {} ", node.label)
            };
            let text = truncate_label(&text, slot.area.width as usize);
            buf.set_string(slot.area.x, slot.area.y, text, style.bg(palette::BAR_BG));
            if style != styles::text_primary() {
                buf.set_style(slot.area, style);
            }
        }
    }

    fn render_panel(
        &self,
        panel: &FlyoutPanel,
        column: FocusColumn,
        cursor: usize,
        buf: &mut Buffer,
    ) {
        Clear.render(panel.area, buf);
        styles::flyout_block().render(panel.area, buf);

        let focused_here = self.state.focus.column == column;
        for (index, slot) in panel.items.iter().enumerate() {
            let Some(node) = self.state.tree.get(&slot.id) else {
                continue;
            };
            let is_active = slot
                .path
                .as_deref()
                .is_some_and(|p| p == self.state.route.as_str());
            let style = styles::entry(
                focused_here && cursor == index,
                self.state.menu.is_sub_open(&slot.id),
                is_active,
            );

            let width = slot.area.width as usize;
            let label = if node.has_children() {
                let chevron = self.icons.chevron_collapsed();
                let label_width = width.saturating_sub(3);
                format!(
                    " {:<w$} {}",
                    truncate_label(&node.label, label_width),
                    chevron,
                    w = label_width
                )
            } else {
                format!(" {}", truncate_label(&node.label, width.saturating_sub(1)))
            };
            buf.set_style(slot.area, style.bg(if focused_here && cursor == index {
                palette::ACCENT
            } else {
                palette::FLYOUT_BG
            }));
            buf.set_stringn(slot.area.x, slot.area.y, label, width, style);
        }
    }
}

impl Widget for DesktopMenu<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if let Some(first) = self.layout.bar.first() {
            let row = Rect::new(area.x, first.area.y, area.width, 1).intersection(area);
            self.render_bar(row, buf);
        }

        let focus = self.state.focus;
        if let Some(flyout) = &self.layout.flyout {
            self.render_panel(flyout, FocusColumn::Flyout, focus.flyout, buf);
        }
        if let Some(side) = &self.layout.side {
            self.render_panel(side, FocusColumn::Side, focus.side, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::test_utils::TestTerminal;
    use treknav_app::config::{default_menu, IconMode, Settings};
    use treknav_core::Route;

    const BAR: Rect = Rect {
        x: 0,
        y: 3,
        width: 80,
        height: 1,
    };
    const BOUNDS: Rect = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 24,
    };

    fn tree() -> NavTree {
        NavTree::new(default_menu())
    }

    fn state() -> AppState {
        AppState::new(Arc::new(tree()), Settings::default(), Route::from("/"))
    }

    fn open(top: usize, sub: Option<usize>) -> MenuUiState {
        let mut menu = MenuUiState::new();
        menu.toggle_top_level(&EntryId::root(top));
        if let Some(sub) = sub {
            menu.toggle_sub_level(&EntryId::from_indices([top, sub]));
        }
        menu
    }

    #[test]
    fn test_bar_entries_left_to_right() {
        let layout = flyout_layout(&tree(), &MenuUiState::new(), BAR, BOUNDS);

        assert_eq!(layout.bar.len(), 5);
        assert_eq!(layout.bar[0].area, Rect::new(0, 3, 6, 1)); // " Home "
        assert_eq!(layout.bar[1].area.x, 7);
        assert_eq!(layout.bar[1].area.width, 15); // " Destination ▾ "
        assert!(layout
            .bar
            .windows(2)
            .all(|w| w[0].area.right() < w[1].area.x));
        assert!(layout.flyout.is_none());
        assert!(layout.side.is_none());
    }

    #[test]
    fn test_flyout_opens_below_its_entry() {
        let layout = flyout_layout(&tree(), &open(1, None), BAR, BOUNDS);
        let flyout = layout.flyout.unwrap();

        assert_eq!(flyout.area.x, layout.bar[1].area.x);
        assert_eq!(flyout.area.y, 4);
        assert_eq!(flyout.area.height, 5); // 3 children + borders
        assert_eq!(flyout.items[0].id, EntryId::from_indices([1, 0]));
        assert_eq!(flyout.items[2].area.y, 7);
    }

    #[test]
    fn test_side_flyout_to_the_right_of_first() {
        let layout = flyout_layout(&tree(), &open(1, Some(1)), BAR, BOUNDS);
        let flyout = layout.flyout.unwrap();
        let side = layout.side.unwrap();

        assert_eq!(side.area.x, flyout.area.right());
        // Top border level with the parent row's top border
        assert_eq!(side.area.y, flyout.items[1].area.y - 1);
        assert_eq!(side.items.len(), 2); // Bhutan
    }

    #[test]
    fn test_side_flyout_flips_left_at_screen_edge() {
        let bar = Rect::new(40, 3, 40, 1);
        let mut menu = MenuUiState::new();
        let tree = NavTree::new(vec![
            treknav_core::NavEntry::leaf("A very long first entry", "/a"),
            treknav_core::NavEntry::submenu(
                "Edge",
                vec![treknav_core::NavEntry::submenu(
                    "Wide submenu entry",
                    vec![treknav_core::NavEntry::leaf("Even wider leaf entry", "/x")],
                )],
            ),
        ]);
        menu.toggle_top_level(&EntryId::root(1));
        menu.toggle_sub_level(&EntryId::from_indices([1, 0]));

        let layout = flyout_layout(&tree, &menu, bar, BOUNDS);
        let flyout = layout.flyout.unwrap();
        let side = layout.side.unwrap();

        assert!(flyout.area.right() <= BOUNDS.right());
        assert_eq!(side.area.right(), flyout.area.x);
    }

    #[test]
    fn test_open_leaf_or_unknown_id_has_no_flyout() {
        let layout = flyout_layout(&tree(), &open(0, None), BAR, BOUNDS);
        assert!(layout.flyout.is_none());

        let layout = flyout_layout(&tree(), &open(42, None), BAR, BOUNDS);
        assert!(layout.flyout.is_none());
    }

    #[test]
    fn test_slot_at_prefers_panels() {
        let layout = flyout_layout(&tree(), &open(1, None), BAR, BOUNDS);
        let nepal = &layout.flyout.as_ref().unwrap().items[0];

        let hit = layout.slot_at(nepal.area.x + 1, nepal.area.y).unwrap();
        assert_eq!(hit.id, EntryId::from_indices([1, 0]));

        let home = layout.slot_at(1, 3).unwrap();
        assert_eq!(home.id, EntryId::root(0));

        assert!(layout.slot_at(79, 20).is_none());
    }

    #[test]
    fn test_renders_bar_and_flyouts() {
        let mut state = state();
        state.menu = open(1, Some(0));
        let layout = flyout_layout(&state.tree, &state.menu, BAR, BOUNDS);
        let mut term = TestTerminal::new();

        term.render_widget(
            DesktopMenu::new(&state, &layout, IconSet::new(IconMode::Unicode)),
            BOUNDS,
        );

        assert!(term.line_contains(3, "Home"));
        assert!(term.line_contains(3, "Destination ▾"));
        assert!(term.buffer_contains("Nepal"));
        assert!(term.buffer_contains("Everest Region"));
        assert!(term.buffer_contains("▸"));
    }

    #[test]
    fn test_active_entry_highlighted() {
        let state = state(); // route "/" matches Home
        let layout = flyout_layout(&state.tree, &state.menu, BAR, BOUNDS);
        let mut term = TestTerminal::new();
        let mut state = state;
        state.focus.bar = 1; // keep the cursor off Home

        term.render_widget(
            DesktopMenu::new(&state, &layout, IconSet::new(IconMode::Unicode)),
            BOUNDS,
        );

        let home = term.buffer()[(1, 3)].style();
        assert_eq!(home.fg, Some(palette::ACTIVE_ROUTE));
        let about = layout.bar[3].area;
        assert_ne!(term.buffer()[(about.x + 1, 3)].style().fg, Some(palette::ACTIVE_ROUTE));
    }
}
