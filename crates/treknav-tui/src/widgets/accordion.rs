//! Mobile menu: hamburger button and accordion drawer

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::Style,
    widgets::{Clear, Widget},
};
use unicode_width::UnicodeWidthStr;

use treknav_app::state::AppState;
use treknav_app::{AccordionRow, RowKind};

use super::truncate_label;
use crate::theme::{icons::IconSet, palette, styles};

/// Columns of indentation per tree level
pub const INDENT_PER_DEPTH: u16 = 2;

const MIN_DRAWER_WIDTH: u16 = 24;

/// Geometry of the mobile menu.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrawerLayout {
    pub button: Rect,
    /// Text of the button, sized into `button`
    pub button_label: String,
    /// Outer drawer area, borders included; `None` while closed
    pub panel: Option<Rect>,
    /// Visible rows and their full-width row areas
    pub rows: Vec<(AccordionRow, Rect)>,
}

impl DrawerLayout {
    pub fn row_at(&self, column: u16, row: u16) -> Option<&AccordionRow> {
        let pos = Position::new(column, row);
        self.rows
            .iter()
            .find(|(_, area)| area.contains(pos))
            .map(|(row, _)| row)
    }

    pub fn panel_contains(&self, column: u16, row: u16) -> bool {
        self.panel
            .is_some_and(|panel| panel.contains(Position::new(column, row)))
    }
}

fn row_width(row: &AccordionRow) -> u16 {
    let chevron = if row.is_branch() { 2 } else { 0 };
    (row.depth as u16 * INDENT_PER_DEPTH) + row.label.width() as u16 + chevron
}

/// Hamburger button text for the drawer state, e.g. `" ☰ Menu "`
pub fn button_label(icons: IconSet, open: bool) -> String {
    if open {
        format!(" {} Close ", icons.close())
    } else {
        format!(" {} Menu ", icons.hamburger())
    }
}

/// Lay out the button in `nav_row` and, when `open`, the drawer below it.
pub fn drawer_layout(
    rows: Vec<AccordionRow>,
    open: bool,
    icons: IconSet,
    nav_row: Rect,
    bounds: Rect,
) -> DrawerLayout {
    let button_label = button_label(icons, open);
    let button_width = (button_label.width() as u16).min(nav_row.width);
    let button = Rect::new(nav_row.x, nav_row.y, button_width, 1);
    if !open {
        return DrawerLayout {
            button,
            button_label,
            ..Default::default()
        };
    }

    let widest = rows.iter().map(row_width).max().unwrap_or(0);
    let width = (widest + 4).max(MIN_DRAWER_WIDTH).min(bounds.width);
    let y = nav_row.y.saturating_add(1);
    let height = (rows.len() as u16 + 2).min(bounds.bottom().saturating_sub(y));
    let panel = Rect::new(bounds.x, y, width, height);

    let inner_rows = height.saturating_sub(2) as usize;
    let rows = rows
        .into_iter()
        .take(inner_rows)
        .enumerate()
        .map(|(i, row)| {
            let area = Rect::new(panel.x + 1, panel.y + 1 + i as u16, width.saturating_sub(2), 1);
            (row, area)
        })
        .collect();

    DrawerLayout {
        button,
        button_label,
        panel: Some(panel),
        rows,
    }
}

/// Renders the hamburger button and, when open, the accordion drawer.
pub struct MobileMenu<'a> {
    state: &'a AppState,
    layout: &'a DrawerLayout,
    icons: IconSet,
}

impl<'a> MobileMenu<'a> {
    pub fn new(state: &'a AppState, layout: &'a DrawerLayout, icons: IconSet) -> Self {
        Self {
            state,
            layout,
            icons,
        }
    }

    fn render_button(&self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(palette::BAR_BG));
        let style = if self.state.menu.mobile_drawer_open {
            styles::open_entry()
        } else {
            styles::text_primary()
        };
        let button = self.layout.button;
        buf.set_stringn(
            button.x,
            button.y,
            &self.layout.button_label,
            button.width as usize,
            style.bg(palette::BAR_BG),
        );

        // Current page on the right of the bar
        let route = self.state.route.as_str();
        let x = area.right().saturating_sub(route.width() as u16 + 1);
        if x > button.right() {
            buf.set_string(x, area.y, route, styles::text_muted().bg(palette::BAR_BG));
        }
    }

    fn render_drawer(&self, panel: Rect, buf: &mut Buffer) {
        Clear.render(panel, buf);
        styles::flyout_block().render(panel, buf);

        for (index, (row, area)) in self.layout.rows.iter().enumerate() {
            let focused = self.state.focus.row == index;
            let (open, active) = match &row.kind {
                RowKind::Branch { expanded } => (*expanded, false),
                RowKind::Link { path } => (
                    false,
                    path.as_deref() == Some(self.state.route.as_str()),
                ),
            };
            let style = styles::entry(focused, open, active);

            let indent = row.depth as u16 * INDENT_PER_DEPTH;
            let available = area.width.saturating_sub(indent) as usize;
            let text = match &row.kind {
                RowKind::Branch { expanded } => format!(
                    "{} {}",
                    truncate_label(&row.label, available.saturating_sub(2)),
                    self.icons.chevron(*expanded)
                ),
                RowKind::Link { .. } => truncate_label(&row.label, available),
            };

            if focused {
                buf.set_style(*area, style);
            }
            buf.set_stringn(area.x + indent, area.y, text, available, style);
        }
    }
}

impl Widget for MobileMenu<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bar = Rect::new(area.x, self.layout.button.y, area.width, 1).intersection(area);
        self.render_button(bar, buf);

        if let Some(panel) = self.layout.panel {
            self.render_drawer(panel, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::test_utils::TestTerminal;
    use treknav_app::config::{default_menu, IconMode, Settings};
    use treknav_app::state::Presentation;
    use treknav_core::{EntryId, NavTree, Route};

    const NAV: Rect = Rect {
        x: 0,
        y: 3,
        width: 40,
        height: 1,
    };
    const BOUNDS: Rect = Rect {
        x: 0,
        y: 0,
        width: 40,
        height: 24,
    };

    fn state() -> AppState {
        let mut state = AppState::new(
            Arc::new(NavTree::new(default_menu())),
            Settings::default(),
            Route::from("/"),
        );
        state.set_presentation(Presentation::Mobile);
        state
    }

    fn layout(state: &AppState) -> DrawerLayout {
        drawer_layout(
            state.accordion_rows(),
            state.menu.mobile_drawer_open,
            IconSet::new(IconMode::Unicode),
            NAV,
            BOUNDS,
        )
    }

    fn render(state: &AppState) -> TestTerminal {
        let layout = layout(state);
        let mut term = TestTerminal::with_size(40, 24);
        term.render_widget(
            MobileMenu::new(state, &layout, IconSet::new(IconMode::Unicode)),
            BOUNDS,
        );
        term
    }

    #[test]
    fn test_closed_drawer_shows_button_only() {
        let state = state();
        let layout = layout(&state);
        assert!(layout.panel.is_none());
        assert!(layout.rows.is_empty());

        let term = render(&state);
        assert!(term.line_contains(3, "☰ Menu"));
        assert!(!term.buffer_contains("Destination"));
    }

    #[test]
    fn test_button_fits_wide_hamburger() {
        let state = state();
        let layout = layout(&state);
        // ☰ takes two columns
        assert_eq!(layout.button_label.width(), 9);
        assert_eq!(layout.button.width, 9);

        let term = render(&state);
        assert_eq!(term.cell_at(8, 3), Some(" "));
        assert_eq!(term.cell_at(7, 3), Some("u"));

        let ascii = drawer_layout(
            Vec::new(),
            false,
            IconSet::new(IconMode::Ascii),
            NAV,
            BOUNDS,
        );
        assert_eq!(ascii.button_label, " = Menu ");
        assert_eq!(ascii.button.width, 8);
    }

    #[test]
    fn test_open_drawer_lists_top_level() {
        let mut state = state();
        state.menu.toggle_mobile_drawer();

        let layout = layout(&state);
        assert_eq!(layout.panel.map(|p| p.y), Some(4));
        assert_eq!(layout.rows.len(), 5);

        let term = render(&state);
        assert!(term.line_contains(3, "✕ Close"));
        assert!(term.line_contains(6, "Destination ▸"));
    }

    #[test]
    fn test_indentation_grows_with_depth() {
        let mut state = state();
        state.menu.toggle_mobile_drawer();
        state.menu.toggle_top_level(&EntryId::root(1));
        state.menu.toggle_sub_level(&EntryId::from_indices([1, 0]));
        state.focus.row = 0;

        let layout = layout(&state);
        let term = render(&state);

        let line_of = |label: &str| {
            layout
                .rows
                .iter()
                .find(|(row, _)| row.label == label)
                .map(|(_, area)| *area)
                .unwrap()
        };
        let dest = line_of("Destination");
        let nepal = line_of("Nepal");
        let everest = line_of("Everest Region");

        assert_eq!(term.cell_at(dest.x, dest.y), Some("D"));
        assert_eq!(term.cell_at(nepal.x + INDENT_PER_DEPTH, nepal.y), Some("N"));
        assert_eq!(
            term.cell_at(everest.x + 2 * INDENT_PER_DEPTH, everest.y),
            Some("E")
        );
        assert!(term.line_contains(dest.y, "Destination ▾"));
        assert!(term.line_contains(nepal.y, "Nepal ▾"));
    }

    #[test]
    fn test_row_at_hits_full_width_row() {
        let mut state = state();
        state.menu.toggle_mobile_drawer();
        let layout = layout(&state);

        let (_, contact) = &layout.rows[4];
        let hit = layout.row_at(contact.right() - 1, contact.y).unwrap();
        assert_eq!(hit.label, "Contact");
        assert!(layout.row_at(39, 23).is_none());
        assert!(layout.panel_contains(1, 5));
    }

    #[test]
    fn test_drawer_clipped_to_screen_height() {
        let mut state = state();
        state.menu.toggle_mobile_drawer();
        state.menu.toggle_top_level(&EntryId::root(1));
        state.menu.toggle_sub_level(&EntryId::from_indices([1, 0]));

        let short = Rect::new(0, 0, 40, 10);
        let icons = IconSet::new(IconMode::Unicode);
        let layout = drawer_layout(state.accordion_rows(), true, icons, NAV, short);

        let panel = layout.panel.unwrap();
        assert!(panel.bottom() <= short.bottom());
        assert_eq!(layout.rows.len(), (panel.height - 2) as usize);
    }
}
