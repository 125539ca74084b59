//! Status bar widget
//!
//! One row: route, menu state, and the last navigation error if any.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use treknav_app::state::AppState;
use treknav_app::MenuPhase;

use crate::theme::styles;

pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn label_of(&self, id: &treknav_core::EntryId) -> String {
        self.state
            .tree
            .get(id)
            .map(|n| n.label.clone())
            .unwrap_or_else(|| id.to_string())
    }

    fn menu_summary(&self) -> String {
        let mut summary = match self.state.menu.phase() {
            MenuPhase::AllClosed => "closed".to_string(),
            MenuPhase::TopOpen(top) => format!("open: {}", self.label_of(&top)),
            MenuPhase::TopAndSubOpen(top, sub) => {
                format!("open: {} / {}", self.label_of(&top), self.label_of(&sub))
            }
        };
        if self.state.menu.mobile_drawer_open {
            summary.push_str(" (drawer)");
        }
        summary
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![
            Span::styled(" route ", styles::text_muted()),
            Span::styled(self.state.route.to_string(), styles::accent()),
            Span::styled("  menu ", styles::text_muted()),
            Span::styled(self.menu_summary(), styles::text_secondary()),
        ];
        if let Some(error) = &self.state.last_error {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(error.clone(), styles::error()));
        }
        Line::from(spans).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::test_utils::TestTerminal;
    use treknav_app::config::{default_menu, Settings};
    use treknav_core::{EntryId, NavTree, Route};

    fn state() -> AppState {
        AppState::new(
            Arc::new(NavTree::new(default_menu())),
            Settings::default(),
            Route::from("/about"),
        )
    }

    #[test]
    fn test_status_bar_closed_menu() {
        let state = state();
        let mut term = TestTerminal::new();
        term.render_widget(StatusBar::new(&state), Rect::new(0, 0, 80, 1));
        assert!(term.line_contains(0, "/about"));
        assert!(term.line_contains(0, "closed"));
    }

    #[test]
    fn test_status_bar_names_open_entries_and_error() {
        let mut state = state();
        state.menu.toggle_top_level(&EntryId::root(1));
        state.menu.toggle_sub_level(&EntryId::from_indices([1, 0]));
        state.last_error = Some("Cannot open /x".to_string());

        let mut term = TestTerminal::with_size(100, 1);
        term.render_widget(StatusBar::new(&state), Rect::new(0, 0, 100, 1));
        assert!(term.line_contains(0, "open: Destination / Nepal"));
        assert!(term.line_contains(0, "Cannot open /x"));
    }
}
