//! Page placeholder below the menu

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use treknav_app::state::AppState;

use crate::theme::{icons::IconSet, styles};

/// Shows which page the router is on, with a breadcrumb trail.
pub struct PageContent<'a> {
    state: &'a AppState,
    icons: IconSet,
}

impl<'a> PageContent<'a> {
    pub fn new(state: &'a AppState, icons: IconSet) -> Self {
        Self { state, icons }
    }
}

impl Widget for PageContent<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        let crumbs = self.state.breadcrumb();
        let title = crumbs
            .last()
            .cloned()
            .unwrap_or_else(|| "Page not in menu".to_string());

        let mut lines = vec![
            Line::from(Span::styled(
                title,
                styles::text_primary().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                self.state.route.to_string(),
                styles::text_muted(),
            )),
        ];

        if crumbs.len() > 1 {
            let mut spans = Vec::new();
            for (i, crumb) in crumbs.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::styled(self.icons.separator(), styles::text_muted()));
                }
                spans.push(Span::styled(crumb.clone(), styles::text_secondary()));
            }
            lines.push(Line::default());
            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner.inner(ratatui::layout::Margin::new(1, 0)), buf);
    }
}
