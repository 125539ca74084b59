//! Header bar widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use treknav_app::state::Presentation;

use crate::theme::{palette, styles};

/// Title, current presentation and keybinding hints
pub struct MainHeader<'a> {
    site_name: &'a str,
    presentation: Presentation,
}

impl<'a> MainHeader<'a> {
    pub fn new(site_name: &'a str, presentation: Presentation) -> Self {
        Self {
            site_name,
            presentation,
        }
    }

    fn keybindings(&self) -> Vec<Span<'static>> {
        let pairs: &[(&str, &str)] = match self.presentation {
            Presentation::Desktop => &[
                ("←→", "move"),
                ("↵", "open"),
                ("Tab", "mobile"),
                ("q", "quit"),
            ],
            Presentation::Mobile => &[
                ("m", "menu"),
                ("↑↓", "move"),
                ("Tab", "desktop"),
                ("q", "quit"),
            ],
        };
        let mut spans = Vec::new();
        for (key, action) in pairs {
            spans.push(Span::styled(format!(" {key}"), styles::keybinding()));
            spans.push(Span::styled(format!(" {action} "), styles::text_muted()));
        }
        spans
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::DEEPEST_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let title = Line::from(vec![
            Span::styled(
                self.site_name.to_string(),
                styles::accent().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  [{}]", self.presentation.label()),
                styles::text_secondary(),
            ),
        ]);
        let title_width = title.width() as u16;
        buf.set_line(inner.x + 1, inner.y, &title, inner.width.saturating_sub(1));

        // Keybindings right-aligned, dropped when they would overlap the title
        let keys = Line::from(self.keybindings());
        let keys_width = keys.width() as u16;
        if title_width + keys_width + 2 < inner.width {
            let x = inner.right() - keys_width - 1;
            buf.set_line(x, inner.y, &keys, keys_width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_header_shows_title_and_presentation() {
        let mut term = TestTerminal::new();
        term.render_widget(
            MainHeader::new("Trek Nav", Presentation::Desktop),
            Rect::new(0, 0, 80, 3),
        );

        assert!(term.line_contains(1, "Trek Nav"));
        assert!(term.line_contains(1, "[desktop]"));
        assert!(term.line_contains(1, "quit"));
    }

    #[test]
    fn test_header_drops_keybindings_when_narrow() {
        let mut term = TestTerminal::compact();
        term.render_widget(
            MainHeader::new("Trek Nav", Presentation::Mobile),
            Rect::new(0, 0, 30, 3),
        );

        assert!(term.line_contains(1, "[mobile]"));
        assert!(!term.buffer_contains("quit"));
    }
}
