//! Semantic style builders.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

pub fn error() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

// --- Menu entry styles ---

/// Entry whose path equals the current route
pub fn active_route() -> Style {
    Style::default()
        .fg(palette::ACTIVE_ROUTE)
        .add_modifier(Modifier::BOLD)
}

/// Entry whose flyout or accordion section is open
pub fn open_entry() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// "Black on Cyan" - the keyboard cursor
pub fn focused() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// Style of a menu entry, most specific state first.
pub fn entry(focused: bool, open: bool, active: bool) -> Style {
    if focused {
        self::focused()
    } else if open {
        open_entry()
    } else if active {
        active_route()
    } else {
        text_primary()
    }
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

/// Bordered panel for flyouts and the drawer
pub fn flyout_block() -> Block<'static> {
    glass_block(true).style(Style::default().bg(palette::FLYOUT_BG))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_style_precedence() {
        assert_eq!(entry(true, true, true), focused());
        assert_eq!(entry(false, true, true), open_entry());
        assert_eq!(entry(false, false, true), active_route());
        assert_eq!(entry(false, false, false), text_primary());
    }
}
