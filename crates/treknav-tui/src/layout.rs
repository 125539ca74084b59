//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title, presentation and keybindings
    pub header: Rect,

    /// One row: the desktop bar or the hamburger button
    pub nav: Rect,

    /// Page placeholder; flyouts and the drawer are drawn over it
    pub content: Rect,

    /// Route and menu state
    pub status: Rect,
}

/// Split the terminal into the main screen areas
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header (glass container)
        Constraint::Length(1), // Navigation row
        Constraint::Min(3),    // Content
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        nav: chunks[1],
        content: chunks[2],
        status: chunks[3],
    }
}
