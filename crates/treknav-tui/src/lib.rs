//! treknav-tui - Terminal UI for Trek Nav
//!
//! Renders a mounted navbar with ratatui: the desktop bar with flyouts or
//! the mobile drawer, plus a page placeholder and status bar. Keyboard and
//! mouse input are translated into `treknav_app` messages.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
