//! Abstract input key event, independent of terminal library.
//!
//! The menu handlers match on `InputKey` so that the app crate never depends
//! on crossterm. The TUI converts crossterm key events at its boundary; the
//! headless runner never produces keys at all.

/// Abstract input key event, independent of terminal library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key (a-z, 0-9, symbols, space)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c, ...)
    CharCtrl(char),

    // Navigation
    Up,
    Down,
    Left,
    Right,

    // Action keys
    Enter,
    Esc,
    Tab,
    BackTab,
}
