//! Centralized theme for the menu TUI.
//!
//! - `palette` - Raw color constants
//! - `styles` - Semantic style builder functions
//! - `icons` - Chevron and drawer glyphs with ASCII fallbacks

pub mod icons;
pub mod palette;
pub mod styles;
