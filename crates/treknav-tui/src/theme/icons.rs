//! Icon set for the TUI.
//!
//! `IconSet` resolves glyphs at runtime from the configured `IconMode`:
//! - `IconMode::Unicode` - triangles and the trigram hamburger
//! - `IconMode::Ascii` - plain characters for limited terminals

use treknav_app::config::IconMode;

#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    /// Collapsed branch
    pub fn chevron_collapsed(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "\u{25b8}", // ▸
            IconMode::Ascii => ">",
        }
    }

    /// Expanded branch, also used for top-level entries with a flyout
    pub fn chevron_expanded(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "\u{25be}", // ▾
            IconMode::Ascii => "v",
        }
    }

    pub fn chevron(&self, expanded: bool) -> &'static str {
        if expanded {
            self.chevron_expanded()
        } else {
            self.chevron_collapsed()
        }
    }

    pub fn hamburger(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "\u{2630}", // ☰
            IconMode::Ascii => "=",
        }
    }

    pub fn close(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "\u{2715}", // ✕
            IconMode::Ascii => "x",
        }
    }

    /// Marker for the entry matching the current route
    pub fn dot(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "\u{25cf}", // ●
            IconMode::Ascii => "*",
        }
    }

    pub fn separator(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => " \u{203a} ", // ›
            IconMode::Ascii => " > ",
        }
    }
}
