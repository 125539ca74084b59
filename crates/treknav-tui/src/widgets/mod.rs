//! Custom widget components

mod accordion;
mod content;
mod flyout;
mod header;
mod status_bar;

pub use accordion::{drawer_layout, DrawerLayout, MobileMenu, INDENT_PER_DEPTH};
pub use content::PageContent;
pub use flyout::{flyout_layout, DesktopMenu, EntrySlot, FlyoutLayout, FlyoutPanel};
pub use header::MainHeader;
pub use status_bar::StatusBar;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cut `label` to at most `max_width` display columns, ending in `…` when cut.
pub(crate) fn truncate_label(label: &str, max_width: usize) -> String {
    if label.width() <= max_width {
        return label.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in label.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_label_short() {
        assert_eq!(truncate_label("Tibet", 10), "Tibet");
        assert_eq!(truncate_label("Tibet", 5), "Tibet");
    }

    #[test]
    fn test_truncate_label_long() {
        assert_eq!(truncate_label("Annapurna Region", 10), "Annapurna…");
        assert_eq!(truncate_label("Nepal", 1), "…");
        assert_eq!(truncate_label("Nepal", 0), "");
    }

    #[test]
    fn test_truncate_label_counts_display_width() {
        // Each CJK character takes two columns
        assert_eq!(truncate_label("珠穆朗玛", 5), "珠穆…");
    }
}
