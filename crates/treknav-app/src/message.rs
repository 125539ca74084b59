//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use crate::state::Presentation;
use treknav_core::{EntryId, Route};

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Quit the application (q, Ctrl+C, signal handler)
    Quit,

    /// Terminal width changed
    Resize { width: u16 },

    // ─────────────────────────────────────────────────────────
    // Menu Controller
    // ─────────────────────────────────────────────────────────
    /// Click on a top-level entry with children
    ToggleTopLevel(EntryId),
    /// Click on a second-level entry with children
    ToggleSubLevel(EntryId),
    /// Hamburger button
    ToggleMobileDrawer,
    /// Close every menu and the drawer
    CloseAll,

    // ─────────────────────────────────────────────────────────
    // Pointer Hover (desktop flyouts)
    // ─────────────────────────────────────────────────────────
    /// Pointer entered a top-level entry
    HoverTopLevel(EntryId),
    /// Pointer entered a second-level entry
    HoverSubLevel(EntryId),
    /// Pointer left the bar and every open flyout
    HoverLeave,

    // ─────────────────────────────────────────────────────────
    // Routing
    // ─────────────────────────────────────────────────────────
    /// Leaf link activated; hands `path` to the routing layer verbatim
    Navigate { path: String },
    /// Routing layer reported a new current route
    RouteChanged(Route),
    /// Routing layer rejected a navigation
    NavigationFailed { path: String, error: String },

    // ─────────────────────────────────────────────────────────
    // Presentation
    // ─────────────────────────────────────────────────────────
    /// Switch between desktop bar and mobile drawer
    TogglePresentation,
    SetPresentation(Presentation),

    // ─────────────────────────────────────────────────────────
    // Keyboard Focus
    // ─────────────────────────────────────────────────────────
    /// Move the cursor back (left on the bar, up in panels and the drawer)
    FocusPrev,
    /// Move the cursor forward
    FocusNext,
    /// Open the focused branch's side flyout and move into it
    FocusIn,
    /// Collapse one level and move the cursor back to its parent
    FocusOut,
    /// Toggle the focused branch or follow the focused link
    Activate,
}
