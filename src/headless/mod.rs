//! Headless mode - NDJSON scripting of the menu without a terminal
//!
//! Commands are read one JSON object per line from stdin; events are
//! written one JSON object per line to stdout. Every command is answered
//! with a `state` event, preceded by `route_changed` when it moved the
//! router.
//!
//! # Example
//!
//! ```json
//! {"cmd":"toggle_top","label":"Destination"}
//! {"cmd":"navigate","path":"/destination/tibet"}
//! ```
//!
//! ```json
//! {"event":"state","open_top":"Destination","open_sub":null,"drawer_open":false,"route":"/","active":["Home"],"timestamp":1704700001000}
//! {"event":"route_changed","from":"/","to":"/destination/tibet","timestamp":1704700002000}
//! {"event":"state","open_top":null,"open_sub":null,"drawer_open":false,"route":"/destination/tibet","active":[],"timestamp":1704700002000}
//! ```

pub mod runner;

use std::io::{self, Write};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::error;

use treknav_app::state::{AppState, Presentation};

/// Commands accepted on stdin
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum HeadlessCommand {
    /// Toggle the top-level entry with this label
    ToggleTop { label: String },
    /// Toggle the child of the open top-level entry with this label
    ToggleSub { label: String },
    ToggleDrawer,
    CloseAll,
    Navigate { path: String },
    /// Pin the desktop bar or the mobile drawer
    SetPresentation { presentation: Presentation },
    /// Report the current state without changing it
    State,
    Quit,
}

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// Snapshot of the navbar after a command
    State {
        open_top: Option<String>,
        open_sub: Option<String>,
        drawer_open: bool,
        presentation: String,
        route: String,
        /// Labels of the highlighted top-level entries
        active: Vec<String>,
        timestamp: i64,
    },

    /// The router published a new route
    RouteChanged {
        from: String,
        to: String,
        timestamp: i64,
    },

    /// A line could not be handled
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Write this event as one NDJSON line
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let json = serde_json::to_string(self).map_err(io::Error::other)?;
        writeln!(out, "{json}")?;
        out.flush()
    }

    /// Emit this event to stdout
    pub fn emit(&self) {
        let mut stdout = io::stdout().lock();
        if let Err(e) = self.write_to(&mut stdout) {
            error!("Failed to write headless event to stdout: {}", e);
        }
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn state(state: &AppState) -> Self {
        let label = |id: Option<&treknav_core::EntryId>| {
            id.and_then(|id| state.tree.get(id))
                .map(|node| node.label.clone())
        };
        let active = state
            .active_top_level()
            .into_iter()
            .filter(|entry| entry.active)
            .filter_map(|entry| state.tree.get(&entry.id).map(|n| n.label.clone()))
            .collect();

        Self::State {
            open_top: label(state.menu.open_top.as_ref()),
            open_sub: label(state.menu.open_sub.as_ref()),
            drawer_open: state.menu.mobile_drawer_open,
            presentation: state.presentation.label().to_string(),
            route: state.route.to_string(),
            active,
            timestamp: Self::now(),
        }
    }

    pub fn route_changed(from: &str, to: &str) -> Self {
        Self::RouteChanged {
            from: from.to_string(),
            to: to.to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn error(message: String, fatal: bool) -> Self {
        Self::Error {
            message,
            fatal,
            timestamp: Self::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use treknav_app::config::{default_menu, Settings};
    use treknav_core::{EntryId, NavTree, Route};

    fn to_value(event: &HeadlessEvent) -> serde_json::Value {
        let json = serde_json::to_string(event).expect("serialization failed");
        serde_json::from_str(&json).expect("invalid JSON")
    }

    #[test]
    fn test_parse_commands() {
        let cmd: HeadlessCommand =
            serde_json::from_str(r#"{"cmd":"toggle_top","label":"Destination"}"#).unwrap();
        assert_eq!(
            cmd,
            HeadlessCommand::ToggleTop {
                label: "Destination".to_string()
            }
        );

        let cmd: HeadlessCommand = serde_json::from_str(r#"{"cmd":"toggle_drawer"}"#).unwrap();
        assert_eq!(cmd, HeadlessCommand::ToggleDrawer);

        let cmd: HeadlessCommand =
            serde_json::from_str(r#"{"cmd":"set_presentation","presentation":"mobile"}"#).unwrap();
        assert_eq!(
            cmd,
            HeadlessCommand::SetPresentation {
                presentation: Presentation::Mobile
            }
        );
        assert!(serde_json::from_str::<HeadlessCommand>(
            r#"{"cmd":"set_presentation","presentation":"tablet"}"#
        )
        .is_err());

        assert!(serde_json::from_str::<HeadlessCommand>(r#"{"cmd":"fly"}"#).is_err());
        assert!(serde_json::from_str::<HeadlessCommand>(r#"{"cmd":"navigate"}"#).is_err());
    }

    #[test]
    fn test_state_serialization() {
        let mut state = AppState::new(
            Arc::new(NavTree::new(default_menu())),
            Settings::default(),
            Route::from("/"),
        );
        state.menu.toggle_top_level(&EntryId::root(1));
        state.menu.toggle_sub_level(&EntryId::from_indices([1, 1]));

        let value = to_value(&HeadlessEvent::state(&state));

        assert_eq!(value["event"], "state");
        assert_eq!(value["open_top"], "Destination");
        assert_eq!(value["open_sub"], "Bhutan");
        assert_eq!(value["drawer_open"], false);
        assert_eq!(value["presentation"], "desktop");
        assert_eq!(value["route"], "/");
        assert_eq!(value["active"], serde_json::json!(["Home"]));
        assert!(value["timestamp"].is_number());
    }

    #[test]
    fn test_route_changed_serialization() {
        let value = to_value(&HeadlessEvent::route_changed("/", "/about"));
        assert_eq!(value["event"], "route_changed");
        assert_eq!(value["from"], "/");
        assert_eq!(value["to"], "/about");
    }

    #[test]
    fn test_error_serialization() {
        let value = to_value(&HeadlessEvent::error("bad line".to_string(), false));
        assert_eq!(value["event"], "error");
        assert_eq!(value["message"], "bad line");
        assert_eq!(value["fatal"], false);
    }

    #[test]
    fn test_write_to_is_one_line() {
        let mut out = Vec::new();
        HeadlessEvent::error("x".to_string(), true)
            .write_to(&mut out)
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with('\n'));
        assert_eq!(text.lines().count(), 1);
    }
}
