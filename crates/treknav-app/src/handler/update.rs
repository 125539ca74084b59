//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppPhase, AppState, FocusColumn, MenuFocus, Presentation};
use treknav_core::prelude::*;
use treknav_core::EntryId;

use super::{focus, keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    let result = dispatch(state, message);
    state.clamp_focus();
    result
}

fn dispatch(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => UpdateResult::none(),

        Message::Resize { width } => {
            if !state.presentation_locked {
                let presentation = state.presentation_for_width(width);
                if presentation != state.presentation {
                    debug!("Width {} selects {} menu", width, presentation.label());
                    state.set_presentation(presentation);
                }
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Menu Controller
        // ─────────────────────────────────────────────────────────
        Message::ToggleTopLevel(id) => {
            if claimed_by_hover(state, &id) && state.menu.is_top_open(&id) {
                return UpdateResult::none();
            }
            state.menu.toggle_top_level(&id);
            if let Some(index) = id.indices().first() {
                if id.depth() == 0 {
                    state.focus.bar = *index;
                }
            }
            trace!("Toggled top level {} -> {:?}", id, state.menu.phase());
            UpdateResult::none()
        }

        Message::ToggleSubLevel(id) => {
            if claimed_by_hover(state, &id) && state.menu.is_sub_open(&id) {
                return UpdateResult::none();
            }
            state.menu.toggle_sub_level(&id);
            trace!("Toggled sub level {} -> {:?}", id, state.menu.phase());
            UpdateResult::none()
        }

        Message::ToggleMobileDrawer => {
            state.menu.toggle_mobile_drawer();
            state.focus.row = 0;
            UpdateResult::none()
        }

        Message::CloseAll => {
            state.menu.close_all();
            state.hover_opened = None;
            state.focus.column = FocusColumn::Bar;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Pointer Hover
        // ─────────────────────────────────────────────────────────
        Message::HoverTopLevel(id) => {
            if !hover_enabled(state) || state.menu.is_top_open(&id) {
                return UpdateResult::none();
            }
            let has_children = state.tree.get(&id).is_some_and(|n| n.has_children());
            if has_children {
                state.menu.toggle_top_level(&id);
                if let Some(index) = id.indices().first() {
                    state.focus.bar = *index;
                }
                state.hover_opened = Some(id);
            }
            UpdateResult::none()
        }

        Message::HoverSubLevel(id) => {
            if !hover_enabled(state) || state.menu.is_sub_open(&id) {
                return UpdateResult::none();
            }
            let has_children = state.tree.get(&id).is_some_and(|n| n.has_children());
            if has_children {
                state.menu.toggle_sub_level(&id);
                if state.menu.is_sub_open(&id) {
                    state.hover_opened = Some(id);
                }
            }
            UpdateResult::none()
        }

        Message::HoverLeave => {
            if hover_enabled(state) && state.menu.open_top.is_some() {
                state.menu.close_flyouts();
                state.focus.column = FocusColumn::Bar;
            }
            state.hover_opened = None;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Routing
        // ─────────────────────────────────────────────────────────
        Message::Navigate { path } => {
            // A link inside the drawer closes the drawer right away; desktop
            // flyouts close when the route change comes back.
            if state.menu.mobile_drawer_open {
                state.menu.close_all();
                state.focus = MenuFocus {
                    bar: state.focus.bar,
                    ..MenuFocus::default()
                };
            }
            info!("Navigate to {}", path);
            UpdateResult::action(UpdateAction::Navigate { path })
        }

        Message::RouteChanged(route) => {
            debug!("Route changed {} -> {}", state.route, route);
            state.route = route;
            state.menu.close_all();
            state.focus.column = FocusColumn::Bar;
            state.last_error = None;
            state.hover_opened = None;
            UpdateResult::none()
        }

        Message::NavigationFailed { path, error } => {
            warn!("Navigation to {} failed: {}", path, error);
            state.last_error = Some(format!("Cannot open {path}: {error}"));
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Presentation
        // ─────────────────────────────────────────────────────────
        Message::TogglePresentation => {
            state.presentation_locked = true;
            let next = state.presentation.other();
            state.set_presentation(next);
            info!("Switched to {} menu", next.label());
            UpdateResult::none()
        }

        Message::SetPresentation(presentation) => {
            state.presentation_locked = true;
            state.set_presentation(presentation);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Keyboard Focus
        // ─────────────────────────────────────────────────────────
        Message::FocusPrev => focus::move_focus(state, -1),
        Message::FocusNext => focus::move_focus(state, 1),
        Message::FocusIn => focus::focus_in(state),
        Message::FocusOut => focus::focus_out(state),
        Message::Activate => focus::activate(state),
    }
}

/// Consume the hover marker; true when the hover just opened `id`.
fn claimed_by_hover(state: &mut AppState, id: &EntryId) -> bool {
    state.hover_opened.take().as_ref() == Some(id)
}

fn hover_enabled(state: &AppState) -> bool {
    state.settings.ui.hover_opens_flyout && state.presentation == Presentation::Desktop
}
