//! Key event handlers for each presentation

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, FocusColumn, Presentation};

/// Convert key events to messages based on the current presentation
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::CharCtrl('c') => return Some(Message::Quit),
        InputKey::Tab | InputKey::BackTab => return Some(Message::TogglePresentation),
        _ => {}
    }

    match state.presentation {
        Presentation::Desktop => match state.focus.column {
            FocusColumn::Bar => handle_key_bar(state, key),
            FocusColumn::Flyout | FocusColumn::Side => handle_key_flyout(key),
        },
        Presentation::Mobile => handle_key_mobile(state, key),
    }
}

/// Handle key events while the cursor is on the horizontal bar
fn handle_key_bar(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Left => Some(Message::FocusPrev),
        InputKey::Right => Some(Message::FocusNext),

        // Down steps into a flyout that is already open (e.g. opened by
        // hovering), otherwise it acts like Enter
        InputKey::Down if bar_item_is_open(state) => Some(Message::FocusIn),
        InputKey::Enter | InputKey::Char(' ') | InputKey::Down => Some(Message::Activate),

        InputKey::Esc if state.menu.open_top.is_some() => Some(Message::FocusOut),
        _ => None,
    }
}

/// Handle key events inside the flyout panels
fn handle_key_flyout(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up => Some(Message::FocusPrev),
        InputKey::Down => Some(Message::FocusNext),
        InputKey::Right => Some(Message::FocusIn),
        InputKey::Left | InputKey::Esc => Some(Message::FocusOut),
        InputKey::Enter | InputKey::Char(' ') => Some(Message::Activate),
        _ => None,
    }
}

/// Handle key events for the mobile drawer
fn handle_key_mobile(state: &AppState, key: InputKey) -> Option<Message> {
    if let InputKey::Char('m') = key {
        return Some(Message::ToggleMobileDrawer);
    }
    if !state.menu.mobile_drawer_open {
        return None;
    }

    match key {
        InputKey::Up => Some(Message::FocusPrev),
        InputKey::Down => Some(Message::FocusNext),
        InputKey::Enter | InputKey::Char(' ') => Some(Message::Activate),
        InputKey::Esc => Some(Message::CloseAll),
        _ => None,
    }
}

fn bar_item_is_open(state: &AppState) -> bool {
    state
        .tree
        .roots()
        .get(state.focus.bar)
        .is_some_and(|node| state.menu.is_top_open(&node.id))
}
