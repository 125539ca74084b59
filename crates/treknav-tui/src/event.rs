//! Terminal event polling

use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use treknav_app::message::Message;
use treknav_app::InputKey;
use treknav_core::prelude::*;

/// What the pointer did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseAction {
    Click,
    Move,
}

/// Pointer event in terminal cell coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseInput {
    pub action: MouseAction,
    pub column: u16,
    pub row: u16,
}

/// A polled terminal event.
///
/// Mouse events stay raw here; they only become messages once the
/// current layout is known (see `hit_test`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermEvent {
    Message(Message),
    Mouse(MouseInput),
}

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(InputKey::BackTab),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::BackTab => Some(InputKey::BackTab),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        _ => None, // Unsupported keys ignored
    }
}

/// Convert crossterm MouseEvent to MouseInput
pub fn mouse_event_to_input(mouse: crossterm::event::MouseEvent) -> Option<MouseInput> {
    let action = match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => MouseAction::Click,
        MouseEventKind::Moved => MouseAction::Move,
        _ => return None,
    };
    Some(MouseInput {
        action,
        column: mouse.column,
        row: mouse.row,
    })
}

/// Translate one crossterm event
pub fn translate(event: Event) -> Option<TermEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            key_event_to_input(key).map(|k| TermEvent::Message(Message::Key(k)))
        }
        Event::Mouse(mouse) => mouse_event_to_input(mouse).map(TermEvent::Mouse),
        Event::Resize(width, _) => Some(TermEvent::Message(Message::Resize { width })),
        _ => None,
    }
}

/// Poll for terminal events with timeout
pub fn poll() -> Result<Option<TermEvent>> {
    // Poll with 50ms timeout (20 FPS)
    if event::poll(Duration::from_millis(50))? {
        Ok(translate(event::read()?))
    } else {
        // Tick on timeout so route changes from elsewhere get picked up
        Ok(Some(TermEvent::Message(Message::Tick)))
    }
}
