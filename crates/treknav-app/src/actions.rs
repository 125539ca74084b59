//! Action handlers: execute side effects requested by the update function

use treknav_core::prelude::*;

use crate::handler::UpdateAction;
use crate::message::Message;
use crate::router::Navigator;

/// Execute an action. Returns a message to feed back into the update loop
/// when the action fails.
pub fn handle_action(action: UpdateAction, navigator: &dyn Navigator) -> Option<Message> {
    match action {
        UpdateAction::Navigate { path } => match navigator.navigate(&path) {
            Ok(()) => None,
            Err(e) => {
                if e.is_recoverable() {
                    warn!("Navigation to {} failed: {}", path, e);
                } else {
                    error!("Navigation to {} failed: {}", path, e);
                }
                Some(Message::NavigationFailed {
                    path,
                    error: e.to_string(),
                })
            }
        },
    }
}
