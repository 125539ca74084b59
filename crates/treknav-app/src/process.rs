//! Message processing
//!
//! Runs a message through the TEA update loop and carries out the actions
//! it requests.

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::router::Navigator;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message(state: &mut AppState, message: Message, navigator: &dyn Navigator) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        msg = result.message;

        if let Some(action) = result.action {
            if let Some(failure) = handle_action(action, navigator) {
                // Follow-up messages and action failures never coexist:
                // actions only come from Navigate, which has no follow-up
                msg = Some(failure);
            }
        }
    }
}
