//! A mounted navigation bar
//!
//! Bundles one [`AppState`] with its route subscription. Each navbar owns
//! its open/closed state, so several can be mounted on one router without
//! interfering; a route change closes all of them.

use std::sync::Arc;

use treknav_core::prelude::*;
use treknav_core::NavTree;

use crate::config::Settings;
use crate::handler;
use crate::message::Message;
use crate::process::process_message;
use crate::router::{Navigator, RouteSubscription, Router};
use crate::state::AppState;

pub struct Navbar {
    state: AppState,
    subscription: RouteSubscription,
}

impl Navbar {
    /// Mount a navbar and subscribe it to `router`.
    pub fn mount(tree: Arc<NavTree>, settings: Settings, router: &Router) -> Self {
        let subscription = router.subscribe();
        let route = subscription.current();
        info!("Navbar mounted at {} ({} entries)", route, tree.len());
        Self {
            state: AppState::new(tree, settings, route),
            subscription,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    /// Apply a pending route change, if any. Returns whether one was applied.
    pub fn sync_route(&mut self) -> bool {
        match self.subscription.poll_change() {
            Some(route) => {
                handler::update(&mut self.state, Message::RouteChanged(route));
                true
            }
            None => false,
        }
    }

    /// Process `message`, then pick up any route change it caused.
    pub fn dispatch(&mut self, message: Message, navigator: &dyn Navigator) {
        process_message(&mut self.state, message, navigator);
        self.sync_route();
    }
}

impl Drop for Navbar {
    fn drop(&mut self) {
        debug!("Navbar unmounted at {}", self.state.route);
    }
}
