//! Routing layer
//!
//! [`Router`] owns the current [`Route`] and publishes changes over a
//! `tokio::sync::watch` channel. Every mounted navbar holds a
//! [`RouteSubscription`] and polls it once per loop iteration; dropping the
//! subscription unregisters the navbar.

use std::sync::Mutex;

use tokio::sync::watch;
use treknav_core::prelude::*;
use treknav_core::Route;

/// Something that can move the application to a new location.
///
/// Leaf links hand their path over verbatim; the implementation decides
/// what a path means.
#[cfg_attr(test, mockall::automock)]
pub trait Navigator {
    fn navigate(&self, path: &str) -> Result<()>;
}

/// In-process router with change notification.
#[derive(Debug)]
pub struct Router {
    tx: watch::Sender<Route>,
    history: Mutex<Vec<Route>>,
}

impl Router {
    pub fn new(initial: Route) -> Self {
        let (tx, _rx) = watch::channel(initial.clone());
        Self {
            tx,
            history: Mutex::new(vec![initial]),
        }
    }

    /// The route most recently published.
    pub fn current(&self) -> Route {
        self.tx.borrow().clone()
    }

    /// Every distinct route the router has held, oldest first.
    pub fn history(&self) -> Vec<Route> {
        self.history
            .lock()
            .map(|h| h.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    /// Register a new observer. The subscription starts "seen", so only
    /// later changes are reported by [`RouteSubscription::poll_change`].
    pub fn subscribe(&self) -> RouteSubscription {
        RouteSubscription {
            rx: self.tx.subscribe(),
        }
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Navigator for Router {
    fn navigate(&self, path: &str) -> Result<()> {
        if path.is_empty() {
            return Err(Error::navigation(path, "empty path"));
        }

        let route = Route::from(path);
        let changed = self.tx.send_if_modified(|current| {
            if *current == route {
                false
            } else {
                *current = route.clone();
                true
            }
        });

        if changed {
            debug!("Route published: {}", route);
            match self.history.lock() {
                Ok(mut history) => history.push(route),
                Err(poisoned) => poisoned.into_inner().push(route),
            }
        } else {
            trace!("Route unchanged: {}", route);
        }
        Ok(())
    }
}

/// A navbar's registration with the [`Router`].
#[derive(Debug)]
pub struct RouteSubscription {
    rx: watch::Receiver<Route>,
}

impl RouteSubscription {
    /// Route at the time of the last poll (or of subscribing).
    pub fn current(&self) -> Route {
        self.rx.borrow().clone()
    }

    /// Returns the new route if it changed since the last poll.
    ///
    /// Never blocks. A dropped router reports no further changes.
    pub fn poll_change(&mut self) -> Option<Route> {
        match self.rx.has_changed() {
            Ok(true) => Some(self.rx.borrow_and_update().clone()),
            Ok(false) | Err(_) => None,
        }
    }
}
