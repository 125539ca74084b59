//! treknav-app - Menu state and orchestration for Trek Nav
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! navigation menu: the per-navbar [`AppState`], the [`Message`]s that change
//! it, the `handler::update` function, the [`Router`] that publishes route
//! changes, and configuration loading.

pub mod accordion;
pub mod actions;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod navbar;
pub mod process;
pub mod router;
pub mod signals;
pub mod state;

// Re-export primary types
pub use accordion::{accordion_rows, AccordionRow, RowKind};
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use navbar::Navbar;
pub use router::{Navigator, RouteSubscription, Router};
pub use state::{AppState, FocusColumn, MenuFocus, MenuPhase, MenuUiState, Presentation};
