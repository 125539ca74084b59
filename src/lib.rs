//! Trek Nav Library
//!
//! Navigation menu of a trekking and tour site, driven from the terminal
//! or scripted over NDJSON in headless mode.

pub mod headless;

// Re-export main entry points
pub use headless::runner::{run_headless, run_script};
pub use treknav_tui::run;
