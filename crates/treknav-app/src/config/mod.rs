//! Configuration file parsing for Trek Nav
//!
//! Supports:
//! - `.treknav/config.toml` - Settings
//! - `.treknav/menu.toml` - Navigation tree

pub mod menu;
pub mod settings;
pub mod types;

pub(crate) const TREKNAV_DIR: &str = ".treknav";
pub(crate) const CONFIG_FILENAME: &str = "config.toml";
pub(crate) const MENU_FILENAME: &str = "menu.toml";

pub use menu::{build_tree, default_menu, load_menu, parse_menu, save_menu};
pub use settings::{init_config_dir, load_settings, save_settings};
pub use types::*;
