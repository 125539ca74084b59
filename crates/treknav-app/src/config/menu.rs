//! Navigation tree loading for .treknav/menu.toml
//!
//! The menu file holds an array of `[[entries]]` tables:
//!
//! ```toml
//! [[entries]]
//! label = "Home"
//! path = "/"
//!
//! [[entries]]
//! label = "Destination"
//!
//! [[entries.children]]
//! label = "Nepal"
//! path = "/destination/nepal"
//! ```
//!
//! Unlike settings, a broken menu file is an error: silently replacing a
//! site's menu with the built-in one would hide the mistake.

use std::path::Path;

use super::types::MenuFile;
use super::{MENU_FILENAME, TREKNAV_DIR};
use treknav_core::prelude::*;
use treknav_core::{NavEntry, NavTree};

/// Load and build the navigation tree.
///
/// `menu_override` is an explicit path (from `--menu`) and must exist.
/// Without it, `.treknav/menu.toml` under `project_path` is used, falling
/// back to [`default_menu`] when that file is absent.
pub fn load_menu(project_path: &Path, menu_override: Option<&Path>) -> Result<NavTree> {
    let path = match menu_override {
        Some(path) => {
            if !path.exists() {
                return Err(Error::config_not_found(path));
            }
            path.to_path_buf()
        }
        None => {
            let path = project_path.join(TREKNAV_DIR).join(MENU_FILENAME);
            if !path.exists() {
                debug!("No menu file at {:?}, using built-in menu", path);
                return Ok(build_tree(default_menu()));
            }
            path
        }
    };

    let content = std::fs::read_to_string(&path)
        .map_err(|e| Error::config(format!("Failed to read {}: {}", path.display(), e)))?;
    let entries = parse_menu(&content)?;

    info!("Loaded menu from {:?} ({} top-level entries)", path, entries.len());
    Ok(build_tree(entries))
}

/// Parse menu TOML into authored entries.
pub fn parse_menu(content: &str) -> Result<Vec<NavEntry>> {
    let file: MenuFile = toml::from_str(content)
        .map_err(|e| Error::config_invalid(format!("invalid menu: {e}")))?;
    if file.entries.is_empty() {
        return Err(Error::config_invalid("menu has no entries"));
    }
    Ok(file.entries)
}

/// Write entries as a menu file.
pub fn save_menu(path: &Path, entries: &[NavEntry]) -> Result<()> {
    let file = MenuFile {
        entries: entries.to_vec(),
    };
    let content = format!(
        "# Trek Nav menu. Leaves need a path; entries with children open a submenu.\n\n{}",
        toml::to_string_pretty(&file)?
    );
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write menu {}", path.display()))?;
    Ok(())
}

/// Build the tree and log any authoring warnings.
pub fn build_tree(entries: Vec<NavEntry>) -> NavTree {
    let tree = NavTree::new(entries);
    for warning in tree.lint() {
        warn!("Menu: {}", warning);
    }
    tree
}

/// The built-in menu of the trekking site.
pub fn default_menu() -> Vec<NavEntry> {
    vec![
        NavEntry::leaf("Home", "/"),
        NavEntry::submenu(
            "Destination",
            vec![
                NavEntry::submenu(
                    "Nepal",
                    vec![
                        NavEntry::leaf("Everest Region", "/destination/nepal/everest"),
                        NavEntry::leaf("Annapurna Region", "/destination/nepal/annapurna"),
                        NavEntry::leaf("Langtang Region", "/destination/nepal/langtang"),
                        NavEntry::leaf("Manaslu Region", "/destination/nepal/manaslu"),
                    ],
                ),
                NavEntry::submenu(
                    "Bhutan",
                    vec![
                        NavEntry::leaf("Cultural Tours", "/destination/bhutan/cultural-tours"),
                        NavEntry::leaf("Druk Path Trek", "/destination/bhutan/druk-path"),
                    ],
                ),
                NavEntry::leaf("Tibet", "/destination/tibet"),
            ],
        ),
        NavEntry::submenu(
            "Activities",
            vec![
                NavEntry::leaf("Trekking", "/activities/trekking"),
                NavEntry::leaf("Peak Climbing", "/activities/peak-climbing"),
                NavEntry::leaf("Jungle Safari", "/activities/jungle-safari"),
                NavEntry::leaf("Day Tours", "/activities/day-tours"),
            ],
        ),
        NavEntry::leaf("About Us", "/about"),
        NavEntry::leaf("Contact", "/contact"),
    ]
}
