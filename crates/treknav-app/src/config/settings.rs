//! Settings parser for .treknav/config.toml

use super::menu::{default_menu, save_menu};
use super::types::Settings;
use super::{CONFIG_FILENAME, MENU_FILENAME, TREKNAV_DIR};
use std::path::Path;
use treknav_core::prelude::*;

// ─────────────────────────────────────────────────────────────────────────────
// Settings Loading
// ─────────────────────────────────────────────────────────────────────────────

/// Load settings from .treknav/config.toml
///
/// Returns default settings if file doesn't exist or can't be parsed.
pub fn load_settings(project_path: &Path) -> Settings {
    let config_path = project_path.join(TREKNAV_DIR).join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Write settings to .treknav/config.toml, creating the directory if needed.
pub fn save_settings(project_path: &Path, settings: &Settings) -> Result<()> {
    let dir = project_path.join(TREKNAV_DIR);
    std::fs::create_dir_all(&dir)
        .map_err(|e| Error::config(format!("Failed to create {}: {}", dir.display(), e)))?;

    let body = toml::to_string_pretty(settings)?;
    let content = format!("{}{}", generate_config_header(), body);
    std::fs::write(dir.join(CONFIG_FILENAME), content)
        .context("Failed to write .treknav/config.toml")?;

    debug!("Saved settings to {:?}", dir.join(CONFIG_FILENAME));
    Ok(())
}

/// Create default config files in .treknav/ directory
///
/// Existing files are left untouched.
pub fn init_config_dir(project_path: &Path) -> Result<()> {
    let dir = project_path.join(TREKNAV_DIR);

    if !dir.exists() {
        std::fs::create_dir_all(&dir)
            .map_err(|e| Error::config(format!("Failed to create .treknav dir: {}", e)))?;
        info!("Created {:?}", dir);
    }

    let config_path = dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        std::fs::write(&config_path, generate_default_config())
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
        info!("Created default config at {:?}", config_path);
    }

    let menu_path = dir.join(MENU_FILENAME);
    if !menu_path.exists() {
        save_menu(&menu_path, &default_menu())?;
        info!("Created default menu at {:?}", menu_path);
    }

    Ok(())
}

fn generate_config_header() -> String {
    r#"# Trek Nav Configuration
# See .treknav/menu.toml for the navigation tree.

"#
    .to_string()
}

fn generate_default_config() -> String {
    format!(
        r#"{}[ui]
# Menu presentation: "auto", "desktop", or "mobile"
presentation = "auto"

# With presentation = "auto", terminals narrower than this use the mobile drawer
mobile_breakpoint = 60

# Open desktop flyouts on mouse hover
hover_opens_flyout = true

# Glyphs: "unicode" or "ascii"
icons = "unicode"

[behavior]
# Route shown at startup
initial_route = "/"
"#,
        generate_config_header()
    )
}
