//! Configuration types for Trek Nav
//!
//! Defines:
//! - `Settings` - Application settings (.treknav/config.toml)
//! - `MenuFile` - The navigation tree file (.treknav/menu.toml)
//! - Related sub-types and enums

use serde::{Deserialize, Serialize};
use treknav_core::NavEntry;

/// Application settings (.treknav/config.toml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,
}

/// Which menu presentation to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PresentationMode {
    /// Pick from the terminal width (see `UiSettings::mobile_breakpoint`)
    #[default]
    Auto,
    /// Always the horizontal flyout bar
    Desktop,
    /// Always the accordion drawer
    Mobile,
}

/// Glyph set for chevrons and the drawer button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IconMode {
    #[default]
    Unicode,
    Ascii,
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    #[serde(default)]
    pub presentation: PresentationMode,

    /// Terminal width (columns) below which `auto` picks the mobile drawer
    #[serde(default = "default_mobile_breakpoint")]
    pub mobile_breakpoint: u16,

    /// Open desktop flyouts when the pointer hovers a top-level entry
    #[serde(default = "default_true")]
    pub hover_opens_flyout: bool,

    #[serde(default)]
    pub icons: IconMode,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            presentation: PresentationMode::Auto,
            mobile_breakpoint: default_mobile_breakpoint(),
            hover_opens_flyout: true,
            icons: IconMode::Unicode,
        }
    }
}

fn default_mobile_breakpoint() -> u16 {
    60
}

fn default_true() -> bool {
    true
}

/// Behavior settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Route shown when the app starts
    #[serde(default = "default_initial_route")]
    pub initial_route: String,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self {
            initial_route: default_initial_route(),
        }
    }
}

fn default_initial_route() -> String {
    "/".to_string()
}

/// Navigation tree file (.treknav/menu.toml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct MenuFile {
    #[serde(default)]
    pub entries: Vec<NavEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.ui.presentation, PresentationMode::Auto);
        assert_eq!(settings.ui.mobile_breakpoint, 60);
        assert!(settings.ui.hover_opens_flyout);
        assert_eq!(settings.behavior.initial_route, "/");
    }

    #[test]
    fn test_settings_deserialize_partial() {
        let settings: Settings = toml::from_str(
            r#"
[ui]
presentation = "mobile"
"#,
        )
        .unwrap();
        assert_eq!(settings.ui.presentation, PresentationMode::Mobile);
        assert_eq!(settings.ui.mobile_breakpoint, 60);
        assert!(settings.ui.hover_opens_flyout);
        assert_eq!(settings.behavior.initial_route, "/");
    }

    #[test]
    fn test_settings_deserialize_full() {
        let settings: Settings = toml::from_str(
            r#"
[ui]
presentation = "desktop"
mobile_breakpoint = 80
hover_opens_flyout = false
icons = "ascii"

[behavior]
initial_route = "/about"
"#,
        )
        .unwrap();
        assert_eq!(settings.ui.presentation, PresentationMode::Desktop);
        assert_eq!(settings.ui.mobile_breakpoint, 80);
        assert!(!settings.ui.hover_opens_flyout);
        assert_eq!(settings.ui.icons, IconMode::Ascii);
        assert_eq!(settings.behavior.initial_route, "/about");
    }

    #[test]
    fn test_unknown_presentation_is_rejected() {
        let result: Result<Settings, _> = toml::from_str(
            r#"
[ui]
presentation = "tablet"
"#,
        );
        assert!(result.is_err());
    }
}
