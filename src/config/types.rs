use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub permissions: PermissionsConfig,
}

/// UI settings for the onboarding screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Render tick interval in milliseconds. Drives animations.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Maximum content width in columns; content is centered beyond this.
    #[serde(default = "default_content_max_width")]
    pub content_max_width: u16,
}

/// Settings for the permission runtime.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PermissionsConfig {
    /// Path to the consent ledger file. Defaults to
    /// `<config>/mailstart/permissions.toml`.
    #[serde(default)]
    pub ledger_path: Option<PathBuf>,
    /// Force the notifications capability on or off instead of probing the
    /// platform.
    #[serde(default)]
    pub notifications_supported: Option<bool>,
}

fn default_tick_rate_ms() -> u64 {
    50
}

fn default_content_max_width() -> u16 {
    80
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            content_max_width: default_content_max_width(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = Config::default();
        assert_eq!(config.ui.tick_rate_ms, 50);
        assert_eq!(config.ui.content_max_width, 80);
        assert!(config.permissions.ledger_path.is_none());
        assert!(config.permissions.notifications_supported.is_none());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let config: Config = toml::from_str("[ui]\ntick_rate_ms = 100\n").unwrap();
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert_eq!(config.ui.content_max_width, 80);
    }
}
