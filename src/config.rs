//! Playground Configuration
//!
//! Optional settings read from `akgui-playground.toml` in the platform config
//! directory. A missing file is created with the defaults.

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::constants::{
    CONFIG_FILE_NAME, DEFAULT_MOBILE_BREAKPOINT, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH,
    MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
};
use crate::error::{Error, Result};
use crate::playground::routes::Route;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

impl WindowConfig {
    /// Size clamped to the minimum usable window
    pub fn clamped(&self) -> (f32, f32) {
        (
            self.width.max(MIN_WINDOW_WIDTH),
            self.height.max(MIN_WINDOW_HEIGHT),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaygroundConfig {
    /// Route opened at startup
    pub initial_route: String,
    /// Width below which the sidebar collapses
    pub mobile_breakpoint: f32,
    pub window: WindowConfig,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            initial_route: "/".to_string(),
            mobile_breakpoint: DEFAULT_MOBILE_BREAKPOINT,
            window: WindowConfig::default(),
        }
    }
}

fn get_or_create_config_dir() -> Result<PathBuf> {
    let Some(project_dirs) = ProjectDirs::from("dev", "akgui", "akgui-playground") else {
        return Err(Error::ProjectDirs);
    };
    let config_dir = project_dirs.config_dir();
    if !config_dir.exists() {
        fs::create_dir_all(config_dir)?;
    }
    Ok(config_dir.to_path_buf())
}

impl PlaygroundConfig {
    /// Parse a config document; blank input yields the defaults
    pub fn from_toml(value: &str) -> Result<Self> {
        if value.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = toml::from_str(value)?;
        config.validate()
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    fn validate(self) -> Result<Self> {
        if !self.mobile_breakpoint.is_finite() || self.mobile_breakpoint <= 0.0 {
            return Err(Error::Invalid {
                message: format!("mobile_breakpoint must be positive, got {}", self.mobile_breakpoint),
            });
        }
        Ok(self)
    }

    /// Load from the config directory, writing defaults when the file is absent
    pub fn try_load() -> Result<Self> {
        let path = get_or_create_config_dir()?.join(CONFIG_FILE_NAME);
        if !path.exists() {
            let defaults = Self::default();
            fs::write(&path, defaults.to_toml()?)?;
            info!(path = ?path, "Created default config file");
            return Ok(defaults);
        }

        info!(path = ?path, "Loading config file");
        let value = fs::read_to_string(&path)?;
        Self::from_toml(&value).map_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse config file");
            e
        })
    }

    /// Startup route, preferring an explicit override
    pub fn startup_route(&self, override_path: Option<&str>) -> Route {
        Route::parse(override_path.unwrap_or(&self.initial_route))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_document_is_default() {
        assert_eq!(PlaygroundConfig::from_toml("  \n").ok(), Some(PlaygroundConfig::default()));
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let config = PlaygroundConfig::from_toml("initial_route = \"/card\"\n[window]\nwidth = 900.0\n");
        let config = config.ok();
        assert_eq!(config.as_ref().map(|c| c.initial_route.as_str()), Some("/card"));
        assert_eq!(config.as_ref().map(|c| c.window.width), Some(900.0));
        assert_eq!(config.as_ref().map(|c| c.window.height), Some(DEFAULT_WINDOW_HEIGHT));
        assert_eq!(config.map(|c| c.mobile_breakpoint), Some(DEFAULT_MOBILE_BREAKPOINT));
    }

    #[test]
    fn invalid_breakpoint_is_rejected() {
        let result = PlaygroundConfig::from_toml("mobile_breakpoint = -1.0");
        assert!(matches!(result, Err(Error::Invalid { .. })));
    }

    #[test]
    fn malformed_document_is_a_toml_error() {
        let result = PlaygroundConfig::from_toml("initial_route = ");
        assert!(matches!(result, Err(Error::TomlDe { .. })));
    }

    #[test]
    fn defaults_survive_serialization() {
        let defaults = PlaygroundConfig::default();
        let text = defaults.to_toml().unwrap_or_default();
        assert_eq!(PlaygroundConfig::from_toml(&text).ok(), Some(defaults));
    }

    #[test]
    fn override_route_wins() {
        let config = PlaygroundConfig {
            initial_route: "/card".to_string(),
            ..Default::default()
        };
        assert_eq!(config.startup_route(None), Route::component("card"));
        assert_eq!(config.startup_route(Some("/appbar")), Route::component("appbar"));
    }

    #[test]
    fn window_size_is_clamped() {
        let window = WindowConfig {
            width: 100.0,
            height: 2000.0,
        };
        assert_eq!(window.clamped(), (MIN_WINDOW_WIDTH, 2000.0));
    }
}
