//! glassdesk general configuration

mod checks;

use anyhow::Result;
use glassdesk_core::models::{AppId, Position, Size, WidgetCascade};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use xdg::BaseDirectories;

/// General configuration
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub taskbar_height: f64,
    pub padding: f64,
    pub grid_unit: f64,
    pub snap_threshold: f64,
    pub cascade_jitter: f64,
    /// Application opened in the bottom right corner. Unset to cascade it
    /// like every other window.
    pub docked_app: Option<AppId>,
    pub docked_margin: f64,
    pub toast_duration_ms: u64,
    pub boot_delay_ms: u64,
    pub shutdown_delay_ms: u64,
    /// Where the desktop settings are kept. Defaults to the XDG data dir.
    pub store: Option<PathBuf>,
    pub cascade_origin: Position,
    pub widget_cascade: WidgetCascade,
    pub viewport: Size,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_owned(),
            taskbar_height: 48.0,
            padding: 12.0,
            grid_unit: 24.0,
            snap_threshold: 16.0,
            cascade_jitter: 40.0,
            docked_app: Some(AppId::Chatbot),
            docked_margin: 16.0,
            toast_duration_ms: 5000,
            boot_delay_ms: 2500,
            shutdown_delay_ms: 1500,
            store: None,
            cascade_origin: Position::new(100.0, 80.0),
            widget_cascade: WidgetCascade::default(),
            viewport: Size::new(1280.0, 800.0),
        }
    }
}

/// Load the configuration, falling back to the defaults on any error.
#[must_use]
pub fn load(path: Option<&Path>) -> Config {
    load_from_file(path)
        .map_err(|err| eprintln!("ERROR LOADING CONFIG: {err:?}"))
        .unwrap_or_default()
}

/// Read `path`, or `$XDG_CONFIG_HOME/glassdesk/config.toml` when `None`.
/// A missing file is created holding the defaults.
///
/// # Errors
///
/// Function will throw an error if `BaseDirectories` doesn't exist, if user doesn't have
/// permissions to place config.toml, if config.toml cannot be read (access writes, malformed file,
/// etc.).
/// Function can also error from inability to save config.toml (if it is the first time running
/// glassdesk).
pub fn load_from_file(path: Option<&Path>) -> Result<Config> {
    let config_filename = match path {
        Some(path) => path.to_owned(),
        None => BaseDirectories::with_prefix("glassdesk")?.place_config_file("config.toml")?,
    };
    if config_filename.exists() {
        let contents = fs::read_to_string(&config_filename)?;
        Ok(toml::from_str(&contents)?)
    } else {
        let config = Config::default();
        if let Some(parent) = config_filename.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&config_filename, toml::to_string(&config)?)?;
        Ok(config)
    }
}

impl Config {
    /// File the desktop settings are kept in.
    ///
    /// # Errors
    ///
    /// Will error if no store is configured and the XDG data directory cannot be created.
    pub fn store_path(&self) -> Result<PathBuf> {
        match &self.store {
            Some(path) => Ok(path.clone()),
            None => Ok(BaseDirectories::with_prefix("glassdesk")?.place_data_file("desktop.json")?),
        }
    }
}

impl glassdesk_core::Config for Config {
    fn taskbar_height(&self) -> f64 {
        self.taskbar_height
    }

    fn padding(&self) -> f64 {
        self.padding
    }

    fn grid_unit(&self) -> f64 {
        self.grid_unit
    }

    fn snap_threshold(&self) -> f64 {
        self.snap_threshold
    }

    fn cascade_origin(&self) -> Position {
        self.cascade_origin
    }

    fn cascade_jitter(&self) -> f64 {
        self.cascade_jitter
    }

    fn docked_app(&self) -> Option<AppId> {
        self.docked_app
    }

    fn docked_margin(&self) -> f64 {
        self.docked_margin
    }

    fn widget_cascade(&self) -> WidgetCascade {
        self.widget_cascade
    }

    fn initial_viewport(&self) -> Size {
        self.viewport
    }

    fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }

    fn boot_delay(&self) -> Duration {
        Duration::from_millis(self.boot_delay_ms)
    }

    fn shutdown_delay(&self) -> Duration {
        Duration::from_millis(self.shutdown_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glassdesk_core::snap::SnapSettings;
    use glassdesk_core::Config as _;

    #[test]
    fn defaults_match_the_built_in_snap_settings() {
        assert_eq!(Config::default().snap_settings(), SnapSettings::default());
    }

    #[test]
    fn missing_file_is_created_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = load_from_file(Some(&path)).unwrap();
        assert_eq!(config, Config::default());
        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(toml::from_str::<Config>(&written).unwrap(), config);
    }

    #[test]
    fn partial_files_keep_the_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "grid_unit = 32.0\ndocked_app = \"memory\"\n\n[viewport]\nwidth = 1920.0\nheight = 1080.0\n").unwrap();
        let config = load_from_file(Some(&path)).unwrap();
        assert_eq!(config.grid_unit, 32.0);
        assert_eq!(config.docked_app, Some(AppId::Memory));
        assert_eq!(config.initial_viewport(), Size::new(1920.0, 1080.0));
        assert_eq!(config.padding, 12.0);
    }

    #[test]
    fn broken_files_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "grid_unit = \"wide\"").unwrap();
        assert!(load_from_file(Some(&path)).is_err());
        assert_eq!(load(Some(&path)), Config::default());
    }

    #[test]
    fn configured_store_path_wins() {
        let config = Config {
            store: Some(PathBuf::from("/tmp/desk.json")),
            ..Config::default()
        };
        assert_eq!(config.store_path().unwrap(), PathBuf::from("/tmp/desk.json"));
    }
}
