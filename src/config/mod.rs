//! Configuration module for fdel
//!
//! Settings live in `<config_dir>/fdel/config.toml` (or a path given with
//! `--config`). A missing file means defaults; nothing is written unless
//! `fdel config init` is run. Command-line flags override the file.

use crate::app::AppSettings;
use crate::ui::ratatui_adapter::ThemeKind;
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// Largest accepted double-click threshold
const MAX_DOUBLE_CLICK_MS: u64 = 5_000;

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct FdelConfig {
    /// Directory the shell starts in (home directory when unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_directory: Option<PathBuf>,

    /// Pickers list dot-prefixed entries from the start
    pub show_hidden: bool,

    /// Maximum gap between two clicks on the same entry, in milliseconds
    pub double_click_ms: u64,

    /// Color theme
    pub theme: ThemeKind,

    /// Ask before "delete selected" runs
    pub confirm_delete_selected: bool,

    /// How long status bar messages stay visible, in seconds
    pub message_ttl_secs: u64,
}

impl Default for FdelConfig {
    fn default() -> Self {
        Self {
            base_directory: None,
            show_hidden: false,
            double_click_ms: crate::picker::DEFAULT_DOUBLE_CLICK_MS,
            theme: ThemeKind::Dark,
            confirm_delete_selected: false,
            message_ttl_secs: 5,
        }
    }
}

impl FdelConfig {
    /// Get the path to the default config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;
        Ok(config_dir.join("fdel").join("config.toml"))
    }

    /// Resolve the config file path, preferring an explicit one
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if no path is given and the system config
    /// directory cannot be determined.
    pub fn resolve_path(explicit: Option<&Path>) -> Result<PathBuf, ConfigError> {
        explicit.map_or_else(Self::default_path, |path| Ok(path.to_path_buf()))
    }

    /// Load configuration, falling back to defaults when the file is missing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be read, parsed,
    /// or validated.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = Self::resolve_path(explicit)?;
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load configuration from a specific file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, parsed, or validated.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?;
        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Check value ranges
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Message` naming the first invalid key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.double_click_ms == 0 || self.double_click_ms > MAX_DOUBLE_CLICK_MS {
            return Err(ConfigError::Message(format!(
                "double_click_ms must be between 1 and {MAX_DOUBLE_CLICK_MS}, got {}",
                self.double_click_ms
            )));
        }
        if self.message_ttl_secs == 0 {
            return Err(ConfigError::Message(
                "message_ttl_secs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Render as pretty TOML
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))
    }

    /// Save configuration to `path`, creating parent directories
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the directory cannot be created, the
    /// configuration cannot be serialized, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }
        fs::write(path, self.to_toml()?)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;
        info!(path = %path.display(), "wrote config");
        Ok(())
    }

    /// Double-click threshold
    #[must_use]
    pub const fn double_click(&self) -> Duration {
        Duration::from_millis(self.double_click_ms)
    }

    /// Status message lifetime
    #[must_use]
    pub const fn message_ttl(&self) -> Duration {
        Duration::from_secs(self.message_ttl_secs)
    }

    /// Shell behaviour derived from this configuration
    #[must_use]
    pub const fn app_settings(&self) -> AppSettings {
        AppSettings {
            show_hidden: self.show_hidden,
            double_click: self.double_click(),
            confirm_delete_selected: self.confirm_delete_selected,
        }
    }
}
