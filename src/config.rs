//! Configuration management module.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration load result.
#[derive(Debug)]
pub enum ConfigLoadResult {
    /// Config loaded successfully.
    Loaded(AppConfig),
    /// Config file missing (first run).
    Missing,
    /// Config file exists but invalid.
    Invalid(ConfigError),
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub admin: AdminConfig,
    #[serde(default)]
    pub seed: SeedConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Admin account accepted by the login form.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    pub email: String,
    pub password: String,
}

/// Initial in-memory data.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Start with the sample patients, medications and reminders.
    pub sample_data: bool,
}

/// UI preferences.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub window_width: f32,
    pub window_height: f32,
    /// Maximum entries kept in the activity log.
    pub activity_log_limit: usize,
}

/// Smallest window the admin layout still fits in.
pub const MIN_WINDOW_WIDTH: f32 = 640.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

impl AppConfig {
    /// Get config file path (same directory as executable).
    pub fn default_path() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("."))
            .join("config.toml")
    }

    /// Attempt to load config with detailed result.
    pub fn try_load(path: &Path) -> ConfigLoadResult {
        if !path.exists() {
            return ConfigLoadResult::Missing;
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml(&content) {
                Ok(config) => ConfigLoadResult::Loaded(config),
                Err(e) => ConfigLoadResult::Invalid(e),
            },
            Err(e) => ConfigLoadResult::Invalid(ConfigError::Read(e)),
        }
    }

    /// Parse and validate config from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let email = self.admin.email.trim();
        if email.is_empty() {
            return Err(ConfigError::Validation("Admin email cannot be empty".to_string()));
        }
        if !email.contains('@') {
            return Err(ConfigError::Validation("Admin email must contain '@'".to_string()));
        }
        if self.admin.password.is_empty() {
            return Err(ConfigError::Validation("Admin password cannot be empty".to_string()));
        }
        if self.ui.window_width < MIN_WINDOW_WIDTH {
            return Err(ConfigError::Validation(format!(
                "Window width must be at least {MIN_WINDOW_WIDTH}"
            )));
        }
        if self.ui.window_height < MIN_WINDOW_HEIGHT {
            return Err(ConfigError::Validation(format!(
                "Window height must be at least {MIN_WINDOW_HEIGHT}"
            )));
        }
        if self.ui.activity_log_limit < 1 {
            return Err(ConfigError::Validation(
                "Activity log limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            email: "admin@example.com".to_string(),
            password: "password".to_string(),
        }
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self { sample_data: true }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            window_width: 1100.0,
            window_height: 850.0,
            activity_log_limit: 100,
        }
    }
}
