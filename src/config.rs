//! Configuration management module.

use serde::{Deserialize, Serialize};
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

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Main application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub demo: DemoConfig,
}

/// Window preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    pub window_width: f32,
    pub window_height: f32,
}

/// Tuning for the simulated flows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Seconds a full measurement run takes on the device screen.
    pub measurement_secs: u32,
    /// Seconds the quick run on the create-exam tab takes.
    pub quick_measurement_secs: u32,
    /// Milliseconds the fake unlock verification takes.
    pub unlock_delay_ms: u64,
}

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
            Ok(content) => match toml::from_str::<AppConfig>(&content) {
                Ok(config) => match config.validate() {
                    Ok(()) => ConfigLoadResult::Loaded(config),
                    Err(e) => ConfigLoadResult::Invalid(e),
                },
                Err(e) => ConfigLoadResult::Invalid(ConfigError::Parse(e)),
            },
            Err(e) => ConfigLoadResult::Invalid(ConfigError::Read(e)),
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ui.window_width < 640.0 || self.ui.window_height < 480.0 {
            return Err(ConfigError::Validation(
                "Window size must be at least 640x480".to_string(),
            ));
        }
        if self.demo.measurement_secs < 5 || self.demo.measurement_secs > 600 {
            return Err(ConfigError::Validation(
                "Measurement duration must be between 5 and 600 seconds".to_string(),
            ));
        }
        if self.demo.quick_measurement_secs < 1 || self.demo.quick_measurement_secs > 60 {
            return Err(ConfigError::Validation(
                "Quick measurement duration must be between 1 and 60 seconds".to_string(),
            ));
        }
        if self.demo.unlock_delay_ms > 5000 {
            return Err(ConfigError::Validation(
                "Unlock delay cannot exceed 5000 ms".to_string(),
            ));
        }
        Ok(())
    }

    /// Save configuration to file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            window_width: 1200.0,
            window_height: 800.0,
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            measurement_secs: 60,
            quick_measurement_secs: 5,
            unlock_delay_ms: 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_window_too_small() {
        let mut config = AppConfig::default();
        config.ui.window_width = 100.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_measurement_bounds() {
        let mut config = AppConfig::default();

        config.demo.measurement_secs = 0;
        assert!(config.validate().is_err());

        config.demo.measurement_secs = 601;
        assert!(config.validate().is_err());

        config.demo.measurement_secs = 60;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_unlock_delay() {
        let mut config = AppConfig::default();
        config.demo.unlock_delay_ms = 6000;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = AppConfig::default();
        let text = toml::to_string_pretty(&config).expect("serialize");
        let parsed: AppConfig = toml::from_str(&text).expect("parse");
        assert_eq!(parsed.demo.measurement_secs, config.demo.measurement_secs);
        assert_eq!(parsed.ui.window_width, config.ui.window_width);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let parsed: AppConfig = toml::from_str("[ui]\nwindow_width = 1024.0\nwindow_height = 768.0\n").expect("parse");
        assert_eq!(parsed.demo.unlock_delay_ms, 500);
    }
}
