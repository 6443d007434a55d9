//! Configuration management for dashkit
//!
//! This module handles loading, validation, and management of
//! dashkit configuration from YAML files.

pub mod error;

use serde::{Deserialize, Serialize};
use std::path::Path;

pub use error::{ConfigError, ConfigResult};

// ==================== Configuration Types ====================

/// Display formatting settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormattingConfig {
    /// Locale tag used for dates when none is given (e.g. "en-US", "de-DE")
    #[serde(default = "default_locale")]
    pub locale: String,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
        }
    }
}

fn default_locale() -> String {
    "en-US".to_string()
}

/// Search input settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Quiet period before a keystroke is applied to the URL
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Placeholder text of the search field
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            placeholder: default_placeholder(),
        }
    }
}

fn default_debounce_ms() -> u64 {
    300
}

fn default_placeholder() -> String {
    "Search invoices...".to_string()
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Formatting settings
    #[serde(default)]
    pub formatting: FormattingConfig,
    /// Search settings
    #[serde(default)]
    pub search: SearchConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            message: format!("{}: {}", path.display(), e),
        })?;
        let config = Self::from_yaml(&content)?;
        log::debug!(target: "dashkit::config", "Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse and validate configuration from YAML text
    pub fn from_yaml(content: &str) -> ConfigResult<Self> {
        let config: Config = serde_yaml::from_str(content)
            .map_err(|e| ConfigError::InvalidYaml { message: e.to_string() })?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> ConfigResult<()> {
        if !is_locale_tag(&self.formatting.locale) {
            return Err(ConfigError::InvalidValue {
                field: "formatting.locale".to_string(),
                reason: "Locale must look like 'en-US'".to_string(),
            });
        }

        if self.search.debounce_ms == 0 || self.search.debounce_ms > 10_000 {
            return Err(ConfigError::InvalidValue {
                field: "search.debounce_ms".to_string(),
                reason: "Debounce window must be between 1 and 10000 ms".to_string(),
            });
        }

        if !LOG_LEVELS.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "logging.level".to_string(),
                reason: format!("Log level must be one of: {}", LOG_LEVELS.join(", ")),
            });
        }

        Ok(())
    }

    /// Generate a default configuration file
    pub fn generate_default() -> &'static str {
        include_str!("../templates/default_config.yaml")
    }
}

/// `language[-REGION]`, with `_` accepted in place of `-`
fn is_locale_tag(tag: &str) -> bool {
    let mut parts = tag.split(|c| c == '-' || c == '_');
    let language = parts.next().unwrap_or("");
    let region = parts.next();

    (2..=3).contains(&language.len())
        && language.chars().all(|c| c.is_ascii_alphabetic())
        && region.map_or(true, |r| r.len() == 2 && r.chars().all(|c| c.is_ascii_alphabetic()))
        && parts.next().is_none()
}
