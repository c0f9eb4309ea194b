//! Configuration management for bankdesk
//!
//! This module handles loading, validation, and management of
//! bankdesk configuration from YAML files.

pub mod error;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub use error::{ConfigError, ConfigErrorCode, ConfigErrorDetails, ConfigResult};

// ==================== Configuration Types ====================

/// Remote API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000/api".to_string()
}

/// Session storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Directory holding the file-backed session store
    #[serde(default = "default_session_dir")]
    pub dir: PathBuf,
    /// Key the logged-in user is stored under
    #[serde(default = "default_session_key")]
    pub key: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            dir: default_session_dir(),
            key: default_session_key(),
        }
    }
}

fn default_session_dir() -> PathBuf {
    PathBuf::from("./.bankdesk-session")
}

fn default_session_key() -> String {
    "bankUser".to_string()
}

/// Interaction timing and list sizes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Quiet window for the accounts search field
    #[serde(default = "default_accounts_debounce")]
    pub accounts_search_debounce_ms: u64,
    /// Quiet window for the transaction account filter
    #[serde(default = "default_transactions_debounce")]
    pub transactions_filter_debounce_ms: u64,
    /// How long an alert stays fully visible
    #[serde(default = "default_alert_visible")]
    pub alert_visible_ms: u64,
    /// Fade-out time before an alert is removed
    #[serde(default = "default_alert_fade")]
    pub alert_fade_ms: u64,
    /// Rows fetched for the dashboard lists
    #[serde(default = "default_dashboard_limit")]
    pub dashboard_limit: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            accounts_search_debounce_ms: default_accounts_debounce(),
            transactions_filter_debounce_ms: default_transactions_debounce(),
            alert_visible_ms: default_alert_visible(),
            alert_fade_ms: default_alert_fade(),
            dashboard_limit: default_dashboard_limit(),
        }
    }
}

fn default_accounts_debounce() -> u64 {
    300
}

fn default_transactions_debounce() -> u64 {
    500
}

fn default_alert_visible() -> u64 {
    4000
}

fn default_alert_fade() -> u64 {
    500
}

fn default_dashboard_limit() -> usize {
    5
}

impl UiConfig {
    pub fn accounts_debounce(&self) -> Duration {
        Duration::from_millis(self.accounts_search_debounce_ms)
    }

    pub fn transactions_debounce(&self) -> Duration {
        Duration::from_millis(self.transactions_filter_debounce_ms)
    }

    pub fn alert_visible(&self) -> Duration {
        Duration::from_millis(self.alert_visible_ms)
    }

    pub fn alert_fade(&self) -> Duration {
        Duration::from_millis(self.alert_fade_ms)
    }
}

/// Where view fragments come from
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ViewsConfig {
    /// Directory of `<view>.html` files; built-in fragments when unset
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: debug, info, warn, error
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

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Remote API settings
    #[serde(default)]
    pub api: ApiConfig,
    /// Session storage settings
    #[serde(default)]
    pub session: SessionConfig,
    /// Interaction settings
    #[serde(default)]
    pub ui: UiConfig,
    /// View fragment settings
    #[serde(default)]
    pub views: ViewsConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::FileNotFound {
                path: path.to_string_lossy().to_string(),
            },
            _ => ConfigError::IoError,
        })?;

        Self::from_yaml(&content)
    }

    /// Load from a file if it exists, otherwise fall back to defaults
    pub fn load_or_default(path: impl AsRef<Path>) -> ConfigResult<Self> {
        match Self::load(path) {
            Err(ConfigError::FileNotFound { .. }) => Ok(Self::default()),
            other => other,
        }
    }

    /// Parse and validate a YAML document
    pub fn from_yaml(content: &str) -> ConfigResult<Self> {
        let config: Config = serde_yaml::from_str(content).map_err(|_| ConfigError::InvalidYaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.api.base_url.starts_with("http://") {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url".to_string(),
                reason: "Base URL must start with http://".to_string(),
            });
        }

        for (field, value) in [
            ("ui.accounts_search_debounce_ms", self.ui.accounts_search_debounce_ms),
            ("ui.transactions_filter_debounce_ms", self.ui.transactions_filter_debounce_ms),
        ] {
            if value == 0 || value > 10_000 {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    reason: "Debounce window must be between 1 and 10000 ms".to_string(),
                });
            }
        }

        if self.ui.dashboard_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "ui.dashboard_limit".to_string(),
                reason: "Dashboard limit must be greater than 0".to_string(),
            });
        }

        if self.session.key.is_empty() {
            return Err(ConfigError::MissingField {
                field: "session.key".to_string(),
            });
        }

        Ok(())
    }

    /// Generate a default configuration file
    pub fn generate_default() -> &'static str {
        include_str!("../templates/default_config.yaml")
    }

    /// Write the default configuration to a new file
    pub fn write_default(path: impl AsRef<Path>) -> ConfigResult<()> {
        let path = path.as_ref();
        if path.exists() {
            return Err(ConfigError::AlreadyExists {
                path: path.to_string_lossy().to_string(),
            });
        }
        std::fs::write(path, Self::generate_default()).map_err(|_| ConfigError::IoError)
    }

    /// Base URL without a trailing slash
    pub fn api_base(&self) -> &str {
        self.api.base_url.trim_end_matches('/')
    }
}
