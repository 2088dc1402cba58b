//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from config files and environment variables.

use std::time::Duration;
use serde::{Deserialize, Serialize};

/// Prefix for environment variable overrides (`ACTIVITY_BOARD__API__BASE_URL`)
pub const ENV_PREFIX: &str = "ACTIVITY_BOARD";

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub api: ApiConfig,
    pub client: ClientConfig,
    pub logging: LoggingConfig,
}

/// Activities API configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
    pub user_agent: String,
}

/// Board behaviour configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClientConfig {
    /// How long a status message stays visible
    pub message_ttl_seconds: u64,
    /// Ask the server for an existing session on startup
    pub restore_session: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub file_path: Option<String>,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load settings from the given config file stem (extension optional)
    pub fn load_from(path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::Config::try_from(&Settings::default())?)
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::BoardError> {
        super::validation::validate_settings(self)
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl ClientConfig {
    pub fn message_ttl(&self) -> Duration {
        Duration::from_secs(self.message_ttl_seconds)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://127.0.0.1:8000".to_string(),
                timeout_seconds: 10,
                user_agent: format!("ActivityBoard/{}", env!("CARGO_PKG_VERSION")),
            },
            client: ClientConfig {
                message_ttl_seconds: 5,
                restore_session: false,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "pretty".to_string(),
                file_path: None,
            },
        }
    }
}
