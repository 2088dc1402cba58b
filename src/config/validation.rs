//! Configuration validation module
//!
//! Checks that loaded settings are usable before the client starts.

use crate::utils::errors::{BoardError, Result};
use super::Settings;

const VALID_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const VALID_FORMATS: [&str; 2] = ["pretty", "json"];

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_api_config(&settings.api)?;
    validate_client_config(&settings.client)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate API configuration
fn validate_api_config(config: &super::ApiConfig) -> Result<()> {
    if config.base_url.is_empty() {
        return Err(BoardError::Config(
            "API base URL is required".to_string()
        ));
    }

    let url = url::Url::parse(&config.base_url)?;
    if url.cannot_be_a_base() {
        return Err(BoardError::Config(
            format!("API base URL cannot be used as a base: {}", config.base_url)
        ));
    }

    if config.timeout_seconds == 0 {
        return Err(BoardError::Config(
            "API timeout must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate board behaviour configuration
fn validate_client_config(config: &super::ClientConfig) -> Result<()> {
    if config.message_ttl_seconds == 0 {
        return Err(BoardError::Config(
            "Message TTL must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(BoardError::Config(
            "Log level is required".to_string()
        ));
    }

    if !VALID_LEVELS.contains(&config.level.as_str()) {
        return Err(BoardError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, VALID_LEVELS)
        ));
    }

    if !VALID_FORMATS.contains(&config.format.as_str()) {
        return Err(BoardError::Config(
            format!("Invalid log format: {}. Valid formats: {:?}", config.format, VALID_FORMATS)
        ));
    }

    Ok(())
}
