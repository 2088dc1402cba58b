//! Configuration management module
//!
//! This module handles loading and validation of client configuration
//! from config files and environment variables.

pub mod settings;
pub mod validation;

pub use settings::{Settings, ApiConfig, ClientConfig, LoggingConfig, ENV_PREFIX};
