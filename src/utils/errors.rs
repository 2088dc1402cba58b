//! Error handling for ActivityBoard
//!
//! This module defines the main error type used throughout the client
//! and the severity classification used when logging failures.

use thiserror::Error;

/// Main error type for the ActivityBoard client
#[derive(Error, Debug)]
pub enum BoardError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Configuration loading error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Request rejected with status {status}: {}", detail.as_deref().unwrap_or("no detail"))]
    Rejected { status: u16, detail: Option<String> },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for ActivityBoard operations
pub type Result<T> = std::result::Result<T, BoardError>;

impl BoardError {
    /// Server-provided, human-readable explanation of the failure, if any
    pub fn detail(&self) -> Option<&str> {
        match self {
            BoardError::Rejected { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// HTTP status of a rejected request
    pub fn status(&self) -> Option<u16> {
        match self {
            BoardError::Rejected { status, .. } => Some(*status),
            BoardError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if the error came from the network layer rather than the server
    ///
    /// A body that arrived but failed to decode is not a transport failure.
    pub fn is_transport(&self) -> bool {
        match self {
            BoardError::Http(e) => !e.is_decode(),
            BoardError::Io(_) => true,
            _ => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            BoardError::Config(_) => ErrorSeverity::Critical,
            BoardError::ConfigLoad(_) => ErrorSeverity::Critical,
            BoardError::UrlParse(_) => ErrorSeverity::Critical,
            BoardError::Rejected { status, .. } if *status == 401 || *status == 403 => ErrorSeverity::Warning,
            BoardError::Rejected { .. } => ErrorSeverity::Info,
            BoardError::InvalidInput(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
