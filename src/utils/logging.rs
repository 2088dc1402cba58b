//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the ActivityBoard client. Log output goes to stderr (and optionally a
//! rolling file) so that stdout stays reserved for the rendered board.

use tracing::{info, warn, error, debug};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};
use crate::config::LoggingConfig;
use crate::utils::errors::{BoardError, Result};

/// Initialize logging based on configuration
///
/// The returned guard must be kept alive for the file writer to flush.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let json = config.format == "json";

    let stderr_layer = if json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .boxed()
    };

    let (file_layer, guard) = match &config.file_path {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "activity-board.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking)
                .boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| BoardError::Config(format!("Failed to initialize logging: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log a confirmed session transition
pub fn log_session_transition(from: &str, to: &str, username: Option<&str>) {
    info!(
        from = from,
        to = to,
        username = username,
        "Session transition"
    );
}

/// Log board actions with structured data
pub fn log_board_action(action: &str, activity: &str, email: &str, success: bool) {
    if success {
        info!(
            action = action,
            activity = activity,
            email = email,
            "Board action succeeded"
        );
    } else {
        warn!(
            action = action,
            activity = activity,
            email = email,
            "Board action failed"
        );
    }
}

/// Log a privileged action refused locally because no teacher is logged in
pub fn log_refused_action(action: &str, activity: &str) {
    warn!(
        action = action,
        activity = activity,
        "Teacher action refused: not logged in"
    );
}

/// Log API errors with context
pub fn log_api_error(api: &str, error: &BoardError) {
    if error.is_transport() {
        error!(
            api = api,
            error = %error,
            severity = %error.severity(),
            "API transport error"
        );
    } else if let BoardError::Rejected { status, .. } = error {
        debug!(
            api = api,
            error = %error,
            status = status,
            "API request rejected"
        );
    } else {
        warn!(
            api = api,
            error = %error,
            "Unexpected API response"
        );
    }
}
