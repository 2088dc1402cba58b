//! Activity Board
//!
//! Client for a school extracurricular activities service. Lists activities
//! with their participants, signs students up and removes them, and gives
//! logged-in teachers extra registration controls. State changes flow through
//! a single event loop and every view is derived from the current state.

pub mod config;
pub mod handlers;
pub mod models;
pub mod runtime;
pub mod services;
pub mod state;
pub mod utils;
pub mod view;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{BoardError, Result};

// Re-export main components for easy access
pub use runtime::Dispatcher;
pub use services::ApiClient;
pub use state::{BoardState, Event};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_names_package_and_version() {
        assert_eq!(info(), format!("activity-board v{}", VERSION));
    }
}
