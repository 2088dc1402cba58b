//! Test helpers module
//!
//! Mock activities server, fixtures and logging setup shared by the
//! integration tests.

pub mod activity_mock;
pub mod fixtures;

pub use activity_mock::*;
pub use fixtures::*;

use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize logging for tests (called once)
pub fn init_test_logging() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init();
    });
}
