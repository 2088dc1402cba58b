//! Services module
//!
//! This module contains the clients for the external sign-up service

pub mod api;

// Re-export commonly used services
pub use api::ApiClient;
