//! Data models module
//!
//! This module contains all data structures used throughout the client

pub mod activity;
pub mod api;
pub mod message;
pub mod session;

// Re-export commonly used models
pub use activity::{Activities, Activity, ActivityDetails};
pub use api::{CurrentUser, ErrorResponse, LoginRequest, LoginResponse, MessageResponse, StudentRequest};
pub use message::{Message, Severity};
pub use session::Session;
