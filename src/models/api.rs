//! Request and response payloads of the activities API

use serde::{Deserialize, Serialize};

/// Form body of `POST /api/login`
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Success body of `POST /api/login`
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub username: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of `GET /auth/me` when a session exists
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentUser {
    pub username: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// JSON body of the teacher register/unregister endpoints
#[derive(Debug, Clone, Serialize)]
pub struct StudentRequest<'a> {
    pub student_email: &'a str,
}

/// Success body carrying a human-readable message
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Error body of a rejected request
///
/// The server normally sends `detail`; `message` is accepted as a fallback.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorResponse {
    /// Human-readable text to show the user
    pub fn into_text(self) -> Option<String> {
        match self.detail {
            Some(serde_json::Value::String(text)) => Some(text),
            Some(serde_json::Value::Null) | None => self.message,
            Some(other) => Some(other.to_string()),
        }
    }
}
