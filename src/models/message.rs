//! Transient status message model

use serde::{Deserialize, Serialize};

/// Message severity, also used as the CSS class of the message area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A status message shown until its dismissal timer fires
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Identifies the dismissal timer that belongs to this message
    pub id: u64,
    pub text: String,
    pub severity: Severity,
}

impl Message {
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}
