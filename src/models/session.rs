//! Teacher session model

use serde::{Deserialize, Serialize};

/// Teacher login state as last confirmed by the server
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Session {
    #[default]
    LoggedOut,
    LoggedIn { username: String },
}

impl Session {
    pub fn logged_in(username: impl Into<String>) -> Self {
        Session::LoggedIn { username: username.into() }
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self, Session::LoggedIn { .. })
    }

    pub fn username(&self) -> Option<&str> {
        match self {
            Session::LoggedIn { username } => Some(username),
            Session::LoggedOut => None,
        }
    }

    /// Short label used in logs
    pub fn label(&self) -> &'static str {
        match self {
            Session::LoggedOut => "logged_out",
            Session::LoggedIn { .. } => "logged_in",
        }
    }
}
