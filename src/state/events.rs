//! Events fed into the board and effects it asks the runtime to perform

use std::time::Duration;
use crate::models::Activities;
use crate::utils::errors::BoardError;

/// Why a server round-trip did not succeed
///
/// A cloneable summary of `BoardError` that can travel inside events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub status: Option<u16>,
    pub detail: Option<String>,
}

impl Rejection {
    pub fn new(status: u16, detail: impl Into<String>) -> Self {
        Self { status: Some(status), detail: Some(detail.into()) }
    }

    /// Failure with no server-provided explanation (transport or decode error)
    pub fn transport() -> Self {
        Self { status: None, detail: None }
    }

    /// Server text if present, otherwise the given fallback
    pub fn text_or(&self, fallback: &str) -> String {
        self.detail.clone().unwrap_or_else(|| fallback.to_string())
    }
}

impl From<&BoardError> for Rejection {
    fn from(error: &BoardError) -> Self {
        Self {
            status: error.status(),
            detail: error.detail().map(str::to_string),
        }
    }
}

impl From<BoardError> for Rejection {
    fn from(error: BoardError) -> Self {
        Rejection::from(&error)
    }
}

/// Outcome of a server round-trip as seen by the board
pub type Outcome<T> = std::result::Result<T, Rejection>;

/// Everything that can happen to the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Startup: load activities (and optionally restore the session)
    PageLoaded,
    RefreshActivities,
    ActivitiesLoaded(Outcome<Activities>),

    OpenLoginModal,
    /// Click outside the modal
    CloseLoginModal,
    SubmitLogin { username: String, password: String },
    LoginCompleted(Outcome<String>),
    SubmitLogout,
    LogoutCompleted(Outcome<()>),
    SessionRestored(Option<String>),

    EditEmail(String),
    SelectActivity(String),
    SubmitSignup,
    SignupCompleted { activity: String, email: String, outcome: Outcome<()> },

    /// The `Remove` button of a participant row
    RemoveParticipant { activity: String, email: String },
    UnregisterCompleted { activity: String, email: String, outcome: Outcome<()> },

    RegisterStudent { activity: String, email: String },
    RegisterStudentCompleted { activity: String, email: String, outcome: Outcome<Option<String>> },
    UnregisterStudent { activity: String, email: String },
    UnregisterStudentCompleted { activity: String, email: String, outcome: Outcome<Option<String>> },

    MessageExpired(u64),
    Shutdown,
}

impl Event {
    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Event::PageLoaded => "page_loaded",
            Event::RefreshActivities => "refresh_activities",
            Event::ActivitiesLoaded(_) => "activities_loaded",
            Event::OpenLoginModal => "open_login_modal",
            Event::CloseLoginModal => "close_login_modal",
            Event::SubmitLogin { .. } => "submit_login",
            Event::LoginCompleted(_) => "login_completed",
            Event::SubmitLogout => "submit_logout",
            Event::LogoutCompleted(_) => "logout_completed",
            Event::SessionRestored(_) => "session_restored",
            Event::EditEmail(_) => "edit_email",
            Event::SelectActivity(_) => "select_activity",
            Event::SubmitSignup => "submit_signup",
            Event::SignupCompleted { .. } => "signup_completed",
            Event::RemoveParticipant { .. } => "remove_participant",
            Event::UnregisterCompleted { .. } => "unregister_completed",
            Event::RegisterStudent { .. } => "register_student",
            Event::RegisterStudentCompleted { .. } => "register_student_completed",
            Event::UnregisterStudent { .. } => "unregister_student",
            Event::UnregisterStudentCompleted { .. } => "unregister_student_completed",
            Event::MessageExpired(_) => "message_expired",
            Event::Shutdown => "shutdown",
        }
    }
}

/// Work the runtime performs on behalf of the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchActivities,
    RestoreSession,
    Login { username: String, password: String },
    Logout,
    Signup { activity: String, email: String },
    Unregister { activity: String, email: String },
    RegisterStudent { activity: String, email: String },
    UnregisterStudent { activity: String, email: String },
    DismissMessage { id: u64, after: Duration },
}

impl Effect {
    /// Whether the effect performs an HTTP call
    pub fn is_network(&self) -> bool {
        !matches!(self, Effect::DismissMessage { .. })
    }
}
