//! Board state
//!
//! The complete, immutable description of what the client knows: the
//! confirmed session, the last activities snapshot, the visible message and
//! the local form fields. `update` produces a new value for every event.

use std::time::Duration;
use crate::config::ClientConfig;
use crate::models::{Activities, Message, Session, Severity};

/// Options that shape how the board reacts to events
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardOptions {
    pub message_ttl: Duration,
    pub restore_session: bool,
}

impl Default for BoardOptions {
    fn default() -> Self {
        Self {
            message_ttl: Duration::from_secs(5),
            restore_session: false,
        }
    }
}

impl From<&ClientConfig> for BoardOptions {
    fn from(config: &ClientConfig) -> Self {
        Self {
            message_ttl: config.message_ttl(),
            restore_session: config.restore_session,
        }
    }
}

/// Contents of the signup form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub email: String,
    /// Selected activity name; empty means the default "Select an activity" option
    pub activity: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    pub session: Session,
    /// `None` until the first successful fetch
    pub activities: Option<Activities>,
    pub message: Option<Message>,
    pub login_modal_open: bool,
    pub signup_form: SignupForm,
    pub options: BoardOptions,
    next_message_id: u64,
}

impl BoardState {
    /// Initial state on page load: logged out, nothing fetched yet
    pub fn new(options: BoardOptions) -> Self {
        Self {
            session: Session::LoggedOut,
            activities: None,
            message: None,
            login_modal_open: false,
            signup_form: SignupForm::default(),
            options,
            next_message_id: 1,
        }
    }

    pub fn is_teacher_logged_in(&self) -> bool {
        self.session.is_logged_in()
    }

    /// Replace the visible message, returning the new message id
    pub(crate) fn show_message(&mut self, text: String, severity: Severity) -> u64 {
        let id = self.next_message_id;
        self.next_message_id += 1;
        self.message = Some(Message { id, text, severity });
        id
    }

    /// Hide the message only if it is still the one the timer was set for
    pub(crate) fn expire_message(&mut self, id: u64) -> bool {
        match &self.message {
            Some(message) if message.id == id => {
                self.message = None;
                true
            }
            _ => false,
        }
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new(BoardOptions::default())
    }
}
