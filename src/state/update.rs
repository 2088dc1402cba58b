//! Board transition function
//!
//! `update` maps the current state and one event to the next state plus the
//! effects the runtime must perform. It never touches the network itself, so
//! every session rule and action guard can be tested without a server.

use tracing::debug;
use crate::models::{Session, Severity};
use crate::utils::helpers::is_valid_email;
use crate::utils::logging::{log_board_action, log_refused_action, log_session_transition};
use super::board::BoardState;
use super::events::{Effect, Event, Outcome};

pub const MSG_LOAD_FAILED: &str = "Failed to load activities";
pub const MSG_LOGGED_IN: &str = "Logged in successfully";
pub const MSG_LOGIN_FAILED: &str = "Login failed";
pub const MSG_LOGGED_OUT: &str = "Logged out successfully";
pub const MSG_LOGOUT_FAILED: &str = "Logout failed";
pub const MSG_SIGNUP_FAILED: &str = "Failed to sign up";
pub const MSG_UNREGISTER_FAILED: &str = "Failed to unregister";
pub const MSG_REGISTER_STUDENT_FAILED: &str = "Failed to register student";
pub const MSG_UNREGISTER_STUDENT_FAILED: &str = "Failed to unregister student";
pub const MSG_LOGIN_TO_REGISTER: &str = "Please login as a teacher to register students";
pub const MSG_LOGIN_TO_UNREGISTER: &str = "Please login as a teacher to unregister students";
pub const MSG_SELECT_ACTIVITY: &str = "Please select an activity";
pub const MSG_INVALID_EMAIL: &str = "Please enter a valid email";

/// Result of applying one event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: BoardState,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn start(state: &BoardState) -> Self {
        Self { state: state.clone(), effects: Vec::new() }
    }

    fn effect(&mut self, effect: Effect) {
        self.effects.push(effect);
    }

    fn notify(&mut self, text: impl Into<String>, severity: Severity) {
        let id = self.state.show_message(text.into(), severity);
        self.effects.push(Effect::DismissMessage {
            id,
            after: self.state.options.message_ttl,
        });
    }

    fn success(&mut self, text: impl Into<String>) {
        self.notify(text, Severity::Success);
    }

    fn error(&mut self, text: impl Into<String>) {
        self.notify(text, Severity::Error);
    }

    /// Report a finished mutation; success always triggers exactly one re-fetch
    fn mutation_done<T>(
        &mut self,
        action: &str,
        activity: &str,
        email: &str,
        outcome: Outcome<T>,
        on_success: impl FnOnce(T) -> String,
        fallback: &str,
    ) -> bool {
        match outcome {
            Ok(value) => {
                log_board_action(action, activity, email, true);
                self.success(on_success(value));
                self.effect(Effect::FetchActivities);
                true
            }
            Err(rejection) => {
                log_board_action(action, activity, email, false);
                self.error(rejection.text_or(fallback));
                false
            }
        }
    }
}

/// Apply one event to the board
pub fn update(state: &BoardState, event: Event) -> Transition {
    debug!(event = event.name(), "Applying board event");
    let mut t = Transition::start(state);

    match event {
        Event::PageLoaded => {
            t.effect(Effect::FetchActivities);
            if t.state.options.restore_session {
                t.effect(Effect::RestoreSession);
            }
        }
        Event::RefreshActivities => t.effect(Effect::FetchActivities),
        Event::ActivitiesLoaded(Ok(activities)) => {
            if !activities.contains(&t.state.signup_form.activity) {
                t.state.signup_form.activity.clear();
            }
            t.state.activities = Some(activities);
        }
        Event::ActivitiesLoaded(Err(_)) => t.error(MSG_LOAD_FAILED),

        Event::OpenLoginModal => t.state.login_modal_open = true,
        Event::CloseLoginModal => t.state.login_modal_open = false,
        Event::SubmitLogin { username, password } => {
            t.effect(Effect::Login { username, password });
        }
        Event::LoginCompleted(Ok(username)) => {
            log_session_transition(t.state.session.label(), "logged_in", Some(&username));
            t.state.session = Session::logged_in(username);
            t.state.login_modal_open = false;
            t.success(MSG_LOGGED_IN);
        }
        Event::LoginCompleted(Err(rejection)) => t.error(rejection.text_or(MSG_LOGIN_FAILED)),
        Event::SubmitLogout => t.effect(Effect::Logout),
        Event::LogoutCompleted(Ok(())) => {
            log_session_transition(t.state.session.label(), "logged_out", None);
            t.state.session = Session::LoggedOut;
            t.success(MSG_LOGGED_OUT);
        }
        Event::LogoutCompleted(Err(_)) => t.error(MSG_LOGOUT_FAILED),
        Event::SessionRestored(Some(username)) => {
            log_session_transition(t.state.session.label(), "logged_in", Some(&username));
            t.state.session = Session::logged_in(username);
        }
        Event::SessionRestored(None) => {}

        Event::EditEmail(email) => t.state.signup_form.email = email,
        Event::SelectActivity(activity) => t.state.signup_form.activity = activity,
        Event::SubmitSignup => {
            let activity = t.state.signup_form.activity.clone();
            let email = t.state.signup_form.email.trim().to_string();
            if activity.is_empty() {
                t.error(MSG_SELECT_ACTIVITY);
            } else if !is_valid_email(&email) {
                t.error(MSG_INVALID_EMAIL);
            } else {
                t.effect(Effect::Signup { activity, email });
            }
        }
        Event::SignupCompleted { activity, email, outcome } => {
            let signed_up = t.mutation_done(
                "signup",
                &activity,
                &email,
                outcome,
                |()| format!("Signed up {} for {}", email, activity),
                MSG_SIGNUP_FAILED,
            );
            if signed_up {
                t.state.signup_form = Default::default();
            }
        }

        Event::RemoveParticipant { activity, email } => {
            t.effect(Effect::Unregister { activity, email });
        }
        Event::UnregisterCompleted { activity, email, outcome } => {
            t.mutation_done(
                "unregister",
                &activity,
                &email,
                outcome,
                |()| format!("Unregistered {} from {}", email, activity),
                MSG_UNREGISTER_FAILED,
            );
        }

        Event::RegisterStudent { activity, email } => {
            if !t.state.is_teacher_logged_in() {
                log_refused_action("register_student", &activity);
                t.error(MSG_LOGIN_TO_REGISTER);
            } else if !is_valid_email(email.trim()) {
                t.error(MSG_INVALID_EMAIL);
            } else {
                let email = email.trim().to_string();
                t.effect(Effect::RegisterStudent { activity, email });
            }
        }
        Event::RegisterStudentCompleted { activity, email, outcome } => {
            t.mutation_done(
                "register_student",
                &activity,
                &email,
                outcome,
                |message| message.unwrap_or_else(|| format!("Student {} registered for {}", email, activity)),
                MSG_REGISTER_STUDENT_FAILED,
            );
        }
        Event::UnregisterStudent { activity, email } => {
            if !t.state.is_teacher_logged_in() {
                log_refused_action("unregister_student", &activity);
                t.error(MSG_LOGIN_TO_UNREGISTER);
            } else {
                t.effect(Effect::UnregisterStudent { activity, email });
            }
        }
        Event::UnregisterStudentCompleted { activity, email, outcome } => {
            t.mutation_done(
                "unregister_student",
                &activity,
                &email,
                outcome,
                |message| message.unwrap_or_else(|| format!("Student {} unregistered from {}", email, activity)),
                MSG_UNREGISTER_STUDENT_FAILED,
            );
        }

        Event::MessageExpired(id) => {
            t.state.expire_message(id);
        }
        Event::Shutdown => {}
    }

    t
}
