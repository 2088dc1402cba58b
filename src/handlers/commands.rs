//! Terminal command handlers
//!
//! Parses the lines typed into the terminal host and translates them into
//! the same board events the page controls produce. Activity names are the
//! rest of the line, so they may contain spaces.

use crate::state::Event;
use crate::utils::errors::{BoardError, Result};

pub const HELP_TEXT: &str = "\
Commands:
  list                         reload activities
  signup <email> <activity>    sign a student up
  remove <email> <activity>    remove a participant
  login <username> <password>  log in as a teacher
  logout                       log out
  register <email> <activity>  register a student (teacher only)
  unregister <email> <activity> unregister a student (teacher only)
  select <activity>            choose an activity in the signup form
  email <address>              fill the signup form email
  submit                       submit the signup form
  close                        close the login dialog
  help                         show this help
  quit                         exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Signup { email: String, activity: String },
    Remove { email: String, activity: String },
    Login { username: String, password: String },
    Logout,
    Register { email: String, activity: String },
    Unregister { email: String, activity: String },
    Select(String),
    Email(String),
    Submit,
    Close,
    Help,
    Quit,
}

impl Command {
    /// Board events equivalent to the command, in dispatch order
    pub fn into_events(self) -> Vec<Event> {
        match self {
            Command::List => vec![Event::RefreshActivities],
            Command::Signup { email, activity } => vec![
                Event::SelectActivity(activity),
                Event::EditEmail(email),
                Event::SubmitSignup,
            ],
            Command::Remove { email, activity } => vec![Event::RemoveParticipant { activity, email }],
            Command::Login { username, password } => vec![
                Event::OpenLoginModal,
                Event::SubmitLogin { username, password },
            ],
            Command::Logout => vec![Event::SubmitLogout],
            Command::Register { email, activity } => vec![Event::RegisterStudent { activity, email }],
            Command::Unregister { email, activity } => vec![Event::UnregisterStudent { activity, email }],
            Command::Select(activity) => vec![Event::SelectActivity(activity)],
            Command::Email(email) => vec![Event::EditEmail(email)],
            Command::Submit => vec![Event::SubmitSignup],
            Command::Close => vec![Event::CloseLoginModal],
            Command::Help => Vec::new(),
            Command::Quit => vec![Event::Shutdown],
        }
    }
}

/// Parse one input line
pub fn parse_command(line: &str) -> Result<Command> {
    let line = line.trim();
    let (name, rest) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (line, ""),
    };

    match name.to_lowercase().as_str() {
        "list" | "refresh" => Ok(Command::List),
        "signup" => {
            let (email, activity) = email_and_activity(rest, "signup <email> <activity>")?;
            Ok(Command::Signup { email, activity })
        }
        "remove" => {
            let (email, activity) = email_and_activity(rest, "remove <email> <activity>")?;
            Ok(Command::Remove { email, activity })
        }
        "login" => {
            let mut parts = rest.split_whitespace();
            match (parts.next(), parts.next(), parts.next()) {
                (Some(username), Some(password), None) => Ok(Command::Login {
                    username: username.to_string(),
                    password: password.to_string(),
                }),
                _ => Err(usage("login <username> <password>")),
            }
        }
        "logout" => Ok(Command::Logout),
        "register" => {
            let (email, activity) = email_and_activity(rest, "register <email> <activity>")?;
            Ok(Command::Register { email, activity })
        }
        "unregister" => {
            let (email, activity) = email_and_activity(rest, "unregister <email> <activity>")?;
            Ok(Command::Unregister { email, activity })
        }
        "select" if !rest.is_empty() => Ok(Command::Select(rest.to_string())),
        "select" => Err(usage("select <activity>")),
        "email" if !rest.is_empty() => Ok(Command::Email(rest.to_string())),
        "email" => Err(usage("email <address>")),
        "submit" => Ok(Command::Submit),
        "close" => Ok(Command::Close),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        "" => Err(BoardError::InvalidInput("Empty command".to_string())),
        other => Err(BoardError::InvalidInput(format!("Unknown command: {}", other))),
    }
}

fn email_and_activity(rest: &str, usage_text: &str) -> Result<(String, String)> {
    match rest.split_once(char::is_whitespace) {
        Some((email, activity)) if !activity.trim().is_empty() => {
            Ok((email.to_string(), activity.trim().to_string()))
        }
        _ => Err(usage(usage_text)),
    }
}

fn usage(text: &str) -> BoardError {
    BoardError::InvalidInput(format!("Usage: {}", text))
}
