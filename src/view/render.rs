//! Board rendering
//!
//! Pure functions from `BoardState` to a view tree. Every render produces the
//! whole page; hosts replace their previous output rather than patching it.

use crate::models::{Activity, Message, Session};
use crate::state::{BoardState, Event};
use super::node::{ids, Element, ViewNode};

pub const LOADING_TEXT: &str = "Loading activities...";
pub const NO_PARTICIPANTS_TEXT: &str = "No participants yet";
pub const SELECT_PLACEHOLDER: &str = "Select an activity";

/// Render the full page
pub fn render(state: &BoardState) -> ViewNode {
    Element::new("div")
        .class("board")
        .child(render_auth(&state.session))
        .child(render_login_modal(state.login_modal_open))
        .child(
            Element::new("section")
                .class("activities")
                .child(Element::new("h3").text("Available Activities"))
                .child(render_activities_list(state)),
        )
        .child(render_signup_form(state))
        .child(render_message(state.message.as_ref()))
        .into()
}

/// Login section when logged out, user section when logged in
pub fn render_auth(session: &Session) -> Element {
    let logged_in = session.is_logged_in();

    let login_section = Element::new("div")
        .id(ids::LOGIN_SECTION)
        .hidden(logged_in)
        .child(
            Element::new("button")
                .id(ids::LOGIN_BUTTON)
                .on_click(Event::OpenLoginModal)
                .text("Teacher Login"),
        );

    let user_section = Element::new("div")
        .id(ids::USER_SECTION)
        .hidden(!logged_in)
        .child(Element::new("span").text("Logged in as"))
        .child(
            Element::new("span")
                .id(ids::USER_NAME)
                .text(session.username().unwrap_or_default()),
        )
        .child(
            Element::new("button")
                .id(ids::LOGOUT_BUTTON)
                .on_click(Event::SubmitLogout)
                .text("Logout"),
        );

    Element::new("div")
        .class("auth")
        .child(login_section)
        .child(user_section)
}

/// Teacher login dialog
///
/// The form carries no click event of its own: a host reads the `username`
/// and `password` inputs and raises `Event::SubmitLogin` with them. The close
/// button raises `Event::CloseLoginModal`.
pub fn render_login_modal(open: bool) -> Element {
    let form = Element::new("form")
        .id(ids::LOGIN_FORM)
        .attr("method", "post")
        .child(
            Element::new("input")
                .attr("type", "text")
                .attr("name", "username")
                .attr("placeholder", "Username"),
        )
        .child(
            Element::new("input")
                .attr("type", "password")
                .attr("name", "password")
                .attr("placeholder", "Password"),
        )
        .child(
            Element::new("button")
                .attr("type", "submit")
                .text("Login"),
        );

    Element::new("div")
        .id(ids::LOGIN_MODAL)
        .class("modal")
        .hidden(!open)
        .child(
            Element::new("div")
                .class("modal-content")
                .child(
                    Element::new("button")
                        .class("close")
                        .attr("type", "button")
                        .on_click(Event::CloseLoginModal)
                        .text("Close"),
                )
                .child(Element::new("h3").text("Teacher Login"))
                .child(form),
        )
}

fn render_activities_list(state: &BoardState) -> Element {
    let list = Element::new("div").id(ids::ACTIVITIES_LIST);

    match &state.activities {
        None => list.child(Element::new("p").text(LOADING_TEXT)),
        Some(activities) => list.children(activities.iter().map(|activity| {
            render_card(activity, &state.session, &state.signup_form.email)
        })),
    }
}

/// One activity card
///
/// `student_email` pre-fills the teacher register button from the signup form.
pub fn render_card(activity: &Activity, session: &Session, student_email: &str) -> Element {
    let teacher = session.is_logged_in();
    let details = &activity.details;

    let participants = if details.participants.is_empty() {
        Element::new("p").text(NO_PARTICIPANTS_TEXT)
    } else {
        Element::new("ul").children(
            details
                .participants
                .iter()
                .map(|email| render_participant(&activity.name, email, teacher)),
        )
    };

    Element::new("div")
        .class("activity-card")
        .attr("data-activity", activity.name.as_str())
        .child(Element::new("h4").text(activity.name.as_str()))
        .child(Element::new("p").text(details.description.as_str()))
        .child(
            Element::new("p")
                .child(Element::new("strong").text("Schedule:"))
                .text(format!(" {}", details.schedule)),
        )
        .child(
            Element::new("p")
                .class("availability")
                .child(Element::new("strong").text("Available Spots:"))
                .text(format!(" {}", activity.available_spots())),
        )
        .child(
            Element::new("div")
                .class("participants-section")
                .child(Element::new("h5").text("Current Participants:"))
                .child(participants),
        )
        .child(
            Element::new("button")
                .class("register-btn")
                .hidden(!teacher)
                .attr("data-activity", activity.name.as_str())
                .on_click(Event::RegisterStudent {
                    activity: activity.name.clone(),
                    email: student_email.to_string(),
                })
                .text("Register Student"),
        )
}

fn render_participant(activity: &str, email: &str, teacher: bool) -> Element {
    Element::new("li")
        .class("participant")
        .child(Element::new("span").class("participant-email").text(email))
        .child(
            Element::new("button")
                .class("delete-btn")
                .attr("data-activity", activity)
                .attr("data-email", email)
                .on_click(Event::RemoveParticipant {
                    activity: activity.to_string(),
                    email: email.to_string(),
                })
                .text("Remove"),
        )
        .child(
            Element::new("button")
                .class("unregister-btn")
                .hidden(!teacher)
                .attr("data-activity", activity)
                .attr("data-email", email)
                .on_click(Event::UnregisterStudent {
                    activity: activity.to_string(),
                    email: email.to_string(),
                })
                .text("Unregister"),
        )
}

pub fn render_signup_form(state: &BoardState) -> Element {
    let selected = state.signup_form.activity.as_str();

    let placeholder = Element::new("option")
        .attr("value", "")
        .text(SELECT_PLACEHOLDER);
    let placeholder = if selected.is_empty() {
        placeholder.attr("selected", "selected")
    } else {
        placeholder
    };

    let options = state
        .activities
        .iter()
        .flat_map(|activities| activities.names())
        .map(|name| {
            let option = Element::new("option").attr("value", name).text(name);
            if name == selected {
                option.attr("selected", "selected")
            } else {
                option
            }
        });

    Element::new("form")
        .id(ids::SIGNUP_FORM)
        .child(Element::new("h3").text("Sign Up for an Activity"))
        .child(
            Element::new("input")
                .id(ids::EMAIL_INPUT)
                .attr("type", "email")
                .attr("placeholder", "Email")
                .attr("value", state.signup_form.email.as_str()),
        )
        .child(
            Element::new("select")
                .id(ids::ACTIVITY_SELECT)
                .child(placeholder)
                .children(options),
        )
        .child(
            Element::new("button")
                .attr("type", "submit")
                .on_click(Event::SubmitSignup)
                .text("Sign Up"),
        )
}

pub fn render_message(message: Option<&Message>) -> Element {
    let area = Element::new("div").id(ids::MESSAGE).class("message");
    match message {
        Some(message) => area
            .class(message.severity.as_str())
            .text(message.text.as_str()),
        None => area.class("hidden").hidden(true),
    }
}
