//! Plain-text rendering of the view tree for terminal hosts
//!
//! Hidden elements are skipped. Buttons are shown as `[Label]` so a reader
//! can see which actions are currently available.

use super::node::{Element, ViewNode};

const CONTAINER_TAGS: [&str; 5] = ["div", "section", "form", "ul", "select"];

pub fn to_text(node: &ViewNode) -> String {
    let mut lines = Vec::new();
    write_node(node, 0, &mut lines);
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn write_node(node: &ViewNode, depth: usize, lines: &mut Vec<String>) {
    match node {
        ViewNode::Text(text) => {
            let text = text.trim();
            if !text.is_empty() {
                lines.push(format!("{}{}", indent(depth), text));
            }
        }
        ViewNode::Element(element) if element.hidden => {}
        ViewNode::Element(element) => write_element(element, depth, lines),
    }
}

fn write_element(element: &Element, depth: usize, lines: &mut Vec<String>) {
    if CONTAINER_TAGS.contains(&element.tag) {
        let inner = match element.tag {
            "ul" | "select" => depth + 1,
            _ if element.has_class("activity-card") => {
                lines.push(String::new());
                depth
            }
            _ => depth,
        };
        for child in &element.children {
            write_node(child, inner, lines);
        }
        return;
    }

    let line = match element.tag {
        "button" => format!("[{}]", inline_text(element)),
        "input" => {
            let label = element
                .get_attr("placeholder")
                .or_else(|| element.get_attr("name"))
                .unwrap_or("input");
            format!("{}: {}", label, element.get_attr("value").unwrap_or_default())
        }
        "li" => format!("- {}", inline_text(element)),
        "option" => {
            let marker = if element.get_attr("selected").is_some() { "(*)" } else { "( )" };
            format!("{} {}", marker, inline_text(element))
        }
        "h3" | "h4" => format!("== {} ==", inline_text(element)),
        _ => inline_text(element),
    };

    if !line.trim().is_empty() {
        lines.push(format!("{}{}", indent(depth), line));
    }
}

/// Flatten visible descendants onto one line
fn inline_text(element: &Element) -> String {
    let mut pieces: Vec<String> = Vec::new();
    for child in &element.children {
        match child {
            ViewNode::Text(text) => pieces.push(text.trim().to_string()),
            ViewNode::Element(e) if e.hidden => {}
            ViewNode::Element(e) if e.tag == "button" => pieces.push(format!("[{}]", inline_text(e))),
            ViewNode::Element(e) => pieces.push(inline_text(e)),
        }
    }
    pieces.retain(|p| !p.is_empty());
    pieces.join(" ")
}

fn indent(depth: usize) -> String {
    "  ".repeat(depth)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Activities, ActivityDetails};
    use crate::state::{update, BoardState, Event};
    use crate::view::render;

    fn chess_state() -> BoardState {
        let activities: Activities = vec![(
            "Chess".to_string(),
            ActivityDetails {
                description: "d".into(),
                schedule: "s".into(),
                max_participants: 2,
                participants: vec!["a@x.com".into()],
            },
        )]
        .into_iter()
        .collect();
        update(&BoardState::default(), Event::ActivitiesLoaded(Ok(activities))).state
    }

    #[test]
    fn test_card_lines() {
        let text = to_text(&render(&chess_state()));
        assert!(text.contains("== Chess =="));
        assert!(text.contains("Schedule: s"));
        assert!(text.contains("Available Spots: 1"));
        assert!(text.contains("  - a@x.com [Remove]\n"));
        assert!(text.contains("[Teacher Login]"));
        assert!(!text.contains("[Unregister]"));
        assert!(!text.contains("[Logout]"));
    }

    #[test]
    fn test_teacher_view_lines() {
        let state = update(&chess_state(), Event::LoginCompleted(Ok("teacher1".into()))).state;
        let text = to_text(&render(&state));
        assert!(text.contains("- a@x.com [Remove] [Unregister]"));
        assert!(text.contains("[Register Student]"));
        assert!(text.contains("Logged in as"));
        assert!(text.contains("teacher1"));
        assert!(text.contains("Logged in successfully"));
        assert!(!text.contains("[Teacher Login]"));
    }

    #[test]
    fn test_select_marks_selection() {
        let state = update(&chess_state(), Event::SelectActivity("Chess".into())).state;
        let text = to_text(&render(&state));
        assert!(text.contains("( ) Select an activity"));
        assert!(text.contains("(*) Chess"));
    }
}
