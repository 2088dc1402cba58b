//! HTML serialization of the view tree
//!
//! All text and attribute values are escaped; server data never becomes markup.

use crate::utils::helpers::escape_html;
use super::node::{Element, ViewNode};

const VOID_TAGS: [&str; 3] = ["input", "br", "hr"];

pub fn to_html(node: &ViewNode) -> String {
    let mut out = String::new();
    write_node(node, &mut out);
    out
}

fn write_node(node: &ViewNode, out: &mut String) {
    match node {
        ViewNode::Text(text) => out.push_str(&escape_html(text)),
        ViewNode::Element(element) => write_element(element, out),
    }
}

fn write_element(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(element.tag);

    if let Some(id) = element.id {
        write_attr(out, "id", id);
    }
    if !element.classes.is_empty() {
        write_attr(out, "class", &element.classes.join(" "));
    }
    for (name, value) in &element.attrs {
        write_attr(out, name, value);
    }
    if let Some(event) = &element.on_click {
        write_attr(out, "data-action", event.name());
    }
    if element.hidden {
        out.push_str(" hidden");
    }
    out.push('>');

    if VOID_TAGS.contains(&element.tag) {
        return;
    }

    for child in &element.children {
        write_node(child, out);
    }
    out.push_str("</");
    out.push_str(element.tag);
    out.push('>');
}

fn write_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape_html(value));
    out.push('"');
}
