//! View tree
//!
//! A plain description of the page the board wants shown. Buttons carry the
//! event they dispatch, so a host can wire clicks without knowing anything
//! about the board's rules.

use crate::state::Event;

/// Element ids shared with the host page markup
pub mod ids {
    pub const ACTIVITIES_LIST: &str = "activities-list";
    pub const ACTIVITY_SELECT: &str = "activity";
    pub const EMAIL_INPUT: &str = "email";
    pub const SIGNUP_FORM: &str = "signup-form";
    pub const MESSAGE: &str = "message";
    pub const LOGIN_SECTION: &str = "login-section";
    pub const USER_SECTION: &str = "user-section";
    pub const USER_NAME: &str = "user-name";
    pub const LOGIN_BUTTON: &str = "login-btn";
    pub const LOGOUT_BUTTON: &str = "logout-btn";
    pub const LOGIN_MODAL: &str = "login-modal";
    pub const LOGIN_FORM: &str = "login-form";
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewNode {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: &'static str,
    pub id: Option<&'static str>,
    pub classes: Vec<&'static str>,
    pub attrs: Vec<(&'static str, String)>,
    pub hidden: bool,
    pub on_click: Option<Event>,
    pub children: Vec<ViewNode>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            id: None,
            classes: Vec::new(),
            attrs: Vec::new(),
            hidden: false,
            on_click: None,
            children: Vec::new(),
        }
    }

    pub fn id(mut self, id: &'static str) -> Self {
        self.id = Some(id);
        self
    }

    pub fn class(mut self, class: &'static str) -> Self {
        self.classes.push(class);
        self
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn on_click(mut self, event: Event) -> Self {
        self.on_click = Some(event);
        self
    }

    pub fn child(mut self, child: impl Into<ViewNode>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ViewNode>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(ViewNode::Text(text.into()))
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| *c == class)
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.iter().find(|(n, _)| *n == name).map(|(_, v)| v.as_str())
    }

    /// Concatenated text of all descendants, including hidden ones
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            match child {
                ViewNode::Text(text) => out.push_str(text),
                ViewNode::Element(e) => out.push_str(&e.text_content()),
            }
        }
        out
    }

    /// Depth-first search for the element with the given id
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        if self.id == Some(id) {
            return Some(self);
        }
        self.child_elements().find_map(|e| e.find_by_id(id))
    }

    /// All descendant elements (and self) carrying the class, in document order
    pub fn find_all_by_class(&self, class: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect_by_class(class, &mut found);
        found
    }

    fn collect_by_class<'a>(&'a self, class: &str, found: &mut Vec<&'a Element>) {
        if self.has_class(class) {
            found.push(self);
        }
        for child in self.child_elements() {
            child.collect_by_class(class, found);
        }
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|c| match c {
            ViewNode::Element(e) => Some(e),
            ViewNode::Text(_) => None,
        })
    }
}

impl ViewNode {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            ViewNode::Element(e) => Some(e),
            ViewNode::Text(_) => None,
        }
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        self.as_element().and_then(|e| e.find_by_id(id))
    }

    pub fn find_all_by_class(&self, class: &str) -> Vec<&Element> {
        self.as_element().map(|e| e.find_all_by_class(class)).unwrap_or_default()
    }
}

impl From<Element> for ViewNode {
    fn from(element: Element) -> Self {
        ViewNode::Element(element)
    }
}

impl From<String> for ViewNode {
    fn from(text: String) -> Self {
        ViewNode::Text(text)
    }
}

impl From<&str> for ViewNode {
    fn from(text: &str) -> Self {
        ViewNode::Text(text.to_string())
    }
}
