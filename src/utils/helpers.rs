//! Helper functions and utilities
//!
//! This module contains common helper functions used throughout the client.

use std::sync::OnceLock;
use regex::Regex;

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid")
    })
}

/// Validate email format
///
/// Only a shape check to catch typos before a round-trip; the server decides
/// whether an address is acceptable.
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Escape text for inclusion in HTML content or a quoted attribute value
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("michael@mergington.edu"));
        assert!(is_valid_email("a@x.com"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("michael"));
        assert!(!is_valid_email("michael@localhost"));
        assert!(!is_valid_email("two words@school.edu"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("Chess & Go"), "Chess &amp; Go");
        assert_eq!(
            escape_html("<script>alert('x')</script>"),
            "&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"
        );
        assert_eq!(escape_html(r#"say "hi""#), "say &quot;hi&quot;");
    }
}
