//! Markup element tree
//!
//! A small object model for HTML/XML markup generation: one [`Element`] node
//! carries a tag name, insertion-ordered attributes, inner content, owned
//! child elements, and an inline (self-closing) flag.
//!
//! Rendering emits attribute values and inner content **verbatim**. Nothing is
//! escaped; callers that interpolate untrusted data must escape it first (see
//! [`escape`]).

mod attrs;
mod element;
mod style;

pub use attrs::{Attr, AttrMap};
pub use element::Element;
pub use style::StyleRules;

/// Escape the HTML special characters `&`, `<`, `>`, `"` and `'`.
///
/// Opt-in helper for callers placing untrusted text into attribute values or
/// inner content. The element tree itself never escapes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("a < b & c"), "a &lt; b &amp; c");
        assert_eq!(escape("\"quoted\""), "&quot;quoted&quot;");
        assert_eq!(escape("plain"), "plain");
    }
}
