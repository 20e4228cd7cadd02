//! Element node
//!
//! One markup tag: name, attributes, inner content, owned children, and an
//! inline flag controlling self-closing vs open/close rendering.

use std::fmt;

use crate::{AttrMap, StyleRules};

/// A markup element.
///
/// Children are exclusively owned, so the tree is acyclic by construction.
/// Rendering performs no escaping; see the crate docs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Element {
    tag: String,
    attrs: AttrMap,
    inner: String,
    children: Vec<Element>,
    inline: bool,
    styles: StyleRules,
}

impl Element {
    /// Create a block (open/close) element. The tag name must be non-empty.
    pub fn new(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        debug_assert!(!tag.is_empty(), "element tag name must be non-empty");
        Self {
            tag,
            ..Default::default()
        }
    }

    /// Create an inline (self-closing) element.
    pub fn inline(tag: impl Into<String>) -> Self {
        let mut element = Self::new(tag);
        element.inline = true;
        element
    }

    /// Set inner content (builder style)
    pub fn with_inner(mut self, inner: impl Into<String>) -> Self {
        self.inner = inner.into();
        self
    }

    /// Set an attribute (builder style)
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let _ = self.attrs.set(name, value);
        self
    }

    /// Set the id attribute (builder style)
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        let _ = self.attrs.set("id", id);
        self
    }

    /// Tag name of this element
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn set_tag(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        debug_assert!(!tag.is_empty(), "element tag name must be non-empty");
        self.tag = tag;
    }

    /// Inner content of this element
    pub fn inner(&self) -> &str {
        &self.inner
    }

    /// Replace the inner content, returning the previous content.
    pub fn set_inner(&mut self, inner: impl Into<String>) -> String {
        std::mem::replace(&mut self.inner, inner.into())
    }

    /// The id attribute, if set
    pub fn id(&self) -> Option<&str> {
        self.attrs.get("id")
    }

    /// Set the id attribute. Returns `true` if an id was already present.
    pub fn set_id(&mut self, id: impl Into<String>) -> bool {
        self.attrs.set("id", id)
    }

    /// Whether this element renders self-closing
    pub fn is_inline(&self) -> bool {
        self.inline
    }

    /// Set the inline flag, returning the previous value.
    ///
    /// Inner content and children are not emitted while the element is
    /// inline, though the model does not prevent setting them.
    pub fn set_inline(&mut self, inline: bool) -> bool {
        std::mem::replace(&mut self.inline, inline)
    }

    // Attributes

    /// Get an attribute value
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attrs.get(name)
    }

    /// Set an attribute, overwriting any prior value.
    ///
    /// Returns `true` if a prior value existed and was replaced.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) -> bool {
        self.attrs.set(name, value)
    }

    /// Append to an attribute value, separated by a space.
    ///
    /// Returns `true` if the attribute pre-existed.
    pub fn add_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) -> bool {
        self.attrs.append(name, value)
    }

    /// Remove an attribute, returning its value if it was present.
    pub fn clear_attribute(&mut self, name: &str) -> Option<String> {
        self.attrs.remove(name)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attrs.has(name)
    }

    /// Attributes in insertion order
    pub fn attributes(&self) -> &AttrMap {
        &self.attrs
    }

    // Style rules

    /// Set an inline style rule, returning the previous value.
    pub fn set_style_rule(
        &mut self,
        rule: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.styles.set(rule, value)
    }

    pub fn style_rule(&self, rule: &str) -> Option<&str> {
        self.styles.get(rule)
    }

    /// Remove an inline style rule, returning its value if present.
    pub fn remove_style_rule(&mut self, rule: &str) -> Option<String> {
        self.styles.remove(rule)
    }

    /// Remove all style rules, returning them.
    pub fn clear_style_rules(&mut self) -> Vec<(String, String)> {
        self.styles.clear()
    }

    /// Merge in rules from a CSS declaration string.
    pub fn add_style_string(&mut self, css: &str) {
        self.styles.add_style_string(css);
    }

    pub fn style_rules(&self) -> &StyleRules {
        &self.styles
    }

    // Children

    /// Append a child, returning the new child count.
    pub fn append_child(&mut self, child: Element) -> usize {
        self.children.push(child);
        self.children.len()
    }

    /// Insert a child at `index` (clamped to the child count), returning the
    /// new child count.
    pub fn insert_child(&mut self, index: usize, child: Element) -> usize {
        let index = index.min(self.children.len());
        self.children.insert(index, child);
        self.children.len()
    }

    /// Remove and return the child at `index`, or `None` if out of range.
    pub fn remove_child(&mut self, index: usize) -> Option<Element> {
        if index < self.children.len() {
            Some(self.children.remove(index))
        } else {
            None
        }
    }

    /// Child at `index`, insertion-order stable.
    pub fn child(&self, index: usize) -> Option<&Element> {
        self.children.get(index)
    }

    pub fn child_mut(&mut self, index: usize) -> Option<&mut Element> {
        self.children.get_mut(index)
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.children.iter()
    }

    // Rendering

    /// The opening tag, attributes included: `<tag a="1">`.
    ///
    /// Style rules are folded into a `style` attribute here without touching
    /// the stored attributes, so rendering stays a pure computation.
    pub fn start_tag(&self) -> String {
        let mut out = self.open_markup();
        out.push('>');
        out
    }

    /// The closing tag: `</tag>`.
    pub fn end_tag(&self) -> String {
        format!("</{}>", self.tag)
    }

    /// Render this element and its subtree to markup.
    ///
    /// Inline elements emit `<tag attrs/>` only. Block elements emit the start
    /// tag, inner content, each child in order, then the end tag. All values
    /// are emitted verbatim.
    pub fn render(&self) -> String {
        if self.inline {
            let mut out = self.open_markup();
            out.push_str("/>");
            return out;
        }
        let mut out = self.start_tag();
        out.push_str(&self.inner);
        for child in &self.children {
            out.push_str(&child.render());
        }
        out.push_str(&self.end_tag());
        out
    }

    fn open_markup(&self) -> String {
        let mut out = String::with_capacity(16 + self.tag.len());
        out.push('<');
        out.push_str(&self.tag);
        let mut styled = false;
        for attr in self.attrs.iter() {
            out.push(' ');
            out.push_str(&attr.name);
            out.push_str("=\"");
            out.push_str(&attr.value);
            if attr.name == "style" && !self.styles.is_empty() {
                // Explicit style attribute: rules appended after it.
                out.push(' ');
                out.push_str(&self.styles.to_css());
                styled = true;
            }
            out.push('"');
        }
        if !styled && !self.styles.is_empty() {
            out.push_str(" style=\"");
            out.push_str(&self.styles.to_css());
            out.push('"');
        }
        out
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
