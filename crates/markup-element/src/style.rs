//! Inline style rules
//!
//! Ordered `rule: value` pairs folded into a `style` attribute at render time.

/// Inline CSS rules for one element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyleRules {
    rules: Vec<(String, String)>,
}

impl StyleRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Set a rule, overwriting any prior value. Returns the previous value.
    pub fn set(&mut self, rule: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let rule = rule.into();
        let value = value.into();
        if let Some(entry) = self.rules.iter_mut().find(|(r, _)| *r == rule) {
            Some(std::mem::replace(&mut entry.1, value))
        } else {
            self.rules.push((rule, value));
            None
        }
    }

    /// Get the value of a rule
    pub fn get(&self, rule: &str) -> Option<&str> {
        self.rules
            .iter()
            .find(|(r, _)| r == rule)
            .map(|(_, v)| v.as_str())
    }

    /// Remove a rule, returning its value if present.
    pub fn remove(&mut self, rule: &str) -> Option<String> {
        let index = self.rules.iter().position(|(r, _)| r == rule)?;
        Some(self.rules.remove(index).1)
    }

    /// Remove all rules, returning them.
    pub fn clear(&mut self) -> Vec<(String, String)> {
        std::mem::take(&mut self.rules)
    }

    /// Parse a CSS declaration string (`border: 1px; color: #ccc;`) and merge
    /// the rules in, overwriting duplicates. Malformed segments are skipped.
    pub fn add_style_string(&mut self, css: &str) {
        for line in css.split(';') {
            if let Some((rule, value)) = line.split_once(':') {
                let rule = rule.trim();
                let value = value.trim();
                if !rule.is_empty() && !value.is_empty() {
                    let _ = self.set(rule, value);
                }
            }
        }
    }

    /// The string that goes inside the `style` attribute.
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        for (rule, value) in &self.rules {
            if !css.is_empty() {
                css.push(' ');
            }
            css.push_str(rule);
            css.push_str(": ");
            css.push_str(value);
            css.push(';');
        }
        css
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.rules.iter().map(|(r, v)| (r.as_str(), v.as_str()))
    }
}
