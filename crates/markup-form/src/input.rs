//! Input widgets
//!
//! One [`Input`] struct covers every widget kind; kind-specific state lives in
//! a closed enum so the form can dispatch with a single `match` instead of
//! scattered type tests. Constructing a widget fixes its tag name, type
//! attribute, and inline flag. `checked` and `selected` markers are computed
//! from widget state at render time, never stored as attributes.

use markup_element::Element;

use crate::IdGen;

/// Widget kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InputKind {
    Text,
    TextArea,
    Hidden,
    Submit,
    Reset,
    File,
    Checkbox,
    Radio,
    Select,
}

/// Kind-specific widget state
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub(crate) enum InputControl {
    Text,
    TextArea,
    Hidden,
    Submit,
    Reset,
    File,
    Checkbox { checked: bool },
    Radio { checked: bool },
    Select { options: Vec<Element>, selected: Vec<String> },
}

impl InputControl {
    fn kind(&self) -> InputKind {
        match self {
            Self::Text => InputKind::Text,
            Self::TextArea => InputKind::TextArea,
            Self::Hidden => InputKind::Hidden,
            Self::Submit => InputKind::Submit,
            Self::Reset => InputKind::Reset,
            Self::File => InputKind::File,
            Self::Checkbox { .. } => InputKind::Checkbox,
            Self::Radio { .. } => InputKind::Radio,
            Self::Select { .. } => InputKind::Select,
        }
    }
}

/// One form input widget.
///
/// Carries name/id/value identity, an owned label element whose `for`
/// attribute tracks the name, and an inner [`Element`] holding the tag plus
/// any custom attributes and style rules.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Input {
    element: Element,
    control: InputControl,
    name: String,
    id: String,
    value: String,
    label: Element,
    print_label: bool,
}

impl Input {
    fn build(
        element: Element,
        control: InputControl,
        label_text: &str,
        value: impl Into<String>,
        name: &str,
        print_label: bool,
    ) -> Self {
        // Name and id default to the label text when no explicit name is
        // given; empty identities are filled in later by ensure_identity.
        let name = if name.is_empty() { label_text } else { name };
        let mut label = Element::new("label").with_inner(label_text);
        if !name.is_empty() {
            let _ = label.set_attribute("for", name);
        }
        Self {
            element,
            control,
            name: name.to_string(),
            id: name.to_string(),
            value: value.into(),
            label,
            print_label,
        }
    }

    /// A single-line text input: `<input type="text"/>`.
    pub fn text(label: &str, value: impl Into<String>) -> Self {
        Self::build(
            Element::inline("input"),
            InputControl::Text,
            label,
            value,
            "",
            true,
        )
    }

    /// A multi-line text input: `<textarea>value</textarea>`.
    pub fn textarea(label: &str, value: impl Into<String>) -> Self {
        Self::build(
            Element::new("textarea"),
            InputControl::TextArea,
            label,
            value,
            "",
            true,
        )
    }

    /// A hidden field. Label printing is suppressed by convention.
    pub fn hidden(name: &str, value: impl Into<String>) -> Self {
        Self::build(
            Element::inline("input"),
            InputControl::Hidden,
            "",
            value,
            name,
            false,
        )
    }

    /// A submit button. Label printing is suppressed by convention.
    pub fn submit(name: &str, value: impl Into<String>) -> Self {
        Self::build(
            Element::inline("input"),
            InputControl::Submit,
            "",
            value,
            name,
            false,
        )
    }

    /// A reset button. Label printing is suppressed by convention.
    pub fn reset(name: &str, value: impl Into<String>) -> Self {
        Self::build(
            Element::inline("input"),
            InputControl::Reset,
            "",
            value,
            name,
            false,
        )
    }

    /// A file-upload field.
    pub fn file(label: &str) -> Self {
        Self::build(
            Element::inline("input"),
            InputControl::File,
            label,
            "",
            "",
            true,
        )
    }

    /// A checkbox with an initial checked state.
    pub fn checkbox(label: &str, value: impl Into<String>, checked: bool) -> Self {
        Self::build(
            Element::inline("input"),
            InputControl::Checkbox { checked },
            label,
            value,
            "",
            true,
        )
    }

    /// A radio button. Radios sharing `name` form a logical group; checking
    /// one does not automatically uncheck the others.
    pub fn radio(name: &str, value: impl Into<String>, checked: bool, label: &str) -> Self {
        Self::build(
            Element::inline("input"),
            InputControl::Radio { checked },
            label,
            value,
            name,
            true,
        )
    }

    /// A select field. Each option's value attribute equals its text; use
    /// [`Input::add_option`] for distinct values.
    pub fn select<I, S>(label: &str, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut input = Self::build(
            Element::new("select"),
            InputControl::Select {
                options: Vec::new(),
                selected: Vec::new(),
            },
            label,
            "",
            "",
            true,
        );
        for text in options {
            let text: String = text.into();
            input.add_option(&text, text.clone());
        }
        input
    }

    /// Widget kind for dispatch
    pub fn kind(&self) -> InputKind {
        self.control.kind()
    }

    /// The `type` attribute this kind renders with, if any.
    pub fn input_type(&self) -> Option<&'static str> {
        match self.control {
            InputControl::Text => Some("text"),
            InputControl::Hidden => Some("hidden"),
            InputControl::Submit => Some("submit"),
            InputControl::Reset => Some("reset"),
            InputControl::File => Some("file"),
            InputControl::Checkbox { .. } => Some("checkbox"),
            InputControl::Radio { .. } => Some("radio"),
            InputControl::TextArea | InputControl::Select { .. } => None,
        }
    }

    // Identity

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the name attribute, keeping the label's `for` attribute in sync.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        if self.name.is_empty() {
            let _ = self.label.clear_attribute("for");
        } else {
            let _ = self.label.set_attribute("for", self.name.clone());
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
    }

    /// Fill in an empty name/id from the generator, returning the name.
    ///
    /// Widgets built from a non-empty label already carry an identity and are
    /// left untouched. [`crate::Form::add_field`] calls this with the form's
    /// own generator.
    pub fn ensure_identity(&mut self, ids: &mut IdGen) -> &str {
        if self.name.is_empty() {
            let generated = ids.next_id();
            self.set_name(generated);
        }
        if self.id.is_empty() {
            self.id = self.name.clone();
        }
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    // Label

    pub fn label_text(&self) -> &str {
        self.label.inner()
    }

    /// Replace the label text, returning the previous text.
    pub fn set_label_text(&mut self, text: impl Into<String>) -> String {
        self.label.set_inner(text)
    }

    pub fn label_element(&self) -> &Element {
        &self.label
    }

    /// Replace the whole label element, returning the previous one.
    pub fn set_label_element(&mut self, label: Element) -> Element {
        std::mem::replace(&mut self.label, label)
    }

    pub fn print_label(&self) -> bool {
        self.print_label
    }

    /// Control whether `render` emits the label, returning the previous flag.
    pub fn set_print_label(&mut self, print_label: bool) -> bool {
        std::mem::replace(&mut self.print_label, print_label)
    }

    // Checkbox / radio state

    /// Checked state, or `None` for kinds without one.
    pub fn is_checked(&self) -> Option<bool> {
        match self.control {
            InputControl::Checkbox { checked } | InputControl::Radio { checked } => Some(checked),
            _ => None,
        }
    }

    /// Set the checked state, returning the previous state.
    ///
    /// No-op returning `None` for kinds without a checked state.
    pub fn set_checked(&mut self, checked: bool) -> Option<bool> {
        match &mut self.control {
            InputControl::Checkbox { checked: state } | InputControl::Radio { checked: state } => {
                Some(std::mem::replace(state, checked))
            }
            _ => None,
        }
    }

    // Select state

    /// Add an option with an explicit value attribute. An empty `value`
    /// falls back to the option text. No-op for non-select kinds.
    pub fn add_option(&mut self, text: &str, value: impl Into<String>) {
        if let InputControl::Select { options, .. } = &mut self.control {
            let value = value.into();
            let value = if value.is_empty() {
                text.to_string()
            } else {
                value
            };
            let existing = options
                .iter_mut()
                .find(|o| o.attribute("value") == Some(value.as_str()));
            match existing {
                Some(option) => {
                    let _ = option.set_inner(text);
                }
                None => {
                    options.push(Element::new("option").with_attr("value", value).with_inner(text));
                }
            }
        }
    }

    /// Option element by value attribute.
    pub fn option(&self, value: &str) -> Option<&Element> {
        match &self.control {
            InputControl::Select { options, .. } => options
                .iter()
                .find(|o| o.attribute("value") == Some(value)),
            _ => None,
        }
    }

    /// Option elements in insertion order. Empty for non-select kinds.
    pub fn options(&self) -> &[Element] {
        match &self.control {
            InputControl::Select { options, .. } => options,
            _ => &[],
        }
    }

    /// Currently selected option values. Empty for non-select kinds.
    pub fn selected(&self) -> &[String] {
        match &self.control {
            InputControl::Select { selected, .. } => selected,
            _ => &[],
        }
    }

    /// Replace the entire selected set, returning the previous one.
    ///
    /// Previously selected options lose their marker; selection is not
    /// additive. No-op returning an empty list for non-select kinds.
    pub fn set_selected<I, S>(&mut self, values: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        match &mut self.control {
            InputControl::Select { selected, .. } => {
                let new: Vec<String> = values.into_iter().map(Into::into).collect();
                std::mem::replace(selected, new)
            }
            _ => Vec::new(),
        }
    }

    // Attribute / style passthrough to the inner element

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.element.attribute(name)
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) -> bool {
        self.element.set_attribute(name, value)
    }

    pub fn add_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) -> bool {
        self.element.add_attribute(name, value)
    }

    pub fn clear_attribute(&mut self, name: &str) -> Option<String> {
        self.element.clear_attribute(name)
    }

    pub fn set_style_rule(
        &mut self,
        rule: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.element.set_style_rule(rule, value)
    }

    // Rendering

    /// Render label (unless suppressed or empty) followed by the control.
    pub fn render(&self) -> String {
        let mut out = String::new();
        if self.print_label && !self.label.inner().is_empty() {
            out.push_str(&self.label.render());
        }
        out.push_str(&self.render_control());
        out
    }

    /// Render the control markup alone, label excluded.
    ///
    /// Pure with respect to widget state: identity attributes, the checked
    /// marker, and selected option markers are computed here, not stored.
    pub fn render_control(&self) -> String {
        let mut el = if self.element.is_inline() {
            Element::inline(self.element.tag())
        } else {
            Element::new(self.element.tag())
        };
        if let Some(input_type) = self.input_type() {
            let _ = el.set_attribute("type", input_type);
        }
        if !self.name.is_empty() {
            let _ = el.set_attribute("name", self.name.clone());
        }
        match &self.control {
            InputControl::TextArea => {
                let _ = el.set_inner(self.value.clone());
            }
            InputControl::Select { .. } => {}
            _ => {
                let _ = el.set_attribute("value", self.value.clone());
            }
        }
        if !self.id.is_empty() {
            let _ = el.set_attribute("id", self.id.clone());
        }
        if self.is_checked() == Some(true) {
            let _ = el.set_attribute("checked", "checked");
        }
        for attr in self.element.attributes().iter() {
            let _ = el.set_attribute(attr.name.clone(), attr.value.clone());
        }
        for (rule, value) in self.element.style_rules().iter() {
            let _ = el.set_style_rule(rule, value);
        }
        if let InputControl::Select { options, selected } = &self.control {
            for option in options {
                let is_selected = option
                    .attribute("value")
                    .is_some_and(|v| selected.iter().any(|s| s == v));
                if is_selected {
                    let mut marked = option.clone();
                    let _ = marked.set_attribute("selected", "selected");
                    let _ = el.append_child(marked);
                } else {
                    let _ = el.append_child(option.clone());
                }
            }
        }
        el.render()
    }
}

impl std::fmt::Display for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
