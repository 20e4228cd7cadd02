//! Form container
//!
//! Aggregates named widgets, decides whether a request submitted the form,
//! and reconciles submitted parameter values back onto the widgets.

use std::fmt;

use markup_element::Element;
use tracing::{debug, warn};

use crate::{Enctype, IdGen, Input, InputKind, Method, RequestData, UploadedFile};

/// Errors from submission-dependent operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("form has no submit control")]
    NoSubmitControl,
    #[error("form was not submitted")]
    NotSubmitted,
}

/// Outcome of checking a request against the form's submit controls.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Submission {
    /// The form has no submit widget, so submission is indeterminate.
    NoSubmitControl,
    /// A submit widget exists but its name is absent from the request.
    NotSubmitted,
    /// The request carries a submit widget's name; the parameter value.
    Submitted(String),
}

impl Submission {
    pub fn is_submitted(&self) -> bool {
        matches!(self, Self::Submitted(_))
    }
}

/// How checkbox values appear in [`Form::submitted_values`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CheckboxFormat {
    /// Report presence as a boolean (entry always emitted).
    #[default]
    Presence,
    /// Report the raw submitted value, only when present.
    RawValue,
}

/// One extracted submitted value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SubmittedValue {
    /// Raw parameter value
    Text(String),
    /// Checkbox presence
    Checked(bool),
    /// Uploaded-file descriptor
    File(UploadedFile),
    /// The field was in the form but carried no usable request value
    /// (missing upload, radio group with no matching member).
    Absent,
}

/// Insertion-ordered map of field key to extracted value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubmittedValues {
    entries: Vec<(String, SubmittedValue)>,
}

impl SubmittedValues {
    pub fn get(&self, key: &str) -> Option<&SubmittedValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in field insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SubmittedValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    fn push(&mut self, key: impl Into<String>, value: SubmittedValue) {
        self.entries.push((key.into(), value));
    }
}

/// A form entry: one widget, or a group of radios sharing a name.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FormField {
    Single(Input),
    /// Radio widgets sharing a name, keyed by their value attribute.
    RadioGroup(Vec<Input>),
}

impl FormField {
    pub fn as_single(&self) -> Option<&Input> {
        match self {
            Self::Single(input) => Some(input),
            Self::RadioGroup(_) => None,
        }
    }

    pub fn as_single_mut(&mut self) -> Option<&mut Input> {
        match self {
            Self::Single(input) => Some(input),
            Self::RadioGroup(_) => None,
        }
    }

    pub fn as_group(&self) -> Option<&[Input]> {
        match self {
            Self::RadioGroup(group) => Some(group),
            Self::Single(_) => None,
        }
    }

    /// Group member by value attribute.
    pub fn radio(&self, value: &str) -> Option<&Input> {
        self.as_group()?.iter().find(|r| r.value() == value)
    }
}

/// An insertion-ordered collection of form fields with submission handling.
///
/// Does **not** sanitize any input values; that remains the caller's job.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Form {
    element: Element,
    fields: Vec<(String, FormField)>,
    method: Method,
    action: String,
    enctype: Enctype,
    enctype_overridden: bool,
    print_fields: bool,
    submitted: Option<Submission>,
    ids: IdGen,
}

const LABEL_SPAN_STYLE: &str =
    "width: 250px;display: inline-block;text-align: right;margin-right: 10px;vertical-align: top;";

impl Form {
    /// Create a form posting to `action`. The method defaults to POST.
    pub fn new(action: impl Into<String>) -> Self {
        let action = action.into();
        let method = Method::default();
        let enctype = Enctype::default();
        let mut element = Element::new("form");
        let _ = element.set_attribute("method", method.as_str());
        let _ = element.set_attribute("action", action.clone());
        let _ = element.set_attribute("enctype", enctype.content_type());
        Self {
            element,
            fields: Vec::new(),
            method,
            action,
            enctype,
            enctype_overridden: false,
            print_fields: true,
            submitted: None,
            ids: IdGen::new(),
        }
    }

    /// Set the method (builder style)
    pub fn with_method(mut self, method: Method) -> Self {
        let _ = self.set_method(method);
        self
    }

    // Fields

    /// Add a widget, returning the key the form files it under.
    ///
    /// The key is the widget's name attribute; a widget without a name (or
    /// label to derive one from) gets a synthetic key from the form's
    /// identifier sequence. Radios sharing a name accumulate into a group
    /// keyed by value. Adding a file widget switches the enctype to
    /// multipart unless [`Form::set_enctype`] was already called.
    pub fn add_field(&mut self, mut field: Input) -> String {
        let _ = field.ensure_identity(&mut self.ids);
        let key = field.name().to_string();
        let position = self.fields.iter().position(|(k, _)| k == &key);
        if field.kind() == InputKind::Radio {
            match position {
                Some(index) => match &mut self.fields[index].1 {
                    FormField::RadioGroup(group) => {
                        if let Some(existing) =
                            group.iter_mut().find(|r| r.value() == field.value())
                        {
                            *existing = field;
                        } else {
                            group.push(field);
                        }
                    }
                    entry => {
                        warn!(name = %key, "radio shares a name with a non-radio field; replacing");
                        *entry = FormField::RadioGroup(vec![field]);
                    }
                },
                None => {
                    self.fields
                        .push((key.clone(), FormField::RadioGroup(vec![field])));
                }
            }
        } else {
            if field.kind() == InputKind::File && !self.enctype_overridden {
                debug!("file field added; switching enctype to multipart");
                self.enctype = Enctype::Multipart;
                let _ = self
                    .element
                    .set_attribute("enctype", self.enctype.content_type());
            }
            match position {
                Some(index) => self.fields[index].1 = FormField::Single(field),
                None => self.fields.push((key.clone(), FormField::Single(field))),
            }
        }
        key
    }

    fn entry_mut(&mut self, key: &str) -> Option<&mut FormField> {
        self.fields
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, f)| f)
    }

    pub fn contains_field(&self, key: &str) -> bool {
        self.fields.iter().any(|(k, _)| k == key)
    }

    /// Field by key, or `None` if absent.
    pub fn field(&self, key: &str) -> Option<&FormField> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, f)| f)
    }

    pub fn field_mut(&mut self, key: &str) -> Option<&mut FormField> {
        self.entry_mut(key)
    }

    /// Field by insertion position.
    pub fn field_at(&self, index: usize) -> Option<(&str, &FormField)> {
        self.fields.get(index).map(|(k, f)| (k.as_str(), f))
    }

    /// Remove a field (a whole radio group, if the key names one).
    pub fn remove_field(&mut self, key: &str) -> Option<FormField> {
        let index = self.fields.iter().position(|(k, _)| k == key)?;
        Some(self.fields.remove(index).1)
    }

    /// Remove one radio from a group by value. An emptied group is dropped.
    pub fn remove_radio(&mut self, name: &str, value: &str) -> Option<Input> {
        let position = self.fields.iter().position(|(k, _)| k == name)?;
        let FormField::RadioGroup(group) = &mut self.fields[position].1 else {
            return None;
        };
        let member = group.iter().position(|r| r.value() == value)?;
        let removed = group.remove(member);
        if group.is_empty() {
            let _ = self.fields.remove(position);
        }
        Some(removed)
    }

    /// Fields in insertion order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &FormField)> {
        self.fields.iter().map(|(k, f)| (k.as_str(), f))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    // Method / action / enctype

    pub fn method(&self) -> Method {
        self.method
    }

    /// Set the HTTP method, returning the previous one.
    pub fn set_method(&mut self, method: Method) -> Method {
        let _ = self.element.set_attribute("method", method.as_str());
        std::mem::replace(&mut self.method, method)
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    /// Set the action URL, returning the previous one.
    pub fn set_action(&mut self, action: impl Into<String>) -> String {
        let action = action.into();
        let _ = self.element.set_attribute("action", action.clone());
        std::mem::replace(&mut self.action, action)
    }

    pub fn enctype(&self) -> Enctype {
        self.enctype
    }

    /// Set the enctype, returning the previous one. An explicit call wins
    /// over the automatic multipart switch in [`Form::add_field`].
    pub fn set_enctype(&mut self, enctype: Enctype) -> Enctype {
        self.enctype_overridden = true;
        let _ = self
            .element
            .set_attribute("enctype", enctype.content_type());
        std::mem::replace(&mut self.enctype, enctype)
    }

    // Element passthrough

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.element.attribute(name)
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) -> bool {
        self.element.set_attribute(name, value)
    }

    pub fn add_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) -> bool {
        self.element.add_attribute(name, value)
    }

    pub fn set_style_rule(
        &mut self,
        rule: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.element.set_style_rule(rule, value)
    }

    // Submission

    /// Decide whether `request` submitted this form.
    ///
    /// Scans the fields for submit widgets; with none present the result is
    /// [`Submission::NoSubmitControl`] — a clear negative signal, never a
    /// panic. Otherwise the first submit widget whose (space-normalized)
    /// name appears in the method-selected parameter map wins, and that
    /// positive result is cached. Call
    /// [`Form::invalidate_submission`] to force a rescan against new data.
    pub fn submitted(&mut self, request: &RequestData) -> Submission {
        if let Some(cached @ Submission::Submitted(_)) = &self.submitted {
            return cached.clone();
        }
        let mut has_submit = false;
        let mut matched = None;
        for (_, field) in &self.fields {
            let Some(input) = field.as_single() else {
                continue;
            };
            if input.kind() != InputKind::Submit {
                continue;
            }
            has_submit = true;
            let name = normalize_name(input.name());
            if let Some(value) = request.param(self.method, &name) {
                debug!(submit = %name, "form submitted");
                matched = Some(value.to_string());
                break;
            }
        }
        if let Some(value) = matched {
            let result = Submission::Submitted(value);
            self.submitted = Some(result.clone());
            return result;
        }
        if has_submit {
            Submission::NotSubmitted
        } else {
            debug!("form has no submit control; submission indeterminate");
            Submission::NoSubmitControl
        }
    }

    /// Drop the cached submission result.
    pub fn invalidate_submission(&mut self) {
        self.submitted = None;
    }

    /// Extract the submitted values, keyed like the field map.
    ///
    /// Field names are space→underscore normalized before parameter lookup,
    /// mirroring browser form encoding. Submit widgets are excluded from the
    /// output. See [`SubmittedValue`] for the kind-specific shapes.
    pub fn submitted_values(
        &mut self,
        request: &RequestData,
        format: CheckboxFormat,
    ) -> Result<SubmittedValues, FormError> {
        match self.submitted(request) {
            Submission::NoSubmitControl => return Err(FormError::NoSubmitControl),
            Submission::NotSubmitted => return Err(FormError::NotSubmitted),
            Submission::Submitted(_) => {}
        }
        let params = request.params(self.method);
        let mut values = SubmittedValues::default();
        for (key, field) in &self.fields {
            match field {
                FormField::RadioGroup(group) => {
                    let name = group
                        .first()
                        .map(|r| normalize_name(r.name()))
                        .unwrap_or_else(|| key.clone());
                    let matched = params.get(&name).and_then(|incoming| {
                        group
                            .iter()
                            .find(|r| r.value() == incoming)
                            .map(|r| r.value().to_string())
                    });
                    match matched {
                        Some(value) => values.push(name, SubmittedValue::Text(value)),
                        None => values.push(name, SubmittedValue::Absent),
                    }
                }
                FormField::Single(input) => {
                    let name = normalize_name(input.name());
                    match input.kind() {
                        InputKind::Submit => {}
                        InputKind::Checkbox => match format {
                            CheckboxFormat::Presence => values.push(
                                key.clone(),
                                SubmittedValue::Checked(params.contains_key(&name)),
                            ),
                            CheckboxFormat::RawValue => {
                                if let Some(value) = params.get(&name) {
                                    values.push(key.clone(), SubmittedValue::Text(value.clone()));
                                }
                            }
                        },
                        InputKind::File => match request.file(&name) {
                            Some(file) => {
                                values.push(key.clone(), SubmittedValue::File(file.clone()))
                            }
                            None => values.push(key.clone(), SubmittedValue::Absent),
                        },
                        _ => {
                            if let Some(value) = params.get(&name) {
                                values.push(key.clone(), SubmittedValue::Text(value.clone()));
                            }
                        }
                    }
                }
            }
        }
        Ok(values)
    }

    /// Load the submitted values back into the widgets in place.
    ///
    /// Checkboxes get their checked state from parameter presence, each
    /// radio in a group is checked iff its value matches the incoming
    /// parameter, selects replace their selected set, and other widgets take
    /// the raw value. Submit and file widgets are excluded.
    pub fn load_submitted_values(&mut self, request: &RequestData) -> Result<(), FormError> {
        match self.submitted(request) {
            Submission::NoSubmitControl => return Err(FormError::NoSubmitControl),
            Submission::NotSubmitted => return Err(FormError::NotSubmitted),
            Submission::Submitted(_) => {}
        }
        let params = request.params(self.method).clone();
        for (_, field) in &mut self.fields {
            match field {
                FormField::RadioGroup(group) => {
                    let Some(name) = group.first().map(|r| normalize_name(r.name())) else {
                        continue;
                    };
                    if let Some(incoming) = params.get(&name) {
                        for radio in group.iter_mut() {
                            let _ = radio.set_checked(radio.value() == incoming.as_str());
                        }
                    }
                }
                FormField::Single(input) => {
                    let name = normalize_name(input.name());
                    match input.kind() {
                        InputKind::Submit | InputKind::File => {}
                        InputKind::Checkbox => {
                            let _ = input.set_checked(params.contains_key(&name));
                        }
                        InputKind::Select => {
                            if let Some(value) = params.get(&name) {
                                let _ = input.set_selected([value.clone()]);
                            }
                        }
                        _ => {
                            if let Some(value) = params.get(&name) {
                                input.set_value(value.clone());
                            }
                        }
                    }
                }
            }
        }
        Ok(())
    }

    // Rendering

    pub fn print_fields(&self) -> bool {
        self.print_fields
    }

    /// Control whether rendering emits the fields, returning the previous
    /// flag. When off only the bare form tag renders.
    pub fn set_print_fields(&mut self, print_fields: bool) -> bool {
        std::mem::replace(&mut self.print_fields, print_fields)
    }

    /// Render in the default styled layout: each label wrapped in a
    /// `span.label` with inline styles, the control in a plain span, fields
    /// separated by `<br />`.
    pub fn render(&self) -> String {
        self.render_inner(|input, out| {
            out.push_str("<span class=\"label\" style=\"");
            out.push_str(LABEL_SPAN_STYLE);
            out.push_str("\">");
            out.push_str(&input.label_element().render());
            out.push_str("</span><span>");
            out.push_str(&input.render_control());
            out.push_str("</span><br />\n");
        })
    }

    /// Render in the plain layout: label + control + `break_string` per
    /// field, widget labels included where not suppressed.
    pub fn render_plain(&self, break_string: &str) -> String {
        self.render_inner(|input, out| {
            out.push('\t');
            out.push_str(&input.render());
            out.push_str(break_string);
        })
    }

    fn render_inner(&self, mut emit: impl FnMut(&Input, &mut String)) -> String {
        let mut out = self.element.start_tag();
        if self.print_fields {
            out.push('\n');
            for (_, field) in &self.fields {
                match field {
                    FormField::Single(input) => emit(input, &mut out),
                    FormField::RadioGroup(group) => {
                        for radio in group {
                            emit(radio, &mut out);
                        }
                    }
                }
            }
        }
        out.push_str(&self.element.end_tag());
        out
    }
}

impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Browsers replace spaces in field names with underscores.
fn normalize_name(name: &str) -> String {
    name.replace(' ', "_")
}
