//! Form widgets
//!
//! A closed set of form input widgets built on [`markup_element::Element`],
//! plus a [`Form`] container that aggregates named widgets, decides whether a
//! request submitted the form, and reconciles submitted parameter values back
//! onto the widgets.
//!
//! Request parameters and uploaded files are read-only collaborators supplied
//! by the hosting environment via [`RequestData`]; this crate never touches
//! the network and never sanitizes values.

mod form;
mod ids;
mod input;
mod request;

pub use form::{
    CheckboxFormat, Form, FormError, FormField, SubmittedValue, SubmittedValues, Submission,
};
pub use ids::IdGen;
pub use input::{Input, InputKind};
pub use request::{Enctype, Method, RequestData, UploadedFile};
