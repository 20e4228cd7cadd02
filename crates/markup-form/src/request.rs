//! Request collaborators
//!
//! The form reads submitted state from a request-parameter map and an
//! uploaded-file map, both owned by the hosting environment. This module
//! models those read-only inputs plus the HTTP method and enctype enums.

use std::collections::HashMap;

/// Form submission method
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Method {
    Get,
    #[default]
    Post,
}

impl Method {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Some(Self::Get),
            "POST" => Some(Self::Post),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// Form encoding type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Enctype {
    #[default]
    UrlEncoded,
    Multipart,
    TextPlain,
}

impl Enctype {
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "multipart/form-data" => Self::Multipart,
            "text/plain" => Self::TextPlain,
            _ => Self::UrlEncoded,
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            Self::UrlEncoded => "application/x-www-form-urlencoded",
            Self::Multipart => "multipart/form-data",
            Self::TextPlain => "text/plain",
        }
    }
}

/// One uploaded file, as described by the hosting environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UploadedFile {
    /// Client-supplied file name
    pub file_name: String,
    /// Server-side temporary path
    pub temp_path: String,
    /// Declared MIME type
    pub mime_type: String,
    /// Size in bytes
    pub size: u64,
}

impl UploadedFile {
    pub fn new(file_name: impl Into<String>, temp_path: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            temp_path: temp_path.into(),
            ..Default::default()
        }
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = mime_type.into();
        self
    }

    pub fn with_size(mut self, size: u64) -> Self {
        self.size = size;
        self
    }
}

/// Read-only snapshot of one request's parameters and uploads.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RequestData {
    get: HashMap<String, String>,
    post: HashMap<String, String>,
    files: HashMap<String, UploadedFile>,
}

impl RequestData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a query-string parameter (builder style)
    pub fn with_get_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let _ = self.get.insert(name.into(), value.into());
        self
    }

    /// Add a request-body parameter (builder style)
    pub fn with_post_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let _ = self.post.insert(name.into(), value.into());
        self
    }

    /// Add an uploaded file (builder style)
    pub fn with_file(mut self, name: impl Into<String>, file: UploadedFile) -> Self {
        let _ = self.files.insert(name.into(), file);
        self
    }

    /// The parameter map for the given method.
    pub fn params(&self, method: Method) -> &HashMap<String, String> {
        match method {
            Method::Get => &self.get,
            Method::Post => &self.post,
        }
    }

    /// Look up a parameter by the form's configured method.
    pub fn param(&self, method: Method, name: &str) -> Option<&str> {
        self.params(method).get(name).map(String::as_str)
    }

    /// Look up an uploaded-file descriptor.
    pub fn file(&self, name: &str) -> Option<&UploadedFile> {
        self.files.get(name)
    }
}
