//! Request text handling.
//!
//! # Responsibilities
//! - Wrap raw request text in an owned, immutable value
//! - Preserve the original text for logging and forwarding
//!
//! # Design Decisions
//! - No HTTP parsing; the request stays an opaque text blob
//! - Rules borrow fragments on demand, nothing is pre-computed

use std::fmt;

/// One textual request. Immutable once constructed.
///
/// By convention the first line is `"<VERB> <PATH> HTTP/<version>"` and a
/// later line may begin with `"cookie:"` followed by `key=value;` pairs,
/// but nothing here depends on that shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request(String);

impl Request {
    /// Create a request from raw text.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The full request text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Request {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

impl From<String> for Request {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
