//! This module defines logic to serialize/deserialize problem and solution in json format.

#[cfg(test)]
#[path = "../../tests/unit/format/format_test.rs"]
mod format_test;

use serde::{Deserialize, Serialize};
use std::fmt;

mod id_index;
pub use self::id_index::*;

pub mod problem;
pub mod solution;

/// An external identifier which can be either a number or a string.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(untagged)]
pub enum Id {
    /// A numeric identifier.
    Number(u64),
    /// A string identifier.
    Text(String),
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id::Number(id) => write!(f, "{id}"),
            Id::Text(id) => write!(f, "{id}"),
        }
    }
}

impl From<u64> for Id {
    fn from(value: u64) -> Self {
        Id::Number(value)
    }
}

impl From<&str> for Id {
    fn from(value: &str) -> Self {
        Id::Text(value.to_string())
    }
}

/// A format error.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct FormatError {
    /// An error code in registry.
    pub code: String,
    /// A possible error cause.
    pub cause: String,
    /// An action to take in order to recover from error.
    pub action: String,
    /// A details about exception.
    pub details: Option<String>,
}

impl FormatError {
    /// Creates a new instance of `FormatError` action without details.
    pub fn new(code: String, cause: String, action: String) -> Self {
        Self { code, cause, action, details: None }
    }

    /// Creates a new instance of `FormatError` action.
    pub fn new_with_details(code: String, cause: String, action: String, details: String) -> Self {
        Self { code, cause, action, details: Some(details) }
    }

    /// Serializes error into json string.
    pub fn to_json(&self) -> String {
        serialize_to_string(self)
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, cause: '{}', action: '{}'.", self.code, self.cause, self.action)
    }
}

impl std::error::Error for FormatError {}

/// Keeps track of multiple format errors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MultiFormatError {
    /// Inner errors.
    pub errors: Vec<FormatError>,
}

impl MultiFormatError {
    /// Formats multiple format errors into json string.
    pub fn to_json(&self) -> String {
        serialize_to_string(&self.errors)
    }

    /// Returns error codes in their order.
    pub fn codes(&self) -> Vec<&str> {
        self.errors.iter().map(|err| err.code.as_str()).collect()
    }
}

impl fmt::Display for MultiFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.errors.iter().map(|err| err.to_string()).collect::<Vec<_>>().join("\n"))
    }
}

impl std::error::Error for MultiFormatError {}

impl From<Vec<FormatError>> for MultiFormatError {
    fn from(errors: Vec<FormatError>) -> Self {
        MultiFormatError { errors }
    }
}

impl From<FormatError> for MultiFormatError {
    fn from(error: FormatError) -> Self {
        MultiFormatError { errors: vec![error] }
    }
}

impl IntoIterator for MultiFormatError {
    type Item = FormatError;
    type IntoIter = std::vec::IntoIter<FormatError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

fn serialize_to_string<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|err| format!("cannot serialize: '{err}'"))
}
