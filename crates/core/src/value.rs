//! Stored-value model.
//!
//! Backends store opaque strings. This layer stores one of two logical
//! shapes on top of that: a plain text string, written verbatim, or a
//! structured JSON value, serialized on write and re-parsed on read.
//!
//! # Round trip
//!
//! Storing a [`Value::Json`] and reading it back yields a deep-equal JSON
//! value. Storing a [`Value::Text`] that is not valid JSON yields the
//! identical string.
//!
//! # Decode ambiguity
//!
//! Decoding is a heuristic, not a type-tagged format: a text value that
//! happens to be valid JSON syntax (`"42"`, `"null"`, `"true"`) decodes as
//! the parsed JSON value, not as text. Callers that must round-trip such
//! strings losslessly should store them inside a JSON string value instead.
//! A type-tagged payload format would remove the ambiguity at the cost of
//! breaking physical-value compatibility; this layer keeps the heuristic.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A logical value stored under a tenant's namespace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Plain text, stored verbatim.
    Text(String),
    /// Structured data, stored as its JSON serialization.
    Json(serde_json::Value),
}

impl Value {
    /// Encode into the raw string handed to the backend.
    ///
    /// `Text` passes through untouched; `Json` is serialized.
    pub fn encode(&self) -> Result<String> {
        match self {
            Value::Text(s) => Ok(s.clone()),
            Value::Json(v) => Ok(serde_json::to_string(v)?),
        }
    }

    /// Decode a raw backend string into a logical value.
    ///
    /// Attempts a JSON parse first and falls back to text on any parse
    /// failure. The fallback is silent; it is a pass-through, not an error.
    /// See the module docs for the ambiguity this introduces.
    pub fn decode(raw: &str) -> Value {
        match serde_json::from_str(raw) {
            Ok(json) => Value::Json(json),
            Err(_) => Value::Text(raw.to_string()),
        }
    }

    /// Borrow the text content, if this is a text value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            Value::Json(_) => None,
        }
    }

    /// Borrow the JSON content, if this is a structured value.
    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Value::Text(_) => None,
            Value::Json(v) => Some(v),
        }
    }

    /// Check if this is a text value.
    pub fn is_text(&self) -> bool {
        matches!(self, Value::Text(_))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        Value::Json(v)
    }
}
