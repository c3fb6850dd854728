//! Unified error types for tenantkv.
//!
//! One error type serves the whole workspace. The namespacing layer adds no
//! error translation of its own: backend failures are carried verbatim in
//! [`Error::Backend`] and surface to the caller exactly as the backend
//! produced them.

use thiserror::Error;

/// All tenantkv errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// Failure reported by the underlying storage backend.
    ///
    /// The message is whatever the backend produced; the facade never
    /// rewrites or wraps it.
    #[error("backend error: {0}")]
    Backend(String),

    /// Namespace prefix rejected before any backend call was made.
    ///
    /// A prefix must be non-empty and must not contain the reserved
    /// separator character.
    #[error("invalid prefix: {0}")]
    InvalidPrefix(String),

    /// Value could not be serialized for storage.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result type for tenantkv operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Build a backend error from any displayable failure.
    pub fn backend(err: impl std::fmt::Display) -> Self {
        Error::Backend(err.to_string())
    }

    /// Check if this error originated in the storage backend.
    pub fn is_backend(&self) -> bool {
        matches!(self, Error::Backend(_))
    }

    /// Check if this is a prefix validation error.
    pub fn is_invalid_prefix(&self) -> bool {
        matches!(self, Error::InvalidPrefix(_))
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
