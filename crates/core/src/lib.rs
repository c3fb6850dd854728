//! Shared contracts for tenantkv.
//!
//! This crate defines the pieces every other tenantkv crate agrees on:
//!
//! - [`Error`] / [`Result`] - the single error type for the whole workspace
//! - [`Value`] - the stored-value model (plain text or structured JSON)
//! - [`keys`] - physical-key encoding (`PREFIX#logical-key`)
//! - [`StorageBackend`] - the asynchronous contract a host backend must satisfy
//!
//! Nothing in here touches a backend; it is pure types and pure functions.

pub mod backend;
pub mod error;
pub mod keys;
pub mod value;

pub use backend::StorageBackend;
pub use error::{Error, Result};
pub use keys::{logical_key, physical_key, validate_prefix, SEPARATOR};
pub use value::Value;
