//! Asynchronous storage backend contract.
//!
//! The namespacing layer does not implement persistence. The host supplies
//! an implementation of [`StorageBackend`] - a flat, string-keyed,
//! string-valued asynchronous store - and the facade builds everything else
//! from these six operations.
//!
//! Implementations report failures as [`Error::Backend`]; the facade
//! forwards those to callers without translation.
//!
//! [`Error::Backend`]: crate::error::Error::Backend

use async_trait::async_trait;

use crate::error::Result;

/// Flat asynchronous key-value store provided by the host environment.
///
/// Physical keys are opaque strings to the backend; the `PREFIX#key`
/// convention lives entirely above this trait.
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Fetch a single value, `None` when the key is absent.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a single value, creating or replacing the key.
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete a single key. Deleting an absent key is not an error.
    async fn remove(&self, key: &str) -> Result<()>;

    /// List every key in the backend, across all namespaces.
    ///
    /// The backend offers no native prefix scan; namespace filtering is the
    /// caller's job and costs O(total keys).
    async fn list_all_keys(&self) -> Result<Vec<String>>;

    /// Bulk fetch. Returns `(key, value)` pairs for the requested keys that
    /// exist; absent keys produce no pair.
    ///
    /// Result order is backend-defined and need not match the request
    /// order. Implementations should document the order they provide.
    async fn multi_get(&self, keys: &[String]) -> Result<Vec<(String, String)>>;

    /// Bulk delete. Absent keys are ignored.
    async fn multi_remove(&self, keys: &[String]) -> Result<()>;
}
