//! Namespaced store facade.
//!
//! Translates logical `(namespace, key)` pairs into physical backend keys,
//! (de)serializes values, and builds bulk operations on top of the
//! backend's primitives. The facade holds no state beyond the backend
//! handle and performs no concurrency control: every operation is a
//! single-shot asynchronous request (or, for the composites, two
//! sequential requests with no isolation between them).
//!
//! Backend failures propagate to the caller untouched; the only errors the
//! facade itself produces are prefix validation and value serialization.

use std::sync::Arc;

use tenantkv_core::{keys, Result, StorageBackend, Value};
use tracing::{debug, trace};

/// Per-tenant view over a flat [`StorageBackend`].
///
/// The namespace argument on every operation is a tenant's storage prefix,
/// typically obtained from the tenant registry. Prefixes must be non-empty
/// and must not contain the reserved `#` separator; anything else is
/// rejected before the backend is contacted.
///
/// # Example
///
/// ```ignore
/// let store = NamespacedStore::new(backend);
/// store.set("DOWNLOADER", "key1", json!({"some": "json"})).await?;
/// let value = store.get("DOWNLOADER", "key1").await?;
/// ```
#[derive(Clone)]
pub struct NamespacedStore {
    backend: Arc<dyn StorageBackend>,
}

impl NamespacedStore {
    /// Create a facade over the given backend.
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Fetch a value from a namespace.
    ///
    /// Returns `None` when the key is absent. Raw values that parse as
    /// JSON decode to [`Value::Json`]; everything else comes back as
    /// [`Value::Text`] unchanged.
    pub async fn get(&self, ns: &str, key: &str) -> Result<Option<Value>> {
        keys::validate_prefix(ns)?;
        let physical = keys::physical_key(ns, key);
        trace!(namespace = ns, key, "get");
        let raw = self.backend.get(&physical).await?;
        Ok(raw.map(|s| Value::decode(&s)))
    }

    /// Write a value into a namespace.
    ///
    /// Structured values are serialized to JSON; text values are written
    /// verbatim.
    pub async fn set(&self, ns: &str, key: &str, value: impl Into<Value>) -> Result<()> {
        keys::validate_prefix(ns)?;
        let physical = keys::physical_key(ns, key);
        let raw = value.into().encode()?;
        debug!(namespace = ns, key, "set");
        self.backend.set(&physical, &raw).await
    }

    /// Delete a single key from a namespace.
    pub async fn delete(&self, ns: &str, key: &str) -> Result<()> {
        keys::validate_prefix(ns)?;
        let physical = keys::physical_key(ns, key);
        debug!(namespace = ns, key, "delete");
        self.backend.remove(&physical).await
    }

    /// List every logical key in a namespace.
    ///
    /// The backend has no native prefix scan, so this lists all physical
    /// keys and filters - O(total keys in the backend), in the backend's
    /// listing order. Only keys matching `prefix + separator` are kept, so
    /// a `DOWNLOADER` namespace never captures `DOWNLOADER2#...` keys.
    pub async fn keys(&self, ns: &str) -> Result<Vec<String>> {
        keys::validate_prefix(ns)?;
        let all = self.backend.list_all_keys().await?;
        let matched: Vec<String> = all
            .iter()
            .filter_map(|physical| keys::logical_key(ns, physical))
            .map(str::to_string)
            .collect();
        trace!(namespace = ns, count = matched.len(), "keys");
        Ok(matched)
    }

    /// Bulk fetch of logical keys from a namespace.
    ///
    /// Issues one backend fetch. Pairs come back in the backend's result
    /// order, which need not match the input order; keys the backend does
    /// not hold produce no pair. An empty result is an empty vector, not
    /// an error.
    pub async fn mget<K: AsRef<str>>(&self, ns: &str, logical: &[K]) -> Result<Vec<(String, Value)>> {
        keys::validate_prefix(ns)?;
        let physical: Vec<String> = logical
            .iter()
            .map(|k| keys::physical_key(ns, k.as_ref()))
            .collect();
        let pairs = self.backend.multi_get(&physical).await?;
        trace!(namespace = ns, requested = physical.len(), found = pairs.len(), "mget");
        Ok(pairs
            .iter()
            .filter_map(|(physical, raw)| {
                keys::logical_key(ns, physical).map(|k| (k.to_string(), Value::decode(raw)))
            })
            .collect())
    }

    /// Bulk delete of logical keys from a namespace.
    pub async fn mdelete<K: AsRef<str>>(&self, ns: &str, logical: &[K]) -> Result<()> {
        keys::validate_prefix(ns)?;
        let physical: Vec<String> = logical
            .iter()
            .map(|k| keys::physical_key(ns, k.as_ref()))
            .collect();
        debug!(namespace = ns, count = physical.len(), "mdelete");
        self.backend.multi_remove(&physical).await
    }

    /// Fetch every key-value pair in a namespace.
    ///
    /// Composes [`keys`](Self::keys) and [`mget`](Self::mget): two
    /// sequential backend round-trips with no isolation. A writer acting
    /// between the two calls can make the result stale.
    pub async fn entries(&self, ns: &str) -> Result<Vec<(String, Value)>> {
        let logical = self.keys(ns).await?;
        self.mget(ns, &logical).await
    }

    /// Delete every key in a namespace.
    ///
    /// Composes [`keys`](Self::keys) and a bulk delete; not atomic with
    /// respect to concurrent writers. Keys under other namespaces are
    /// untouched.
    pub async fn clear(&self, ns: &str) -> Result<()> {
        let logical = self.keys(ns).await?;
        debug!(namespace = ns, count = logical.len(), "clear");
        self.mdelete(ns, &logical).await
    }
}
