//! Tenant registry for tenantkv.
//!
//! The registry maps human-friendly tenant identifiers to storage-key
//! prefixes, entirely in process memory. It never talks to a storage
//! backend, holds no locks, and persists nothing: registrations live for
//! the lifetime of the owning value and are gone on restart.
//!
//! There is deliberately no process-wide singleton. Callers construct a
//! [`TenantRegistry`] and pass it where it is needed, which keeps tests
//! isolated and ownership explicit.
//!
//! # Example
//!
//! ```
//! use tenantkv_registry::TenantRegistry;
//!
//! let mut tenants = TenantRegistry::new();
//! let prefix = tenants.add("memes galore");
//! assert_eq!(prefix, "MEMES_GALORE");
//! assert_eq!(tenants.get("Memes Galore"), Some("MEMES_GALORE"));
//! ```

use std::collections::HashMap;

use tracing::debug;

pub mod normalize;

use normalize::{camel_key, prefix_from_key};

/// In-memory mapping from canonical tenant keys to storage prefixes.
///
/// Identifiers are normalized before every insert and lookup, so
/// `"memes galore"`, `"Memes-Galore"` and `"memesGalore"` all address the
/// same entry (`memesGalore -> MEMES_GALORE`). Entry order is irrelevant;
/// there are no duplicate keys by construction.
#[derive(Debug, Clone, Default)]
pub struct TenantRegistry {
    entries: HashMap<String, String>,
}

impl TenantRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tenant and return its storage prefix.
    ///
    /// No-op when the tenant is already registered; the existing prefix is
    /// returned. Identifiers with no alphanumeric content normalize to the
    /// empty key and are not registered.
    pub fn add(&mut self, identifier: &str) -> String {
        let key = camel_key(identifier);
        if key.is_empty() {
            return String::new();
        }
        if let Some(existing) = self.entries.get(&key) {
            return existing.clone();
        }
        let prefix = prefix_from_key(&key);
        debug!(tenant = %key, prefix = %prefix, "registered tenant");
        self.entries.insert(key, prefix.clone());
        prefix
    }

    /// Unregister a tenant. No-op when the tenant is unknown.
    pub fn remove(&mut self, identifier: &str) {
        let key = camel_key(identifier);
        if self.entries.remove(&key).is_some() {
            debug!(tenant = %key, "removed tenant");
        }
    }

    /// Drop every registration.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Look up a tenant's storage prefix.
    ///
    /// Returns `None` for unregistered tenants; lookups never fail.
    pub fn get(&self, identifier: &str) -> Option<&str> {
        self.entries.get(&camel_key(identifier)).map(String::as_str)
    }

    /// Check whether a tenant is registered.
    pub fn contains(&self, identifier: &str) -> bool {
        self.entries.contains_key(&camel_key(identifier))
    }

    /// Snapshot the full key -> prefix mapping.
    ///
    /// The returned map is a defensive copy, independent of later registry
    /// mutations.
    pub fn list(&self) -> HashMap<String, String> {
        self.entries.clone()
    }

    /// Number of registered tenants.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no tenants are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_registers_normalized_key_and_prefix() {
        let mut reg = TenantRegistry::new();
        reg.add("memes galore");

        let mut expected = HashMap::new();
        expected.insert("memesGalore".to_string(), "MEMES_GALORE".to_string());
        assert_eq!(reg.list(), expected);
    }

    #[test]
    fn add_is_a_noop_for_known_tenants() {
        let mut reg = TenantRegistry::new();
        let first = reg.add("downloader");
        let second = reg.add("DOWNLOADER");
        assert_eq!(first, second);
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn near_duplicate_identifiers_collapse() {
        let mut reg = TenantRegistry::new();
        reg.add("memes galore");
        reg.add("Memes-Galore");
        reg.add("memesGalore");
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn get_returns_none_for_unknown_tenants() {
        let reg = TenantRegistry::new();
        assert_eq!(reg.get("ghost"), None);
    }

    #[test]
    fn get_normalizes_before_lookup() {
        let mut reg = TenantRegistry::new();
        reg.add("downloader");
        assert_eq!(reg.get("Downloader"), Some("DOWNLOADER"));
    }

    #[test]
    fn remove_is_a_noop_for_unknown_tenants() {
        let mut reg = TenantRegistry::new();
        reg.add("downloader");
        reg.remove("cache");
        assert_eq!(reg.len(), 1);
        reg.remove("Downloader");
        assert!(reg.is_empty());
        assert_eq!(reg.get("downloader"), None);
    }

    #[test]
    fn clear_empties_the_registry() {
        let mut reg = TenantRegistry::new();
        reg.add("downloader");
        reg.add("cache");
        reg.clear();
        assert!(reg.is_empty());
    }

    #[test]
    fn list_is_a_defensive_copy() {
        let mut reg = TenantRegistry::new();
        reg.add("downloader");
        let snapshot = reg.list();
        reg.add("cache");
        assert_eq!(snapshot.len(), 1);
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn distinct_tenants_get_distinct_prefixes() {
        let mut reg = TenantRegistry::new();
        let a = reg.add("downloader");
        let b = reg.add("cache");
        assert_ne!(a, b);
    }

    #[test]
    fn symbol_only_identifier_is_not_registered() {
        let mut reg = TenantRegistry::new();
        assert_eq!(reg.add("##"), "");
        assert!(reg.is_empty());
    }
}
