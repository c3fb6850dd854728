//! Main entry point for tenantkv.
//!
//! [`TenantKv`] bundles the tenant registry and the namespaced store
//! facade behind one handle, the way application code usually wants them.
//! Both parts remain usable on their own.

use std::sync::Arc;

use tenantkv_core::StorageBackend;
use tenantkv_registry::TenantRegistry;
use tenantkv_store::{MemoryBackend, NamespacedStore};

/// Combined tenant registry and namespaced store.
///
/// Create one with [`TenantKv::in_memory`] or [`TenantKv::builder`].
///
/// # Example
///
/// ```ignore
/// let mut db = TenantKv::builder()
///     .backend(my_backend)
///     .tenant("downloader")
///     .build();
///
/// let prefix = db.tenants.get("downloader").unwrap().to_string();
/// db.kv.set(&prefix, "key1", "value").await?;
/// ```
pub struct TenantKv {
    /// Tenant registrations. Mutation requires `&mut`, which keeps the
    /// registry single-writer by construction.
    pub tenants: TenantRegistry,

    /// Namespaced storage operations.
    pub kv: NamespacedStore,
}

impl TenantKv {
    /// Create a builder for configuration.
    pub fn builder() -> TenantKvBuilder {
        TenantKvBuilder::new()
    }

    /// Create a store over a fresh in-memory backend.
    ///
    /// Nothing is persisted; all data is gone when the backend is dropped.
    /// Useful for tests and ephemeral caching.
    pub fn in_memory() -> Self {
        Self::builder().build()
    }

    /// Create a store over the given backend with no tenants registered.
    pub fn with_backend(backend: Arc<dyn StorageBackend>) -> Self {
        Self::builder().backend(backend).build()
    }
}

/// Builder for [`TenantKv`].
#[derive(Default)]
pub struct TenantKvBuilder {
    backend: Option<Arc<dyn StorageBackend>>,
    tenants: Vec<String>,
}

impl TenantKvBuilder {
    /// Create a builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the given storage backend.
    ///
    /// Defaults to a fresh [`MemoryBackend`] when not set.
    pub fn backend(mut self, backend: Arc<dyn StorageBackend>) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Pre-register a tenant. May be called repeatedly.
    pub fn tenant(mut self, identifier: impl Into<String>) -> Self {
        self.tenants.push(identifier.into());
        self
    }

    /// Build the store.
    pub fn build(self) -> TenantKv {
        let backend = self
            .backend
            .unwrap_or_else(|| Arc::new(MemoryBackend::new()));
        let mut tenants = TenantRegistry::new();
        for identifier in &self.tenants {
            tenants.add(identifier);
        }
        TenantKv {
            tenants,
            kv: NamespacedStore::new(backend),
        }
    }
}
