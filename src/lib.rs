//! # tenantkv
//!
//! Tenant-namespacing layer over asynchronous flat key-value backends.
//!
//! tenantkv lets multiple independent logical consumers ("tenants") share
//! one physical key-value namespace without collisions. Each tenant owns a
//! derived key prefix; the store facade translates logical keys to
//! `PREFIX#key` physical keys, transparently (de)serializes JSON values,
//! and offers bulk operations scoped to one tenant.
//!
//! ## Quick Start
//!
//! ```ignore
//! use tenantkv::prelude::*;
//!
//! // In-memory backend, ready to use
//! let mut db = TenantKv::in_memory();
//!
//! // Register a tenant and obtain its prefix
//! let downloader = db.tenants.add("downloader"); // "DOWNLOADER"
//!
//! // Namespaced operations
//! db.kv.set(&downloader, "key1", json!({"some": "json"})).await?;
//! let value = db.kv.get(&downloader, "key1").await?;
//!
//! // Bulk operations
//! let all = db.kv.entries(&downloader).await?;
//! db.kv.clear(&downloader).await?;
//! ```
//!
//! ## Layers
//!
//! - [`TenantRegistry`] - identifier -> prefix mapping, in process memory
//! - [`NamespacedStore`] - key encoding, value codec, bulk operations
//! - [`StorageBackend`] - the asynchronous contract your backend implements
//!
//! The registry and the store are independent: you can pass any
//! separator-free prefix string to the store directly, registered or not.

#![warn(missing_docs)]

mod client;

pub mod prelude;

pub use client::{TenantKv, TenantKvBuilder};

// Re-export the component types at the crate root
pub use tenantkv_core::{Error, Result, StorageBackend, Value, SEPARATOR};
pub use tenantkv_registry::TenantRegistry;
pub use tenantkv_store::{MemoryBackend, NamespacedStore};
