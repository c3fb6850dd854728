//! Convenient imports for tenantkv.
//!
//! ```ignore
//! use tenantkv::prelude::*;
//!
//! let mut db = TenantKv::in_memory();
//! let tenant = db.tenants.add("downloader");
//! db.kv.set(&tenant, "key", json!({"a": 1})).await?;
//! ```

// Main entry point
pub use crate::client::{TenantKv, TenantKvBuilder};

// Error handling
pub use tenantkv_core::{Error, Result};

// Value model and backend contract
pub use tenantkv_core::{StorageBackend, Value};

// Components
pub use tenantkv_registry::TenantRegistry;
pub use tenantkv_store::{MemoryBackend, NamespacedStore};

// Re-export serde_json's json! for convenience
pub use serde_json::json;
