//! Namespaced store facade for tenantkv.
//!
//! This crate turns a flat [`StorageBackend`] into per-tenant namespaces:
//! logical `(namespace, key)` pairs are translated to `PREFIX#key` physical
//! keys, values are transparently (de)serialized, and bulk operations are
//! composed from the backend's primitives.
//!
//! [`StorageBackend`]: tenantkv_core::StorageBackend

mod facade;
mod memory;

pub use facade::NamespacedStore;
pub use memory::MemoryBackend;
