//! In-memory reference backend.
//!
//! A process-local [`StorageBackend`] over a `BTreeMap`. Used by the test
//! suites and by embedders that want namespacing semantics without an
//! external store. Nothing survives the process.

use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use tenantkv_core::{Result, StorageBackend};

/// Ephemeral backend holding all data in a sorted in-memory map.
///
/// Ordering guarantees, beyond what the trait promises:
/// - `list_all_keys` returns keys in lexicographic order
/// - `multi_get` returns found pairs in request order
#[derive(Debug, Default)]
pub struct MemoryBackend {
    data: RwLock<BTreeMap<String, String>>,
}

impl MemoryBackend {
    /// Create an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of physical keys currently stored.
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    /// Check if the backend holds no data.
    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }

    /// Copy out the raw physical contents, for assertions in tests.
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.data.read().clone()
    }
}

#[async_trait]
impl StorageBackend for MemoryBackend {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.data.read().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.data.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.data.write().remove(key);
        Ok(())
    }

    async fn list_all_keys(&self) -> Result<Vec<String>> {
        Ok(self.data.read().keys().cloned().collect())
    }

    async fn multi_get(&self, keys: &[String]) -> Result<Vec<(String, String)>> {
        let data = self.data.read();
        Ok(keys
            .iter()
            .filter_map(|k| data.get(k).map(|v| (k.clone(), v.clone())))
            .collect())
    }

    async fn multi_remove(&self, keys: &[String]) -> Result<()> {
        let mut data = self.data.write();
        for key in keys {
            data.remove(key);
        }
        Ok(())
    }
}
