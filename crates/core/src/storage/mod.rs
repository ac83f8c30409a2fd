//! Key-value storage boundary.
//!
//! The dashboard persists only a few preference blobs (watchlist, settings)
//! under string keys. This module defines the storage trait those services
//! depend on and an in-memory backend. A desktop shell would implement the
//! same trait over its local storage facility.

use dashmap::DashMap;

use crate::errors::Result;

/// String-keyed storage for small serialized values.
pub trait KvStoreTrait: Send + Sync {
    /// Returns the stored value, or `None` when the key has never been set.
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

/// In-memory [`KvStoreTrait`] backend.
#[derive(Default)]
pub struct MemoryKvStore {
    entries: DashMap<String, String>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStoreTrait for MemoryKvStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).map(|entry| entry.clone()))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}
