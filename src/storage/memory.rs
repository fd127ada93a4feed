//! MemoryStore - In-process key-value backend.
//!
//! Behaves like browser local storage: a flat string map with an optional
//! size limit. Failure switches let tests reproduce quota errors and an
//! unreachable backend.

use crate::error::StorageError;
use crate::storage::KeyValueStore;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
    /// Largest value (in bytes) a single write may carry
    quota: Option<usize>,
    /// Keys whose writes always fail
    failing_keys: BTreeSet<String>,
    unavailable: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject any single value longer than `limit` bytes.
    pub fn with_quota(limit: usize) -> Self {
        Self {
            quota: Some(limit),
            ..Self::default()
        }
    }

    /// Make every write to `key` fail with `QuotaExceeded`.
    pub fn fail_writes_to(&mut self, key: impl Into<String>) {
        self.failing_keys.insert(key.into());
    }

    pub fn clear_failures(&mut self) {
        self.failing_keys.clear();
        self.unavailable = false;
    }

    /// Make every read fail, as if the backend could not be reached.
    pub fn set_unavailable(&mut self, unavailable: bool) {
        self.unavailable = unavailable;
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.unavailable {
            return Err(StorageError::Unavailable("memory store switched off".into()));
        }
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.failing_keys.contains(key) {
            return Err(StorageError::QuotaExceeded {
                key: key.to_string(),
                size: value.len(),
                limit: 0,
            });
        }

        if let Some(limit) = self.quota {
            if value.len() > limit {
                return Err(StorageError::QuotaExceeded {
                    key: key.to_string(),
                    size: value.len(),
                    limit,
                });
            }
        }

        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quota_rejects_large_values() {
        let mut store = MemoryStore::with_quota(4);
        assert!(store.set("k", "1234").is_ok());

        let err = store.set("k", "12345").unwrap_err();
        assert!(matches!(err, StorageError::QuotaExceeded { size: 5, limit: 4, .. }));
        assert_eq!(store.get("k").unwrap().as_deref(), Some("1234"));
    }

    #[test]
    fn test_failing_key_leaves_others_writable() {
        let mut store = MemoryStore::new();
        store.fail_writes_to("bad");

        assert!(store.set("bad", "x").is_err());
        assert!(store.set("good", "x").is_ok());
        assert!(!store.contains("bad"));
        assert!(store.contains("good"));
    }

    #[test]
    fn test_unavailable_reads_fail() {
        let mut store = MemoryStore::new();
        store.set("k", "v").unwrap();
        store.set_unavailable(true);
        assert!(matches!(store.get("k"), Err(StorageError::Unavailable(_))));

        store.clear_failures();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }
}
