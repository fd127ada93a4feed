//! Storage module - Raw key-value persistence underneath the data store.
//!
//! This module contains:
//! - `KeyValueStore` trait, the only seam the store talks to
//! - SQLite backend for durable storage on disk
//! - In-memory backend for tests and throwaway sessions

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::error::StorageError;

/// Trait for all key-value backends.
///
/// Values are UTF-8 text. Every call either completes or fails immediately;
/// there are no transactions spanning several keys.
pub trait KeyValueStore {
    /// Backend name (sqlite, memory)
    fn name(&self) -> &'static str;

    /// Read a value. `Ok(None)` means the key has never been written.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a value, replacing any previous one.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a key. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}
