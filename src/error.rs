//! Error types for the storage backends and the data store.
//!
//! None of these escape the public CRUD surface of [`crate::Store`]; they are
//! logged and recovered inside the store. They are public so that backends
//! and tests can construct and match on them.

use thiserror::Error;

/// Failure reported by a key-value backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backend cannot be reached at all.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// The value is larger than the backend accepts.
    #[error("quota exceeded writing {key}: {size} bytes (limit {limit})")]
    QuotaExceeded {
        key: String,
        size: usize,
        limit: usize,
    },

    #[error("sqlite: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Failure inside the store pipelines.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Persisted or imported text did not parse into the expected shape.
    #[error("cannot deserialize {what}: {source}")]
    Deserialize {
        what: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot serialize {what}: {source}")]
    Serialize {
        what: String,
        #[source]
        source: serde_json::Error,
    },

    /// Writing or removing a single key failed.
    #[error("cannot write {key}: {source}")]
    Write {
        key: String,
        #[source]
        source: StorageError,
    },

    /// Reading from the backend failed.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// A patch produced a record that no longer matches its type.
    #[error("patch for {id} does not fit the record: {source}")]
    Patch {
        id: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
