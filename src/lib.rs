//! vaic-store Core Library
//!
//! Local persistence for the VAIC contest app. Provides:
//! - Typed records for users, contests, challenges, attempts, progress,
//!   events and forum topics
//! - A data store with per-collection CRUD, cascade delete of challenges,
//!   JSON import/export and reset to built-in seed data
//! - Key-value backends: SQLite on disk, or in memory
//!
//! Pipeline: Backend (raw text per key) -> Codec (JSON) -> Store (collections)

pub mod config;
pub mod error;
pub mod models;
pub mod storage;
pub mod store;

// Re-export main types
pub use config::Config;
pub use error::{StorageError, StoreError};
pub use models::{
    Challenge, ChallengeType, Collection, Contest, ContestAttempt, ContestBundle, DataBundle,
    Difficulty, Event, ForumReply, ForumTopic, Record, User, UserProgress, UserRole,
};
pub use storage::{KeyValueStore, MemoryStore, SqliteStore};
pub use store::{DataSummary, Patch, Store, StoreKeys};
