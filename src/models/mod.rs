//! Data model - Records held by the store and the bundles they travel in.
//!
//! All records serialize in camelCase, matching what the web front end has
//! always written. Each record keeps unknown fields in a flattened `extra`
//! map so they survive a load/save cycle untouched.

pub mod bundle;
pub mod community;
pub mod contest;
pub(crate) mod number;
pub mod progress;
pub mod user;

pub use bundle::{ContestBundle, DataBundle};
pub use community::{Event, ForumReply, ForumTopic};
pub use contest::{Challenge, ChallengeType, Contest, Difficulty};
pub use progress::{ContestAttempt, UserProgress};
pub use user::{User, UserRole};

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;

/// A record that lives in one of the store's collections.
pub trait Record: Serialize + DeserializeOwned + Clone {
    /// Collection this record type belongs to.
    const COLLECTION: Collection;

    fn id(&self) -> &str;
}

/// The seven collections owned by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Collection {
    Users,
    Contests,
    Challenges,
    ContestAttempts,
    UserProgress,
    Events,
    ForumTopics,
}

impl Collection {
    /// Every collection, in save order.
    pub const ALL: [Collection; 7] = [
        Collection::Users,
        Collection::Contests,
        Collection::Challenges,
        Collection::ContestAttempts,
        Collection::UserProgress,
        Collection::Events,
        Collection::ForumTopics,
    ];

    /// Suffix of the storage key, appended to `<namespace>_`.
    pub fn key_suffix(&self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Contests => "contests",
            Self::Challenges => "challenges",
            Self::ContestAttempts => "contest_attempts",
            Self::UserProgress => "user_progress",
            Self::Events => "events",
            Self::ForumTopics => "forum_topics",
        }
    }

    /// Human readable name used in logs and CLI output.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Contests => "contests",
            Self::Challenges => "challenges",
            Self::ContestAttempts => "contest attempts",
            Self::UserProgress => "user progress",
            Self::Events => "events",
            Self::ForumTopics => "forum topics",
        }
    }

    /// Whether records in this collection may be deleted.
    ///
    /// Attempts and progress are an append-only history.
    pub fn supports_delete(&self) -> bool {
        !matches!(self, Self::ContestAttempts | Self::UserProgress)
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
