//! Read-only diagnostics over the in-memory collections.

use super::Store;
use crate::models::Collection;
use crate::storage::KeyValueStore;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::warn;

/// Size of one collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionStats {
    /// Storage key suffix, e.g. `contest_attempts`
    pub name: &'static str,
    pub count: usize,
    /// Length of the stored compact JSON
    pub bytes: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSummary {
    pub collections: Vec<CollectionStats>,
    pub last_updated: DateTime<Utc>,
}

impl DataSummary {
    pub fn get(&self, collection: Collection) -> Option<&CollectionStats> {
        self.collections
            .iter()
            .find(|s| s.name == collection.key_suffix())
    }

    pub fn count(&self, collection: Collection) -> usize {
        self.get(collection).map_or(0, |s| s.count)
    }

    pub fn bytes(&self, collection: Collection) -> usize {
        self.get(collection).map_or(0, |s| s.bytes)
    }

    pub fn total_records(&self) -> usize {
        self.collections.iter().map(|s| s.count).sum()
    }

    pub fn total_bytes(&self) -> usize {
        self.collections.iter().map(|s| s.bytes).sum()
    }
}

impl<K: KeyValueStore> Store<K> {
    pub fn summary(&self) -> DataSummary {
        let collections = Collection::ALL
            .iter()
            .map(|&collection| {
                let bytes = match self.collection_json(collection) {
                    Ok(text) => text.len(),
                    Err(e) => {
                        warn!("[Store] Cannot measure {}: {}", collection, e);
                        0
                    }
                };
                CollectionStats {
                    name: collection.key_suffix(),
                    count: self.record_count(collection),
                    bytes,
                }
            })
            .collect();

        DataSummary {
            collections,
            last_updated: self.data.last_updated,
        }
    }

    fn record_count(&self, collection: Collection) -> usize {
        match collection {
            Collection::Users => self.data.users.len(),
            Collection::Contests => self.data.contests.len(),
            Collection::Challenges => self.data.challenges.len(),
            Collection::ContestAttempts => self.data.contest_attempts.len(),
            Collection::UserProgress => self.data.user_progress.len(),
            Collection::Events => self.data.events.len(),
            Collection::ForumTopics => self.data.forum_topics.len(),
        }
    }
}
