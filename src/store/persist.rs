//! Load/seed, save and reset pipelines.

use super::{codec, seed, Store, StoreKeys};
use crate::error::{StoreError, StoreResult};
use crate::models::{Collection, DataBundle, Record};
use crate::storage::KeyValueStore;
use chrono::Utc;
use serde_json::Map;
use tracing::{debug, error, info, warn};

/// Build the in-memory bundle from whatever `backend` holds.
///
/// Never writes. If the backend itself fails, every collection is reseeded,
/// including ones that had already loaded.
pub(super) fn load<K: KeyValueStore>(backend: &K, keys: &StoreKeys) -> DataBundle {
    match try_load(backend, keys) {
        Ok(data) => data,
        Err(e) => {
            error!("[Store] Error loading data, using defaults: {}", e);
            seed::default_bundle()
        }
    }
}

fn try_load<K: KeyValueStore>(backend: &K, keys: &StoreKeys) -> StoreResult<DataBundle> {
    let mut data = DataBundle {
        users: load_collection(backend, keys, seed::users)?,
        contests: load_collection(backend, keys, seed::contests)?,
        challenges: load_collection(backend, keys, seed::challenges)?,
        contest_attempts: load_collection(backend, keys, seed::contest_attempts)?,
        user_progress: load_collection(backend, keys, seed::user_progress)?,
        events: load_collection(backend, keys, seed::events)?,
        forum_topics: load_collection(backend, keys, seed::forum_topics)?,
        last_updated: Utc::now(),
        extra: Map::new(),
    };
    normalize(&mut data);
    Ok(data)
}

/// Read one collection. Missing, empty or unparseable values fall back to
/// the seed; only a backend failure is returned as an error.
fn load_collection<K, T>(backend: &K, keys: &StoreKeys, seed: fn() -> Vec<T>) -> StoreResult<Vec<T>>
where
    K: KeyValueStore,
    T: Record,
{
    let key = keys.collection(T::COLLECTION);

    let text = match backend.get(&key)? {
        Some(text) if !text.is_empty() => text,
        _ => {
            debug!("[Store] No saved {}, using seed", T::COLLECTION);
            return Ok(seed());
        }
    };

    match codec::decode::<Vec<T>>(&key, &text) {
        Ok(records) => {
            debug!("[Store] Loaded {} {}", records.len(), T::COLLECTION);
            Ok(records)
        }
        Err(e) => {
            warn!("[Store] Error loading {}: {}", T::COLLECTION, e);
            Ok(seed())
        }
    }
}

/// Drop derived contest challenge lists so they are never stored.
pub(super) fn normalize(data: &mut DataBundle) {
    for contest in &mut data.contests {
        contest.challenges.clear();
    }
}

impl<K: KeyValueStore> Store<K> {
    /// Compact JSON for one collection, as stored under its key.
    pub(super) fn collection_json(&self, collection: Collection) -> StoreResult<String> {
        let what = collection.label();
        match collection {
            Collection::Users => codec::encode(what, &self.data.users),
            Collection::Contests => codec::encode(what, &self.data.contests),
            Collection::Challenges => codec::encode(what, &self.data.challenges),
            Collection::ContestAttempts => codec::encode(what, &self.data.contest_attempts),
            Collection::UserProgress => codec::encode(what, &self.data.user_progress),
            Collection::Events => codec::encode(what, &self.data.events),
            Collection::ForumTopics => codec::encode(what, &self.data.forum_topics),
        }
    }

    fn write_collection(&mut self, collection: Collection) -> StoreResult<()> {
        let key = self.keys.collection(collection);
        let text = self.collection_json(collection)?;
        self.backend
            .set(&key, &text)
            .map_err(|source| StoreError::Write { key, source })
    }

    fn write_bundle(&mut self) -> StoreResult<()> {
        let key = self.keys.bundle();
        let text = codec::encode(&key, &self.data)?;
        self.backend
            .set(&key, &text)
            .map_err(|source| StoreError::Write { key, source })
    }

    /// Move `last_updated` to now, never backwards.
    fn touch(&mut self) {
        let now = Utc::now();
        if now > self.data.last_updated {
            self.data.last_updated = now;
        }
    }

    /// Write every collection to its own key, then the backup bundle.
    ///
    /// Writes are independent: one failing does not stop the others, and
    /// nothing is rolled back.
    pub(super) fn save_all(&mut self) {
        self.touch();

        let mut failed = 0;
        for collection in Collection::ALL {
            match self.write_collection(collection) {
                Ok(()) => debug!("[Store] Saved {}", collection),
                Err(e) => {
                    error!("[Store] Error saving {}: {}", collection, e);
                    failed += 1;
                }
            }
        }

        if let Err(e) = self.write_bundle() {
            error!("[Store] Error saving backup bundle: {}", e);
            failed += 1;
        }

        if failed == 0 {
            info!("[Store] All data saved at {}", self.data.last_updated.to_rfc3339());
        } else {
            warn!(
                "[Store] Saved at {} with {} failed write(s)",
                self.data.last_updated.to_rfc3339(),
                failed
            );
        }
    }

    /// Purge every key this store owns, reseed and persist the seeds.
    pub fn reset(&mut self) {
        for key in self.keys.all() {
            if let Err(source) = self.backend.remove(&key) {
                error!("[Store] {}", StoreError::Write { key, source });
            }
        }

        self.data = load(&self.backend, &self.keys);
        self.save_all();
        info!("[Store] All data has been reset to defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_empty_backend_loads_seed() {
        let backend = MemoryStore::new();
        let data = load(&backend, &StoreKeys::default());
        assert_eq!(data.users, seed::users());
        assert_eq!(data.challenges, seed::challenges());
        // Loading does not write
        assert!(backend.is_empty());
    }

    #[test]
    fn test_corrupt_collection_falls_back_alone() -> anyhow::Result<()> {
        let keys = StoreKeys::default();
        let mut backend = MemoryStore::new();
        backend.set(&keys.collection(Collection::Users), "[]")?;
        backend.set(&keys.collection(Collection::Events), "{not json")?;

        let data = load(&backend, &keys);
        assert!(data.users.is_empty());
        assert_eq!(data.events, seed::events());
        Ok(())
    }

    #[test]
    fn test_backend_failure_reseeds_everything() -> anyhow::Result<()> {
        let keys = StoreKeys::default();
        let mut backend = MemoryStore::new();
        backend.set(&keys.collection(Collection::Users), "[]")?;
        backend.set_unavailable(true);

        let data = load(&backend, &keys);
        assert_eq!(data.users, seed::users());
        Ok(())
    }

    #[test]
    fn test_stored_contest_challenges_are_dropped() -> anyhow::Result<()> {
        let keys = StoreKeys::default();
        let mut backend = MemoryStore::new();
        let mut contests = seed::contests();
        contests[0].challenges = seed::challenges();
        backend.set(
            &keys.collection(Collection::Contests),
            &serde_json::to_string(&contests)?,
        )?;

        let data = load(&backend, &keys);
        assert!(data.contests.iter().all(|c| c.challenges.is_empty()));
        Ok(())
    }
}
