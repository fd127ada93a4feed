//! Export and import of whole collections as pretty-printed JSON.
//!
//! Imports replace, they never merge. A payload that does not parse into the
//! expected shape is rejected and leaves the store exactly as it was.

use super::{codec, persist, Store};
use crate::error::StoreResult;
use crate::models::{ContestBundle, DataBundle, Event, ForumTopic, User};
use crate::storage::KeyValueStore;
use serde::de::DeserializeOwned;
use tracing::{error, info};

impl<K: KeyValueStore> Store<K> {
    /// The whole store, timestamp and unknown top-level fields included.
    pub fn export_data(&self) -> StoreResult<String> {
        codec::encode_pretty("data store", &self.data)
    }

    pub fn export_users(&self) -> StoreResult<String> {
        codec::encode_pretty("users", &self.data.users)
    }

    /// Contests, challenges and attempts together.
    pub fn export_contests(&self) -> StoreResult<String> {
        let bundle = ContestBundle {
            contests: self.data.contests.clone(),
            challenges: self.data.challenges.clone(),
            contest_attempts: self.data.contest_attempts.clone(),
        };
        codec::encode_pretty("contest data", &bundle)
    }

    pub fn export_events(&self) -> StoreResult<String> {
        codec::encode_pretty("events", &self.data.events)
    }

    pub fn export_forum(&self) -> StoreResult<String> {
        codec::encode_pretty("forum topics", &self.data.forum_topics)
    }

    /// Parse `text` as `T`; on success hand it to `adopt` and save.
    fn import_with<T, F>(&mut self, what: &str, text: &str, adopt: F) -> bool
    where
        T: DeserializeOwned,
        F: FnOnce(&mut DataBundle, T),
    {
        match codec::decode::<T>(what, text) {
            Ok(parsed) => {
                adopt(&mut self.data, parsed);
                persist::normalize(&mut self.data);
                self.save_all();
                info!("[Store] Imported {}", what);
                true
            }
            Err(e) => {
                error!("[Store] Error importing {}: {}", what, e);
                false
            }
        }
    }

    /// Replace the entire store. All seven collections must be present.
    pub fn import_data(&mut self, text: &str) -> bool {
        self.import_with("data store", text, |data, bundle: DataBundle| {
            *data = bundle;
        })
    }

    pub fn import_users(&mut self, text: &str) -> bool {
        self.import_with("users", text, |data, users: Vec<User>| {
            data.users = users;
        })
    }

    /// Replace contests, challenges and attempts together.
    pub fn import_contests(&mut self, text: &str) -> bool {
        self.import_with("contest data", text, |data, bundle: ContestBundle| {
            data.contests = bundle.contests;
            data.challenges = bundle.challenges;
            data.contest_attempts = bundle.contest_attempts;
        })
    }

    pub fn import_events(&mut self, text: &str) -> bool {
        self.import_with("events", text, |data, events: Vec<Event>| {
            data.events = events;
        })
    }

    pub fn import_forum(&mut self, text: &str) -> bool {
        self.import_with("forum topics", text, |data, topics: Vec<ForumTopic>| {
            data.forum_topics = topics;
        })
    }
}
