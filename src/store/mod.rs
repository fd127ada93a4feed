//! Store - Sole owner of all persisted application data.
//!
//! The store holds the seven collections in memory and mirrors them to a
//! [`KeyValueStore`]: one key per collection plus an aggregate backup key.
//! Memory is authoritative. Every failure below the public surface is logged
//! and recovered; mutating calls never return an error. Imports report
//! success, and updates report whether a record was replaced.
//!
//! Construct one store at start-up and hand out references to it.

mod codec;
pub mod keys;
pub mod patch;
mod persist;
pub mod seed;
pub mod summary;
mod transfer;

pub use keys::{StoreKeys, DEFAULT_NAMESPACE};
pub use patch::Patch;
pub use summary::{CollectionStats, DataSummary};

use crate::models::{
    Challenge, Contest, ContestAttempt, DataBundle, Event, ForumTopic, Record, User,
    UserProgress,
};
use crate::storage::KeyValueStore;
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

pub struct Store<K: KeyValueStore> {
    backend: K,
    keys: StoreKeys,
    data: DataBundle,
}

impl<K: KeyValueStore> Store<K> {
    /// Load the store from `backend` under the default `vaic` namespace.
    pub fn open(backend: K) -> Self {
        Self::open_with_keys(backend, StoreKeys::default())
    }

    /// Load the store from `backend` under a custom namespace.
    pub fn open_namespaced(backend: K, namespace: &str) -> Self {
        Self::open_with_keys(backend, StoreKeys::new(namespace))
    }

    fn open_with_keys(backend: K, keys: StoreKeys) -> Self {
        let data = persist::load(&backend, &keys);
        info!(
            "[Store] Opened namespace '{}' on {} backend",
            keys.namespace(),
            backend.name()
        );
        Self {
            backend,
            keys,
            data,
        }
    }

    pub fn backend(&self) -> &K {
        &self.backend
    }

    /// Direct backend access, for tests that need to inject failures.
    pub fn backend_mut(&mut self) -> &mut K {
        &mut self.backend
    }

    pub fn into_backend(self) -> K {
        self.backend
    }

    pub fn keys(&self) -> &StoreKeys {
        &self.keys
    }

    /// The in-memory bundle exactly as it would be exported.
    pub fn data(&self) -> &DataBundle {
        &self.data
    }

    pub fn last_updated(&self) -> DateTime<Utc> {
        self.data.last_updated
    }

    // ============ SHARED HELPERS ============

    fn add_to<T: Record>(&mut self, select: fn(&mut DataBundle) -> &mut Vec<T>, record: T) {
        debug!("[Store] Adding {} record {}", T::COLLECTION, record.id());
        select(&mut self.data).push(record);
        self.save_all();
    }

    fn update_in<T: Record>(
        &mut self,
        select: fn(&mut DataBundle) -> &mut Vec<T>,
        id: &str,
        patch: &Patch,
    ) -> bool {
        match patch::patch_first(select(&mut self.data), id, patch) {
            Ok(true) => {
                self.save_all();
                true
            }
            Ok(false) => {
                debug!("[Store] No {} record with id {}, update skipped", T::COLLECTION, id);
                false
            }
            Err(e) => {
                warn!("[Store] Rejected {} update: {}", T::COLLECTION, e);
                false
            }
        }
    }

    fn delete_from<T: Record>(&mut self, select: fn(&mut DataBundle) -> &mut Vec<T>, id: &str) {
        let removed = patch::remove_all(select(&mut self.data), id);
        if removed == 0 {
            debug!("[Store] No {} record with id {}, delete skipped", T::COLLECTION, id);
            return;
        }
        self.save_all();
    }

    // ============ USERS ============

    pub fn get_users(&self) -> &[User] {
        &self.data.users
    }

    pub fn find_user(&self, user_id: &str) -> Option<&User> {
        self.data.users.iter().find(|u| u.id == user_id)
    }

    pub fn add_user(&mut self, user: User) {
        self.add_to(|d| &mut d.users, user);
    }

    /// Merge `patch` onto the first user with this id. `false` when no user
    /// matches or the merged record is rejected; nothing is written then.
    pub fn update_user(&mut self, user_id: &str, patch: &Patch) -> bool {
        self.update_in(|d| &mut d.users, user_id, patch)
    }

    pub fn delete_user(&mut self, user_id: &str) {
        self.delete_from(|d| &mut d.users, user_id);
    }

    // ============ CONTESTS ============

    /// Contests with their challenge lists rebuilt from the live challenge
    /// collection.
    pub fn get_contests(&self) -> Vec<Contest> {
        self.data
            .contests
            .iter()
            .map(|contest| self.with_challenges(contest))
            .collect()
    }

    pub fn find_contest(&self, contest_id: &str) -> Option<Contest> {
        self.data
            .contests
            .iter()
            .find(|c| c.id == contest_id)
            .map(|contest| self.with_challenges(contest))
    }

    fn with_challenges(&self, contest: &Contest) -> Contest {
        Contest {
            challenges: self.challenges_for_contest(&contest.id),
            ..contest.clone()
        }
    }

    /// Add a contest. Any challenges carried on the record are ignored;
    /// challenges are added through [`Store::add_challenge`].
    pub fn add_contest(&mut self, mut contest: Contest) {
        contest.challenges.clear();
        self.add_to(|d| &mut d.contests, contest);
    }

    pub fn update_contest(&mut self, contest_id: &str, patch: &Patch) -> bool {
        let patch = patch.without("challenges");
        self.update_in(|d| &mut d.contests, contest_id, &patch)
    }

    /// Delete a contest together with every challenge that points at it.
    ///
    /// An unknown contest id changes nothing, even if orphan challenges
    /// still name it.
    pub fn delete_contest(&mut self, contest_id: &str) {
        let contests = patch::remove_all(&mut self.data.contests, contest_id);
        if contests == 0 {
            debug!("[Store] No contest with id {}, delete skipped", contest_id);
            return;
        }

        let before = self.data.challenges.len();
        self.data.challenges.retain(|c| c.contest_id != contest_id);
        let challenges = before - self.data.challenges.len();

        info!(
            "[Store] Deleted contest {} and {} challenge(s)",
            contest_id, challenges
        );
        self.save_all();
    }

    // ============ CHALLENGES ============

    pub fn get_challenges(&self) -> &[Challenge] {
        &self.data.challenges
    }

    pub fn challenges_for_contest(&self, contest_id: &str) -> Vec<Challenge> {
        self.data
            .challenges
            .iter()
            .filter(|c| c.contest_id == contest_id)
            .cloned()
            .collect()
    }

    pub fn add_challenge(&mut self, challenge: Challenge) {
        self.add_to(|d| &mut d.challenges, challenge);
    }

    pub fn update_challenge(&mut self, challenge_id: &str, patch: &Patch) -> bool {
        self.update_in(|d| &mut d.challenges, challenge_id, patch)
    }

    pub fn delete_challenge(&mut self, challenge_id: &str) {
        self.delete_from(|d| &mut d.challenges, challenge_id);
    }

    // ============ CONTEST ATTEMPTS ============

    pub fn get_contest_attempts(&self) -> &[ContestAttempt] {
        &self.data.contest_attempts
    }

    pub fn attempts_for_user<'a>(
        &'a self,
        user_id: &'a str,
    ) -> impl Iterator<Item = &'a ContestAttempt> + 'a {
        self.data
            .contest_attempts
            .iter()
            .filter(move |a| a.user_id == user_id)
    }

    pub fn add_contest_attempt(&mut self, attempt: ContestAttempt) {
        self.add_to(|d| &mut d.contest_attempts, attempt);
    }

    pub fn update_contest_attempt(&mut self, attempt_id: &str, patch: &Patch) -> bool {
        self.update_in(|d| &mut d.contest_attempts, attempt_id, patch)
    }

    // ============ USER PROGRESS ============

    pub fn get_user_progress(&self) -> &[UserProgress] {
        &self.data.user_progress
    }

    pub fn add_user_progress(&mut self, progress: UserProgress) {
        self.add_to(|d| &mut d.user_progress, progress);
    }

    pub fn update_user_progress(&mut self, progress_id: &str, patch: &Patch) -> bool {
        self.update_in(|d| &mut d.user_progress, progress_id, patch)
    }

    // ============ EVENTS ============

    pub fn get_events(&self) -> &[Event] {
        &self.data.events
    }

    pub fn add_event(&mut self, event: Event) {
        self.add_to(|d| &mut d.events, event);
    }

    pub fn update_event(&mut self, event_id: &str, patch: &Patch) -> bool {
        self.update_in(|d| &mut d.events, event_id, patch)
    }

    pub fn delete_event(&mut self, event_id: &str) {
        self.delete_from(|d| &mut d.events, event_id);
    }

    // ============ FORUM ============

    pub fn get_forum_topics(&self) -> &[ForumTopic] {
        &self.data.forum_topics
    }

    pub fn add_forum_topic(&mut self, topic: ForumTopic) {
        self.add_to(|d| &mut d.forum_topics, topic);
    }

    pub fn update_forum_topic(&mut self, topic_id: &str, patch: &Patch) -> bool {
        self.update_in(|d| &mut d.forum_topics, topic_id, patch)
    }

    pub fn delete_forum_topic(&mut self, topic_id: &str) {
        self.delete_from(|d| &mut d.forum_topics, topic_id);
    }
}
