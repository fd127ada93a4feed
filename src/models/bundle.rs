use super::{Challenge, Contest, ContestAttempt, Event, ForumTopic, User, UserProgress};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Everything the store owns, as written to the aggregate backup key and
/// exchanged by full export/import.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataBundle {
    pub users: Vec<User>,
    pub contests: Vec<Contest>,
    pub challenges: Vec<Challenge>,
    pub contest_attempts: Vec<ContestAttempt>,
    pub user_progress: Vec<UserProgress>,
    pub events: Vec<Event>,
    pub forum_topics: Vec<ForumTopic>,
    #[serde(default = "Utc::now")]
    pub last_updated: DateTime<Utc>,
    /// Top-level fields outside the current schema
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Contests travel together with their challenges and attempts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContestBundle {
    pub contests: Vec<Contest>,
    pub challenges: Vec<Challenge>,
    pub contest_attempts: Vec<ContestAttempt>,
}
