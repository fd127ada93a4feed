use super::{Collection, Record};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// One user's run through a contest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContestAttempt {
    pub id: String,
    pub user_id: String,
    pub contest_id: String,
    pub start_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(default, with = "super::number")]
    pub score: f64,
    #[serde(
        default,
        with = "super::number::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_score: Option<f64>,
    /// Challenge id -> submitted answer
    #[serde(default)]
    pub answers: BTreeMap<String, String>,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Record for ContestAttempt {
    const COLLECTION: Collection = Collection::ContestAttempts;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Aggregate statistics for one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProgress {
    pub id: String,
    pub user_id: String,
    #[serde(default, with = "super::number")]
    pub total_contests: f64,
    #[serde(default, with = "super::number")]
    pub completed_contests: f64,
    #[serde(default, with = "super::number")]
    pub total_score: f64,
    /// May be NaN (0 / 0 before any contest is completed)
    #[serde(default, with = "super::number")]
    pub average_score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_activity: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Record for UserProgress {
    const COLLECTION: Collection = Collection::UserProgress;

    fn id(&self) -> &str {
        &self.id
    }
}
