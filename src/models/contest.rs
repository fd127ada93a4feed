use super::{Collection, Record};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A timed quiz made of challenges.
///
/// `challenges` is a read-side view only. The store keeps it empty on every
/// stored record and fills it from the challenge collection when contests are
/// read, so it is never written to storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contest {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub challenges: Vec<Challenge>,
    /// Minutes
    #[serde(with = "super::number")]
    pub time_limit: f64,
    pub start_date: String,
    pub end_date: String,
    pub is_active: bool,
    #[serde(with = "super::number")]
    pub max_attempts: f64,
    pub created_by: String,
    pub is_public: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Record for Contest {
    const COLLECTION: Collection = Collection::Contests;

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChallengeType {
    MultipleChoice,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// A single question, owned by the contest named in `contest_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    pub id: String,
    pub question: String,
    #[serde(rename = "type")]
    pub kind: ChallengeType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    pub correct_answer: String,
    #[serde(with = "super::number")]
    pub points: f64,
    pub difficulty: Difficulty,
    pub contest_id: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Record for Challenge {
    const COLLECTION: Collection = Collection::Challenges;

    fn id(&self) -> &str {
        &self.id
    }
}
