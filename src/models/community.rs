use super::{Collection, Record};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An announcement published by an admin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub content: String,
    /// User id of the author
    pub author: String,
    pub author_name: String,
    pub created_at: String,
    pub updated_at: String,
    pub is_published: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Record for Event {
    const COLLECTION: Collection = Collection::Events;

    fn id(&self) -> &str {
        &self.id
    }
}

/// A discussion thread. Replies are embedded, not a collection of their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForumTopic {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub author_name: String,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default)]
    pub replies: Vec<ForumReply>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_pinned: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Record for ForumTopic {
    const COLLECTION: Collection = Collection::ForumTopics;

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForumReply {
    pub id: String,
    pub content: String,
    pub author: String,
    pub author_name: String,
    pub created_at: String,
    /// Id of the topic this reply sits under
    pub topic_id: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
