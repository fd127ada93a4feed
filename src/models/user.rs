use super::{Collection, Record};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    User,
    Admin,
}

/// A registered account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(with = "super::number")]
    pub score: f64,
    pub role: UserRole,
    /// Date only, `YYYY-MM-DD`
    pub join_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

impl Record for User {
    const COLLECTION: Collection = Collection::Users;

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_fields_survive_round_trip() {
        let json = r#"{"id":"9","username":"u","email":"e","password":"p","score":1,
            "role":"admin","joinDate":"2024-01-01","avatar":"cat.png"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert!(user.is_admin());
        assert_eq!(user.student_id, None);
        assert_eq!(user.extra.get("avatar"), Some(&Value::from("cat.png")));

        let back = serde_json::to_value(&user).unwrap();
        assert_eq!(back["avatar"], "cat.png");
        assert_eq!(back["joinDate"], "2024-01-01");
        assert!(back.get("studentId").is_none());
    }

    #[test]
    fn test_fractional_score_is_kept() {
        let json = r#"{"id":"9","username":"u","email":"e","password":"p","score":12.5,
            "role":"user","joinDate":"2024-01-01"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.score, 12.5);
        assert_eq!(serde_json::to_value(&user).unwrap()["score"], 12.5);
    }
}
