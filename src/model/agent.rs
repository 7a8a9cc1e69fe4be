use serde::{Deserialize, Serialize};

use super::ids::AgentId;
use super::serde_utils::string_or_null;

/// A sales agent as listed by `GET /api/agents/`. The password is write-only
/// and never part of this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    #[serde(rename = "_id", default)]
    pub id: AgentId,
    #[serde(default, deserialize_with = "string_or_null")]
    pub name: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub email: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub mobile: String,
}

impl Agent {
    pub fn new(id: impl Into<AgentId>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            mobile: String::new(),
        }
    }

    pub fn with_mobile(mut self, mobile: impl Into<String>) -> Self {
        self.mobile = mobile.into();
        self
    }
}

/// Request body for creating or updating an agent.
///
/// `password: None` is omitted from the JSON, which the backend reads as
/// "keep the current password" on update.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentDraft {
    pub name: String,
    pub email: String,
    pub mobile: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl AgentDraft {
    pub fn new(name: impl Into<String>, email: impl Into<String>, mobile: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            mobile: mobile.into(),
            password: None,
        }
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn agent_deserializes_from_backend_shape() {
        let json = r#"{"_id":"a1","name":"Alice","email":"a@x.io","mobile":"+15550100","__v":0}"#;
        let agent: Agent = serde_json::from_str(json).unwrap();
        assert_eq!(agent.id.as_str(), "a1");
        assert_eq!(agent.mobile, "+15550100");
    }

    #[test]
    fn agent_tolerates_null_fields() {
        let json = r#"{"_id":"a1","name":"Alice","email":null}"#;
        let agent: Agent = serde_json::from_str(json).unwrap();
        assert_eq!(agent.email, "");
        assert_eq!(agent.mobile, "");
    }

    #[test]
    fn draft_without_password_omits_field() {
        let draft = AgentDraft::new("Alice", "a@x.io", "+1");
        let json = serde_json::to_value(&draft).unwrap();
        assert!(json.get("password").is_none());

        let json = serde_json::to_value(draft.with_password("s3cret")).unwrap();
        assert_eq!(json["password"], "s3cret");
    }
}
