use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::ids::{AgentId, TaskId};
use super::serde_utils::{assigned_to, string_or_null};

/// One distributed lead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "_id", default)]
    pub id: TaskId,
    #[serde(rename = "firstName", default, deserialize_with = "string_or_null")]
    pub first_name: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub phone: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub notes: String,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(rename = "assignedTo", default, with = "assigned_to")]
    pub assigned_to: Option<AssignedAgent>,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Task {
    pub fn new(id: impl Into<TaskId>, first_name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            phone: phone.into(),
            notes: String::new(),
            status: TaskStatus::Pending,
            assigned_to: None,
            created_at: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    pub fn assigned(mut self, agent: AssignedAgent) -> Self {
        self.assigned_to = Some(agent);
        self
    }
}

/// Denormalized agent reference embedded in a task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignedAgent {
    #[serde(rename = "_id", default)]
    pub id: AgentId,
    #[serde(default, deserialize_with = "string_or_null")]
    pub name: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub email: String,
}

impl AssignedAgent {
    pub fn new(id: impl Into<AgentId>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Task status. The console never checks transitions; any value the backend
/// sends is kept, unknown ones verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Other(String),
}

impl TaskStatus {
    pub fn parse(s: &str) -> Self {
        match s {
            "pending" => TaskStatus::Pending,
            "in-progress" => TaskStatus::InProgress,
            "completed" => TaskStatus::Completed,
            other => TaskStatus::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Completed => "completed",
            TaskStatus::Other(s) => s,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "In-Progress",
            TaskStatus::Completed => "Completed",
            TaskStatus::Other(s) => s,
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TaskStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TaskStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(raw.map(|s| TaskStatus::parse(&s)).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_deserializes_distributed_shape() {
        let json = r#"{
            "_id": "t1",
            "firstName": "Jo",
            "phone": "555",
            "notes": "call after 5",
            "status": "in-progress",
            "assignedTo": {"_id": "A", "name": "Alice", "email": "a@x.io"},
            "createdAt": "2024-03-01T10:00:00.000Z"
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id.as_str(), "t1");
        assert_eq!(task.status, TaskStatus::InProgress);
        assert_eq!(task.assigned_to.unwrap().name, "Alice");
        assert!(task.created_at.is_some());
    }

    #[test]
    fn malformed_task_passes_through_with_defaults() {
        let task: Task = serde_json::from_str(r#"{"notes": null}"#).unwrap();
        assert!(task.id.as_str().is_empty());
        assert!(task.phone.is_empty());
        assert_eq!(task.status, TaskStatus::Pending);
        assert!(task.assigned_to.is_none());
    }

    #[test]
    fn unknown_status_is_preserved() {
        let task: Task = serde_json::from_str(r#"{"_id":"t","status":"callback"}"#).unwrap();
        assert_eq!(task.status, TaskStatus::Other("callback".into()));
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["status"], "callback");
    }

    #[test]
    fn status_serializes_with_backend_spelling() {
        assert_eq!(
            serde_json::to_string(&TaskStatus::InProgress).unwrap(),
            "\"in-progress\""
        );
        assert_eq!(TaskStatus::InProgress.label(), "In-Progress");
    }
}
