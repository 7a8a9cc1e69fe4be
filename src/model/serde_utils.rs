/// Shared serde utilities for backend payloads
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize a text field leniently. Spreadsheet cells come back as
/// numbers or booleans as often as strings; scalars are rendered as text,
/// `null` as empty. Arrays and objects are rejected.
pub fn string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Array(_) | Value::Object(_) => {
            Err(D::Error::custom("expected text, found an array or object"))
        }
    }
}

/// `assignedTo` is a populated agent object on `/api/lists/distributed`, but
/// may arrive as a bare id when the backend skips population. Both shapes map
/// to `Option<AssignedAgent>`; the bare id form carries empty display fields.
pub mod assigned_to {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use crate::model::task::AssignedAgent;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum AssignedRef {
        Populated(AssignedAgent),
        Id(String),
    }

    pub fn serialize<S>(value: &Option<AssignedAgent>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        value.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<AssignedAgent>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: Option<AssignedRef> = Option::deserialize(deserializer)?;
        Ok(value.map(|r| match r {
            AssignedRef::Populated(agent) => agent,
            AssignedRef::Id(id) => AssignedAgent {
                id: id.into(),
                name: String::new(),
                email: String::new(),
            },
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::AssignedAgent;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Notes {
        #[serde(default, deserialize_with = "string_or_null")]
        notes: String,
    }

    #[derive(Deserialize)]
    struct Holder {
        #[serde(default, with = "assigned_to")]
        assigned: Option<AssignedAgent>,
    }

    #[test]
    fn null_string_becomes_empty() {
        let obj: Notes = serde_json::from_str(r#"{"notes":null}"#).unwrap();
        assert_eq!(obj.notes, "");
    }

    #[test]
    fn scalar_cells_become_text() {
        let obj: Notes = serde_json::from_str(r#"{"notes":5551234}"#).unwrap();
        assert_eq!(obj.notes, "5551234");
        let obj: Notes = serde_json::from_str(r#"{"notes":12.5}"#).unwrap();
        assert_eq!(obj.notes, "12.5");
        let obj: Notes = serde_json::from_str(r#"{"notes":true}"#).unwrap();
        assert_eq!(obj.notes, "true");
    }

    #[test]
    fn nested_values_are_rejected() {
        assert!(serde_json::from_str::<Notes>(r#"{"notes":["a"]}"#).is_err());
        assert!(serde_json::from_str::<Notes>(r#"{"notes":{"a":1}}"#).is_err());
    }

    #[test]
    fn missing_string_becomes_empty() {
        let obj: Notes = serde_json::from_str("{}").unwrap();
        assert_eq!(obj.notes, "");
    }

    #[test]
    fn assigned_to_accepts_populated_object() {
        let obj: Holder =
            serde_json::from_str(r#"{"assigned":{"_id":"A","name":"Alice","email":"a@x.io"}}"#)
                .unwrap();
        let agent = obj.assigned.unwrap();
        assert_eq!(agent.id.as_str(), "A");
        assert_eq!(agent.name, "Alice");
    }

    #[test]
    fn assigned_to_accepts_bare_id() {
        let obj: Holder = serde_json::from_str(r#"{"assigned":"A"}"#).unwrap();
        let agent = obj.assigned.unwrap();
        assert_eq!(agent.id.as_str(), "A");
        assert!(agent.name.is_empty());
    }

    #[test]
    fn assigned_to_null_and_missing_are_none() {
        let obj: Holder = serde_json::from_str(r#"{"assigned":null}"#).unwrap();
        assert!(obj.assigned.is_none());
        let obj: Holder = serde_json::from_str("{}").unwrap();
        assert!(obj.assigned.is_none());
    }
}
