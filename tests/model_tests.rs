use lead_console::model::{
    group_by_agent, Agent, AgentDraft, AssignedAgent, Principal, Role, Task, TaskStatus,
    UNASSIGNED_KEY,
};

fn task(id: &str, agent: Option<(&str, &str, &str)>) -> Task {
    let task = Task::new(id, format!("Lead {id}"), "555-0000");
    match agent {
        Some((agent_id, name, email)) => task.assigned(AssignedAgent::new(agent_id, name, email)),
        None => task,
    }
}

// ============================================================================
// Backend JSON shapes
// ============================================================================

#[test]
fn task_from_backend_document() {
    let json = r#"{
        "_id": "65f0c1",
        "firstName": "Jo",
        "phone": "+15550100",
        "notes": "call after 5pm",
        "status": "completed",
        "assignedTo": {"_id": "a1", "name": "Alice", "email": "alice@example.com"},
        "createdAt": "2024-03-12T09:30:00.000Z",
        "__v": 0
    }"#;

    let task: Task = serde_json::from_str(json).unwrap();

    assert_eq!(task.id.as_str(), "65f0c1");
    assert_eq!(task.first_name, "Jo");
    assert_eq!(task.notes, "call after 5pm");
    assert_eq!(task.status, TaskStatus::Completed);
    assert_eq!(task.assigned_to.unwrap().email, "alice@example.com");
    assert!(task.created_at.is_some());
}

#[test]
fn task_with_missing_optional_fields() {
    let task: Task = serde_json::from_str(r#"{"_id":"t1","firstName":"Jo","phone":"1"}"#).unwrap();

    assert_eq!(task.notes, "");
    assert_eq!(task.status, TaskStatus::Pending);
    assert!(task.assigned_to.is_none());
    assert!(task.created_at.is_none());
}

#[test]
fn task_notes_null_reads_as_empty() {
    let task: Task =
        serde_json::from_str(r#"{"_id":"t1","firstName":"Jo","phone":"1","notes":null}"#).unwrap();
    assert_eq!(task.notes, "");
}

#[test]
fn numeric_cells_do_not_drop_the_list() {
    let json = r#"[
        {"_id":"t1","firstName":"Jo","phone":"+15550100","assignedTo":{"_id":"a1","name":"Alice","email":"alice@x.io"}},
        {"_id":"t2","firstName":"Kim","phone":5551234,"notes":42,"assignedTo":{"_id":"a1","name":"Alice","email":"alice@x.io"}}
    ]"#;

    let tasks: Vec<Task> = serde_json::from_str(json).unwrap();

    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[1].phone, "5551234");
    assert_eq!(tasks[1].notes, "42");
    let groups = group_by_agent(&tasks);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].task_count(), 2);
}

#[test]
fn documents_with_virtual_id_decode() {
    let task: Task = serde_json::from_str(
        r#"{"_id":"t1","id":"t1","firstName":"Jo","phone":"1",
            "assignedTo":{"_id":"a1","id":"a1","name":"Alice","email":"alice@x.io"}}"#,
    )
    .unwrap();
    assert_eq!(task.id.as_str(), "t1");
    assert_eq!(task.assigned_to.unwrap().id.as_str(), "a1");

    let agent: Agent = serde_json::from_str(
        r#"{"_id":"a1","id":"a1","name":"Alice","email":"alice@x.io","mobile":"1"}"#,
    )
    .unwrap();
    assert_eq!(agent.id.as_str(), "a1");

    let principal = Principal::from_login_response(
        r#"{"_id":"u1","id":"u1","name":"Ada","role":"admin","token":"tok"}"#,
    )
    .unwrap();
    assert_eq!(principal.id, "u1");
    assert_eq!(principal.token, "tok");
}

#[test]
fn unknown_status_is_kept_verbatim() {
    let task: Task =
        serde_json::from_str(r#"{"_id":"t1","firstName":"Jo","phone":"1","status":"on-hold"}"#)
            .unwrap();

    assert_eq!(task.status, TaskStatus::Other("on-hold".to_string()));
    assert_eq!(task.status.to_string(), "on-hold");
    assert_eq!(
        serde_json::to_value(&task.status).unwrap(),
        serde_json::json!("on-hold")
    );
}

#[test]
fn status_wire_values() {
    assert_eq!(TaskStatus::parse("pending"), TaskStatus::Pending);
    assert_eq!(TaskStatus::parse("in-progress"), TaskStatus::InProgress);
    assert_eq!(TaskStatus::parse("completed"), TaskStatus::Completed);
    assert_eq!(TaskStatus::InProgress.as_str(), "in-progress");
    assert_eq!(TaskStatus::InProgress.label(), "In-Progress");
}

#[test]
fn agent_from_backend_document_ignores_extra_fields() {
    let json = r#"{"_id":"a1","name":"Alice","email":"alice@example.com","mobile":"+15550100",
                   "role":"agent","createdAt":"2024-03-12T09:30:00.000Z"}"#;

    let agent: Agent = serde_json::from_str(json).unwrap();

    assert_eq!(agent, Agent::new("a1", "Alice", "alice@example.com").with_mobile("+15550100"));
}

#[test]
fn agent_draft_serializes_password_only_when_set() {
    let without = serde_json::to_value(AgentDraft::new("A", "a@x.io", "1")).unwrap();
    assert!(without.get("password").is_none());

    let with = serde_json::to_value(AgentDraft::new("A", "a@x.io", "1").with_password("pw")).unwrap();
    assert_eq!(with["password"], "pw");
}

#[test]
fn principal_role_display_is_lowercase() {
    let principal = Principal::new("u1", "Ada", Role::Admin, "tok");
    assert_eq!(principal.role.to_string(), "admin");
    assert_eq!(Role::Agent.as_str(), "agent");
}

// ============================================================================
// Grouping
// ============================================================================

#[test]
fn grouping_preserves_every_task_once() {
    let tasks = vec![
        task("t1", Some(("a1", "Alice", "alice@x.io"))),
        task("t2", None),
        task("t3", Some(("a2", "Bob", "bob@x.io"))),
        task("t4", Some(("a1", "Alice", "alice@x.io"))),
        task("t5", None),
    ];

    let groups = group_by_agent(&tasks);

    let total: usize = groups.iter().map(|g| g.task_count()).sum();
    assert_eq!(total, tasks.len());

    let mut ids: Vec<&str> = groups
        .iter()
        .flat_map(|g| g.tasks.iter().map(|t| t.id.as_str()))
        .collect();
    ids.sort_unstable();
    assert_eq!(ids, ["t1", "t2", "t3", "t4", "t5"]);
}

#[test]
fn grouping_orders_groups_by_first_appearance() {
    let tasks = vec![
        task("t1", None),
        task("t2", Some(("a2", "Bob", "bob@x.io"))),
        task("t3", Some(("a1", "Alice", "alice@x.io"))),
        task("t4", Some(("a2", "Bob", "bob@x.io"))),
    ];

    let groups = group_by_agent(&tasks);

    let keys: Vec<&str> = groups.iter().map(|g| g.agent_key.as_str()).collect();
    assert_eq!(keys, [UNASSIGNED_KEY, "a2", "a1"]);
    let bob: Vec<&str> = groups[1].tasks.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(bob, ["t2", "t4"]);
}

#[test]
fn grouping_keeps_first_seen_display_fields() {
    let tasks = vec![
        task("t1", Some(("a1", "Alice", "alice@x.io"))),
        task("t2", Some(("a1", "Alice Renamed", "alice@new.io"))),
    ];

    let groups = group_by_agent(&tasks);

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].agent_name, "Alice");
    assert_eq!(groups[0].agent_email, "alice@x.io");
    assert_eq!(groups[0].title(), "Agent: Alice (alice@x.io) - 2 Tasks");
}

#[test]
fn unassigned_group_uses_placeholders() {
    let groups = group_by_agent(&[task("t1", None)]);

    assert!(groups[0].is_unassigned());
    assert_eq!(groups[0].title(), "Agent: Unassigned (N/A) - 1 Tasks");
}

#[test]
fn grouping_empty_input_yields_no_groups() {
    assert!(group_by_agent(&[]).is_empty());
}
