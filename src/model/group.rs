use std::collections::HashMap;

use super::task::Task;

/// Grouping key for tasks with no assigned agent.
pub const UNASSIGNED_KEY: &str = "unassigned";
pub const UNASSIGNED_NAME: &str = "Unassigned";
pub const UNASSIGNED_EMAIL: &str = "N/A";

/// Tasks sharing one assigned agent. Derived on every fetch, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentTaskGroup {
    pub agent_key: String,
    pub agent_name: String,
    pub agent_email: String,
    pub tasks: Vec<Task>,
}

impl AgentTaskGroup {
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Lines the group takes in the distributed view: title, column header,
    /// one per task and a spacer.
    pub fn rendered_height(&self) -> usize {
        self.tasks.len() + 3
    }

    pub fn is_unassigned(&self) -> bool {
        self.agent_key == UNASSIGNED_KEY
    }

    /// Header line shown above the group's table.
    pub fn title(&self) -> String {
        format!(
            "Agent: {} ({}) - {} Tasks",
            self.agent_name,
            self.agent_email,
            self.task_count()
        )
    }
}

/// Partition `tasks` by assigned agent.
///
/// Groups come out in the order their key is first seen and tasks keep their
/// input order inside a group. Display fields are captured from the first task
/// of each key; later tasks with the same id but different name/email do not
/// change them.
pub fn group_by_agent(tasks: &[Task]) -> Vec<AgentTaskGroup> {
    let mut groups: Vec<AgentTaskGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for task in tasks {
        let key = match &task.assigned_to {
            Some(agent) => agent.id.as_str().to_string(),
            None => UNASSIGNED_KEY.to_string(),
        };

        let slot = *index.entry(key.clone()).or_insert_with(|| {
            let (agent_name, agent_email) = match &task.assigned_to {
                Some(agent) => (agent.name.clone(), agent.email.clone()),
                None => (UNASSIGNED_NAME.to_string(), UNASSIGNED_EMAIL.to_string()),
            };
            groups.push(AgentTaskGroup {
                agent_key: key,
                agent_name,
                agent_email,
                tasks: Vec::new(),
            });
            groups.len() - 1
        });

        groups[slot].tasks.push(task.clone());
    }

    groups
}
