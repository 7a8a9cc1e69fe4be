use std::fmt;
use std::path::PathBuf;

use crate::model::{AgentDraft, AgentId, TaskId, TaskStatus};
use crate::session::Route;

/// Password wrapper that never prints its contents.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(***)")
    }
}

/// Side effects requested by `update`. The event loop drains them and hands
/// each one to the runtime; results come back as `AppEvent`s.
///
/// Mutations report only success or failure. Re-pulling the affected
/// collection is `update`'s job, done by queueing the matching `Fetch*`.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Run the access gate for a route against the stored session.
    Navigate(Route),
    Login { email: String, password: Secret },
    Logout,
    FetchAgents,
    CreateAgent(AgentDraft),
    UpdateAgent(AgentId, AgentDraft),
    DeleteAgent(AgentId),
    UploadList(PathBuf),
    FetchDistributed,
    FetchMyTasks,
    UpdateTaskStatus(TaskId, TaskStatus),
}

impl Command {
    /// Short name for logs; never includes payloads.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Navigate(_) => "navigate",
            Command::Login { .. } => "login",
            Command::Logout => "logout",
            Command::FetchAgents => "fetch_agents",
            Command::CreateAgent(_) => "create_agent",
            Command::UpdateAgent(..) => "update_agent",
            Command::DeleteAgent(_) => "delete_agent",
            Command::UploadList(_) => "upload_list",
            Command::FetchDistributed => "fetch_distributed",
            Command::FetchMyTasks => "fetch_my_tasks",
            Command::UpdateTaskStatus(..) => "update_task_status",
        }
    }
}
