use std::time::Instant;

use chrono::{DateTime, Utc};

use crate::app::command::Command;
use crate::app::forms::{AgentForm, LoginForm, UploadForm};
use crate::model::{Agent, AgentId, AgentTaskGroup, Principal, Task};
use crate::session::Route;

/// Main application state.
/// Updated via pure `update(state, event) -> state` function; side effects
/// are queued in `commands` and executed by the runtime.
#[derive(Debug, Clone)]
pub struct AppState {
    /// View currently rendered (always the result of the access gate)
    pub route: Route,

    /// Principal as of the last access check (None when logged out)
    pub principal: Option<Principal>,

    /// Agents as last fetched (admin)
    pub agents: Vec<Agent>,

    /// Distributed tasks grouped by assigned agent (admin)
    pub task_groups: Vec<AgentTaskGroup>,

    /// Tasks assigned to the logged-in agent
    pub my_tasks: Vec<Task>,

    pub login: LoginForm,

    /// Open add/edit agent form
    pub agent_form: Option<AgentForm>,

    pub upload: UploadForm,

    /// Agent awaiting a y/n delete confirmation
    pub confirm_delete: Option<AgentId>,

    /// Index of selected row in the agent table
    pub selected_agent_index: Option<usize>,

    /// Index of selected row in the my-tasks table
    pub selected_task_index: Option<usize>,

    /// Line scroll offset of the distributed lists view
    pub distributed_scroll: usize,

    /// Inline status/error message
    pub banner: Option<Banner>,

    /// In-flight request indicators
    pub loading: Loading,

    /// Show help overlay
    pub show_help: bool,

    /// Backend base URL (shown in the header)
    pub api_url: String,

    /// Application start time (for elapsed time display)
    pub started_at: Instant,

    /// Wall clock of the last tick
    pub now: Option<DateTime<Utc>>,

    /// Pending side effects, drained by the event loop
    pub commands: Vec<Command>,

    /// Signal to quit the application
    pub should_quit: bool,
}

/// Flags for requests that are still waiting on the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Loading {
    pub login: bool,
    pub agents: bool,
    pub saving_agent: bool,
    pub deleting_agent: bool,
    pub upload: bool,
    pub distributed: bool,
    pub my_tasks: bool,
    pub task_status: bool,
}

impl Loading {
    pub fn any(&self) -> bool {
        self.login
            || self.agents
            || self.saving_agent
            || self.deleting_agent
            || self.upload
            || self.distributed
            || self.my_tasks
            || self.task_status
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub message: String,
}

impl Banner {
    /// Style is chosen from the text: anything mentioning "successfully" is a
    /// success, everything else an error.
    pub fn from_message(message: impl Into<String>) -> Self {
        let message = message.into();
        let kind = if message.contains("successfully") {
            BannerKind::Success
        } else {
            BannerKind::Error
        };
        Self { kind, message }
    }

    pub fn is_success(&self) -> bool {
        self.kind == BannerKind::Success
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Fresh state on the login screen. The first command asks the access
    /// gate for the dashboard, which picks up a stored session if there is
    /// one.
    pub fn new() -> Self {
        Self {
            route: Route::Login,
            principal: None,
            agents: Vec::new(),
            task_groups: Vec::new(),
            my_tasks: Vec::new(),
            login: LoginForm::new(),
            agent_form: None,
            upload: UploadForm::default(),
            confirm_delete: None,
            selected_agent_index: None,
            selected_task_index: None,
            distributed_scroll: 0,
            banner: None,
            loading: Loading::default(),
            show_help: false,
            api_url: String::new(),
            started_at: Instant::now(),
            now: None,
            commands: vec![Command::Navigate(Route::Dashboard)],
            should_quit: false,
        }
    }

    pub fn with_api_url(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            ..Self::new()
        }
    }

    /// Drain queued commands in the order they were issued.
    pub fn take_commands(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }

    pub fn selected_agent(&self) -> Option<&Agent> {
        self.selected_agent_index.and_then(|i| self.agents.get(i))
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.selected_task_index.and_then(|i| self.my_tasks.get(i))
    }

    /// Forget everything fetched for the previous principal.
    pub fn clear_domain(&mut self) {
        self.agents.clear();
        self.task_groups.clear();
        self.my_tasks.clear();
        self.selected_agent_index = None;
        self.selected_task_index = None;
        self.distributed_scroll = 0;
    }
}

/// Clamp a selection to a list of `len` rows, selecting the first row when
/// nothing was selected yet.
pub fn clamp_selection(selected: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        None
    } else {
        Some(selected.unwrap_or(0).min(len - 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_starts_on_login_and_asks_for_dashboard() {
        let mut state = AppState::new();
        assert_eq!(state.route, Route::Login);
        assert!(state.principal.is_none());
        assert!(!state.should_quit);
        assert_eq!(
            state.take_commands(),
            vec![Command::Navigate(Route::Dashboard)]
        );
        assert!(state.take_commands().is_empty());
    }

    #[test]
    fn banner_kind_follows_message_text() {
        assert!(Banner::from_message("Agent created successfully!").is_success());
        assert!(!Banner::from_message("Passwords do not match").is_success());
        assert!(Banner::from_message("List uploaded and distributed successfully!").is_success());
    }

    #[test]
    fn clamp_selection_bounds() {
        assert_eq!(clamp_selection(None, 0), None);
        assert_eq!(clamp_selection(Some(3), 0), None);
        assert_eq!(clamp_selection(None, 2), Some(0));
        assert_eq!(clamp_selection(Some(5), 2), Some(1));
        assert_eq!(clamp_selection(Some(1), 2), Some(1));
    }

    #[test]
    fn loading_any() {
        let mut loading = Loading::default();
        assert!(!loading.any());
        loading.upload = true;
        assert!(loading.any());
    }
}
