use chrono::{DateTime, Utc};
use crossterm::event::KeyEvent;

use crate::error::{ConsoleError, WatcherError};
use crate::model::{Agent, Principal, Task};
use crate::session::Route;

/// Which operation a failure belongs to, so the matching loading flag can be
/// cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Login,
    Agents,
    AgentSave,
    AgentDelete,
    Upload,
    Distributed,
    MyTasks,
    TaskStatus,
}

/// All events that can occur in the application.
/// Sourced from keyboard input, timers, the session file watcher and the
/// results of commands run by the runtime.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Keyboard input event
    Key(KeyEvent),

    /// Timer tick
    Tick(DateTime<Utc>),

    /// Access gate result for a navigation: the stored principal at the time
    /// of the check and the route actually granted.
    RouteResolved {
        principal: Option<Principal>,
        route: Route,
    },

    LoggedIn(Principal),

    /// The session file was written or removed, possibly by another process.
    SessionStoreChanged,

    AgentsLoaded(Vec<Agent>),

    /// Raw distributed tasks; grouped by `update`.
    DistributedLoaded(Vec<Task>),

    MyTasksLoaded(Vec<Task>),

    AgentSaved { created: bool },

    AgentDeleted,

    /// Upload accepted; carries the backend's message.
    ListUploaded(String),

    TaskStatusUpdated,

    /// A command failed; the error text ends up in the banner.
    Failed { origin: Origin, error: ConsoleError },

    /// Session file watcher failed (non-fatal).
    WatcherFailed(WatcherError),
}
