pub mod agent;
pub mod group;
pub mod ids;
pub mod principal;
pub mod serde_utils;
pub mod task;
pub mod theme;

pub use agent::{Agent, AgentDraft};
pub use group::{group_by_agent, AgentTaskGroup, UNASSIGNED_EMAIL, UNASSIGNED_KEY, UNASSIGNED_NAME};
pub use ids::{AgentId, TaskId};
pub use principal::{Principal, Role};
pub use task::{AssignedAgent, Task, TaskStatus};
pub use theme::Theme;
