use crate::app::command::Command;
use crate::app::forms::{LoginForm, UploadForm};
use crate::app::state::{clamp_selection, AppState, Banner};
use crate::app::handle_key;
use crate::error::ConsoleError;
use crate::event::{AppEvent, Origin};
use crate::model::group_by_agent;
use crate::session::Route;

pub const AGENT_CREATED: &str = "Agent created successfully!";
pub const AGENT_UPDATED: &str = "Agent updated successfully!";
pub const AGENT_DELETED: &str = "Agent deleted successfully!";
pub const TASK_STATUS_UPDATED: &str = "Task status updated successfully!";

/// Pure update function following Elm Architecture.
/// Takes current state and event, returns new state.
/// No I/O: effects are pushed onto `state.commands` for the runtime.
pub fn update(mut state: AppState, event: AppEvent) -> AppState {
    match event {
        AppEvent::Key(key) => handle_key(state, key),

        AppEvent::Tick(now) => {
            state.now = Some(now);
            state
        }

        AppEvent::RouteResolved { principal, route } => {
            let principal_changed = principal != state.principal;
            let route_changed = route != state.route;

            if principal.is_none() || principal_changed {
                state.clear_domain();
                state.agent_form = None;
                state.confirm_delete = None;
            }
            // An error that ended the session stays visible on the login screen.
            let keep_banner = route == Route::Login
                && state.banner.as_ref().is_some_and(|b| !b.is_success());
            if route_changed && !keep_banner {
                state.banner = None;
            }
            if route_changed {
                state.show_help = false;
                state.agent_form = None;
                state.confirm_delete = None;
                state.upload = UploadForm::default();
            }

            state.principal = principal;
            state.route = route;

            if route_changed || principal_changed {
                state = queue_fetch(state);
            }
            state
        }

        AppEvent::LoggedIn(principal) => {
            state.loading.login = false;
            state.login = LoginForm::new();
            state
                .commands
                .push(Command::Navigate(Route::landing(principal.role)));
            state
        }

        AppEvent::SessionStoreChanged => {
            // Re-run the gate; a changed principal triggers a fresh fetch.
            state.commands.push(Command::Navigate(state.route));
            state
        }

        AppEvent::AgentsLoaded(agents) => {
            state.loading.agents = false;
            state.agents = agents;
            state.selected_agent_index =
                clamp_selection(state.selected_agent_index, state.agents.len());
            state
        }

        AppEvent::DistributedLoaded(tasks) => {
            state.loading.distributed = false;
            state.task_groups = group_by_agent(&tasks);
            state.distributed_scroll = 0;
            state
        }

        AppEvent::MyTasksLoaded(tasks) => {
            state.loading.my_tasks = false;
            state.my_tasks = tasks;
            state.selected_task_index =
                clamp_selection(state.selected_task_index, state.my_tasks.len());
            state
        }

        AppEvent::AgentSaved { created } => {
            state.loading.saving_agent = false;
            state.agent_form = None;
            let message = if created { AGENT_CREATED } else { AGENT_UPDATED };
            state.banner = Some(Banner::from_message(message));
            state.commands.push(Command::FetchAgents);
            state
        }

        AppEvent::AgentDeleted => {
            state.loading.deleting_agent = false;
            state.banner = Some(Banner::from_message(AGENT_DELETED));
            state.commands.push(Command::FetchAgents);
            state
        }

        AppEvent::ListUploaded(message) => {
            state.loading.upload = false;
            state.upload = UploadForm::default();
            state.banner = Some(Banner::from_message(message));
            state
        }

        AppEvent::TaskStatusUpdated => {
            state.loading.task_status = false;
            state.banner = Some(Banner::from_message(TASK_STATUS_UPDATED));
            state.commands.push(Command::FetchMyTasks);
            state
        }

        AppEvent::Failed { origin, error } => {
            clear_loading(&mut state, origin);
            // A rejected or missing token ends the session; the gate then
            // lands on the login screen.
            if origin != Origin::Login && matches!(error, ConsoleError::Authentication(_)) {
                state.commands.push(Command::Logout);
            }
            state.banner = Some(Banner::from_message(error.to_string()));
            state
        }

        AppEvent::WatcherFailed(error) => {
            state.banner = Some(Banner::from_message(format!(
                "Session watcher stopped: {}",
                error
            )));
            state
        }
    }
}

/// Queue the collection fetch backing the current view, if any.
pub fn queue_fetch(mut state: AppState) -> AppState {
    let command = match state.route {
        Route::AgentManagement => {
            state.loading.agents = true;
            Command::FetchAgents
        }
        Route::DistributedLists => {
            state.loading.distributed = true;
            Command::FetchDistributed
        }
        Route::MyTasks => {
            state.loading.my_tasks = true;
            Command::FetchMyTasks
        }
        Route::Login | Route::Dashboard | Route::UploadList => return state,
    };
    state.commands.push(command);
    state
}

fn clear_loading(state: &mut AppState, origin: Origin) {
    let flag = match origin {
        Origin::Login => &mut state.loading.login,
        Origin::Agents => &mut state.loading.agents,
        Origin::AgentSave => &mut state.loading.saving_agent,
        Origin::AgentDelete => &mut state.loading.deleting_agent,
        Origin::Upload => &mut state.loading.upload,
        Origin::Distributed => &mut state.loading.distributed,
        Origin::MyTasks => &mut state.loading.my_tasks,
        Origin::TaskStatus => &mut state.loading.task_status,
    };
    *flag = false;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::forms::AgentForm;
    use crate::error::ValidationError;
    use crate::model::{Agent, AssignedAgent, Principal, Role, Task};
    use chrono::Utc;

    fn admin() -> Principal {
        Principal::new("u1", "Ada", Role::Admin, "tok")
    }

    fn settled(route: Route, principal: Option<Principal>) -> AppState {
        let mut state = AppState::new();
        state.route = route;
        state.principal = principal;
        state.commands.clear();
        state
    }

    #[test]
    fn tick_records_time() {
        let now = Utc::now();
        let state = update(AppState::new(), AppEvent::Tick(now));
        assert_eq!(state.now, Some(now));
    }

    #[test]
    fn route_change_queues_matching_fetch() {
        let state = settled(Route::Dashboard, Some(admin()));

        let mut state = update(
            state,
            AppEvent::RouteResolved {
                principal: Some(admin()),
                route: Route::AgentManagement,
            },
        );

        assert_eq!(state.route, Route::AgentManagement);
        assert!(state.loading.agents);
        assert_eq!(state.take_commands(), vec![Command::FetchAgents]);
    }

    #[test]
    fn unchanged_route_does_not_refetch() {
        let state = settled(Route::MyTasks, Some(Principal::new("a", "Bo", Role::Agent, "t")));

        let mut state = update(
            state,
            AppEvent::RouteResolved {
                principal: Some(Principal::new("a", "Bo", Role::Agent, "t")),
                route: Route::MyTasks,
            },
        );

        assert!(state.take_commands().is_empty());
    }

    #[test]
    fn losing_principal_clears_data() {
        let mut state = settled(Route::AgentManagement, Some(admin()));
        state.agents = vec![Agent::new("a1", "Alice", "alice@x.io")];
        state.selected_agent_index = Some(0);

        let state = update(
            state,
            AppEvent::RouteResolved {
                principal: None,
                route: Route::Login,
            },
        );

        assert_eq!(state.route, Route::Login);
        assert!(state.agents.is_empty());
        assert!(state.selected_agent_index.is_none());
    }

    #[test]
    fn logged_in_resets_form_and_navigates_to_landing() {
        let mut state = settled(Route::Login, None);
        state.login.email.value = "ada@x.io".into();
        state.loading.login = true;

        let mut state = update(state, AppEvent::LoggedIn(admin()));

        assert!(!state.loading.login);
        assert!(state.login.email.value.is_empty());
        assert_eq!(
            state.take_commands(),
            vec![Command::Navigate(Route::AgentManagement)]
        );
    }

    #[test]
    fn distributed_tasks_are_grouped() {
        let a = AssignedAgent::new("a1", "Alice", "alice@x.io");
        let tasks = vec![
            Task::new("t1", "Ann", "1").assigned(a.clone()),
            Task::new("t2", "Ben", "2"),
            Task::new("t3", "Cal", "3").assigned(a),
        ];

        let state = update(
            settled(Route::DistributedLists, Some(admin())),
            AppEvent::DistributedLoaded(tasks),
        );

        assert_eq!(state.task_groups.len(), 2);
        assert_eq!(state.task_groups[0].agent_key, "a1");
        assert_eq!(state.task_groups[0].task_count(), 2);
        assert!(state.task_groups[1].is_unassigned());
    }

    #[test]
    fn agent_saved_closes_form_and_refetches() {
        let mut state = settled(Route::AgentManagement, Some(admin()));
        state.agent_form = Some(AgentForm::new());
        state.loading.saving_agent = true;

        let mut state = update(state, AppEvent::AgentSaved { created: true });

        assert!(state.agent_form.is_none());
        assert!(!state.loading.saving_agent);
        assert_eq!(state.banner, Some(Banner::from_message(AGENT_CREATED)));
        assert_eq!(state.take_commands(), vec![Command::FetchAgents]);
    }

    #[test]
    fn task_status_updated_refetches_my_tasks() {
        let mut state = update(
            settled(Route::MyTasks, None),
            AppEvent::TaskStatusUpdated,
        );
        assert!(state.banner.as_ref().unwrap().is_success());
        assert_eq!(state.take_commands(), vec![Command::FetchMyTasks]);
    }

    #[test]
    fn failure_keeps_form_and_shows_error() {
        let mut state = settled(Route::AgentManagement, Some(admin()));
        let mut form = AgentForm::new();
        form.name.value = "Alice".into();
        state.agent_form = Some(form);
        state.loading.saving_agent = true;

        let mut state = update(
            state,
            AppEvent::Failed {
                origin: Origin::AgentSave,
                error: ConsoleError::NetworkOrServer("Email already exists".into()),
            },
        );

        assert!(!state.loading.saving_agent);
        assert_eq!(state.agent_form.as_ref().unwrap().name.value, "Alice");
        let banner = state.banner.clone().unwrap();
        assert!(!banner.is_success());
        assert_eq!(banner.message, "Email already exists");
        assert!(state.take_commands().is_empty());
    }

    #[test]
    fn authentication_failure_ends_session() {
        let mut state = update(
            settled(Route::MyTasks, None),
            AppEvent::Failed {
                origin: Origin::MyTasks,
                error: ConsoleError::not_logged_in(),
            },
        );
        assert_eq!(state.take_commands(), vec![Command::Logout]);
    }

    #[test]
    fn session_error_survives_redirect_to_login() {
        let state = update(
            settled(Route::AgentManagement, Some(admin())),
            AppEvent::Failed {
                origin: Origin::Agents,
                error: ConsoleError::Authentication("Not authorized, token failed".into()),
            },
        );
        let state = update(
            state,
            AppEvent::RouteResolved {
                principal: None,
                route: Route::Login,
            },
        );

        assert_eq!(state.route, Route::Login);
        assert_eq!(
            state.banner.map(|b| b.message),
            Some("Not authorized, token failed".to_string())
        );
    }

    #[test]
    fn success_banner_is_cleared_on_route_change() {
        let mut state = settled(Route::AgentManagement, Some(admin()));
        state.banner = Some(Banner::from_message(AGENT_CREATED));
        let state = update(
            state,
            AppEvent::RouteResolved {
                principal: Some(admin()),
                route: Route::Dashboard,
            },
        );
        assert!(state.banner.is_none());
    }

    #[test]
    fn validation_failure_is_banner_text() {
        let state = update(
            settled(Route::UploadList, Some(admin())),
            AppEvent::Failed {
                origin: Origin::Upload,
                error: ValidationError::NoFileSelected.into(),
            },
        );
        assert_eq!(
            state.banner.unwrap().message,
            "Please select a file first."
        );
    }

    #[test]
    fn upload_success_clears_path() {
        let mut state = settled(Route::UploadList, Some(admin()));
        state.upload.path.value = "/tmp/leads.csv".into();
        state.loading.upload = true;

        let state = update(
            state,
            AppEvent::ListUploaded("List uploaded and distributed successfully!".into()),
        );

        assert!(state.upload.path.value.is_empty());
        assert!(!state.loading.upload);
        assert!(state.banner.unwrap().is_success());
    }

    #[test]
    fn session_store_change_reruns_gate() {
        let mut state = update(
            settled(Route::UploadList, Some(admin())),
            AppEvent::SessionStoreChanged,
        );
        assert_eq!(
            state.take_commands(),
            vec![Command::Navigate(Route::UploadList)]
        );
    }
}
