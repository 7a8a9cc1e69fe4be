use crate::error::ConsoleError;
use crate::model::{Principal, Role};

use super::authorize;

const ANY_ROLE: &[Role] = &[Role::Admin, Role::Agent];
const ADMIN_ONLY: &[Role] = &[Role::Admin];
const AGENT_ONLY: &[Role] = &[Role::Agent];

/// Console views. Everything but `Login` is protected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Dashboard,
    AgentManagement,
    UploadList,
    DistributedLists,
    MyTasks,
}

impl Route {
    /// Roles allowed to open the view, `None` for the public login screen.
    pub fn allowed_roles(&self) -> Option<&'static [Role]> {
        match self {
            Route::Login => None,
            Route::Dashboard => Some(ANY_ROLE),
            Route::AgentManagement | Route::UploadList | Route::DistributedLists => Some(ADMIN_ONLY),
            Route::MyTasks => Some(AGENT_ONLY),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Login => "Login",
            Route::Dashboard => "Dashboard",
            Route::AgentManagement => "Agent Management",
            Route::UploadList => "Upload & Distribute Lists",
            Route::DistributedLists => "View Distributed Lists",
            Route::MyTasks => "My Assigned Tasks",
        }
    }

    /// Views listed in the navigation bar for a role, in hotkey order.
    pub fn menu(role: Role) -> &'static [Route] {
        match role {
            Role::Admin => &[
                Route::Dashboard,
                Route::AgentManagement,
                Route::UploadList,
                Route::DistributedLists,
            ],
            Role::Agent => &[Route::Dashboard, Route::MyTasks],
        }
    }

    /// Where a freshly logged-in principal starts.
    pub fn landing(role: Role) -> Route {
        match role {
            Role::Admin => Route::AgentManagement,
            Role::Agent => Route::MyTasks,
        }
    }
}

/// Access-control state of one protected view for the current principal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessState {
    Unauthenticated,
    AuthenticatedUnauthorized,
    AuthenticatedAuthorized,
}

pub fn evaluate(principal: Option<&Principal>, route: Route) -> AccessState {
    match principal {
        None => AccessState::Unauthenticated,
        Some(_) if authorize(principal, route.allowed_roles()) => AccessState::AuthenticatedAuthorized,
        Some(_) => AccessState::AuthenticatedUnauthorized,
    }
}

/// Why `route` may not be shown to `principal`, as a console error.
pub fn check(principal: Option<&Principal>, route: Route) -> Result<(), ConsoleError> {
    match (evaluate(principal, route), principal) {
        (AccessState::AuthenticatedAuthorized, _) => Ok(()),
        (AccessState::AuthenticatedUnauthorized, Some(p)) => {
            Err(ConsoleError::AuthorizationDenied { role: p.role })
        }
        _ => Err(ConsoleError::not_logged_in()),
    }
}

/// The view actually shown when navigating to `route`: unauthenticated
/// visitors go to login, unauthorized ones to the dashboard. The login screen
/// itself forwards an existing session to the dashboard.
pub fn resolve(principal: Option<&Principal>, route: Route) -> Route {
    if route == Route::Login {
        return if principal.is_some() {
            Route::Dashboard
        } else {
            Route::Login
        };
    }

    match evaluate(principal, route) {
        AccessState::Unauthenticated => Route::Login,
        AccessState::AuthenticatedUnauthorized => Route::Dashboard,
        AccessState::AuthenticatedAuthorized => route,
    }
}
