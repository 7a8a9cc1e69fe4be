use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::AppState;
use crate::session::Route;

pub mod agents;
pub mod components;
pub mod dashboard;
pub mod distributed;
pub mod login;
pub mod my_tasks;
pub mod upload;

pub use agents::render_agents;
pub use dashboard::render_dashboard;
pub use distributed::render_distributed;
pub use login::render_login;
pub use my_tasks::render_my_tasks;
pub use upload::render_upload;

use components::{banner_height, render_banner, render_footer, render_header, render_help_overlay};

/// Main view dispatcher.
/// Draws header, banner and footer around the view for the current route,
/// then the help overlay on top if active.
pub fn render(state: &AppState, frame: &mut Frame) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                                // Header
            Constraint::Length(banner_height(state.banner.as_ref())), // Banner
            Constraint::Min(3),                                   // View
            Constraint::Length(1),                                // Footer
        ])
        .split(frame.area());

    render_header(frame, layout[0], state);
    render_banner(frame, layout[1], state.banner.as_ref());

    match state.route {
        Route::Login => render_login(frame, state, layout[2]),
        Route::Dashboard => render_dashboard(frame, state, layout[2]),
        Route::AgentManagement => render_agents(frame, state, layout[2]),
        Route::UploadList => render_upload(frame, state, layout[2]),
        Route::DistributedLists => render_distributed(frame, state, layout[2]),
        Route::MyTasks => render_my_tasks(frame, state, layout[2]),
    }

    render_footer(frame, layout[3], state);

    if state.show_help {
        render_help_overlay(frame);
    }
}
