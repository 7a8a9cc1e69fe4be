use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::AppState;
use crate::model::Theme;
use crate::session::Route;

/// Render footer status bar with keybinding hints.
/// Shows different keybindings based on current view and input mode.
pub fn render_footer(frame: &mut Frame, area: Rect, state: &AppState) {
    let footer = Paragraph::new(build_footer_text(state)).style(
        Style::default()
            .fg(Theme::TEXT)
            .bg(Theme::FOOTER_BG)
            .add_modifier(Modifier::DIM),
    );

    frame.render_widget(footer, area);
}

fn hints(pairs: &[(&'static str, &'static str)]) -> Line<'static> {
    let mut spans = Vec::with_capacity(pairs.len() * 2);
    for (key, action) in pairs {
        spans.push(Span::styled(*key, Style::default().fg(Theme::INFO)));
        spans.push(Span::raw(format!(":{} ", action)));
    }
    Line::from(spans)
}

/// Pure function: build footer text based on current view and state.
fn build_footer_text(state: &AppState) -> Line<'static> {
    if state.confirm_delete.is_some() {
        return hints(&[("y", "delete"), ("n", "cancel")]);
    }
    if state.route == Route::Login {
        return hints(&[("Tab", "next field"), ("Enter", "log in"), ("Esc", "quit")]);
    }
    if state.agent_form.is_some() {
        return hints(&[("Tab", "next field"), ("Enter", "save"), ("Esc", "cancel")]);
    }
    if state.upload.editing {
        return hints(&[("Enter", "upload"), ("Esc", "stop editing")]);
    }

    let mut pairs = vec![("q", "quit"), ("1-4", "views")];
    match state.route {
        Route::AgentManagement => {
            pairs.extend([("j/k", "select"), ("n", "new"), ("e", "edit"), ("d", "delete")]);
        }
        Route::UploadList => pairs.extend([("e", "edit path"), ("s", "upload")]),
        Route::DistributedLists => pairs.push(("j/k", "scroll")),
        Route::MyTasks => {
            pairs.extend([("j/k", "select"), ("p/i/c", "set status")]);
        }
        Route::Login | Route::Dashboard => {}
    }
    pairs.extend([("r", "refresh"), ("L", "logout"), ("?", "help")]);
    hints(&pairs)
}
