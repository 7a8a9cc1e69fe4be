use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    Frame,
};

use super::components::{centered_rect, form_lines, render_form_popup};
use crate::app::{AppState, LoginForm};
use crate::model::Theme;

/// Render the login form centered in the content area.
pub fn render_login(frame: &mut Frame, state: &AppState, area: Rect) {
    let popup = centered_rect(50, 60, area);

    let mut lines = vec![
        Line::from(Span::styled(
            "Sign in with your admin or agent account",
            Style::default().fg(Theme::MUTED_TEXT),
        )),
        Line::from(""),
    ];
    lines.extend(form_lines(
        &LoginForm::LABELS,
        &state.login.fields(),
        Some(state.login.focus),
    ));
    lines.push(Line::from(""));
    lines.push(if state.loading.login {
        Line::from(Span::styled(
            "Logging in...",
            Style::default().fg(Theme::WARNING),
        ))
    } else {
        Line::from(Span::styled(
            "Press Enter to log in",
            Style::default().fg(Theme::ACCENT).add_modifier(Modifier::BOLD),
        ))
    });

    render_form_popup(frame, popup, "Login", lines);
}
