use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::AppState;
use crate::model::Theme;
use crate::session::Route;

/// Render the dashboard: greeting plus the views open to the role.
pub fn render_dashboard(frame: &mut Frame, state: &AppState, area: Rect) {
    let paragraph = Paragraph::new(build_dashboard_text(state)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Theme::PANEL_BORDER))
            .title(" Dashboard "),
    );
    frame.render_widget(paragraph, area);
}

fn build_dashboard_text(state: &AppState) -> Vec<Line<'static>> {
    let Some(principal) = &state.principal else {
        return vec![Line::from("Not logged in.")];
    };

    let mut lines = vec![
        Line::from(vec![
            Span::raw("Welcome, "),
            Span::styled(
                principal.name.clone(),
                Style::default().fg(Theme::AGENT_LABEL).add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" ({})", principal.role)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Available views:",
            Style::default().fg(Theme::MUTED_TEXT),
        )),
    ];

    for (i, route) in Route::menu(principal.role).iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("  {} ", i + 1), Style::default().fg(Theme::INFO)),
            Span::raw(route.title()),
        ]));
    }

    if !state.api_url.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Backend: {}", state.api_url),
            Style::default().fg(Theme::MUTED_TEXT),
        )));
    }

    lines
}
