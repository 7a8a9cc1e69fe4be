use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::format::format_elapsed;
use crate::app::AppState;
use crate::model::Theme;
use crate::session::Route;

/// Render header bar.
/// Shows: app name, numbered navigation for the role, user, elapsed time.
pub fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let header = Paragraph::new(build_header_text(state)).style(
        Style::default()
            .fg(Theme::TEXT)
            .bg(Theme::HEADER_BG)
            .add_modifier(Modifier::BOLD),
    );

    frame.render_widget(header, area);
}

/// Pure function: build header text from state.
fn build_header_text(state: &AppState) -> Line<'static> {
    let mut spans = vec![Span::styled("lead-console", Style::default().fg(Theme::ACCENT))];

    match &state.principal {
        Some(principal) => {
            for (i, route) in Route::menu(principal.role).iter().enumerate() {
                let style = if *route == state.route {
                    Style::default().fg(Theme::ACCENT_WARM)
                } else {
                    Style::default().fg(Theme::MUTED_TEXT)
                };
                spans.push(Span::styled(format!("  [{}:{}]", i + 1, route.title()), style));
            }
            spans.push(Span::styled(
                format!("  {} ({})", principal.name, principal.role),
                Style::default().fg(Theme::AGENT_LABEL),
            ));
        }
        None => {
            spans.push(Span::styled(
                format!("  {}", state.route.title()),
                Style::default().fg(Theme::INFO),
            ));
        }
    }

    if state.loading.any() {
        spans.push(Span::styled("  …", Style::default().fg(Theme::WARNING)));
    }

    spans.push(Span::styled(
        format!("  {}", format_elapsed(state.started_at.elapsed().as_secs())),
        Style::default().fg(Theme::MUTED_TEXT),
    ));

    if let Some(now) = state.now {
        spans.push(Span::styled(
            format!("  {}", now.format("%H:%M:%S")),
            Style::default().fg(Theme::MUTED_TEXT),
        ));
    }

    Line::from(spans)
}
