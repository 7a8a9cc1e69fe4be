use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::popup::centered_rect;
use crate::model::theme::Theme;

/// Render the help overlay.
/// Displayed as centered popup when show_help is true.
/// Lists all keybindings grouped by category.
pub fn render_help_overlay(frame: &mut Frame) {
    let area = frame.area();

    // Create centered popup area (60% width, 80% height)
    let popup_area = centered_rect(60, 80, area);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let paragraph = Paragraph::new(build_help_text())
        .block(
            Block::default()
                .title(" Help - press any key to close ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Theme::ACTIVE_BORDER)),
        )
        .alignment(Alignment::Left)
        .style(Style::default().bg(Theme::BACKGROUND).fg(Theme::TEXT));

    frame.render_widget(paragraph, popup_area);
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        title,
        Style::default().fg(Theme::INFO).add_modifier(Modifier::BOLD),
    ))
}

/// Build help text with keybindings grouped by category.
fn build_help_text() -> Vec<Line<'static>> {
    vec![
        section("NAVIGATION"),
        Line::from("  1-4         - Switch view (numbers shown in the header)"),
        Line::from("  j / k       - Move selection / scroll"),
        Line::from("  r           - Refresh current view"),
        Line::from("  x           - Dismiss message"),
        Line::from("  L           - Log out"),
        Line::from("  ?           - Toggle help overlay"),
        Line::from("  q / Ctrl+c  - Quit"),
        Line::from(""),
        section("FORMS"),
        Line::from("  Tab / S-Tab - Next / previous field"),
        Line::from("  Enter       - Submit"),
        Line::from("  Esc         - Cancel"),
        Line::from(""),
        section("AGENT MANAGEMENT"),
        Line::from("  n           - Add agent"),
        Line::from("  e / Enter   - Edit selected agent"),
        Line::from("  d           - Delete selected agent"),
        Line::from(""),
        section("UPLOAD"),
        Line::from("  e / Enter   - Type file path (.csv, .xls, .xlsx)"),
        Line::from("  s           - Upload & distribute"),
        Line::from(""),
        section("MY TASKS"),
        Line::from("  p / i / c   - Mark pending / in-progress / completed"),
    ]
}
