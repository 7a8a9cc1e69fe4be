use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use super::components::format::{format_date, or_dash};
use crate::app::AppState;
use crate::model::Theme;

/// Render the logged-in agent's tasks with their status.
pub fn render_my_tasks(frame: &mut Frame, state: &AppState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Theme::PANEL_BORDER))
        .title(format!(" My Assigned Tasks ({}) ", state.my_tasks.len()));

    if state.my_tasks.is_empty() {
        let message = if state.loading.my_tasks {
            "Loading tasks..."
        } else {
            "You have no assigned tasks."
        };
        let paragraph =
            Paragraph::new(Span::styled(message, Style::default().fg(Theme::MUTED_TEXT))).block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let header = Row::new(["First Name", "Phone", "Notes", "Created", "Status"])
        .style(Style::default().fg(Theme::INFO).add_modifier(Modifier::BOLD));

    let rows = state.my_tasks.iter().map(|task| {
        Row::new([
            Cell::from(task.first_name.clone()),
            Cell::from(task.phone.clone()),
            Cell::from(or_dash(&task.notes).to_string()),
            Cell::from(format_date(task.created_at)),
            Cell::from(Span::styled(
                task.status.label().to_string(),
                Style::default().fg(Theme::task_status_color(&task.status)),
            )),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(20),
            Constraint::Percentage(18),
            Constraint::Percentage(32),
            Constraint::Percentage(14),
            Constraint::Percentage(16),
        ],
    )
    .header(header)
    .block(block)
    .style(Style::default().fg(Theme::TEXT))
    .row_highlight_style(Style::default().bg(Theme::SELECTION_BG).add_modifier(Modifier::BOLD));

    let mut table_state = TableState::default().with_selected(state.selected_task_index);
    frame.render_stateful_widget(table, area, &mut table_state);
}
