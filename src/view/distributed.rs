use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::components::format::{format_date, or_dash};
use crate::app::AppState;
use crate::model::{AgentTaskGroup, Theme};

pub const NOTHING_DISTRIBUTED: &str = "No lists have been distributed yet.";

/// Render distributed tasks, one section per agent group.
pub fn render_distributed(frame: &mut Frame, state: &AppState, area: Rect) {
    let lines = build_distributed_lines(state);
    let max_scroll = lines.len().saturating_sub(1);
    let scroll = state.distributed_scroll.min(max_scroll);

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Theme::PANEL_BORDER))
                .title(" View Distributed Lists "),
        )
        .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0));
    frame.render_widget(paragraph, area);
}

/// Pure function: flatten groups into display lines.
pub fn build_distributed_lines(state: &AppState) -> Vec<Line<'static>> {
    if state.task_groups.is_empty() {
        let message = if state.loading.distributed {
            "Loading distributed lists..."
        } else {
            NOTHING_DISTRIBUTED
        };
        return vec![Line::from(Span::styled(
            message,
            Style::default().fg(Theme::MUTED_TEXT),
        ))];
    }

    let mut lines = Vec::new();
    for group in &state.task_groups {
        lines.extend(group_lines(group));
        lines.push(Line::from(""));
    }
    lines
}

fn group_lines(group: &AgentTaskGroup) -> Vec<Line<'static>> {
    let title_color = if group.is_unassigned() {
        Theme::MUTED_TEXT
    } else {
        Theme::AGENT_LABEL
    };

    let mut lines = vec![
        Line::from(Span::styled(
            group.title(),
            Style::default().fg(title_color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(
                "  {:<16} {:<16} {:<12} {:<10} {}",
                "First Name", "Phone", "Status", "Created", "Notes"
            ),
            Style::default().fg(Theme::INFO),
        )),
    ];

    for task in &group.tasks {
        lines.push(Line::from(vec![
            Span::raw(format!("  {:<16} {:<16} ", task.first_name, task.phone)),
            Span::styled(
                format!("{:<12}", task.status.label()),
                Style::default().fg(Theme::task_status_color(&task.status)),
            ),
            Span::raw(format!(
                " {:<10} {}",
                format_date(task.created_at),
                or_dash(&task.notes)
            )),
        ]));
    }

    lines
}
