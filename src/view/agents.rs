use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use super::components::{centered_rect, form_lines, format::or_dash, render_confirm, render_form_popup};
use crate::app::{AgentForm, AppState};
use crate::model::Theme;

/// Render the agent management view: agent table, plus the add/edit form or
/// delete confirmation when open.
pub fn render_agents(frame: &mut Frame, state: &AppState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Theme::PANEL_BORDER))
        .title(format!(" Agents ({}) ", state.agents.len()));

    if state.agents.is_empty() {
        let message = if state.loading.agents {
            "Loading agents..."
        } else {
            "No agents found. Press n to add one."
        };
        let paragraph = Paragraph::new(Span::styled(message, Style::default().fg(Theme::MUTED_TEXT)))
            .block(block);
        frame.render_widget(paragraph, area);
    } else {
        let header = Row::new(["Name", "Email", "Mobile"])
            .style(Style::default().fg(Theme::INFO).add_modifier(Modifier::BOLD));

        let rows = state.agents.iter().map(|agent| {
            Row::new([
                Cell::from(agent.name.clone()),
                Cell::from(agent.email.clone()),
                Cell::from(or_dash(&agent.mobile).to_string()),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Percentage(30),
                Constraint::Percentage(40),
                Constraint::Percentage(30),
            ],
        )
        .header(header)
        .block(block)
        .style(Style::default().fg(Theme::TEXT))
        .row_highlight_style(Style::default().bg(Theme::SELECTION_BG).add_modifier(Modifier::BOLD));

        let mut table_state = TableState::default().with_selected(state.selected_agent_index);
        frame.render_stateful_widget(table, area, &mut table_state);
    }

    if let Some(form) = &state.agent_form {
        render_agent_form(frame, state, form);
    }

    if let Some(id) = &state.confirm_delete {
        let name = state
            .agents
            .iter()
            .find(|a| &a.id == id)
            .map(|a| a.name.as_str())
            .unwrap_or("this agent");
        render_confirm(frame, "Delete Agent", &format!("Delete {}?", name));
    }
}

fn render_agent_form(frame: &mut Frame, state: &AppState, form: &AgentForm) {
    let area = centered_rect(60, 80, frame.area());

    let mut lines = form_lines(&AgentForm::LABELS, &form.fields(), Some(form.focus));
    if form.is_edit() {
        lines.push(Line::from(Span::styled(
            "Leave password blank to keep the current one.",
            Style::default().fg(Theme::MUTED_TEXT),
        )));
    }
    if state.loading.saving_agent {
        lines.push(Line::from(Span::styled(
            "Saving...",
            Style::default().fg(Theme::WARNING),
        )));
    }

    render_form_popup(frame, area, form.title(), lines);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Agent;
    use crate::session::Route;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let result = terminal
            .draw(|frame| render_agents(frame, state, frame.area()))
            .unwrap();
        result.buffer.content().iter().map(|c| c.symbol()).collect()
    }

    fn with_agents() -> AppState {
        let mut state = AppState::new();
        state.route = Route::AgentManagement;
        state.agents = vec![
            Agent::new("a1", "Alice", "alice@x.io").with_mobile("+15550100"),
            Agent::new("a2", "Bob", "bob@x.io"),
        ];
        state.selected_agent_index = Some(0);
        state
    }

    #[test]
    fn table_lists_agents() {
        let text = screen(&with_agents());
        assert!(text.contains("Agents (2)"));
        assert!(text.contains("alice@x.io"));
        assert!(text.contains("+15550100"));
        assert!(text.contains("Bob"));
    }

    #[test]
    fn empty_and_loading_states() {
        let mut state = AppState::new();
        assert!(screen(&state).contains("No agents found."));
        state.loading.agents = true;
        assert!(screen(&state).contains("Loading agents..."));
    }

    #[test]
    fn edit_form_shows_title_and_hint() {
        let mut state = with_agents();
        state.agent_form = Some(AgentForm::edit(&state.agents[0]));
        let text = screen(&state);
        assert!(text.contains("Edit Agent"));
        assert!(text.contains("Leave password blank"));
    }

    #[test]
    fn confirm_names_agent() {
        let mut state = with_agents();
        state.confirm_delete = Some("a2".into());
        assert!(screen(&state).contains("Delete Bob?"));
    }
}
