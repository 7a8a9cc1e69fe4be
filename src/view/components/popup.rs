use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::model::Theme;

/// Render a y/n confirmation dialog centered on the screen.
pub fn render_confirm(frame: &mut Frame, title: &str, question: &str) {
    let area = centered_rect(50, 30, frame.area());
    frame.render_widget(Clear, area);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            question.to_string(),
            Style::default().fg(Theme::TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("y", Style::default().fg(Theme::ERROR)),
            Span::raw(":yes  "),
            Span::styled("n", Style::default().fg(Theme::INFO)),
            Span::raw(":no"),
        ]),
    ];

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .title(format!(" {} ", title))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Theme::ERROR)),
        )
        .alignment(Alignment::Center)
        .style(Style::default().bg(Theme::BACKGROUND));

    frame.render_widget(paragraph, area);
}

/// Helper to create a centered rect using up certain percentage of the available rect `r`.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(r);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn centered_rect_is_inside() {
        let outer = Rect::new(0, 0, 100, 50);
        let inner = centered_rect(50, 20, outer);
        assert!(inner.x >= outer.x && inner.right() <= outer.right());
        assert!(inner.y >= outer.y && inner.bottom() <= outer.bottom());
        assert_eq!(inner.width, 50);
    }

    #[test]
    fn confirm_shows_question() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let result = terminal
            .draw(|frame| render_confirm(frame, "Delete Agent", "Delete Alice?"))
            .unwrap();
        let text: String = result.buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Delete Alice?"));
    }
}
