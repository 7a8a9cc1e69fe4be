use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::TextField;
use crate::model::Theme;

/// Lines for a labelled form: one label line and one input line per field.
/// The focused field gets a cursor and highlighted label.
pub fn form_lines(labels: &[&str], fields: &[&TextField], focus: Option<usize>) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(labels.len() * 2);

    for (i, (label, field)) in labels.iter().zip(fields).enumerate() {
        let focused = focus == Some(i);
        let label_style = if focused {
            Style::default().fg(Theme::ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Theme::MUTED_TEXT)
        };

        lines.push(Line::from(Span::styled(format!("{}:", label), label_style)));

        let mut input = vec![
            Span::raw(" "),
            Span::styled(field.display(), Style::default().fg(Theme::TEXT).bg(Theme::INPUT_BG)),
        ];
        if focused {
            input.push(Span::styled("_", Style::default().fg(Theme::ACCENT)));
        }
        lines.push(Line::from(input));
    }

    lines
}

/// Render a form as a bordered popup.
pub fn render_form_popup(frame: &mut Frame, area: Rect, title: &str, lines: Vec<Line<'static>>) {
    frame.render_widget(Clear, area);

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(format!(" {} ", title))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Theme::ACTIVE_BORDER)),
        )
        .style(Style::default().bg(Theme::BACKGROUND));

    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn masked_fields_render_stars() {
        let email = TextField::new().with_value("a@x.io");
        let password = TextField::masked().with_value("pw");

        let lines = form_lines(&["Email", "Password"], &[&email, &password], Some(1));

        assert_eq!(lines.len(), 4);
        assert_eq!(text(&lines[0]), "Email:");
        assert!(text(&lines[1]).contains("a@x.io"));
        assert!(text(&lines[3]).contains("**"));
        assert!(!text(&lines[3]).contains("pw"));
    }

    #[test]
    fn cursor_only_on_focused_field() {
        let a = TextField::new();
        let b = TextField::new();
        let lines = form_lines(&["A", "B"], &[&a, &b], Some(0));
        assert!(text(&lines[1]).ends_with('_'));
        assert!(!text(&lines[3]).ends_with('_'));
    }
}
