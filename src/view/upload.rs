use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::api::UPLOAD_EXTENSIONS;
use crate::app::AppState;
use crate::model::Theme;

/// Loading text while the backend parses and distributes the sheet.
pub const UPLOADING: &str = "Uploading & Distributing...";

/// Render the upload panel: instructions, file path input and status.
pub fn render_upload(frame: &mut Frame, state: &AppState, area: Rect) {
    let paragraph = Paragraph::new(build_upload_text(state))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(if state.upload.editing {
                    Theme::ACTIVE_BORDER
                } else {
                    Theme::PANEL_BORDER
                }))
                .title(" Upload & Distribute Lists "),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn build_upload_text(state: &AppState) -> Vec<Line<'static>> {
    let accepted = UPLOAD_EXTENSIONS
        .iter()
        .map(|e| format!(".{}", e))
        .collect::<Vec<_>>()
        .join(", ");

    let mut path = vec![
        Span::styled("File: ", Style::default().fg(Theme::MUTED_TEXT)),
        Span::styled(
            state.upload.path.display(),
            Style::default().fg(Theme::TEXT).bg(Theme::INPUT_BG),
        ),
    ];
    if state.upload.editing {
        path.push(Span::styled("_", Style::default().fg(Theme::ACCENT)));
    }

    let status = if state.loading.upload {
        Span::styled(UPLOADING, Style::default().fg(Theme::WARNING))
    } else {
        Span::styled(
            "Press s to upload & distribute",
            Style::default().fg(Theme::ACCENT).add_modifier(Modifier::BOLD),
        )
    };

    vec![
        Line::from(format!("Accepted formats: {}", accepted)),
        Line::from("Columns: FirstName, Phone, Notes. Tasks are split evenly across agents."),
        Line::from(""),
        Line::from(path),
        Line::from(""),
        Line::from(status),
    ]
}
