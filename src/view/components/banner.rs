use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::app::Banner;
use crate::model::Theme;

/// Height needed to show the banner (0 when there is none).
pub fn banner_height(banner: Option<&Banner>) -> u16 {
    if banner.is_some() {
        1
    } else {
        0
    }
}

/// Render the inline status banner. Success and error messages share the
/// same slot; the colour follows the banner kind.
pub fn render_banner(frame: &mut Frame, area: Rect, banner: Option<&Banner>) {
    let Some(banner) = banner else {
        return;
    };

    let (fg, bg) = if banner.is_success() {
        (Theme::SUCCESS, Theme::BANNER_SUCCESS_BG)
    } else {
        (Theme::ERROR, Theme::BANNER_ERROR_BG)
    };

    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", banner.message),
            Style::default().fg(fg).add_modifier(Modifier::BOLD),
        ),
        Span::styled("(x to dismiss)", Style::default().fg(Theme::MUTED_TEXT)),
    ]);

    let paragraph = Paragraph::new(line)
        .style(Style::default().bg(bg))
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}
