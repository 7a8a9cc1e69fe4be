use ratatui::style::Color;

use crate::model::TaskStatus;

pub struct Theme;

impl Theme {
    // ── Base palette ────────────────────────────────────────────
    pub const BACKGROUND: Color = Color::Rgb(18, 18, 24);
    pub const TEXT: Color = Color::Rgb(225, 225, 235);
    pub const MUTED_TEXT: Color = Color::Rgb(100, 105, 120);

    // ── Accent colors ───────────────────────────────────────────
    pub const ACCENT: Color = Color::Rgb(80, 200, 200);         // teal
    pub const ACCENT_WARM: Color = Color::Rgb(230, 160, 60);    // amber

    // ── Semantic colors ─────────────────────────────────────────
    pub const SUCCESS: Color = Color::Rgb(80, 210, 120);
    pub const WARNING: Color = Color::Rgb(230, 180, 60);
    pub const ERROR: Color = Color::Rgb(230, 80, 80);
    pub const INFO: Color = Color::Rgb(80, 180, 220);

    // ── UI chrome ───────────────────────────────────────────────
    pub const HEADER_BG: Color = Color::Rgb(24, 24, 32);
    pub const FOOTER_BG: Color = Color::Rgb(24, 24, 32);
    pub const PANEL_BORDER: Color = Color::Rgb(50, 50, 65);
    pub const ACTIVE_BORDER: Color = Color::Rgb(80, 200, 200);
    pub const SELECTION_BG: Color = Color::Rgb(40, 55, 75);
    pub const AGENT_LABEL: Color = Color::Rgb(170, 130, 255);
    pub const INPUT_BG: Color = Color::Rgb(32, 32, 44);

    // ── Banner ──────────────────────────────────────────────────
    pub const BANNER_SUCCESS_BG: Color = Color::Rgb(22, 48, 32);
    pub const BANNER_ERROR_BG: Color = Color::Rgb(58, 24, 24);

    // ── Task status ─────────────────────────────────────────────
    pub const STATUS_PENDING: Color = Color::Rgb(230, 180, 60);
    pub const STATUS_IN_PROGRESS: Color = Color::Rgb(80, 180, 220);
    pub const STATUS_COMPLETED: Color = Color::Rgb(80, 210, 120);

    /// Get color for task status. Unknown statuses share the in-progress
    /// color, like any status that is neither pending nor completed.
    pub fn task_status_color(status: &TaskStatus) -> Color {
        match status {
            TaskStatus::Pending => Self::STATUS_PENDING,
            TaskStatus::Completed => Self::STATUS_COMPLETED,
            TaskStatus::InProgress | TaskStatus::Other(_) => Self::STATUS_IN_PROGRESS,
        }
    }
}
