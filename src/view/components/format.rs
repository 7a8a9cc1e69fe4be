use chrono::{DateTime, Local, Utc};

/// Format elapsed seconds as human-readable string.
/// - < 60s: "Xs"
/// - < 3600s: "XmYs"
/// - >= 3600s: "XhYm"
pub fn format_elapsed(secs: u64) -> String {
    if secs < 60 {
        format!("{}s", secs)
    } else if secs < 3600 {
        format!("{}m{}s", secs / 60, secs % 60)
    } else {
        format!("{}h{}m", secs / 3600, (secs % 3600) / 60)
    }
}

/// Local calendar date of a backend timestamp, or "—" if absent.
pub fn format_date(at: Option<DateTime<Utc>>) -> String {
    match at {
        Some(at) => at.with_timezone(&Local).format("%Y-%m-%d").to_string(),
        None => "—".to_string(),
    }
}

/// Placeholder for empty optional text cells.
pub fn or_dash(value: &str) -> &str {
    if value.trim().is_empty() {
        "—"
    } else {
        value
    }
}
