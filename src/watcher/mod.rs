//! Session file watcher.
//!
//! Another console (or a second terminal of the same user) may log in or out
//! while this one is running. Watching the session file lets the access gate
//! re-run so the UI follows the stored principal.

use std::path::{Path, PathBuf};

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc::UnboundedSender;

use crate::error::WatcherError;
use crate::event::AppEvent;

/// Result type for watcher operations
pub type WatcherResult<T> = Result<T, WatcherError>;

/// Start watching `session_file` and return the watcher. Dropping the
/// returned value stops the watch.
///
/// The parent directory is watched (and created if needed) so creation,
/// atomic replacement and removal of the file are all seen.
pub fn watch_session_file(
    session_file: &Path,
    tx: UnboundedSender<AppEvent>,
) -> WatcherResult<RecommendedWatcher> {
    let target = session_file.to_path_buf();
    let dir = session_file
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&dir)?;

    let mut watcher = RecommendedWatcher::new(
        move |res: Result<Event, notify::Error>| handle_watch_event(res, &target, &tx),
        Config::default(),
    )?;
    watcher.watch(&dir, RecursiveMode::NonRecursive)?;

    tracing::debug!(path = %session_file.display(), "watching session file");
    Ok(watcher)
}

fn handle_watch_event(
    res: Result<Event, notify::Error>,
    target: &Path,
    tx: &UnboundedSender<AppEvent>,
) {
    let event = match res {
        Ok(event) if is_session_change(&event, target) => AppEvent::SessionStoreChanged,
        Ok(_) => return,
        Err(e) => {
            tracing::warn!(error = %e, "session watcher error");
            AppEvent::WatcherFailed(e.into())
        }
    };
    // Receiver gone means the app is shutting down.
    let _ = tx.send(event);
}

/// `true` for create/modify/remove events that touch `target`.
pub fn is_session_change(event: &Event, target: &Path) -> bool {
    matches!(
        event.kind,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
    ) && event.paths.iter().any(|p| p == target)
}
