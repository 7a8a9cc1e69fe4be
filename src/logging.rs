use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize logging to `log_file`.
///
/// The terminal is owned by the UI, so nothing is written to stdout or
/// stderr. Uses the `RUST_LOG` environment variable if set, otherwise falls
/// back to `default_level`.
///
/// Safe to call multiple times (e.g. in tests) -- subsequent calls are no-ops.
pub fn init_logging(log_file: &Path, default_level: &str) -> std::io::Result<()> {
    if let Some(parent) = log_file.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(log_file)?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .try_init()
        .ok();

    tracing::info!(log_file = %log_file.display(), "logging initialised");
    Ok(())
}
