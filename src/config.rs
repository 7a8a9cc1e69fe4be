use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::api::DEFAULT_API_URL;
use crate::paths::Paths;

/// lead-console -- terminal console for the lead distribution backend.
#[derive(Debug, Clone, Parser)]
#[command(name = "lead-console", version, about)]
pub struct Cli {
    /// Backend base URL.
    #[arg(long, env = "LEAD_CONSOLE_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Where the login response is stored between runs.
    #[arg(long, env = "LEAD_CONSOLE_SESSION_FILE")]
    pub session_file: Option<PathBuf>,

    /// Log file (RUST_LOG controls the filter).
    #[arg(long, env = "LEAD_CONSOLE_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// UI tick interval in milliseconds.
    #[arg(long, default_value_t = 250)]
    pub tick_ms: u64,
}

/// Fully resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_url: String,
    pub session_file: PathBuf,
    pub log_file: PathBuf,
    pub tick_rate: Duration,
}

impl Cli {
    /// Fill unset file locations from `paths`.
    pub fn into_config(self, paths: &Paths) -> Config {
        Config {
            api_url: self.api_url,
            session_file: self
                .session_file
                .unwrap_or_else(|| paths.session_file.clone()),
            log_file: self.log_file.unwrap_or_else(|| paths.log_file.clone()),
            tick_rate: Duration::from_millis(self.tick_ms.max(1)),
        }
    }
}
