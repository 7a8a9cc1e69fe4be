//! Error types for lead-console
//!
//! Domain-specific error enums using thiserror. `ConsoleError` is the
//! user-facing taxonomy: every effect converts its failure into one of its
//! variants and the `Display` text is what the banner shows.

use crate::model::Role;

/// Generic text shown when the backend cannot be reached at all.
pub const NETWORK_FAILURE_MESSAGE: &str = "Network Error: unable to reach the server";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("JSON parse: {0}")]
    Json(String),
    #[error("login response has no token")]
    MissingToken,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Client-side checks made before any request is sent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Password is required for a new agent")]
    PasswordRequired,
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("Please select a file first.")]
    NoFileSelected,
    #[error("Unsupported file type '{0}': use .csv, .xls or .xlsx")]
    UnsupportedFileType(String),
    #[error("Cannot read {path}: {reason}")]
    FileUnreadable { path: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConsoleError {
    /// Bad credentials, rejected or missing token.
    #[error("{0}")]
    Authentication(String),
    /// Role mismatch. Logged when the access gate redirects, never displayed.
    #[error("{role} accounts cannot open this view")]
    AuthorizationDenied { role: Role },
    /// Backend unreachable or non-2xx response.
    #[error("{0}")]
    NetworkOrServer(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("session storage: {0}")]
    Storage(String),
}

impl ConsoleError {
    pub fn network() -> Self {
        ConsoleError::NetworkOrServer(NETWORK_FAILURE_MESSAGE.to_string())
    }

    pub fn not_logged_in() -> Self {
        ConsoleError::Authentication("Not logged in".to_string())
    }
}

impl From<StoreError> for ConsoleError {
    fn from(e: StoreError) -> Self {
        ConsoleError::Storage(e.to_string())
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum WatcherError {
    #[error("notify: {0}")]
    Notify(String),
    #[error("I/O: {0}")]
    Io(String),
}

impl From<notify::Error> for WatcherError {
    fn from(e: notify::Error) -> Self {
        WatcherError::Notify(e.to_string())
    }
}

impl From<std::io::Error> for WatcherError {
    fn from(e: std::io::Error) -> Self {
        WatcherError::Io(e.to_string())
    }
}
