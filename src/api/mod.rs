//! Backend REST collaborator.
//!
//! `LeadsApi` is the seam between the console and the backend: effects talk
//! to the trait, `HttpLeadsApi` is the reqwest implementation, tests plug in
//! fakes. Every call is single-shot; failures come back already mapped to the
//! user-facing `ConsoleError` taxonomy.

mod http;

pub use http::{message_from_error_body, HttpLeadsApi, DEFAULT_API_URL};

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::error::{ConsoleError, ValidationError};
use crate::model::{Agent, AgentDraft, AgentId, Task, TaskId, TaskStatus};

/// Spreadsheet formats the backend parser accepts.
pub const UPLOAD_EXTENSIONS: [&str; 3] = ["csv", "xls", "xlsx"];

#[async_trait]
pub trait LeadsApi: Send + Sync {
    /// `POST /api/auth/login`. Returns the raw response body so the session
    /// guard can persist it exactly as received.
    async fn login(&self, email: &str, password: &str) -> Result<String, ConsoleError>;

    async fn list_agents(&self, token: &str) -> Result<Vec<Agent>, ConsoleError>;

    async fn create_agent(&self, token: &str, draft: &AgentDraft) -> Result<(), ConsoleError>;

    async fn update_agent(
        &self,
        token: &str,
        id: &AgentId,
        draft: &AgentDraft,
    ) -> Result<(), ConsoleError>;

    async fn delete_agent(&self, token: &str, id: &AgentId) -> Result<(), ConsoleError>;

    /// `POST /api/lists/upload`. Returns the backend's confirmation message.
    async fn upload_list(&self, token: &str, file: &UploadFile) -> Result<String, ConsoleError>;

    async fn distributed_tasks(&self, token: &str) -> Result<Vec<Task>, ConsoleError>;

    async fn my_tasks(&self, token: &str) -> Result<Vec<Task>, ConsoleError>;

    async fn update_task_status(
        &self,
        token: &str,
        id: &TaskId,
        status: &TaskStatus,
    ) -> Result<(), ConsoleError>;
}

/// A spreadsheet read from disk, ready for multipart upload.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadFile {
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    /// Check the extension and read the file. Column layout (`FirstName`,
    /// `Phone`, `Notes`) is the backend's business and is not inspected.
    pub async fn read(path: &Path) -> Result<Self, ValidationError> {
        let mime_type = mime_for_path(path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or(ValidationError::NoFileSelected)?;
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| ValidationError::FileUnreadable {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            file_name,
            mime_type,
            bytes,
        })
    }
}

/// Validate the path typed into the upload panel.
pub fn upload_path(input: &str) -> Result<PathBuf, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::NoFileSelected);
    }
    let path = PathBuf::from(trimmed);
    mime_for_path(&path)?;
    Ok(path)
}

fn mime_for_path(path: &Path) -> Result<&'static str, ValidationError> {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "csv" => Ok("text/csv"),
        "xls" => Ok("application/vnd.ms-excel"),
        "xlsx" => Ok("application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"),
        _ => Err(ValidationError::UnsupportedFileType(
            path.display().to_string(),
        )),
    }
}
