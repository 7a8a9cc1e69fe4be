use async_trait::async_trait;
use reqwest::{multipart, Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{LeadsApi, UploadFile};
use crate::error::ConsoleError;
use crate::model::{Agent, AgentDraft, AgentId, Task, TaskId, TaskStatus};

/// Default backend location, matching the backend's development port.
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

const UPLOAD_FALLBACK_MESSAGE: &str = "List uploaded and distributed successfully!";

/// reqwest-backed client for the leads backend.
///
/// No request timeout and no retries: a hung request stays pending until the
/// backend answers or the console exits.
#[derive(Debug, Clone)]
pub struct HttpLeadsApi {
    base_url: String,
    client: Client,
}

impl HttpLeadsApi {
    pub fn new(base_url: &str) -> Result<Self, ConsoleError> {
        let client = Client::builder()
            .build()
            .map_err(|e| ConsoleError::NetworkOrServer(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client.request(method, self.url(path))
    }

    fn authed(&self, method: Method, path: &str, token: &str) -> RequestBuilder {
        self.request(method, path).bearer_auth(token)
    }

    /// Send once and map any failure into the console taxonomy.
    async fn send(&self, request: RequestBuilder) -> Result<Response, ConsoleError> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!(error = %e, "backend unreachable");
            ConsoleError::network()
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.bytes().await.unwrap_or_default();
        let message = message_from_error_body(status.as_u16(), &body);
        tracing::warn!(status = status.as_u16(), %message, "backend rejected request");

        if status == StatusCode::UNAUTHORIZED {
            Err(ConsoleError::Authentication(message))
        } else {
            Err(ConsoleError::NetworkOrServer(message))
        }
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ConsoleError> {
        let response = self.send(request).await?;
        response
            .json()
            .await
            .map_err(|e| ConsoleError::NetworkOrServer(format!("Unexpected response from server: {e}")))
    }
}

/// Pick the user-visible text out of an error response: the backend's
/// `message` field when present, a status line otherwise.
pub fn message_from_error_body(status: u16, body: &[u8]) -> String {
    serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string))
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("Request failed with status code {status}"))
}

#[async_trait]
impl LeadsApi for HttpLeadsApi {
    async fn login(&self, email: &str, password: &str) -> Result<String, ConsoleError> {
        let request = self
            .request(Method::POST, "/api/auth/login")
            .json(&serde_json::json!({ "email": email, "password": password }));

        let response = self.send(request).await.map_err(|e| match e {
            ConsoleError::NetworkOrServer(message) => ConsoleError::Authentication(message),
            other => other,
        })?;

        response
            .text()
            .await
            .map_err(|_| ConsoleError::network())
    }

    async fn list_agents(&self, token: &str) -> Result<Vec<Agent>, ConsoleError> {
        self.send_json(self.authed(Method::GET, "/api/agents/", token))
            .await
    }

    async fn create_agent(&self, token: &str, draft: &AgentDraft) -> Result<(), ConsoleError> {
        let request = self.authed(Method::POST, "/api/agents/", token).json(draft);
        self.send(request).await.map(|_| ())
    }

    async fn update_agent(
        &self,
        token: &str,
        id: &AgentId,
        draft: &AgentDraft,
    ) -> Result<(), ConsoleError> {
        let request = self
            .authed(Method::PUT, &format!("/api/agents/{id}"), token)
            .json(draft);
        self.send(request).await.map(|_| ())
    }

    async fn delete_agent(&self, token: &str, id: &AgentId) -> Result<(), ConsoleError> {
        let request = self.authed(Method::DELETE, &format!("/api/agents/{id}"), token);
        self.send(request).await.map(|_| ())
    }

    async fn upload_list(&self, token: &str, file: &UploadFile) -> Result<String, ConsoleError> {
        let part = multipart::Part::bytes(file.bytes.clone())
            .file_name(file.file_name.clone())
            .mime_str(file.mime_type)
            .map_err(|e| ConsoleError::NetworkOrServer(e.to_string()))?;
        let form = multipart::Form::new().part("file", part);

        let body: Value = self
            .send_json(self.authed(Method::POST, "/api/lists/upload", token).multipart(form))
            .await?;

        Ok(body
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| UPLOAD_FALLBACK_MESSAGE.to_string()))
    }

    async fn distributed_tasks(&self, token: &str) -> Result<Vec<Task>, ConsoleError> {
        self.send_json(self.authed(Method::GET, "/api/lists/distributed", token))
            .await
    }

    async fn my_tasks(&self, token: &str) -> Result<Vec<Task>, ConsoleError> {
        self.send_json(self.authed(Method::GET, "/api/lists/my-tasks", token))
            .await
    }

    async fn update_task_status(
        &self,
        token: &str,
        id: &TaskId,
        status: &TaskStatus,
    ) -> Result<(), ConsoleError> {
        let request = self
            .authed(Method::PUT, &format!("/api/lists/tasks/{id}/status"), token)
            .json(&serde_json::json!({ "status": status }));
        self.send(request).await.map(|_| ())
    }
}
