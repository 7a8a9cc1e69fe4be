#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use lead_console::api::{LeadsApi, UploadFile};
use lead_console::error::ConsoleError;
use lead_console::model::{Agent, AgentDraft, AgentId, Task, TaskId, TaskStatus};

pub const ADMIN_LOGIN: &str =
    r#"{"_id":"u1","name":"Ada","email":"ada@x.io","role":"admin","token":"tok-admin"}"#;
pub const AGENT_LOGIN: &str =
    r#"{"_id":"u2","name":"Bo","email":"bo@x.io","role":"agent","token":"tok-agent"}"#;

/// In-memory backend that records every call.
#[derive(Default)]
pub struct FakeApi {
    pub login_body: Mutex<Option<String>>,
    pub agents: Mutex<Vec<Agent>>,
    pub tasks: Mutex<Vec<Task>>,
    pub fail_with: Mutex<Option<ConsoleError>>,
    pub calls: Mutex<Vec<String>>,
}

impl FakeApi {
    pub fn with_login(body: &str) -> Self {
        let api = Self::default();
        *api.login_body.lock().unwrap() = Some(body.to_string());
        api
    }

    pub fn failing(error: ConsoleError) -> Self {
        let api = Self::default();
        *api.fail_with.lock().unwrap() = Some(error);
        api
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) -> Result<(), ConsoleError> {
        self.calls.lock().unwrap().push(call);
        match self.fail_with.lock().unwrap().clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl LeadsApi for FakeApi {
    async fn login(&self, email: &str, _password: &str) -> Result<String, ConsoleError> {
        self.record(format!("login:{email}"))?;
        self.login_body
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| ConsoleError::Authentication("Invalid credentials".into()))
    }

    async fn list_agents(&self, token: &str) -> Result<Vec<Agent>, ConsoleError> {
        self.record(format!("list_agents:{token}"))?;
        Ok(self.agents.lock().unwrap().clone())
    }

    async fn create_agent(&self, token: &str, draft: &AgentDraft) -> Result<(), ConsoleError> {
        self.record(format!("create_agent:{token}:{}", draft.email))
    }

    async fn update_agent(
        &self,
        token: &str,
        id: &AgentId,
        _draft: &AgentDraft,
    ) -> Result<(), ConsoleError> {
        self.record(format!("update_agent:{token}:{id}"))
    }

    async fn delete_agent(&self, token: &str, id: &AgentId) -> Result<(), ConsoleError> {
        self.record(format!("delete_agent:{token}:{id}"))
    }

    async fn upload_list(&self, token: &str, file: &UploadFile) -> Result<String, ConsoleError> {
        self.record(format!("upload_list:{token}:{}", file.file_name))?;
        Ok("List uploaded and distributed successfully!".into())
    }

    async fn distributed_tasks(&self, token: &str) -> Result<Vec<Task>, ConsoleError> {
        self.record(format!("distributed_tasks:{token}"))?;
        Ok(self.tasks.lock().unwrap().clone())
    }

    async fn my_tasks(&self, token: &str) -> Result<Vec<Task>, ConsoleError> {
        self.record(format!("my_tasks:{token}"))?;
        Ok(self.tasks.lock().unwrap().clone())
    }

    async fn update_task_status(
        &self,
        token: &str,
        id: &TaskId,
        status: &TaskStatus,
    ) -> Result<(), ConsoleError> {
        self.record(format!("update_task_status:{token}:{id}:{status}"))
    }
}
