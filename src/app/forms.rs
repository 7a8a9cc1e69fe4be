//! Editable form state for the login, agent and upload panels.
//!
//! Forms keep their contents when a submission fails and are reset by the
//! update function once the backend confirms success.

use std::fmt;

use crate::error::ValidationError;
use crate::model::{Agent, AgentDraft, AgentId};

/// Single-line text input.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct TextField {
    pub value: String,
    pub masked: bool,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn masked() -> Self {
        Self {
            value: String::new(),
            masked: true,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn push(&mut self, c: char) {
        self.value.push(c);
    }

    pub fn pop(&mut self) {
        self.value.pop();
    }

    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    /// Text as drawn on screen; masked fields show one `*` per character.
    pub fn display(&self) -> String {
        if self.masked {
            "*".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }
}

impl fmt::Debug for TextField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.masked {
            write!(f, "TextField(<{} chars>)", self.value.chars().count())
        } else {
            write!(f, "TextField({:?})", self.value)
        }
    }
}

fn required(field: &TextField, name: &'static str) -> Result<String, ValidationError> {
    if field.is_blank() {
        Err(ValidationError::MissingField(name))
    } else {
        Ok(field.value.trim().to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginForm {
    pub email: TextField,
    pub password: TextField,
    pub focus: usize,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginForm {
    pub const LABELS: [&'static str; 2] = ["Email", "Password"];

    pub fn new() -> Self {
        Self {
            email: TextField::new(),
            password: TextField::masked(),
            focus: 0,
        }
    }

    pub fn fields(&self) -> [&TextField; 2] {
        [&self.email, &self.password]
    }

    pub fn focused_mut(&mut self) -> &mut TextField {
        match self.focus {
            0 => &mut self.email,
            _ => &mut self.password,
        }
    }

    pub fn next_field(&mut self) {
        self.focus = (self.focus + 1) % Self::LABELS.len();
    }

    pub fn prev_field(&mut self) {
        self.focus = (self.focus + Self::LABELS.len() - 1) % Self::LABELS.len();
    }

    /// Credentials ready to send. The password is passed through untrimmed.
    pub fn credentials(&self) -> Result<(String, String), ValidationError> {
        let email = required(&self.email, "Email")?;
        if self.password.value.is_empty() {
            return Err(ValidationError::MissingField("Password"));
        }
        Ok((email, self.password.value.clone()))
    }
}

/// Add/edit agent form. `editing` holds the id of the agent being updated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentForm {
    pub editing: Option<AgentId>,
    pub name: TextField,
    pub email: TextField,
    pub mobile: TextField,
    pub password: TextField,
    pub confirm: TextField,
    pub focus: usize,
}

impl Default for AgentForm {
    fn default() -> Self {
        Self::new()
    }
}

impl AgentForm {
    pub const LABELS: [&'static str; 5] = [
        "Name",
        "Email",
        "Mobile Number (with country code)",
        "Password",
        "Confirm Password",
    ];

    pub fn new() -> Self {
        Self {
            editing: None,
            name: TextField::new(),
            email: TextField::new(),
            mobile: TextField::new(),
            password: TextField::masked(),
            confirm: TextField::masked(),
            focus: 0,
        }
    }

    /// Pre-fill from an existing agent. Passwords are never pre-filled.
    pub fn edit(agent: &Agent) -> Self {
        Self {
            editing: Some(agent.id.clone()),
            name: TextField::new().with_value(agent.name.clone()),
            email: TextField::new().with_value(agent.email.clone()),
            mobile: TextField::new().with_value(agent.mobile.clone()),
            ..Self::new()
        }
    }

    pub fn is_edit(&self) -> bool {
        self.editing.is_some()
    }

    pub fn title(&self) -> &'static str {
        if self.is_edit() {
            "Edit Agent"
        } else {
            "Add New Agent"
        }
    }

    pub fn fields(&self) -> [&TextField; 5] {
        [
            &self.name,
            &self.email,
            &self.mobile,
            &self.password,
            &self.confirm,
        ]
    }

    pub fn focused_mut(&mut self) -> &mut TextField {
        match self.focus {
            0 => &mut self.name,
            1 => &mut self.email,
            2 => &mut self.mobile,
            3 => &mut self.password,
            _ => &mut self.confirm,
        }
    }

    pub fn next_field(&mut self) {
        self.focus = (self.focus + 1) % Self::LABELS.len();
    }

    pub fn prev_field(&mut self) {
        self.focus = (self.focus + Self::LABELS.len() - 1) % Self::LABELS.len();
    }

    /// Build the request body. A blank password on edit means "unchanged"
    /// and is left out; on creation it is required.
    pub fn to_draft(&self) -> Result<AgentDraft, ValidationError> {
        let name = required(&self.name, "Name")?;
        let email = required(&self.email, "Email")?;
        let mobile = required(&self.mobile, "Mobile")?;

        if self.password.value != self.confirm.value {
            return Err(ValidationError::PasswordMismatch);
        }

        let draft = AgentDraft::new(name, email, mobile);
        match (self.password.value.is_empty(), self.is_edit()) {
            (true, true) => Ok(draft),
            (true, false) => Err(ValidationError::PasswordRequired),
            (false, _) => Ok(draft.with_password(self.password.value.clone())),
        }
    }
}

/// File picker for the upload panel: a typed path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadForm {
    pub path: TextField,
    pub editing: bool,
}
