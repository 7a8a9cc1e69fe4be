use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Agent,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Agent => "agent",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The authenticated user, as returned by `POST /api/auth/login`.
///
/// The session store keeps the raw login response; this struct is the typed
/// view over it. Extra fields in the response are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Principal {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub role: Role,
    pub token: String,
}

impl Principal {
    pub fn new(id: impl Into<String>, name: impl Into<String>, role: Role, token: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: None,
            role,
            token: token.into(),
        }
    }

    /// Parse a login response body. A response without a usable token does
    /// not describe a session and is rejected.
    pub fn from_login_response(raw: &str) -> Result<Self, ParseError> {
        let principal: Principal =
            serde_json::from_str(raw).map_err(|e| ParseError::Json(e.to_string()))?;
        if principal.token.trim().is_empty() {
            return Err(ParseError::MissingToken);
        }
        Ok(principal)
    }
}
