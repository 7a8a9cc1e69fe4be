//! Session guard: the single holder of the authenticated principal.
//!
//! The guard is an explicit object handed to whoever needs it (shared with
//! `Arc`). It persists the raw login response through a `SessionStore` so a
//! restart, or another console of the same user, re-hydrates the session.

pub mod access;
mod store;

pub use access::{check, evaluate, resolve, AccessState, Route};
pub use store::{FileSessionStore, MemorySessionStore, SessionStore};

use std::sync::Arc;

use crate::api::LeadsApi;
use crate::error::{ConsoleError, ParseError};
use crate::model::{Principal, Role};

pub struct SessionGuard {
    store: Arc<dyn SessionStore>,
}

impl SessionGuard {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Exchange credentials for a principal and persist the full response.
    /// Nothing is written unless the response carries a token.
    pub async fn login(
        &self,
        api: &dyn LeadsApi,
        email: &str,
        password: &str,
    ) -> Result<Principal, ConsoleError> {
        let raw = api.login(email, password).await?;

        let principal = Principal::from_login_response(&raw).map_err(|e| match e {
            ParseError::MissingToken => {
                ConsoleError::Authentication("Login response did not include a token".to_string())
            }
            ParseError::Json(detail) => {
                tracing::warn!(%detail, "unparseable login response");
                ConsoleError::Authentication("Unexpected login response from server".to_string())
            }
        })?;

        self.store.write(&raw)?;
        tracing::info!(role = %principal.role, user = %principal.id, "session stored");
        Ok(principal)
    }

    /// Forget the session. Local only: the token is not revoked server-side.
    pub fn logout(&self) {
        match self.store.clear() {
            Ok(()) => tracing::info!("session cleared"),
            Err(e) => tracing::warn!(error = %e, "failed to clear session"),
        }
    }

    /// Read the stored principal. Missing, unreadable or malformed contents
    /// all mean "not logged in".
    pub fn current_principal(&self) -> Option<Principal> {
        let raw = match self.store.read() {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(error = %e, "session store unreadable");
                return None;
            }
        };

        match Principal::from_login_response(&raw) {
            Ok(principal) => Some(principal),
            Err(e) => {
                tracing::debug!(error = %e, "ignoring malformed stored session");
                None
            }
        }
    }

    /// Principal for a bearer call; fails without touching the network when
    /// nobody is logged in.
    pub fn require_principal(&self) -> Result<Principal, ConsoleError> {
        self.current_principal().ok_or_else(ConsoleError::not_logged_in)
    }
}

/// `true` when a principal is present and, if roles are given, holds one of
/// them. `None` roles means any authenticated principal.
pub fn authorize(principal: Option<&Principal>, allowed_roles: Option<&[Role]>) -> bool {
    match (principal, allowed_roles) {
        (None, _) => false,
        (Some(_), None) => true,
        (Some(p), Some(roles)) => roles.contains(&p.role),
    }
}
