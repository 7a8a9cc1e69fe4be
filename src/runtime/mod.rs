//! Executes `Command`s queued by `update`.
//!
//! The access gate runs synchronously so the UI never renders a protected
//! view for a missing principal. Everything that touches the network is
//! spawned on tokio and reports back as an `AppEvent` on the channel the
//! event loop drains.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;

use crate::api::{LeadsApi, UploadFile};
use crate::app::Command;
use crate::error::ConsoleError;
use crate::event::{AppEvent, Origin};
use crate::session::{check, resolve, Route, SessionGuard};

pub struct Dispatcher {
    api: Arc<dyn LeadsApi>,
    session: Arc<SessionGuard>,
    tx: UnboundedSender<AppEvent>,
}

impl Dispatcher {
    pub fn new(
        api: Arc<dyn LeadsApi>,
        session: Arc<SessionGuard>,
        tx: UnboundedSender<AppEvent>,
    ) -> Self {
        Self { api, session, tx }
    }

    /// Run one command. Must be called inside a tokio runtime context.
    pub fn dispatch(&self, command: Command) {
        tracing::debug!(command = command.name(), "dispatch");

        match command {
            Command::Navigate(route) => self.navigate(route),

            Command::Logout => {
                self.session.logout();
                self.navigate(Route::Login);
            }

            Command::Login { email, password } => {
                let api = Arc::clone(&self.api);
                let session = Arc::clone(&self.session);
                let tx = self.tx.clone();
                tokio::spawn(async move {
                    let event = match session.login(api.as_ref(), &email, password.expose()).await {
                        Ok(principal) => AppEvent::LoggedIn(principal),
                        Err(error) => failed(Origin::Login, error),
                    };
                    send(&tx, event);
                });
            }

            Command::FetchAgents => self.spawn_authed(Origin::Agents, |api, token| async move {
                api.list_agents(&token).await.map(AppEvent::AgentsLoaded)
            }),

            Command::CreateAgent(draft) => {
                self.spawn_authed(Origin::AgentSave, |api, token| async move {
                    api.create_agent(&token, &draft).await?;
                    Ok(AppEvent::AgentSaved { created: true })
                })
            }

            Command::UpdateAgent(id, draft) => {
                self.spawn_authed(Origin::AgentSave, |api, token| async move {
                    api.update_agent(&token, &id, &draft).await?;
                    Ok(AppEvent::AgentSaved { created: false })
                })
            }

            Command::DeleteAgent(id) => {
                self.spawn_authed(Origin::AgentDelete, |api, token| async move {
                    api.delete_agent(&token, &id).await?;
                    Ok(AppEvent::AgentDeleted)
                })
            }

            Command::UploadList(path) => self.spawn_authed(Origin::Upload, |api, token| async move {
                let file = UploadFile::read(&path).await?;
                tracing::info!(file = %file.file_name, bytes = file.bytes.len(), "uploading list");
                api.upload_list(&token, &file).await.map(AppEvent::ListUploaded)
            }),

            Command::FetchDistributed => {
                self.spawn_authed(Origin::Distributed, |api, token| async move {
                    api.distributed_tasks(&token)
                        .await
                        .map(AppEvent::DistributedLoaded)
                })
            }

            Command::FetchMyTasks => self.spawn_authed(Origin::MyTasks, |api, token| async move {
                api.my_tasks(&token).await.map(AppEvent::MyTasksLoaded)
            }),

            Command::UpdateTaskStatus(id, status) => {
                self.spawn_authed(Origin::TaskStatus, |api, token| async move {
                    api.update_task_status(&token, &id, &status).await?;
                    Ok(AppEvent::TaskStatusUpdated)
                })
            }
        }
    }

    /// Access gate: read the stored principal and report the route that may
    /// actually be shown.
    fn navigate(&self, requested: Route) {
        let principal = self.session.current_principal();
        let route = resolve(principal.as_ref(), requested);
        if route != requested {
            match check(principal.as_ref(), requested) {
                Err(reason) => {
                    tracing::info!(?requested, granted = ?route, %reason, "route redirected")
                }
                Ok(()) => tracing::info!(?requested, granted = ?route, "route redirected"),
            }
        }
        send(&self.tx, AppEvent::RouteResolved { principal, route });
    }

    /// Spawn a bearer call. Without a stored principal the call is never
    /// issued and an authentication failure is reported instead.
    fn spawn_authed<F, Fut>(&self, origin: Origin, call: F)
    where
        F: FnOnce(Arc<dyn LeadsApi>, String) -> Fut + Send + 'static,
        Fut: Future<Output = Result<AppEvent, ConsoleError>> + Send + 'static,
    {
        let principal = match self.session.require_principal() {
            Ok(principal) => principal,
            Err(error) => {
                send(&self.tx, failed(origin, error));
                return;
            }
        };

        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let event = call(api, principal.token)
                .await
                .unwrap_or_else(|error| failed(origin, error));
            send(&tx, event);
        });
    }
}

fn failed(origin: Origin, error: ConsoleError) -> AppEvent {
    tracing::warn!(?origin, %error, "command failed");
    AppEvent::Failed { origin, error }
}

fn send(tx: &UnboundedSender<AppEvent>, event: AppEvent) {
    if tx.send(event).is_err() {
        tracing::debug!("event channel closed; dropping result");
    }
}
