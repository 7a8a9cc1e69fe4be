use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::api::upload_path;
use crate::app::command::{Command, Secret};
use crate::app::forms::{AgentForm, TextField};
use crate::app::state::{AppState, Banner};
use crate::app::update::queue_fetch;
use crate::error::ValidationError;
use crate::model::TaskStatus;
use crate::session::Route;

/// Pure key handler.
/// Takes current state + keyboard event, returns new state with any
/// resulting commands queued. No I/O, fully unit testable.
pub fn handle_key(mut state: AppState, key: KeyEvent) -> AppState {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        state.should_quit = true;
        return state;
    }

    // Help overlay has priority
    if state.show_help {
        state.show_help = false;
        return state;
    }

    if state.confirm_delete.is_some() {
        return handle_confirm_key(state, key);
    }

    if state.route == Route::Login {
        return handle_login_key(state, key);
    }

    if state.agent_form.is_some() {
        return handle_agent_form_key(state, key);
    }

    if state.upload.editing {
        return handle_upload_path_key(state, key);
    }

    match key.code {
        KeyCode::Char('q') => {
            state.should_quit = true;
            state
        }
        KeyCode::Char('?') => {
            state.show_help = true;
            state
        }
        KeyCode::Char('x') => {
            state.banner = None;
            state
        }
        KeyCode::Char('L') => {
            state.banner = None;
            state.commands.push(Command::Logout);
            state
        }
        KeyCode::Char('r') => queue_fetch(state),
        KeyCode::Char(c @ '1'..='9') => select_menu_entry(state, c),
        KeyCode::Char('j') | KeyCode::Down => scroll_down(state),
        KeyCode::Char('k') | KeyCode::Up => scroll_up(state),
        _ => match state.route {
            Route::AgentManagement => handle_agents_key(state, key),
            Route::UploadList => handle_upload_key(state, key),
            Route::MyTasks => handle_my_tasks_key(state, key),
            Route::Login | Route::Dashboard | Route::DistributedLists => state,
        },
    }
}

/// Digits pick from the role's navigation menu (1-based).
fn select_menu_entry(mut state: AppState, digit: char) -> AppState {
    let Some(principal) = state.principal.as_ref() else {
        return state;
    };
    let index = digit.to_digit(10).unwrap_or(0) as usize;
    if let Some(route) = index
        .checked_sub(1)
        .and_then(|i| Route::menu(principal.role).get(i))
    {
        state.commands.push(Command::Navigate(*route));
    }
    state
}

fn scroll_down(mut state: AppState) -> AppState {
    match state.route {
        Route::AgentManagement => {
            if !state.agents.is_empty() {
                let current = state.selected_agent_index.unwrap_or(0);
                state.selected_agent_index = Some((current + 1).min(state.agents.len() - 1));
            }
        }
        Route::MyTasks => {
            if !state.my_tasks.is_empty() {
                let current = state.selected_task_index.unwrap_or(0);
                state.selected_task_index = Some((current + 1).min(state.my_tasks.len() - 1));
            }
        }
        Route::DistributedLists => {
            let max_scroll = distributed_height(&state).saturating_sub(1);
            state.distributed_scroll = (state.distributed_scroll + 1).min(max_scroll);
        }
        Route::Login | Route::Dashboard | Route::UploadList => {}
    }
    state
}

fn distributed_height(state: &AppState) -> usize {
    state
        .task_groups
        .iter()
        .map(|group| group.rendered_height())
        .sum()
}

fn scroll_up(mut state: AppState) -> AppState {
    match state.route {
        Route::AgentManagement => {
            if let Some(current) = state.selected_agent_index {
                state.selected_agent_index = Some(current.saturating_sub(1));
            }
        }
        Route::MyTasks => {
            if let Some(current) = state.selected_task_index {
                state.selected_task_index = Some(current.saturating_sub(1));
            }
        }
        Route::DistributedLists => {
            state.distributed_scroll = state.distributed_scroll.saturating_sub(1);
        }
        Route::Login | Route::Dashboard | Route::UploadList => {}
    }
    state
}

/// y confirms the pending delete, anything else cancels it.
fn handle_confirm_key(mut state: AppState, key: KeyEvent) -> AppState {
    let Some(id) = state.confirm_delete.take() else {
        return state;
    };
    if matches!(key.code, KeyCode::Char('y') | KeyCode::Char('Y')) && !state.loading.deleting_agent {
        state.loading.deleting_agent = true;
        state.commands.push(Command::DeleteAgent(id));
    }
    state
}

/// Apply a text-editing key to a field; other keys are ignored.
fn edit_field(field: &mut TextField, key: KeyEvent) {
    match key.code {
        KeyCode::Backspace => field.pop(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => field.push(c),
        _ => {}
    }
}

fn show_validation(mut state: AppState, error: ValidationError) -> AppState {
    state.banner = Some(Banner::from_message(error.to_string()));
    state
}

fn handle_login_key(mut state: AppState, key: KeyEvent) -> AppState {
    match key.code {
        KeyCode::Esc => {
            state.should_quit = true;
            state
        }
        KeyCode::Tab | KeyCode::Down => {
            state.login.next_field();
            state
        }
        KeyCode::BackTab | KeyCode::Up => {
            state.login.prev_field();
            state
        }
        KeyCode::Enter => {
            if state.loading.login {
                return state;
            }
            match state.login.credentials() {
                Ok((email, password)) => {
                    state.loading.login = true;
                    state.banner = None;
                    state.commands.push(Command::Login {
                        email,
                        password: Secret::new(password),
                    });
                    state
                }
                Err(e) => show_validation(state, e),
            }
        }
        _ => {
            edit_field(state.login.focused_mut(), key);
            state
        }
    }
}

fn handle_agent_form_key(mut state: AppState, key: KeyEvent) -> AppState {
    let Some(form) = state.agent_form.as_mut() else {
        return state;
    };

    match key.code {
        KeyCode::Esc => {
            state.agent_form = None;
            state
        }
        KeyCode::Tab | KeyCode::Down => {
            form.next_field();
            state
        }
        KeyCode::BackTab | KeyCode::Up => {
            form.prev_field();
            state
        }
        KeyCode::Enter => {
            if state.loading.saving_agent {
                return state;
            }
            let command = form.to_draft().map(|draft| match form.editing.clone() {
                Some(id) => Command::UpdateAgent(id, draft),
                None => Command::CreateAgent(draft),
            });
            match command {
                Ok(command) => {
                    state.loading.saving_agent = true;
                    state.banner = None;
                    state.commands.push(command);
                    state
                }
                Err(e) => show_validation(state, e),
            }
        }
        _ => {
            edit_field(form.focused_mut(), key);
            state
        }
    }
}

fn handle_agents_key(mut state: AppState, key: KeyEvent) -> AppState {
    match key.code {
        KeyCode::Char('n') => {
            state.agent_form = Some(AgentForm::new());
        }
        KeyCode::Char('e') | KeyCode::Enter => {
            if let Some(form) = state.selected_agent().map(AgentForm::edit) {
                state.agent_form = Some(form);
            }
        }
        KeyCode::Char('d') => {
            if let Some(id) = state.selected_agent().map(|a| a.id.clone()) {
                state.confirm_delete = Some(id);
            }
        }
        _ => {}
    }
    state
}

fn handle_upload_key(mut state: AppState, key: KeyEvent) -> AppState {
    match key.code {
        KeyCode::Enter | KeyCode::Char('e') => {
            state.upload.editing = true;
            state
        }
        KeyCode::Char('s') => submit_upload(state),
        _ => state,
    }
}

fn handle_upload_path_key(mut state: AppState, key: KeyEvent) -> AppState {
    match key.code {
        KeyCode::Esc => {
            state.upload.editing = false;
            state
        }
        KeyCode::Enter => {
            state.upload.editing = false;
            submit_upload(state)
        }
        _ => {
            edit_field(&mut state.upload.path, key);
            state
        }
    }
}

/// Validate the typed path and queue the upload. Ignored while a previous
/// upload is still running.
fn submit_upload(mut state: AppState) -> AppState {
    if state.loading.upload {
        return state;
    }
    match upload_path(&state.upload.path.value) {
        Ok(path) => {
            state.loading.upload = true;
            state.banner = None;
            state.commands.push(Command::UploadList(path));
            state
        }
        Err(e) => show_validation(state, e),
    }
}

fn handle_my_tasks_key(mut state: AppState, key: KeyEvent) -> AppState {
    let status = match key.code {
        KeyCode::Char('p') => TaskStatus::Pending,
        KeyCode::Char('i') => TaskStatus::InProgress,
        KeyCode::Char('c') => TaskStatus::Completed,
        _ => return state,
    };
    let Some(task) = state.selected_task() else {
        return state;
    };
    if task.status == status {
        return state;
    }
    let id = task.id.clone();
    state.loading.task_status = true;
    state.commands.push(Command::UpdateTaskStatus(id, status));
    state
}
