//! # Task Handlers
//!
//! HTML and JSON endpoints of the task service. Mutating routes always
//! redirect back to the list page; unknown or malformed ids are ignored.

use askama::Template;
use axum::extract::rejection::FormRejection;
use axum::extract::{Form, Path, State};
use axum::response::{Html, Redirect};
use axum::Json;
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

use crate::tasks::{normalize_title, Task, TaskId};
use crate::web::errors::ApiResult;
use crate::web::state::TaskWebState;
use crate::web::templates::TaskListTemplate;

/// Form body of POST /add
#[derive(Debug, Deserialize)]
pub struct AddTaskForm {
    #[serde(default)]
    pub title: String,
}

/// Task list page: GET /
pub async fn index(State(state): State<Arc<TaskWebState>>) -> ApiResult<Html<String>> {
    let tasks = state.tasks.list().await?;
    Ok(Html(TaskListTemplate::new(&tasks).render()?))
}

/// Add a task: POST /add
///
/// Blank titles are dropped without an error. A body that is not a
/// urlencoded form counts as a missing title.
pub async fn add_task(
    State(state): State<Arc<TaskWebState>>,
    form: Result<Form<AddTaskForm>, FormRejection>,
) -> ApiResult<Redirect> {
    let title = match form {
        Ok(Form(form)) => form.title,
        Err(rejection) => {
            debug!(error = %rejection, "Add request without a form body");
            String::new()
        }
    };

    match normalize_title(&title) {
        Some(title) => {
            state.tasks.add(&title).await?;
        }
        None => debug!("Ignoring task with blank title"),
    }

    Ok(Redirect::to("/"))
}

/// Flip completion: GET /toggle/{task_id}
pub async fn toggle_task(
    State(state): State<Arc<TaskWebState>>,
    Path(task_id): Path<String>,
) -> ApiResult<Redirect> {
    match task_id.parse::<TaskId>() {
        Ok(id) => {
            state.tasks.toggle(id).await?;
        }
        Err(e) => debug!(error = %e, "Ignoring toggle"),
    }

    Ok(Redirect::to("/"))
}

/// Remove a task: GET /delete/{task_id}
pub async fn delete_task(
    State(state): State<Arc<TaskWebState>>,
    Path(task_id): Path<String>,
) -> ApiResult<Redirect> {
    match task_id.parse::<TaskId>() {
        Ok(id) => {
            state.tasks.delete(id).await?;
        }
        Err(e) => debug!(error = %e, "Ignoring delete"),
    }

    Ok(Redirect::to("/"))
}

/// All tasks as JSON: GET /api/tasks
pub async fn list_tasks(State(state): State<Arc<TaskWebState>>) -> ApiResult<Json<Vec<Task>>> {
    Ok(Json(state.tasks.list().await?))
}
