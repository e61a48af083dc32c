//! # Web Routes
//!
//! Route definitions for both services, grouped by concern.

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::web::handlers;
use crate::web::state::{HelloWebState, TaskWebState};

/// HTML pages and form actions of the task service
pub fn task_page_routes() -> Router<Arc<TaskWebState>> {
    Router::new()
        .route("/", get(handlers::tasks::index))
        .route("/add", post(handlers::tasks::add_task))
        .route("/toggle/{task_id}", get(handlers::tasks::toggle_task))
        .route("/delete/{task_id}", get(handlers::tasks::delete_task))
}

/// JSON API of the task service
pub fn task_api_routes() -> Router<Arc<TaskWebState>> {
    Router::new().route("/api/tasks", get(handlers::tasks::list_tasks))
}

/// Health check of the task service
pub fn task_health_routes() -> Router<Arc<TaskWebState>> {
    Router::new().route("/health", get(handlers::health::task_health))
}

/// Every route of the hello service
pub fn hello_routes() -> Router<Arc<HelloWebState>> {
    Router::new()
        .route("/", get(handlers::hello::index))
        .route("/health", get(handlers::health::hello_health))
}
