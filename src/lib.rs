#![allow(clippy::doc_markdown)] // Allow technical terms like Redis, JSON in docs
#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections

//! # Demo Services
//!
//! Two small web services for container deployment demos.
//!
//! ## Overview
//!
//! - **hello-service** renders a landing page with the container hostname and
//!   exposes `GET /health`.
//! - **task-service** is a to-do list kept in a single Redis list. It serves
//!   an HTML page with add/toggle/delete actions, a JSON listing at
//!   `/api/tasks` and a store connectivity check at `/health`.
//!
//! ## Module Organization
//!
//! - [`config`] - Environment-driven configuration
//! - [`logging`] - Structured logging setup
//! - [`store`] - Key-value list store abstraction (Redis, in-memory)
//! - [`tasks`] - Task record and list-backed task store
//! - [`web`] - Axum applications, handlers and templates
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use demo_services::store::{InMemoryListStore, StoreProvider};
//! use demo_services::tasks::TaskStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tasks = TaskStore::new(StoreProvider::in_memory(InMemoryListStore::new()));
//! let task = tasks.add("Buy milk").await?;
//! tasks.toggle(task.task_id()).await?;
//! assert!(tasks.list().await?[0].completed);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod logging;
pub mod store;
pub mod tasks;
pub mod web;

pub use config::{AppConfig, ConfigurationError};
pub use store::{ListStore, StoreError, StoreProvider, StoreResult};
pub use tasks::{Task, TaskId, TaskStore};
