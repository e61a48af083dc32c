//! # Task List
//!
//! The to-do list domain: the [`Task`] record and the [`TaskStore`] that
//! keeps tasks as one ordered list in the key-value store.

pub mod model;
pub mod store;

pub use model::{local_iso_timestamp, normalize_title, InvalidTaskId, Task, TaskId};
pub use store::{TaskStore, TASKS_KEY};
