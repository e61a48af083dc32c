//! # Task Store
//!
//! Keeps every task as one JSON element of a single list under [`TASKS_KEY`].
//! List order is insertion order and is also the display order.
//!
//! Mutations other than `add` read the whole list, drop the key and push the
//! whole list back. Nothing guards the window between the read and the
//! rewrite: a concurrent `add`, `toggle` or `delete` that lands inside it is
//! overwritten, and the last rewrite of the key wins.

use super::model::{Task, TaskId};
use crate::logging::log_task_operation;
use crate::store::{ListStore, StoreError, StoreProvider, StoreResult};
use tracing::debug;

/// Key holding the task list
pub const TASKS_KEY: &str = "tasks";

/// List-backed task repository
#[derive(Debug, Clone)]
pub struct TaskStore<S: ListStore = StoreProvider> {
    store: S,
    key: String,
}

impl<S: ListStore> TaskStore<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, TASKS_KEY)
    }

    /// Use a different list key (tests isolate themselves this way)
    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &S {
        &self.store
    }

    /// All tasks in stored order
    pub async fn list(&self) -> StoreResult<Vec<Task>> {
        let raw = self.store.range_all(&self.key).await?;
        raw.iter().map(|record| decode(record)).collect()
    }

    /// Append a new task to the tail of the list
    ///
    /// Callers are expected to have trimmed and rejected empty titles
    /// (see [`super::normalize_title`]).
    pub async fn add(&self, title: &str) -> StoreResult<Task> {
        let task = Task::new(title);
        self.store.push(&self.key, &[encode(&task)?]).await?;

        log_task_operation("add", Some(task.id), "created", Some(&task.title));
        Ok(task)
    }

    /// Flip `completed` on the task with `id`
    ///
    /// Returns whether any task matched. An unknown id rewrites the list
    /// unchanged.
    pub async fn toggle(&self, id: TaskId) -> StoreResult<bool> {
        let mut tasks = self.list().await?;
        let mut matched = false;

        for task in tasks.iter_mut().filter(|task| task.matches(id)) {
            task.toggle();
            matched = true;
        }

        self.rewrite(&tasks).await?;

        log_task_operation(
            "toggle",
            Some(id.value()),
            if matched { "toggled" } else { "not_found" },
            None,
        );
        Ok(matched)
    }

    /// Remove the task with `id`
    ///
    /// Returns whether any task was removed. An unknown id leaves the list
    /// as it was.
    pub async fn delete(&self, id: TaskId) -> StoreResult<bool> {
        let tasks = self.list().await?;
        let before = tasks.len();
        let remaining: Vec<Task> = tasks.into_iter().filter(|task| !task.matches(id)).collect();
        let removed = remaining.len() != before;

        self.rewrite(&remaining).await?;

        log_task_operation(
            "delete",
            Some(id.value()),
            if removed { "deleted" } else { "not_found" },
            None,
        );
        Ok(removed)
    }

    /// Check that the backing store answers
    pub async fn ping(&self) -> StoreResult<bool> {
        self.store.ping().await
    }

    /// Replace the whole list with `tasks`
    async fn rewrite(&self, tasks: &[Task]) -> StoreResult<()> {
        let records = tasks.iter().map(encode).collect::<StoreResult<Vec<_>>>()?;

        self.store.delete(&self.key).await?;
        self.store.push(&self.key, &records).await?;

        debug!(key = %self.key, len = records.len(), "Task list rewritten");
        Ok(())
    }
}

fn encode(task: &Task) -> StoreResult<String> {
    serde_json::to_string(task).map_err(|e| {
        StoreError::SerializationError(format!("Failed to encode task {}: {}", task.id, e))
    })
}

fn decode(record: &str) -> StoreResult<Task> {
    serde_json::from_str(record)
        .map_err(|e| StoreError::SerializationError(format!("Failed to decode task record: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryListStore;

    fn memory_store() -> (TaskStore<InMemoryListStore>, InMemoryListStore) {
        let backend = InMemoryListStore::new();
        (TaskStore::new(backend.clone()), backend)
    }

    #[tokio::test]
    async fn test_add_then_list() {
        let (store, _) = memory_store();
        store.add("Buy milk").await.unwrap();

        let tasks = store.list().await.unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "Buy milk");
        assert!(!tasks[0].completed);
        assert!(!tasks[0].created_at.is_empty());
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let (store, _) = memory_store();
        for title in ["first", "second", "third"] {
            store.add(title).await.unwrap();
        }

        let titles: Vec<String> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.title)
            .collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_toggle_twice_restores_state() {
        let (store, _) = memory_store();
        let task = store.add("Walk dog").await.unwrap();

        assert!(store.toggle(task.task_id()).await.unwrap());
        assert!(store.list().await.unwrap()[0].completed);

        assert!(store.toggle(task.task_id()).await.unwrap());
        assert!(!store.list().await.unwrap()[0].completed);
    }

    #[tokio::test]
    async fn test_toggle_keeps_order_and_other_tasks() {
        let (store, _) = memory_store();
        let a = store.add("a").await.unwrap();
        let b = store.add("b").await.unwrap();
        let c = store.add("c").await.unwrap();

        store.toggle(b.task_id()).await.unwrap();

        let tasks = store.list().await.unwrap();
        assert_eq!(
            tasks.iter().map(|t| t.id).collect::<Vec<_>>(),
            vec![a.id, b.id, c.id]
        );
        assert_eq!(
            tasks.iter().map(|t| t.completed).collect::<Vec<_>>(),
            vec![false, true, false]
        );
    }

    #[tokio::test]
    async fn test_delete_removes_only_matching_task() {
        let (store, _) = memory_store();
        let a = store.add("a").await.unwrap();
        let b = store.add("b").await.unwrap();

        assert!(store.delete(a.task_id()).await.unwrap());

        let tasks = store.list().await.unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, b.id);
    }

    #[tokio::test]
    async fn test_unknown_id_is_a_no_op() {
        let (store, _) = memory_store();
        store.add("keep me").await.unwrap();
        let before = store.list().await.unwrap();

        let missing = TaskId::from(1.5);
        assert!(!store.toggle(missing).await.unwrap());
        assert!(!store.delete(missing).await.unwrap());

        assert_eq!(store.list().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_deleting_last_task_leaves_empty_list() {
        let (store, backend) = memory_store();
        let task = store.add("only").await.unwrap();

        store.delete(task.task_id()).await.unwrap();

        assert!(store.list().await.unwrap().is_empty());
        assert!(backend.range_all(TASKS_KEY).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_records_are_json_objects() {
        let (store, backend) = memory_store();
        store.add("Buy milk").await.unwrap();

        let raw = backend.range_all(TASKS_KEY).await.unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw[0]).unwrap();
        assert_eq!(value["title"], "Buy milk");
        assert_eq!(value["completed"], false);
        assert!(value["id"].is_f64());
    }

    #[tokio::test]
    async fn test_corrupt_record_is_a_serialization_error() {
        let (store, backend) = memory_store();
        backend
            .push(TASKS_KEY, &["not json".to_string()])
            .await
            .unwrap();

        let result = store.list().await;
        assert!(matches!(result, Err(StoreError::SerializationError(_))));
    }

    #[tokio::test]
    async fn test_unreachable_store_propagates_connection_error() {
        let (store, backend) = memory_store();
        backend.set_reachable(false);

        assert!(store.list().await.unwrap_err().is_connection_error());
        assert!(store.add("x").await.unwrap_err().is_connection_error());
    }

    #[tokio::test]
    async fn test_custom_key_isolates_lists() {
        let backend = InMemoryListStore::new();
        let first = TaskStore::with_key(backend.clone(), "tasks:one");
        let second = TaskStore::with_key(backend, "tasks:two");

        first.add("only in first").await.unwrap();

        assert_eq!(first.list().await.unwrap().len(), 1);
        assert!(second.list().await.unwrap().is_empty());
    }
}
