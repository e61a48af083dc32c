//! Task record and identifier types

use chrono::{DateTime, Local, TimeDelta};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicI64, Ordering};

/// Format of `created_at`: local time, microsecond precision, no offset
const LOCAL_ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Microsecond timestamp of the last task created by this process
static LAST_ISSUED_MICROS: AtomicI64 = AtomicI64::new(0);

/// A single to-do item as stored in the task list
///
/// The serialized form is the JSON object kept as one list element in the
/// store and returned verbatim by `/api/tasks`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Creation time in fractional seconds since the Unix epoch
    pub id: f64,
    pub title: String,
    pub completed: bool,
    pub created_at: String,
}

impl Task {
    /// Build a new, incomplete task stamped with the current local time
    ///
    /// Within one process every call gets a distinct id, even when two
    /// tasks are created in the same microsecond.
    pub fn new(title: impl Into<String>) -> Self {
        Self::created_at(title, next_creation_instant())
    }

    /// Build a new, incomplete task stamped with `now`
    pub fn created_at(title: impl Into<String>, now: DateTime<Local>) -> Self {
        Self {
            id: timestamp_id(&now),
            title: title.into(),
            completed: false,
            created_at: local_iso_timestamp(&now),
        }
    }

    pub fn task_id(&self) -> TaskId {
        TaskId(self.id)
    }

    pub fn matches(&self, id: TaskId) -> bool {
        self.id == id.0
    }

    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

/// Current local time, nudged forward so it is strictly later (at
/// microsecond resolution) than any instant handed out before
fn next_creation_instant() -> DateTime<Local> {
    let now = Local::now();
    let micros = now.timestamp_micros();
    let mut last = LAST_ISSUED_MICROS.load(Ordering::SeqCst);

    loop {
        let next = micros.max(last + 1);
        match LAST_ISSUED_MICROS.compare_exchange_weak(
            last,
            next,
            Ordering::SeqCst,
            Ordering::SeqCst,
        ) {
            Ok(_) => return now + TimeDelta::microseconds(next - micros),
            Err(actual) => last = actual,
        }
    }
}

/// Local wall-clock time as `YYYY-MM-DDTHH:MM:SS.ffffff`
pub fn local_iso_timestamp(now: &DateTime<Local>) -> String {
    now.naive_local().format(LOCAL_ISO_FORMAT).to_string()
}

/// Seconds since the epoch with microsecond resolution
fn timestamp_id(now: &DateTime<Local>) -> f64 {
    now.timestamp() as f64 + f64::from(now.timestamp_subsec_micros()) / 1_000_000.0
}

/// Identifier of a task as addressed in URLs
///
/// Parsed numerically so `1700000000` and `1700000000.0` name the same task.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaskId(f64);

impl TaskId {
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl From<f64> for TaskId {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when a path segment is not a task id
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid task id: {0}")]
pub struct InvalidTaskId(pub String);

impl FromStr for TaskId {
    type Err = InvalidTaskId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Self(value)),
            _ => Err(InvalidTaskId(s.to_string())),
        }
    }
}

/// Trim a user-supplied title, returning `None` when nothing is left
pub fn normalize_title(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
