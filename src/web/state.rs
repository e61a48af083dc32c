//! # Web Application State
//!
//! Shared state handed to request handlers of each service.

use crate::store::StoreProvider;
use crate::tasks::TaskStore;
use std::fs;
use tracing::debug;

const HOSTNAME_FILE: &str = "/etc/hostname";

/// State for the task service
///
/// Holds the process-wide store handle; every request shares it.
#[derive(Debug, Clone)]
pub struct TaskWebState {
    pub tasks: TaskStore<StoreProvider>,
}

impl TaskWebState {
    pub fn new(tasks: TaskStore<StoreProvider>) -> Self {
        Self { tasks }
    }

    pub fn from_provider(provider: StoreProvider) -> Self {
        Self::new(TaskStore::new(provider))
    }
}

/// State for the hello service
#[derive(Debug, Clone)]
pub struct HelloWebState {
    pub hostname: String,
    pub version: &'static str,
}

impl HelloWebState {
    pub fn new(hostname: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            version: env!("CARGO_PKG_VERSION"),
        }
    }

    /// Resolve the hostname once from the environment
    pub fn from_environment() -> Self {
        Self::new(resolve_hostname())
    }
}

/// Host identifier: `HOSTNAME`, then `/etc/hostname`, then `"unknown"`
///
/// Container runtimes set `HOSTNAME` to the container id.
pub fn resolve_hostname() -> String {
    let from_env = std::env::var("HOSTNAME").ok();
    let from_file = || fs::read_to_string(HOSTNAME_FILE).ok();
    let hostname = pick_hostname(from_env, from_file);

    debug!(hostname = %hostname, "Resolved hostname");
    hostname
}

fn pick_hostname(from_env: Option<String>, from_file: impl FnOnce() -> Option<String>) -> String {
    let non_empty = |value: String| {
        let trimmed = value.trim().to_string();
        (!trimmed.is_empty()).then_some(trimmed)
    };

    from_env
        .and_then(non_empty)
        .or_else(|| from_file().and_then(non_empty))
        .unwrap_or_else(|| "unknown".to_string())
}
