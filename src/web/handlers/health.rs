//! # Health Check Handlers
//!
//! Container health endpoints for both services.
//!
//! The task service reports `status: "healthy"` even when its store is
//! unreachable; only the `redis` field reflects the PING result.

use axum::extract::State;
use axum::Json;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

use crate::tasks::local_iso_timestamp;
use crate::web::state::{HelloWebState, TaskWebState};

pub const STATUS_HEALTHY: &str = "healthy";
pub const STORE_CONNECTED: &str = "connected";
pub const STORE_DISCONNECTED: &str = "disconnected";

/// Task service health response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskHealthResponse {
    pub status: String,
    pub redis: String,
    pub timestamp: String,
}

/// Hello service health response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HelloHealthResponse {
    pub status: String,
    pub hostname: String,
}

/// Task service health check: GET /health
pub async fn task_health(State(state): State<Arc<TaskWebState>>) -> Json<TaskHealthResponse> {
    let redis = match state.tasks.ping().await {
        Ok(true) => STORE_CONNECTED,
        Ok(false) => {
            warn!("Store answered PING with an unexpected reply");
            STORE_DISCONNECTED
        }
        Err(e) => {
            warn!(error = %e, "Store health check failed");
            STORE_DISCONNECTED
        }
    };

    Json(TaskHealthResponse {
        status: STATUS_HEALTHY.to_string(),
        redis: redis.to_string(),
        timestamp: local_iso_timestamp(&Local::now()),
    })
}

/// Hello service health check: GET /health
pub async fn hello_health(State(state): State<Arc<HelloWebState>>) -> Json<HelloHealthResponse> {
    Json(HelloHealthResponse {
        status: STATUS_HEALTHY.to_string(),
        hostname: state.hostname.clone(),
    })
}
