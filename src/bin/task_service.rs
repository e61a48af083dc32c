//! # Task Service
//!
//! To-do list web service backed by a Redis list.
//!
//! ## Usage
//!
//! ```bash
//! # Redis on localhost:6379, listen on 0.0.0.0:5000
//! cargo run --bin task-service
//!
//! # Inside docker-compose
//! REDIS_HOST=redis PORT=8000 cargo run --bin task-service
//!
//! # Without Redis
//! STORE_BACKEND=memory cargo run --bin task-service
//! ```

use anyhow::Context;
use std::sync::Arc;
use tracing::info;

use demo_services::config::AppConfig;
use demo_services::logging;
use demo_services::store::{ListStore, StoreProvider};
use demo_services::web::{self, TaskWebState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_structured_logging();

    info!("Starting task service");
    info!("   Version: {}", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::from_env().context("Failed to load configuration")?;
    let provider =
        StoreProvider::from_config(&config.store).context("Failed to configure list store")?;

    info!("   Environment: {}", config.environment);
    info!("   Store: {}", provider.provider_name());

    let state = Arc::new(TaskWebState::from_provider(provider));
    let app = web::create_task_app(state, config.server.request_timeout());

    web::serve(app, &config.server.bind_address())
        .await
        .context("Task service failed")?;

    info!("Task service shutdown complete");
    Ok(())
}
