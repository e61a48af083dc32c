//! # Hello Service
//!
//! Single-page web service that reports the host it runs on.
//!
//! ## Usage
//!
//! ```bash
//! PORT=8080 cargo run --bin hello-service
//! ```

use anyhow::Context;
use std::sync::Arc;
use tracing::info;

use demo_services::config::AppConfig;
use demo_services::logging;
use demo_services::web::{self, HelloWebState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_structured_logging();

    let config = AppConfig::from_env().context("Failed to load configuration")?;
    let state = Arc::new(HelloWebState::from_environment());

    info!(
        hostname = %state.hostname,
        version = state.version,
        "Starting hello service"
    );

    let app = web::create_hello_app(state, config.server.request_timeout());

    web::serve(app, &config.server.bind_address())
        .await
        .context("Hello service failed")?;

    info!("Hello service shutdown complete");
    Ok(())
}
