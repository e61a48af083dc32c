//! # Web Module
//!
//! Axum applications for the hello service and the task service, plus the
//! shared serve loop with graceful shutdown.

use axum::http::StatusCode;
use axum::Router;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;

pub mod errors;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod templates;

pub use errors::{ApiError, ApiResult};
pub use state::{HelloWebState, TaskWebState};

/// Create the task service application with all routes and middleware
pub fn create_task_app(state: Arc<TaskWebState>, request_timeout: Duration) -> Router {
    let router = Router::new()
        .merge(routes::task_page_routes())
        .merge(routes::task_api_routes())
        .merge(routes::task_health_routes());
    let app = with_common_middleware(router, request_timeout).with_state(state);

    info!("Task service application created");
    app
}

/// Create the hello service application
pub fn create_hello_app(state: Arc<HelloWebState>, request_timeout: Duration) -> Router {
    let app = with_common_middleware(routes::hello_routes(), request_timeout).with_state(state);

    info!("Hello service application created");
    app
}

fn with_common_middleware<S>(router: Router<S>, request_timeout: Duration) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::with_status_code(
                StatusCode::REQUEST_TIMEOUT,
                request_timeout,
            )),
    )
}

/// Bind `bind_address` and serve `app` until Ctrl+C or SIGTERM
pub async fn serve(app: Router, bind_address: &str) -> std::io::Result<()> {
    let listener = TcpListener::bind(bind_address).await?;
    info!(address = %listener.local_addr()?, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C");
        },
        _ = terminate => {
            info!("Received SIGTERM");
        },
    }
}
