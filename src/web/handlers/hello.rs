//! # Hello Service Handlers

use askama::Template;
use axum::extract::State;
use axum::response::Html;
use std::sync::Arc;

use crate::web::errors::ApiResult;
use crate::web::state::HelloWebState;
use crate::web::templates::HelloTemplate;

/// Landing page: GET /
pub async fn index(State(state): State<Arc<HelloWebState>>) -> ApiResult<Html<String>> {
    let page = HelloTemplate {
        hostname: &state.hostname,
        version: state.version,
    };

    Ok(Html(page.render()?))
}
