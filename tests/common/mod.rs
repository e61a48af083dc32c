//! Shared helpers for the service integration tests.
//!
//! Apps are driven in-process through `tower::ServiceExt::oneshot`; the task
//! service runs on the in-memory list store so no Redis is needed.

#![allow(dead_code)]

pub mod strategies;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

use demo_services::store::{InMemoryListStore, StoreProvider};
use demo_services::web::{self, HelloWebState, TaskWebState};

pub const TEST_TIMEOUT: Duration = Duration::from_secs(5);
const BODY_LIMIT: usize = 1024 * 1024;

/// Task service app plus a handle on its backing store
pub struct TaskTestApp {
    pub router: Router,
    pub store: InMemoryListStore,
}

impl TaskTestApp {
    pub fn new() -> Self {
        let store = InMemoryListStore::new();
        let state = Arc::new(TaskWebState::from_provider(StoreProvider::in_memory(
            store.clone(),
        )));

        Self {
            router: web::create_task_app(state, TEST_TIMEOUT),
            store,
        }
    }

    pub async fn get(&self, uri: &str) -> Response {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn post_form(&self, uri: &str, body: &str) -> Response {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.router.clone().oneshot(request).await.unwrap()
    }

    /// POST with no body and no Content-Type header
    pub async fn post_empty(&self, uri: &str) -> Response {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.router.clone().oneshot(request).await.unwrap()
    }

    /// POST /add with an url-encoded title
    pub async fn add(&self, title: &str) -> Response {
        self.post_form("/add", &format!("title={}", form_encode(title)))
            .await
    }

    /// GET /api/tasks decoded as JSON
    pub async fn api_tasks(&self) -> Vec<serde_json::Value> {
        let response = self.get("/api/tasks").await;
        assert_eq!(response.status(), StatusCode::OK);
        body_json(response).await.as_array().cloned().unwrap()
    }
}

pub fn hello_app(hostname: &str) -> Router {
    web::create_hello_app(Arc::new(HelloWebState::new(hostname)), TEST_TIMEOUT)
}

pub async fn get(router: &Router, uri: &str) -> Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    router.clone().oneshot(request).await.unwrap()
}

pub async fn body_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), BODY_LIMIT)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), BODY_LIMIT)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn assert_redirects_home(response: &Response) {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");
}

/// Percent-encode a form field value
pub fn form_encode(value: &str) -> String {
    utf8_percent_encode(value, NON_ALPHANUMERIC).to_string()
}
