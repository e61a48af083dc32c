//! # Web API Error Types
//!
//! Error types for the HTTP layer and their response conversions.
//! Leverages thiserror for structured error handling and Axum's IntoResponse for HTTP conversion.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::store::StoreError;

/// Web errors with HTTP status code mappings
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Store operation failed: {message}")]
    StoreError { message: String },

    #[error("Template rendering failed: {message}")]
    TemplateError { message: String },
}

impl ApiError {
    pub fn store_error(message: impl Into<String>) -> Self {
        Self::StoreError {
            message: message.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::StoreError { .. } | Self::TemplateError { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::StoreError { .. } => "STORE_ERROR",
            Self::TemplateError { .. } => "TEMPLATE_ERROR",
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self::store_error(err.to_string())
    }
}

impl From<askama::Error> for ApiError {
    fn from(err: askama::Error) -> Self {
        Self::TemplateError {
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!(error = %self, "Request failed");

        let body = json!({
            "error": {
                "code": self.error_code(),
                "message": self.to_string(),
            }
        });

        (self.status_code(), Json(body)).into_response()
    }
}

/// Result type for web handlers
pub type ApiResult<T> = Result<T, ApiError>;
