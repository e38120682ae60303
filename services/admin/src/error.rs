//! Custom error types for the admin service

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use common::error::StoreError;

/// Custom error type for the admin service
#[derive(Error, Debug)]
pub enum ApiError {
    /// Storage layer error
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let ApiError::Store(err) = self;

        let (status, body) = match err {
            StoreError::Validation { field, message } => (
                StatusCode::BAD_REQUEST,
                json!({ "error": message, "field": field }),
            ),
            StoreError::Conflict { field } => (
                StatusCode::CONFLICT,
                json!({
                    "error": format!("Value for '{}' already exists", field),
                    "field": field,
                }),
            ),
            StoreError::NotFound { resource } => (
                StatusCode::NOT_FOUND,
                json!({ "error": format!("{} not found", resource) }),
            ),
            // Connection, configuration, and query failures stay generic
            // in the body; the cause goes to the log only.
            err => {
                error!("Request failed: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal server error" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;
