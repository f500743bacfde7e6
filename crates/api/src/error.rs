//! API error types with HTTP response mapping.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use order_store::StoreError;
use usecase::UseCaseError;

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Use case failure.
    UseCase(UseCaseError),

    /// The request body could not be read as the expected JSON.
    InvalidBody(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::UseCase(err) => use_case_error_to_response(err),
            ApiError::InvalidBody(message) => {
                tracing::debug!(error = %message, "rejected request body");
                (StatusCode::BAD_REQUEST, message)
            }
        };

        let body = serde_json::json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}

/// Maps a use case error to a status code and message.
pub fn use_case_error_to_response(err: UseCaseError) -> (StatusCode, String) {
    match &err {
        UseCaseError::Validation(_) => (StatusCode::BAD_REQUEST, err.to_string()),
        UseCaseError::Store(StoreError::DuplicateKey(_)) => (StatusCode::CONFLICT, err.to_string()),
        UseCaseError::Store(_) => {
            tracing::error!(error = %err, "order store failure");
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
        UseCaseError::Dispatch(_) => {
            tracing::error!(error = %err, "order saved but event dispatch failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Order was saved, but notifying subscribers failed. {err}"),
            )
        }
    }
}

impl From<UseCaseError> for ApiError {
    fn from(err: UseCaseError) -> Self {
        ApiError::UseCase(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection.body_text())
    }
}
