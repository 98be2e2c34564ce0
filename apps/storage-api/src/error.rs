use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage_lib::StorageError;

/// Errors surfaced to HTTP callers as plain text.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Internal(String),
}

impl ApiError {
    pub fn missing_msg() -> Self {
        ApiError::BadRequest("Missing msg parameter".to_string())
    }

    pub fn storage_failure() -> Self {
        ApiError::Internal("Failed to write to storage".to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, format!("{message}\n")).into_response()
    }
}

/// Logs a storage failure with full detail and hides it from the caller.
pub fn handle_storage_error(err: StorageError, env: &str) -> ApiError {
    tracing::error!(
        env = %env,
        path = %err.path().display(),
        kind = ?err.kind(),
        error = %err,
        "failed to write to storage"
    );
    ApiError::storage_failure()
}
