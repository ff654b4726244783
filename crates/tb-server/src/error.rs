//! Error-to-HTTP response conversion.
//!
//! Implements `IntoResponse` for [`tb_core::Error`] so that route handlers
//! can return `Result<T, AppError>` directly.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Wrapper so we can implement `IntoResponse` for an external type.
#[derive(Debug)]
pub struct AppError {
    inner: tb_core::Error,
}

impl AppError {
    pub fn new(inner: tb_core::Error) -> Self {
        Self { inner }
    }
}

impl From<tb_core::Error> for AppError {
    fn from(e: tb_core::Error) -> Self {
        Self::new(e)
    }
}

/// Unparsable or mistyped JSON bodies are client errors like any missing
/// field, so they map to 400 rather than axum's default 422.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(tb_core::Error::Validation(rejection.body_text()))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.inner.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::error!(
                status = %status,
                error = %self.inner,
                "Server error in API handler"
            );
        }

        let code = match &self.inner {
            tb_core::Error::NotFound(_) => "not_found",
            tb_core::Error::Validation(_) => "validation_error",
            tb_core::Error::Database { .. } => "database_error",
            tb_core::Error::Io { .. } => "io_error",
            tb_core::Error::Internal(_) => "internal_error",
        };

        // Client errors carry a `message`; server errors expose the raw
        // failure under `error`.
        let body = if status.is_server_error() {
            json!({ "error": self.inner.to_string(), "code": code })
        } else {
            json!({ "message": self.inner.to_string(), "code": code })
        };

        (status, axum::Json(body)).into_response()
    }
}
