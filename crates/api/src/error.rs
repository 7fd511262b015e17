//! API error types with HTTP response mapping.

use axum::extract::rejection::{FormRejection, JsonRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Errors raised at the HTTP boundary, before a request reaches the service.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No route matched.
    #[error("No route for {0}")]
    NotFound(String),

    /// The JSON body was missing, malformed, or not an object.
    #[error(transparent)]
    Json(#[from] JsonRejection),

    /// The form-encoded body could not be read.
    #[error(transparent)]
    Form(#[from] FormRejection),
}

impl ApiError {
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            ApiError::Json(rejection) => (rejection.status(), rejection.body_text()),
            ApiError::Form(rejection) => (rejection.status(), rejection.body_text()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        tracing::debug!(%status, error = %message, "request rejected");

        let body = serde_json::json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}
