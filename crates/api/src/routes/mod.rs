//! HTTP route handlers.

pub mod data_fetch;
pub mod health;
pub mod metrics;
pub mod status_check;

use axum::http::{Method, Uri};

use crate::error::ApiError;

/// Fallback for unmatched routes.
pub async fn not_found(method: Method, uri: Uri) -> ApiError {
    ApiError::NotFound(format!("{method} {}", uri.path()))
}
