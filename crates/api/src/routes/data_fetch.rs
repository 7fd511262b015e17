//! Data-fetch echo and confirmation endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use status::{DiagnosticSink, FetchedData, StatusService};

use crate::extract::Payload;

/// POST /data-fetch (and POST /postdata): echoes the body back as JSON.
///
/// Accepts a JSON object or a form-encoded body; both are answered with JSON.
#[tracing::instrument(skip(service, payload), fields(keys = payload.0.len()))]
pub async fn post<K: DiagnosticSink + 'static>(
    State(service): State<Arc<StatusService<K>>>,
    payload: Payload,
) -> Json<FetchedData> {
    Json(service.post_data_fetch(payload.0))
}

/// GET /data-fetch: returns the fixed confirmation message as plain text.
#[tracing::instrument(skip(service))]
pub async fn get<K: DiagnosticSink + 'static>(
    State(service): State<Arc<StatusService<K>>>,
) -> &'static str {
    service.get_data_fetch()
}
