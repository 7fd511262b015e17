//! Status check endpoint.

use std::sync::Arc;

use axum::extract::State;
use status::{DiagnosticSink, StatusService};

/// GET /status: returns `STATUS: OK` as plain text.
#[tracing::instrument(skip(service))]
pub async fn get<K: DiagnosticSink + 'static>(
    State(service): State<Arc<StatusService<K>>>,
) -> &'static str {
    service.get_status()
}
