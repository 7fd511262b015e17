//! HTTP API server for the status, echo and confirmation endpoints.
//!
//! Wires [`status::StatusService`] into axum routing, with structured
//! logging (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod extract;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use metrics_exporter_prometheus::PrometheusHandle;
use status::{DiagnosticSink, StatusService, TracingSink};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<K: DiagnosticSink + 'static>(
    service: Arc<StatusService<K>>,
    metrics_handle: PrometheusHandle,
    config: &Config,
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::render))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route("/status", get(routes::status_check::get::<K>))
        .route(
            "/data-fetch",
            get(routes::data_fetch::get::<K>).post(routes::data_fetch::post::<K>),
        )
        .route("/postdata", post(routes::data_fetch::post::<K>))
        .with_state(service)
        .merge(metrics_router)
        .fallback(routes::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                )
                .layer(DefaultBodyLimit::max(config.body_limit)),
        )
}

/// Creates the production service, recording echoed payloads through `tracing`.
pub fn create_default_service() -> Arc<StatusService<TracingSink>> {
    Arc::new(StatusService::new(TracingSink::new()))
}
