//! Diagnostic sink error types.

use thiserror::Error;

/// Errors a [`DiagnosticSink`](crate::DiagnosticSink) may report.
///
/// These never leave [`StatusService`](crate::StatusService); they are
/// logged and counted, then dropped.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The sink could not accept the record.
    #[error("Diagnostic sink unavailable: {0}")]
    Unavailable(String),

    /// The payload could not be rendered for the sink.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for sink operations.
pub type Result<T> = std::result::Result<T, SinkError>;
