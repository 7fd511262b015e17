//! Diagnostic sink trait and its implementations.

use std::sync::{Arc, PoisonError, RwLock};

use crate::error::{Result, SinkError};
use crate::service::FetchedData;

/// Tracing target used for echoed payloads.
pub const DIAGNOSTICS_TARGET: &str = "status::diagnostics";

/// Capability for recording payloads that pass through the echo operation.
///
/// Recording is best-effort: callers must not let an `Err` affect the
/// primary response.
pub trait DiagnosticSink: Send + Sync {
    /// Records a single payload.
    fn record(&self, payload: &FetchedData) -> Result<()>;
}

/// Sink that emits each payload as a structured `tracing` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TracingSink {
    /// Creates a new tracing sink.
    pub fn new() -> Self {
        Self
    }
}

impl DiagnosticSink for TracingSink {
    fn record(&self, payload: &FetchedData) -> Result<()> {
        let rendered = serde_json::to_string(payload)?;
        tracing::info!(
            target: DIAGNOSTICS_TARGET,
            payload = %rendered,
            keys = payload.len(),
            "data fetch payload received"
        );
        Ok(())
    }
}

/// Sink that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn record(&self, _payload: &FetchedData) -> Result<()> {
        Ok(())
    }
}

#[derive(Debug, Default)]
struct InMemorySinkState {
    records: Vec<FetchedData>,
    fail_on_record: bool,
}

/// In-memory sink for testing.
///
/// Clones share the same record buffer, so a test can keep a handle while
/// the service owns another.
#[derive(Debug, Clone, Default)]
pub struct InMemorySink {
    state: Arc<RwLock<InMemorySinkState>>,
}

impl InMemorySink {
    /// Creates a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the sink to fail every subsequent record call.
    pub fn set_fail_on_record(&self, fail: bool) {
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .fail_on_record = fail;
    }

    /// Returns a copy of every payload recorded so far, oldest first.
    pub fn records(&self) -> Vec<FetchedData> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .records
            .clone()
    }

    /// Returns the number of recorded payloads.
    pub fn record_count(&self) -> usize {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .records
            .len()
    }
}

impl DiagnosticSink for InMemorySink {
    fn record(&self, payload: &FetchedData) -> Result<()> {
        let mut state = self
            .state
            .write()
            .map_err(|e| SinkError::Unavailable(e.to_string()))?;

        if state.fail_on_record {
            return Err(SinkError::Unavailable("sink rejected record".to_string()));
        }

        state.records.push(payload.clone());
        Ok(())
    }
}
