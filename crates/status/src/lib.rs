//! Status, confirmation and echo operations for the data-fetch backend.
//!
//! The crate has no HTTP dependency. [`StatusService`] answers three
//! independent queries and records echoed payloads on an injected
//! [`DiagnosticSink`]:
//! - `get_status` returns [`STATUS_MESSAGE`]
//! - `post_data_fetch` returns its payload unchanged
//! - `get_data_fetch` returns [`CONFIRMATION_MESSAGE`]

pub mod error;
pub mod service;
pub mod sink;

pub use error::SinkError;
pub use service::{CONFIRMATION_MESSAGE, FetchedData, STATUS_MESSAGE, StatusService};
pub use sink::{DiagnosticSink, InMemorySink, NoopSink, TracingSink};
