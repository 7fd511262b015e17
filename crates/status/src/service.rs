//! The status service and its three operations.

use serde_json::{Map, Value};

use crate::sink::{DiagnosticSink, TracingSink};

/// Response body of the status check.
pub const STATUS_MESSAGE: &str = "STATUS: OK";

/// Response body of the data-fetch confirmation.
pub const CONFIRMATION_MESSAGE: &str = "Data fetched successfully";

/// Arbitrary caller-supplied mapping from string keys to JSON values.
pub type FetchedData = Map<String, Value>;

/// Stateless service answering the status, echo and confirmation queries.
///
/// The only thing it holds is the sink echoed payloads are recorded on.
#[derive(Debug, Clone, Default)]
pub struct StatusService<K: DiagnosticSink = TracingSink> {
    sink: K,
}

impl<K: DiagnosticSink> StatusService<K> {
    /// Creates a service recording echoed payloads on `sink`.
    pub fn new(sink: K) -> Self {
        Self { sink }
    }

    /// Returns the sink this service records on.
    pub fn sink(&self) -> &K {
        &self.sink
    }

    /// Returns [`STATUS_MESSAGE`].
    pub fn get_status(&self) -> &'static str {
        metrics::counter!("status_checks_total").increment(1);
        STATUS_MESSAGE
    }

    /// Returns `payload` unchanged after recording it on the sink.
    ///
    /// A sink failure is logged and counted but never surfaces here.
    pub fn post_data_fetch(&self, payload: FetchedData) -> FetchedData {
        metrics::counter!("data_fetch_echoes_total").increment(1);

        if let Err(error) = self.sink.record(&payload) {
            metrics::counter!("diagnostic_sink_failures_total").increment(1);
            tracing::warn!(%error, "failed to record data fetch payload");
        }

        payload
    }

    /// Returns [`CONFIRMATION_MESSAGE`].
    pub fn get_data_fetch(&self) -> &'static str {
        metrics::counter!("data_fetch_confirmations_total").increment(1);
        CONFIRMATION_MESSAGE
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::sink::InMemorySink;

    fn payload(value: Value) -> FetchedData {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_get_status() {
        let service = StatusService::new(InMemorySink::new());
        assert_eq!(service.get_status(), "STATUS: OK");
        assert_eq!(service.get_status(), "STATUS: OK");
    }

    #[test]
    fn test_get_data_fetch() {
        let service = StatusService::new(InMemorySink::new());
        assert_eq!(service.get_data_fetch(), "Data fetched successfully");
    }

    #[test]
    fn test_constant_operations_do_not_touch_sink() {
        let sink = InMemorySink::new();
        let service = StatusService::new(sink.clone());

        service.get_status();
        service.get_data_fetch();

        assert_eq!(sink.record_count(), 0);
    }

    #[test]
    fn test_echo_empty_mapping() {
        let service = StatusService::new(InMemorySink::new());
        assert_eq!(service.post_data_fetch(FetchedData::new()), FetchedData::new());
    }

    #[test]
    fn test_echo_mixed_values() {
        let service = StatusService::new(InMemorySink::new());
        let input = payload(json!({"a": 1, "b": [true, null, "x"]}));

        let output = service.post_data_fetch(input.clone());

        assert_eq!(output, input);
        assert_eq!(Value::Object(output), json!({"a": 1, "b": [true, null, "x"]}));
    }

    #[test]
    fn test_echo_deeply_nested() {
        let service = StatusService::new(InMemorySink::new());
        let input = payload(json!({
            "level1": {"level2": {"level3": {"level4": [{"deep": null}, [], {}]}}},
            "float": -12.75,
            "big": 18446744073709551615u64,
            "unicode": "Bolo de abacaxi 🍍",
        }));

        assert_eq!(service.post_data_fetch(input.clone()), input);
    }

    #[test]
    fn test_echo_preserves_key_order() {
        let service = StatusService::new(InMemorySink::new());
        let input: FetchedData =
            serde_json::from_str(r#"{"zeta":1,"alpha":2,"mid":{"y":1,"b":2}}"#).unwrap();

        let output = service.post_data_fetch(input);

        let keys: Vec<&str> = output.keys().map(String::as_str).collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
        assert_eq!(
            serde_json::to_string(&output).unwrap(),
            r#"{"zeta":1,"alpha":2,"mid":{"y":1,"b":2}}"#
        );
    }

    #[test]
    fn test_echo_records_payload_on_sink() {
        let sink = InMemorySink::new();
        let service = StatusService::new(sink.clone());
        let input = payload(json!({"product_id": 1, "price": 199.99}));

        let output = service.post_data_fetch(input.clone());

        assert_eq!(sink.records(), vec![output]);
    }

    #[test]
    fn test_echo_survives_sink_failure() {
        let sink = InMemorySink::new();
        sink.set_fail_on_record(true);
        let service = StatusService::new(sink.clone());
        let input = payload(json!({"a": 1}));

        assert_eq!(service.post_data_fetch(input.clone()), input);
        assert_eq!(sink.record_count(), 0);
    }

    #[test]
    fn test_echo_is_idempotent() {
        let sink = InMemorySink::new();
        let service = StatusService::new(sink.clone());
        let input = payload(json!({"a": {"b": [1, 2, 3]}}));

        let first = service.post_data_fetch(input.clone());
        let second = service.post_data_fetch(input.clone());

        assert_eq!(first, input);
        assert_eq!(second, input);
        assert_eq!(sink.record_count(), 2);
    }

    #[test]
    fn test_default_service_uses_tracing_sink() {
        let service: StatusService = StatusService::default();
        let input = payload(json!({"k": "v"}));
        assert_eq!(service.post_data_fetch(input.clone()), input);
    }
}
