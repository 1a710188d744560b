use serde_json::json;

use crate::core::interfaces::adapters::AnalyticsSink;
use crate::core::services::AnalyticsEvent;

/// Writes analytics events to the log instead of a collection endpoint.
#[derive(Debug, Default)]
pub struct LogAnalyticsSink;

impl LogAnalyticsSink {
    fn payload(measurement_id: &str, client_id: &str, event: &AnalyticsEvent) -> serde_json::Value {
        json!({
            "measurement_id": measurement_id,
            "client_id": client_id,
            "events": [{
                "name": event.name,
                "params": event.params,
            }],
        })
    }
}

impl AnalyticsSink for LogAnalyticsSink {
    fn dispatch(&self, measurement_id: &str, client_id: &str, event: &AnalyticsEvent) {
        log::info!(
            "[ANALYTICS] {}",
            Self::payload(measurement_id, client_id, event)
        );
    }
}
