use crate::core::services::AnalyticsEvent;

pub trait AnalyticsSink: Send + Sync {
    fn dispatch(&self, measurement_id: &str, client_id: &str, event: &AnalyticsEvent);
}
