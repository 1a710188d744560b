use std::sync::Arc;

use serde::Serialize;
use serde_json::{json, Map, Value};
use uuid::Uuid;

use crate::core::interfaces::adapters::AnalyticsSink;
use crate::global_constants;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsEvent {
    pub name: String,
    pub params: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyTarget {
    ExtractedText,
    Translation,
}

impl CopyTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            CopyTarget::ExtractedText => "extracted_text",
            CopyTarget::Translation => "translation",
        }
    }
}

pub struct AnalyticsTracker {
    measurement_id: Option<String>,
    is_development: bool,
    client_id: String,
    sink: Arc<dyn AnalyticsSink>,
}

impl AnalyticsTracker {
    pub fn new(
        measurement_id: Option<String>,
        is_development: bool,
        sink: Arc<dyn AnalyticsSink>,
    ) -> Self {
        let measurement_id = measurement_id.filter(|id| !id.trim().is_empty());
        let client_id = Uuid::new_v4().to_string();

        log::debug!(
            "[ANALYTICS] Tracker created (configured={}, development={})",
            measurement_id.is_some(),
            is_development
        );

        Self {
            measurement_id,
            is_development,
            client_id,
            sink,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.measurement_id.is_some() && !self.is_development
    }

    pub fn track_event(&self, event_name: &str, event_params: Option<Map<String, Value>>) {
        let Some(measurement_id) = self.measurement_id.as_deref() else {
            return;
        };
        if self.is_development {
            return;
        }

        let mut params = event_params.unwrap_or_default();
        params
            .entry("event_category")
            .or_insert_with(|| json!(global_constants::ANALYTICS_DEFAULT_CATEGORY));
        params
            .entry("event_label")
            .or_insert_with(|| json!(event_name));

        let event = AnalyticsEvent {
            name: event_name.to_string(),
            params,
        };

        self.sink.dispatch(measurement_id, &self.client_id, &event);
    }

    pub fn track_page_view(&self, page_path: &str) {
        self.track_event(
            "page_view",
            Some(params(json!({
                "page_path": page_path,
                "page_title": global_constants::APPLICATION_TITLE,
            }))),
        );
    }

    pub fn track_image_capture(&self) {
        self.track_event(
            "image_captured",
            Some(params(json!({
                "event_category": "user_action",
                "event_label": "Image Captured",
            }))),
        );
    }

    pub fn track_ocr(&self, success: bool, processing_time_ms: Option<f64>) {
        self.track_event(
            "ocr_processed",
            Some(params(json!({
                "event_category": "ocr",
                "event_label": if success { "OCR Success" } else { "OCR Failed" },
                "value": processing_time_ms,
                "success": success,
            }))),
        );
    }

    pub fn track_translation(&self, target_language: &str, success: bool) {
        self.track_event(
            "translation_requested",
            Some(params(json!({
                "event_category": "translation",
                "event_label": format!("Translate to {}", target_language),
                "target_language": target_language,
                "success": success,
            }))),
        );
    }

    pub fn track_image_crop(&self) {
        self.track_event(
            "image_cropped",
            Some(params(json!({
                "event_category": "user_action",
                "event_label": "Image Cropped",
            }))),
        );
    }

    pub fn track_copy(&self, target: CopyTarget) {
        self.track_event(
            "text_copied",
            Some(params(json!({
                "event_category": "user_action",
                "event_label": format!("Copied {}", target.as_str()),
            }))),
        );
    }
}

fn params(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}
