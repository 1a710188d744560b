//! Test doubles for the crate's ports and adapters.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::core::errors::{ApiClientError, ApiResult};
use crate::core::interfaces::adapters::{AnalyticsSink, ApiClient, FormValue, RequestOptions};
use crate::core::interfaces::ports::{ClientStorage, Notifier};
use crate::core::models::{ImageFile, Toast, ToastId, ToastKind};
use crate::core::services::AnalyticsEvent;

#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    Request {
        endpoint: String,
        options: RequestOptions,
    },
    Upload {
        endpoint: String,
        file_name: String,
        extra_fields: Vec<(String, FormValue)>,
    },
}

#[derive(Default)]
pub struct MockApiClient {
    responses: Mutex<VecDeque<(Duration, ApiResult<serde_json::Value>)>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockApiClient {
    pub fn respond_with(self, response: ApiResult<serde_json::Value>) -> Self {
        self.respond_after(Duration::ZERO, response)
    }

    pub fn respond_after(self, delay: Duration, response: ApiResult<serde_json::Value>) -> Self {
        self.responses.lock().unwrap().push_back((delay, response));
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    async fn next_response(&self) -> ApiResult<serde_json::Value> {
        let next = self.responses.lock().unwrap().pop_front();
        let (delay, response) = next.unwrap_or_else(|| {
            let error = ApiClientError::new("no scripted response", None, None);
            (Duration::ZERO, Err(error))
        });

        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        response
    }
}

#[async_trait]
impl ApiClient for MockApiClient {
    async fn request(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> ApiResult<serde_json::Value> {
        self.calls.lock().unwrap().push(RecordedCall::Request {
            endpoint: endpoint.to_string(),
            options,
        });
        self.next_response().await
    }

    async fn upload_file(
        &self,
        endpoint: &str,
        file: &ImageFile,
        extra_fields: &[(String, FormValue)],
    ) -> ApiResult<serde_json::Value> {
        self.calls.lock().unwrap().push(RecordedCall::Upload {
            endpoint: endpoint.to_string(),
            file_name: file.name.clone(),
            extra_fields: extra_fields.to_vec(),
        });
        self.next_response().await
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    next_id: AtomicU64,
    shown: Mutex<Vec<(ToastId, Toast)>>,
    active: Mutex<Vec<(ToastId, ToastKind)>>,
}

impl RecordingNotifier {
    pub fn shown(&self) -> Vec<Toast> {
        self.shown
            .lock()
            .unwrap()
            .iter()
            .map(|(_, toast)| toast.clone())
            .collect()
    }

    pub fn titles_of(&self, kind: ToastKind) -> Vec<String> {
        self.shown()
            .into_iter()
            .filter(|toast| toast.kind == kind)
            .map(|toast| toast.title)
            .collect()
    }

    pub fn active_kinds(&self) -> Vec<ToastKind> {
        self.active
            .lock()
            .unwrap()
            .iter()
            .map(|(_, kind)| *kind)
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn show(&self, toast: Toast) -> ToastId {
        let id = ToastId(self.next_id.fetch_add(1, Ordering::SeqCst));
        self.active.lock().unwrap().push((id, toast.kind));
        self.shown.lock().unwrap().push((id, toast));
        id
    }

    fn dismiss(&self, id: ToastId) {
        self.active.lock().unwrap().retain(|(active_id, _)| *active_id != id);
    }
}

#[derive(Default)]
pub struct MemoryClientStorage {
    items: Mutex<HashMap<String, String>>,
    fail: bool,
}

impl MemoryClientStorage {
    pub fn with_item(key: &str, value: &str) -> Self {
        let storage = Self::default();
        storage
            .items
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        storage
    }

    pub fn failing() -> Self {
        Self {
            items: Mutex::new(HashMap::new()),
            fail: true,
        }
    }

    pub fn value_of(&self, key: &str) -> Option<String> {
        self.items.lock().unwrap().get(key).cloned()
    }
}

impl ClientStorage for MemoryClientStorage {
    fn get_item(&self, key: &str) -> anyhow::Result<Option<String>> {
        if self.fail {
            anyhow::bail!("storage unavailable");
        }
        Ok(self.value_of(key))
    }

    fn set_item(&self, key: &str, value: &str) -> anyhow::Result<()> {
        if self.fail {
            anyhow::bail!("storage unavailable");
        }
        self.items
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingAnalyticsSink {
    events: Mutex<Vec<(String, AnalyticsEvent, String)>>,
}

impl RecordingAnalyticsSink {
    /// Each entry is `(measurement_id, event, client_id)`.
    pub fn events(&self) -> Vec<(String, AnalyticsEvent, String)> {
        self.events.lock().unwrap().clone()
    }
}

impl AnalyticsSink for RecordingAnalyticsSink {
    fn dispatch(&self, measurement_id: &str, client_id: &str, event: &AnalyticsEvent) {
        self.events.lock().unwrap().push((
            measurement_id.to_string(),
            event.clone(),
            client_id.to_string(),
        ));
    }
}
