use std::future::Future;
use std::sync::Arc;

use crate::core::interfaces::ports::Notifier;
use crate::core::models::{Toast, ToastId, ToastKind};
use crate::global_constants;

#[derive(Clone)]
pub struct ToastService {
    notifier: Arc<dyn Notifier>,
}

impl ToastService {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self { notifier }
    }

    pub fn show_error(&self, title: &str, description: Option<&str>) -> ToastId {
        log::debug!("[TOAST] error: {}", title);
        self.notifier.show(
            Toast::new(ToastKind::Error, title)
                .with_description(description)
                .with_duration(global_constants::TOAST_ERROR_DURATION),
        )
    }

    pub fn show_success(&self, title: &str, description: Option<&str>) -> ToastId {
        log::debug!("[TOAST] success: {}", title);
        self.notifier.show(
            Toast::new(ToastKind::Success, title)
                .with_description(description)
                .with_duration(global_constants::TOAST_SUCCESS_DURATION),
        )
    }

    pub fn show_info(&self, title: &str, description: Option<&str>) -> ToastId {
        log::debug!("[TOAST] info: {}", title);
        self.notifier.show(
            Toast::new(ToastKind::Info, title)
                .with_description(description)
                .with_duration(global_constants::TOAST_INFO_DURATION),
        )
    }

    pub fn show_loading(&self, message: &str) -> ToastId {
        log::debug!("[TOAST] loading: {}", message);
        self.notifier.show(Toast::new(ToastKind::Loading, message))
    }

    pub fn dismiss(&self, id: ToastId) {
        self.notifier.dismiss(id);
    }

    /// Shows a loading toast that is dismissed when the returned guard drops,
    /// including when the awaiting future is dropped mid-request.
    pub fn begin_loading(&self, message: &str) -> LoadingToast {
        LoadingToast {
            toasts: self.clone(),
            id: self.show_loading(message),
        }
    }

    /// Shows `loading` until `operation` settles, then replaces it with a
    /// success or error toast built from the outcome.
    pub async fn show_promise<T, E, F>(
        &self,
        operation: F,
        loading: &str,
        on_success: impl FnOnce(&T) -> String,
        on_error: impl FnOnce(&E) -> String,
    ) -> Result<T, E>
    where
        F: Future<Output = Result<T, E>>,
    {
        let loading_toast = self.begin_loading(loading);
        let outcome = operation.await;
        drop(loading_toast);

        match &outcome {
            Ok(value) => {
                self.show_success(&on_success(value), None);
            }
            Err(error) => {
                self.show_error(&on_error(error), None);
            }
        }

        outcome
    }
}

pub struct LoadingToast {
    toasts: ToastService,
    id: ToastId,
}

impl Drop for LoadingToast {
    fn drop(&mut self) {
        self.toasts.dismiss(self.id);
    }
}
