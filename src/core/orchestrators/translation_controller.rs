use std::sync::{Arc, Mutex, PoisonError};

use crate::core::errors::{ApiClientError, ControllerError};
use crate::core::interfaces::adapters::{decode_response, ApiClient, RequestOptions};
use crate::core::models::{
    ControllerState, TranslationRequest, TranslationResponse, TranslationResult,
};
use crate::core::orchestrators::request_session::RequestSession;
use crate::core::services::language_catalog;
use crate::core::services::ToastService;
use crate::global_constants;

pub struct TranslationController {
    api_client: Arc<dyn ApiClient>,
    toasts: ToastService,
    session: RequestSession<TranslationResult>,
    target_language: Mutex<String>,
}

impl TranslationController {
    pub fn new(api_client: Arc<dyn ApiClient>, toasts: ToastService) -> Self {
        Self {
            api_client,
            toasts,
            session: RequestSession::new(),
            target_language: Mutex::new(String::new()),
        }
    }

    pub fn state(&self) -> ControllerState {
        self.session.state()
    }

    pub fn last_result(&self) -> Option<TranslationResult> {
        self.session.last_result()
    }

    pub fn target_language(&self) -> String {
        self.target_language
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub async fn translate(
        &self,
        text: &str,
        language_code: &str,
    ) -> Result<String, ControllerError> {
        self.translate_from(text, None, language_code).await
    }

    pub async fn translate_from(
        &self,
        text: &str,
        source_language_code: Option<&str>,
        target_language_code: &str,
    ) -> Result<String, ControllerError> {
        if text.trim().is_empty() {
            return Err(self.reject(global_constants::TRANSLATION_NO_TEXT_MESSAGE));
        }
        if target_language_code.is_empty() {
            return Err(self.reject(global_constants::TRANSLATION_NO_LANGUAGE_MESSAGE));
        }

        let ticket = self.session.begin();
        *self
            .target_language
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = target_language_code.to_string();

        let display_name = language_catalog::language_display_name(target_language_code, true);
        log::info!(
            "[TRANSLATE] Translating {} characters to {}",
            text.trim().len(),
            target_language_code
        );
        let loading_toast = self
            .toasts
            .begin_loading(&format!("Translating to {}...", display_name));

        let outcome = self
            .submit_translation(text.trim(), source_language_code, target_language_code)
            .await;
        drop(loading_toast);

        match outcome {
            Ok(result) => {
                let translated = result.translated_text.clone();
                if !ticket.succeed(&translated, result) {
                    log::debug!("[TRANSLATE] Response superseded by a newer request");
                }
                Ok(translated)
            }
            Err(error) => {
                let error = Self::user_facing_error(error);
                log::error!("[TRANSLATE] Translation failed: {}", error);
                if ticket.fail(&error.to_string()) {
                    self.show_failure(&error);
                }
                Err(error)
            }
        }
    }

    pub fn reset(&self) {
        log::debug!("[TRANSLATE] Resetting state");
        self.session.reset();
        self.target_language
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    fn reject(&self, message: &str) -> ControllerError {
        log::warn!("[TRANSLATE] Rejected input: {}", message);
        self.session.record_rejection(message);
        self.toasts
            .show_error(global_constants::TRANSLATION_ERROR_TITLE, Some(message));
        ControllerError::validation(message)
    }

    async fn submit_translation(
        &self,
        text: &str,
        source_language_code: Option<&str>,
        target_language_code: &str,
    ) -> Result<TranslationResult, ControllerError> {
        let request = TranslationRequest {
            text: text.to_string(),
            target_language: target_language_code.to_string(),
            source_language: source_language_code.map(str::to_string),
        };
        let body = serde_json::to_string(&request)
            .map_err(|_| ApiClientError::unexpected_response(None))?;

        let response = self
            .api_client
            .request(
                global_constants::TRANSLATE_ENDPOINT,
                RequestOptions::post_json(body),
            )
            .await?;
        let response: TranslationResponse = decode_response(response)?;

        TranslationResult::from_response(response, text, target_language_code)
            .ok_or_else(|| {
                ControllerError::empty_result(global_constants::TRANSLATION_EMPTY_MESSAGE)
            })
    }

    fn user_facing_error(error: ControllerError) -> ControllerError {
        match error {
            ControllerError::Transport(api_error) if api_error.is_rate_limited() => {
                ControllerError::Transport(ApiClientError {
                    message: global_constants::TRANSLATION_RATE_LIMIT_MESSAGE.to_string(),
                    ..api_error
                })
            }
            other => other,
        }
    }

    fn show_failure(&self, error: &ControllerError) {
        if error.status() == Some(429) {
            self.toasts.show_error(
                global_constants::TRANSLATION_RATE_LIMIT_TITLE,
                Some(global_constants::ERROR_TOO_MANY_REQUESTS),
            );
        } else {
            self.toasts.show_error(
                global_constants::TRANSLATION_FAILED_TITLE,
                Some(&error.to_string()),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use serde_json::json;

    use crate::core::interfaces::adapters::HttpMethod;
    use crate::core::mock::{MockApiClient, RecordedCall, RecordingNotifier};
    use crate::core::models::ToastKind;

    fn create_controller(
        api_client: MockApiClient,
    ) -> (TranslationController, Arc<MockApiClient>, Arc<RecordingNotifier>) {
        let api_client = Arc::new(api_client);
        let notifier = Arc::new(RecordingNotifier::default());
        let controller =
            TranslationController::new(api_client.clone(), ToastService::new(notifier.clone()));
        (controller, api_client, notifier)
    }

    fn translation_body(translated: &str) -> serde_json::Value {
        json!({
            "original": "hello",
            "translated": translated,
            "targetLanguage": "fr",
            "sourceLanguage": "en",
            "confidence": 0.98
        })
    }

    #[tokio::test]
    async fn test_translate_rejects_blank_text_before_request() {
        let (controller, api_client, notifier) = create_controller(MockApiClient::default());

        let error = controller.translate("  ", "fr").await.unwrap_err();

        assert_eq!(
            error,
            ControllerError::validation(global_constants::TRANSLATION_NO_TEXT_MESSAGE)
        );
        assert_eq!(api_client.call_count(), 0);
        assert_eq!(
            notifier.titles_of(ToastKind::Error),
            vec![global_constants::TRANSLATION_ERROR_TITLE]
        );
    }

    #[tokio::test]
    async fn test_translate_rejects_missing_language() {
        let (controller, api_client, _) = create_controller(MockApiClient::default());

        let error = controller.translate("hi", "").await.unwrap_err();

        assert_eq!(
            error,
            ControllerError::validation(global_constants::TRANSLATION_NO_LANGUAGE_MESSAGE)
        );
        assert_eq!(api_client.call_count(), 0);
        assert_eq!(
            controller.state().last_error.as_deref(),
            Some(global_constants::TRANSLATION_NO_LANGUAGE_MESSAGE)
        );
    }

    #[tokio::test]
    async fn test_translate_posts_trimmed_text_as_json() {
        let (controller, api_client, notifier) =
            create_controller(
                MockApiClient::default().respond_with(Ok(translation_body(" bonjour "))),
            );

        let translated = controller.translate("  hello \n", "fr").await.unwrap();

        assert_eq!(translated, "bonjour");
        assert_eq!(controller.state().result_text, "bonjour");
        assert_eq!(controller.target_language(), "fr");
        assert_eq!(
            controller.last_result().unwrap().source_language_code.as_deref(),
            Some("en")
        );

        let calls = api_client.calls();
        let RecordedCall::Request { endpoint, options } = &calls[0] else {
            panic!("Expected a JSON request");
        };
        assert_eq!(endpoint, "/api/translate");
        assert_eq!(options.method, HttpMethod::Post);
        let body: serde_json::Value =
            serde_json::from_str(options.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({"text": "hello", "targetLanguage": "fr"}));

        assert_eq!(
            notifier.titles_of(ToastKind::Loading),
            vec!["Translating to Français..."]
        );
        assert!(notifier.active_kinds().is_empty());
    }

    #[tokio::test]
    async fn test_translate_forwards_unknown_language_codes() {
        let (controller, api_client, notifier) =
            create_controller(
                MockApiClient::default().respond_with(Ok(translation_body("tlhIngan"))),
            );

        controller.translate("hello", "tlh").await.unwrap();

        let calls = api_client.calls();
        let RecordedCall::Request { options, .. } = &calls[0] else {
            panic!("Expected a JSON request");
        };
        assert!(options.body.as_deref().unwrap().contains("\"targetLanguage\":\"tlh\""));
        assert_eq!(notifier.titles_of(ToastKind::Loading), vec!["Translating to tlh..."]);
    }

    #[tokio::test]
    async fn test_translate_from_sends_source_language() {
        let (controller, api_client, _) =
            create_controller(MockApiClient::default().respond_with(Ok(translation_body("hello"))));

        controller.translate_from("hola", Some("es"), "en").await.unwrap();

        let calls = api_client.calls();
        let RecordedCall::Request { options, .. } = &calls[0] else {
            panic!("Expected a JSON request");
        };
        assert!(options.body.as_deref().unwrap().contains("\"sourceLanguage\":\"es\""));
    }

    #[tokio::test]
    async fn test_translate_treats_blank_translation_as_empty_result() {
        let (controller, _, notifier) =
            create_controller(MockApiClient::default().respond_with(Ok(translation_body("   "))));

        let error = controller.translate("hello", "fr").await.unwrap_err();

        assert_eq!(
            error,
            ControllerError::empty_result(global_constants::TRANSLATION_EMPTY_MESSAGE)
        );
        assert_eq!(
            notifier.titles_of(ToastKind::Error),
            vec![global_constants::TRANSLATION_FAILED_TITLE]
        );
        assert!(!controller.state().is_loading);
    }

    #[tokio::test]
    async fn test_translate_treats_null_translation_as_empty_result() {
        let (controller, _, notifier) = create_controller(MockApiClient::default().respond_with(Ok(
            json!({"original": "hello", "translated": null, "targetLanguage": "fr"}),
        )));

        let error = controller.translate("hello", "fr").await.unwrap_err();

        assert_eq!(
            error,
            ControllerError::empty_result(global_constants::TRANSLATION_EMPTY_MESSAGE)
        );
        assert_eq!(
            controller.state().last_error.as_deref(),
            Some(global_constants::TRANSLATION_EMPTY_MESSAGE)
        );
        assert_eq!(
            notifier.titles_of(ToastKind::Error),
            vec![global_constants::TRANSLATION_FAILED_TITLE]
        );
    }

    #[tokio::test]
    async fn test_rate_limit_overrides_server_message() {
        let (controller, _, notifier) = create_controller(MockApiClient::default().respond_with(Err(
            ApiClientError::new(
                "Quota exhausted for key abc",
                Some(429),
                Some("RATE_LIMITED".to_string()),
            ),
        )));

        let error = controller.translate("hello", "fr").await.unwrap_err();

        assert_eq!(error.to_string(), global_constants::TRANSLATION_RATE_LIMIT_MESSAGE);
        assert_eq!(error.status(), Some(429));
        let ControllerError::Transport(api_error) = &error else {
            panic!("Expected transport error");
        };
        assert_eq!(api_error.code.as_deref(), Some("RATE_LIMITED"));
        assert_eq!(
            controller.state().last_error.as_deref(),
            Some(global_constants::TRANSLATION_RATE_LIMIT_MESSAGE)
        );

        let errors: Vec<_> = notifier
            .shown()
            .into_iter()
            .filter(|toast| toast.kind == ToastKind::Error)
            .collect();
        assert_eq!(errors[0].title, global_constants::TRANSLATION_RATE_LIMIT_TITLE);
        assert_eq!(
            errors[0].description.as_deref(),
            Some(global_constants::ERROR_TOO_MANY_REQUESTS)
        );
    }

    #[tokio::test]
    async fn test_other_transport_errors_surface_verbatim() {
        let (controller, _, notifier) = create_controller(MockApiClient::default().respond_with(Err(
            ApiClientError::new("Unsupported target language", Some(400), None),
        )));

        let error = controller.translate("hello", "fr").await.unwrap_err();

        assert_eq!(error.to_string(), "Unsupported target language");
        assert_eq!(
            notifier.titles_of(ToastKind::Error),
            vec![global_constants::TRANSLATION_FAILED_TITLE]
        );
        assert!(!controller.state().is_loading);
    }

    #[tokio::test]
    async fn test_dropped_translation_clears_loading_toast() {
        let (controller, _, notifier) = create_controller(
            MockApiClient::default()
                .respond_after(Duration::from_secs(5), Ok(translation_body("bonjour"))),
        );

        let timed_out =
            tokio::time::timeout(Duration::from_millis(20), controller.translate("hello", "fr"))
                .await;

        assert!(timed_out.is_err());
        assert!(notifier.active_kinds().is_empty());
        assert!(!controller.state().is_loading);
    }

    #[tokio::test]
    async fn test_reset_restores_initial_state_and_language() {
        let (controller, _, _) =
            create_controller(
                MockApiClient::default().respond_with(Ok(translation_body("bonjour"))),
            );
        controller.translate("hello", "fr").await.unwrap();

        controller.reset();

        assert_eq!(controller.state(), ControllerState::default());
        assert_eq!(controller.target_language(), "");
        assert!(controller.last_result().is_none());
    }
}
