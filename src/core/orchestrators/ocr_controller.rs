use std::sync::Arc;

use crate::core::errors::ControllerError;
use crate::core::interfaces::adapters::{decode_response, ApiClient};
use crate::core::models::{ControllerState, ImageFile, OcrResult, OcrUploadResponse};
use crate::core::orchestrators::request_session::RequestSession;
use crate::core::services::ToastService;
use crate::global_constants;

pub struct OcrController {
    api_client: Arc<dyn ApiClient>,
    toasts: ToastService,
    session: RequestSession<OcrResult>,
}

impl OcrController {
    pub fn new(api_client: Arc<dyn ApiClient>, toasts: ToastService) -> Self {
        Self {
            api_client,
            toasts,
            session: RequestSession::new(),
        }
    }

    pub fn state(&self) -> ControllerState {
        self.session.state()
    }

    pub fn last_result(&self) -> Option<OcrResult> {
        self.session.last_result()
    }

    pub async fn process_image(&self, image_file: &ImageFile) -> Result<String, ControllerError> {
        self.validate_image(image_file)?;

        log::info!(
            "[OCR] Processing {} ({}, {} bytes)",
            image_file.name,
            image_file.mime_type,
            image_file.size()
        );

        let ticket = self.session.begin();
        let loading_toast = self.toasts.begin_loading(global_constants::OCR_LOADING_MESSAGE);

        let outcome = self.submit_image(image_file).await;
        drop(loading_toast);

        match outcome {
            Ok(result) => {
                let text = result.text.clone();
                log::info!("[OCR] Extracted {} characters", text.len());
                if !ticket.succeed(&text, result) {
                    log::debug!("[OCR] Response superseded by a newer request");
                }
                Ok(text)
            }
            Err(error) => {
                log::error!("[OCR] Text extraction failed: {}", error);
                if ticket.fail(&error.to_string()) {
                    self.toasts
                        .show_error(Self::error_title(&error), Some(&error.to_string()));
                }
                Err(error)
            }
        }
    }

    pub fn reset(&self) {
        log::debug!("[OCR] Resetting state");
        self.session.reset();
    }

    fn validate_image(&self, image_file: &ImageFile) -> Result<(), ControllerError> {
        if !image_file.is_image() {
            return Err(self.reject(
                global_constants::OCR_INVALID_FILE_TITLE,
                global_constants::OCR_INVALID_FILE_MESSAGE,
            ));
        }

        if image_file.size() > global_constants::MAX_IMAGE_SIZE_BYTES {
            return Err(self.reject(
                global_constants::OCR_FILE_TOO_LARGE_TITLE,
                global_constants::OCR_FILE_TOO_LARGE_MESSAGE,
            ));
        }

        Ok(())
    }

    fn reject(&self, title: &str, message: &str) -> ControllerError {
        log::warn!("[OCR] Rejected input: {}", message);
        self.session.record_rejection(message);
        self.toasts.show_error(title, Some(message));
        ControllerError::validation(message)
    }

    async fn submit_image(&self, image_file: &ImageFile) -> Result<OcrResult, ControllerError> {
        let response = self
            .api_client
            .upload_file(global_constants::UPLOAD_ENDPOINT, image_file, &[])
            .await?;
        let response: OcrUploadResponse = decode_response(response)?;

        log::debug!(
            "[OCR] Upload response: status={:?}, message={:?}",
            response.status,
            response.message
        );

        response
            .data
            .and_then(OcrResult::from_upload_data)
            .ok_or_else(|| ControllerError::empty_result(global_constants::OCR_NO_TEXT_MESSAGE))
    }

    fn error_title(error: &ControllerError) -> &'static str {
        match error {
            ControllerError::EmptyResult { .. } => global_constants::OCR_NO_TEXT_TITLE,
            _ => global_constants::OCR_FAILED_TITLE,
        }
    }
}
