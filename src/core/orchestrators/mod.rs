mod ocr_controller;
mod request_session;
mod translation_controller;

pub use ocr_controller::OcrController;
pub use translation_controller::TranslationController;
