mod controller_state;
mod image_file;
mod language;
mod ocr;
mod theme_mode;
mod toast;
mod translation;

pub use controller_state::ControllerState;
pub use image_file::ImageFile;
pub use language::Language;
pub use ocr::{normalize_whitespace, OcrResult, OcrUploadData, OcrUploadResponse};
pub use theme_mode::ThemeMode;
pub use toast::{Toast, ToastId, ToastKind};
pub use translation::{TranslationRequest, TranslationResponse, TranslationResult};
