use std::time::Duration;

pub const APPLICATION_NAME: &str = "Read Beyond";
pub const APPLICATION_TITLE: &str = "Read Beyond - Translate Text from Images";
pub const CONFIG_DIR_NAME: &str = "read-beyond";
pub const SETTINGS_FILE_NAME: &str = "settings.json";

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_SITE_URL: &str = "https://read-beyond.vercel.app";

pub const UPLOAD_ENDPOINT: &str = "/api/upload";
pub const TRANSLATE_ENDPOINT: &str = "/api/translate";
pub const UPLOAD_IMAGE_FIELD: &str = "image";

pub const MAX_IMAGE_SIZE_BYTES: usize = 10 * 1024 * 1024;
pub const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

pub const THEME_STORAGE_KEY: &str = "theme";
pub const THEME_VALUE_DARK: &str = "dark";
pub const THEME_VALUE_LIGHT: &str = "light";

pub const TOAST_ERROR_DURATION: Duration = Duration::from_millis(5000);
pub const TOAST_SUCCESS_DURATION: Duration = Duration::from_millis(3000);
pub const TOAST_INFO_DURATION: Duration = Duration::from_millis(3000);

pub const ANALYTICS_DEFAULT_CATEGORY: &str = "engagement";

pub const ERROR_TOO_MANY_REQUESTS: &str = "Too many requests. Please wait a moment and try again.";
pub const ERROR_PAYLOAD_TOO_LARGE: &str = "Image file is too large. Please use a smaller image.";
pub const ERROR_SERVER: &str = "Server error. Please try again later.";
pub const ERROR_NOT_FOUND: &str = "Service not found. Please check your connection.";
pub const ERROR_UNEXPECTED: &str = "An unexpected error occurred. Please try again.";

pub const OCR_LOADING_MESSAGE: &str = "Extracting text from image...";
pub const OCR_INVALID_FILE_TITLE: &str = "Invalid File";
pub const OCR_INVALID_FILE_MESSAGE: &str = "Please select a valid image file";
pub const OCR_FILE_TOO_LARGE_TITLE: &str = "File Too Large";
pub const OCR_FILE_TOO_LARGE_MESSAGE: &str =
    "Image is too large. Please use an image smaller than 10MB.";
pub const OCR_NO_TEXT_TITLE: &str = "No Text Found";
pub const OCR_NO_TEXT_MESSAGE: &str =
    "No text could be extracted from this image. Please try a clearer image.";
pub const OCR_FAILED_TITLE: &str = "OCR Failed";

pub const TRANSLATION_ERROR_TITLE: &str = "Translation Error";
pub const TRANSLATION_FAILED_TITLE: &str = "Translation Failed";
pub const TRANSLATION_NO_TEXT_MESSAGE: &str = "No text to translate";
pub const TRANSLATION_NO_LANGUAGE_MESSAGE: &str = "Please select a target language";
pub const TRANSLATION_EMPTY_MESSAGE: &str = "Translation returned empty result. Please try again.";
pub const TRANSLATION_RATE_LIMIT_TITLE: &str = "Rate Limit";
pub const TRANSLATION_RATE_LIMIT_MESSAGE: &str =
    "Too many translation requests. Please wait a moment.";

pub const STARTUP_BANNER: &str = r#"
╔════════════════════════════════════════════════════════╗
║  Read Beyond                                           ║
║                                                        ║
║  Translate text from images                            ║
║                                                        ║
╚════════════════════════════════════════════════════════╝
"#;
