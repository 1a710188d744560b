use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct OcrUploadResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<OcrUploadData>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OcrUploadData {
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub mimetype: Option<String>,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub processing_time: Option<f64>,
    #[serde(default)]
    pub word_count: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OcrResult {
    pub text: String,
    pub confidence: Option<f64>,
    pub language: Option<String>,
    pub processing_time_ms: Option<f64>,
    pub filename: Option<String>,
    pub mimetype: Option<String>,
    pub size: Option<u64>,
    pub word_count: Option<u64>,
}

impl OcrResult {
    /// Returns `None` when the backend produced no usable text.
    pub fn from_upload_data(data: OcrUploadData) -> Option<Self> {
        let text = normalize_whitespace(data.text.as_deref().unwrap_or_default());
        if text.is_empty() {
            return None;
        }

        Some(Self {
            text,
            confidence: data.confidence,
            language: data.language,
            processing_time_ms: data.processing_time,
            filename: data.filename,
            mimetype: data.mimetype,
            size: data.size,
            word_count: data.word_count,
        })
    }
}

/// Collapses newlines and whitespace runs into single spaces and trims the ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
