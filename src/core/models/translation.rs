use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationRequest {
    pub text: String,
    pub target_language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_language: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResponse {
    #[serde(default)]
    pub original: Option<String>,
    #[serde(default)]
    pub translated: Option<String>,
    #[serde(default)]
    pub target_language: Option<String>,
    #[serde(default)]
    pub source_language: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranslationResult {
    pub original_text: String,
    pub translated_text: String,
    pub target_language_code: String,
    pub source_language_code: Option<String>,
    pub confidence: Option<f64>,
}

impl TranslationResult {
    /// Returns `None` when the translation is missing, null or blank after trimming.
    pub fn from_response(
        response: TranslationResponse,
        original_text: &str,
        requested_language: &str,
    ) -> Option<Self> {
        let translated_text = response
            .translated
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())?
            .to_string();

        let original_text = response
            .original
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| original_text.to_string());

        let target_language_code = response
            .target_language
            .filter(|code| !code.is_empty())
            .unwrap_or_else(|| requested_language.to_string());

        Some(Self {
            original_text,
            translated_text,
            target_language_code,
            source_language_code: response.source_language,
            confidence: response.confidence,
        })
    }
}
