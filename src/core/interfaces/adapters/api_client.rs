use std::fmt;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::core::errors::{ApiClientError, ApiResult};
use crate::core::models::ImageFile;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    pub method: HttpMethod,
    /// Already serialized by the caller.
    pub body: Option<String>,
    pub headers: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn post_json(body: String) -> Self {
        Self {
            method: HttpMethod::Post,
            body: Some(body),
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormValue {
    Text(String),
    Integer(i64),
    Number(f64),
}

impl fmt::Display for FormValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormValue::Text(value) => write!(f, "{}", value),
            FormValue::Integer(value) => write!(f, "{}", value),
            FormValue::Number(value) => write!(f, "{}", value),
        }
    }
}

impl From<&str> for FormValue {
    fn from(value: &str) -> Self {
        FormValue::Text(value.to_string())
    }
}

impl From<String> for FormValue {
    fn from(value: String) -> Self {
        FormValue::Text(value)
    }
}

impl From<i64> for FormValue {
    fn from(value: i64) -> Self {
        FormValue::Integer(value)
    }
}

impl From<f64> for FormValue {
    fn from(value: f64) -> Self {
        FormValue::Number(value)
    }
}

#[async_trait]
pub trait ApiClient: Send + Sync {
    async fn request(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> ApiResult<serde_json::Value>;

    async fn upload_file(
        &self,
        endpoint: &str,
        file: &ImageFile,
        extra_fields: &[(String, FormValue)],
    ) -> ApiResult<serde_json::Value>;
}

pub fn decode_response<T: DeserializeOwned>(value: serde_json::Value) -> ApiResult<T> {
    serde_json::from_value(value).map_err(|error| {
        log::warn!("[API] Response did not match the expected shape: {}", error);
        ApiClientError::unexpected_response(None)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::global_constants;

    #[derive(Debug, serde::Deserialize)]
    struct Greeting {
        message: String,
    }

    #[test]
    fn test_request_options_default_to_get_without_body() {
        let options = RequestOptions::default();

        assert_eq!(options.method, HttpMethod::Get);
        assert_eq!(options.body, None);
        assert!(options.headers.is_empty());
    }

    #[test]
    fn test_post_json_sets_content_type() {
        let options = RequestOptions::post_json("{}".to_string());

        assert_eq!(options.method.as_str(), "POST");
        assert_eq!(
            options.headers,
            vec![("Content-Type".to_string(), "application/json".to_string())]
        );
    }

    #[test]
    fn test_form_value_renders_numbers_plainly() {
        assert_eq!(FormValue::from(3i64).to_string(), "3");
        assert_eq!(FormValue::from(1.5f64).to_string(), "1.5");
        assert_eq!(FormValue::from(2.0f64).to_string(), "2");
        assert_eq!(FormValue::from("eng").to_string(), "eng");
    }

    #[test]
    fn test_decode_response_maps_shape_errors_to_unexpected() {
        let decoded: ApiResult<Greeting> = decode_response(serde_json::json!({"message": "hi"}));
        assert_eq!(decoded.unwrap().message, "hi");

        let error = decode_response::<Greeting>(serde_json::json!([1, 2])).unwrap_err();
        assert_eq!(error.message, global_constants::ERROR_UNEXPECTED);
        assert_eq!(error.status, None);
    }
}
