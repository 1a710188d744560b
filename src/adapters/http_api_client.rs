use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Method, Response};

use crate::core::errors::{fallback_message_for_status, ApiClientError, ApiResult};
use crate::core::interfaces::adapters::{ApiClient, FormValue, HttpMethod, RequestOptions};
use crate::core::models::ImageFile;
use crate::global_constants;

pub struct HttpApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        log::info!("[API] Using API base {}", base_url);

        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Delete => Method::DELETE,
            HttpMethod::Patch => Method::PATCH,
        }
    }

    fn build_upload_form(
        file: &ImageFile,
        extra_fields: &[(String, FormValue)],
    ) -> ApiResult<Form> {
        let image_part = Part::bytes(file.bytes().to_vec())
            .file_name(file.name.clone())
            .mime_str(&file.mime_type)
            .map_err(|error| {
                log::warn!("[API] Invalid media type {}: {}", file.mime_type, error);
                ApiClientError::unexpected_response(None)
            })?;

        let form = extra_fields.iter().fold(
            Form::new().part(global_constants::UPLOAD_IMAGE_FIELD, image_part),
            |form, (key, value)| form.text(key.clone(), value.to_string()),
        );

        Ok(form)
    }

    async fn read_response(response: reqwest::Result<Response>) -> ApiResult<serde_json::Value> {
        let response = response.map_err(Self::normalize_transport_error)?;
        let status = response.status().as_u16();
        log::debug!("[API] Response status: {}", status);

        let body = response
            .bytes()
            .await
            .map_err(|error| ApiClientError::new(error.to_string(), Some(status), None))?;

        if !(200..300).contains(&status) {
            return Err(Self::normalize_status_error(status, &body));
        }

        if body.is_empty() {
            return Ok(serde_json::Value::Null);
        }

        serde_json::from_slice(&body).map_err(|error| {
            log::warn!("[API] Response body is not valid JSON: {}", error);
            ApiClientError::unexpected_response(Some(status))
        })
    }

    fn normalize_transport_error(error: reqwest::Error) -> ApiClientError {
        log::error!("[API] Transport failure: {}", error);
        let status = error.status().map(|status| status.as_u16());
        let message = error.to_string();

        if message.trim().is_empty() {
            ApiClientError::new(fallback_message_for_status(status), status, None)
        } else {
            ApiClientError::new(message, status, None)
        }
    }

    /// Fields are read one by one so a malformed `message` does not hide a valid `code`.
    fn normalize_status_error(status: u16, body: &[u8]) -> ApiClientError {
        let server_error: serde_json::Value =
            serde_json::from_slice(body).unwrap_or(serde_json::Value::Null);

        let code = match server_error.get("code") {
            Some(serde_json::Value::String(code)) => Some(code.clone()),
            Some(serde_json::Value::Number(code)) => Some(code.to_string()),
            _ => None,
        };

        let message = server_error
            .get("message")
            .and_then(serde_json::Value::as_str)
            .filter(|message| !message.trim().is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| fallback_message_for_status(Some(status)).to_string());

        log::warn!("[API] Request failed with status {}: {}", status, message);
        ApiClientError::new(message, Some(status), code)
    }
}

#[async_trait]
impl ApiClient for HttpApiClient {
    async fn request(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> ApiResult<serde_json::Value> {
        let url = self.build_url(endpoint);
        log::debug!("[API] {} {}", options.method.as_str(), url);

        let mut request = self
            .client
            .request(Self::to_reqwest_method(options.method), &url);

        for (name, value) in options.headers {
            request = request.header(name, value);
        }

        if let Some(body) = options.body {
            request = request.body(body);
        }

        Self::read_response(request.send().await).await
    }

    async fn upload_file(
        &self,
        endpoint: &str,
        file: &ImageFile,
        extra_fields: &[(String, FormValue)],
    ) -> ApiResult<serde_json::Value> {
        let url = self.build_url(endpoint);
        log::debug!("[API] POST {} (multipart, {} bytes)", url, file.size());

        let form = Self::build_upload_form(file, extra_fields)?;
        let response = self.client.post(&url).multipart(form).send().await;

        Self::read_response(response).await
    }
}
