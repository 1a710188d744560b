use crate::global_constants;

pub type ApiResult<T> = std::result::Result<T, ApiClientError>;

/// Normalized failure returned by every call through the API client.
///
/// Callers never see the transport's native error; they get a display message,
/// the HTTP status when a response arrived, and the server's application code
/// when its error body carried one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ApiClientError {
    pub message: String,
    pub status: Option<u16>,
    pub code: Option<String>,
}

impl ApiClientError {
    pub fn new(message: impl Into<String>, status: Option<u16>, code: Option<String>) -> Self {
        Self {
            message: message.into(),
            status,
            code,
        }
    }

    pub fn from_status(status: u16) -> Self {
        Self::new(fallback_message_for_status(Some(status)), Some(status), None)
    }

    pub fn unexpected_response(status: Option<u16>) -> Self {
        Self::new(global_constants::ERROR_UNEXPECTED, status, None)
    }

    pub fn is_rate_limited(&self) -> bool {
        self.status == Some(429)
    }
}

pub fn fallback_message_for_status(status: Option<u16>) -> &'static str {
    match status {
        Some(429) => global_constants::ERROR_TOO_MANY_REQUESTS,
        Some(413) => global_constants::ERROR_PAYLOAD_TOO_LARGE,
        Some(status) if status >= 500 => global_constants::ERROR_SERVER,
        Some(404) => global_constants::ERROR_NOT_FOUND,
        _ => global_constants::ERROR_UNEXPECTED,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ControllerError {
    #[error("{message}")]
    Validation { message: String },

    #[error(transparent)]
    Transport(#[from] ApiClientError),

    #[error("{message}")]
    EmptyResult { message: String },
}

impl ControllerError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn empty_result(message: impl Into<String>) -> Self {
        Self::EmptyResult {
            message: message.into(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport(error) => error.status,
            _ => None,
        }
    }
}
