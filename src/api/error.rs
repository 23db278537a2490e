//! Gateway error classification.
//!
//! [`ApiError`] is the full error raised by [`ApiClient`](super::ApiClient).
//! [`FetchFailure`] is the cloneable summary handed to reducers, which only
//! need to know "not found" versus "anything else, with this message".

use serde::Deserialize;
use thiserror::Error;

/// Errors raised while talking to the character API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The configured base endpoint cannot be used to build request URLs.
    #[error("Invalid API base URL '{url}'")]
    InvalidBaseUrl { url: String },

    /// HTTP client construction failed.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The API answered 404.
    #[error("Request failed with status code 404")]
    NotFound { url: String },

    /// Any other non-2xx status.
    #[error("Request failed with status code {status}: {message}")]
    Status { status: u16, message: String },

    /// The transport gave up waiting.
    #[error("Request to '{url}' timed out")]
    Timeout { url: String },

    /// Network failure before a response was received.
    #[error("Connection failed to '{url}': {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The body did not match the expected schema.
    #[error("Unexpected response from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound { .. })
    }

    /// Stable identifier for log fields.
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::InvalidBaseUrl { .. } => "invalid_base_url",
            ApiError::Client(_) => "client_error",
            ApiError::NotFound { .. } => "not_found",
            ApiError::Status { .. } => "status_error",
            ApiError::Timeout { .. } => "timeout",
            ApiError::Connection { .. } => "connection_error",
            ApiError::Decode { .. } => "decode_error",
        }
    }

    /// Classify a transport error from reqwest.
    pub(crate) fn transport(url: &str, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            ApiError::Timeout {
                url: url.to_string(),
            }
        } else {
            ApiError::Connection {
                url: url.to_string(),
                source,
            }
        }
    }

    /// Build the error for a non-2xx response from its status and body.
    pub(crate) fn from_status(url: &str, status: u16, body: &[u8]) -> Self {
        if status == 404 {
            return ApiError::NotFound {
                url: url.to_string(),
            };
        }
        ApiError::Status {
            status,
            message: error_message(body),
        }
    }
}

/// Error body shape used by the API: `{"error": "..."}`.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

fn error_message(body: &[u8]) -> String {
    if let Ok(parsed) = serde_json::from_slice::<ErrorBody>(body) {
        return parsed.error;
    }
    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    if text.is_empty() {
        "empty response body".to_string()
    } else {
        text.chars().take(200).collect()
    }
}

/// Reducer-facing failure summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchFailure {
    NotFound,
    Failed { message: String },
}

impl FetchFailure {
    pub fn message(&self) -> String {
        match self {
            FetchFailure::NotFound => "Request failed with status code 404".to_string(),
            FetchFailure::Failed { message } => message.clone(),
        }
    }
}

impl From<&ApiError> for FetchFailure {
    fn from(err: &ApiError) -> Self {
        if err.is_not_found() {
            FetchFailure::NotFound
        } else {
            FetchFailure::Failed {
                message: err.to_string(),
            }
        }
    }
}
