/*
[INPUT]:  Error sources (credentials, key decoding, serialization, HTTP transport)
[OUTPUT]: Structured error types with transport context
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the DMarket client
#[derive(Error, Debug)]
pub enum DmarketError {
    /// Missing or invalid credentials at construction time
    #[error("Configuration error: {0}")]
    Config(String),

    /// Secret key cannot be decoded or used for signing
    #[error("Invalid secret key: {0}")]
    KeyFormat(String),

    /// Payload could not be serialized
    #[error("Encoding error: {0}")]
    Encoding(#[from] serde_json::Error),

    /// Method string is not a valid HTTP method
    #[error("Invalid HTTP method: {0:?}")]
    InvalidMethod(String),

    /// Network failure, timeout, or error status from the API
    #[error("API call failed: {message}{}", details(.status, .body))]
    Transport {
        status: Option<u16>,
        message: String,
        body: Option<String>,
        timed_out: bool,
    },

    /// Successful status but the body is not JSON
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

fn details(status: &Option<u16>, body: &Option<String>) -> String {
    let mut out = String::new();
    if let Some(status) = status {
        out.push_str(&format!(" (status {status})"));
    }
    match body.as_deref() {
        Some(body) if !body.is_empty() => out.push_str(&format!(". Details: {body}")),
        _ => out.push_str(". Details: No response body"),
    }
    out
}

impl DmarketError {
    /// Build a transport error from a non-success status and its raw body
    pub fn status_error(status: StatusCode, body: impl Into<String>) -> Self {
        let body = body.into();
        DmarketError::Transport {
            status: Some(status.as_u16()),
            message: format!("HTTP {status}"),
            body: if body.is_empty() { None } else { Some(body) },
            timed_out: false,
        }
    }

    /// Check if the error came from the transport layer
    pub fn is_transport(&self) -> bool {
        matches!(self, DmarketError::Transport { .. })
    }

    /// HTTP status code, when the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            DmarketError::Transport { status, .. } => *status,
            _ => None,
        }
    }

    /// Raw response body text, when the server sent one
    pub fn response_body(&self) -> Option<&str> {
        match self {
            DmarketError::Transport { body, .. } => body.as_deref(),
            _ => None,
        }
    }

    /// Check if the request timed out
    pub fn is_timeout(&self) -> bool {
        matches!(self, DmarketError::Transport { timed_out: true, .. })
    }
}

impl From<reqwest::Error> for DmarketError {
    fn from(err: reqwest::Error) -> Self {
        DmarketError::Transport {
            status: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
            body: None,
            timed_out: err.is_timeout(),
        }
    }
}

/// Result type alias for DMarket operations
pub type Result<T> = std::result::Result<T, DmarketError>;
