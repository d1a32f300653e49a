use miette::Diagnostic;
use reqwest::StatusCode;
use thiserror::Error;

/// Errors returned by the events API client
#[derive(Debug, Error, Diagnostic)]
pub enum ApiError {
    /// Non-success status. The message is the response body, or `HTTP <status>` when empty.
    #[error("{message}")]
    #[diagnostic(code(planning::api::status))]
    Status { status: StatusCode, message: String },

    /// Lookup by id did not succeed
    #[error("Not found")]
    #[diagnostic(code(planning::api::not_found))]
    NotFound { status: StatusCode },

    #[error("Request failed: {0}")]
    #[diagnostic(code(planning::api::transport))]
    Transport(#[from] reqwest::Error),

    /// Success status but the body does not match the expected shape
    #[error("Malformed response: {0}")]
    #[diagnostic(code(planning::api::decode))]
    Decode(String),

    #[error("Invalid request URL `{url}`: {reason}")]
    #[diagnostic(
        code(planning::api::invalid_url),
        help("set API_BASE_URL or pass an absolute URL as the path")
    )]
    InvalidUrl { url: String, reason: String },
}

impl ApiError {
    /// Build a status error from a response body, falling back to `HTTP <status>`
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        let message = if body.is_empty() {
            format!("HTTP {}", status.as_u16())
        } else {
            body.to_string()
        };
        ApiError::Status { status, message }
    }

    /// HTTP status reported by the remote API, if it answered at all
    pub fn upstream_status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } | ApiError::NotFound { status } => Some(*status),
            _ => None,
        }
    }
}
