//! HTTP error responses.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::warn;

use crate::utils::{ToolError, UpstreamError};

/// Body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
    /// Error code for programmatic handling.
    pub code: &'static str,
    /// Parser position for syntax errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<usize>,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Tool(#[from] ToolError),

    /// Body could not be read as the expected JSON.
    #[error("{0}")]
    BadRequest(String),

    /// Body exceeded the configured size limit.
    #[error("{0}")]
    PayloadTooLarge(String),

    /// Provider failure answered with a fixed message and a 500.
    #[error("{message}")]
    Failed {
        code: &'static str,
        message: &'static str,
        source: UpstreamError,
    },
}

/// Message sent in place of raw provider output.
const UPSTREAM_FAILURE_MESSAGE: &str = "The service is temporarily unavailable, please try again later";

impl From<UpstreamError> for ApiError {
    fn from(err: UpstreamError) -> Self {
        Self::Tool(ToolError::Upstream(err))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Self::PayloadTooLarge(rejection.body_text())
        } else {
            Self::BadRequest(rejection.body_text())
        }
    }
}

impl ApiError {
    pub fn misconfigured() -> Self {
        UpstreamError::Misconfigured.into()
    }

    /// Email delivery failed, whatever the provider answered.
    pub fn delivery_failed(source: UpstreamError) -> Self {
        Self::Failed {
            code: "delivery_failed",
            message: "Failed to send email",
            source,
        }
    }

    /// The provider refused a request the client could not have fixed.
    pub fn upstream_failed(source: UpstreamError) -> Self {
        Self::Failed {
            code: "upstream_error",
            message: UPSTREAM_FAILURE_MESSAGE,
            source,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "bad_request",
            Self::PayloadTooLarge(_) => "payload_too_large",
            Self::Failed { code, .. } => *code,
            Self::Tool(e) => match e {
                ToolError::Validation(_) => "validation",
                ToolError::Decode(_) => "decode",
                ToolError::Syntax { .. } => "syntax",
                ToolError::EmptyCharset => "empty_charset",
                ToolError::Processing(_) => "processing",
                ToolError::Io(_) => "io",
                ToolError::Upstream(u) => match u {
                    UpstreamError::RateLimited => "rate_limited",
                    UpstreamError::Misconfigured => "misconfigured",
                    UpstreamError::Rejected(_) => "rejected",
                    UpstreamError::EmptyResponse => "empty_response",
                    UpstreamError::Transport(_) | UpstreamError::Status { .. } => "upstream_error",
                },
            },
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Failed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Tool(e) => match e {
                ToolError::Validation(_)
                | ToolError::Decode(_)
                | ToolError::Syntax { .. }
                | ToolError::EmptyCharset
                | ToolError::Upstream(UpstreamError::Rejected(_)) => StatusCode::BAD_REQUEST,
                ToolError::Upstream(UpstreamError::RateLimited) => StatusCode::TOO_MANY_REQUESTS,
                ToolError::Upstream(_) | ToolError::Processing(_) | ToolError::Io(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
        }
    }

    /// Message safe to show the client; provider output stays in the logs.
    pub fn public_message(&self) -> String {
        match self {
            Self::Tool(ToolError::Upstream(UpstreamError::Transport(_) | UpstreamError::Status { .. })) => {
                UPSTREAM_FAILURE_MESSAGE.to_string()
            }
            _ => self.to_string(),
        }
    }

    fn detail(&self) -> String {
        match self {
            Self::Failed { source, .. } => source.to_string(),
            _ => self.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            warn!("Request failed ({}): {}", status, self.detail());
        }

        let (line, column) = match &self {
            Self::Tool(ToolError::Syntax { line, column, .. }) => (Some(*line), Some(*column)),
            _ => (None, None),
        };
        let body = ErrorResponse {
            error: self.public_message(),
            code: self.code(),
            line,
            column,
        };
        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;
