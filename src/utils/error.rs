//! Error types for the toolkit.
//!
//! Provides a hierarchy of error types using `thiserror` for ergonomic error handling.
//! Every error derives `Serialize` so a frontend can render it verbatim.

use std::io;
use thiserror::Error;
use serde::Serialize;

/// Failures talking to a third-party provider (LLM, email delivery).
#[derive(Error, Debug, Clone, Serialize, PartialEq, Eq)]
pub enum UpstreamError {
    /// Provider answered 429
    #[error("Too many requests, please wait a moment")]
    RateLimited,
    /// Missing credential or provider answered 401
    #[error("Service misconfigured")]
    Misconfigured,
    /// Provider refused the request (400), e.g. content policy
    #[error("Request rejected: {0}")]
    Rejected(String),
    /// Provider answered 2xx without usable content
    #[error("Provider returned an empty response")]
    EmptyResponse,
    /// Network or decoding failure before a status was available
    #[error("Transport error: {0}")]
    Transport(String),
    /// Any other non-success status
    #[error("Provider error ({status}): {body}")]
    Status { status: u16, body: String },
}

impl UpstreamError {
    /// Classifies a non-success HTTP status returned by a provider.
    pub fn from_status(status: u16, body: impl Into<String>) -> Self {
        match status {
            429 => Self::RateLimited,
            401 => Self::Misconfigured,
            400 => Self::Rejected(body.into()),
            _ => Self::Status { status, body: body.into() },
        }
    }
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => Self::from_status(status.as_u16(), err.to_string()),
            None => Self::Transport(err.to_string()),
        }
    }
}

/// Main error type for the toolkit.
///
/// All utility and handler errors are converted to this type before being
/// returned to the caller.
#[derive(Error, Debug, Clone, Serialize, PartialEq, Eq)]
pub enum ToolError {
    /// Malformed or missing required input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Input does not conform to the expected encoding
    #[error("Decode error: {0}")]
    Decode(String),

    /// Structured text failed to parse; `message` is the parser's own text
    #[error("{message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },

    /// Secret policy leaves no characters to draw from
    #[error("No characters available: enable at least one character class")]
    EmptyCharset,

    /// Third-party API failure
    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    /// Image processing failed
    #[error("Processing error: {0}")]
    Processing(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(String),
}

/// Convenience result type for toolkit operations.
pub type ToolResult<T> = Result<T, ToolError>;

// Helper methods for error creation
impl ToolError {
    pub fn validation<T: Into<String>>(msg: T) -> Self {
        Self::Validation(msg.into())
    }

    pub fn decode<T: Into<String>>(msg: T) -> Self {
        Self::Decode(msg.into())
    }

    pub fn processing<T: Into<String>>(msg: T) -> Self {
        Self::Processing(msg.into())
    }
}

impl From<io::Error> for ToolError {
    fn from(err: io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ToolError {
    fn from(err: serde_json::Error) -> Self {
        Self::Syntax {
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }
}

impl From<base64::DecodeError> for ToolError {
    fn from(err: base64::DecodeError) -> Self {
        Self::Decode(format!("Invalid Base64: {err}"))
    }
}

impl From<image::ImageError> for ToolError {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::Decoding(e) => Self::Decode(format!("Could not load image: {e}")),
            image::ImageError::Unsupported(e) => Self::Decode(format!("Unsupported image: {e}")),
            image::ImageError::IoError(e) => Self::Io(e.to_string()),
            other => Self::Processing(other.to_string()),
        }
    }
}
