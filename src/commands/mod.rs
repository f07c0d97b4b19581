//! HTTP handlers.
//!
//! - [`tools`]: Codec, palette, password, JSON and QR utilities
//! - [`images`]: Batch image re-encoding
//! - [`ai`]: Chat, image generation and project suggestions
//! - [`contact`]: Contact form delivery

mod error;

pub mod ai;
pub mod contact;
pub mod images;
pub mod tools;

pub use error::{ApiError, ApiResult, ErrorResponse};

use axum::Json;
use serde_json::{Value, json};

pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
