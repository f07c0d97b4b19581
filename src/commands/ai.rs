//! Hosted LLM proxy endpoints.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::assistant::{
    CHAT_MAX_TOKENS, SUGGEST_MAX_TOKENS, build_conversation, enhance_prompt, fallback_suggestion,
    suggestion_messages, validate_prompt,
};
use crate::core::AppState;
use crate::upstream::{ChatMessage, GeneratedImage};
use crate::utils::{UpstreamError, require_field};
use super::{ApiError, ApiResult};

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub message: String,
}

pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> ApiResult<Json<ChatResponse>> {
    let Json(req) = payload?;
    let conversation = build_conversation(&req.messages)?;
    let client = state.ai().ok_or_else(ApiError::misconfigured)?;

    // Only the image endpoint reports provider refusals as a client error
    let message = client
        .chat(&conversation, CHAT_MAX_TOKENS)
        .await
        .map_err(|e| match e {
            UpstreamError::Rejected(_) => ApiError::upstream_failed(e),
            other => other.into(),
        })?;
    Ok(Json(ChatResponse { message }))
}

#[derive(Debug, Deserialize)]
pub struct ImageRequest {
    #[serde(default)]
    pub prompt: Option<String>,
}

pub async fn generate_image(
    State(state): State<AppState>,
    payload: Result<Json<ImageRequest>, JsonRejection>,
) -> ApiResult<Json<GeneratedImage>> {
    let Json(req) = payload?;
    let prompt = validate_prompt(req.prompt.as_deref())?;
    let client = state.ai().ok_or_else(ApiError::misconfigured)?;

    let image = client.generate_image(&enhance_prompt(prompt)).await?;
    info!("Image generated");
    Ok(Json(image))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestRequest {
    #[serde(default)]
    pub project_type: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SuggestResponse {
    pub suggestion: String,
}

/// Project advice from the model, or the static table when the model is
/// unconfigured or fails. Upstream errors never reach the caller.
pub async fn suggest(
    State(state): State<AppState>,
    payload: Result<Json<SuggestRequest>, JsonRejection>,
) -> ApiResult<Json<SuggestResponse>> {
    let Json(req) = payload?;
    let project_type = require_field("projectType", req.project_type.as_deref())?;

    let Some(client) = state.ai() else {
        return Ok(Json(SuggestResponse {
            suggestion: fallback_suggestion(project_type).to_string(),
        }));
    };

    let suggestion = match client.chat(&suggestion_messages(project_type), SUGGEST_MAX_TOKENS).await {
        Ok(text) => text,
        Err(e) => {
            warn!("Suggestion for {} fell back to static advice: {}", project_type, e);
            fallback_suggestion(project_type).to_string()
        }
    };
    Ok(Json(SuggestResponse { suggestion }))
}
