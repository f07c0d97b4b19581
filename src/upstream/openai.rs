//! Chat-completion and image-generation client.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::OpenAiConfig;
use crate::utils::UpstreamError;

use super::{endpoint, send_json};

pub const IMAGE_SIZE: &str = "1024x1024";
pub const IMAGE_QUALITY: &str = "standard";
pub const IMAGE_STYLE: &str = "vivid";
pub const TEMPERATURE: f32 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self { role, content: content.into() }
    }
}

/// A generated image hosted by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedImage {
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revised_prompt: Option<String>,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Serialize)]
struct ImageRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    n: u8,
    size: &'a str,
    quality: &'a str,
    style: &'a str,
}

#[derive(Deserialize)]
struct ImageResponse {
    #[serde(default)]
    data: Vec<ImageData>,
}

#[derive(Deserialize)]
struct ImageData {
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    revised_prompt: Option<String>,
}

#[derive(Clone)]
pub struct OpenAiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    chat_model: String,
    image_model: String,
}

impl OpenAiClient {
    pub fn new(config: &OpenAiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            chat_model: config.chat_model.clone(),
            image_model: config.image_model.clone(),
        }
    }

    /// Sends `messages` as-is and returns the first choice's text.
    pub async fn chat(&self, messages: &[ChatMessage], max_tokens: u32) -> Result<String, UpstreamError> {
        let url = endpoint(&self.base_url, "chat/completions");
        let body = ChatRequest {
            model: &self.chat_model,
            messages,
            max_tokens,
            temperature: TEMPERATURE,
        };
        debug!("Requesting chat completion ({} messages)", messages.len());

        let response: ChatResponse = send_json(self.http.post(url).json(&body), &self.api_key)
            .await
            .inspect_err(|e| warn!("Chat completion failed: {e}"))?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|text| !text.trim().is_empty())
            .ok_or(UpstreamError::EmptyResponse)
    }

    /// Generates a single square image for `prompt`.
    pub async fn generate_image(&self, prompt: &str) -> Result<GeneratedImage, UpstreamError> {
        let url = endpoint(&self.base_url, "images/generations");
        let body = ImageRequest {
            model: &self.image_model,
            prompt,
            n: 1,
            size: IMAGE_SIZE,
            quality: IMAGE_QUALITY,
            style: IMAGE_STYLE,
        };
        debug!("Requesting image generation");

        let response: ImageResponse = send_json(self.http.post(url).json(&body), &self.api_key)
            .await
            .inspect_err(|e| warn!("Image generation failed: {e}"))?;

        let image = response.data.into_iter().next().ok_or(UpstreamError::EmptyResponse)?;
        let image_url = image.url.ok_or(UpstreamError::EmptyResponse)?;
        Ok(GeneratedImage {
            image_url,
            revised_prompt: image.revised_prompt,
        })
    }
}
