//! Clients for third-party providers.
//!
//! Both clients share one request path: bearer auth, status classification
//! into [`UpstreamError`], then JSON decoding of the success body. Nothing is
//! retried; a failure surfaces to the caller immediately.

mod email;
mod openai;

pub use email::{EmailClient, OutgoingEmail};
pub use openai::{ChatMessage, GeneratedImage, OpenAiClient, Role};

use serde::de::DeserializeOwned;
use crate::utils::UpstreamError;

async fn send_json<T: DeserializeOwned>(
    req: reqwest::RequestBuilder,
    token: &str,
) -> Result<T, UpstreamError> {
    let response = req.bearer_auth(token).send().await?;
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    if !status.is_success() {
        return Err(UpstreamError::from_status(status.as_u16(), provider_message(&body)));
    }
    serde_json::from_str(&body).map_err(|e| UpstreamError::Transport(format!("invalid response body: {e}")))
}

/// Pulls the human-readable message out of a provider error body.
///
/// OpenAI nests it under `error.message`, Resend puts it at `message`;
/// anything else is returned as is.
fn provider_message(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return body.to_string();
    };
    value
        .pointer("/error/message")
        .or_else(|| value.get("message"))
        .and_then(|m| m.as_str())
        .map(str::to_string)
        .unwrap_or_else(|| body.to_string())
}

fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_provider_messages() {
        assert_eq!(
            provider_message(r#"{"error":{"message":"Your request was rejected","type":"invalid_request_error"}}"#),
            "Your request was rejected"
        );
        assert_eq!(provider_message(r#"{"statusCode":422,"message":"Invalid `to` field"}"#), "Invalid `to` field");
        assert_eq!(provider_message("Bad gateway"), "Bad gateway");
    }

    #[test]
    fn joins_endpoints() {
        assert_eq!(endpoint("https://api.openai.com/v1/", "/chat/completions"), "https://api.openai.com/v1/chat/completions");
        assert_eq!(endpoint("http://127.0.0.1:9", "emails"), "http://127.0.0.1:9/emails");
    }
}
