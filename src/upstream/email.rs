//! Transactional email client (Resend-compatible `POST /emails`).

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::EmailConfig;
use crate::utils::UpstreamError;

use super::{endpoint, send_json};

/// A message addressed to the configured inbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub reply_to: String,
    pub subject: String,
    pub html: String,
    pub text: String,
}

#[derive(Serialize)]
struct SendRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    reply_to: &'a str,
    subject: &'a str,
    html: &'a str,
    text: &'a str,
}

#[derive(Deserialize)]
struct SendResponse {
    #[serde(default)]
    id: Option<String>,
}

#[derive(Clone)]
pub struct EmailClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    from: String,
    to: String,
}

impl EmailClient {
    pub fn new(config: &EmailConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            from: config.from.clone(),
            to: config.to.clone(),
        }
    }

    /// Delivers `email` and returns the provider's message id.
    pub async fn send(&self, email: &OutgoingEmail) -> Result<String, UpstreamError> {
        let url = endpoint(&self.base_url, "emails");
        let body = SendRequest {
            from: &self.from,
            to: [&self.to],
            reply_to: &email.reply_to,
            subject: &email.subject,
            html: &email.html,
            text: &email.text,
        };

        let response: SendResponse = send_json(self.http.post(url).json(&body), &self.api_key)
            .await
            .inspect_err(|e| warn!("Email delivery failed: {e}"))?;

        let id = response.id.unwrap_or_default();
        info!("Contact email delivered (id: {})", id);
        Ok(id)
    }
}
