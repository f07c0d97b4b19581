//! Application state shared by every HTTP handler.

use std::sync::Arc;
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::upstream::{EmailClient, OpenAiClient};

/// Cheaply cloneable handle to configuration and provider clients.
///
/// A provider whose section is missing from the configuration has no
/// client; its endpoints report the service as misconfigured.
#[derive(Clone)]
pub struct AppState {
    config: Arc<AppConfig>,
    ai: Option<Arc<OpenAiClient>>,
    mailer: Option<Arc<EmailClient>>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let ai = config.openai.as_ref().map(|c| Arc::new(OpenAiClient::new(c)));
        let mailer = config.email.as_ref().map(|c| Arc::new(EmailClient::new(c)));

        match (&ai, &mailer) {
            (Some(_), Some(_)) => info!("LLM and email providers configured"),
            _ => debug!(
                "Providers configured - llm: {}, email: {}",
                ai.is_some(),
                mailer.is_some()
            ),
        }

        Self {
            config: Arc::new(config),
            ai,
            mailer,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn ai(&self) -> Option<&OpenAiClient> {
        self.ai.as_deref()
    }

    pub fn mailer(&self) -> Option<&EmailClient> {
        self.mailer.as_deref()
    }
}
