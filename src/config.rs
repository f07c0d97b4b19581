//! Configuration types.
//!
//! Loaded in `main` from an optional TOML file merged with `SITE_TOOLKIT_`
//! prefixed environment variables.

use std::path::Path;
use figment::Figment;
use figment::providers::{Env, Format, Toml};
use serde::{Deserialize, Serialize};
use crate::core::CompressSettings;

/// Environment prefix for all settings (`SITE_TOOLKIT_SERVER__BIND`, ...).
pub const ENV_PREFIX: &str = "SITE_TOOLKIT_";

/// Top-level application configuration.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    /// Chat/image/suggestion provider. Absent means those endpoints are unconfigured.
    #[serde(default)]
    pub openai: Option<OpenAiConfig>,
    /// Transactional email provider for the contact form.
    #[serde(default)]
    pub email: Option<EmailConfig>,
    #[serde(default)]
    pub images: CompressSettings,
}

/// HTTP server configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address (e.g., "0.0.0.0:3000").
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Largest accepted request body; image batches arrive Base64-encoded.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

/// Hosted LLM provider settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OpenAiConfig {
    pub api_key: String,
    #[serde(default = "default_openai_base_url")]
    pub base_url: String,
    #[serde(default = "default_chat_model")]
    pub chat_model: String,
    #[serde(default = "default_image_model")]
    pub image_model: String,
}

/// Transactional email provider settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EmailConfig {
    pub api_key: String,
    #[serde(default = "default_email_base_url")]
    pub base_url: String,
    #[serde(default = "default_email_from")]
    pub from: String,
    /// Inbox that receives contact-form messages.
    #[serde(default = "default_email_to")]
    pub to: String,
}

fn default_bind() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_max_body_bytes() -> usize {
    32 * 1024 * 1024
}

fn default_openai_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_chat_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_image_model() -> String {
    "dall-e-3".to_string()
}

fn default_email_base_url() -> String {
    "https://api.resend.com".to_string()
}

fn default_email_from() -> String {
    "Website <noreply@example.com>".to_string()
}

fn default_email_to() -> String {
    "contact@example.com".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl OpenAiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: default_openai_base_url(),
            chat_model: default_chat_model(),
            image_model: default_image_model(),
        }
    }
}

impl EmailConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: default_email_base_url(),
            from: default_email_from(),
            to: default_email_to(),
        }
    }
}

impl AppConfig {
    /// Loads the TOML file at `path` (when it exists) and overlays prefixed env vars.
    pub fn load(path: &Path) -> Result<Self, figment::Error> {
        let mut figment = Figment::new();
        if path.exists() {
            tracing::info!("Loading configuration from {}", path.display());
            figment = figment.merge(Toml::file(path));
        } else {
            tracing::debug!("No config file found at {}", path.display());
        }

        let mut config: AppConfig = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()?;
        config.fill_provider_keys(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Fills unconfigured provider sections from the providers' conventional
    /// variables (`OPENAI_API_KEY`, `RESEND_API_KEY`, `EMAIL_TO`).
    pub fn fill_provider_keys(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if self.openai.is_none() {
            self.openai = non_empty("OPENAI_API_KEY").map(OpenAiConfig::new);
        }
        if self.email.is_none() {
            self.email = non_empty("RESEND_API_KEY").map(EmailConfig::new);
        }
        if let (Some(email), Some(to)) = (self.email.as_mut(), non_empty("EMAIL_TO")) {
            email.to = to;
        }
    }
}
