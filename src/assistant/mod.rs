//! Prompt shaping for the hosted LLM endpoints.
//!
//! - [`conversation`]: Chat history validation and trimming
//! - [`enhance`]: Style keyword injection for image prompts
//! - [`suggestions`]: Per-category project advice with a static fallback

pub mod conversation;
pub mod enhance;
pub mod suggestions;

pub use conversation::{CHAT_MAX_TOKENS, HISTORY_LIMIT, build_conversation};
pub use enhance::{MAX_PROMPT_CHARS, enhance_prompt, validate_prompt};
pub use suggestions::{SUGGEST_MAX_TOKENS, fallback_suggestion, suggestion_messages};
