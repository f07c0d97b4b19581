//! Image prompt enhancement.
//!
//! The first matching intent (logo, then illustration, then banner) appends
//! its style suffix; base quality keywords are then appended unless already
//! present.

use lazy_static::lazy_static;
use regex::Regex;
use crate::utils::{ToolError, ToolResult};

pub const MAX_PROMPT_CHARS: usize = 1000;

const BASE_KEYWORDS: [&str; 4] = ["high quality", "professional", "detailed", "4k resolution"];

const LOGO_SUFFIX: &str =
    ", vector style, clean design, scalable, modern logo design, white background, professional branding";
const ILLUSTRATION_SUFFIX: &str = ", vibrant colors, artistic style, creative composition";
const BANNER_SUFFIX: &str = ", marketing material, eye-catching design, professional layout";

lazy_static! {
    static ref LOGO_RE: Regex = Regex::new(r"(?i)logo|logotipo|marca|brand|icono|icon")
        .expect("logo pattern is valid");
    static ref ILLUSTRATION_RE: Regex = Regex::new(r"(?i)ilustraci[oó]n|dibujo|cartoon|arte|art")
        .expect("illustration pattern is valid");
    static ref BANNER_RE: Regex = Regex::new(r"(?i)banner|diseño|design|poster|cartel")
        .expect("banner pattern is valid");
}

/// Returns the trimmed prompt, rejecting blank or overlong input.
pub fn validate_prompt(prompt: Option<&str>) -> ToolResult<&str> {
    let prompt = prompt.unwrap_or_default();
    if prompt.trim().is_empty() {
        return Err(ToolError::validation("An image description is required"));
    }
    if prompt.chars().count() > MAX_PROMPT_CHARS {
        return Err(ToolError::validation(format!(
            "The description is too long. Maximum {MAX_PROMPT_CHARS} characters"
        )));
    }
    Ok(prompt.trim())
}

pub fn enhance_prompt(prompt: &str) -> String {
    let mut enhanced = prompt.to_string();

    if LOGO_RE.is_match(prompt) {
        enhanced.push_str(LOGO_SUFFIX);
    } else if ILLUSTRATION_RE.is_match(prompt) {
        enhanced.push_str(ILLUSTRATION_SUFFIX);
    } else if BANNER_RE.is_match(prompt) {
        enhanced.push_str(BANNER_SUFFIX);
    }

    let lower = enhanced.to_lowercase();
    let missing: Vec<&str> = BASE_KEYWORDS
        .iter()
        .copied()
        .filter(|keyword| !lower.contains(keyword))
        .collect();
    if !missing.is_empty() {
        enhanced.push_str(", ");
        enhanced.push_str(&missing.join(", "));
    }
    enhanced
}
