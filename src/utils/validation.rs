use lazy_static::lazy_static;
use regex::Regex;
use crate::core::CompressSettings;
use crate::utils::{ToolError, ToolResult};

lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
        .expect("email pattern is valid");
}

/// Validates re-encoding settings
pub fn validate_settings(settings: &CompressSettings) -> ToolResult<()> {
    if settings.quality == 0 || settings.quality > 100 {
        return Err(ToolError::validation(format!(
            "Invalid quality value: {}. Must be between 1 and 100",
            settings.quality
        )));
    }

    if settings.max_width == 0 {
        return Err(ToolError::validation("Max width cannot be 0"));
    }

    Ok(())
}

/// Loose address check: something@something.tld, no whitespace
pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Returns the trimmed value, or a validation error naming the field.
pub fn require_field<'a>(name: &str, value: Option<&'a str>) -> ToolResult<&'a str> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ToolError::validation(format!("{name} is required"))),
    }
}
