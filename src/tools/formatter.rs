//! JSON pretty-printer and minifier.
//!
//! Parsing is strict RFC 8259 via `serde_json`: trailing commas, unquoted keys
//! and comments are rejected, and the parser's own message is surfaced.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_json::ser::PrettyFormatter;
use crate::utils::{ToolError, ToolResult};

/// Indentation width for pretty output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Indent {
    #[default]
    Two,
    Four,
    Eight,
}

impl Indent {
    pub fn width(self) -> usize {
        match self {
            Self::Two => 2,
            Self::Four => 4,
            Self::Eight => 8,
        }
    }
}

impl TryFrom<u8> for Indent {
    type Error = ToolError;

    fn try_from(width: u8) -> Result<Self, Self::Error> {
        match width {
            2 => Ok(Self::Two),
            4 => Ok(Self::Four),
            8 => Ok(Self::Eight),
            other => Err(ToolError::validation(format!(
                "Indent must be 2, 4 or 8 spaces, got {other}"
            ))),
        }
    }
}

impl From<Indent> for u8 {
    fn from(indent: Indent) -> Self {
        indent.width() as u8
    }
}

/// Parses `input` into a document; never returns a partial tree.
pub fn parse(input: &str) -> ToolResult<Value> {
    Ok(serde_json::from_str(input)?)
}

/// Re-serializes `input` with `indent` spaces per level. Blank input yields blank output.
pub fn format(input: &str, indent: Indent) -> ToolResult<String> {
    if input.trim().is_empty() {
        return Ok(String::new());
    }
    let value = parse(input)?;

    let pad = " ".repeat(indent.width());
    let mut out = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(pad.as_bytes()));
    value
        .serialize(&mut serializer)
        .map_err(|e| ToolError::processing(e.to_string()))?;
    String::from_utf8(out).map_err(|e| ToolError::processing(e.to_string()))
}

/// Re-serializes `input` without insignificant whitespace. Blank input yields blank output.
pub fn minify(input: &str) -> ToolResult<String> {
    if input.trim().is_empty() {
        return Ok(String::new());
    }
    let value = parse(input)?;
    serde_json::to_string(&value).map_err(|e| ToolError::processing(e.to_string()))
}
