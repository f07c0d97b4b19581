//! Base64 text and binary codec.
//!
//! The text path goes through UTF-8 bytes first, so multi-byte characters
//! survive a round trip. Decoding ignores ASCII whitespace anywhere in the
//! input, which accepts line-wrapped output from other tools. Padding is
//! optional and non-zero trailing bits are ignored, as browsers' `atob` does.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD as BASE64};
use base64::engine::DecodePaddingMode;
use base64::Engine;
use serde::Serialize;
use crate::utils::{ToolError, ToolResult};

/// Decoder accepting padded and unpadded input.
const FORGIVING: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Encodes `text` as its UTF-8 bytes in standard Base64.
pub fn encode_text(text: &str) -> String {
    BASE64.encode(text.as_bytes())
}

/// Decodes Base64 into text, failing when the payload is not valid Base64
/// or the decoded bytes are not UTF-8.
pub fn decode_text(input: &str) -> ToolResult<String> {
    let bytes = decode_bytes(input)?;
    String::from_utf8(bytes)
        .map_err(|_| ToolError::decode("Decoded data is not valid UTF-8 text"))
}

/// Encodes a raw byte buffer, e.g. an uploaded file.
pub fn encode_bytes(bytes: &[u8]) -> String {
    BASE64.encode(bytes)
}

/// Decodes Base64 into raw bytes.
pub fn decode_bytes(input: &str) -> ToolResult<Vec<u8>> {
    let compact: String = input.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    Ok(FORGIVING.decode(compact)?)
}

/// How decoded bytes should be offered for download.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DecodedDownload {
    /// Bytes form valid UTF-8
    Text { text: String },
    /// Arbitrary bytes
    Binary { bytes: Vec<u8> },
}

impl DecodedDownload {
    /// Classifies decoded bytes: text when they are valid UTF-8, binary otherwise.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        match String::from_utf8(bytes) {
            Ok(text) => Self::Text { text },
            Err(e) => Self::Binary { bytes: e.into_bytes() },
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Text { .. } => "decoded.txt",
            Self::Binary { .. } => "decoded_file",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Text { .. } => "text/plain; charset=utf-8",
            Self::Binary { .. } => "application/octet-stream",
        }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Self::Text { text } => text.into_bytes(),
            Self::Binary { bytes } => bytes,
        }
    }
}
