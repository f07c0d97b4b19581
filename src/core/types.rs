//! Core types for image re-encoding settings and results.

use serde::{Deserialize, Serialize};
use crate::utils::OutputFormat;

/// Default quality factor, matching the compressor page's initial slider value.
pub const DEFAULT_QUALITY: u8 = 80;
/// Default maximum output width in pixels.
pub const DEFAULT_MAX_WIDTH: u32 = 1920;

/// Configuration settings for re-encoding.
///
/// Applied uniformly to every asset of a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompressSettings {
    /// Quality factor (1-100); ignored by lossless output
    #[serde(default = "default_quality")]
    pub quality: u8,
    /// Images wider than this are scaled down, preserving aspect ratio
    #[serde(default = "default_max_width", alias = "max_width")]
    pub max_width: u32,
}

fn default_quality() -> u8 {
    DEFAULT_QUALITY
}

fn default_max_width() -> u32 {
    DEFAULT_MAX_WIDTH
}

impl Default for CompressSettings {
    fn default() -> Self {
        Self {
            quality: DEFAULT_QUALITY,
            max_width: DEFAULT_MAX_WIDTH,
        }
    }
}

/// Outcome of one asset inside a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetStatus {
    Done,
    Error,
}

/// Result of re-encoding one asset.
///
/// Contains the original and re-encoded sizes along with the encoded bytes
/// when the asset succeeded.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompressionResult {
    /// Caller-supplied asset id
    pub id: String,
    /// Original file name
    pub name: String,
    /// Done or error; never pending once returned
    pub status: AssetStatus,
    /// Original size in bytes
    pub original_size: u64,
    /// Re-encoded size in bytes, when successful
    pub compressed_size: Option<u64>,
    /// Source width in pixels, when the asset decoded
    pub original_width: Option<u32>,
    /// Source height in pixels, when the asset decoded
    pub original_height: Option<u32>,
    /// Output width in pixels
    pub width: Option<u32>,
    /// Output height in pixels
    pub height: Option<u32>,
    /// Encoded output family
    pub output_format: Option<OutputFormat>,
    /// Bytes saved (negative if the file grew)
    pub saved_bytes: i64,
    /// Saved bytes as a percentage of the original
    pub compression_ratio: f64,
    /// Error message if re-encoding failed
    pub error: Option<String>,
    /// Re-encoded bytes
    #[serde(skip)]
    pub data: Option<Vec<u8>>,
}

impl CompressionResult {
    /// Builds the failed result for an asset so the caller still gets one result per input.
    pub fn failed(id: impl Into<String>, name: impl Into<String>, original_size: u64, error: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            status: AssetStatus::Error,
            original_size,
            compressed_size: None,
            original_width: None,
            original_height: None,
            width: None,
            height: None,
            output_format: None,
            saved_bytes: 0,
            compression_ratio: 0.0,
            error: Some(error.into()),
            data: None,
        }
    }

    pub fn is_done(&self) -> bool {
        self.status == AssetStatus::Done
    }

    /// Suggested download name, e.g. `compressed_photo.jpg`.
    pub fn download_name(&self) -> String {
        let stem = match self.name.rsplit_once('.') {
            Some((stem, _)) if !stem.is_empty() => stem,
            _ => self.name.as_str(),
        };
        match self.output_format {
            Some(format) => format!("compressed_{stem}.{}", format.extension()),
            None => format!("compressed_{}", self.name),
        }
    }
}
