//! Raster asset definition.

use serde::{Deserialize, Serialize};

/// A single image submitted for re-encoding.
///
/// Holds the original bytes and the declared MIME type; nothing is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RasterAsset {
    /// Caller-chosen identifier, echoed back in the result
    pub id: String,
    /// Original file name
    pub name: String,
    /// Declared MIME type, e.g. `image/png`
    #[serde(default)]
    pub mime_type: Option<String>,
    /// Original encoded bytes
    #[serde(skip)]
    pub bytes: Vec<u8>,
}

impl RasterAsset {
    pub fn new(id: impl Into<String>, name: impl Into<String>, mime_type: Option<String>, bytes: Vec<u8>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            mime_type,
            bytes,
        }
    }

    pub fn original_size(&self) -> u64 {
        self.bytes.len() as u64
    }
}
