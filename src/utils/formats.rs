use serde::{Deserialize, Serialize};
use std::str::FromStr;
use crate::utils::ToolError;

/// Encoded output family for re-encoded rasters.
///
/// PNG input stays PNG; everything else is re-encoded lossy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Png,
    Jpeg,
}

impl OutputFormat {
    /// MIME type of the encoded output
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
        }
    }

    /// Primary file extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ToolError;

    fn from_str(mime: &str) -> Result<Self, Self::Err> {
        let mime = mime.trim().to_lowercase();
        if !mime.starts_with("image/") {
            return Err(ToolError::validation(format!(
                "Not an image type: {mime}"
            )));
        }
        Ok(if mime == "image/png" { Self::Png } else { Self::Jpeg })
    }
}

/// Resolves the output family from the declared MIME type, falling back to
/// sniffing the bytes when the declaration is missing.
pub fn output_format_for(mime_type: Option<&str>, bytes: &[u8]) -> OutputFormat {
    if let Some(format) = mime_type.and_then(|m| OutputFormat::from_str(m).ok()) {
        return format;
    }
    match image::guess_format(bytes) {
        Ok(image::ImageFormat::Png) => OutputFormat::Png,
        _ => OutputFormat::Jpeg,
    }
}

/// Formats a byte count as `B`/`KB`/`MB`/`GB` with at most two decimals.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let exp = ((bytes as f64).ln() / 1024f64.ln()).floor() as usize;
    let exp = exp.min(UNITS.len() - 1);
    let value = bytes as f64 / 1024f64.powi(exp as i32);
    let rounded = format!("{value:.2}");
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed} {}", UNITS[exp])
}
