//! Raster executor.
//!
//! Each asset is decoded, resampled and re-encoded inside a
//! `tokio::task::spawn_blocking` call so the async runtime is never blocked.
//! Assets are dispatched sequentially, bounding peak memory to one decoded
//! surface at a time.

use tracing::{debug, warn};

use crate::core::{AssetStatus, CompressSettings, CompressionResult, RasterAsset};
use crate::utils::{OutputFormat, ToolError, ToolResult, output_format_for, validate_settings};

use super::formats::encode_as;
use super::resize::apply_resize;

/// Re-encoded bytes with the properties of the output surface.
#[derive(Debug, Clone)]
pub struct Recompressed {
    pub data: Vec<u8>,
    pub source_width: u32,
    pub source_height: u32,
    pub width: u32,
    pub height: u32,
    pub format: OutputFormat,
}

/// Decodes `bytes`, bounds the width to `settings.max_width` and re-encodes in
/// the same format family as the input.
///
/// The output is not guaranteed to be smaller than the input.
pub fn recompress(bytes: &[u8], mime_type: Option<&str>, settings: &CompressSettings) -> ToolResult<Recompressed> {
    validate_settings(settings)?;

    let format = output_format_for(mime_type, bytes);
    let image = image::load_from_memory(bytes)?;
    let (source_width, source_height) = (image.width(), image.height());
    debug!("Decoded {}x{} raster", source_width, source_height);

    let image = apply_resize(image, settings.max_width);
    let data = encode_as(&image, format, settings.quality)?;

    Ok(Recompressed {
        data,
        source_width,
        source_height,
        width: image.width(),
        height: image.height(),
        format,
    })
}

/// Re-encodes one asset synchronously.
pub fn compress_single(asset: &RasterAsset, settings: &CompressSettings) -> ToolResult<CompressionResult> {
    let original_size = asset.original_size();
    let output = recompress(&asset.bytes, asset.mime_type.as_deref(), settings)?;

    let compressed_size = output.data.len() as u64;
    let saved_bytes = original_size as i64 - compressed_size as i64;
    let compression_ratio = if original_size > 0 {
        saved_bytes as f64 / original_size as f64 * 100.0
    } else {
        0.0
    };

    debug!(
        "'{}' -> {} bytes saved ({:.1}%)",
        asset.name, saved_bytes, compression_ratio
    );

    Ok(CompressionResult {
        id: asset.id.clone(),
        name: asset.name.clone(),
        status: AssetStatus::Done,
        original_size,
        compressed_size: Some(compressed_size),
        original_width: Some(output.source_width),
        original_height: Some(output.source_height),
        width: Some(output.width),
        height: Some(output.height),
        output_format: Some(output.format),
        saved_bytes,
        compression_ratio,
        error: None,
        data: Some(output.data),
    })
}

/// Executor that re-encodes assets off the async runtime.
#[derive(Debug, Clone, Copy, Default)]
pub struct RasterExecutor {
    settings: CompressSettings,
}

impl RasterExecutor {
    pub fn new(settings: CompressSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &CompressSettings {
        &self.settings
    }

    /// Re-encodes `asset`, turning any failure into an error result.
    ///
    /// Only a panicking worker thread surfaces as `Err`.
    pub async fn compress(&self, asset: RasterAsset) -> ToolResult<CompressionResult> {
        let settings = self.settings;
        let id = asset.id.clone();
        let name = asset.name.clone();
        let original_size = asset.original_size();

        let outcome = tokio::task::spawn_blocking(move || compress_single(&asset, &settings))
            .await
            .map_err(|e| ToolError::processing(format!("Task panicked: {e}")))?;

        Ok(match outcome {
            Ok(result) => result,
            Err(e) => {
                let error_msg = e.to_string();
                warn!("Image compression failed for {}: {}", name, error_msg);
                CompressionResult::failed(id, name, original_size, error_msg)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use image::{DynamicImage, ImageFormat, RgbaImage};

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let image = DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, image::Rgba([10, 20, 30, 255])));
        let mut bytes = Vec::new();
        image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png).unwrap();
        bytes
    }

    #[test]
    fn png_stays_png_and_is_bounded() {
        let settings = CompressSettings { quality: 70, max_width: 64 };
        let output = recompress(&png_bytes(200, 100), Some("image/png"), &settings).unwrap();
        assert_eq!(output.format, OutputFormat::Png);
        assert_eq!((output.source_width, output.source_height), (200, 100));
        assert_eq!((output.width, output.height), (64, 32));
        assert_eq!(image::guess_format(&output.data).unwrap(), ImageFormat::Png);
    }

    #[test]
    fn non_png_declared_type_becomes_jpeg() {
        let settings = CompressSettings::default();
        let output = recompress(&png_bytes(10, 10), Some("image/webp"), &settings).unwrap();
        assert_eq!(output.format, OutputFormat::Jpeg);
        assert_eq!(image::guess_format(&output.data).unwrap(), ImageFormat::Jpeg);
    }

    #[test]
    fn garbage_is_a_decode_error() {
        let err = recompress(b"definitely not an image", Some("image/jpeg"), &CompressSettings::default())
            .unwrap_err();
        assert!(matches!(err, ToolError::Decode(_)));
    }

    #[test]
    fn invalid_settings_are_rejected() {
        let settings = CompressSettings { quality: 0, max_width: 100 };
        assert!(matches!(
            recompress(&png_bytes(4, 4), None, &settings),
            Err(ToolError::Validation(_))
        ));
    }

    #[test]
    fn result_reports_source_and_output_dimensions() {
        let asset = RasterAsset::new("a", "wide.png", Some("image/png".into()), png_bytes(120, 60));
        let settings = CompressSettings { quality: 80, max_width: 30 };
        let result = compress_single(&asset, &settings).unwrap();
        assert_eq!((result.original_width, result.original_height), (Some(120), Some(60)));
        assert_eq!((result.width, result.height), (Some(30), Some(15)));
    }

    #[tokio::test]
    async fn executor_isolates_failures() {
        let executor = RasterExecutor::default();
        let broken = RasterAsset::new("x", "broken.jpg", Some("image/jpeg".into()), vec![0xFF, 0xD8, 0x00]);
        let result = executor.compress(broken).await.unwrap();
        assert_eq!(result.status, AssetStatus::Error);
        assert_eq!(result.original_size, 3);
        assert!(result.error.is_some());
    }
}
