//! Maps an output format family and quality factor to an `image` encoder.

use image::DynamicImage;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use crate::utils::{OutputFormat, ToolResult};

/// Encodes `image` as JPEG at `quality` (1-100). Alpha is dropped.
pub fn encode_jpeg(image: &DynamicImage, quality: u8) -> ToolResult<Vec<u8>> {
    let mut buffer = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut buffer, quality.clamp(1, 100));
    DynamicImage::ImageRgb8(image.to_rgb8()).write_with_encoder(encoder)?;
    Ok(buffer)
}

/// Encodes `image` as PNG at maximum compression.
///
/// PNG is lossless, so there is no quality factor to apply.
pub fn encode_png(image: &DynamicImage) -> ToolResult<Vec<u8>> {
    let mut buffer = Vec::new();
    let encoder = PngEncoder::new_with_quality(&mut buffer, CompressionType::Best, FilterType::Adaptive);
    DynamicImage::ImageRgba8(image.to_rgba8()).write_with_encoder(encoder)?;
    Ok(buffer)
}

/// Dispatches to the encoder for `format`.
pub fn encode_as(image: &DynamicImage, format: OutputFormat, quality: u8) -> ToolResult<Vec<u8>> {
    match format {
        OutputFormat::Png => encode_png(image),
        OutputFormat::Jpeg => encode_jpeg(image, quality),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgb, RgbImage};

    fn noisy(width: u32, height: u32) -> DynamicImage {
        let image = RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x * 7 % 256) as u8, (y * 13 % 256) as u8, ((x ^ y) % 256) as u8])
        });
        DynamicImage::ImageRgb8(image)
    }

    #[test]
    fn lower_quality_produces_smaller_jpeg() {
        let image = noisy(128, 128);
        let high = encode_jpeg(&image, 95).unwrap();
        let low = encode_jpeg(&image, 20).unwrap();
        assert!(low.len() < high.len());
    }

    #[test]
    fn outputs_carry_expected_signatures() {
        let image = noisy(16, 16);
        let png = encode_as(&image, OutputFormat::Png, 50).unwrap();
        assert_eq!(image::guess_format(&png).unwrap(), ImageFormat::Png);
        let jpeg = encode_as(&image, OutputFormat::Jpeg, 50).unwrap();
        assert_eq!(image::guess_format(&jpeg).unwrap(), ImageFormat::Jpeg);
    }
}
