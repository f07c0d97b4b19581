//! QR rendering for built payloads, via the `qrcode` crate.

use std::io::Cursor;
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, Rgba};
use qrcode::render::svg;
use qrcode::{EcLevel, QrCode};
use serde::{Deserialize, Serialize};
use crate::tools::palette::Rgb;
use crate::utils::{ToolError, ToolResult};

pub const MIN_SIZE: u32 = 128;
pub const MAX_SIZE: u32 = 512;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ErrorCorrection {
    L,
    #[default]
    M,
    Q,
    H,
}

impl From<ErrorCorrection> for EcLevel {
    fn from(level: ErrorCorrection) -> Self {
        match level {
            ErrorCorrection::L => EcLevel::L,
            ErrorCorrection::M => EcLevel::M,
            ErrorCorrection::Q => EcLevel::Q,
            ErrorCorrection::H => EcLevel::H,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderFormat {
    #[default]
    Png,
    Svg,
}

/// Rendering configuration passed through to the encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderOptions {
    pub dark: Rgb,
    pub light: Rgb,
    /// Edge length in pixels
    pub size: u32,
    pub error_correction: ErrorCorrection,
    pub format: RenderFormat,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            dark: Rgb { r: 0, g: 0, b: 0 },
            light: Rgb { r: 255, g: 255, b: 255 },
            size: 256,
            error_correction: ErrorCorrection::M,
            format: RenderFormat::Png,
        }
    }
}

/// A rendered code.
#[derive(Debug, Clone)]
pub enum Rendered {
    Png(Vec<u8>),
    Svg(String),
}

impl Rendered {
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Png(_) => "image/png",
            Self::Svg(_) => "image/svg+xml",
        }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Self::Png(bytes) => bytes,
            Self::Svg(svg) => svg.into_bytes(),
        }
    }
}

/// Renders `payload` as a square code of `options.size` pixels.
pub fn render(payload: &str, options: &RenderOptions) -> ToolResult<Rendered> {
    if !(MIN_SIZE..=MAX_SIZE).contains(&options.size) {
        return Err(ToolError::validation(format!(
            "Size must be between {MIN_SIZE} and {MAX_SIZE} pixels, got {}",
            options.size
        )));
    }

    let code = QrCode::with_error_correction_level(payload.as_bytes(), options.error_correction.into())
        .map_err(|e| ToolError::validation(format!("Payload cannot be encoded: {e}")))?;

    match options.format {
        RenderFormat::Png => {
            let rgba = |c: Rgb| Rgba([c.r, c.g, c.b, 255]);
            let buffer = code
                .render::<Rgba<u8>>()
                .dark_color(rgba(options.dark))
                .light_color(rgba(options.light))
                .quiet_zone(true)
                .min_dimensions(options.size, options.size)
                .build();
            let image = DynamicImage::ImageRgba8(buffer).resize_exact(
                options.size,
                options.size,
                FilterType::Nearest,
            );

            let mut bytes = Vec::new();
            image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
            Ok(Rendered::Png(bytes))
        }
        RenderFormat::Svg => {
            let dark = options.dark.to_hex();
            let light = options.light.to_hex();
            let svg = code
                .render::<svg::Color>()
                .dark_color(svg::Color(&dark))
                .light_color(svg::Color(&light))
                .quiet_zone(true)
                .min_dimensions(options.size, options.size)
                .build();
            Ok(Rendered::Svg(svg))
        }
    }
}
