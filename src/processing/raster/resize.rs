//! Width-bounded downscaling.

use image::DynamicImage;
use image::imageops::FilterType;

/// Output size for a `width`x`height` source bounded by `max_width`.
///
/// Both dimensions scale by the same factor and round to the nearest pixel,
/// never below 1. Images already within the bound keep their size.
pub fn target_dimensions(width: u32, height: u32, max_width: u32) -> (u32, u32) {
    if width <= max_width || width == 0 {
        return (width, height);
    }
    let scale = max_width as f64 / width as f64;
    let scaled_height = (height as f64 * scale).round().max(1.0) as u32;
    (max_width.max(1), scaled_height)
}

/// Resamples `image` onto a surface no wider than `max_width`. Never upscales.
pub fn apply_resize(image: DynamicImage, max_width: u32) -> DynamicImage {
    let (width, height) = (image.width(), image.height());
    let (target_w, target_h) = target_dimensions(width, height, max_width);
    if (target_w, target_h) == (width, height) {
        return image;
    }
    image.resize_exact(target_w, target_h, FilterType::Triangle)
}
