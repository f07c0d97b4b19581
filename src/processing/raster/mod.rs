//! Raster re-encoding via the `image` crate.
//!
//! # Architecture
//!
//! - [`RasterExecutor`]: Runs one asset at a time on tokio's blocking pool.
//! - [`resize`]: Bounds the output width, preserving aspect ratio.
//! - [`formats`]: Maps [`OutputFormat`](crate::utils::OutputFormat) and quality to an encoder.

mod executor;
mod formats;
mod resize;

pub use executor::{RasterExecutor, Recompressed, compress_single, recompress};
pub use formats::encode_as;
pub use resize::{apply_resize, target_dimensions};
