//! Core application types and state management.
//!
//! This module contains the fundamental types used throughout the application:
//! - [`AppState`]: Shared state handed to every HTTP handler
//! - [`RasterAsset`]: One image submitted for re-encoding
//! - [`CompressSettings`]: Quality and size bounds for re-encoding
//! - [`CompressionResult`]: Per-asset outcome of a re-encode
//! - [`Progress`]: Progress tracking for batch operations

mod state;
mod types;
mod task;
mod progress;

pub use state::AppState;
pub use types::{AssetStatus, CompressSettings, CompressionResult};
pub use task::RasterAsset;
pub use progress::{Progress, ProgressType};
