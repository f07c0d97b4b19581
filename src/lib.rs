// Module declarations in dependency order
pub mod utils;
pub mod config;
pub mod core;
pub mod tools;
pub mod processing;
pub mod upstream;
pub mod assistant;
pub mod contact;
pub mod commands;
pub mod routes;

// Public exports for external consumers
pub use config::AppConfig;
pub use core::{AppState, CompressSettings, CompressionResult, RasterAsset};
pub use routes::create_router;
pub use utils::{ToolError, ToolResult, UpstreamError};
