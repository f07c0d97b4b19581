pub mod error;
pub mod validation;
pub mod formats;

pub use error::{ToolError, ToolResult, UpstreamError};
pub use validation::{validate_settings, validate_email, require_field};
pub use formats::{OutputFormat, output_format_for, format_file_size};
