use serde::Serialize;
use crate::core::CompressionResult;
use crate::utils::format_file_size;

/// Aggregate view over a processed batch.
///
/// Totals are taken over completed assets only; failed assets are counted
/// but contribute no bytes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSummary {
    pub total_original: u64,
    pub total_compressed: u64,
    pub saved_bytes: i64,
    /// Rounded to the nearest whole percent
    pub saved_percentage: i64,
    pub done_count: usize,
    pub error_count: usize,
    pub total_original_formatted: String,
    pub total_compressed_formatted: String,
}

impl BatchSummary {
    pub fn from_results(results: &[CompressionResult]) -> Self {
        let mut total_original = 0u64;
        let mut total_compressed = 0u64;
        let mut done_count = 0;

        for result in results.iter().filter(|r| r.is_done()) {
            total_original += result.original_size;
            total_compressed += result.compressed_size.unwrap_or(result.original_size);
            done_count += 1;
        }

        let saved_bytes = total_original as i64 - total_compressed as i64;
        let saved_percentage = if total_original > 0 {
            (saved_bytes as f64 / total_original as f64 * 100.0).round() as i64
        } else {
            0
        };

        Self {
            total_original,
            total_compressed,
            saved_bytes,
            saved_percentage,
            done_count,
            error_count: results.len() - done_count,
            total_original_formatted: format_file_size(total_original),
            total_compressed_formatted: format_file_size(total_compressed),
        }
    }
}
