use crate::core::{CompressSettings, CompressionResult, Progress, ProgressType, RasterAsset};
use crate::processing::raster::RasterExecutor;
use crate::utils::{ToolResult, validate_settings};
use tracing::{debug, info, warn};

use super::BatchSummary;

/// Handles batch re-encoding with per-asset progress reporting
pub struct BatchProcessor {
    executor: RasterExecutor,
}

impl BatchProcessor {
    pub fn new(settings: CompressSettings) -> Self {
        Self {
            executor: RasterExecutor::new(settings),
        }
    }

    /// Processes `assets` strictly in order, one at a time.
    ///
    /// A failing asset yields an error result and never aborts its siblings;
    /// the returned list has one result per input, in input order.
    pub async fn process_batch(
        &self,
        assets: Vec<RasterAsset>,
        progress_callback: impl Fn(Progress),
    ) -> ToolResult<(Vec<CompressionResult>, BatchSummary)> {
        validate_settings(self.executor.settings())?;

        let total_tasks = assets.len();
        info!("Processing batch of {} images", total_tasks);
        progress_callback(Progress::new(ProgressType::Start, 0, total_tasks, "Compressing"));

        let mut results = Vec::with_capacity(total_tasks);
        for (idx, asset) in assets.into_iter().enumerate() {
            debug!("Compressing {}/{}: {}", idx + 1, total_tasks, asset.name);
            let result = self.executor.compress(asset).await?;
            progress_callback(Progress::for_result(idx + 1, total_tasks, &result));
            results.push(result);
        }

        let summary = BatchSummary::from_results(&results);
        if summary.error_count > 0 {
            warn!(
                "Batch completed with {} failed images out of {}",
                summary.error_count, total_tasks
            );
        } else {
            info!(
                "Batch completed: {} images, {} saved ({}%)",
                summary.done_count, summary.saved_bytes, summary.saved_percentage
            );
        }

        Ok((results, summary))
    }
}
