use serde::{Deserialize, Serialize};
use crate::core::CompressionResult;

/// Progress message type
#[derive(Debug, Deserialize, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ProgressType {
    Start,
    Progress,
    Complete,
    Error,
}

/// Unified progress struct reported after every asset of a batch
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    /// Progress type (start, progress, complete, error)
    pub progress_type: ProgressType,
    /// Number of assets handled so far, failures included
    pub completed_tasks: usize,
    /// Total number of assets
    pub total_tasks: usize,
    /// Progress percentage (0-100)
    pub progress_percentage: usize,
    /// Current status message
    pub status: String,
    /// Asset this update refers to
    #[serde(default)]
    pub task_id: Option<String>,
    /// Optional error message
    #[serde(default)]
    pub error: Option<String>,
}

impl Progress {
    /// Create a new Progress instance with basic information
    pub fn new(
        progress_type: ProgressType,
        completed_tasks: usize,
        total_tasks: usize,
        status: &str,
    ) -> Self {
        let progress_percentage = if total_tasks > 0 {
            (completed_tasks * 100) / total_tasks
        } else {
            0
        };

        Self {
            progress_type,
            completed_tasks,
            total_tasks,
            progress_percentage,
            status: status.to_string(),
            task_id: None,
            error: None,
        }
    }

    /// Builds the update emitted once `result` is known.
    pub fn for_result(completed_tasks: usize, total_tasks: usize, result: &CompressionResult) -> Self {
        let progress_type = if result.is_done() {
            if completed_tasks == total_tasks {
                ProgressType::Complete
            } else {
                ProgressType::Progress
            }
        } else {
            ProgressType::Error
        };
        let status = if result.is_done() {
            format!("{} compressed ({:.0}% saved)", result.name, result.compression_ratio)
        } else {
            format!("{} failed", result.name)
        };

        Self {
            task_id: Some(result.id.clone()),
            error: result.error.clone(),
            ..Self::new(progress_type, completed_tasks, total_tasks, &status)
        }
    }
}
