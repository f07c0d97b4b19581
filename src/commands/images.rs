//! Batch image re-encoding over HTTP.
//!
//! Images arrive Base64-encoded in a JSON body and come back the same way.
//! An asset whose data cannot be decoded fails on its own; its siblings are
//! still processed.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{AppState, CompressSettings, CompressionResult, RasterAsset};
use crate::processing::{BatchProcessor, BatchSummary};
use crate::tools::codec;
use super::ApiResult;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageUpload {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub mime_type: Option<String>,
    /// Base64 file contents
    pub data: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompressRequest {
    /// Falls back to the configured defaults
    #[serde(default)]
    pub settings: Option<CompressSettings>,
    pub images: Vec<ImageUpload>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompressedImage {
    #[serde(flatten)]
    pub result: CompressionResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_name: Option<String>,
    /// Base64 re-encoded contents
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

impl From<CompressionResult> for CompressedImage {
    fn from(mut result: CompressionResult) -> Self {
        let data = result.data.take().map(|bytes| codec::encode_bytes(&bytes));
        let download_name = result.is_done().then(|| result.download_name());
        Self { result, download_name, data }
    }
}

#[derive(Debug, Serialize)]
pub struct CompressResponse {
    pub results: Vec<CompressedImage>,
    pub summary: BatchSummary,
}

fn into_asset(index: usize, upload: ImageUpload) -> Result<RasterAsset, CompressionResult> {
    let id = upload.id.unwrap_or_else(|| index.to_string());
    match codec::decode_bytes(&upload.data) {
        Ok(bytes) => Ok(RasterAsset::new(id, upload.name, upload.mime_type, bytes)),
        Err(e) => Err(CompressionResult::failed(id, upload.name, 0, e.to_string())),
    }
}

pub async fn compress_images(
    State(state): State<AppState>,
    payload: Result<Json<CompressRequest>, JsonRejection>,
) -> ApiResult<Json<CompressResponse>> {
    let Json(req) = payload?;
    let settings = req.settings.unwrap_or(state.config().images);

    // Undecodable uploads keep their slot so results stay in input order
    let mut assets = Vec::with_capacity(req.images.len());
    let mut slots = Vec::with_capacity(req.images.len());
    for (i, upload) in req.images.into_iter().enumerate() {
        match into_asset(i, upload) {
            Ok(asset) => {
                assets.push(asset);
                slots.push(None);
            }
            Err(failed) => slots.push(Some(failed)),
        }
    }

    let processor = BatchProcessor::new(settings);
    let (processed, _) = processor
        .process_batch(assets, |progress| {
            debug!(
                "Batch progress {}/{} ({}%): {}",
                progress.completed_tasks, progress.total_tasks, progress.progress_percentage, progress.status
            );
        })
        .await?;

    let mut processed = processed.into_iter();
    let results: Vec<CompressionResult> = slots
        .into_iter()
        .filter_map(|slot| slot.or_else(|| processed.next()))
        .collect();

    let summary = BatchSummary::from_results(&results);
    Ok(Json(CompressResponse {
        results: results.into_iter().map(CompressedImage::from).collect(),
        summary,
    }))
}
