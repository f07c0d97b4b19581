pub mod batch;
pub mod raster;

pub use batch::{BatchProcessor, BatchSummary};
pub use raster::{RasterExecutor, Recompressed, recompress};
