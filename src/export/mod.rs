//! Export backends: PNG heightmap, coloured terrain map, legend and JSON.

pub mod json;
pub mod png;

pub use json::export_json;
pub use png::{export_heightmap_png, export_legend_png, export_terrain_png};

use thiserror::Error;

/// Errors raised by the export backends.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("image encoding error: {0}")]
    Image(#[from] image::ImageError),
    #[error("json encoding error: {0}")]
    Json(#[from] serde_json::Error),
}
