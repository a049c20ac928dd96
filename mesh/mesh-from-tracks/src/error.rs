//! Stage-tagged pipeline errors.

use thiserror::Error;

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Errors from any stage of the track-to-solid pipeline.
///
/// Each variant names the failing stage so a caller can re-run with
/// different resolution or thickness parameters instead of silently
/// producing a broken mesh. No partial results accompany an error.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Curve smoothing or offsetting failed.
    #[error("curve smoothing failed: {0}")]
    Curve(#[from] track_curve::CurveError),

    /// Ribbon rasterization failed.
    #[error("rasterization failed: {0}")]
    Raster(#[from] relief_grid::RasterError),

    /// Heightfield extrusion failed.
    #[error("extrusion failed: {0}")]
    Extrude(#[from] mesh_extrude::ExtrudeError),

    /// Sealing could not close the mesh.
    #[error("sealing failed: {0}")]
    Seal(#[from] mesh_repair::RepairError),
}
