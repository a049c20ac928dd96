//! Error types for rasterization.

use thiserror::Error;

/// Result type for raster operations.
pub type Result<T> = std::result::Result<T, RasterError>;

/// Errors that can occur while building an elevation grid.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RasterError {
    /// The paired polylines or elevation array disagree in length.
    #[error("length mismatch: inner {inner}, outer {outer}, elevations {elevations}")]
    LengthMismatch {
        /// Inner polyline length.
        inner: usize,
        /// Outer polyline length.
        outer: usize,
        /// Elevation array length.
        elevations: usize,
    },

    /// Fewer than 2 polyline points, so no segment exists to rasterize.
    #[error("insufficient points: need at least {required}, got {actual}")]
    InsufficientPoints {
        /// Minimum required points.
        required: usize,
        /// Actual number of points.
        actual: usize,
    },

    /// The joint bounding box has zero extent on both axes.
    #[error("degenerate extent: all points coincide")]
    DegenerateExtent,

    /// Grid data length does not match the requested dimensions.
    #[error("data length {len} does not match {rows}x{cols} grid")]
    DataShapeMismatch {
        /// Provided data length.
        len: usize,
        /// Requested rows.
        rows: usize,
        /// Requested columns.
        cols: usize,
    },

    /// A zero-cell resolution was requested.
    #[error("resolution must be positive")]
    ZeroResolution,
}
