//! Error types for heightfield extrusion.

use thiserror::Error;

/// Result type for extrusion operations.
pub type Result<T> = std::result::Result<T, ExtrudeError>;

/// Errors that can occur while extruding a heightfield.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtrudeError {
    /// No cell exceeds the mask threshold, so there is nothing to extrude.
    #[error("empty heightfield: no cell exceeds the mask threshold")]
    EmptyHeightfield,

    /// The grid is too small in one dimension for 2x2 neighborhoods.
    #[error("degenerate grid: {rows}x{cols} (need at least 2x2)")]
    DegenerateGrid {
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        cols: usize,
    },
}
