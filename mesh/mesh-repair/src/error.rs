//! Error types for mesh sealing.

use thiserror::Error;

/// Result type for repair operations.
pub type Result<T> = std::result::Result<T, RepairError>;

/// Errors that can occur while sealing a triangle soup.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepairError {
    /// The soup contains no triangles.
    #[error("mesh is empty")]
    EmptyMesh,

    /// Open edges remain after welding and stitching.
    ///
    /// The caller may retry with different extrusion or sealing
    /// parameters; the partial mesh is not returned.
    #[error("mesh is not watertight: {boundary_edges} open edges remain")]
    NotWatertight {
        /// Number of boundary edges left after sealing.
        boundary_edges: usize,
    },
}
