//! Heightfield-to-solid extrusion for Ridgeline.
//!
//! This crate is the center of the pipeline: it converts any 2D height
//! grid — the rasterized track ribbon from `relief-grid` or a glyph bitmap
//! normalized into an [`relief_grid::ElevationGrid`] — into a closed 3D
//! triangle soup with a top surface, automatically detected silhouette,
//! implicit side walls and a flat base.
//!
//! # Example
//!
//! ```
//! use mesh_extrude::{extrude_heightfield, ExtrudeParams};
//! use relief_grid::ElevationGrid;
//!
//! let mut grid = ElevationGrid::new(6, 6);
//! for r in 1..5 {
//!     for c in 1..5 {
//!         grid.set(r, c, 1.0);
//!     }
//! }
//!
//! let params = ExtrudeParams::default().with_z_scale(5.0);
//! let soup = extrude_heightfield(&grid, &params).unwrap();
//! assert!(!soup.is_empty());
//! ```
//!
//! The soup may contain duplicate vertices at seams and zero-area flaps
//! where the silhouette collapses; hand it to `mesh-repair` for welding
//! and watertightness validation before export.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod error;
mod extrude;

pub use error::{ExtrudeError, Result};
pub use extrude::{extrude_heightfield, CornerRule, ExtrudeParams};
