//! Elevation grid and ribbon rasterization for Ridgeline.
//!
//! This crate holds the discrete middle of the pipeline: the
//! [`ElevationGrid`] container and the rasterizer that fills it from the
//! paired inner/outer curve polylines produced by `track-curve`.
//!
//! - [`ElevationGrid`] - dense, rectangular, origin-aligned height grid
//!   with an [`EMPTY`] sentinel for untouched cells
//! - [`rasterize_ribbon`] - scan-converts the quad strip between the two
//!   polylines, recording per-segment elevation in every covered cell
//!
//! Glyph bitmaps skip the rasterizer entirely: build a grid with
//! [`ElevationGrid::from_grayscale`] and hand it straight to the extruder.
//!
//! # Invariants
//!
//! - One uniform scale factor for both axes (aspect ratio preserved)
//! - Covered cells sit strictly above [`EMPTY`] (at least [`FILL_EPSILON`])
//! - The grid is freshly allocated per call; no shared state
//!
//! # Example
//!
//! ```
//! use nalgebra::Point2;
//! use relief_grid::{rasterize_ribbon, EMPTY};
//!
//! let inner = vec![Point2::new(0.0, 0.0), Point2::new(4.0, 0.0)];
//! let outer = vec![Point2::new(0.0, 1.0), Point2::new(4.0, 1.0)];
//!
//! let grid = rasterize_ribbon(&inner, &outer, &[320.0, 340.0], 64).unwrap();
//! assert!(grid.count_above(EMPTY) > 0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod error;
mod grid;
mod rasterize;

pub use error::{RasterError, Result};
pub use grid::{ElevationGrid, EMPTY, FILL_EPSILON};
pub use rasterize::rasterize_ribbon;
