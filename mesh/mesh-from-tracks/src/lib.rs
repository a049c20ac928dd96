//! Track-to-solid pipeline for Ridgeline.
//!
//! Wires the stages together: ordered `(x, y, elevation)` samples are
//! smoothed into a parametric curve, widened into a ribbon by the offset
//! curve, rasterized into an elevation grid, extruded into a closed
//! triangle soup and sealed into a watertight indexed mesh.
//!
//! The same extrusion core also accepts an externally supplied heightfield
//! (for example a text-glyph bitmap normalized into an
//! [`relief_grid::ElevationGrid`]), skipping the curve and raster stages.
//!
//! Every stage allocates its own output and the pipeline touches no global
//! state, so independent tracks (or a track and a glyph) can be processed
//! concurrently on separate threads.
//!
//! # Example
//!
//! ```
//! use mesh_from_tracks::{solid_from_track, TrackSolidParams};
//! use track_curve::TrackSample;
//!
//! let samples: Vec<TrackSample> = (0..8)
//!     .map(|i| {
//!         let t = f64::from(i);
//!         TrackSample::new(t, (t * 0.7).sin() * 2.0, 400.0 + t * 12.0)
//!     })
//!     .collect();
//!
//! let params = TrackSolidParams::default()
//!     .with_resolution(120)
//!     .with_thickness(0.8)
//!     .with_z_scale(10.0);
//!
//! let solid = solid_from_track(&samples, 0.2, &params).unwrap();
//! assert!(!solid.soup.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod error;
mod params;

pub use error::{PipelineError, Result};
pub use params::TrackSolidParams;

use mesh_extrude::{extrude_heightfield, ExtrudeParams};
use mesh_repair::seal_soup;
use mesh_types::{IndexedMesh, TriangleSoup};
use relief_grid::{rasterize_ribbon, ElevationGrid};
use track_curve::{dedup_consecutive, offset_polyline, smooth_track, TrackSample};
use tracing::{debug, info};

/// A finished solid: the raw soup from extrusion and the sealed mesh.
///
/// The soup is the external triangle-soup contract (what STL stores); the
/// sealed mesh is the welded, watertight form. `sealed.to_soup()` exports
/// the repaired geometry.
#[derive(Debug, Clone)]
pub struct TrackSolid {
    /// Unindexed output of the extruder, before repair.
    pub soup: TriangleSoup,
    /// Welded, watertight mesh after sealing.
    pub sealed: IndexedMesh,
}

/// Build a printable solid from a recorded track.
///
/// `selected_length` is the approximate real-world length of the covered
/// span; it only sizes the resampling density.
///
/// # Errors
///
/// Returns a stage-tagged [`PipelineError`] if any stage fails: too few
/// unique samples, a singular fit after retries, a degenerate extent, an
/// empty heightfield, or an unsealable mesh. No partial results are
/// returned.
pub fn solid_from_track(
    samples: &[TrackSample],
    selected_length: f64,
    params: &TrackSolidParams,
) -> Result<TrackSolid> {
    let track = smooth_track(samples, selected_length)?;

    let thickness = params
        .thickness_override
        .unwrap_or_else(|| derived_thickness(samples) * params.thickness_multiplier);
    debug!(thickness, points = track.len(), "offsetting smoothed track");

    let offset = offset_polyline(&track.points, thickness)?;
    let grid = rasterize_ribbon(
        &track.points,
        &offset.points,
        &track.elevations,
        params.resolution,
    )?;

    solidify(&grid, params).map(|solid| {
        info!(
            triangles = solid.soup.len(),
            faces = solid.sealed.face_count(),
            "track solid complete"
        );
        solid
    })
}

/// Build a printable solid from an externally supplied heightfield.
///
/// This is the glyph-bitmap path: the grid goes straight to extrusion and
/// sealing, skipping the curve and raster stages.
///
/// # Errors
///
/// Returns [`PipelineError::Extrude`] or [`PipelineError::Seal`] on
/// failure.
pub fn solid_from_heightfield(
    grid: &ElevationGrid,
    params: &TrackSolidParams,
) -> Result<TrackSolid> {
    solidify(grid, params)
}

/// Shared extrude-and-seal tail of both pipelines.
fn solidify(grid: &ElevationGrid, params: &TrackSolidParams) -> Result<TrackSolid> {
    let extrude = ExtrudeParams::default()
        .with_z_scale(params.z_scale)
        .with_mask_threshold(params.mask_threshold)
        .with_base_fraction(params.base_fraction)
        .with_corner_rule(params.corner_rule);

    let soup = extrude_heightfield(grid, &extrude)?;
    let sealed = seal_soup(&soup, &params.seal)?;

    Ok(TrackSolid { soup, sealed })
}

/// Derive the ribbon thickness from the sample spacing: the smallest
/// nonzero x-step between consecutive unique samples.
///
/// Tracks with no x variation at all fall back to the smallest nonzero
/// y-step, and degenerate single-point tracks to 1.0 (the curve stage
/// rejects those anyway).
fn derived_thickness(samples: &[TrackSample]) -> f64 {
    let unique = dedup_consecutive(samples);

    let min_step = |pick: fn(&TrackSample) -> f64| {
        unique
            .windows(2)
            .map(|w| (pick(&w[1]) - pick(&w[0])).abs())
            .filter(|&d| d > 0.0)
            .fold(f64::INFINITY, f64::min)
    };

    let dx = min_step(|s| s.x);
    if dx.is_finite() {
        return dx;
    }
    let dy = min_step(|s| s.y);
    if dy.is_finite() {
        return dy;
    }
    1.0
}
