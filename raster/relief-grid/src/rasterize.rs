//! Ribbon rasterization into an elevation grid.
//!
//! The region between the smoothed curve and its offset curve is filled one
//! quadrilateral at a time: consecutive point pairs of the two polylines
//! form a quad strip, and each quad is scan-converted into grid cells
//! carrying the segment's elevation.

use nalgebra::Point2;
use tracing::debug;

use crate::error::{RasterError, Result};
use crate::grid::{ElevationGrid, FILL_EPSILON};

/// Rasterize the ribbon between two paired polylines into an elevation
/// grid.
///
/// The joint bounding box of both polylines is scaled by a single uniform
/// factor `resolution / max(range_x, range_y)`, so the long axis maps to
/// `resolution` cells and the short axis scales proportionally — the grid
/// preserves the real-world aspect ratio by construction.
///
/// For every consecutive index pair the quadrilateral
/// `(inner[i], outer[i], outer[i+1], inner[i+1])` is filled with
/// `elevations[i] - min(elevations) + FILL_EPSILON`, clipped to grid
/// bounds. Overlapping quads are written last-segment-wins; adjacent
/// segments agree in the overlap up to rounding.
///
/// # Errors
///
/// - [`RasterError::ZeroResolution`] for `resolution == 0`
/// - [`RasterError::LengthMismatch`] if the three arrays disagree
/// - [`RasterError::InsufficientPoints`] for fewer than 2 points
/// - [`RasterError::DegenerateExtent`] when all points coincide
///
/// # Example
///
/// ```
/// use nalgebra::Point2;
/// use relief_grid::{rasterize_ribbon, EMPTY};
///
/// let inner = vec![Point2::new(0.0, 0.0), Point2::new(10.0, 0.0)];
/// let outer = vec![Point2::new(0.0, 2.0), Point2::new(10.0, 2.0)];
///
/// let grid = rasterize_ribbon(&inner, &outer, &[5.0, 5.0], 100).unwrap();
/// assert!(grid.count_above(EMPTY) > 0);
/// ```
pub fn rasterize_ribbon(
    inner: &[Point2<f64>],
    outer: &[Point2<f64>],
    elevations: &[f64],
    resolution: usize,
) -> Result<ElevationGrid> {
    if resolution == 0 {
        return Err(RasterError::ZeroResolution);
    }
    if inner.len() != outer.len() || inner.len() != elevations.len() {
        return Err(RasterError::LengthMismatch {
            inner: inner.len(),
            outer: outer.len(),
            elevations: elevations.len(),
        });
    }
    if inner.len() < 2 {
        return Err(RasterError::InsufficientPoints {
            required: 2,
            actual: inner.len(),
        });
    }

    // Joint bounding box of both polylines.
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for p in inner.iter().chain(outer) {
        x_min = x_min.min(p.x);
        x_max = x_max.max(p.x);
        y_min = y_min.min(p.y);
        y_max = y_max.max(p.y);
    }

    let range_x = x_max - x_min;
    let range_y = y_max - y_min;
    let max_range = range_x.max(range_y);
    if !(max_range > 0.0) {
        return Err(RasterError::DegenerateExtent);
    }

    // One scale for both axes: preserves aspect ratio.
    let scale = resolution as f64 / max_range;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    // Truncation intended: cell counts are the floor of the scaled ranges.
    let rows = ((range_x * scale) as usize).max(1);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let cols = ((range_y * scale) as usize).max(1);

    let mut grid = ElevationGrid::new(rows, cols);
    debug!(rows, cols, scale, "rasterizing ribbon");

    let min_elevation = elevations.iter().copied().fold(f64::INFINITY, f64::min);

    #[allow(clippy::cast_possible_truncation)]
    // Truncation intended: grid coordinates are floored like the bbox.
    let to_cell = |p: &Point2<f64>| -> (i64, i64) {
        (
            ((p.x - x_min) * scale) as i64,
            ((p.y - y_min) * scale) as i64,
        )
    };

    for i in 0..inner.len() - 1 {
        let quad = [
            to_cell(&inner[i]),
            to_cell(&outer[i]),
            to_cell(&outer[i + 1]),
            to_cell(&inner[i + 1]),
        ];
        let value = elevations[i] - min_elevation + FILL_EPSILON;
        fill_quad(&mut grid, &quad, value);
    }

    Ok(grid)
}

/// Scan-convert a quadrilateral into the grid (even-odd rule), writing
/// `value` into every interior cell. Out-of-grid cells are clipped.
fn fill_quad(grid: &mut ElevationGrid, quad: &[(i64, i64); 4], value: f64) {
    let r_lo = quad.iter().map(|&(r, _)| r).min().unwrap_or(0);
    let r_hi = quad.iter().map(|&(r, _)| r).max().unwrap_or(0);

    for r in r_lo.max(0)..=r_hi {
        // Collect column crossings of the scanline with each quad edge.
        let mut crossings: Vec<f64> = Vec::with_capacity(4);
        for j in 0..4 {
            let (r0, c0) = quad[j];
            let (r1, c1) = quad[(j + 1) % 4];

            // Half-open span so shared vertices are counted once.
            if (r0 <= r) != (r1 <= r) {
                let t = (r - r0) as f64 / (r1 - r0) as f64;
                crossings.push((c1 - c0) as f64 * t + c0 as f64);
            }
        }
        crossings.sort_by(|a, b| a.total_cmp(b));

        for pair in crossings.chunks_exact(2) {
            #[allow(clippy::cast_possible_truncation)]
            let c_lo = pair[0].round() as i64;
            #[allow(clippy::cast_possible_truncation)]
            let c_hi = pair[1].round() as i64;
            for c in c_lo.max(0)..=c_hi {
                set_clipped(grid, r, c, value);
            }
        }
    }

    // Stamp the corner cells so degenerate-thin quads still leave a mark.
    for &(r, c) in quad {
        set_clipped(grid, r, c, value);
    }
}

#[allow(clippy::cast_sign_loss)]
// Sign loss guarded: negative coordinates are rejected before the cast.
fn set_clipped(grid: &mut ElevationGrid, r: i64, c: i64, value: f64) {
    if r >= 0 && c >= 0 {
        grid.set(r as usize, c as usize, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::EMPTY;
    use approx::assert_relative_eq;

    fn straight_ribbon(resolution: usize) -> ElevationGrid {
        let inner: Vec<Point2<f64>> =
            (0..=10).map(|i| Point2::new(f64::from(i), 0.0)).collect();
        let outer: Vec<Point2<f64>> =
            (0..=10).map(|i| Point2::new(f64::from(i), 2.0)).collect();
        let elevations = vec![50.0; 11];
        rasterize_ribbon(&inner, &outer, &elevations, resolution).unwrap()
    }

    #[test]
    fn aspect_ratio_is_preserved() {
        // 10 x 2 extent at resolution 100: rows/cols must match 5:1
        // within one cell of rounding.
        let grid = straight_ribbon(100);
        assert_eq!(grid.rows(), 100);
        assert!((grid.cols() as i64 - 20).abs() <= 1);
    }

    #[test]
    fn covered_cells_exceed_empty_sentinel() {
        let grid = straight_ribbon(80);
        let covered = grid.count_above(EMPTY);
        assert!(covered > 0);
        for v in grid.values().filter(|&v| v != EMPTY) {
            assert!(v > EMPTY);
            assert_relative_eq!(v, FILL_EPSILON, epsilon = 1e-12);
        }
    }

    #[test]
    fn elevation_values_are_min_shifted() {
        let inner = vec![Point2::new(0.0, 0.0), Point2::new(10.0, 0.0)];
        let outer = vec![Point2::new(0.0, 2.0), Point2::new(10.0, 2.0)];
        let grid = rasterize_ribbon(&inner, &outer, &[120.0, 180.0], 50).unwrap();

        // The single segment writes its start elevation: 120 - 120 + eps.
        let max = grid.max_value();
        assert_relative_eq!(max, FILL_EPSILON, epsilon = 1e-12);
    }

    #[test]
    fn quarter_circle_ribbon_has_constant_width() {
        // Four points on a quarter circle of radius 10 offset inward by a
        // thickness of 1: the covered region is a curved ribbon of
        // approximately constant perpendicular width.
        let n = 64;
        let thickness = 1.0;
        let inner: Vec<Point2<f64>> = (0..n)
            .map(|i| {
                let a = std::f64::consts::FRAC_PI_2 * f64::from(i) / f64::from(n - 1);
                Point2::new(10.0 * a.cos(), 10.0 * a.sin())
            })
            .collect();
        let outer: Vec<Point2<f64>> = (0..n)
            .map(|i| {
                let a = std::f64::consts::FRAC_PI_2 * f64::from(i) / f64::from(n - 1);
                Point2::new((10.0 - thickness) * a.cos(), (10.0 - thickness) * a.sin())
            })
            .collect();
        let elevations = vec![100.0; n as usize];

        let resolution = 200usize;
        let grid = rasterize_ribbon(&inner, &outer, &elevations, resolution).unwrap();

        // Constant elevation rasterizes to the fill epsilon everywhere.
        for v in grid.values().filter(|&v| v != EMPTY) {
            assert_relative_eq!(v, FILL_EPSILON, epsilon = 1e-12);
        }

        // Covered area should be close to the analytic ribbon area
        // (quarter annulus), in cell units.
        let scale = resolution as f64 / 10.0;
        let expected_cells = std::f64::consts::FRAC_PI_4
            * (10.0_f64.powi(2) - 9.0_f64.powi(2))
            * scale
            * scale;
        let covered = grid.count_above(EMPTY) as f64;
        assert!(
            (covered - expected_cells).abs() / expected_cells < 0.25,
            "covered {covered} vs expected {expected_cells}"
        );
    }

    #[test]
    fn later_segments_overwrite() {
        // Two segments over the same area with different elevations: the
        // later value must win in the overlap.
        let inner = vec![
            Point2::new(0.0, 0.0),
            Point2::new(5.0, 0.0),
            Point2::new(0.0, 0.1),
        ];
        let outer = vec![
            Point2::new(0.0, 3.0),
            Point2::new(5.0, 3.0),
            Point2::new(0.0, 3.1),
        ];
        let grid = rasterize_ribbon(&inner, &outer, &[10.0, 20.0, 20.0], 50).unwrap();

        // Cells written by the second segment carry its value.
        let high = 20.0 - 10.0 + FILL_EPSILON;
        assert!(grid.values().any(|v| (v - high).abs() < 1e-9));
    }

    #[test]
    fn mismatched_lengths_fail() {
        let inner = vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)];
        let outer = vec![Point2::new(0.0, 1.0)];
        assert!(matches!(
            rasterize_ribbon(&inner, &outer, &[0.0, 0.0], 10),
            Err(RasterError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn coincident_points_fail() {
        let p = Point2::new(1.0, 1.0);
        assert!(matches!(
            rasterize_ribbon(&[p, p], &[p, p], &[0.0, 0.0], 10),
            Err(RasterError::DegenerateExtent)
        ));
    }

    #[test]
    fn zero_resolution_fails() {
        let inner = vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)];
        let outer = vec![Point2::new(0.0, 1.0), Point2::new(1.0, 1.0)];
        assert!(matches!(
            rasterize_ribbon(&inner, &outer, &[0.0, 0.0], 0),
            Err(RasterError::ZeroResolution)
        ));
    }
}
