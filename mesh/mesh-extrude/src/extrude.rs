//! Heightfield extrusion into a closed triangle soup.
//!
//! Turns a 2D grid of heights (with an empty-cell sentinel) into a solid:
//! a top surface tiled over filled cells, a silhouette detected from the
//! coverage of emitted triangles, and a floor sheet that closes the sides
//! because silhouette vertices drop to the floor level.

use mesh_types::{Point3, Triangle, TriangleSoup};
use relief_grid::ElevationGrid;
use tracing::{debug, info};

use crate::error::{ExtrudeError, Result};

/// Corner-inclusion policy for the top surface.
///
/// Each candidate triangle of a 2x2 cell neighborhood is tested against
/// the mask threshold at its three corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CornerRule {
    /// Emit a triangle only when **all three** corners are filled.
    ///
    /// Avoids spurious slivers at jagged boundaries; the default.
    #[default]
    RequireAll,
    /// Emit a triangle when **any** corner is filled.
    ///
    /// Produces a slightly larger skirt around the silhouette.
    RequireAny,
}

/// Parameters for heightfield extrusion.
///
/// # Example
///
/// ```
/// use mesh_extrude::{CornerRule, ExtrudeParams};
///
/// let params = ExtrudeParams::default()
///     .with_z_scale(100.0)
///     .with_mask_threshold(0.05)
///     .with_base_fraction(0.1);
/// assert_eq!(params.corner_rule, CornerRule::RequireAll);
/// ```
#[derive(Debug, Clone)]
pub struct ExtrudeParams {
    /// Vertical exaggeration applied to `value - min` heights.
    pub z_scale: f64,

    /// Threshold above which a cell counts as filled.
    ///
    /// `None` uses the grid minimum, so every cell strictly above the
    /// background qualifies.
    pub mask_threshold: Option<f64>,

    /// Minimum base thickness as a fraction of the height range.
    ///
    /// The floor sits at `z_min - base_fraction * (z_max - z_min)`. The
    /// default of 0 produces a paper-thin base; pass a larger fraction for
    /// a sturdier model.
    pub base_fraction: f64,

    /// Corner-inclusion policy for the top surface.
    pub corner_rule: CornerRule,
}

impl Default for ExtrudeParams {
    fn default() -> Self {
        Self {
            z_scale: 1.0,
            mask_threshold: None,
            base_fraction: 0.0,
            corner_rule: CornerRule::RequireAll,
        }
    }
}

impl ExtrudeParams {
    /// Set the vertical scale factor.
    #[must_use]
    pub const fn with_z_scale(mut self, z_scale: f64) -> Self {
        self.z_scale = z_scale;
        self
    }

    /// Set an explicit mask threshold.
    #[must_use]
    pub const fn with_mask_threshold(mut self, threshold: f64) -> Self {
        self.mask_threshold = Some(threshold);
        self
    }

    /// Set the minimum base thickness fraction.
    #[must_use]
    pub const fn with_base_fraction(mut self, fraction: f64) -> Self {
        self.base_fraction = fraction;
        self
    }

    /// Set the corner-inclusion policy.
    #[must_use]
    pub const fn with_corner_rule(mut self, rule: CornerRule) -> Self {
        self.corner_rule = rule;
        self
    }
}

/// A top-surface vertex anchored to its grid cell.
///
/// Solidification matches vertices to the silhouette by integer cell
/// index, never by floating-point coordinate comparison.
#[derive(Debug, Clone, Copy)]
struct CellVertex {
    row: usize,
    col: usize,
    z: f64,
}

/// Extrude a heightfield into a closed triangle soup.
///
/// Steps, in order:
///
/// 1. Crop the grid to the tight bounding box of filled cells, then pad by
///    one empty cell on every side so boundary detection always has empty
///    neighbors to compare against.
/// 2. Tile the top surface: two candidate triangles per 2x2 neighborhood,
///    emitted per the [`CornerRule`], carrying `z_scale * (value - min)`
///    heights and re-centered planar coordinates.
/// 3. Detect the silhouette: cells whose 3x3 coverage sum is not 9 (plus
///    all absolute border cells) form the boundary set.
/// 4. Solidify: boundary vertices drop to the floor level — the
///    background z of 0 minus `base_fraction` of the field's height
///    range — and a mirrored floor sheet with reversed winding closes
///    the underside.
///
/// The output is an unindexed soup; normals are not computed here (the
/// repair stage recomputes them from winding).
///
/// # Errors
///
/// - [`ExtrudeError::DegenerateGrid`] for grids under 2x2
/// - [`ExtrudeError::EmptyHeightfield`] when no cell exceeds the mask
///   threshold (or no triangle qualifies under the corner rule)
///
/// # Example
///
/// ```
/// use mesh_extrude::{extrude_heightfield, ExtrudeParams};
/// use relief_grid::ElevationGrid;
///
/// let mut grid = ElevationGrid::new(5, 5);
/// for r in 1..4 {
///     for c in 1..4 {
///         grid.set(r, c, 2.0);
///     }
/// }
///
/// let soup = extrude_heightfield(&grid, &ExtrudeParams::default()).unwrap();
/// assert!(!soup.is_empty());
/// ```
pub fn extrude_heightfield(grid: &ElevationGrid, params: &ExtrudeParams) -> Result<TriangleSoup> {
    if grid.rows() < 2 || grid.cols() < 2 {
        return Err(ExtrudeError::DegenerateGrid {
            rows: grid.rows(),
            cols: grid.cols(),
        });
    }

    let background = grid.min_value();
    let threshold = params.mask_threshold.unwrap_or(background);

    let field = crop_and_pad(grid, threshold, background)?;
    let (m, n) = (field.rows(), field.cols());
    debug!(rows = m, cols = n, threshold, "cropped and padded heightfield");

    // Top surface. Vertices stay anchored to cell indices until emission.
    let mut facets: Vec<[CellVertex; 3]> = Vec::new();
    let mut coverage = vec![false; m * n];

    let filled = |r: usize, c: usize| field.value(r, c) > threshold;
    let vertex = |r: usize, c: usize| CellVertex {
        row: r,
        col: c,
        z: params.z_scale * (field.value(r, c) - background),
    };

    for r in 0..m - 1 {
        for c in 0..n - 1 {
            // Quad corners: split along the anti-diagonal.
            let corners = [(r, c), (r + 1, c), (r, c + 1), (r + 1, c + 1)];
            let upper = [corners[0], corners[1], corners[2]];
            let lower = [corners[1], corners[3], corners[2]];

            for tri in [upper, lower] {
                let qualifies = match params.corner_rule {
                    CornerRule::RequireAll => tri.iter().all(|&(r, c)| filled(r, c)),
                    CornerRule::RequireAny => tri.iter().any(|&(r, c)| filled(r, c)),
                };
                if qualifies {
                    facets.push([
                        vertex(tri[0].0, tri[0].1),
                        vertex(tri[1].0, tri[1].1),
                        vertex(tri[2].0, tri[2].1),
                    ]);
                    for (tr, tc) in tri {
                        coverage[tr * n + tc] = true;
                    }
                }
            }
        }
    }

    if facets.is_empty() {
        return Err(ExtrudeError::EmptyHeightfield);
    }

    let boundary = silhouette(&coverage, m, n);

    // Floor level from the field's full height range. The background maps
    // to z = 0, so the floor sits below the lowest covered cell even when
    // the corner rule emits no background corners (a flat plateau would
    // otherwise collapse to zero thickness).
    let z_max = params.z_scale * (field.max_value() - background);
    let floor = params.base_fraction.mul_add(-z_max, 0.0);

    // Emit: top sheet with boundary vertices dropped to the floor, plus a
    // mirrored floor sheet with reversed winding. Walls form implicitly
    // where the top sheet bends down to meet the floor.
    let mut soup = TriangleSoup::with_capacity(facets.len() * 2);
    let center_r = m as f64 / 2.0;
    let center_c = n as f64 / 2.0;

    for facet in &facets {
        let top: Vec<Point3<f64>> = facet
            .iter()
            .map(|v| {
                let z = if boundary[v.row * n + v.col] {
                    floor
                } else {
                    v.z
                };
                Point3::new(v.row as f64 - center_r, v.col as f64 - center_c, z)
            })
            .collect();

        let bottom: Vec<Point3<f64>> = facet
            .iter()
            .map(|v| Point3::new(v.row as f64 - center_r, v.col as f64 - center_c, floor))
            .collect();

        soup.push(Triangle::new(top[0], top[1], top[2]));
        // Reversed winding so the floor faces downward.
        soup.push(Triangle::new(bottom[1], bottom[0], bottom[2]));
    }

    info!(
        triangles = soup.len(),
        floor, "extruded heightfield into triangle soup"
    );
    Ok(soup)
}

/// Crop to the tight bounding box of filled cells and pad one empty cell
/// on every side.
fn crop_and_pad(grid: &ElevationGrid, threshold: f64, background: f64) -> Result<ElevationGrid> {
    let mut r_min = usize::MAX;
    let mut r_max = 0;
    let mut c_min = usize::MAX;
    let mut c_max = 0;

    for r in 0..grid.rows() {
        for c in 0..grid.cols() {
            if grid.value(r, c) > threshold {
                r_min = r_min.min(r);
                r_max = r_max.max(r);
                c_min = c_min.min(c);
                c_max = c_max.max(c);
            }
        }
    }

    if r_min == usize::MAX {
        return Err(ExtrudeError::EmptyHeightfield);
    }

    let rows = r_max - r_min + 1 + 2;
    let cols = c_max - c_min + 1 + 2;
    let mut out = ElevationGrid::new(rows, cols);

    for r in 0..rows {
        for c in 0..cols {
            let value = if r == 0 || c == 0 || r == rows - 1 || c == cols - 1 {
                background
            } else {
                grid.value(r_min + r - 1, c_min + c - 1)
            };
            out.set(r, c, value);
        }
    }

    Ok(out)
}

/// Compute the silhouette mask from the top-surface coverage.
///
/// A cell is on the silhouette when its 3x3 neighborhood coverage sum is
/// anything other than a full 9 (fully interior) or 0 (fully outside).
/// Absolute grid border cells are always boundary, since their neighbor
/// sums cannot account for out-of-grid cells.
fn silhouette(coverage: &[bool], m: usize, n: usize) -> Vec<bool> {
    let mut boundary = vec![false; m * n];

    for r in 0..m {
        for c in 0..n {
            if r == 0 || c == 0 || r == m - 1 || c == n - 1 {
                boundary[r * n + c] = true;
                continue;
            }

            let mut sum = 0;
            for dr in -1i64..=1 {
                for dc in -1i64..=1 {
                    let rr = (r as i64 + dr) as usize;
                    let cc = (c as i64 + dc) as usize;
                    if coverage[rr * n + cc] {
                        sum += 1;
                    }
                }
            }
            boundary[r * n + c] = sum != 9 && sum != 0;
        }
    }

    boundary
}
