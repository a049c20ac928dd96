//! Perpendicular offset curve construction.
//!
//! Gives the one-dimensional smoothed track a finite printable width: every
//! point of the resampled curve is displaced a fixed distance along the
//! local perpendicular, producing a second polyline that bounds a ribbon of
//! constant width.

use nalgebra::{Point2, Vector2};
use tracing::debug;

use crate::error::{CurveError, Result};

/// Segments shorter than this are treated as degenerate (no usable
/// tangent direction).
const DEGENERATE_SEGMENT_EPSILON: f64 = 1e-12;

/// An offset polyline paired 1:1 with its source polyline.
///
/// Point `i` corresponds to source point `i`. Indices whose local tangent
/// was degenerate (zero-length forward difference) were resolved by simple
/// axis translation and are recorded in `degenerate_indices`.
#[derive(Debug, Clone, PartialEq)]
pub struct OffsetPolyline {
    /// The displaced points, same length as the source.
    pub points: Vec<Point2<f64>>,
    /// Indices that fell back to axis translation.
    pub degenerate_indices: Vec<usize>,
}

impl OffsetPolyline {
    /// Number of offset points.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check whether the polyline has no points.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Displace every point of `points` by `thickness` along the local
/// perpendicular.
///
/// For each consecutive pair the forward difference is rotated 90° into the
/// unit normal `n = (-dy, dx) / |d|` and the *earlier* point is displaced
/// by `-thickness * n`; positive thickness therefore offsets to the right
/// of the direction of travel, and the sign of `thickness` selects the
/// side.
///
/// The final point has no forward difference; it reuses the unit normal of
/// the last non-degenerate segment, which keeps the offset distance equal
/// to `thickness` at the final index as well.
///
/// Degenerate segments (zero-length forward difference) are resolved by
/// axis translation `(x + thickness, y)` and their indices recorded.
///
/// # Errors
///
/// Returns [`CurveError::InsufficientPoints`] for fewer than 2 points.
///
/// # Example
///
/// ```
/// use track_curve::offset_polyline;
/// use nalgebra::Point2;
///
/// let points = vec![Point2::new(0.0, 0.0), Point2::new(2.0, 0.0)];
/// let offset = offset_polyline(&points, 0.5).unwrap();
///
/// // Offset lies half a unit to the right of travel (negative y).
/// assert!((offset.points[0].y + 0.5).abs() < 1e-12);
/// ```
pub fn offset_polyline(points: &[Point2<f64>], thickness: f64) -> Result<OffsetPolyline> {
    if points.len() < 2 {
        return Err(CurveError::InsufficientPoints {
            required: 2,
            actual: points.len(),
        });
    }

    let n = points.len();
    let mut offset = Vec::with_capacity(n);
    let mut degenerate_indices = Vec::new();
    let mut last_normal: Option<Vector2<f64>> = None;

    for i in 0..n - 1 {
        let delta = points[i + 1] - points[i];
        let len = delta.norm();

        if len < DEGENERATE_SEGMENT_EPSILON {
            degenerate_indices.push(i);
            offset.push(Point2::new(points[i].x + thickness, points[i].y));
            continue;
        }

        let normal = Vector2::new(-delta.y, delta.x) / len;
        last_normal = Some(normal);
        offset.push(points[i] - thickness * normal);
    }

    // The last point extrapolates the previous segment's perpendicular.
    match last_normal {
        Some(normal) => offset.push(points[n - 1] - thickness * normal),
        None => {
            // Every segment was degenerate; fall back to axis translation.
            degenerate_indices.push(n - 1);
            offset.push(Point2::new(points[n - 1].x + thickness, points[n - 1].y));
        }
    }

    if !degenerate_indices.is_empty() {
        debug!(
            count = degenerate_indices.len(),
            "degenerate offset segments resolved by axis translation"
        );
    }

    Ok(OffsetPolyline {
        points: offset,
        degenerate_indices,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn straight_line_offsets_perpendicular() {
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
        ];
        let offset = offset_polyline(&points, 0.5).unwrap();

        assert_eq!(offset.len(), 3);
        for (p, q) in points.iter().zip(&offset.points) {
            assert_relative_eq!(q.x, p.x, epsilon = 1e-12);
            assert_relative_eq!(q.y, p.y - 0.5, epsilon = 1e-12);
        }
        assert!(offset.degenerate_indices.is_empty());
    }

    #[test]
    fn offset_distance_equals_thickness() {
        // Offset constancy: |offset[i] - points[i]| == thickness for every
        // non-degenerate index, including the extrapolated final one.
        let points: Vec<Point2<f64>> = (0..50)
            .map(|i| {
                let t = f64::from(i) * 0.1;
                Point2::new(t.cos() * 5.0, t.sin() * 5.0)
            })
            .collect();

        let thickness = 0.75;
        let offset = offset_polyline(&points, thickness).unwrap();

        for (p, q) in points.iter().zip(&offset.points) {
            assert_relative_eq!((q - p).norm(), thickness, epsilon = 1e-9);
        }
    }

    #[test]
    fn zero_thickness_coincides_exactly() {
        // L-shaped polyline offset by zero must coincide with the source.
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
        ];
        let offset = offset_polyline(&points, 0.0).unwrap();
        assert_eq!(offset.points, points);
    }

    #[test]
    fn signed_thickness_flips_side() {
        let points = vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)];
        let right = offset_polyline(&points, 0.5).unwrap();
        let left = offset_polyline(&points, -0.5).unwrap();

        assert_relative_eq!(right.points[0].y, -0.5, epsilon = 1e-12);
        assert_relative_eq!(left.points[0].y, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn degenerate_segment_translates_along_x() {
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 0.0), // zero-length segment
            Point2::new(1.0, 0.0),
        ];
        let offset = offset_polyline(&points, 0.25).unwrap();

        assert_eq!(offset.degenerate_indices, vec![0]);
        assert_relative_eq!(offset.points[0].x, 0.25, epsilon = 1e-12);
        assert_relative_eq!(offset.points[0].y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn last_point_reuses_previous_normal() {
        let points = vec![Point2::new(0.0, 0.0), Point2::new(3.0, 0.0)];
        let offset = offset_polyline(&points, 1.0).unwrap();

        // Same normal as the only segment: straight translation in -y.
        assert_relative_eq!(offset.points[1].x, 3.0, epsilon = 1e-12);
        assert_relative_eq!(offset.points[1].y, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn too_few_points() {
        let points = vec![Point2::new(0.0, 0.0)];
        assert!(matches!(
            offset_polyline(&points, 1.0),
            Err(CurveError::InsufficientPoints { .. })
        ));
    }

    #[test]
    fn all_degenerate_falls_back() {
        let points = vec![Point2::new(2.0, 3.0), Point2::new(2.0, 3.0)];
        let offset = offset_polyline(&points, 0.5).unwrap();

        assert_eq!(offset.degenerate_indices, vec![0, 1]);
        assert_relative_eq!(offset.points[1].x, 2.5, epsilon = 1e-12);
        assert_relative_eq!(offset.points[1].y, 3.0, epsilon = 1e-12);
    }
}
