//! Length-adaptive resampling of the fitted curve.

use nalgebra::Point2;
use tracing::{debug, warn};

use crate::error::{CurveError, Result};
use crate::sample::{dedup_consecutive, TrackSample};
use crate::spline::TrackCurve;

/// Resampled points per unit of selected track length.
///
/// A track covering `L` length units resamples to `1000 * (round(L) + 1)`
/// points, so mesh resolution adapts to real distance instead of sample
/// count.
pub const RESAMPLE_DENSITY: usize = 1000;

/// Maximum spline-fit attempts before giving up.
///
/// Each failed attempt keeps every other point and refits.
pub const MAX_FIT_ATTEMPTS: usize = 3;

/// A smoothed, densely resampled track.
///
/// Point `i` carries the elevation interpolated at the same curve
/// parameter. Both arrays always have equal length.
#[derive(Debug, Clone, PartialEq)]
pub struct ResampledTrack {
    /// Resampled planar positions along the curve.
    pub points: Vec<Point2<f64>>,
    /// Elevation at each resampled point.
    pub elevations: Vec<f64>,
}

impl ResampledTrack {
    /// Number of resampled points.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check whether the track has no points.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// View the resampled track as track samples again.
    ///
    /// Useful for feeding a resampled track back through the smoother.
    #[must_use]
    pub fn to_samples(&self) -> Vec<TrackSample> {
        self.points
            .iter()
            .zip(&self.elevations)
            .map(|(p, &e)| TrackSample::new(p.x, p.y, e))
            .collect()
    }
}

/// Smooth an ordered sample sequence into a densely resampled curve.
///
/// Fits an interpolating spline through the deduplicated samples and
/// evaluates it at `1000 * (round(selected_length) + 1)` uniformly spaced
/// parameters. Elevations are piecewise-linearly interpolated over the
/// spline's knot parameters (not raw index), extrapolating at the extreme
/// ends.
///
/// If residual duplicate positions make the fit singular, every other
/// point is kept and the fit retried, up to [`MAX_FIT_ATTEMPTS`] times.
///
/// # Arguments
///
/// * `samples` - Ordered track samples, duplicates tolerated
/// * `selected_length` - Approximate real-world length of the covered
///   span, used only to size the resampling
///
/// # Errors
///
/// - [`CurveError::InsufficientPoints`] if fewer than 2 unique samples
///   remain (before or during retries)
/// - [`CurveError::SingularFit`] if all retries are exhausted
///
/// # Example
///
/// ```
/// use track_curve::{smooth_track, TrackSample};
///
/// let samples = vec![
///     TrackSample::new(0.0, 0.0, 500.0),
///     TrackSample::new(1.0, 0.5, 520.0),
///     TrackSample::new(2.0, 0.0, 545.0),
/// ];
///
/// let track = smooth_track(&samples, 2.0).unwrap();
/// assert_eq!(track.len(), 3000);
/// assert_eq!(track.elevations.len(), track.len());
/// ```
pub fn smooth_track(samples: &[TrackSample], selected_length: f64) -> Result<ResampledTrack> {
    let unique = dedup_consecutive(samples);
    if unique.len() < 2 {
        return Err(CurveError::InsufficientPoints {
            required: 2,
            actual: unique.len(),
        });
    }

    let mut points: Vec<Point2<f64>> = unique.iter().map(TrackSample::position).collect();
    let mut elevations: Vec<f64> = unique.iter().map(|s| s.elevation).collect();

    let mut curve = None;
    let mut attempts = 0;

    while attempts < MAX_FIT_ATTEMPTS {
        attempts += 1;
        match TrackCurve::fit(&points) {
            Ok(fitted) => {
                curve = Some(fitted);
                break;
            }
            Err(CurveError::DuplicateKnot { index }) => {
                // Keep every other point and retry.
                warn!(attempts, index, "singular spline fit, downsampling by half");
                points = points.iter().step_by(2).copied().collect();
                elevations = elevations.iter().step_by(2).copied().collect();

                if points.len() < 2 {
                    return Err(CurveError::InsufficientPoints {
                        required: 2,
                        actual: points.len(),
                    });
                }
            }
            Err(other) => return Err(other),
        }
    }

    let Some(curve) = curve else {
        return Err(CurveError::SingularFit { attempts });
    };

    let count = RESAMPLE_DENSITY * (to_count(selected_length) + 1);
    debug!(count, input = points.len(), "resampling smoothed curve");

    let mut resampled = Vec::with_capacity(count);
    let mut resampled_elevations = Vec::with_capacity(count);
    let knots = curve.knots().to_vec();

    for i in 0..count {
        let u = i as f64 / (count - 1) as f64;
        resampled.push(curve.point_at(u));
        resampled_elevations.push(lerp_extrapolate(&knots, &elevations, u));
    }

    Ok(ResampledTrack {
        points: resampled,
        elevations: resampled_elevations,
    })
}

/// Round the selected length to a nonnegative whole number of units.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
// The value is finite and positive when cast, and track lengths are far
// below 2^52 units.
fn to_count(selected_length: f64) -> usize {
    let rounded = selected_length.round();
    if rounded.is_finite() && rounded > 0.0 {
        rounded as usize
    } else {
        0
    }
}

/// Piecewise-linear interpolation over `(knots, values)`, extrapolating
/// linearly beyond both ends.
fn lerp_extrapolate(knots: &[f64], values: &[f64], u: f64) -> f64 {
    debug_assert_eq!(knots.len(), values.len());
    debug_assert!(knots.len() >= 2);

    let n = knots.len();

    // Locate the segment; ends extrapolate with the terminal slope.
    let seg = if u <= knots[0] {
        0
    } else if u >= knots[n - 1] {
        n - 2
    } else {
        // Binary search for the last knot <= u.
        let mut lo = 0;
        let mut hi = n - 1;
        while hi - lo > 1 {
            let mid = (lo + hi) / 2;
            if knots[mid] <= u {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        lo
    };

    let h = knots[seg + 1] - knots[seg];
    let t = if h > 0.0 { (u - knots[seg]) / h } else { 0.0 };
    (values[seg + 1] - values[seg]).mul_add(t, values[seg])
}
