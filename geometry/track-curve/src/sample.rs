//! Track samples and deduplication.

use nalgebra::Point2;
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One geolocated elevation sample of a recorded track.
///
/// Ordering along the track is significant. Coordinates are planar
/// (already projected); the unit convention is the caller's.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TrackSample {
    /// Planar x coordinate.
    pub x: f64,
    /// Planar y coordinate.
    pub y: f64,
    /// Elevation at this point.
    pub elevation: f64,
}

impl TrackSample {
    /// Create a new sample.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, elevation: f64) -> Self {
        Self { x, y, elevation }
    }

    /// The planar position as a point.
    #[inline]
    #[must_use]
    pub fn position(&self) -> Point2<f64> {
        Point2::new(self.x, self.y)
    }
}

/// Remove samples whose `(x, y)` position repeats the previous sample's.
///
/// Spline fitting fails on duplicate knots, so runs of identical positions
/// are collapsed to their first sample (the first elevation wins). Ordering
/// is preserved.
///
/// # Example
///
/// ```
/// use track_curve::{dedup_consecutive, TrackSample};
///
/// let samples = vec![
///     TrackSample::new(0.0, 0.0, 100.0),
///     TrackSample::new(0.0, 0.0, 101.0), // duplicate position
///     TrackSample::new(1.0, 0.0, 102.0),
/// ];
///
/// let unique = dedup_consecutive(&samples);
/// assert_eq!(unique.len(), 2);
/// assert_eq!(unique[0].elevation, 100.0);
/// ```
#[must_use]
pub fn dedup_consecutive(samples: &[TrackSample]) -> Vec<TrackSample> {
    let mut unique: Vec<TrackSample> = Vec::with_capacity(samples.len());

    for sample in samples {
        match unique.last() {
            Some(prev) if prev.x == sample.x && prev.y == sample.y => {}
            _ => unique.push(*sample),
        }
    }

    let removed = samples.len() - unique.len();
    if removed > 0 {
        debug!(removed, "removed duplicate track positions before fitting");
    }

    unique
}
