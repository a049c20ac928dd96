//! Track smoothing and offset curves for Ridgeline.
//!
//! This crate turns an ordered, possibly duplicate-containing sequence of
//! `(x, y, elevation)` track samples into the paired polylines that bound a
//! printable ribbon:
//!
//! - [`smooth_track`] - fit an interpolating parametric spline through the
//!   deduplicated samples and resample it densely, with the resolution
//!   scaling with the real-world length of the selected span
//! - [`offset_polyline`] - displace the resampled curve a fixed distance
//!   along the local perpendicular to give it width
//!
//! # Pipeline position
//!
//! `samples → smooth_track → offset_polyline → relief-grid rasterization`
//!
//! Each stage consumes its full input and returns a fresh value; no global
//! state is touched, so independent tracks may be processed concurrently.
//!
//! # Example
//!
//! ```
//! use track_curve::{offset_polyline, smooth_track, TrackSample};
//!
//! let samples = vec![
//!     TrackSample::new(0.0, 0.0, 1200.0),
//!     TrackSample::new(1.0, 0.8, 1260.0),
//!     TrackSample::new(2.0, 1.0, 1310.0),
//! ];
//!
//! let track = smooth_track(&samples, 2.0).unwrap();
//! let offset = offset_polyline(&track.points, 0.05).unwrap();
//! assert_eq!(offset.len(), track.len());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod error;
mod offset;
mod resample;
mod sample;
mod spline;

pub use error::{CurveError, Result};
pub use offset::{offset_polyline, OffsetPolyline};
pub use resample::{smooth_track, ResampledTrack, MAX_FIT_ATTEMPTS, RESAMPLE_DENSITY};
pub use sample::{dedup_consecutive, TrackSample};
pub use spline::{CubicSpline, TrackCurve};

// Re-export the point type used throughout the public API
pub use nalgebra::Point2;
