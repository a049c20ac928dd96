//! Error types for curve fitting and offsetting.

use thiserror::Error;

/// Result type for curve operations.
pub type Result<T> = std::result::Result<T, CurveError>;

/// Errors that can occur while smoothing or offsetting a track.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CurveError {
    /// Too few unique points to define the curve.
    #[error("insufficient points: need at least {required}, got {actual}")]
    InsufficientPoints {
        /// Minimum required points.
        required: usize,
        /// Actual number of points after deduplication.
        actual: usize,
    },

    /// Spline fit stayed numerically singular after bounded retries.
    #[error("spline fit singular after {attempts} downsampling attempts")]
    SingularFit {
        /// Number of fit attempts made.
        attempts: usize,
    },

    /// Two adjacent knots coincide, so the parametrization is not
    /// strictly increasing at this index.
    #[error("duplicate knot at index {index}")]
    DuplicateKnot {
        /// Index of the offending knot.
        index: usize,
    },

    /// Parallel input arrays disagree in length.
    #[error("length mismatch: {points} points but {elevations} elevations")]
    LengthMismatch {
        /// Number of points.
        points: usize,
        /// Number of elevation values.
        elevations: usize,
    },

    /// A coordinate is NaN or infinite.
    #[error("non-finite coordinate at index {index}")]
    NonFiniteInput {
        /// Index of the offending sample.
        index: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_context() {
        let err = CurveError::InsufficientPoints {
            required: 2,
            actual: 1,
        };
        assert!(err.to_string().contains("need at least 2"));

        let err = CurveError::SingularFit { attempts: 3 };
        assert!(err.to_string().contains('3'));
    }
}
