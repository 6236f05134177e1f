//! Error types for frame algebra.

use thiserror::Error;

/// Result type for frame operations.
pub type FrameResult<T> = Result<T, FrameError>;

/// Errors that can occur when building or combining frames.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrameError {
    /// Two series of different lengths were combined and neither has length 1.
    #[error("time series length mismatch: {left} vs {right}")]
    LengthMismatch {
        /// Length of the left operand.
        left: usize,
        /// Length of the right operand.
        right: usize,
    },

    /// The orientation series does not match the position series.
    #[error("orientation series has {orientations} samples but position series has {positions}")]
    OrientationLength {
        /// Number of position samples.
        positions: usize,
        /// Number of orientation samples.
        orientations: usize,
    },

    /// Nominal orientation given without an orientation series, or the reverse.
    #[error("nominal orientation must be present exactly when the orientation series is")]
    NominalOrientation,

    /// A sample index past the end of the series.
    #[error("sample {index} out of range for a series of {len}")]
    SampleOutOfRange {
        /// Requested sample.
        index: usize,
        /// Series length.
        len: usize,
    },
}

impl FrameError {
    /// Creates a length mismatch error.
    #[must_use]
    pub const fn length_mismatch(left: usize, right: usize) -> Self {
        Self::LengthMismatch { left, right }
    }

    /// Creates an orientation length error.
    #[must_use]
    pub const fn orientation_length(positions: usize, orientations: usize) -> Self {
        Self::OrientationLength {
            positions,
            orientations,
        }
    }
}
