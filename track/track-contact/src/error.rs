//! Error types for contact-track queries.

use thiserror::Error;

/// Result type for track operations.
pub type TrackResult<T> = Result<T, TrackError>;

/// Errors that can occur while building track data.
#[derive(Debug, Error)]
pub enum TrackError {
    /// No pose is known for the entity.
    #[error("no pose for {0}")]
    UnknownEntity(String),

    /// Series of one track (or the axes of one vector set) differ in length.
    #[error("{set}: series length mismatch: expected {expected}, found {found}")]
    RaggedSeries {
        /// Result set holding the series.
        set: String,
        /// Length of the first series.
        expected: usize,
        /// Length of the disagreeing series.
        found: usize,
    },

    /// Frame algebra failed.
    #[error(transparent)]
    Frame(#[from] track_frame::FrameError),

    /// Reading or writing results failed.
    #[error(transparent)]
    Results(#[from] track_results::ResultsError),
}

impl TrackError {
    /// Creates an unknown entity error.
    #[must_use]
    pub fn unknown_entity(name: impl Into<String>) -> Self {
        Self::UnknownEntity(name.into())
    }

    /// Creates a ragged series error.
    #[must_use]
    pub fn ragged_series(set: impl Into<String>, expected: usize, found: usize) -> Self {
        Self::RaggedSeries {
            set: set.into(),
            expected,
            found,
        }
    }
}
