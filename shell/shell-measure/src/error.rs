//! Error types for shell measurement.

use thiserror::Error;

/// Result type for measurement operations.
pub type MeasureResult<T> = Result<T, MeasureError>;

/// Errors that can occur during shell measurement.
#[derive(Debug, Error)]
pub enum MeasureError {
    /// The reference shell has no points to match against.
    #[error("reference shell has no points")]
    EmptyShell,

    /// Loading a shell file failed.
    #[error(transparent)]
    Io(#[from] shell_io::IoError),
}
