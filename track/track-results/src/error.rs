//! Error types for result access and export.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for result-store operations.
pub type ResultsResult<T> = Result<T, ResultsError>;

/// Errors that can occur when creating, reading or exporting results.
#[derive(Debug, Error)]
pub enum ResultsError {
    /// A result component was created with no values.
    #[error("no values to create result component {set}.{component} with")]
    EmptyValues {
        /// Result set name.
        set: String,
        /// Component name.
        component: String,
    },

    /// A result component with this name already exists.
    #[error("result component {set}.{component} already exists")]
    ComponentExists {
        /// Result set name.
        set: String,
        /// Component name.
        component: String,
    },

    /// A required result component is not present.
    #[error("missing result component {set}.{component}")]
    MissingComponent {
        /// Result set name.
        set: String,
        /// Component name.
        component: String,
    },

    /// The output file could not be opened for writing.
    #[error("permission denied writing {path}; close any program using it and retry")]
    PermissionDenied {
        /// Path that could not be written.
        path: PathBuf,
    },

    /// Other I/O failure while writing.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// Path being written.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

impl ResultsError {
    /// Creates a missing component error.
    #[must_use]
    pub fn missing_component(set: &str, component: &str) -> Self {
        Self::MissingComponent {
            set: set.to_string(),
            component: component.to_string(),
        }
    }

    /// Map an I/O error on `path`, keeping permission failures distinct.
    #[must_use]
    pub fn on_write(path: &Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::PermissionDenied {
            Self::PermissionDenied {
                path: path.to_path_buf(),
            }
        } else {
            Self::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}
