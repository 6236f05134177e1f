//! Error types for shell file I/O.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for shell I/O operations.
pub type IoResult<T> = Result<T, IoError>;

/// Errors that can occur during shell I/O operations.
#[derive(Debug, Error)]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// The output file could not be opened for writing.
    #[error("permission denied writing {path}; close any program using it and retry")]
    PermissionDenied {
        /// Path that could not be written.
        path: PathBuf,
    },

    /// A line did not match the shell grammar.
    #[error("line {line}: {message}")]
    Syntax {
        /// 1-based line number in the parsed text.
        line: usize,
        /// What was wrong.
        message: String,
    },

    /// Neither the strict nor the annotation-tolerant grammar accepted the text.
    #[error("unparseable shell file (strict: {strict}; filtered: {filtered})")]
    Unparseable {
        /// Error from the strict grammar.
        strict: Box<IoError>,
        /// Error from the filtered grammar.
        filtered: Box<IoError>,
    },

    /// Cache file is not a shell cache or has the wrong version.
    #[error("invalid cache file: {0}")]
    InvalidCache(String),

    /// Cache (de)serialization failed.
    #[error("cache serialization error: {0}")]
    CacheSerialize(String),

    /// The shell itself is malformed.
    #[error(transparent)]
    Shell(#[from] shell_types::ShellError),

    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IoError {
    /// Create a `Syntax` error at a 1-based line number.
    #[must_use]
    pub fn syntax(line: usize, message: impl Into<String>) -> Self {
        Self::Syntax {
            line,
            message: message.into(),
        }
    }

    /// Map an error from opening `path` for reading.
    #[must_use]
    pub fn on_read(path: &Path, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::Io(err)
        }
    }

    /// Map an error from creating `path` for writing.
    #[must_use]
    pub fn on_write(path: &Path, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::PermissionDenied {
            Self::PermissionDenied {
                path: path.to_path_buf(),
            }
        } else {
            Self::Io(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permission_denied_is_distinct() {
        let err = IoError::on_write(
            Path::new("out.shl"),
            std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        );
        assert!(matches!(err, IoError::PermissionDenied { .. }));
        assert!(err.to_string().contains("out.shl"));

        let err = IoError::on_write(
            Path::new("out.shl"),
            std::io::Error::from(std::io::ErrorKind::Other),
        );
        assert!(matches!(err, IoError::Io(_)));
    }

    #[test]
    fn not_found_on_read() {
        let err = IoError::on_read(
            Path::new("missing.shl"),
            std::io::Error::from(std::io::ErrorKind::NotFound),
        );
        assert!(matches!(err, IoError::FileNotFound { .. }));
    }

    #[test]
    fn unparseable_mentions_both_grammars() {
        let err = IoError::Unparseable {
            strict: Box::new(IoError::syntax(1, "bad header")),
            filtered: Box::new(IoError::syntax(2, "too few points")),
        };
        let msg = err.to_string();
        assert!(msg.contains("bad header"));
        assert!(msg.contains("too few points"));
    }
}
