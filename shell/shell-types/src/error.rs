//! Error types for shell mesh operations.

use thiserror::Error;

/// Result type alias for shell mesh operations.
pub type ShellResult<T> = Result<T, ShellError>;

/// Errors that can occur when working with shell meshes.
#[derive(Debug, Error)]
pub enum ShellError {
    /// A facet references a point that does not exist.
    #[error("facet {facet} references point {index}, but the shell has {point_count} points")]
    IndexOutOfRange {
        /// Facet position in the facet list.
        facet: usize,
        /// Offending point index.
        index: u32,
        /// Number of points in the shell.
        point_count: usize,
    },

    /// A facet has fewer than three distinct points.
    #[error("facet {facet} is degenerate: {distinct} distinct points")]
    DegenerateFacet {
        /// Facet position in the facet list.
        facet: usize,
        /// Number of distinct points the facet resolves to.
        distinct: usize,
    },
}

impl ShellError {
    /// Create an index out of range error.
    #[must_use]
    pub const fn index_out_of_range(facet: usize, index: u32, point_count: usize) -> Self {
        Self::IndexOutOfRange {
            facet,
            index,
            point_count,
        }
    }

    /// Create a degenerate facet error.
    #[must_use]
    pub const fn degenerate_facet(facet: usize, distinct: usize) -> Self {
        Self::DegenerateFacet { facet, distinct }
    }
}
