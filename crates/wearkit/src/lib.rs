//! Post-processing toolkit for multibody contact and wear analysis.
//!
//! This umbrella crate re-exports the shell-* and track-* crates behind one
//! dependency.
//!
//! # Quick Start
//!
//! ```no_run
//! use wearkit::prelude::*;
//!
//! // Worn surface against its design shape
//! let worn = load_shell("worn.shl").unwrap();
//! let design = load_shell("design.shl").unwrap();
//! println!("volume lost: {}", shell_volume(&design) - shell_volume(&worn));
//!
//! for d in diff_shells(&worn, &design).unwrap() {
//!     println!("{} {}", d.index, d.distance());
//! }
//! ```
//!
//! # Module Organization
//!
//! ## Shells
//! - [`shell`] - `ShellMesh`, exact-match point deduplication
//! - [`io`] - `.shl` text files and their binary cache
//! - [`measure`] - Enclosed volume and nearest-point diff
//!
//! ## Contact tracks
//! - [`frame`] - `CoordinateFrame` algebra and ZXZ Euler angles
//! - [`results`] - Result series access and CSV export
//! - [`contact`] - Track data in a marker frame, cross-contact tables

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

// =============================================================================
// Re-exports
// =============================================================================

/// Indexed polygon shells and deduplication.
pub use shell_types as shell;

/// `.shl` file I/O with binary caching.
pub use shell_io as io;

/// Shell volume and diff.
pub use shell_measure as measure;

/// Time-varying coordinate frames.
pub use track_frame as frame;

/// Simulation result series.
pub use track_results as results;

/// Contact tracks and aggregation.
pub use track_contact as contact;

// =============================================================================
// Prelude
// =============================================================================

/// Common imports for wear post-processing.
///
/// # Usage
///
/// ```
/// use wearkit::prelude::*;
/// ```
pub mod prelude {
    // Shells
    pub use shell_io::{load_shell, load_shell_with, save_shell, ShellIoParams};
    pub use shell_measure::{diff_shells, shell_volume, PointDiff};
    pub use shell_types::{drop_duplicates, ShellMesh};

    // Frames and results
    pub use track_frame::CoordinateFrame;
    pub use track_results::{ResultSource, ResultStore};

    // Contact tracks
    pub use track_contact::{
        get_contact_data, get_track_data, ContactDataParams, ContactPair, ContactTable, Geometry,
        Marker, Model, Part, PoseSource, ProgressSink, Side, TrackField,
    };
}
