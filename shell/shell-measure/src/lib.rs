//! Shell measurement for wearkit.
//!
//! - [`shell_volume`] - Enclosed volume of a closed shell
//! - [`diff_shells`] - Per-point nearest-neighbour displacement between shells
//! - [`diff_shell_files`] - The same, reading both shells from `.shl` files
//!
//! Nearest-point queries use a KD-tree built once over the reference shell.
//!
//! # Example
//!
//! ```
//! use shell_measure::{diff_shells, shell_volume};
//! use shell_types::box_shell;
//!
//! let small = box_shell(1.0, 1.0, 1.0);
//! let large = box_shell(1.0, 1.0, 2.0);
//!
//! assert!((shell_volume(&large) - 2.0).abs() < 1e-12);
//!
//! let diffs = diff_shells(&large, &small).unwrap();
//! let worst = diffs.iter().map(|d| d.distance()).fold(0.0, f64::max);
//! assert!((worst - 1.0).abs() < 1e-12);
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod diff;
mod error;
mod volume;

pub use diff::{diff_shell_files, diff_shells, PointDiff};
pub use error::{MeasureError, MeasureResult};
pub use volume::shell_volume;
