//! Core shell mesh types for wearkit.
//!
//! A shell is the simple faceted surface format used to describe contact
//! geometry: an ordered list of unique points and a list of polygon facets
//! that reference those points by index.
//!
//! - [`ShellMesh`] - Points plus polygon facets
//! - [`Facet`] - A polygon as an ordered list of point indices
//! - [`drop_duplicates`] - Collapse coincident points and re-index facets
//!
//! # Units
//!
//! This library is **unit-agnostic**. All coordinates are `f64`.
//!
//! # Winding
//!
//! Facets are expected to use **counter-clockwise (CCW) winding when viewed
//! from outside**, so that [`ShellMesh::signed_volume`] is positive for a
//! correctly oriented closed shell. Winding is not checked.
//!
//! # Example
//!
//! ```
//! use shell_types::{ShellMesh, Point3};
//!
//! let mut shell = ShellMesh::new();
//! shell.points.push(Point3::new(0.0, 0.0, 0.0));
//! shell.points.push(Point3::new(1.0, 0.0, 0.0));
//! shell.points.push(Point3::new(0.0, 1.0, 0.0));
//! shell.facets.push(vec![0, 1, 2]);
//!
//! assert_eq!(shell.facet_count(), 1);
//! assert!(!shell.is_empty());
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod dedup;
mod error;
mod mesh;

pub use dedup::{drop_duplicates, duplicate_count, has_duplicates};
pub use error::{ShellError, ShellResult};
pub use mesh::{box_shell, Facet, ShellMesh, Triangle};

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
