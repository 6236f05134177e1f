//! Coordinate frame algebra for contact-track kinematics.
//!
//! A [`CoordinateFrame`] holds a time series of origin positions and
//! optional orientations plus a nominal (design) pose. Frames compose and
//! subtract sample by sample, and carry global vectors and points into
//! their local axes.
//!
//! Orientations are stored as rotation matrices. Angles in and out use an
//! intrinsic ZXZ convention in degrees (see [`euler_zxz_to_rotation`]).
//!
//! # Example
//!
//! ```
//! use track_frame::CoordinateFrame;
//! use nalgebra::Vector3;
//!
//! // A marker turned 90 degrees about Z, sitting at (1, 0, 0).
//! let marker = CoordinateFrame::from_euler(
//!     vec![Vector3::new(1.0, 0.0, 0.0)],
//!     Some(vec![[90.0, 0.0, 0.0]]),
//! )
//! .unwrap();
//!
//! let local = marker.point_into_local(&[Vector3::new(1.0, 2.0, 0.0)]).unwrap();
//! assert!((local[0] - Vector3::new(2.0, 0.0, 0.0)).norm() < 1e-12);
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod cyl;
mod error;
mod euler;
mod frame;

pub use cyl::{cart_to_cyl, cyl_to_cart};
pub use error::{FrameError, FrameResult};
pub use euler::{euler_zxz_to_rotation, rotation_to_euler_zxz};
pub use frame::CoordinateFrame;

pub use nalgebra::{Rotation3, Vector3};
