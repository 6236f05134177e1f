//! Contact track kinematics and cross-contact aggregation.
//!
//! Contact results hang off their contact as `<contact>.track_<n>` result
//! sets. This crate reads them, expresses them in the frame of a chosen
//! reference marker and flattens every track touching a geometry into one
//! [`ContactTable`].
//!
//! - [`Model`], [`ContactPair`], [`Part`], [`Marker`], [`Geometry`] - Entities
//! - [`PoseSource`] - Design pose queries answered by the host model
//! - [`part_frame`], [`marker_frame`] - Global frames over an analysis
//! - [`get_track_data`] - One track in a marker frame
//! - [`get_contact_data`] - Every track on a geometry, as a table
//! - [`ProgressBar`] - Deduplicating progress front end
//!
//! # Example
//!
//! ```
//! use nalgebra::Vector3;
//! use track_contact::{
//!     get_contact_data, ContactDataParams, ContactPair, Geometry, Marker, Model, NoProgress,
//!     Part, Pose, StaticPoses,
//! };
//! use track_results::ResultStore;
//!
//! let gear = Part::new("GEAR");
//! let tooth = Geometry::new(&gear, "TOOTH");
//! let origin = Marker::new(&gear, "CM", [0.0; 3]);
//! let model = Model::new().with_contact(ContactPair::new("MESH", vec![tooth.clone()], vec![]));
//! let poses = StaticPoses::new()
//!     .with_pose("GEAR", Pose::new(Vector3::zeros(), [0.0; 3]))
//!     .with_pose("GEAR.CM", Pose::new(Vector3::zeros(), [0.0; 3]));
//!
//! // The analysis produced nothing for this contact.
//! let results = ResultStore::with_time(vec![0.0, 0.1]);
//! let table = get_contact_data(
//!     &model, &results, &poses, &tooth, &origin,
//!     &ContactDataParams::default(), &mut NoProgress,
//! )
//! .unwrap();
//! assert!(table.is_empty());
//! assert!(table.column("normal_x").is_some());
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod aggregate;
mod error;
mod frames;
mod model;
mod params;
mod progress;
mod table;
mod track;

pub use aggregate::{get_contact_data, tracks_on_geometry};
pub use error::{TrackError, TrackResult};
pub use frames::{marker_frame, part_frame, XFORM_SUFFIX};
pub use model::{
    ContactPair, EntityRef, Geometry, Marker, Model, Part, Pose, PoseSource, Side, StaticPoses,
};
pub use params::ContactDataParams;
pub use progress::{ListenerGuard, NoProgress, ProgressBar, ProgressEvent, ProgressSink};
pub use table::ContactTable;
pub use track::{get_track_data, Track, TrackField, TrackSample, TRACK_PREFIX};
