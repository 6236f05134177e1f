//! Contact track data in a reference marker frame.
//!
//! A track is a result set under its contact, `<contact>.track_<n>`, with
//! side-specific vector sets (`I_Point`, `J_Normal_Force`, ...) holding
//! `X`, `Y`, `Z` components, a shared `Slip_Velocity` set and a
//! `Penetration` set with a `Depth` component.

use nalgebra::Vector3;
use track_frame::{CoordinateFrame, FrameError};
use track_results::{ResultSource, TIME};
use tracing::{debug, warn};

use crate::error::{TrackError, TrackResult};
use crate::frames::marker_frame;
use crate::model::{Marker, PoseSource, Side};

/// Prefix of track result sets under a contact.
pub const TRACK_PREFIX: &str = "track_";

/// A per-sample quantity of a track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackField {
    /// Normal force vector.
    Normal,
    /// Unit contact normal.
    NormalUnit,
    /// Friction force vector.
    Friction,
    /// Slip velocity vector.
    Slip,
    /// Contact point location.
    Loc,
    /// Penetration depth.
    Penetration,
}

impl TrackField {
    /// Every field, in table order.
    pub const ALL: [Self; 6] = [
        Self::Normal,
        Self::NormalUnit,
        Self::Friction,
        Self::Slip,
        Self::Loc,
        Self::Penetration,
    ];

    /// Column name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::NormalUnit => "normal_unit",
            Self::Friction => "friction",
            Self::Slip => "slip",
            Self::Loc => "loc",
            Self::Penetration => "penetration",
        }
    }

    /// True for three-component fields.
    #[must_use]
    pub const fn is_vector(self) -> bool {
        !matches!(self, Self::Penetration)
    }
}

/// Time-aligned track series, all in the reference marker's frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackSample {
    /// Sample times.
    pub time: Vec<f64>,
    /// Normal force.
    pub normal: Vec<Vector3<f64>>,
    /// Unit normal.
    pub normal_unit: Vec<Vector3<f64>>,
    /// Friction force.
    pub friction: Vec<Vector3<f64>>,
    /// Slip velocity.
    pub slip: Vec<Vector3<f64>>,
    /// Contact point position.
    pub loc: Vec<Vector3<f64>>,
    /// Penetration depth.
    pub penetration: Vec<f64>,
}

impl TrackSample {
    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// True if there are no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// A vector field's series, `None` for scalar fields.
    #[must_use]
    pub fn vectors(&self, field: TrackField) -> Option<&[Vector3<f64>]> {
        match field {
            TrackField::Normal => Some(&self.normal),
            TrackField::NormalUnit => Some(&self.normal_unit),
            TrackField::Friction => Some(&self.friction),
            TrackField::Slip => Some(&self.slip),
            TrackField::Loc => Some(&self.loc),
            TrackField::Penetration => None,
        }
    }
}

/// One contact track, seen from one side of its contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    /// Full result set name, `<contact>.track_<n>`.
    pub name: String,
    /// Name of the owning contact.
    pub contact: String,
    /// Side the track is sampled on.
    pub side: Side,
}

impl Track {
    /// Track data expressed in `marker`'s frame.
    ///
    /// # Errors
    ///
    /// See [`get_track_data`].
    pub fn data(
        &self,
        results: &dyn ResultSource,
        poses: &dyn PoseSource,
        marker: &Marker,
    ) -> TrackResult<TrackSample> {
        get_track_data(results, poses, &self.name, marker, self.side)
    }
}

fn read_vectors(results: &dyn ResultSource, set: &str) -> TrackResult<Vec<Vector3<f64>>> {
    let x = results.require(set, "X")?;
    let y = results.require(set, "Y")?;
    let z = results.require(set, "Z")?;
    if let Some(found) = [y.len(), z.len()].into_iter().find(|&l| l != x.len()) {
        return Err(TrackError::ragged_series(set, x.len(), found));
    }
    Ok(x.iter()
        .zip(y)
        .zip(z)
        .map(|((&x, &y), &z)| Vector3::new(x, y, z))
        .collect())
}

/// Index of the sample in sorted `times` closest to `t`.
fn nearest_index(times: &[f64], t: f64) -> usize {
    let i = times.partition_point(|&s| s < t);
    if i == 0 {
        0
    } else if i == times.len() || (t - times[i - 1]) <= (times[i] - t) {
        i - 1
    } else {
        i
    }
}

/// Bring the marker frame onto the track's time base.
///
/// A frame that already matches (or is a single sample) is used as is. A
/// frame on the analysis time base is sampled at the nearest analysis time
/// of each track sample.
fn align(
    frame: CoordinateFrame,
    analysis_time: &[f64],
    track_time: &[f64],
) -> TrackResult<CoordinateFrame> {
    if frame.len() == 1 || frame.len() == track_time.len() {
        return Ok(frame);
    }
    if !analysis_time.is_empty() && frame.len() == analysis_time.len() {
        let indices: Vec<usize> = track_time
            .iter()
            .map(|&t| nearest_index(analysis_time, t))
            .collect();
        return Ok(frame.select(&indices)?);
    }
    Err(FrameError::length_mismatch(frame.len(), track_time.len()).into())
}

/// Track data for `track` expressed in `marker`'s frame.
///
/// Force, normal and slip vectors are rotated into marker axes at each
/// sample. The contact point is offset by the marker origin and then
/// rotated. Times and penetration depth are returned unchanged. The track
/// keeps its own time base: its `TIME` component when it has one, else the
/// analysis time.
///
/// Empty series give an empty sample.
///
/// # Errors
///
/// Returns an error if a track component is missing, the track's series
/// differ in length, the marker's frame cannot be built, or the marker
/// frame cannot be matched to the track's time base.
pub fn get_track_data(
    results: &dyn ResultSource,
    poses: &dyn PoseSource,
    track: &str,
    marker: &Marker,
    side: Side,
) -> TrackResult<TrackSample> {
    let s = side.prefix();
    let time = results
        .component(track, TIME)
        .unwrap_or_else(|| results.time())
        .to_vec();
    let loc = read_vectors(results, &format!("{track}.{s}_Point"))?;
    let normal = read_vectors(results, &format!("{track}.{s}_Normal_Force"))?;
    let normal_unit = read_vectors(results, &format!("{track}.{s}_Normal_Unit_Vector"))?;
    let friction = read_vectors(results, &format!("{track}.{s}_Friction_Force"))?;
    let slip = read_vectors(results, &format!("{track}.Slip_Velocity"))?;
    let penetration = results
        .require(&format!("{track}.Penetration"), "Depth")?
        .to_vec();

    let n = time.len();
    let lengths = [
        loc.len(),
        normal.len(),
        normal_unit.len(),
        friction.len(),
        slip.len(),
        penetration.len(),
    ];
    if let Some(found) = lengths.into_iter().find(|&l| l != n) {
        warn!(track, time = n, ?lengths, "Track series lengths disagree");
        return Err(TrackError::ragged_series(track, n, found));
    }

    let frame = align(marker_frame(marker, poses, Some(results))?, results.time(), &time)?;
    debug!(track, samples = n, marker = %marker.full_name(), "Transforming track");

    Ok(TrackSample {
        normal: frame.rotate_into_local(&normal)?,
        normal_unit: frame.rotate_into_local(&normal_unit)?,
        friction: frame.rotate_into_local(&friction)?,
        slip: frame.rotate_into_local(&slip)?,
        loc: frame.point_into_local(&loc)?,
        time,
        penetration,
    })
}
