//! Time-series coordinate frames.

use nalgebra::{Rotation3, Vector3};

use crate::error::{FrameError, FrameResult};
use crate::euler::{euler_zxz_to_rotation, rotation_to_euler_zxz};

/// A coordinate frame sampled over time, plus one nominal (design) pose.
///
/// `position[t]` is the frame origin at sample `t` and `orientation[t]` the
/// rotation taking frame axes to global axes. A frame may be position only,
/// in which case both the orientation series and the nominal orientation are
/// absent.
///
/// A frame with a single sample broadcasts against a frame of any length.
///
/// # Example
///
/// ```
/// use track_frame::CoordinateFrame;
/// use nalgebra::Vector3;
///
/// let a = CoordinateFrame::from_euler(
///     vec![Vector3::new(1.0, 0.0, 0.0), Vector3::new(2.0, 0.0, 0.0)],
///     Some(vec![[0.0, 0.0, 0.0], [90.0, 0.0, 0.0]]),
/// )
/// .unwrap();
/// let offset = CoordinateFrame::fixed(Vector3::new(0.0, 0.0, 1.0), None);
///
/// let moved = a.compose(&offset).unwrap();
/// assert_eq!(moved.len(), 2);
/// assert!(moved.orientation().is_none());
/// assert_eq!(moved.position()[1], Vector3::new(2.0, 0.0, 1.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateFrame {
    position: Vec<Vector3<f64>>,
    orientation: Option<Vec<Rotation3<f64>>>,
    nominal_position: Vector3<f64>,
    nominal_orientation: Option<Rotation3<f64>>,
}

/// Length of the result of combining series of lengths `left` and `right`.
fn broadcast_len(left: usize, right: usize) -> FrameResult<usize> {
    match (left, right) {
        (l, r) if l == r => Ok(l),
        (1, r) => Ok(r),
        (l, 1) => Ok(l),
        (l, r) => Err(FrameError::length_mismatch(l, r)),
    }
}

/// Sample `t` of a series that is either full length or broadcast.
fn at<T>(series: &[T], t: usize) -> &T {
    if series.len() == 1 {
        &series[0]
    } else {
        &series[t]
    }
}

fn zip_with<A, B, C>(
    left: &[A],
    right: &[B],
    mut f: impl FnMut(&A, &B) -> C,
) -> FrameResult<Vec<C>> {
    let n = broadcast_len(left.len(), right.len())?;
    Ok((0..n).map(|t| f(at(left, t), at(right, t))).collect())
}

impl CoordinateFrame {
    /// Create a frame whose nominal pose is its first sample.
    ///
    /// An empty series gets the origin and identity as its nominal pose.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::OrientationLength`] if the orientation series
    /// does not have one entry per position.
    pub fn new(
        position: Vec<Vector3<f64>>,
        orientation: Option<Vec<Rotation3<f64>>>,
    ) -> FrameResult<Self> {
        let nominal_position = position.first().copied().unwrap_or_else(Vector3::zeros);
        let nominal_orientation = orientation
            .as_ref()
            .map(|o| o.first().copied().unwrap_or_else(Rotation3::identity));
        Self::with_nominal(position, orientation, nominal_position, nominal_orientation)
    }

    /// Create a frame with an explicit nominal pose.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::OrientationLength`] if the orientation series
    /// does not have one entry per position, and
    /// [`FrameError::NominalOrientation`] if exactly one of the orientation
    /// series and the nominal orientation is given.
    pub fn with_nominal(
        position: Vec<Vector3<f64>>,
        orientation: Option<Vec<Rotation3<f64>>>,
        nominal_position: Vector3<f64>,
        nominal_orientation: Option<Rotation3<f64>>,
    ) -> FrameResult<Self> {
        if let Some(o) = &orientation {
            if o.len() != position.len() {
                return Err(FrameError::orientation_length(position.len(), o.len()));
            }
        }
        if orientation.is_some() != nominal_orientation.is_some() {
            return Err(FrameError::NominalOrientation);
        }
        Ok(Self {
            position,
            orientation,
            nominal_position,
            nominal_orientation,
        })
    }

    /// Create a frame from positions and ZXZ Euler angles in degrees.
    ///
    /// # Errors
    ///
    /// See [`CoordinateFrame::new`].
    pub fn from_euler(
        position: Vec<Vector3<f64>>,
        angles: Option<Vec<[f64; 3]>>,
    ) -> FrameResult<Self> {
        let orientation =
            angles.map(|a| a.into_iter().map(euler_zxz_to_rotation).collect::<Vec<_>>());
        Self::new(position, orientation)
    }

    /// A single-sample frame at a fixed pose.
    #[must_use]
    pub fn fixed(position: Vector3<f64>, orientation: Option<Rotation3<f64>>) -> Self {
        Self {
            position: vec![position],
            orientation: orientation.map(|r| vec![r]),
            nominal_position: position,
            nominal_orientation: orientation,
        }
    }

    /// A position-only frame following `position`.
    #[must_use]
    pub fn from_positions(position: Vec<Vector3<f64>>) -> Self {
        let nominal_position = position.first().copied().unwrap_or_else(Vector3::zeros);
        Self {
            position,
            orientation: None,
            nominal_position,
            nominal_orientation: None,
        }
    }

    /// Number of time samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.position.len()
    }

    /// True if the frame has no time samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.position.is_empty()
    }

    /// Origin position at each sample.
    #[must_use]
    pub fn position(&self) -> &[Vector3<f64>] {
        &self.position
    }

    /// Orientation at each sample, if the frame has one.
    #[must_use]
    pub fn orientation(&self) -> Option<&[Rotation3<f64>]> {
        self.orientation.as_deref()
    }

    /// Nominal (design) position.
    #[must_use]
    pub const fn nominal_position(&self) -> Vector3<f64> {
        self.nominal_position
    }

    /// Nominal (design) orientation, if the frame has one.
    #[must_use]
    pub const fn nominal_orientation(&self) -> Option<Rotation3<f64>> {
        self.nominal_orientation
    }

    /// Orientation at each sample as ZXZ Euler angles in degrees.
    #[must_use]
    pub fn euler_angles(&self) -> Option<Vec<[f64; 3]>> {
        self.orientation
            .as_ref()
            .map(|o| o.iter().map(rotation_to_euler_zxz).collect())
    }

    /// Nominal orientation as ZXZ Euler angles in degrees.
    #[must_use]
    pub fn nominal_euler(&self) -> Option<[f64; 3]> {
        self.nominal_orientation.as_ref().map(rotation_to_euler_zxz)
    }

    /// A frame made of the samples at `indices`, in that order.
    ///
    /// The nominal pose is kept. Indices may repeat.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::SampleOutOfRange`] for an index past the end.
    pub fn select(&self, indices: &[usize]) -> FrameResult<Self> {
        let len = self.len();
        if let Some(&index) = indices.iter().find(|&&i| i >= len) {
            return Err(FrameError::SampleOutOfRange { index, len });
        }
        Ok(Self {
            position: indices.iter().map(|&i| self.position[i]).collect(),
            orientation: self
                .orientation
                .as_ref()
                .map(|o| indices.iter().map(|&i| o[i]).collect()),
            nominal_position: self.nominal_position,
            nominal_orientation: self.nominal_orientation,
        })
    }

    /// Combine sample-wise and nominal parts with the given rules.
    ///
    /// `rot` applies per sample and `nominal_rot` to the nominal pose.
    fn combine(
        &self,
        other: &Self,
        pos: impl Fn(&Vector3<f64>, &Vector3<f64>) -> Vector3<f64>,
        rot: impl Fn(&Rotation3<f64>, &Rotation3<f64>) -> Rotation3<f64>,
        nominal_rot: impl Fn(&Rotation3<f64>, &Rotation3<f64>) -> Rotation3<f64>,
    ) -> FrameResult<Self> {
        let position = zip_with(&self.position, &other.position, &pos)?;
        let orientation = match (&self.orientation, &other.orientation) {
            (Some(a), Some(b)) => Some(zip_with(a, b, &rot)?),
            _ => None,
        };
        let nominal_orientation = match (&self.nominal_orientation, &other.nominal_orientation) {
            (Some(a), Some(b)) => Some(nominal_rot(a, b)),
            _ => None,
        };
        Ok(Self {
            position,
            orientation,
            nominal_position: pos(&self.nominal_position, &other.nominal_position),
            nominal_orientation,
        })
    }

    /// Frame composition: positions add, orientations multiply `self * other`.
    ///
    /// If either frame lacks orientation the result has none.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::LengthMismatch`] if the series lengths differ
    /// and neither is 1.
    pub fn compose(&self, other: &Self) -> FrameResult<Self> {
        self.combine(other, |a, b| a + b, |a, b| a * b, |a, b| a * b)
    }

    /// Frame difference.
    ///
    /// Positions subtract. Per sample, orientations become `other⁻¹ * self`;
    /// the nominal orientation becomes `self * other⁻¹`. If either frame
    /// lacks orientation the result has none.
    ///
    /// Orientations only come back through `a.compose(&b)?.subtract(&b)?`
    /// when the rotations commute; [`decompose`](Self::decompose) is the
    /// exact inverse of [`compose`](Self::compose).
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::LengthMismatch`] if the series lengths differ
    /// and neither is 1.
    pub fn subtract(&self, other: &Self) -> FrameResult<Self> {
        self.combine(
            other,
            |a, b| a - b,
            |a, b| b.inverse() * a,
            |a, b| a * b.inverse(),
        )
    }

    /// The inverse of [`compose`](Self::compose): positions subtract and
    /// orientations become `self * other⁻¹`, nominal pose included.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::LengthMismatch`] if the series lengths differ
    /// and neither is 1.
    pub fn decompose(&self, other: &Self) -> FrameResult<Self> {
        let rot = |a: &Rotation3<f64>, b: &Rotation3<f64>| a * b.inverse();
        self.combine(other, |a, b| a - b, rot, rot)
    }

    /// This frame's orientation expressed in `other`'s axes.
    ///
    /// Positions subtract as in [`subtract`](Self::subtract) and
    /// orientations become `other⁻¹ * self`, nominal pose included.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::LengthMismatch`] if the series lengths differ
    /// and neither is 1.
    pub fn relative_to(&self, other: &Self) -> FrameResult<Self> {
        let rot = |a: &Rotation3<f64>, b: &Rotation3<f64>| b.inverse() * a;
        self.combine(other, |a, b| a - b, rot, rot)
    }

    /// Express global vectors in this frame's axes: `R(t)⁻¹ * v(t)`.
    ///
    /// Vectors are rotated only. A frame without orientation is aligned
    /// with the global axes and returns the vectors unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::LengthMismatch`] if `vectors` and the frame
    /// differ in length and neither is 1.
    pub fn rotate_into_local(&self, vectors: &[Vector3<f64>]) -> FrameResult<Vec<Vector3<f64>>> {
        match &self.orientation {
            Some(o) => zip_with(o, vectors, |r, v| r.inverse_transform_vector(v)),
            None => {
                broadcast_len(self.len(), vectors.len())?;
                Ok(vectors.to_vec())
            }
        }
    }

    /// Express global positions in this frame: `R(t)⁻¹ * (p(t) - o(t))`.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::LengthMismatch`] if `points` and the frame
    /// differ in length and neither is 1.
    pub fn point_into_local(&self, points: &[Vector3<f64>]) -> FrameResult<Vec<Vector3<f64>>> {
        let offset = Self::from_positions(points.to_vec()).subtract(self)?;
        self.rotate_into_local(offset.position())
    }
}
