//! Model entities and their design poses.
//!
//! Entities are plain named values. Where an entity sits is answered by a
//! [`PoseSource`], which a host application implements over its own object
//! model; [`StaticPoses`] is a table-backed implementation.

use hashbrown::HashMap;
use nalgebra::{Rotation3, Vector3};
use track_frame::euler_zxz_to_rotation;

use crate::error::{TrackError, TrackResult};

/// A rigid part.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Part {
    /// Part name, also the prefix of its `<name>_XFORM` result set.
    pub name: String,
}

impl Part {
    /// Create a part.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A coordinate marker fixed to a part.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    /// Marker name, unique within its part.
    pub name: String,
    /// Owning part.
    pub part: Part,
    /// Orientation relative to the part, ZXZ Euler degrees.
    pub orientation: [f64; 3],
}

impl Marker {
    /// Create a marker on `part` with a local ZXZ orientation in degrees.
    #[must_use]
    pub fn new(part: &Part, name: impl Into<String>, orientation: [f64; 3]) -> Self {
        Self {
            name: name.into(),
            part: part.clone(),
            orientation,
        }
    }

    /// `<part>.<marker>`.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}.{}", self.part.name, self.name)
    }
}

/// A contact surface attached to a part.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Geometry {
    /// Geometry name, unique within its part.
    pub name: String,
    /// Owning part.
    pub part: Part,
}

impl Geometry {
    /// Create a geometry on `part`.
    #[must_use]
    pub fn new(part: &Part, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            part: part.clone(),
        }
    }

    /// `<part>.<geometry>`.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}.{}", self.part.name, self.name)
    }
}

/// Side of a contact pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The `i_geometry` side.
    I,
    /// The `j_geometry` side.
    J,
}

impl Side {
    /// Prefix of side-specific result sets (`I_Point`, `J_Normal_Force`, ...).
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::I => "I",
            Self::J => "J",
        }
    }
}

/// A contact between two groups of geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactPair {
    /// Contact name, also the name of its result set.
    pub name: String,
    /// Geometry on the I side.
    pub i_geometry: Vec<Geometry>,
    /// Geometry on the J side.
    pub j_geometry: Vec<Geometry>,
}

impl ContactPair {
    /// Create a contact.
    #[must_use]
    pub fn new(name: impl Into<String>, i_geometry: Vec<Geometry>, j_geometry: Vec<Geometry>) -> Self {
        Self {
            name: name.into(),
            i_geometry,
            j_geometry,
        }
    }

    /// Which side `geometry` is on, checking I first.
    #[must_use]
    pub fn side_of(&self, geometry: &Geometry) -> Option<Side> {
        if self.i_geometry.contains(geometry) {
            Some(Side::I)
        } else if self.j_geometry.contains(geometry) {
            Some(Side::J)
        } else {
            None
        }
    }
}

/// The contacts of a model.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Model {
    /// Contacts in definition order.
    pub contacts: Vec<ContactPair>,
}

impl Model {
    /// Create an empty model.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a contact.
    #[must_use]
    pub fn with_contact(mut self, contact: ContactPair) -> Self {
        self.contacts.push(contact);
        self
    }
}

/// Reference to any entity that has a global pose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntityRef<'a> {
    /// A part.
    Part(&'a Part),
    /// A marker.
    Marker(&'a Marker),
    /// A geometry.
    Geometry(&'a Geometry),
}

impl EntityRef<'_> {
    /// Full dotted name of the entity.
    #[must_use]
    pub fn full_name(&self) -> String {
        match self {
            Self::Part(p) => p.name.clone(),
            Self::Marker(m) => m.full_name(),
            Self::Geometry(g) => g.full_name(),
        }
    }
}

/// Global design position and ZXZ orientation (degrees).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Global position.
    pub position: Vector3<f64>,
    /// Global orientation, ZXZ Euler degrees.
    pub orientation: [f64; 3],
}

impl Pose {
    /// Create a pose.
    #[must_use]
    pub const fn new(position: Vector3<f64>, orientation: [f64; 3]) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// The orientation as a rotation.
    #[must_use]
    pub fn rotation(&self) -> Rotation3<f64> {
        euler_zxz_to_rotation(self.orientation)
    }
}

/// Answers static (design) pose queries for entities.
pub trait PoseSource {
    /// Global design pose of `entity`.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::UnknownEntity`] if the entity has no pose.
    fn global_pose(&self, entity: &EntityRef<'_>) -> TrackResult<Pose>;
}

/// [`PoseSource`] backed by a table keyed on full entity names.
///
/// # Example
///
/// ```
/// use nalgebra::Vector3;
/// use track_contact::{EntityRef, Part, Pose, PoseSource, StaticPoses};
///
/// let gear = Part::new("GEAR");
/// let poses = StaticPoses::new().with_pose("GEAR", Pose::new(Vector3::x(), [0.0; 3]));
/// assert_eq!(poses.global_pose(&EntityRef::Part(&gear)).unwrap().position, Vector3::x());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticPoses {
    poses: HashMap<String, Pose>,
}

impl StaticPoses {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pose of the entity named `name`.
    pub fn insert(&mut self, name: impl Into<String>, pose: Pose) {
        self.poses.insert(name.into(), pose);
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with_pose(mut self, name: impl Into<String>, pose: Pose) -> Self {
        self.insert(name, pose);
        self
    }
}

impl PoseSource for StaticPoses {
    fn global_pose(&self, entity: &EntityRef<'_>) -> TrackResult<Pose> {
        let name = entity.full_name();
        self.poses
            .get(&name)
            .copied()
            .ok_or_else(|| TrackError::unknown_entity(name))
    }
}
