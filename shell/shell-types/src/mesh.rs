//! Indexed polygon shell.

use crate::{ShellError, ShellResult};
use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A polygon facet as an ordered list of point indices (0-based).
///
/// Triangles are the common case, but shell files may carry quads or
/// larger convex polygons.
pub type Facet = Vec<u32>;

/// A shell mesh: unique points plus polygon facets.
///
/// # Memory Layout
///
/// - `points`: `Vec<Point3<f64>>` - Point coordinates; the index is the point ID
/// - `facets`: `Vec<Facet>` - Polygons referencing `points` by index
///
/// # Example
///
/// ```
/// use shell_types::{ShellMesh, Point3};
///
/// let shell = ShellMesh::from_parts(
///     vec![
///         Point3::new(0.0, 0.0, 0.0),
///         Point3::new(1.0, 0.0, 0.0),
///         Point3::new(1.0, 1.0, 0.0),
///         Point3::new(0.0, 1.0, 0.0),
///     ],
///     vec![vec![0, 1, 2, 3]],
/// );
///
/// assert_eq!(shell.point_count(), 4);
/// // A quad fans into two triangles
/// assert_eq!(shell.triangles().count(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShellMesh {
    /// Point coordinates.
    pub points: Vec<Point3<f64>>,

    /// Polygon facets as indices into the point array.
    pub facets: Vec<Facet>,
}

/// A triangle with resolved corner positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// First corner.
    pub v0: Point3<f64>,
    /// Second corner.
    pub v1: Point3<f64>,
    /// Third corner.
    pub v2: Point3<f64>,
}

impl Triangle {
    /// Signed volume of the tetrahedron formed by this triangle and the origin.
    ///
    /// Equal to `v0 · (v1 × v2) / 6`.
    #[must_use]
    pub fn signed_volume(&self) -> f64 {
        let (v0, v1, v2) = (&self.v0, &self.v1, &self.v2);
        let cross = Vector3::new(
            v1.y.mul_add(v2.z, -(v1.z * v2.y)),
            v1.z.mul_add(v2.x, -(v1.x * v2.z)),
            v1.x.mul_add(v2.y, -(v1.y * v2.x)),
        );
        v0.z.mul_add(cross.z, v0.x.mul_add(cross.x, v0.y * cross.y)) / 6.0
    }

    /// Area of the triangle.
    #[must_use]
    pub fn area(&self) -> f64 {
        (self.v1 - self.v0).cross(&(self.v2 - self.v0)).norm() * 0.5
    }
}

impl ShellMesh {
    /// Create a new empty shell.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            points: Vec::new(),
            facets: Vec::new(),
        }
    }

    /// Create a shell from points and facets.
    #[inline]
    #[must_use]
    pub const fn from_parts(points: Vec<Point3<f64>>, facets: Vec<Facet>) -> Self {
        Self { points, facets }
    }

    /// Create a shell from coordinate triples and triangle index triples.
    ///
    /// # Example
    ///
    /// ```
    /// use shell_types::ShellMesh;
    ///
    /// let shell = ShellMesh::from_triangles(
    ///     &[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
    ///     &[[0, 1, 2]],
    /// );
    /// assert_eq!(shell.facet_count(), 1);
    /// ```
    #[must_use]
    pub fn from_triangles(points: &[[f64; 3]], triangles: &[[u32; 3]]) -> Self {
        Self {
            points: points
                .iter()
                .map(|&[x, y, z]| Point3::new(x, y, z))
                .collect(),
            facets: triangles.iter().map(|t| t.to_vec()).collect(),
        }
    }

    /// Number of points.
    #[inline]
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Number of facets.
    #[inline]
    #[must_use]
    pub fn facet_count(&self) -> usize {
        self.facets.len()
    }

    /// True when the shell has no points or no facets.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty() || self.facets.is_empty()
    }

    /// Iterate over all triangles, fan-triangulating polygon facets.
    ///
    /// Facets with fewer than three indices, or with an index outside the
    /// point list, are skipped. Use [`ShellMesh::validate`] to detect those.
    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        self.facets.iter().flat_map(move |facet| {
            let corners: Option<Vec<Point3<f64>>> = facet
                .iter()
                .map(|&i| self.points.get(i as usize).copied())
                .collect();
            let corners = corners.unwrap_or_default();
            (1..corners.len().saturating_sub(1)).map(move |i| Triangle {
                v0: corners[0],
                v1: corners[i],
                v2: corners[i + 1],
            })
        })
    }

    /// A copy of this shell with every polygon fanned into triangles.
    #[must_use]
    pub fn triangulated(&self) -> Self {
        let facets = self
            .facets
            .iter()
            .flat_map(|facet| {
                (1..facet.len().saturating_sub(1)).map(move |i| vec![facet[0], facet[i], facet[i + 1]])
            })
            .collect();
        Self {
            points: self.points.clone(),
            facets,
        }
    }

    /// Compute the signed volume enclosed by the shell.
    ///
    /// Sums signed tetrahedra formed by each (fanned) triangle and the origin
    /// (divergence theorem).
    ///
    /// # Note
    ///
    /// The shell must be closed and consistently wound. Neither condition
    /// is checked; an open shell or mixed winding gives a meaningless value.
    #[must_use]
    pub fn signed_volume(&self) -> f64 {
        self.triangles().map(|tri| tri.signed_volume()).sum()
    }

    /// Absolute value of [`ShellMesh::signed_volume`].
    #[inline]
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.signed_volume().abs()
    }

    /// Total surface area.
    #[must_use]
    pub fn surface_area(&self) -> f64 {
        self.triangles().map(|tri| tri.area()).sum()
    }

    /// Check that every facet has at least three distinct, valid point indices.
    ///
    /// # Errors
    ///
    /// Returns [`ShellError::IndexOutOfRange`] for a bad index and
    /// [`ShellError::DegenerateFacet`] for a facet that collapses below
    /// three distinct points.
    pub fn validate(&self) -> ShellResult<()> {
        let point_count = self.points.len();
        for (facet_idx, facet) in self.facets.iter().enumerate() {
            if let Some(&bad) = facet.iter().find(|&&i| i as usize >= point_count) {
                return Err(ShellError::index_out_of_range(facet_idx, bad, point_count));
            }
            let mut distinct: Vec<u32> = facet.clone();
            distinct.sort_unstable();
            distinct.dedup();
            if distinct.len() < 3 {
                return Err(ShellError::degenerate_facet(facet_idx, distinct.len()));
            }
        }
        Ok(())
    }
}

/// Create an axis-aligned box shell from the origin to `(lx, ly, lz)`.
///
/// The six sides are quads with outward (CCW) winding.
///
/// # Example
///
/// ```
/// use shell_types::box_shell;
///
/// let cube = box_shell(2.0, 2.0, 2.0);
/// assert_eq!(cube.point_count(), 8);
/// assert!((cube.volume() - 8.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn box_shell(lx: f64, ly: f64, lz: f64) -> ShellMesh {
    let points = vec![
        Point3::new(0.0, 0.0, 0.0), // 0
        Point3::new(lx, 0.0, 0.0),  // 1
        Point3::new(lx, ly, 0.0),   // 2
        Point3::new(0.0, ly, 0.0),  // 3
        Point3::new(0.0, 0.0, lz),  // 4
        Point3::new(lx, 0.0, lz),   // 5
        Point3::new(lx, ly, lz),    // 6
        Point3::new(0.0, ly, lz),   // 7
    ];
    let facets = vec![
        vec![0, 3, 2, 1], // -Z
        vec![4, 5, 6, 7], // +Z
        vec![0, 1, 5, 4], // -Y
        vec![3, 7, 6, 2], // +Y
        vec![0, 4, 7, 3], // -X
        vec![1, 2, 6, 5], // +X
    ];
    ShellMesh { points, facets }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn shell_is_empty() {
        let shell = ShellMesh::new();
        assert!(shell.is_empty());

        let mut shell2 = ShellMesh::new();
        shell2.points.push(Point3::origin());
        assert!(shell2.is_empty()); // no facets

        shell2.facets.push(vec![0, 0, 0]);
        assert!(!shell2.is_empty());
    }

    #[test]
    fn box_volume_and_area() {
        let shell = box_shell(1.0, 2.0, 3.0);
        assert_relative_eq!(shell.signed_volume(), 6.0, epsilon = 1e-12);
        assert_relative_eq!(shell.surface_area(), 22.0, epsilon = 1e-12);
    }

    #[test]
    fn volume_is_translation_invariant() {
        let mut shell = box_shell(2.0, 2.0, 2.0);
        for p in &mut shell.points {
            *p += Vector3::new(10.0, -4.0, 7.5);
        }
        assert_relative_eq!(shell.volume(), 8.0, epsilon = 1e-9);
    }

    #[test]
    fn flipped_winding_gives_negative_signed_volume() {
        let mut shell = box_shell(1.0, 1.0, 1.0);
        for facet in &mut shell.facets {
            facet.reverse();
        }
        assert!(shell.signed_volume() < 0.0);
        assert_relative_eq!(shell.volume(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn triangulated_matches_polygon_volume() {
        let shell = box_shell(1.5, 1.0, 0.5);
        let tris = shell.triangulated();
        assert_eq!(tris.facet_count(), 12);
        assert!(tris.facets.iter().all(|f| f.len() == 3));
        assert_relative_eq!(tris.volume(), shell.volume(), epsilon = 1e-12);
    }

    #[test]
    fn triangles_skip_invalid_facets() {
        let shell = ShellMesh::from_triangles(
            &[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            &[[0, 1, 2], [0, 1, 7]],
        );
        assert_eq!(shell.triangles().count(), 1);
    }

    #[test]
    fn validate_reports_bad_index() {
        let shell = ShellMesh::from_triangles(
            &[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            &[[0, 1, 3]],
        );
        assert!(matches!(
            shell.validate(),
            Err(ShellError::IndexOutOfRange { index: 3, .. })
        ));
    }

    #[test]
    fn validate_reports_degenerate_facet() {
        let shell = ShellMesh::from_triangles(
            &[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            &[[0, 1, 1]],
        );
        assert!(matches!(
            shell.validate(),
            Err(ShellError::DegenerateFacet { distinct: 2, .. })
        ));
        assert!(box_shell(1.0, 1.0, 1.0).validate().is_ok());
    }
}
