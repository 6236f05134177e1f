//! Exact-match point deduplication.
//!
//! Two points are duplicates only when all three coordinates compare equal
//! as `f64` (`0.0` and `-0.0` are treated as equal). There is no tolerance:
//! coordinates that differ in the last bit are kept as separate points.

use hashbrown::HashMap;
use nalgebra::Point3;

use crate::{ShellError, ShellMesh, ShellResult};

/// Hash key for a point under exact `f64` equality.
fn point_key(p: &Point3<f64>) -> [u64; 3] {
    // Adding 0.0 folds -0.0 onto +0.0.
    [
        (p.x + 0.0).to_bits(),
        (p.y + 0.0).to_bits(),
        (p.z + 0.0).to_bits(),
    ]
}

/// Number of points that duplicate an earlier point.
#[must_use]
pub fn duplicate_count(points: &[Point3<f64>]) -> usize {
    let mut seen: HashMap<[u64; 3], ()> = HashMap::with_capacity(points.len());
    points
        .iter()
        .filter(|p| seen.insert(point_key(p), ()).is_some())
        .count()
}

/// True if any point duplicates an earlier point.
#[must_use]
pub fn has_duplicates(points: &[Point3<f64>]) -> bool {
    duplicate_count(points) > 0
}

/// Collapse coincident points and re-index facets.
///
/// The first occurrence of each point is kept, and surviving points keep
/// their relative order. Facet vertex order and facet count are preserved;
/// only the indices change.
///
/// When the shell has no duplicate points it is returned as-is.
///
/// # Errors
///
/// Returns [`ShellError::IndexOutOfRange`] if re-indexing meets a facet
/// index outside the point list.
///
/// # Example
///
/// ```
/// use shell_types::{drop_duplicates, ShellMesh};
///
/// let shell = ShellMesh::from_triangles(
///     &[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0]],
///     &[[0, 1, 2], [0, 3, 2]],
/// );
/// let deduped = drop_duplicates(shell).unwrap();
/// assert_eq!(deduped.point_count(), 3);
/// assert_eq!(deduped.facets[1], vec![0, 1, 2]);
/// ```
#[allow(clippy::cast_possible_truncation)]
// Truncation: point indices are u32 on disk and in memory
pub fn drop_duplicates(shell: ShellMesh) -> ShellResult<ShellMesh> {
    if !has_duplicates(&shell.points) {
        return Ok(shell);
    }

    let ShellMesh { points, facets } = shell;
    let point_count = points.len();

    // old index -> new index
    let mut first_seen: HashMap<[u64; 3], u32> = HashMap::with_capacity(point_count);
    let mut remap: Vec<u32> = Vec::with_capacity(point_count);
    let mut unique: Vec<Point3<f64>> = Vec::with_capacity(point_count);

    for p in points {
        let next = unique.len() as u32;
        let idx = *first_seen.entry(point_key(&p)).or_insert_with(|| {
            unique.push(p);
            next
        });
        remap.push(idx);
    }

    let facets = facets
        .into_iter()
        .enumerate()
        .map(|(facet_idx, facet)| {
            facet
                .into_iter()
                .map(|i| {
                    remap
                        .get(i as usize)
                        .copied()
                        .ok_or_else(|| ShellError::index_out_of_range(facet_idx, i, point_count))
                })
                .collect::<ShellResult<Vec<u32>>>()
        })
        .collect::<ShellResult<Vec<_>>>()?;

    Ok(ShellMesh {
        points: unique,
        facets,
    })
}
