//! Nearest-point differences between two shells.

use std::path::Path;

use kiddo::{ImmutableKdTree, SquaredEuclidean};
use nalgebra::{Point3, Vector3};
use shell_types::ShellMesh;
use tracing::{debug, info};

use crate::error::{MeasureError, MeasureResult};

/// One point of the compared shell and its nearest reference point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointDiff {
    /// Point from the compared shell.
    pub point: Point3<f64>,
    /// Nearest point in the reference shell.
    pub matched: Point3<f64>,
    /// Index of `matched` in the reference shell's points.
    pub index: usize,
    /// Signed displacement `point - matched`.
    pub d: Vector3<f64>,
}

impl PointDiff {
    /// Euclidean distance between the point and its match.
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.d.norm()
    }
}

/// Index over `points`; item `i` is `points[i]`.
///
/// Built in one pass, so points sharing a coordinate along a split axis
/// (flat caps, extrusions) cannot overflow a bucket.
fn build_kdtree(points: &[Point3<f64>]) -> ImmutableKdTree<f64, 3> {
    let coords: Vec<[f64; 3]> = points.iter().map(|p| [p.x, p.y, p.z]).collect();
    ImmutableKdTree::new_from_slice(&coords)
}

/// Match every point of `shell` to its nearest point of `reference`.
///
/// The assignment is one-directional: several points may map to the same
/// reference point. Output order follows `shell.points`.
///
/// # Errors
///
/// Returns [`MeasureError::EmptyShell`] if `reference` has no points.
///
/// # Example
///
/// ```
/// use shell_measure::diff_shells;
/// use shell_types::{box_shell, Vector3};
///
/// let cube = box_shell(1.0, 1.0, 1.0);
/// let diffs = diff_shells(&cube, &cube).unwrap();
/// assert_eq!(diffs.len(), 8);
/// assert!(diffs.iter().all(|d| d.d == Vector3::zeros()));
/// ```
pub fn diff_shells(shell: &ShellMesh, reference: &ShellMesh) -> MeasureResult<Vec<PointDiff>> {
    if reference.points.is_empty() {
        return Err(MeasureError::EmptyShell);
    }

    debug!(
        points = shell.point_count(),
        reference_points = reference.point_count(),
        "Building reference tree for shell diff"
    );
    let tree = build_kdtree(&reference.points);

    let diffs: Vec<PointDiff> = shell
        .points
        .iter()
        .map(|p| {
            let nearest = tree.nearest_one::<SquaredEuclidean>(&[p.x, p.y, p.z]);
            #[allow(clippy::cast_possible_truncation)]
            let index = nearest.item as usize;
            let matched = reference.points[index];
            PointDiff {
                point: *p,
                matched,
                index,
                d: p - matched,
            }
        })
        .collect();

    let max = diffs.iter().map(PointDiff::distance).fold(0.0, f64::max);
    info!(points = diffs.len(), max_distance = max, "Shell diff complete");
    Ok(diffs)
}

/// Load two shell files and diff them with [`diff_shells`].
///
/// # Errors
///
/// Returns an error if either file fails to load or the reference is empty.
pub fn diff_shell_files<P: AsRef<Path>, Q: AsRef<Path>>(
    shell: P,
    reference: Q,
) -> MeasureResult<Vec<PointDiff>> {
    let shell = shell_io::load_shell(shell)?;
    let reference = shell_io::load_shell(reference)?;
    diff_shells(&shell, &reference)
}
