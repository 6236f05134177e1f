//! Global frames of parts and markers over an analysis.

use nalgebra::{Rotation3, Vector3};
use track_frame::{euler_zxz_to_rotation, CoordinateFrame, FrameError};
use track_results::ResultSource;

use crate::error::TrackResult;
use crate::model::{EntityRef, Marker, Part, PoseSource};

/// Suffix of the result set holding a part's rigid-body motion.
pub const XFORM_SUFFIX: &str = "_XFORM";

/// Components of the transform set: position then ZXZ angles in degrees.
const XFORM_POSITION: [&str; 3] = ["X", "Y", "Z"];
const XFORM_ANGLES: [&str; 3] = ["PSI", "THETA", "PHI"];

fn read_triplet<'r>(
    results: &'r dyn ResultSource,
    set: &str,
    names: [&str; 3],
) -> TrackResult<[&'r [f64]; 3]> {
    Ok([
        results.require(set, names[0])?,
        results.require(set, names[1])?,
        results.require(set, names[2])?,
    ])
}

/// Global frame of `part`.
///
/// With `results`, the frame follows the part's `<part>_XFORM` result set
/// (`X`, `Y`, `Z` and `PSI`, `THETA`, `PHI` in degrees) and its nominal pose
/// is the design pose. Without results it is the design pose as a single
/// sample.
///
/// # Errors
///
/// Returns an error if the part has no design pose, a transform component
/// is missing, or the components differ in length.
pub fn part_frame(
    part: &Part,
    poses: &dyn PoseSource,
    results: Option<&dyn ResultSource>,
) -> TrackResult<CoordinateFrame> {
    let design = poses.global_pose(&EntityRef::Part(part))?;
    let Some(results) = results else {
        return Ok(CoordinateFrame::fixed(design.position, Some(design.rotation())));
    };

    let set = format!("{}{XFORM_SUFFIX}", part.name);
    let [x, y, z] = read_triplet(results, &set, XFORM_POSITION)?;
    let [psi, theta, phi] = read_triplet(results, &set, XFORM_ANGLES)?;

    let n = x.len();
    if let Some(other) = [y, z, psi, theta, phi].iter().map(|s| s.len()).find(|&l| l != n) {
        return Err(FrameError::length_mismatch(n, other).into());
    }

    let position = (0..n).map(|t| Vector3::new(x[t], y[t], z[t])).collect();
    let orientation = (0..n)
        .map(|t| euler_zxz_to_rotation([psi[t], theta[t], phi[t]]))
        .collect();
    Ok(CoordinateFrame::with_nominal(
        position,
        Some(orientation),
        design.position,
        Some(design.rotation()),
    )?)
}

/// Global frame of `marker`, carried by its part.
///
/// The marker's offset from the part origin is fixed in part axes (taken
/// from the two design poses) and its orientation is the part orientation
/// times the marker's local orientation. The nominal pose is the marker's
/// design pose.
///
/// The offset turns with the part: a marker one unit along the part's X
/// axis stays one unit along that axis as the part rotates. It is never a
/// fixed offset in global axes.
///
/// # Errors
///
/// Returns an error if either design pose is unknown or the part frame
/// cannot be built.
pub fn marker_frame(
    marker: &Marker,
    poses: &dyn PoseSource,
    results: Option<&dyn ResultSource>,
) -> TrackResult<CoordinateFrame> {
    let part = part_frame(&marker.part, poses, results)?;
    let part_design = poses.global_pose(&EntityRef::Part(&marker.part))?;
    let marker_design = poses.global_pose(&EntityRef::Marker(marker))?;

    let offset = part_design
        .rotation()
        .inverse_transform_vector(&(marker_design.position - part_design.position));
    let local = euler_zxz_to_rotation(marker.orientation);

    let identity = vec![Rotation3::identity(); part.len()];
    let part_rotations = part.orientation().unwrap_or(&identity);

    let position = part
        .position()
        .iter()
        .zip(part_rotations)
        .map(|(p, r)| p + r * offset)
        .collect();
    let orientation = part_rotations.iter().map(|r| r * local).collect();

    Ok(CoordinateFrame::with_nominal(
        position,
        Some(orientation),
        marker_design.position,
        Some(marker_design.rotation()),
    )?)
}
