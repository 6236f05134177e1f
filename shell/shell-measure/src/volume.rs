//! Enclosed volume of closed shells.

use shell_types::ShellMesh;
use tracing::debug;

/// Volume enclosed by a closed shell.
///
/// Sums signed tetrahedra against the origin over every facet (polygons are
/// fanned from their first vertex) and returns the absolute value. The
/// shell must be watertight with consistent winding; mixed winding gives a
/// result that is generally too small and is not detected.
///
/// # Example
///
/// ```
/// use shell_measure::shell_volume;
/// use shell_types::box_shell;
///
/// let cube = box_shell(2.0, 2.0, 2.0);
/// assert!((shell_volume(&cube) - 8.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn shell_volume(shell: &ShellMesh) -> f64 {
    let polygons = shell.facets.iter().filter(|f| f.len() > 3).count();
    if polygons > 0 {
        debug!(polygons, "Fanning polygon facets for volume");
    }
    shell.volume()
}
