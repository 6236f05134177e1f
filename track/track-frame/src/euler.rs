//! Intrinsic ZXZ Euler angles in degrees.
//!
//! An angle triple `[psi, theta, phi]` is the rotation
//! `Rz(psi) * Rx(theta) * Rz(phi)`: rotate about Z, then about the new X,
//! then about the new Z.
//!
//! Extraction returns `psi` and `phi` in `(-180, 180]` and `theta` in
//! `[0, 180]`. When `theta` is 0 or 180 the first and third axes coincide
//! and only their sum (or difference) is defined; `phi` is then reported as
//! 0 and the whole rotation about Z is folded into `psi`.

use nalgebra::{Rotation3, Vector3};

/// Below this `sin(theta)` the decomposition is treated as gimbal locked.
const GIMBAL_EPS: f64 = 1e-9;

/// Build a rotation from ZXZ Euler angles in degrees.
///
/// # Example
///
/// ```
/// use track_frame::euler_zxz_to_rotation;
/// use nalgebra::Vector3;
///
/// let r = euler_zxz_to_rotation([90.0, 0.0, 0.0]);
/// let v = r * Vector3::x();
/// assert!((v - Vector3::y()).norm() < 1e-12);
/// ```
#[must_use]
pub fn euler_zxz_to_rotation(angles: [f64; 3]) -> Rotation3<f64> {
    let [psi, theta, phi] = angles.map(f64::to_radians);
    Rotation3::from_axis_angle(&Vector3::z_axis(), psi)
        * Rotation3::from_axis_angle(&Vector3::x_axis(), theta)
        * Rotation3::from_axis_angle(&Vector3::z_axis(), phi)
}

/// Decompose a rotation into ZXZ Euler angles in degrees.
///
/// # Example
///
/// ```
/// use track_frame::{euler_zxz_to_rotation, rotation_to_euler_zxz};
///
/// let angles = rotation_to_euler_zxz(&euler_zxz_to_rotation([30.0, 45.0, -60.0]));
/// assert!((angles[0] - 30.0).abs() < 1e-9);
/// assert!((angles[1] - 45.0).abs() < 1e-9);
/// assert!((angles[2] + 60.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn rotation_to_euler_zxz(rotation: &Rotation3<f64>) -> [f64; 3] {
    let m = rotation.matrix();
    let theta = m[(2, 2)].clamp(-1.0, 1.0).acos();
    let sin_theta = m[(0, 2)].hypot(m[(1, 2)]);

    let (psi, phi) = if sin_theta > GIMBAL_EPS {
        (m[(0, 2)].atan2(-m[(1, 2)]), m[(2, 0)].atan2(m[(2, 1)]))
    } else {
        // theta = 0: m00 = cos(psi + phi), m10 = sin(psi + phi)
        // theta = pi: m00 = cos(psi - phi), m10 = sin(psi - phi)
        (m[(1, 0)].atan2(m[(0, 0)]), 0.0)
    };

    [psi.to_degrees(), theta.to_degrees(), phi.to_degrees()]
}
