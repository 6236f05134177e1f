//! Cartesian and cylindrical coordinate conversion.
//!
//! Cylindrical coordinates are `(r, phi, z)` with `phi` in radians measured
//! from +X toward +Y.

/// Convert Cartesian `(x, y, z)` to cylindrical `(r, phi, z)`.
///
/// `phi` lies in `[-pi, pi]`.
///
/// # Example
///
/// ```
/// use track_frame::cart_to_cyl;
///
/// let (r, phi, z) = cart_to_cyl(0.0, 2.0, 5.0);
/// assert!((r - 2.0).abs() < 1e-12);
/// assert!((phi - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
/// assert!((z - 5.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn cart_to_cyl(x: f64, y: f64, z: f64) -> (f64, f64, f64) {
    (x.hypot(y), y.atan2(x), z)
}

/// Convert cylindrical `(r, phi, z)` to Cartesian `(x, y, z)`.
#[must_use]
pub fn cyl_to_cart(r: f64, phi: f64, z: f64) -> (f64, f64, f64) {
    let (s, c) = phi.sin_cos();
    (r * c, r * s, z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn round_trip() {
        let (r, phi, z) = cart_to_cyl(-3.0, -4.0, 1.5);
        assert_relative_eq!(r, 5.0);
        assert!(phi < 0.0);

        let (x, y, z) = cyl_to_cart(r, phi, z);
        assert_relative_eq!(x, -3.0, epsilon = 1e-12);
        assert_relative_eq!(y, -4.0, epsilon = 1e-12);
        assert_relative_eq!(z, 1.5);
    }

    #[test]
    fn negative_x_axis_is_pi() {
        let (_, phi, _) = cart_to_cyl(-1.0, 0.0, 0.0);
        assert_relative_eq!(phi, PI);
    }

    #[test]
    fn origin() {
        assert_eq!(cart_to_cyl(0.0, 0.0, 0.0), (0.0, 0.0, 0.0));
    }
}
