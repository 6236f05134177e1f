//! Property-based tests for frame algebra.
//!
//! Run with: cargo test -p track-frame -- proptest

#![allow(clippy::unwrap_used)]

use approx::relative_eq;
use proptest::prelude::*;
use track_frame::{euler_zxz_to_rotation, rotation_to_euler_zxz, CoordinateFrame, Vector3};

fn arb_vector() -> impl Strategy<Value = Vector3<f64>> {
    prop::array::uniform3(-100.0..100.0f64).prop_map(Vector3::from)
}

/// Angles away from gimbal lock so they round-trip exactly.
fn arb_angles() -> impl Strategy<Value = [f64; 3]> {
    (-179.0..179.0f64, 1.0..179.0f64, -179.0..179.0f64).prop_map(|(a, b, c)| [a, b, c])
}

fn arb_frame(len: usize) -> impl Strategy<Value = CoordinateFrame> {
    (
        prop::collection::vec(arb_vector(), len),
        prop::collection::vec(arb_angles(), len),
    )
        .prop_map(|(p, a)| CoordinateFrame::from_euler(p, Some(a)).unwrap())
}

/// Frames turning about Z only, whose rotations commute.
fn arb_z_frame(len: usize) -> impl Strategy<Value = CoordinateFrame> {
    (
        prop::collection::vec(arb_vector(), len),
        prop::collection::vec(-179.0..179.0f64, len),
    )
        .prop_map(|(p, psi)| {
            let angles = psi.into_iter().map(|a| [a, 0.0, 0.0]).collect();
            CoordinateFrame::from_euler(p, Some(angles)).unwrap()
        })
}

fn arb_pair() -> impl Strategy<Value = (CoordinateFrame, CoordinateFrame)> {
    (1usize..8).prop_flat_map(|n| (arb_frame(n), arb_frame(n)))
}

proptest! {
    #[test]
    fn proptest_euler_round_trip(angles in arb_angles()) {
        let out = rotation_to_euler_zxz(&euler_zxz_to_rotation(angles));
        for (a, b) in angles.iter().zip(out) {
            prop_assert!(relative_eq!(*a, b, epsilon = 1e-6));
        }
    }

    #[test]
    fn proptest_any_angles_give_same_rotation(
        angles in prop::array::uniform3(-360.0..360.0f64)
    ) {
        let r = euler_zxz_to_rotation(angles);
        let back = euler_zxz_to_rotation(rotation_to_euler_zxz(&r));
        prop_assert!(relative_eq!(r, back, epsilon = 1e-6));
    }

    #[test]
    fn proptest_compose_then_decompose_recovers((a, b) in arb_pair()) {
        let back = a.compose(&b).unwrap().decompose(&b).unwrap();
        prop_assert_eq!(back.len(), a.len());
        for (p, q) in back.position().iter().zip(a.position()) {
            prop_assert!(relative_eq!(*p, *q, epsilon = 1e-9));
        }
        let got = back.orientation().unwrap();
        let want = a.orientation().unwrap();
        for (r, s) in got.iter().zip(want) {
            prop_assert!(relative_eq!(*r, *s, epsilon = 1e-9));
        }
    }

    #[test]
    fn proptest_subtract_recovers_rotations_about_one_axis(
        (a, b) in (1usize..8).prop_flat_map(|n| (arb_z_frame(n), arb_z_frame(n)))
    ) {
        let back = a.compose(&b).unwrap().subtract(&b).unwrap();
        for (p, q) in back.position().iter().zip(a.position()) {
            prop_assert!(relative_eq!(*p, *q, epsilon = 1e-9));
        }
        let got = back.orientation().unwrap();
        let want = a.orientation().unwrap();
        for (r, s) in got.iter().zip(want) {
            prop_assert!(relative_eq!(*r, *s, epsilon = 1e-9));
        }
    }

    #[test]
    fn proptest_subtract_is_other_inverse_times_self((a, b) in arb_pair()) {
        let d = a.subtract(&b).unwrap();
        let ra = a.orientation().unwrap();
        let rb = b.orientation().unwrap();
        for ((r, x), y) in d.orientation().unwrap().iter().zip(ra).zip(rb) {
            prop_assert!(relative_eq!(*r, y.inverse() * x, epsilon = 1e-9));
        }
    }

    #[test]
    fn proptest_point_into_local_preserves_distance(
        (frame, _) in arb_pair(),
        p in arb_vector(),
    ) {
        let points = vec![p; frame.len()];
        let local = frame.point_into_local(&points).unwrap();
        for (l, o) in local.iter().zip(frame.position()) {
            prop_assert!(relative_eq!(l.norm(), (p - o).norm(), epsilon = 1e-9, max_relative = 1e-9));
        }
    }
}
