#![allow(unused)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Relative tolerance used by the identity checks.
pub const IDENTITY_TOL: f64 = 1e-7;

pub fn assert_close(a: f64, e: f64, tol: f64) {
    if e.is_nan() {
        assert!(a.is_nan(), "expected NaN, got {a}");
        return;
    }
    if e.is_infinite() {
        assert!(
            a.is_infinite() && a.is_sign_positive() == e.is_sign_positive(),
            "expected {e}, got {a}"
        );
        return;
    }
    let scale = 1.0_f64.max(e.abs());
    let ok = (a - e).abs() <= tol * scale;
    assert!(ok, "mismatch: got {a}, expect {e} (tol={tol})");
}

pub fn assert_slice_close(a: &[f64], e: &[f64], tol: f64) {
    assert_eq!(a.len(), e.len(), "len mismatch");
    for (i, (&ai, &ei)) in a.iter().zip(e.iter()).enumerate() {
        if ei.is_nan() {
            assert!(ai.is_nan(), "idx {i}: expected NaN, got {ai}");
            continue;
        }
        if ei.is_infinite() {
            assert!(
                ai.is_infinite() && ai.is_sign_positive() == ei.is_sign_positive(),
                "idx {i}: expected {ei}, got {ai}"
            );
            continue;
        }
        let scale = 1.0_f64.max(ei.abs());
        let ok = (ai - ei).abs() <= tol * scale;
        assert!(ok, "idx {i}: got {ai}, expect {ei} (tol={tol})");
    }
}

/// Relative comparison for values that may be far below one.
pub fn assert_rel_close(a: f64, e: f64, tol: f64) {
    assert!(
        ((a - e) / e).abs() <= tol,
        "relative mismatch: got {a}, expect {e} (tol={tol})"
    );
}

/// The grid [-5, 5) in steps of 0.01 followed by 1000 seeded uniform
/// draws from the same interval.
pub fn sample_points(seed: u64) -> Vec<f64> {
    let mut pts: Vec<f64> = (0..1000).map(|i| -5.0 + i as f64 * 0.01).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    pts.extend((0..1000).map(|_| rng.random_range(-5.0..5.0)));
    pts
}

pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Checks `lhs(x) == rhs(x)` within [`IDENTITY_TOL`] for every point.
///
/// Points where both sides are NaN, or both infinite, carry no information
/// and are skipped. At least one point must be compared.
pub fn check_identity<L, R>(name: &str, points: &[f64], lhs: L, rhs: R)
where
    L: Fn(f64) -> f64,
    R: Fn(f64) -> f64,
{
    let mut compared = 0usize;
    for &x in points {
        let (a, e) = (lhs(x), rhs(x));
        if (a.is_nan() && e.is_nan()) || (a.is_infinite() && e.is_infinite()) {
            continue;
        }
        compared += 1;
        let scale = 1.0_f64.max(e.abs());
        assert!(
            (a - e).abs() <= IDENTITY_TOL * scale,
            "{name}: at x={x} got {a}, expect {e}"
        );
    }
    assert!(compared > 0, "{name}: no point was compared");
}
