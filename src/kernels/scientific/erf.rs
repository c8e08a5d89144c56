// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Error Function Module** - *erf and erfc via the Incomplete Gamma Engine*
//!
//! The error function and its complement, expressed as the regularised
//! incomplete gamma function at shape ½.
//!
//! ## Mathematical Definitions
//!
//! ### Error Function
//! ```text
//! erf(x) = (2/√π) ∫₀ˣ e^(-t²) dt = sign(x) · P(½, x²)
//! ```
//!
//! ### Complementary Error Function
//! ```text
//! erfc(x) = 1 - erf(x) = Q(½, x²)            for x ≥ 0
//!                      = 1 + P(½, x²)        for x < 0
//! ```
//!
//! Evaluating `Q` directly for positive `x` keeps the small upper tail accurate
//! instead of subtracting two numbers close to one.
//!
//! Both functions pass the constant ln Γ(½) = ½·ln π to the engine rather than
//! recomputing it.
//!
//! ## Usage Examples
//!
//! ```rust
//! use gamma_kernels::kernels::scientific::erf::{erf, erfc};
//!
//! let x = 1.5;
//! assert!((erf(x) - 0.9661051464753108).abs() < 1e-8);
//! assert!((erfc(x) - 0.033894853524689274).abs() < 1e-8);
//! ```

use crate::kernels::scientific::distributions::shared::constants::HALF_LOG_PI;
use crate::kernels::scientific::incomplete_gamma::{
    normalised_lower_gamma, normalised_upper_gamma,
};

/// Gauss error function.
///
/// * `erf(0) = 0`, `erf(±∞) = ±1`
/// * odd: `erf(-x) = -erf(x)`
/// * Propagates NaN.
#[inline]
pub fn erf(x: f64) -> f64 {
    let p = normalised_lower_gamma(0.5, x * x, HALF_LOG_PI);
    if x >= 0.0 { p } else { -p }
}

/// Complementary error function `1 - erf(x)`.
///
/// * `erfc(+∞) = 0`, `erfc(-∞) = 2`
/// * Propagates NaN.
#[inline]
pub fn erfc(x: f64) -> f64 {
    if x >= 0.0 {
        normalised_upper_gamma(0.5, x * x, HALF_LOG_PI)
    } else {
        1.0 + normalised_lower_gamma(0.5, x * x, HALF_LOG_PI)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Reference values from scipy.special.erf / erfc

    #[test]
    fn erf_reference() {
        let cases = [
            (0.1, 0.1124629160182849),
            (0.5, 0.5204998778130465),
            (1.0, 0.8427007929497149),
            (2.0, 0.9953222650189527),
            (-0.3, -0.3286267594591274),
        ];
        for &(x, e) in &cases {
            assert!((erf(x) - e).abs() < 1e-10, "erf({x}) = {} vs {e}", erf(x));
        }
    }

    #[test]
    fn erfc_reference() {
        let cases = [
            (0.5, 0.4795001221869535),
            (2.0, 0.004677734981047266),
            (4.0, 1.541725790028002e-08),
            (-1.0, 1.8427007929497148),
        ];
        for &(x, e) in &cases {
            let got = erfc(x);
            assert!(((got - e) / e).abs() < 1e-8, "erfc({x}) = {got} vs {e}");
        }
    }

    #[test]
    fn erf_is_odd() {
        for &x in &[0.05, 0.7, 1.3, 2.9, 4.5] {
            assert_eq!(erf(-x), -erf(x));
        }
    }

    #[test]
    fn erf_erfc_special_values() {
        assert_eq!(erf(0.0), 0.0);
        assert_eq!(erfc(0.0), 1.0);
        assert_eq!(erf(f64::INFINITY), 1.0);
        assert_eq!(erf(f64::NEG_INFINITY), -1.0);
        assert_eq!(erfc(f64::INFINITY), 0.0);
        assert_eq!(erfc(f64::NEG_INFINITY), 2.0);
        assert!(erf(f64::NAN).is_nan());
        assert!(erfc(f64::NAN).is_nan());
    }
}
