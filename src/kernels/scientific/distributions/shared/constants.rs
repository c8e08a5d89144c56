// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Mathematical Constants Module** - *Fixed Constants for the Gamma Family*
//!
//! Hard-coded constants shared by the log-gamma engine, the incomplete gamma
//! routines and the derived error-function and normal-CDF kernels.

// ******** Constants ***********************************************/
/// ½·ln(2π) ≈ 0.918938533204673.
///
/// Constant term of Stirling's series for ln Γ(x).
pub(crate) const HALF_LOG_TWO_PI: f64 = 0.91893853320467274178_f64;

/// ½·ln(π) ≈ 0.572364942924700, i.e. ln Γ(½) since Γ(½) = √π.
///
/// Passed as the precomputed normalisation constant whenever the incomplete
/// gamma routines run at shape ½ (erf, erfc, the standard normal CDF), instead
/// of evaluating `ln_gamma(0.5)`.
pub const HALF_LOG_PI: f64 = 0.57236494292470008707_f64;

// Bernoulli numbers B₂ … B₁₆.
pub(crate) const B2: f64 = 1.0 / 6.0;
pub(crate) const B4: f64 = -1.0 / 30.0;
pub(crate) const B6: f64 = 1.0 / 42.0;
pub(crate) const B8: f64 = -1.0 / 30.0;
pub(crate) const B10: f64 = 5.0 / 66.0;
pub(crate) const B12: f64 = -691.0 / 2730.0;
pub(crate) const B14: f64 = 7.0 / 6.0;
pub(crate) const B16: f64 = -3617.0 / 510.0;

/// Stirling-series coefficients `B₂ₙ / (2n(2n−1))`, innermost (n = 8) first.
///
/// Consumed in this order by the Horner evaluation in `ln_gamma`; the order is
/// part of the numerical result and must not be changed.
pub(crate) const STIRLING_COEFFS: [f64; 8] = [
    B16 / (16.0 * 15.0),
    B14 / (14.0 * 13.0),
    B12 / (12.0 * 11.0),
    B10 / (10.0 * 9.0),
    B8 / (8.0 * 7.0),
    B6 / (6.0 * 5.0),
    B4 / (4.0 * 3.0),
    B2 / (2.0 * 1.0),
];
