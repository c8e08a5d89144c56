// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # Gamma Distribution
//!
//! The gamma distribution is a two-parameter continuous probability distribution widely used in
//! statistical modelling, particularly for positive-valued random variables. It generalises the
//! exponential distribution (shape 1) and the chi-squared distribution (shape k/2, scale 2).
//!
//! ## Mathematical Definition
//!
//! The gamma distribution is parameterised by a shape parameter k and a scale parameter θ,
//! both strictly positive:
//!
//! - **CDF**: F(x; k, θ) = γ(k, x/θ) / Γ(k) = P(k, x/θ) for x ≥ 0
//! - **Survival**: 1 − F(x; k, θ) = Q(k, x/θ)
//!
//! Where γ(k, z) is the lower incomplete gamma function. Both sides are evaluated directly,
//! so the survival function keeps relative accuracy deep in the right tail.
//!
//! ## Common Applications
//!
//! - **Reliability engineering**: Time-to-failure analysis
//! - **Queuing theory**: Waiting time until the k-th Poisson arrival
//! - **Meteorology**: Rainfall and precipitation modelling

mod std;

use minarrow::{Bitmask, FloatArray};

use crate::errors::KernelError;

/// Computes the cumulative distribution function (CDF) of the gamma distribution.
///
/// Evaluates F(x; k, θ) = P(k, x/θ) for each element of the input array.
/// Negative inputs lie outside the support and give 0.
///
/// ## Parameters
/// - `x`: input values
/// - `shape`: shape parameter k, finite and > 0
/// - `scale`: scale parameter θ, finite and > 0
/// - `null_mask`: optional input null bitmap
/// - `null_count`: optional input null count
///
/// ## Errors
/// `KernelError::InvalidArguments` when `shape` or `scale` is invalid.
#[inline(always)]
pub fn gamma_cdf(
    x: &[f64],
    shape: f64,
    scale: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    std::gamma_cdf_std(x, shape, scale, null_mask, null_count)
}

/// Zero-allocation variant of [`gamma_cdf`].
#[inline(always)]
pub fn gamma_cdf_to(
    x: &[f64],
    shape: f64,
    scale: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    std::gamma_cdf_std_to(x, shape, scale, output, null_mask, null_count)
}

/// Gamma survival function Q(k, x/θ). Negative inputs give 1.
#[inline(always)]
pub fn gamma_cdf_upper(
    x: &[f64],
    shape: f64,
    scale: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    std::gamma_cdf_upper_std(x, shape, scale, null_mask, null_count)
}

/// Zero-allocation variant of [`gamma_cdf_upper`].
#[inline(always)]
pub fn gamma_cdf_upper_to(
    x: &[f64],
    shape: f64,
    scale: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    std::gamma_cdf_upper_std_to(x, shape, scale, output, null_mask, null_count)
}

#[cfg(test)]
mod tests {
    use minarrow::vec64;

    use super::*;
    use crate::kernels::scientific::distributions::shared::scalar::chi_square_cdf_scalar;
    use crate::kernels::scientific::distributions::univariate::common::{
        common_tests, dense_data, single_null_mask,
    };
    use crate::kernels::scientific::incomplete_gamma::{reg_lower_gamma, reg_upper_gamma};

    fn mask_vec(mask: &Bitmask) -> Vec<bool> {
        (0..mask.len()).map(|i| mask.get(i)).collect()
    }

    fn assert_close(a: f64, b: f64, tol: f64) {
        let scale = 1.0_f64.max(b.abs());
        assert!(
            (a - b).abs() <= tol * scale,
            "assert_close failed: {} vs {} (tol={})",
            a,
            b,
            tol
        );
    }

    common_tests!(
        gamma_cdf_common,
        |x: &[f64], m: Option<&Bitmask>, c: Option<usize>| gamma_cdf(x, 2.5, 2.0, m, c),
        |x: f64| if x < 0.0 { 0.0 } else { reg_lower_gamma(2.5, x / 2.0) }
    );

    common_tests!(
        gamma_cdf_upper_common,
        |x: &[f64], m: Option<&Bitmask>, c: Option<usize>| gamma_cdf_upper(x, 2.5, 2.0, m, c),
        |x: f64| if x < 0.0 { 1.0 } else { reg_upper_gamma(2.5, x / 2.0) }
    );

    #[test]
    fn gamma_cdf_shape2p5_scale2_values() {
        let x = vec64![0.5, 2.0, 5.0, 10.0];
        let lower = [
            0.007876706767370407,
            0.15085496391539036,
            0.5841198130044921,
            0.9247647538534878,
        ];
        let upper = [
            0.9921232932326296,
            0.8491450360846097,
            0.41588018699550794,
            0.07523524614651218,
        ];
        let lo = dense_data(gamma_cdf(&x, 2.5, 2.0, None, None).unwrap());
        let hi = dense_data(gamma_cdf_upper(&x, 2.5, 2.0, None, None).unwrap());
        for i in 0..x.len() {
            assert_close(lo[i], lower[i], 1e-12);
            assert_close(hi[i], upper[i], 1e-12);
        }
    }

    #[test]
    fn gamma_cdf_tail_behaviour() {
        let hi = dense_data(gamma_cdf_upper(&[60.0], 2.5, 2.0, None, None).unwrap());
        assert!(((hi[0] - 1.215456977718304e-11) / 1.215456977718304e-11).abs() < 1e-9);
        let lo = dense_data(gamma_cdf(&[f64::INFINITY], 2.5, 2.0, None, None).unwrap());
        assert_eq!(lo[0], 1.0);
    }

    #[test]
    fn gamma_shape_one_is_exponential() {
        let x = vec64![0.1, 1.0, 3.0, 9.0];
        let lo = dense_data(gamma_cdf(&x, 1.0, 3.0, None, None).unwrap());
        for (i, &xi) in x.iter().enumerate() {
            assert_close(lo[i], 1.0 - (-xi / 3.0).exp(), 1e-12);
        }
    }

    #[test]
    fn gamma_matches_chi_square() {
        // χ²(k) is Gamma(k/2, 2)
        let x = vec64![0.3, 2.0, 7.0, 15.0];
        let lo = dense_data(gamma_cdf(&x, 2.0, 2.0, None, None).unwrap());
        for (i, &xi) in x.iter().enumerate() {
            assert_close(lo[i], chi_square_cdf_scalar(4.0, xi), 1e-14);
        }
    }

    #[test]
    fn gamma_negative_x_outside_support() {
        let lo = dense_data(gamma_cdf(&[-1.0, -0.0], 2.0, 1.0, None, None).unwrap());
        assert_eq!(lo[0], 0.0);
        assert_eq!(lo[1], 0.0);
        let hi = dense_data(gamma_cdf_upper(&[-1.0], 2.0, 1.0, None, None).unwrap());
        assert_eq!(hi[0], 1.0);
    }

    #[test]
    fn gamma_cdf_null_mask() {
        let x = vec64![1.0, 2.0, 3.0, 4.0];
        let mask = single_null_mask(4, 0);
        let arr = gamma_cdf_upper(&x, 3.0, 1.0, Some(&mask), Some(1)).unwrap();
        assert_eq!(mask_vec(arr.null_mask.as_ref().unwrap()), vec![false, true, true, true]);
        assert!(arr.data[0].is_nan());
        assert_close(arr.data[1], 5.0 * (-2.0_f64).exp(), 1e-12);
    }

    #[test]
    fn gamma_invalid_parameters() {
        for &(shape, scale) in &[(0.0, 1.0), (-1.0, 1.0), (1.0, 0.0), (1.0, -2.0), (f64::NAN, 1.0), (1.0, f64::INFINITY)] {
            assert!(matches!(
                gamma_cdf(&[1.0], shape, scale, None, None),
                Err(KernelError::InvalidArguments(_))
            ));
            let mut out = [0.0];
            assert!(matches!(
                gamma_cdf_upper_to(&[1.0], shape, scale, &mut out, None, None),
                Err(KernelError::InvalidArguments(_))
            ));
        }
    }

    #[test]
    fn gamma_to_variants() {
        let x = vec64![0.5, 4.0, 12.0];
        let mut out = [0.0; 3];
        gamma_cdf_to(&x, 3.0, 1.5, &mut out, None, None).unwrap();
        let lo = dense_data(gamma_cdf(&x, 3.0, 1.5, None, None).unwrap());
        assert_eq!(&out[..], &lo[..]);
        gamma_cdf_upper_to(&x, 3.0, 1.5, &mut out, None, None).unwrap();
        let hi = dense_data(gamma_cdf_upper(&x, 3.0, 1.5, None, None).unwrap());
        assert_eq!(&out[..], &hi[..]);
    }
}
