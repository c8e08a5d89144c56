// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Normal Distribution Module** - *Gaussian CDF and Survival Function*
//!
//! CDF kernels for N(μ, σ²). Each lane is standardised as `z = (x − μ) / σ`
//! and evaluated through the incomplete gamma engine at shape ½, so both tails
//! are computed directly rather than by subtraction from one.
//!
//! ## Usage Examples
//! ```rust,ignore
//! use minarrow::vec64;
//! use gamma_kernels::kernels::scientific::distributions::univariate::normal::*;
//!
//! // IQ scores, μ=100, σ=15
//! let scores = vec64![85.0, 100.0, 115.0, 130.0];
//! let below = normal_cdf(&scores, 100.0, 15.0, None, None).unwrap();
//! let above = normal_cdf_upper(&scores, 100.0, 15.0, None, None).unwrap();
//! ```

mod std;

use minarrow::{Bitmask, FloatArray};

use crate::errors::KernelError;

/// Normal CDF P(X ≤ x), with Arrow-compatible null handling.
///
/// # Parameters
/// - `x`: input data
/// - `mean`: normal mean, finite
/// - `std`: normal standard deviation, finite and > 0
/// - `null_mask`: optional input null bitmap
/// - `null_count`: optional input null count
///
/// # Errors
/// `InvalidArguments` for a non-finite mean or a non-positive or non-finite std.
#[inline(always)]
pub fn normal_cdf(
    x: &[f64],
    mean: f64,
    std: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    std::normal_cdf_std(x, mean, std, null_mask, null_count)
}

/// Zero-allocation variant of [`normal_cdf`]. `output.len()` must equal `x.len()`.
#[inline(always)]
pub fn normal_cdf_to(
    x: &[f64],
    mean: f64,
    std: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    std::normal_cdf_std_to(x, mean, std, output, null_mask, null_count)
}

/// Normal survival function P(X > x), with Arrow-compatible null handling.
///
/// Parameters and errors as for [`normal_cdf`].
#[inline(always)]
pub fn normal_cdf_upper(
    x: &[f64],
    mean: f64,
    std: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    std::normal_cdf_upper_std(x, mean, std, null_mask, null_count)
}

/// Zero-allocation variant of [`normal_cdf_upper`].
#[inline(always)]
pub fn normal_cdf_upper_to(
    x: &[f64],
    mean: f64,
    std: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    std::normal_cdf_upper_std_to(x, mean, std, output, null_mask, null_count)
}
