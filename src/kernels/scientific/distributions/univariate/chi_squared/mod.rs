// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Chi-Squared Distribution** - *Critical Values and Goodness-of-Fit Testing*
//!
//! CDF kernels for the chi-squared distribution, written as the regularised
//! incomplete gamma function:
//!
//! ```text
//! F(x; k) = P(k/2, x/2)        1 − F(x; k) = Q(k/2, x/2)
//! ```
//!
//! `ln Γ(k/2)` is evaluated once per call, not once per lane.
//!
//! ### Parameters
//! - **`df` (degrees of freedom)**: Shape parameter `k > 0`
//!
//! ### Moment Properties
//! - **Mean**: `k`
//! - **Variance**: `2k`
//! - **Support**: `[0, ∞)`
//!
//! ## Applications
//! The upper CDF is the p-value of a chi-squared statistic, and stays accurate
//! far into the tail where `1 − F` underflows to zero.
mod std;

use minarrow::{Bitmask, FloatArray};

use crate::errors::KernelError;

/// Chi-square CDF (zero-allocation variant).
///
/// Writes directly to caller-provided output buffer.
#[inline(always)]
pub fn chi_square_cdf_to(
    x: &[f64],
    df: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    std::chi_square_cdf_std_to(x, df, output, null_mask, null_count)
}

/// Chi-square CDF: F(x; k) = P(k/2, x/2).
///
/// # Errors
/// `InvalidArguments` when `df` is not finite and positive.
#[inline(always)]
pub fn chi_square_cdf(
    x: &[f64],
    df: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    std::chi_square_cdf_std(x, df, null_mask, null_count)
}

/// Chi-square survival function (zero-allocation variant).
#[inline(always)]
pub fn chi_square_cdf_upper_to(
    x: &[f64],
    df: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    std::chi_square_cdf_upper_std_to(x, df, output, null_mask, null_count)
}

/// Chi-square survival function: 1 − F(x; k) = Q(k/2, x/2).
#[inline(always)]
pub fn chi_square_cdf_upper(
    x: &[f64],
    df: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    std::chi_square_cdf_upper_std(x, df, null_mask, null_count)
}
