// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

use minarrow::{Bitmask, FloatArray};

use crate::errors::KernelError;
use crate::kernels::scientific::distributions::shared::scalar::{
    lower_on_support, upper_on_support,
};
use crate::kernels::scientific::distributions::univariate::common::std::{
    univariate_kernel_f64_std, univariate_kernel_f64_std_to,
};
use crate::kernels::scientific::gamma::ln_gamma;

/// Returns `(k/2, ln Γ(k/2))` for a valid `df`.
#[inline(always)]
fn half_df(fname: &str, df: f64) -> Result<(f64, f64), KernelError> {
    if !(df > 0.0) || !df.is_finite() {
        return Err(KernelError::InvalidArguments(format!(
            "{}: invalid df {}",
            fname, df
        )));
    }
    let k2 = 0.5 * df;
    Ok((k2, ln_gamma(k2)))
}

/// Chi-square CDF (zero-allocation variant).
#[inline(always)]
pub fn chi_square_cdf_std_to(
    x: &[f64],
    df: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    let (k2, lg) = half_df("chi_square_cdf_to", df)?;
    univariate_kernel_f64_std_to("chi_square_cdf_to", x, output, null_mask, null_count, |xi| {
        lower_on_support(k2, 0.5 * xi, lg)
    })
}

/// Chi-square CDF.
#[inline(always)]
pub fn chi_square_cdf_std(
    x: &[f64],
    df: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    let (k2, lg) = half_df("chi_square_cdf", df)?;
    univariate_kernel_f64_std("chi_square_cdf", x, null_mask, null_count, |xi| {
        lower_on_support(k2, 0.5 * xi, lg)
    })
}

/// Chi-square survival function (zero-allocation variant).
#[inline(always)]
pub fn chi_square_cdf_upper_std_to(
    x: &[f64],
    df: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    let (k2, lg) = half_df("chi_square_cdf_upper_to", df)?;
    univariate_kernel_f64_std_to(
        "chi_square_cdf_upper_to",
        x,
        output,
        null_mask,
        null_count,
        |xi| upper_on_support(k2, 0.5 * xi, lg),
    )
}

/// Chi-square survival function.
#[inline(always)]
pub fn chi_square_cdf_upper_std(
    x: &[f64],
    df: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    let (k2, lg) = half_df("chi_square_cdf_upper", df)?;
    univariate_kernel_f64_std("chi_square_cdf_upper", x, null_mask, null_count, |xi| {
        upper_on_support(k2, 0.5 * xi, lg)
    })
}
