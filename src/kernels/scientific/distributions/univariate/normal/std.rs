// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Normal Distribution Scalar-Loop Implementations**
//!
//! Lower and upper CDFs of N(mean, std²), standardising each lane and handing
//! it to the scalar standard-normal CDFs.
use minarrow::{Bitmask, FloatArray};

use crate::errors::KernelError;
use crate::kernels::scientific::distributions::shared::scalar::{
    std_normal_cdf, std_normal_cdf_upper,
};
use crate::kernels::scientific::distributions::univariate::common::std::{
    univariate_kernel_f64_std, univariate_kernel_f64_std_to,
};

#[inline(always)]
fn validate(fname: &str, mean: f64, std: f64) -> Result<(), KernelError> {
    if std <= 0.0 || !std.is_finite() || !mean.is_finite() {
        return Err(KernelError::InvalidArguments(format!(
            "{}: invalid parameters (mean={}, std={})",
            fname, mean, std
        )));
    }
    Ok(())
}

/// Normal CDF, allocating.
#[inline(always)]
pub fn normal_cdf_std(
    x: &[f64],
    mean: f64,
    std: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    validate("normal_cdf", mean, std)?;
    univariate_kernel_f64_std("normal_cdf", x, null_mask, null_count, |xi| {
        std_normal_cdf((xi - mean) / std)
    })
}

/// Normal CDF into a caller-provided buffer.
#[inline(always)]
pub fn normal_cdf_std_to(
    x: &[f64],
    mean: f64,
    std: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    validate("normal_cdf_to", mean, std)?;
    univariate_kernel_f64_std_to("normal_cdf_to", x, output, null_mask, null_count, |xi| {
        std_normal_cdf((xi - mean) / std)
    })
}

/// Normal survival function, allocating.
#[inline(always)]
pub fn normal_cdf_upper_std(
    x: &[f64],
    mean: f64,
    std: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    validate("normal_cdf_upper", mean, std)?;
    univariate_kernel_f64_std("normal_cdf_upper", x, null_mask, null_count, |xi| {
        std_normal_cdf_upper((xi - mean) / std)
    })
}

/// Normal survival function into a caller-provided buffer.
#[inline(always)]
pub fn normal_cdf_upper_std_to(
    x: &[f64],
    mean: f64,
    std: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    validate("normal_cdf_upper_to", mean, std)?;
    univariate_kernel_f64_std_to("normal_cdf_upper_to", x, output, null_mask, null_count, |xi| {
        std_normal_cdf_upper((xi - mean) / std)
    })
}
