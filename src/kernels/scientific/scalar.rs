// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Universal Scalar Function Module** - *Element-Wise Special Functions*
//!
//! Vectorised special functions that operate element-wise on arrays of
//! floating-point values, with opt-in Arrow-compatible null masking.
//!
//! These are the semantic equivalent of *numpy ufuncs* in Python, here for
//! the gamma family: `ln Γ`, `Γ`, `B`, the incomplete gamma functions, the
//! error functions and the standard normal CDF.
//!
//! ## Null handling
//! - Null lanes are written as `NaN` and stay null in the output mask.
//! - `NaN` and `±∞` produced by valid lanes are values, and are never nulled.
//!
//! ## Shape-parameterised kernels
//! The incomplete gamma kernels take one shape `s` for the whole array.
//! `ln Γ(s)` is computed once per call and shared by every lane.

use minarrow::{Bitmask, FloatArray};

use crate::errors::KernelError;
use crate::kernels::scientific::distributions::shared::scalar::{
    std_normal_cdf as std_normal_cdf_fn, std_normal_cdf_upper as std_normal_cdf_upper_fn,
};
use crate::kernels::scientific::distributions::univariate::common::std::{
    binary_kernel_f64_std, univariate_kernel_f64_std,
};
use crate::kernels::scientific::erf::{erf as erf_fn, erfc as erfc_fn};
use crate::kernels::scientific::gamma::{beta_func, gamma_func, ln_gamma as ln_gamma_fn};
use crate::kernels::scientific::incomplete_gamma::{
    normalised_lower_gamma, normalised_upper_gamma,
};

/// Generates a mapping kernel that returns a `FloatArray<f64>`,
/// propagating any input nulls (and never touching lanes that were null).
///
/// `$name`  – function name to create
/// `$expr`  – expression mapping a scalar `f64 -> f64`
macro_rules! impl_vecmap {
    ($(#[$doc:meta])* $name:ident, $expr:expr) => {
        $(#[$doc])*
        #[inline(always)]
        pub fn $name(
            input: &[f64],
            null_mask: Option<&Bitmask>,
            null_count: Option<usize>,
        ) -> Result<FloatArray<f64>, KernelError> {
            univariate_kernel_f64_std(stringify!($name), input, null_mask, null_count, $expr)
        }
    };
}

impl_vecmap!(
    /// Element-wise `ln Γ(x)`. Negative lanes give `NaN`.
    ln_gamma,
    ln_gamma_fn
);
impl_vecmap!(
    /// Element-wise `Γ(x)`, reflected for negative lanes. Poles give a huge magnitude or `NaN`.
    gamma,
    gamma_func
);
impl_vecmap!(erf, erf_fn);
impl_vecmap!(erfc, erfc_fn);
impl_vecmap!(
    /// Element-wise standard normal CDF Φ(x).
    std_normal_cdf,
    std_normal_cdf_fn
);
impl_vecmap!(std_normal_cdf_upper, std_normal_cdf_upper_fn);

/// Rejects shapes for which `ln Γ(s)` is undefined, returning it otherwise.
#[inline(always)]
fn shape_ln_gamma(fname: &str, s: f64) -> Result<f64, KernelError> {
    if !(s > 0.0) || !s.is_finite() {
        return Err(KernelError::InvalidArguments(format!(
            "{}: shape must be finite and > 0, got {}",
            fname, s
        )));
    }
    Ok(ln_gamma_fn(s))
}

/// Element-wise regularised lower incomplete gamma P(s, x).
///
/// # Errors
/// `InvalidArguments` when `s` is not finite and positive, or the mask is too short.
#[inline(always)]
pub fn reg_lower_gamma(
    input: &[f64],
    s: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    let lg = shape_ln_gamma("reg_lower_gamma", s)?;
    univariate_kernel_f64_std("reg_lower_gamma", input, null_mask, null_count, |x| {
        normalised_lower_gamma(s, x, lg)
    })
}

/// Element-wise regularised upper incomplete gamma Q(s, x).
#[inline(always)]
pub fn reg_upper_gamma(
    input: &[f64],
    s: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    let lg = shape_ln_gamma("reg_upper_gamma", s)?;
    univariate_kernel_f64_std("reg_upper_gamma", input, null_mask, null_count, |x| {
        normalised_upper_gamma(s, x, lg)
    })
}

/// Element-wise lower incomplete gamma γ(s, x) = Γ(s)·P(s, x).
#[inline(always)]
pub fn lower_incomplete_gamma(
    input: &[f64],
    s: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    let lg = shape_ln_gamma("lower_incomplete_gamma", s)?;
    let gamma_s = lg.exp();
    univariate_kernel_f64_std("lower_incomplete_gamma", input, null_mask, null_count, |x| {
        gamma_s * normalised_lower_gamma(s, x, lg)
    })
}

/// Element-wise upper incomplete gamma Γ(s, x) = Γ(s)·Q(s, x).
#[inline(always)]
pub fn upper_incomplete_gamma(
    input: &[f64],
    s: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    let lg = shape_ln_gamma("upper_incomplete_gamma", s)?;
    let gamma_s = lg.exp();
    univariate_kernel_f64_std("upper_incomplete_gamma", input, null_mask, null_count, |x| {
        gamma_s * normalised_upper_gamma(s, x, lg)
    })
}

/// Element-wise beta function B(x, y) over two equal-length inputs.
///
/// A lane null in either input is null in the output.
#[inline(always)]
pub fn beta(
    x: &[f64],
    y: &[f64],
    x_mask: Option<&Bitmask>,
    y_mask: Option<&Bitmask>,
) -> Result<FloatArray<f64>, KernelError> {
    binary_kernel_f64_std("beta", x, y, x_mask, y_mask, beta_func)
}
