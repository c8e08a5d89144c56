// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

use minarrow::{Bitmask, FloatArray, Vec64};

#[cfg(feature = "parallel")]
use crate::config::PARALLEL_THRESHOLD;
use crate::errors::KernelError;
use crate::utils::{confirm_equal_len, confirm_mask_capacity, has_nulls, merge_bitmasks_to_new};

/// Dense kernel helper writing into a caller-provided buffer.
///
/// ### Null handling
/// - Any `NaN` or `inf` values generated in the kernel function
/// are kept verbatim, given that:
/// 1. These values can represent additional data signal.
/// 2. Handling them requires additional CPU cycles on the hot path.
///
/// With the `parallel` feature, inputs of at least `PARALLEL_THRESHOLD`
/// elements are split across the rayon pool. Each lane is still evaluated by
/// the same scalar body, so the output does not depend on the split.
#[inline(always)]
pub fn dense_univariate_kernel_f64_std_to<FScalar>(
    x: &[f64],
    output: &mut [f64],
    scalar_body: FScalar,
) where
    FScalar: Fn(f64) -> f64 + Send + Sync,
{
    debug_assert_eq!(x.len(), output.len());

    #[cfg(feature = "parallel")]
    {
        if x.len() >= PARALLEL_THRESHOLD {
            use rayon::prelude::*;
            output
                .par_iter_mut()
                .zip(x.par_iter())
                .for_each(|(o, &xi)| *o = scalar_body(xi));
            return;
        }
    }

    for (o, &xi) in output.iter_mut().zip(x) {
        *o = scalar_body(xi);
    }
}

/// Null-aware masked kernel helper writing into a caller-provided buffer.
///
/// ### Null handling
/// - Null lanes are written as `NaN` and never reach the scalar body.
/// - `NaN` / `inf` produced by valid lanes are kept verbatim.
#[inline(always)]
pub fn masked_univariate_kernel_f64_std_to<FScalar>(
    x: &[f64],
    mask: &Bitmask,
    output: &mut [f64],
    scalar_body: FScalar,
) where
    FScalar: Fn(f64) -> f64,
{
    debug_assert_eq!(x.len(), output.len());
    for (idx, (o, &xi)) in output.iter_mut().zip(x).enumerate() {
        *o = if mask.get(idx) { scalar_body(xi) } else { f64::NAN };
    }
}

/// Validates lengths and the mask, then runs the dense or masked helper.
///
/// `label` names the kernel in any returned error.
#[inline(always)]
pub fn univariate_kernel_f64_std_to<FScalar>(
    label: &str,
    x: &[f64],
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
    scalar_body: FScalar,
) -> Result<(), KernelError>
where
    FScalar: Fn(f64) -> f64 + Send + Sync,
{
    confirm_equal_len(label, x.len(), output.len())?;
    confirm_mask_capacity(x.len(), null_mask)?;
    if x.is_empty() {
        return Ok(());
    }

    if !has_nulls(null_count, null_mask) {
        dense_univariate_kernel_f64_std_to(x, output, scalar_body);
        return Ok(());
    }

    let mask = null_mask.ok_or_else(|| {
        KernelError::InvalidArguments(format!("{}: null_count > 0 requires null_mask", label))
    })?;
    masked_univariate_kernel_f64_std_to(x, mask, output, scalar_body);
    Ok(())
}

/// Allocating counterpart of [`univariate_kernel_f64_std_to`].
///
/// The output carries the input mask, cut to `x.len()`, so null lanes stay null.
#[inline(always)]
pub fn univariate_kernel_f64_std<FScalar>(
    label: &str,
    x: &[f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
    scalar_body: FScalar,
) -> Result<FloatArray<f64>, KernelError>
where
    FScalar: Fn(f64) -> f64 + Send + Sync,
{
    let len = x.len();
    if len == 0 {
        return Ok(FloatArray::from_slice(&[]));
    }

    let mut out = Vec64::with_capacity(len);
    out.resize(len, 0.0);

    univariate_kernel_f64_std_to(label, x, out.as_mut_slice(), null_mask, null_count, scalar_body)?;

    Ok(FloatArray::from_vec64(out, merge_bitmasks_to_new(null_mask, None, len)))
}

/// Element-wise binary kernel over two equal-length inputs.
///
/// The output mask is the AND of both input masks; a lane that is null on
/// either side is written as `NaN`.
#[inline(always)]
pub fn binary_kernel_f64_std<FScalar>(
    label: &str,
    x: &[f64],
    y: &[f64],
    x_mask: Option<&Bitmask>,
    y_mask: Option<&Bitmask>,
    scalar_body: FScalar,
) -> Result<FloatArray<f64>, KernelError>
where
    FScalar: Fn(f64, f64) -> f64 + Send + Sync,
{
    confirm_equal_len(label, x.len(), y.len())?;
    confirm_mask_capacity(x.len(), x_mask)?;
    confirm_mask_capacity(y.len(), y_mask)?;

    let len = x.len();
    if len == 0 {
        return Ok(FloatArray::from_slice(&[]));
    }

    let out_mask = merge_bitmasks_to_new(x_mask, y_mask, len);
    let mut out = Vec64::with_capacity(len);
    out.resize(len, 0.0);
    let output = out.as_mut_slice();

    match &out_mask {
        None => {
            #[cfg(feature = "parallel")]
            {
                if len >= PARALLEL_THRESHOLD {
                    use rayon::prelude::*;
                    output
                        .par_iter_mut()
                        .enumerate()
                        .for_each(|(i, o)| *o = scalar_body(x[i], y[i]));
                    return Ok(FloatArray::from_vec64(out, None));
                }
            }
            for i in 0..len {
                output[i] = scalar_body(x[i], y[i]);
            }
        }
        Some(mask) => {
            for i in 0..len {
                output[i] = if mask.get(i) {
                    scalar_body(x[i], y[i])
                } else {
                    f64::NAN
                };
            }
        }
    }

    Ok(FloatArray::from_vec64(out, out_mask))
}
