// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Common Kernel Utilities** - *Dense, Masked and Binary Helpers*
//!
//! Shared drivers that turn a scalar `f64 -> f64` body into an Arrow-style
//! kernel over `&[f64]` with an optional validity mask.
//!
//! ## Dispatch
//! - **Dense path**: taken when the input carries no nulls. With the `parallel`
//!   feature, large inputs are split across rayon workers.
//! - **Masked path**: null lanes are written as `NaN` and the input mask is
//!   carried onto the output.
//!
//! ## Test Macros
//! `common_tests!` generates the standard suite (empty input, mask propagation,
//! bulk-vs-scalar, short mask) for any kernel with the
//! `(&[f64], Option<&Bitmask>, Option<usize>)` shape.

/// Scalar-loop implementations of the kernel drivers.
pub mod std;

pub use self::std::{
    binary_kernel_f64_std, dense_univariate_kernel_f64_std_to,
    masked_univariate_kernel_f64_std_to, univariate_kernel_f64_std, univariate_kernel_f64_std_to,
};

#[cfg(test)]
use minarrow::{Bitmask, Buffer, FloatArray};

/// Test Helper: unwrap `FloatArray`, assert *no* null mask, return data.
#[cfg(test)]
pub fn dense_data(arr: FloatArray<f64>) -> Buffer<f64> {
    assert!(arr.null_mask.is_none(), "unexpected mask on dense path");
    arr.data
}

/// Create a mask of given length with exactly the lane `idx` null.
#[cfg(test)]
pub fn single_null_mask(len: usize, idx: usize) -> Bitmask {
    let mut m = Bitmask::new_set_all(len, true);
    m.set(idx, false);
    m
}

/// Bitwise equality that treats two NaNs as equal.
#[cfg(test)]
pub fn same_value(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

/// Generate the common tests for a kernel.
///
/// `$call` takes `(&[f64], Option<&Bitmask>, Option<usize>)` and returns
/// `Result<FloatArray<f64>, KernelError>`; `$scalar` is the matching `f64 -> f64`.
///
/// ```ignore
/// common_tests!(normal_cdf_std, |x, m, c| normal_cdf(x, 0.0, 1.0, m, c), std_normal_cdf);
/// ```
#[cfg(test)]
macro_rules! common_tests {
    ($name:ident, $call:expr, $scalar:expr) => {
        mod $name {
            #[allow(unused_imports)]
            use super::*;
            use minarrow::{vec64, Bitmask, FloatArray};
            use $crate::errors::KernelError;
            use $crate::kernels::scientific::distributions::univariate::common::{
                dense_data, same_value, single_null_mask,
            };

            fn call(
                x: &[f64],
                m: Option<&Bitmask>,
                c: Option<usize>,
            ) -> Result<FloatArray<f64>, KernelError> {
                ($call)(x, m, c)
            }

            fn scalar(x: f64) -> f64 {
                ($scalar)(x)
            }

            #[test]
            fn empty_input() {
                let arr = call(&[], None, None).unwrap();
                assert!(arr.data.is_empty());
                assert!(arr.null_mask.is_none());
            }

            #[test]
            fn bulk_vs_scalar_consistency() {
                let xs = vec64![-3.0, -1.0, 0.0, 0.5, 1.0, 2.0, 7.5, 40.0];
                let bulk = dense_data(call(&xs, None, None).unwrap());
                for (i, &x) in xs.iter().enumerate() {
                    let s = scalar(x);
                    assert!(same_value(bulk[i], s), "lane {i}: {} vs {}", bulk[i], s);
                }
            }

            #[test]
            fn mask_propagation() {
                let xs = vec64![1.0, 2.0, 3.0];
                let mask = single_null_mask(3, 1);
                let arr = call(&xs, Some(&mask), Some(1)).unwrap();
                let out_mask = arr.null_mask.as_ref().unwrap();
                assert!(out_mask.get(0));
                assert!(!out_mask.get(1));
                assert!(out_mask.get(2));
                assert!(arr.data[1].is_nan());
                assert!(same_value(arr.data[0], scalar(1.0)));
                assert!(same_value(arr.data[2], scalar(3.0)));
            }

            #[test]
            fn short_mask_rejected() {
                let xs = vec64![1.0, 2.0, 3.0];
                let mask = Bitmask::new_set_all(2, true);
                let err = call(&xs, Some(&mask), None).unwrap_err();
                assert!(matches!(err, KernelError::InvalidArguments(_)));
            }
        }
    };
}

#[cfg(test)]
pub(crate) use common_tests;
