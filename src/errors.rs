// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Error Types** - *Kernel Argument Error Handling*
//!
//! Errors raised by the array and distribution kernels when a caller hands in
//! unusable arguments.
//!
//! The scalar special functions never produce an error. Domain problems and
//! non-convergence surface there as `NaN`, and poles as `±∞`, which are kept
//! verbatim by every kernel in this crate.
//!
//! ## Error Categories
//! - **Length Errors**: operand, output buffer or mask lengths that disagree
//! - **Argument Errors**: distribution parameters outside their valid range

use core::fmt;
use std::error::Error;

/// Error type for all kernel operations.
///
/// Each variant carries a contextual message naming the kernel and the
/// offending value.
#[derive(Debug, Clone, PartialEq)]
pub enum KernelError {
    /// Array, output buffer or mask length mismatch between operands.
    LengthMismatch(String),

    /// Invalid arguments provided to a kernel function.
    InvalidArguments(String),
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelError::LengthMismatch(msg) => write!(f, "Length mismatch: {}", msg),
            KernelError::InvalidArguments(msg) => write!(f, "Invalid arguments: {}", msg),
        }
    }
}

impl Error for KernelError {}

/// Creates a formatted error message for length mismatches between left-hand side (LHS) and right-hand side (RHS) arrays.
///
/// # Arguments
/// * `fname` - Function name where the mismatch occurred
/// * `lhs` - Length of the left-hand side array
/// * `rhs` - Length of the right-hand side array
pub fn log_length_mismatch(fname: &str, lhs: usize, rhs: usize) -> String {
    format!("{} => Length mismatch: LHS {} RHS {}", fname, lhs, rhs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_category() {
        let e = KernelError::InvalidArguments("normal_cdf: invalid std".into());
        assert_eq!(e.to_string(), "Invalid arguments: normal_cdf: invalid std");
        let e = KernelError::LengthMismatch(log_length_mismatch("beta", 3, 4));
        assert_eq!(e.to_string(), "Length mismatch: beta => Length mismatch: LHS 3 RHS 4");
    }
}
