// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under the Mozilla Public License (MPL) 2.0.
// See LICENSE for details.

//! # **gamma-kernels** - *Gamma-Family Special Functions*
//!
//! Log-gamma, gamma, beta, the lower/upper incomplete gamma functions (raw and
//! regularised), the Gauss error function and the normal and chi-square CDFs.
//!
//! Everything is built on two primitives:
//! - [`ln_gamma`](kernels::scientific::gamma::ln_gamma): recurrence pull-up plus
//!   a Bernoulli-number asymptotic series.
//! - [`normalised_lower_gamma`](kernels::scientific::incomplete_gamma::normalised_lower_gamma) /
//!   [`normalised_upper_gamma`](kernels::scientific::incomplete_gamma::normalised_upper_gamma):
//!   series or continued fraction, switched on `x ≥ 1 + s`.
//!
//! The scalar functions are total over `f64`: NaN and ±∞ are results, not errors.
//! The array kernels add Arrow-compatible null masks and return
//! [`KernelError`](errors::KernelError) only for caller mistakes.

pub mod kernels {
    pub mod scientific {
        pub mod distributions;
        pub mod erf;
        pub mod gamma;
        pub mod incomplete_gamma;
        #[cfg(feature = "universal_functions")]
        pub mod scalar;
    }
}

pub mod config;

pub mod errors;

pub mod utils;
