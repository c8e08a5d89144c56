// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

// These parameters should rarely need adjustment.

//! # **Configuration Constants** - *Convergence and Dispatch Parameters*
//!
//! Compile-time constants controlling the accuracy/cost trade-offs of the gamma
//! engines and the batch dispatch of the array kernels. The defaults give roughly
//! 1e-8 relative accuracy across the supported range.

/// Lower bound the log-gamma recurrence pulls its argument up to before the
/// asymptotic series is applied.
///
/// `ln Γ(x) = ln Γ(x + 1) − ln x` is applied multiplicatively while `x` is
/// below this value. Together with the 8-term Bernoulli truncation this fixes
/// the accuracy of `ln_gamma`; changing one without the other degrades it.
pub const GAMMA_RECURRENCE_THRESHOLD: f64 = 8.0;

/// Iteration cap for the incomplete-gamma series and continued fraction.
///
/// A loop that has not reached a floating-point fixed point by then returns
/// `NaN`. This also bounds the work done by any single call.
pub const MAX_CONVERGENCE_ITERATIONS: usize = 1000;

/// Minimum input length before the dense kernel paths fan out over rayon.
///
/// Only consulted with the `parallel` feature. Below this the thread hand-off
/// costs more than the series evaluations it would spread.
pub const PARALLEL_THRESHOLD: usize = 4096;
