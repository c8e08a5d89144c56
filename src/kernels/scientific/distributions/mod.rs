// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Statistical Distributions Module** - *Normal, Chi-Square and Gamma CDFs*
//!
//! Cumulative distribution functions built on the incomplete gamma engine.
//!
//! ## Layout
//! - **`shared::scalar`**: scalar CDFs (standard normal, chi-square), always available.
//! - **`univariate`**: vectorised kernels over `&[f64]` with Arrow-compatible null
//!   handling, behind the `probability_distributions` feature.
//!
//! ### Null Value Philosophy
//! Rather than assume, we choose to recognise inf and NaN as valid float values
//! (consistent with Apache Arrow semantics), leaving it to the user to subsequently
//! treat them as nulls if they wish, given that there are numerical scenarios where
//! they represent information gain. This approach avoids computational overhead in
//! the hot path whilst preserving mathematical correctness for edge cases.
//!
//! ## Numerical Precision
//! Every CDF inherits the ~1e-8 relative accuracy of the incomplete gamma engine.
//! Deep tails are computed directly on the side they live on (upper CDFs use the
//! continued fraction), so they keep relative accuracy where `1 − CDF` would not.

/// # **Shared Distribution Utilities** - *Constants and Scalar CDFs*
///
/// - **`constants`**: mathematical constants and Stirling-series coefficients
/// - **`scalar`**: scalar normal and chi-square CDFs
pub mod shared {
    pub mod constants;
    pub mod scalar;
}

/// # **Univariate Distributions** - *Vectorised CDF Kernels*
///
/// Each distribution provides lower and upper CDF kernels, plus zero-allocation
/// `_to` variants writing into a caller-owned buffer.
pub mod univariate {
    // common kernel patterns
    pub mod common;

    #[cfg(feature = "probability_distributions")]
    pub mod chi_squared;
    #[cfg(feature = "probability_distributions")]
    pub mod gamma;
    #[cfg(feature = "probability_distributions")]
    pub mod normal;
}
