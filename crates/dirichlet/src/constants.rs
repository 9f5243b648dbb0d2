//! The standard arithmetic functions.
//!
//! Each constant is assembled from the algebra the first time it is asked
//! for and the same instance is handed out afterwards, so the memo table
//! inside [`mobius`] (and inside everything built from it) is shared by all
//! callers.
//!
//! | Function | Construction | Value at 12 |
//! |----------|--------------|-------------|
//! | [`one`] | `n ↦ 1` | 1 |
//! | [`mobius`] | `one⁻¹` | 0 |
//! | [`totient`] | `phi_k((0))` | 4 |
//! | [`id`] | `n ↦ n` | 12 |
//! | [`sigma`] | `sigma_k(1)` | 28 |
//! | [`divisor_count`] | `one * one` | 6 |
//! | [`mangoldt`] | `ln * mobius` | 0 |

use std::sync::OnceLock;

use crate::core::ktuple::KTuple;
use crate::factory::{phi_k, sigma_k};
use crate::func::ArithFunc;

/// Defines a lazily built, shared standard function.
macro_rules! standard {
    ($(#[$doc:meta])* $name:ident => $build:expr) => {
        $(#[$doc])*
        #[must_use]
        pub fn $name() -> ArithFunc {
            static CELL: OnceLock<ArithFunc> = OnceLock::new();
            CELL.get_or_init(|| $build).clone()
        }
    };
}

standard! {
    /// The constant function `1`, often written `u` or `𝟙`.
    one => ArithFunc::named("one", |_| 1.0)
}

standard! {
    /// The Möbius function `μ = 1⁻¹`.
    ///
    /// Every call returns the same process-wide instance, so its memo (and
    /// that of [`mangoldt`]) only grows for the life of the process. Build a
    /// private `one().inverse()` for a cache that is dropped with its owner.
    ///
    /// ```
    /// use dirichlet::mobius;
    ///
    /// let mu = mobius();
    /// assert_eq!(mu.render_real(10), vec![1.0, -1.0, -1.0, 0.0, -1.0, 1.0, -1.0, 0.0, 0.0, 1.0]);
    /// ```
    mobius => one().unit_inverse()
}

standard! {
    /// Euler's totient `φ`.
    totient => phi_k(&KTuple::euler())
}

standard! {
    /// The identity map `n ↦ n`. Not to be confused with the Dirichlet
    /// identity [`ArithFunc::identity`].
    id => ArithFunc::named("id", |n: u64| n as f64)
}

standard! {
    /// Sum of divisors `σ = σ_1`.
    sigma => sigma_k(1)
}

standard! {
    /// Number of divisors `d = 1 * 1`.
    divisor_count => one() * one()
}

standard! {
    /// The von Mangoldt function `Λ = ln * μ`: `ln p` at prime powers `p^k`,
    /// zero elsewhere. Shares the memo of [`mobius`].
    ///
    /// ```
    /// use dirichlet::mangoldt;
    ///
    /// let lambda = mangoldt();
    /// assert!((lambda.evaluate(8).unwrap().re - 2f64.ln()).abs() < 1e-12);
    /// assert!(lambda.evaluate(6).unwrap().re.abs() < 1e-12);
    /// ```
    mangoldt => ArithFunc::named("ln", |n: u64| (n as f64).ln()) * mobius()
}
