//! Dirichlet - Arithmetic Functions and the Dirichlet Algebra
//!
//! An *arithmetic function* maps the positive integers to the complex
//! numbers. Under pointwise addition and Dirichlet convolution they form a
//! commutative ring whose unit is the Dirichlet identity `ε`, and every
//! function with `f(1) ≠ 0` has an inverse.
//!
//! # Operations
//!
//! | Operation | Syntax | Cost per point |
//! |-----------|--------|----------------|
//! | Negation | `-f` | 1 evaluation |
//! | Sum / difference | `f + g`, `f - g` | 2 evaluations |
//! | Convolution | `f * g` | O(√n) evaluations |
//! | Inverse | `f.inverse()?` | O(√n) per new point, memoized |
//!
//! Functions are immutable expression trees. Combining two functions never
//! changes either operand, and clones are cheap pointer copies.
//!
//! # Evaluation
//!
//! - [`ArithFunc::evaluate`]: value at `n >= 1`
//! - [`ArithFunc::at_prime_index`]: value at the k-th prime
//! - [`ArithFunc::render`] / [`ArithFunc::render_real`]: values at `1..=len`
//! - [`ArithFunc::l_series`]: truncated `Σ f(n) n^(-s)`
//!
//! # Example: Möbius Inversion
//!
//! ```
//! use dirichlet::{id, mobius, one, totient};
//!
//! // φ = μ * id
//! let phi = mobius() * id();
//! for n in 1..=50 {
//!     assert_eq!(phi.evaluate(n).unwrap(), totient().evaluate(n).unwrap());
//! }
//!
//! // 1 * μ = ε
//! let e = one() * mobius();
//! assert_eq!(e.render_real(6), vec![1.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
//! ```
//!
//! # Example: Errors
//!
//! ```
//! use dirichlet::{ArithError, ArithFunc};
//!
//! let f = ArithFunc::from_rule(|n| n as f64 - 1.0);
//! assert_eq!(f.evaluate(0), Err(ArithError::ZeroArgument));
//! assert!(matches!(f.inverse(), Err(ArithError::DegenerateInverse { .. })));
//! assert!(matches!(f.at_prime_index(200), Err(ArithError::PrimeIndexOutOfRange { .. })));
//! ```

// Integer helpers, residue tuples, prime tables
mod core;

// Error taxonomy
mod error;

// The ArithFunc expression tree and its interpreter
pub mod func;

// Parameterized families (phi_k, n_k, sigma_k, u_k)
pub mod factory;

// Standard functions built once from the algebra
pub mod constants;

// Re-export submodules for external access
pub use crate::core::divisor;
pub use crate::core::ktuple;
pub use crate::core::primes;

// Re-export core types at crate root
pub use crate::core::ktuple::KTuple;
pub use crate::core::primes::{PrimeTable, SievedPrimes, SmallPrimes, PRIMES, PRIME_COUNT};
pub use error::{ArithError, Result};
pub use func::{ArithFunc, DEFAULT_SERIES_TERMS};

pub use constants::{divisor_count, id, mangoldt, mobius, one, sigma, totient};
pub use factory::{n_k, phi_k, sigma_k, u_k};

/// Prelude module for convenient imports.
///
/// ```
/// use dirichlet::prelude::*;
///
/// let d = one() * one();
/// assert_eq!(d.evaluate(28).unwrap().re, 6.0);
/// ```
pub mod prelude {
    pub use crate::constants::{divisor_count, id, mangoldt, mobius, one, sigma, totient};
    pub use crate::core::ktuple::KTuple;
    pub use crate::core::primes::{PrimeTable, SievedPrimes, SmallPrimes};
    pub use crate::error::{ArithError, Result};
    pub use crate::factory::{n_k, phi_k, sigma_k, u_k};
    pub use crate::func::{ArithFunc, DEFAULT_SERIES_TERMS};
    pub use num_complex::Complex64;
}
