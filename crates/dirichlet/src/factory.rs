//! Parameterized families of arithmetic functions.
//!
//! Everything here is built from the algebra in [`func`](crate::func); no
//! factory has its own evaluation algorithm beyond a pointwise rule.
//!
//! | Factory | Value at n |
//! |---------|------------|
//! | [`phi_k`] | #{ i ∈ [0, n) : gcd((j + i) mod n, n) = 1 for every j in the tuple } |
//! | [`n_k`] | n^k |
//! | [`sigma_k`] | Σ_{d \| n} d^k |
//! | [`u_k`] | (phi_k⁻¹ * id)(n) |

use crate::constants::{id, one};
use crate::core::divisor::gcd;
use crate::core::ktuple::KTuple;
use crate::func::ArithFunc;

/// Generalized totient of a residue tuple.
///
/// Counts the shifts `i ∈ [0, n)` that make every `j + i` coprime to `n`.
/// `phi_k(&KTuple::euler())` is Euler's φ.
///
/// Brute force: O(n · k · log n) per evaluation.
///
/// # Examples
///
/// ```
/// use dirichlet::{phi_k, KTuple};
///
/// let phi = phi_k(&KTuple::euler());
/// assert_eq!(phi.evaluate(12).unwrap().re, 4.0);
///
/// // Twin-prime pattern (0, 2): residues i with i and i + 2 both coprime to 15.
/// let twins = phi_k(&KTuple::from([0u64, 2]));
/// assert_eq!(twins.evaluate(15).unwrap().re, 3.0);
/// ```
#[must_use]
pub fn phi_k(tuple: &KTuple) -> ArithFunc {
    let offsets = tuple.as_slice().to_vec();
    ArithFunc::named("phi_k", move |n: u64| {
        (0..n)
            .filter(|&i| offsets.iter().all(|&j| gcd((j % n + i) % n, n) == 1))
            .count() as f64
    })
}

/// Power function `n ↦ n^k`.
///
/// # Examples
///
/// ```
/// use dirichlet::n_k;
///
/// assert_eq!(n_k(3).evaluate(2).unwrap().re, 8.0);
/// assert_eq!(n_k(-1).evaluate(4).unwrap().re, 0.25);
/// ```
#[must_use]
pub fn n_k(k: i32) -> ArithFunc {
    ArithFunc::named("n_k", move |n: u64| (n as f64).powi(k))
}

/// Divisor power sum `σ_k = n_k * 1`.
///
/// # Examples
///
/// ```
/// use dirichlet::sigma_k;
///
/// assert_eq!(sigma_k(2).evaluate(6).unwrap().re, 50.0); // 1 + 4 + 9 + 36
/// assert_eq!(sigma_k(0).evaluate(12).unwrap().re, 6.0);
/// ```
#[must_use]
pub fn sigma_k(k: i32) -> ArithFunc {
    n_k(k) * one()
}

/// Generalized unit function `u_k = phi_k⁻¹ * id`.
///
/// Since `φ = μ * id`, the tuple `(0)` gives `φ⁻¹ * id = 1`, the constant
/// function. Longer tuples measure how far `phi_k` is from that relation.
///
/// # Examples
///
/// ```
/// use dirichlet::{u_k, KTuple};
///
/// let u = u_k(&KTuple::euler());
/// for n in 1..=30 {
///     assert!((u.evaluate(n).unwrap().re - 1.0).abs() < 1e-9);
/// }
/// ```
#[must_use]
pub fn u_k(tuple: &KTuple) -> ArithFunc {
    // phi_k(tuple)(1) counts i = 0 with gcd(0, 1) = 1, so it is 1 for
    // every tuple.
    phi_k(tuple).unit_inverse() * id()
}
