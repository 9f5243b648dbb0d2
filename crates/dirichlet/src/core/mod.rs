//! Scalar domain types and integer helpers.
//!
//! - [`divisor`]: integer square roots, gcd, and divisor-pair enumeration
//! - [`ktuple::KTuple`]: residue tuples for the generalized totient family
//! - [`primes`]: the prime tables behind prime-index evaluation

pub mod divisor;
pub mod ktuple;
pub mod primes;
