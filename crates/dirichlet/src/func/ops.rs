//! Pointwise combinators and Dirichlet convolution.
//!
//! Each combinator clones its operands into a new node. A clone is a
//! reference-count bump on an immutable tree, so the combination is fixed
//! at the moment it is built.

use std::ops::{Add, Mul, Neg, Sub};

use num_complex::Complex64;

use super::{ArithFunc, Node};
use crate::core::divisor::{exact_sqrt, DivisorPairs};

/// `(f * g)(n) = Σ_{d | n} f(d) g(n / d)` in O(√n) operand evaluations.
///
/// Every divisor `i` with `i * i < n` contributes both orderings of the pair
/// `(i, n / i)`; the diagonal of a perfect square is added exactly once.
pub(super) fn convolve_at(f: &ArithFunc, g: &ArithFunc, n: u64) -> Complex64 {
    let mut sum = Complex64::new(0.0, 0.0);
    for (i, d) in DivisorPairs::new(n, 1) {
        sum += f.value(i) * g.value(d);
        sum += f.value(d) * g.value(i);
    }
    if let Some(r) = exact_sqrt(n) {
        sum += f.value(r) * g.value(r);
    }
    sum
}

impl ArithFunc {
    /// Pointwise negation `n ↦ -f(n)`.
    #[must_use]
    pub fn negate(&self) -> Self {
        Self::from_node(Node::Negate(self.clone()))
    }

    /// Pointwise sum `n ↦ f(n) + g(n)`.
    #[must_use]
    pub fn plus(&self, g: &Self) -> Self {
        Self::from_node(Node::Sum(self.clone(), g.clone()))
    }

    /// Pointwise difference `n ↦ f(n) - g(n)`.
    #[must_use]
    pub fn minus(&self, g: &Self) -> Self {
        Self::from_node(Node::Difference(self.clone(), g.clone()))
    }

    /// Dirichlet convolution `f * g`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dirichlet::ArithFunc;
    ///
    /// let one = ArithFunc::from_rule(|_| 1.0);
    /// let id = ArithFunc::from_rule(|n| n as f64);
    /// let sigma = id.convolve(&one);
    /// assert_eq!(sigma.evaluate(6).unwrap().re, 12.0); // 1 + 2 + 3 + 6
    /// ```
    #[must_use]
    pub fn convolve(&self, g: &Self) -> Self {
        Self::from_node(Node::Convolve(self.clone(), g.clone()))
    }
}

impl Neg for ArithFunc {
    type Output = ArithFunc;

    fn neg(self) -> ArithFunc {
        self.negate()
    }
}

impl Neg for &ArithFunc {
    type Output = ArithFunc;

    fn neg(self) -> ArithFunc {
        self.negate()
    }
}

/// Implements a binary operator for every owned/borrowed operand pairing.
macro_rules! binary_op {
    ($trait:ident, $method:ident, $inherent:ident) => {
        impl $trait<&ArithFunc> for &ArithFunc {
            type Output = ArithFunc;

            fn $method(self, rhs: &ArithFunc) -> ArithFunc {
                self.$inherent(rhs)
            }
        }

        impl $trait<ArithFunc> for &ArithFunc {
            type Output = ArithFunc;

            fn $method(self, rhs: ArithFunc) -> ArithFunc {
                self.$inherent(&rhs)
            }
        }

        impl $trait<&ArithFunc> for ArithFunc {
            type Output = ArithFunc;

            fn $method(self, rhs: &ArithFunc) -> ArithFunc {
                self.$inherent(rhs)
            }
        }

        impl $trait<ArithFunc> for ArithFunc {
            type Output = ArithFunc;

            fn $method(self, rhs: ArithFunc) -> ArithFunc {
                self.$inherent(&rhs)
            }
        }
    };
}

binary_op!(Add, add, plus);
binary_op!(Sub, sub, minus);
binary_op!(Mul, mul, convolve);
