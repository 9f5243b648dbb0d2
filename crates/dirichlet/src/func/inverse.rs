//! Dirichlet inverse with a per-node memo table.
//!
//! For `f` with `f(1) ≠ 0`:
//!
//! ```text
//! f⁻¹(1) = 1 / f(1)
//! f⁻¹(n) = -(1 / f(1)) · Σ_{d | n, d < n} f(n / d) · f⁻¹(d)      (n > 1)
//! ```
//!
//! The recurrence refers to `f⁻¹` at every proper divisor, which in turn
//! refers to their divisors. Without sharing, the same sub-values are
//! recomputed combinatorially many times. Each inverse node therefore owns a
//! table `n ↦ f⁻¹(n)` that is filled on first request, so filling the
//! inverse up to `N` costs O(N√N) evaluations of `f`.
//!
//! The table lives behind a [`Mutex`]. The lock is taken only to read or
//! insert a single entry and is never held across the recursive step, so
//! concurrent evaluation of one inverse from several threads at worst
//! computes the same entry twice and stores identical values.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use num_complex::Complex64;

use super::{ArithFunc, Node};
use crate::core::divisor::{exact_sqrt, DivisorPairs};
use crate::error::{ArithError, Result};

pub(super) struct Inverse {
    operand: ArithFunc,
    /// `1 / f(1)`.
    leading_recip: Complex64,
    memo: Mutex<HashMap<u64, Complex64>>,
}

impl Inverse {
    fn new(operand: ArithFunc, leading_recip: Complex64) -> Self {
        Self {
            operand,
            leading_recip,
            memo: Mutex::new(HashMap::new()),
        }
    }

    pub(super) fn operand(&self) -> &ArithFunc {
        &self.operand
    }

    pub(super) fn memoized_len(&self) -> usize {
        self.memo.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    fn cached(&self, n: u64) -> Option<Complex64> {
        self.memo
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&n)
            .copied()
    }

    /// `f⁻¹(n)`, reading from and filling the memo.
    pub(super) fn at(&self, n: u64) -> Complex64 {
        if n == 1 {
            return self.leading_recip;
        }
        if let Some(v) = self.cached(n) {
            return v;
        }
        tracing::trace!(n, "inverse memo miss");

        let f = &self.operand;
        // The d = 1 term of the sum over proper divisors.
        let mut sum = f.value(n) * self.leading_recip;
        for (i, d) in DivisorPairs::new(n, 2) {
            sum += f.value(i) * self.at(d);
            sum += f.value(d) * self.at(i);
        }
        if let Some(r) = exact_sqrt(n) {
            sum += f.value(r) * self.at(r);
        }
        let value = -sum * self.leading_recip;

        self.memo
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(n, value);
        value
    }
}

impl ArithFunc {
    /// The Dirichlet inverse `f⁻¹`, satisfying `f * f⁻¹ = ε`.
    ///
    /// `f(1)` is evaluated once, here, and the result is memoized per
    /// returned function: repeated and nested evaluations share every value
    /// already computed.
    ///
    /// # Errors
    ///
    /// [`ArithError::DegenerateInverse`] if `f(1)` is zero or not finite, or
    /// if `1 / f(1)` is not finite.
    ///
    /// # Examples
    ///
    /// ```
    /// use dirichlet::{ArithError, ArithFunc};
    ///
    /// let id = ArithFunc::from_rule(|n| n as f64);
    /// let inv = id.inverse().unwrap();
    /// // id⁻¹(n) = μ(n)·n
    /// assert_eq!(inv.evaluate(6).unwrap().re, 6.0);
    /// assert_eq!(inv.evaluate(4).unwrap().re, 0.0);
    ///
    /// let shifted = ArithFunc::from_rule(|n| (n - 1) as f64);
    /// assert!(matches!(shifted.inverse(), Err(ArithError::DegenerateInverse { .. })));
    /// ```
    pub fn inverse(&self) -> Result<Self> {
        let leading = self.value(1);
        // 1 / f(1) overflows for |f(1)| below ~1e-162.
        let recip = leading.inv();
        if leading == Complex64::new(0.0, 0.0) || !leading.is_finite() || !recip.is_finite() {
            tracing::warn!(%leading, function = %self, "Dirichlet inverse requested for non-invertible f(1)");
            return Err(ArithError::DegenerateInverse { leading });
        }
        tracing::debug!(%leading, function = %self, "built Dirichlet inverse");
        Ok(Self::from_node(Node::Invert(Inverse::new(
            self.clone(),
            recip,
        ))))
    }

    /// Inverse of a function known to satisfy `f(1) = 1`.
    pub(crate) fn unit_inverse(&self) -> Self {
        debug_assert_eq!(self.value(1), Complex64::new(1.0, 0.0));
        Self::from_node(Node::Invert(Inverse::new(
            self.clone(),
            Complex64::new(1.0, 0.0),
        )))
    }
}
