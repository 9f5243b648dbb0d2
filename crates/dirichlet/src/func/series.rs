//! Evaluators: checked point evaluation, prime-index evaluation, sequence
//! rendering and truncated L-series.

use num_complex::Complex64;

use super::ArithFunc;
use crate::core::primes::{PrimeTable, SmallPrimes};
use crate::error::{ArithError, Result};

/// Conventional number of L-series terms when the caller has no preference.
///
/// The library never reads this on its own; front ends pass it (or their
/// configured value) to [`ArithFunc::l_series`].
pub const DEFAULT_SERIES_TERMS: u64 = 1024;

impl ArithFunc {
    /// Evaluate at `n`.
    ///
    /// # Errors
    ///
    /// [`ArithError::ZeroArgument`] if `n == 0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dirichlet::{ArithError, ArithFunc};
    ///
    /// let e = ArithFunc::identity();
    /// assert_eq!(e.evaluate(1).unwrap().re, 1.0);
    /// assert_eq!(e.evaluate(0), Err(ArithError::ZeroArgument));
    /// ```
    pub fn evaluate(&self, n: u64) -> Result<Complex64> {
        if n == 0 {
            tracing::warn!(function = %self, "evaluation requested at n = 0");
            return Err(ArithError::ZeroArgument);
        }
        Ok(self.value(n))
    }

    /// Evaluate at the `k`-th prime (1-indexed) of the built-in table of the
    /// 168 primes below 1000.
    ///
    /// # Errors
    ///
    /// [`ArithError::PrimeIndexOutOfRange`] unless `1 <= k <= 168`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dirichlet::ArithFunc;
    ///
    /// let id = ArithFunc::from_rule(|n| n as f64);
    /// assert_eq!(id.at_prime_index(4).unwrap().re, 7.0);
    /// assert!(id.at_prime_index(0).is_err());
    /// assert!(id.at_prime_index(169).is_err());
    /// ```
    pub fn at_prime_index(&self, k: usize) -> Result<Complex64> {
        self.at_prime_index_in(&SmallPrimes, k)
    }

    /// Evaluate at the `k`-th prime of a caller-supplied table.
    ///
    /// # Errors
    ///
    /// [`ArithError::PrimeIndexOutOfRange`] if the table has no `k`-th prime.
    pub fn at_prime_index_in<T>(&self, table: &T, k: usize) -> Result<Complex64>
    where
        T: PrimeTable + ?Sized,
    {
        let p = table.nth(k).ok_or(ArithError::PrimeIndexOutOfRange {
            index: k,
            len: table.len(),
        })?;
        self.evaluate(p)
    }

    /// Values at `n = 1..=length`. Output index `i` holds `f(i + 1)`.
    #[must_use]
    pub fn render(&self, length: usize) -> Vec<Complex64> {
        (1..=length as u64).map(|n| self.value(n)).collect()
    }

    /// Real parts of [`render`](Self::render).
    #[must_use]
    pub fn render_real(&self, length: usize) -> Vec<f64> {
        (1..=length as u64).map(|n| self.value(n).re).collect()
    }

    /// Truncated L-series `Σ_{n=1}^{terms} f(n) · n^(-s)`.
    ///
    /// A plain finite sum: no convergence test is made, so values at points
    /// where the full series diverges are just partial sums. `terms = 0` is
    /// the empty sum.
    ///
    /// # Examples
    ///
    /// ```
    /// use dirichlet::{ArithFunc, DEFAULT_SERIES_TERMS};
    /// use num_complex::Complex64;
    ///
    /// let one = ArithFunc::from_rule(|_| 1.0);
    /// let zeta2 = one.l_series(Complex64::new(2.0, 0.0), DEFAULT_SERIES_TERMS);
    /// assert!((zeta2.re - std::f64::consts::PI.powi(2) / 6.0).abs() < 1e-2);
    /// ```
    #[must_use]
    pub fn l_series(&self, s: Complex64, terms: u64) -> Complex64 {
        let _span = tracing::debug_span!("l_series", %s, terms).entered();
        (1..=terms)
            .map(|n| self.value(n) * (-s * (n as f64).ln()).exp())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::primes::SievedPrimes;

    #[test]
    fn test_render_alignment() {
        let sq = ArithFunc::from_rule(|n| (n * n) as f64);
        let seq = sq.render(10);
        assert_eq!(seq.len(), 10);
        for (i, v) in seq.iter().enumerate() {
            assert_eq!(*v, sq.evaluate(i as u64 + 1).unwrap());
        }
        assert!(sq.render(0).is_empty());
    }

    #[test]
    fn test_render_real_drops_imaginary() {
        let f = ArithFunc::from_rule(|n| Complex64::new(n as f64, 7.0));
        assert_eq!(f.render_real(4), vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_prime_index_out_of_range() {
        let f = ArithFunc::identity();
        assert_eq!(
            f.at_prime_index(169),
            Err(ArithError::PrimeIndexOutOfRange {
                index: 169,
                len: 168
            })
        );
        assert_eq!(
            f.at_prime_index(0),
            Err(ArithError::PrimeIndexOutOfRange { index: 0, len: 168 })
        );
    }

    #[test]
    fn test_prime_index_custom_table() {
        let id = ArithFunc::from_rule(|n| n as f64);
        let table = SievedPrimes::up_to(2000);
        assert_eq!(id.at_prime_index_in(&table, 169).unwrap().re, 1009.0);
        assert_eq!(id.at_prime_index(168).unwrap().re, 997.0);
    }

    #[test]
    fn test_l_series_empty_and_single_term() {
        let f = ArithFunc::from_rule(|_| 3.0);
        let s = Complex64::new(1.5, 2.0);
        assert_eq!(f.l_series(s, 0), Complex64::new(0.0, 0.0));
        assert_eq!(f.l_series(s, 1), Complex64::new(3.0, 0.0));
    }

    #[test]
    fn test_l_series_identity_is_one() {
        let e = ArithFunc::identity();
        let v = e.l_series(Complex64::new(0.5, 14.0), 500);
        assert_eq!(v, Complex64::new(1.0, 0.0));
    }
}
