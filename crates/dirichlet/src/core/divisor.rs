//! Exact integer helpers for divisor enumeration.
//!
//! Every divisibility decision here is an integer `%` test. Floating-point
//! square roots are only used as a first guess in [`isqrt`] and are corrected
//! with integer comparisons before anything depends on them.
//!
//! # Examples
//!
//! ```
//! use dirichlet::divisor::{exact_sqrt, isqrt, DivisorPairs};
//!
//! assert_eq!(isqrt(99), 9);
//! assert_eq!(exact_sqrt(100), Some(10));
//! assert_eq!(exact_sqrt(99), None);
//!
//! // Divisors below √36, each paired with its complement.
//! let pairs: Vec<_> = DivisorPairs::new(36, 1).collect();
//! assert_eq!(pairs, vec![(1, 36), (2, 18), (3, 12), (4, 9)]);
//! ```

/// Floor of the square root of `n`.
#[must_use]
pub fn isqrt(n: u64) -> u64 {
    if n < 2 {
        return n;
    }
    let mut r = (n as f64).sqrt() as u64;
    // The float estimate can be off by one in either direction near 2^53.
    while r.checked_mul(r).map_or(true, |sq| sq > n) {
        r -= 1;
    }
    while (r + 1).checked_mul(r + 1).map_or(false, |sq| sq <= n) {
        r += 1;
    }
    r
}

/// `Some(r)` when `n == r * r`, otherwise `None`.
#[must_use]
pub fn exact_sqrt(n: u64) -> Option<u64> {
    let r = isqrt(n);
    (r * r == n).then_some(r)
}

/// Greatest common divisor (Euclid). `gcd(0, n) == n`.
#[must_use]
pub const fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Iterator over complementary divisor pairs `(i, n / i)` with `i * i < n`.
///
/// Starting at `start` lets the inverse recurrence skip `i = 1`, whose pair
/// it accumulates separately. The diagonal `(√n, √n)` of a perfect square is
/// never produced; callers add it once via [`exact_sqrt`].
#[derive(Debug, Clone)]
pub struct DivisorPairs {
    n: u64,
    next: u64,
}

impl DivisorPairs {
    /// Pairs of `n` whose smaller member is at least `start`.
    #[inline]
    #[must_use]
    pub const fn new(n: u64, start: u64) -> Self {
        Self { n, next: start }
    }
}

impl Iterator for DivisorPairs {
    type Item = (u64, u64);

    fn next(&mut self) -> Option<Self::Item> {
        while self.next.saturating_mul(self.next) < self.n {
            let i = self.next;
            self.next += 1;
            if self.n % i == 0 {
                return Some((i, self.n / i));
            }
        }
        None
    }
}

impl std::iter::FusedIterator for DivisorPairs {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_isqrt_small() {
        let expected = [0, 1, 1, 1, 2, 2, 2, 2, 2, 3, 3];
        for (n, &r) in expected.iter().enumerate() {
            assert_eq!(isqrt(n as u64), r, "isqrt({n})");
        }
    }

    #[test]
    fn test_isqrt_large() {
        let r = 4_294_967_295u64; // 2^32 - 1
        assert_eq!(isqrt(r * r), r);
        assert_eq!(isqrt(r * r - 1), r - 1);
        assert_eq!(isqrt(u64::MAX), r);
    }

    #[test]
    fn test_exact_sqrt() {
        assert_eq!(exact_sqrt(1), Some(1));
        assert_eq!(exact_sqrt(49), Some(7));
        assert_eq!(exact_sqrt(50), None);
        assert_eq!(exact_sqrt(2), None);
    }

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(0, 7), 7);
        assert_eq!(gcd(7, 0), 7);
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(17, 5), 1);
        assert_eq!(gcd(1, 1), 1);
    }

    #[test]
    fn test_pairs_non_square_reach_floor_root() {
        // isqrt(6) = 2 must still be visited because 2 * 2 < 6.
        let pairs: Vec<_> = DivisorPairs::new(6, 1).collect();
        assert_eq!(pairs, vec![(1, 6), (2, 3)]);
    }

    #[test]
    fn test_pairs_skip_diagonal() {
        let pairs: Vec<_> = DivisorPairs::new(16, 1).collect();
        assert_eq!(pairs, vec![(1, 16), (2, 8)]);
        assert_eq!(DivisorPairs::new(1, 1).count(), 0);
    }

    #[test]
    fn test_pairs_start() {
        let pairs: Vec<_> = DivisorPairs::new(12, 2).collect();
        assert_eq!(pairs, vec![(2, 6), (3, 4)]);
        assert_eq!(DivisorPairs::new(7, 2).count(), 0);
    }

    #[test]
    fn test_pairs_cover_every_divisor() {
        for n in 1..=500u64 {
            let mut found: Vec<u64> = DivisorPairs::new(n, 1)
                .flat_map(|(i, d)| [i, d])
                .chain(exact_sqrt(n))
                .collect();
            found.sort_unstable();
            let expected: Vec<u64> = (1..=n).filter(|d| n % d == 0).collect();
            assert_eq!(found, expected, "divisors of {n}");
        }
    }
}
