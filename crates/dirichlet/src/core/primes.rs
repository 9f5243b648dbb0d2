//! Prime tables consumed by prime-index evaluation.
//!
//! The default table is the 168 primes below 1000, stored as a static
//! array. Callers that need more primes supply their own [`PrimeTable`],
//! for example a [`SievedPrimes`].
//!
//! # Examples
//!
//! ```
//! use dirichlet::primes::{PrimeTable, SievedPrimes, SmallPrimes};
//!
//! assert_eq!(SmallPrimes.nth(1), Some(2));
//! assert_eq!(SmallPrimes.nth(168), Some(997));
//! assert_eq!(SmallPrimes.nth(169), None);
//!
//! let big = SievedPrimes::up_to(10_000);
//! assert_eq!(big.nth(169), Some(1009));
//! ```

/// Number of primes in [`PRIMES`].
pub const PRIME_COUNT: usize = 168;

/// The first 168 primes (all primes below 1000).
pub static PRIMES: [u64; PRIME_COUNT] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89,
    97, 101, 103, 107, 109, 113, 127, 131, 137, 139, 149, 151, 157, 163, 167, 173, 179, 181, 191,
    193, 197, 199, 211, 223, 227, 229, 233, 239, 241, 251, 257, 263, 269, 271, 277, 281, 283, 293,
    307, 311, 313, 317, 331, 337, 347, 349, 353, 359, 367, 373, 379, 383, 389, 397, 401, 409, 419,
    421, 431, 433, 439, 443, 449, 457, 461, 463, 467, 479, 487, 491, 499, 503, 509, 521, 523, 541,
    547, 557, 563, 569, 571, 577, 587, 593, 599, 601, 607, 613, 617, 619, 631, 641, 643, 647, 653,
    659, 661, 673, 677, 683, 691, 701, 709, 719, 727, 733, 739, 743, 751, 757, 761, 769, 773, 787,
    797, 809, 811, 821, 823, 827, 829, 839, 853, 857, 859, 863, 877, 881, 883, 887, 907, 911, 919,
    929, 937, 941, 947, 953, 967, 971, 977, 983, 991, 997,
];

/// A read-only, 1-indexed sequence of primes.
pub trait PrimeTable {
    /// Number of primes available.
    fn len(&self) -> usize;

    /// The `k`-th prime, 1-indexed. `None` for `k == 0` or `k > len()`.
    fn nth(&self, k: usize) -> Option<u64>;

    /// Whether the table is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The built-in table backed by [`PRIMES`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SmallPrimes;

impl PrimeTable for SmallPrimes {
    #[inline]
    fn len(&self) -> usize {
        PRIME_COUNT
    }

    #[inline]
    fn nth(&self, k: usize) -> Option<u64> {
        k.checked_sub(1).and_then(|i| PRIMES.get(i).copied())
    }
}

/// A table of every prime up to a limit, built with a sieve of Eratosthenes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SievedPrimes {
    primes: Vec<u64>,
}

impl SievedPrimes {
    /// Sieve all primes `p <= limit`.
    #[must_use]
    pub fn up_to(limit: u64) -> Self {
        let limit = limit as usize;
        if limit < 2 {
            return Self { primes: Vec::new() };
        }
        let mut composite = vec![false; limit + 1];
        let mut primes = Vec::new();
        for p in 2..=limit {
            if composite[p] {
                continue;
            }
            primes.push(p as u64);
            let mut multiple = p * p;
            while multiple <= limit {
                composite[multiple] = true;
                multiple += p;
            }
        }
        tracing::debug!(limit, count = primes.len(), "sieved prime table");
        Self { primes }
    }

    /// The primes in ascending order.
    #[must_use]
    pub fn as_slice(&self) -> &[u64] {
        &self.primes
    }
}

impl PrimeTable for SievedPrimes {
    fn len(&self) -> usize {
        self.primes.len()
    }

    fn nth(&self, k: usize) -> Option<u64> {
        k.checked_sub(1).and_then(|i| self.primes.get(i).copied())
    }
}
