//! Error types for arithmetic-function construction and evaluation.

use num_complex::Complex64;
use thiserror::Error;

/// Errors reported by the Dirichlet algebra.
///
/// Every variant is caused by a caller-supplied argument, so none of them is
/// transient and none is worth retrying.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ArithError {
    /// Evaluation was requested at `n = 0`; arithmetic functions start at 1.
    #[error("arithmetic functions are defined for n >= 1, got n = 0")]
    ZeroArgument,

    /// Prime-index evaluation outside the table.
    #[error("prime index {index} is out of range for a table of {len} primes (indices start at 1)")]
    PrimeIndexOutOfRange {
        /// The requested 1-based index.
        index: usize,
        /// Number of primes the table holds.
        len: usize,
    },

    /// Dirichlet inverse of a function whose value at 1 is zero or not finite.
    #[error("no Dirichlet inverse: f(1) = {leading} is not an invertible value")]
    DegenerateInverse {
        /// The offending value of f(1).
        leading: Complex64,
    },

    /// A k-tuple literal that could not be parsed.
    #[error("invalid k-tuple: {0}")]
    InvalidTuple(String),
}

/// Result type for the Dirichlet algebra.
pub type Result<T> = std::result::Result<T, ArithError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        assert_eq!(
            ArithError::ZeroArgument.to_string(),
            "arithmetic functions are defined for n >= 1, got n = 0"
        );

        let err = ArithError::PrimeIndexOutOfRange {
            index: 169,
            len: 168,
        };
        assert_eq!(
            err.to_string(),
            "prime index 169 is out of range for a table of 168 primes (indices start at 1)"
        );

        let err = ArithError::DegenerateInverse {
            leading: Complex64::new(0.0, 0.0),
        };
        assert!(err.to_string().starts_with("no Dirichlet inverse: f(1) = 0"));

        let err = ArithError::InvalidTuple("x".into());
        assert_eq!(err.to_string(), "invalid k-tuple: x");
    }
}
