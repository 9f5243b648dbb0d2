//! Residue tuples parameterizing the generalized totient family.

use std::fmt;
use std::str::FromStr;

use crate::error::ArithError;

/// An ordered tuple of non-negative residue offsets `(j₁, …, j_k)`.
///
/// Used only by [`phi_k`](crate::phi_k) and [`u_k`](crate::u_k). The empty
/// tuple is legal: `phi_k` of it counts every residue and returns `n`.
///
/// # Examples
///
/// ```
/// use dirichlet::KTuple;
///
/// let twins: KTuple = "0,2".parse().unwrap();
/// assert_eq!(twins.as_slice(), &[0, 2]);
/// assert_eq!(twins.to_string(), "0,2");
/// assert_eq!(KTuple::from([0u64]), KTuple::euler());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct KTuple(Vec<u64>);

impl KTuple {
    /// Build a tuple from its offsets.
    #[must_use]
    pub fn new(offsets: Vec<u64>) -> Self {
        Self(offsets)
    }

    /// The 1-tuple `(0)`, for which `phi_k` is Euler's totient.
    #[must_use]
    pub fn euler() -> Self {
        Self(vec![0])
    }

    /// The offsets in order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[u64] {
        &self.0
    }

    /// Number of offsets.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the tuple is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u64>> for KTuple {
    fn from(offsets: Vec<u64>) -> Self {
        Self(offsets)
    }
}

impl<const K: usize> From<[u64; K]> for KTuple {
    fn from(offsets: [u64; K]) -> Self {
        Self(offsets.to_vec())
    }
}

impl fmt::Display for KTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, j) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{j}")?;
        }
        Ok(())
    }
}

/// Parses comma-separated offsets such as `"0,2,6"`. Whitespace around each
/// offset is ignored and the empty string is the empty tuple.
impl FromStr for KTuple {
    type Err = ArithError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Self::default());
        }
        s.split(',')
            .map(|part| {
                let part = part.trim();
                part.parse::<u64>()
                    .map_err(|_| ArithError::InvalidTuple(format!("'{part}' in \"{s}\"")))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}
