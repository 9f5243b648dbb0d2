//! Named functions selectable from the command line.
//!
//! | Spec | Function |
//! |------|----------|
//! | `identity` | Dirichlet identity ε |
//! | `one`, `mobius`, `totient`, `id`, `sigma`, `divisor-count`, `mangoldt` | standard functions |
//! | `n_k:<k>` | n ↦ n^k |
//! | `sigma_k:<k>` | Σ_{d\|n} d^k |
//! | `phi_k:<j,j,...>` | generalized totient |
//! | `u_k:<j,j,...>` | generalized unit function |

use std::fmt;
use std::str::FromStr;

use dirichlet::{ArithError, ArithFunc, KTuple};
use thiserror::Error;

/// Errors raised while parsing a function spec.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    /// The name is not in the catalog.
    #[error("unknown function '{0}' (try `dirichlet list`)")]
    Unknown(String),

    /// A parameterized family was given without its parameter.
    #[error("'{0}' needs a parameter, e.g. '{0}:2'")]
    MissingParameter(&'static str),

    /// The exponent of `n_k` / `sigma_k` is not an `i32`.
    #[error("invalid exponent '{0}'")]
    InvalidExponent(String),

    /// The tuple of `phi_k` / `u_k` does not parse.
    #[error(transparent)]
    Tuple(#[from] ArithError),
}

/// A function named on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FuncSpec {
    /// The Dirichlet identity ε.
    Identity,
    /// Constant one.
    One,
    /// Möbius μ.
    Mobius,
    /// Euler φ.
    Totient,
    /// n ↦ n.
    Id,
    /// Sum of divisors σ.
    Sigma,
    /// Number of divisors d.
    DivisorCount,
    /// Von Mangoldt Λ.
    Mangoldt,
    /// n ↦ n^k.
    Power(i32),
    /// Divisor power sum σ_k.
    SigmaK(i32),
    /// Generalized totient of a tuple.
    PhiK(KTuple),
    /// Generalized unit function of a tuple.
    UnitK(KTuple),
}

/// Every accepted spec form, for `dirichlet list`.
pub const CATALOG: &[&str] = &[
    "identity",
    "one",
    "mobius",
    "totient",
    "id",
    "sigma",
    "divisor-count",
    "mangoldt",
    "n_k:<k>",
    "sigma_k:<k>",
    "phi_k:<j,j,...>",
    "u_k:<j,j,...>",
];

impl FuncSpec {
    /// Build the function.
    #[must_use]
    pub fn build(&self) -> ArithFunc {
        match self {
            Self::Identity => ArithFunc::identity(),
            Self::One => dirichlet::one(),
            Self::Mobius => dirichlet::mobius(),
            Self::Totient => dirichlet::totient(),
            Self::Id => dirichlet::id(),
            Self::Sigma => dirichlet::sigma(),
            Self::DivisorCount => dirichlet::divisor_count(),
            Self::Mangoldt => dirichlet::mangoldt(),
            Self::Power(k) => dirichlet::n_k(*k),
            Self::SigmaK(k) => dirichlet::sigma_k(*k),
            Self::PhiK(t) => dirichlet::phi_k(t),
            Self::UnitK(t) => dirichlet::u_k(t),
        }
    }

    /// The residue tuple of `phi_k` / `u_k`, if any.
    #[must_use]
    pub fn tuple(&self) -> Option<&KTuple> {
        match self {
            Self::PhiK(t) | Self::UnitK(t) => Some(t),
            _ => None,
        }
    }
}

fn exponent(s: &str) -> Result<i32, CatalogError> {
    s.trim()
        .parse()
        .map_err(|_| CatalogError::InvalidExponent(s.to_string()))
}

impl FromStr for FuncSpec {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (name, param) = match s.split_once(':') {
            Some((name, param)) => (name, Some(param)),
            None => (s, None),
        };
        let spec = match (name.to_ascii_lowercase().as_str(), param) {
            ("identity" | "epsilon", None) => Self::Identity,
            ("one" | "u", None) => Self::One,
            ("mobius" | "mu", None) => Self::Mobius,
            ("totient" | "phi", None) => Self::Totient,
            ("id" | "n", None) => Self::Id,
            ("sigma", None) => Self::Sigma,
            ("divisor-count" | "d", None) => Self::DivisorCount,
            ("mangoldt", None) => Self::Mangoldt,
            ("n_k", Some(k)) => Self::Power(exponent(k)?),
            ("sigma_k", Some(k)) => Self::SigmaK(exponent(k)?),
            ("phi_k", Some(t)) => Self::PhiK(t.parse()?),
            ("u_k", Some(t)) => Self::UnitK(t.parse()?),
            ("n_k", None) => return Err(CatalogError::MissingParameter("n_k")),
            ("sigma_k", None) => return Err(CatalogError::MissingParameter("sigma_k")),
            ("phi_k", None) => return Err(CatalogError::MissingParameter("phi_k")),
            ("u_k", None) => return Err(CatalogError::MissingParameter("u_k")),
            _ => return Err(CatalogError::Unknown(s.to_string())),
        };
        Ok(spec)
    }
}

impl fmt::Display for FuncSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identity => f.write_str("identity"),
            Self::One => f.write_str("one"),
            Self::Mobius => f.write_str("mobius"),
            Self::Totient => f.write_str("totient"),
            Self::Id => f.write_str("id"),
            Self::Sigma => f.write_str("sigma"),
            Self::DivisorCount => f.write_str("divisor-count"),
            Self::Mangoldt => f.write_str("mangoldt"),
            Self::Power(k) => write!(f, "n_k:{k}"),
            Self::SigmaK(k) => write!(f, "sigma_k:{k}"),
            Self::PhiK(t) => write!(f, "phi_k:{t}"),
            Self::UnitK(t) => write!(f, "u_k:{t}"),
        }
    }
}
