//! JSON records printed by the `dirichlet` binary.

use dirichlet::KTuple;
use num_complex::Complex64;
use serde::Serialize;

use crate::catalog::FuncSpec;

/// One evaluated point `f(n)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Point {
    /// Argument.
    pub n: u64,
    /// Real part.
    pub re: f64,
    /// Imaginary part.
    pub im: f64,
}

impl Point {
    /// Record `value = f(n)`.
    #[must_use]
    pub fn new(n: u64, value: Complex64) -> Self {
        Self {
            n,
            re: value.re,
            im: value.im,
        }
    }
}

/// A rendered sequence `f(1), …, f(len)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sequence {
    /// Function spec as given.
    pub function: String,
    /// Residue tuple of `phi_k` / `u_k`, as a list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tuple: Option<KTuple>,
    /// Complex values, present unless `--real` was given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<[f64; 2]>>,
    /// Real parts, present with `--real`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub real: Option<Vec<f64>>,
}

/// Value at the k-th prime.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrimePoint {
    /// Function spec as given.
    pub function: String,
    /// Residue tuple of `phi_k` / `u_k`, as a list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tuple: Option<KTuple>,
    /// 1-based prime index.
    pub k: usize,
    /// The k-th prime and the value there.
    pub point: Point,
}

/// A truncated L-series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    /// Function spec as given.
    pub function: String,
    /// Residue tuple of `phi_k` / `u_k`, as a list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tuple: Option<KTuple>,
    /// `[re, im]` of s.
    pub s: [f64; 2],
    /// Number of terms summed.
    pub terms: u64,
    /// `[re, im]` of the partial sum.
    pub sum: [f64; 2],
}

/// The `function` and `tuple` fields shared by every report.
fn describe(spec: &FuncSpec) -> (String, Option<KTuple>) {
    (spec.to_string(), spec.tuple().cloned())
}

impl Sequence {
    /// Complex values of `spec`.
    #[must_use]
    pub fn complex(spec: &FuncSpec, values: &[Complex64]) -> Self {
        let (function, tuple) = describe(spec);
        Self {
            function,
            tuple,
            values: Some(values.iter().map(|v| [v.re, v.im]).collect()),
            real: None,
        }
    }

    /// Real parts of `spec`.
    #[must_use]
    pub fn real(spec: &FuncSpec, real: Vec<f64>) -> Self {
        let (function, tuple) = describe(spec);
        Self {
            function,
            tuple,
            values: None,
            real: Some(real),
        }
    }
}

impl PrimePoint {
    /// `spec` evaluated at the `k`-th prime.
    #[must_use]
    pub fn new(spec: &FuncSpec, k: usize, point: Point) -> Self {
        let (function, tuple) = describe(spec);
        Self {
            function,
            tuple,
            k,
            point,
        }
    }
}

impl Series {
    /// Partial L-series `sum` of `spec` at `s`.
    #[must_use]
    pub fn new(spec: &FuncSpec, s: Complex64, terms: u64, sum: Complex64) -> Self {
        let (function, tuple) = describe(spec);
        Self {
            function,
            tuple,
            s: [s.re, s.im],
            terms,
            sum: [sum.re, sum.im],
        }
    }
}
