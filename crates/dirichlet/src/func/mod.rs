//! The arithmetic-function value type.
//!
//! An [`ArithFunc`] is an immutable expression tree over the Dirichlet
//! algebra. Leaves are the Dirichlet identity or a caller-supplied rule;
//! interior nodes are negation, sum, difference, convolution and inverse.
//! One recursive interpreter ([`ArithFunc::value`]) evaluates the tree.
//!
//! Nodes sit behind an [`Arc`], so cloning a function is a pointer copy and
//! combining two functions captures an immutable snapshot of both operands.
//! The only interior mutability is the memo table of an inverse node (see
//! [`inverse`]).
//!
//! # Examples
//!
//! ```
//! use dirichlet::ArithFunc;
//!
//! let one = ArithFunc::from_rule(|_| 1.0);
//! let divisors = &one * &one;
//! assert_eq!(divisors.evaluate(12).unwrap().re, 6.0);
//!
//! let mobius = one.inverse().unwrap();
//! assert_eq!(mobius.evaluate(30).unwrap().re, -1.0);
//! assert_eq!(mobius.evaluate(12).unwrap().re, 0.0);
//! ```

mod inverse;
mod ops;
mod series;

use std::fmt;
use std::sync::Arc;

use num_complex::Complex64;

use inverse::Inverse;
pub use series::DEFAULT_SERIES_TERMS;

type Rule = Box<dyn Fn(u64) -> Complex64 + Send + Sync>;

/// One node of the expression tree.
enum Node {
    /// The Dirichlet identity: 1 at n = 1, 0 elsewhere.
    Identity,
    /// A caller-supplied rule with a display label.
    Rule { label: &'static str, rule: Rule },
    Negate(ArithFunc),
    Sum(ArithFunc, ArithFunc),
    Difference(ArithFunc, ArithFunc),
    Convolve(ArithFunc, ArithFunc),
    Invert(Inverse),
}

/// A function from the positive integers to the complex numbers.
///
/// Values are immutable once built. All algebra operations return new
/// functions and leave their operands untouched.
#[derive(Clone)]
pub struct ArithFunc {
    node: Arc<Node>,
}

impl ArithFunc {
    fn from_node(node: Node) -> Self {
        Self {
            node: Arc::new(node),
        }
    }

    /// The Dirichlet identity `ε`: `ε(1) = 1` and `ε(n) = 0` for `n > 1`.
    ///
    /// This is the neutral element of convolution, not the identity map
    /// `n ↦ n` (see [`id`](crate::id)).
    #[must_use]
    pub fn identity() -> Self {
        Self::from_node(Node::Identity)
    }

    /// Wrap a rule `n ↦ value`. The rule is only ever called with `n >= 1`
    /// and may return `f64` or [`Complex64`].
    ///
    /// # Examples
    ///
    /// ```
    /// use dirichlet::ArithFunc;
    ///
    /// let square = ArithFunc::from_rule(|n| (n * n) as f64);
    /// assert_eq!(square.evaluate(7).unwrap().re, 49.0);
    /// ```
    #[must_use]
    pub fn from_rule<F, C>(rule: F) -> Self
    where
        F: Fn(u64) -> C + Send + Sync + 'static,
        C: Into<Complex64>,
    {
        Self::named("rule", rule)
    }

    /// Like [`from_rule`](Self::from_rule), with a label shown by `Display`.
    #[must_use]
    pub fn named<F, C>(label: &'static str, rule: F) -> Self
    where
        F: Fn(u64) -> C + Send + Sync + 'static,
        C: Into<Complex64>,
    {
        Self::from_node(Node::Rule {
            label,
            rule: Box::new(move |n| rule(n).into()),
        })
    }

    /// Evaluate the tree at `n >= 1`.
    ///
    /// Callers outside this module go through [`evaluate`](Self::evaluate),
    /// which rejects `n = 0`.
    pub(crate) fn value(&self, n: u64) -> Complex64 {
        debug_assert!(n >= 1, "arithmetic functions start at n = 1");
        match &*self.node {
            Node::Identity => {
                if n == 1 {
                    Complex64::new(1.0, 0.0)
                } else {
                    Complex64::new(0.0, 0.0)
                }
            }
            Node::Rule { rule, .. } => rule(n),
            Node::Negate(f) => -f.value(n),
            Node::Sum(f, g) => f.value(n) + g.value(n),
            Node::Difference(f, g) => f.value(n) - g.value(n),
            Node::Convolve(f, g) => ops::convolve_at(f, g, n),
            Node::Invert(inv) => inv.at(n),
        }
    }

    /// Number of values cached by this function's inverse memo.
    ///
    /// Zero unless the outermost node is a Dirichlet inverse. Exposed for
    /// diagnostics; it never changes what the function evaluates to.
    #[must_use]
    pub fn memoized_len(&self) -> usize {
        match &*self.node {
            Node::Invert(inv) => inv.memoized_len(),
            _ => 0,
        }
    }
}

impl Default for ArithFunc {
    /// The Dirichlet identity.
    fn default() -> Self {
        Self::identity()
    }
}

/// Prints the shape of the expression, e.g. `conv(one, inv(one))`.
impl fmt::Display for ArithFunc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.node {
            Node::Identity => f.write_str("ε"),
            Node::Rule { label, .. } => f.write_str(label),
            Node::Negate(a) => write!(f, "neg({a})"),
            Node::Sum(a, b) => write!(f, "sum({a}, {b})"),
            Node::Difference(a, b) => write!(f, "diff({a}, {b})"),
            Node::Convolve(a, b) => write!(f, "conv({a}, {b})"),
            Node::Invert(inv) => write!(f, "inv({})", inv.operand()),
        }
    }
}

impl fmt::Debug for ArithFunc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ArithFunc({self})")
    }
}
