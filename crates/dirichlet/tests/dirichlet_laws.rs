//! Regression fixtures for the Dirichlet algebra: ring laws, Möbius
//! inversion, reference tables and the memoized inverse.

use std::f64::consts::PI;
use std::time::{Duration, Instant};

use dirichlet::prelude::*;

const TOL: f64 = 1e-9;

fn close(a: Complex64, b: Complex64) -> bool {
    (a - b).norm() < TOL
}

fn dirichlet_identity(n: u64) -> Complex64 {
    if n == 1 {
        Complex64::new(1.0, 0.0)
    } else {
        Complex64::new(0.0, 0.0)
    }
}

/// A handful of functions with `f(1) ≠ 0`, covering real, complex,
/// multiplicative and non-multiplicative shapes.
fn sample_functions() -> Vec<(&'static str, ArithFunc)> {
    vec![
        ("one", one()),
        ("id", id()),
        ("totient", totient()),
        ("sigma", sigma()),
        ("divisor_count", divisor_count()),
        ("n_k(-2)", n_k(-2)),
        ("affine", ArithFunc::from_rule(|n| 3.0 * n as f64 - 1.0)),
        (
            "complex",
            ArithFunc::from_rule(|n| Complex64::new(1.0 / n as f64, (n % 5) as f64)),
        ),
        ("mobius", mobius()),
    ]
}

/// Divisor count by trial division over 1..=n.
fn reference_divisor_count(n: u64) -> f64 {
    (1..=n).filter(|d| n % d == 0).count() as f64
}

/// Euler's product formula φ(n) = n Π_{p | n} (1 - 1/p), in integers.
fn reference_totient(mut n: u64) -> f64 {
    let mut result = n;
    let mut p = 2;
    while p * p <= n {
        if n % p == 0 {
            while n % p == 0 {
                n /= p;
            }
            result -= result / p;
        }
        p += 1;
    }
    if n > 1 {
        result -= result / n;
    }
    result as f64
}

// =============================================================================
// Ring laws
// =============================================================================

#[test]
fn identity_law() {
    let e = ArithFunc::identity();
    for (name, f) in sample_functions() {
        let g = &f * &e;
        for n in 1..=100 {
            assert!(
                close(g.evaluate(n).unwrap(), f.evaluate(n).unwrap()),
                "{name}: (f * ε)({n})"
            );
        }
    }
}

#[test]
fn mobius_inversion() {
    let e = one() * mobius();
    assert_eq!(e.evaluate(1).unwrap(), Complex64::new(1.0, 0.0));
    for n in 2..=200 {
        assert_eq!(e.evaluate(n).unwrap().re, 0.0, "(1 * μ)({n})");
    }
}

#[test]
fn inverse_round_trip() {
    for (name, f) in sample_functions() {
        let inv = f.inverse().unwrap();
        let left = &inv * &f;
        let right = &f * &inv;
        for n in 1..=50 {
            let expected = dirichlet_identity(n);
            assert!(close(left.evaluate(n).unwrap(), expected), "{name}: (f⁻¹ * f)({n})");
            assert!(close(right.evaluate(n).unwrap(), expected), "{name}: (f * f⁻¹)({n})");
        }
    }
}

#[test]
fn mobius_of_mobius_is_one() {
    let back = mobius().inverse().unwrap();
    for n in 1..=100 {
        assert!(close(back.evaluate(n).unwrap(), Complex64::new(1.0, 0.0)), "n = {n}");
    }
}

// =============================================================================
// Reference tables
// =============================================================================

#[test]
fn divisor_count_table() {
    let d = divisor_count();
    for n in 1..=1000 {
        assert_eq!(d.evaluate(n).unwrap().re, reference_divisor_count(n), "d({n})");
    }
}

#[test]
fn totient_table() {
    let phi = totient();
    for n in 1..=100 {
        assert_eq!(phi.evaluate(n).unwrap().re, reference_totient(n), "φ({n})");
    }
}

#[test]
fn sigma_table() {
    let s = sigma();
    for n in 1..=300u64 {
        let expected: u64 = (1..=n).filter(|d| n % d == 0).sum();
        assert_eq!(s.evaluate(n).unwrap().re, expected as f64, "σ({n})");
    }
}

#[test]
fn mangoldt_is_log_at_prime_powers_only() {
    let lambda = mangoldt();
    for n in 2..=500u64 {
        let smallest = (2..=n).find(|p| n % p == 0).unwrap_or(n);
        let mut m = n;
        while m % smallest == 0 {
            m /= smallest;
        }
        let expected = if m == 1 { (smallest as f64).ln() } else { 0.0 };
        let got = lambda.evaluate(n).unwrap().re;
        assert!((got - expected).abs() < TOL, "Λ({n}) = {got}, expected {expected}");
    }
}

// =============================================================================
// Evaluators
// =============================================================================

#[test]
fn l_series_zeta_two() {
    let zeta2 = one().l_series(Complex64::new(2.0, 0.0), 1024);
    assert!((zeta2.re - PI * PI / 6.0).abs() < 1e-2, "{zeta2}");
    assert!(zeta2.im.abs() < 1e-12);
}

#[test]
fn l_series_mobius_is_reciprocal_zeta() {
    // Σ μ(n)/n² → 6/π²
    let s = Complex64::new(2.0, 0.0);
    let v = mobius().l_series(s, DEFAULT_SERIES_TERMS);
    assert!((v.re - 6.0 / (PI * PI)).abs() < 1e-2, "{v}");
}

#[test]
fn rendering_matches_evaluation() {
    for (name, f) in sample_functions() {
        let seq = f.render(64);
        let real = f.render_real(64);
        assert_eq!(seq.len(), 64);
        for i in 0..64 {
            let v = f.evaluate(i as u64 + 1).unwrap();
            assert_eq!(seq[i], v, "{name}[{i}]");
            assert_eq!(real[i], v.re, "{name}[{i}]");
        }
    }
}

#[test]
fn prime_index_evaluation() {
    let f = id();
    assert_eq!(f.at_prime_index(1).unwrap().re, 2.0);
    assert_eq!(f.at_prime_index(168).unwrap().re, 997.0);
    assert_eq!(
        f.at_prime_index(169),
        Err(ArithError::PrimeIndexOutOfRange {
            index: 169,
            len: 168
        })
    );
    // μ(p) = -1 at every tabulated prime.
    let mu = mobius();
    for k in 1..=168 {
        assert_eq!(mu.at_prime_index(k).unwrap().re, -1.0, "k = {k}");
    }
}

#[test]
fn zero_argument_is_rejected_everywhere() {
    for (name, f) in sample_functions() {
        assert_eq!(f.evaluate(0), Err(ArithError::ZeroArgument), "{name}");
    }
    let inv = one().inverse().unwrap();
    assert_eq!((&inv * &one()).evaluate(0), Err(ArithError::ZeroArgument));
}

// =============================================================================
// Memoized inverse
// =============================================================================

#[test]
fn inverse_up_to_2000_is_fast() {
    let f = ArithFunc::from_rule(|n| 1.0 + (n % 3) as f64);
    let inv = f.inverse().unwrap();
    let start = Instant::now();
    for n in 1..=2000 {
        inv.evaluate(n).unwrap();
    }
    let elapsed = start.elapsed();
    assert!(inv.memoized_len() <= 2000);
    assert!(
        elapsed < Duration::from_secs(5),
        "filling the inverse to 2000 took {elapsed:?}"
    );
}

#[test]
fn cold_inverse_at_highly_composite_point() {
    // A single cold evaluation at a number with many divisors must not
    // re-derive sub-inverses.
    let inv = sigma().inverse().unwrap();
    let start = Instant::now();
    let v = inv.evaluate(5040).unwrap();
    assert!(v.is_finite());
    assert!(start.elapsed() < Duration::from_secs(2));
    // 5040 has 60 divisors, 59 of them above 1.
    assert!(inv.memoized_len() <= 59, "{}", inv.memoized_len());
}

#[test]
fn nested_inverse_memo_is_shared() {
    let inv = totient().inverse().unwrap();
    let u = &inv * &id();
    for n in 1..=120 {
        u.evaluate(n).unwrap();
    }
    let filled = inv.memoized_len();
    assert!(filled > 0);
    // A second pass through the convolution reuses every stored value.
    for n in 1..=120 {
        u.evaluate(n).unwrap();
    }
    assert_eq!(inv.memoized_len(), filled);
}

#[test]
fn concurrent_readers_share_one_inverse() {
    let mu = ArithFunc::from_rule(|_| 1.0).inverse().unwrap();
    let reference: Vec<Complex64> = {
        let fresh = ArithFunc::from_rule(|_| 1.0).inverse().unwrap();
        fresh.render(600)
    };
    std::thread::scope(|scope| {
        for offset in 0..4 {
            let mu = &mu;
            let reference = &reference;
            scope.spawn(move || {
                for n in (1 + offset..=600).rev() {
                    assert_eq!(mu.evaluate(n).unwrap(), reference[(n - 1) as usize]);
                }
            });
        }
    });
    assert!(mu.memoized_len() <= 600);
}
