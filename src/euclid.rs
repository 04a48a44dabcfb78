//! Euclid contains usefull math functions
//!
//! Mainly the [gamma function](https://en.wikipedia.org/wiki/Gamma_function)
//! (in log space) and the combinatorics built on top of it, so big factorials
//! never have to be computed directly.

use std::f64::consts::{PI, TAU};

/// The `g` parameter of the Lanczos approximation.
const LANCZOS_G: f64 = 7.0;

/// Lanczos series coefficients (`g = 7`, `n = 9`).
const LANCZOS_COEFFS: [f64; 9] = [
    0.99999999999980993,
    676.5203681218851,
    -1259.1392167224028,
    771.32342877765313,
    -176.61502916214059,
    12.507343278686905,
    -0.13857109526572012,
    9.9843695780195716e-6,
    1.5056327351493116e-7,
];

/// `ln(n!)` for `n = 0..=20`, small enough to be exact.
const LN_FACTORIAL: [f64; 21] = [
    0.0,
    0.0,
    0.6931471805599453,
    1.791759469228055,
    3.1780538303479458,
    4.787491742782046,
    6.579251212010101,
    8.525161361065415,
    10.60460290274525,
    12.801827480081469,
    15.104412573075516,
    17.502307845873887,
    19.987214495661885,
    22.552163853123425,
    25.19122118273868,
    27.89927138384089,
    30.671860106080672,
    33.50507345013689,
    36.39544520803305,
    39.339884187199495,
    42.335616460753485,
];

/// The natural logarithm of the [gamma function](https://en.wikipedia.org/wiki/Gamma_function)
/// `ln(|Gamma(x)|)`.
///
/// Uses the [Lanczos approximation](https://en.wikipedia.org/wiki/Lanczos_approximation)
/// and the reflection formula for `x < 0.5`. Returns `+inf` at the poles
/// (`0, -1, -2, ...`) and NaN for a NaN input.
#[must_use]
pub fn ln_gamma(x: f64) -> f64 {
    if x.is_nan() {
        return x;
    }

    if x <= 0.0 && x == x.floor() {
        return f64::INFINITY;
    }

    if x < 0.5 {
        // Reflection: Gamma(x) * Gamma(1 - x) = pi / sin(pi * x)
        let sin_pi_x: f64 = (PI * x).sin().abs();
        return PI.ln() - sin_pi_x.ln() - ln_gamma(1.0 - x);
    }

    let z: f64 = x - 1.0;
    let t: f64 = z + LANCZOS_G + 0.5;

    let mut series: f64 = LANCZOS_COEFFS[0];
    for (i, &c) in LANCZOS_COEFFS[1..].iter().enumerate() {
        series += c / (z + (i + 1) as f64);
    }

    return 0.5 * TAU.ln() + (z + 0.5) * t.ln() - t + series.ln();
}

/// Returns `ln(n!)`.
///
/// Small values come from a table, the rest from [ln_gamma].
#[must_use]
pub fn ln_factorial(n: u64) -> f64 {
    if let Some(&value) = usize::try_from(n)
        .ok()
        .and_then(|idx| LN_FACTORIAL.get(idx))
    {
        return value;
    }
    return ln_gamma(n as f64 + 1.0);
}

/// Returns `ln(C(n, k))`, the logarithm of the
/// [binomial coefficient](https://en.wikipedia.org/wiki/Binomial_coefficient).
///
/// Returns [None] if `n < k`.
#[must_use]
pub fn ln_binomial_coefficient(n: u64, k: u64) -> Option<f64> {
    if n < k {
        return None;
    }
    if k == 0 || k == n {
        return Some(0.0);
    }
    return Some(ln_factorial(n) - ln_factorial(k) - ln_factorial(n - k));
}
