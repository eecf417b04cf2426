//! Factorials, permutations, and combinations.
//!
//! Counts are `u64`, so negative inputs are unrepresentable; the
//! remaining domain error (`r > n`) yields `None` instead of a sentinel
//! zero.
//!
//! Results are `f64` because the intended domain (n up to a few hundred,
//! guarded at the UI) quickly leaves exact integer range: `20!` is the
//! last factorial that fits in a `u64`, and `171!` overflows an `f64`
//! altogether. [`ln_factorial`] stays finite throughout and is the route
//! used by the Poisson mass function.

use crate::special::ln_gamma;

/// n! as an iterative product.
///
/// `0! = 1! = 1`. Exact up to `n = 18` (the last factorial below 2⁵³);
/// `f64::INFINITY` for `n > 170`.
///
/// # Examples
/// ```
/// use statkit::combinatorics::factorial;
/// assert_eq!(factorial(0), 1.0);
/// assert_eq!(factorial(1), 1.0);
/// assert_eq!(factorial(5), 120.0);
/// assert!(factorial(171).is_infinite());
/// ```
pub fn factorial(n: u64) -> f64 {
    let mut product = 1.0_f64;
    for i in 2..=n {
        product *= i as f64;
    }
    product
}

/// ln(n!) via the log-gamma function.
///
/// Finite for all `n`, unlike [`factorial`].
///
/// # Examples
/// ```
/// use statkit::combinatorics::ln_factorial;
/// assert!((ln_factorial(5) - 120.0_f64.ln()).abs() < 1e-10);
/// ```
pub fn ln_factorial(n: u64) -> f64 {
    ln_gamma(n as f64 + 1.0)
}

/// Number of ordered arrangements P(n, r) = n · (n−1) · … · (n−r+1).
///
/// # Returns
/// - `Some(1.0)` for `r = 0` (the empty arrangement).
/// - `None` for `r > n`.
///
/// # Examples
/// ```
/// use statkit::combinatorics::permutation;
/// assert_eq!(permutation(5, 3), Some(60.0));
/// assert_eq!(permutation(8, 3), Some(336.0));
/// assert_eq!(permutation(7, 0), Some(1.0));
/// assert_eq!(permutation(3, 5), None);
/// ```
pub fn permutation(n: u64, r: u64) -> Option<f64> {
    if r > n {
        return None;
    }
    let mut product = 1.0_f64;
    for i in 0..r {
        product *= (n - i) as f64;
    }
    Some(product)
}

/// Binomial coefficient C(n, r) = n! / (r! (n−r)!).
///
/// Uses the multiplicative formula with the symmetry reduction
/// `r = min(r, n−r)` to bound both the iteration count and the
/// accumulated rounding error, then rounds the final result once to
/// absorb the drift from sequential division. Rounding each step instead
/// would compound the error. Exact as long as the true coefficient is
/// below 2⁵³; beyond that the value is correct to `f64` precision but no
/// longer an exact integer.
///
/// # Returns
/// - `Some(1.0)` for `r = 0` or `r = n`.
/// - `None` for `r > n`.
///
/// # Examples
/// ```
/// use statkit::combinatorics::combination;
/// assert_eq!(combination(10, 4), Some(210.0));
/// assert_eq!(combination(6, 6), Some(1.0));
/// assert_eq!(combination(4, 6), None);
/// ```
pub fn combination(n: u64, r: u64) -> Option<f64> {
    if r > n {
        return None;
    }
    let r = r.min(n - r);
    let mut product = 1.0_f64;
    for i in 0..r {
        product = product * (n - i) as f64 / (i + 1) as f64;
    }
    Some(product.round())
}
