//! Probability distributions.
//!
//! Parameter-validating distribution types with analytical moments and
//! PMF/PDF/CDF evaluation.
//!
//! | Distribution | Parameters | Mean | Variance |
//! |---|---|---|---|
//! | [`Normal`] | μ, σ | μ | σ² |
//! | [`Binomial`] | n, p | np | np(1−p) |
//! | [`Poisson`] | λ | λ | λ |
//!
//! Invalid parameters (p outside [0, 1], negative λ) are rejected at
//! construction, so every constructed distribution evaluates without
//! further guards.

use crate::combinatorics::{combination, ln_factorial};
use crate::special;

/// Error type for invalid distribution parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum DistributionError {
    /// Parameters violate distribution constraints.
    InvalidParameters(String),
}

impl std::fmt::Display for DistributionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DistributionError::InvalidParameters(msg) => {
                write!(f, "invalid distribution parameters: {msg}")
            }
        }
    }
}

impl std::error::Error for DistributionError {}

// ============================================================================
// Normal Distribution
// ============================================================================

/// Normal distribution N(μ, σ²).
///
/// # Examples
/// ```
/// use statkit::distributions::Normal;
/// let iq = Normal::new(100.0, 15.0).unwrap();
/// assert_eq!(iq.z_score(130.0), 2.0);
/// assert!((iq.cdf(100.0) - 0.5).abs() < 1e-7);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Normal {
    mean: f64,
    std_dev: f64,
}

impl Normal {
    /// Creates a new normal distribution.
    ///
    /// # Errors
    /// Returns `Err` if either parameter is not finite or `std_dev <= 0`.
    pub fn new(mean: f64, std_dev: f64) -> Result<Self, DistributionError> {
        if !mean.is_finite() || !std_dev.is_finite() || std_dev <= 0.0 {
            return Err(DistributionError::InvalidParameters(format!(
                "Normal requires finite mean and std_dev > 0, got mean={mean}, std_dev={std_dev}"
            )));
        }
        Ok(Self { mean, std_dev })
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    pub fn variance(&self) -> f64 {
        self.std_dev * self.std_dev
    }

    /// Standardises `x` against this distribution: `(x − μ) / σ`.
    ///
    /// Always finite since `σ > 0` is guaranteed at construction.
    pub fn z_score(&self, x: f64) -> f64 {
        special::z_score(x, self.mean, self.std_dev)
    }

    /// PDF: f(x) = φ((x−μ)/σ) / σ.
    pub fn pdf(&self, x: f64) -> f64 {
        special::standard_normal_pdf(self.z_score(x)) / self.std_dev
    }

    /// CDF: F(x) = Φ((x−μ)/σ).
    pub fn cdf(&self, x: f64) -> f64 {
        special::standard_normal_cdf(self.z_score(x))
    }
}

// ============================================================================
// Binomial Distribution
// ============================================================================

/// Binomial distribution: number of successes in `n` independent trials
/// with success probability `p`.
///
/// # Examples
/// ```
/// use statkit::distributions::Binomial;
/// let b = Binomial::new(10, 0.5).unwrap();
/// // P(X = 5) = C(10,5) / 2^10 = 252/1024
/// assert!((b.pmf(5) - 0.24609375).abs() < 1e-12);
/// assert_eq!(b.mean(), 5.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Binomial {
    n: u64,
    p: f64,
}

impl Binomial {
    /// Creates a new binomial distribution.
    ///
    /// # Errors
    /// Returns `Err` if `p` is not finite or outside `[0, 1]`.
    pub fn new(n: u64, p: f64) -> Result<Self, DistributionError> {
        if !p.is_finite() || !(0.0..=1.0).contains(&p) {
            return Err(DistributionError::InvalidParameters(format!(
                "Binomial requires p in [0, 1], got p={p}"
            )));
        }
        Ok(Self { n, p })
    }

    pub fn n(&self) -> u64 {
        self.n
    }

    pub fn p(&self) -> f64 {
        self.p
    }

    pub fn mean(&self) -> f64 {
        self.n as f64 * self.p
    }

    pub fn variance(&self) -> f64 {
        self.n as f64 * self.p * (1.0 - self.p)
    }

    /// PMF: P(X = k) = C(n,k) · pᵏ · (1−p)ⁿ⁻ᵏ.
    ///
    /// Returns `0.0` for the impossible outcome `k > n`. The edge cases
    /// p = 0 and p = 1 follow from `0⁰ = 1`: all mass sits on k = 0 and
    /// k = n respectively.
    pub fn pmf(&self, k: u64) -> f64 {
        let Some(choose) = combination(self.n, k) else {
            return 0.0;
        };
        let kf = k as f64;
        let nk = (self.n - k) as f64;
        choose * self.p.powf(kf) * (1.0 - self.p).powf(nk)
    }

    /// CDF: P(X ≤ k), the running PMF total.
    pub fn cdf(&self, k: u64) -> f64 {
        let upper = k.min(self.n);
        (0..=upper).map(|i| self.pmf(i)).sum()
    }
}

// ============================================================================
// Poisson Distribution
// ============================================================================

/// Poisson distribution: counts of rare events with rate `λ`.
///
/// # Examples
/// ```
/// use statkit::distributions::Poisson;
/// let calls = Poisson::new(3.2).unwrap();
/// // P(X = 3) = 3.2³ e⁻³·² / 3!
/// assert!((calls.pmf(3) - 0.22261).abs() < 1e-5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Poisson {
    lambda: f64,
}

impl Poisson {
    /// Creates a new Poisson distribution.
    ///
    /// # Errors
    /// Returns `Err` if `lambda` is not finite or negative.
    pub fn new(lambda: f64) -> Result<Self, DistributionError> {
        if !lambda.is_finite() || lambda < 0.0 {
            return Err(DistributionError::InvalidParameters(format!(
                "Poisson requires lambda >= 0, got lambda={lambda}"
            )));
        }
        Ok(Self { lambda })
    }

    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    pub fn mean(&self) -> f64 {
        self.lambda
    }

    pub fn variance(&self) -> f64 {
        self.lambda
    }

    /// PMF: P(X = k) = λᵏ e⁻λ / k!.
    ///
    /// Evaluated in log space, `exp(k·ln λ − λ − ln k!)`, which stays
    /// stable where the direct `λᵏ / k!` quotient would overflow.
    pub fn pmf(&self, k: u64) -> f64 {
        if self.lambda == 0.0 {
            return if k == 0 { 1.0 } else { 0.0 };
        }
        if k == 0 {
            return (-self.lambda).exp();
        }
        (k as f64 * self.lambda.ln() - self.lambda - ln_factorial(k)).exp()
    }

    /// CDF: P(X ≤ k), the running PMF total.
    pub fn cdf(&self, k: u64) -> f64 {
        (0..=k).map(|i| self.pmf(i)).sum()
    }
}
