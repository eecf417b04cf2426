//! Descriptive statistics over in-memory samples.
//!
//! A "sample" here is an ordered slice of real numbers, typically tens of
//! elements entered through a calculator form. Order only matters for the
//! paired-series functions ([`covariance`], [`correlation`]), where the
//! two slices must have equal length.
//!
//! Malformed input (empty slices, NaN/Inf, mismatched lengths, degenerate
//! constant series) yields `None` rather than a sentinel zero, so callers
//! can surface a validation message instead of silently displaying a
//! wrong-looking result.
//!
//! # Algorithms
//!
//! - **Sum/Mean**: Neumaier compensated summation.
//! - **Variance**: Welford's online algorithm, avoiding the catastrophic
//!   cancellation of the naive `E[X²] − (E[X])²` form.
//!   Reference: Welford (1962), *Technometrics* 4(3).

/// Total of all values using Neumaier compensated summation.
///
/// Returns `0.0` for empty input. Non-finite values propagate into the
/// result as they would with a plain sum.
///
/// # Examples
/// ```
/// use statkit::stats::sum;
/// assert_eq!(sum(&[1.0, 2.0, 3.0]), 6.0);
/// assert_eq!(sum(&[]), 0.0);
/// ```
pub fn sum(values: &[f64]) -> f64 {
    let mut total = 0.0_f64;
    let mut c = 0.0_f64;
    for &x in values {
        let t = total + x;
        if total.abs() >= x.abs() {
            c += (total - t) + x;
        } else {
            c += (x - t) + total;
        }
        total = t;
    }
    total + c
}

/// Arithmetic mean.
///
/// # Returns
/// - `None` if `values` is empty or contains any NaN/Inf.
///
/// # Examples
/// ```
/// use statkit::stats::mean;
/// assert_eq!(mean(&[2.0, 4.0, 6.0, 8.0, 10.0]), Some(6.0));
/// assert_eq!(mean(&[]), None);
/// ```
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() || !values.iter().all(|x| x.is_finite()) {
        return None;
    }
    Some(sum(values) / values.len() as f64)
}

/// Sample variance (Bessel-corrected, divisor n − 1).
///
/// # Returns
/// - `None` if `values.len() < 2` or contains NaN/Inf.
///
/// # Examples
/// ```
/// use statkit::stats::variance;
/// let v = [2.0, 4.0, 6.0, 8.0, 10.0];
/// assert!((variance(&v).unwrap() - 10.0).abs() < 1e-12);
/// assert_eq!(variance(&[7.0]), None);
/// ```
pub fn variance(values: &[f64]) -> Option<f64> {
    if values.len() < 2 || !values.iter().all(|x| x.is_finite()) {
        return None;
    }
    let mut acc = WelfordAccumulator::new();
    for &x in values {
        acc.update(x);
    }
    acc.sample_variance()
}

/// Population variance (divisor n).
///
/// # Returns
/// - `None` if `values` is empty or contains NaN/Inf.
pub fn population_variance(values: &[f64]) -> Option<f64> {
    if values.is_empty() || !values.iter().all(|x| x.is_finite()) {
        return None;
    }
    let mut acc = WelfordAccumulator::new();
    for &x in values {
        acc.update(x);
    }
    acc.population_variance()
}

/// Sample standard deviation, `sqrt(variance(values))`.
///
/// # Returns
/// - `None` if `values.len() < 2` or contains NaN/Inf.
pub fn std_dev(values: &[f64]) -> Option<f64> {
    variance(values).map(f64::sqrt)
}

/// Population standard deviation, `sqrt(population_variance(values))`.
pub fn population_std_dev(values: &[f64]) -> Option<f64> {
    population_variance(values).map(f64::sqrt)
}

/// Sample covariance between two equal-length series.
///
/// ```text
/// Cov(X, Y) = Σ(xᵢ − x̄)(yᵢ − ȳ) / (n − 1)
/// ```
///
/// # Returns
/// - `None` if `x.len() != y.len()`, `n < 2`, or either series contains
///   NaN/Inf.
///
/// # Examples
/// ```
/// use statkit::stats::covariance;
/// let x = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let y = [2.0, 4.0, 6.0, 8.0, 10.0];
/// assert!((covariance(&x, &y).unwrap() - 5.0).abs() < 1e-14);
/// ```
pub fn covariance(x: &[f64], y: &[f64]) -> Option<f64> {
    let n = x.len();
    if n != y.len() || n < 2 {
        return None;
    }
    if !x.iter().chain(y.iter()).all(|v| v.is_finite()) {
        return None;
    }
    let nf = n as f64;
    let mean_x = sum(x) / nf;
    let mean_y = sum(y) / nf;
    let mut acc = 0.0;
    for i in 0..n {
        acc += (x[i] - mean_x) * (y[i] - mean_y);
    }
    Some(acc / (nf - 1.0))
}

/// Pearson correlation coefficient between two equal-length series.
///
/// ```text
/// r = Cov(X, Y) / (s_X · s_Y)
/// ```
///
/// # Returns
/// - `None` if the inputs fail the [`covariance`] preconditions, or if
///   either series is constant (zero standard deviation). A constant
///   series has no statistically meaningful correlation, so the
///   degenerate case surfaces as `None` rather than a zero that could
///   be mistaken for "uncorrelated".
///
/// # Examples
/// ```
/// use statkit::stats::correlation;
/// let x = [2.0, 4.0, 6.0, 8.0, 10.0];
/// let y = [4.0, 5.0, 7.0, 8.0, 11.0];
/// let r = correlation(&x, &y).unwrap();
/// assert!((r - 0.9815).abs() < 1e-3);
/// assert_eq!(correlation(&x, &[5.0; 5]), None); // constant series
/// ```
pub fn correlation(x: &[f64], y: &[f64]) -> Option<f64> {
    let cov = covariance(x, y)?;
    let sx = std_dev(x)?;
    let sy = std_dev(y)?;
    if sx == 0.0 || sy == 0.0 {
        return None;
    }
    Some(cov / (sx * sy))
}

// ---------------------------------------------------------------------------
// Welford online accumulator
// ---------------------------------------------------------------------------

/// Streaming accumulator for mean and variance.
///
/// Backs the batch [`variance`] functions and is usable directly when
/// values arrive one at a time (e.g. running averages in a simulation).
///
/// Reference: Welford (1962), *Technometrics* 4(3), pp. 419-420.
///
/// # Examples
/// ```
/// use statkit::stats::WelfordAccumulator;
/// let mut acc = WelfordAccumulator::new();
/// for &x in &[2.0, 4.0, 6.0, 8.0, 10.0] {
///     acc.update(x);
/// }
/// assert_eq!(acc.mean(), Some(6.0));
/// assert!((acc.sample_variance().unwrap() - 10.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Default)]
pub struct WelfordAccumulator {
    count: u64,
    mean_acc: f64,
    m2: f64,
}

impl WelfordAccumulator {
    /// Creates a new empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds a new sample into the accumulator.
    pub fn update(&mut self, value: f64) {
        self.count += 1;
        if self.count == 1 {
            // First sample: mean = value, M2 stays zero.
            self.mean_acc = value;
            return;
        }
        let delta = value - self.mean_acc;
        self.mean_acc += delta / self.count as f64;
        self.m2 += delta * (value - self.mean_acc);
    }

    /// Number of samples seen so far.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Running mean, or `None` before the first sample.
    pub fn mean(&self) -> Option<f64> {
        (self.count > 0).then_some(self.mean_acc)
    }

    /// Sample variance (n − 1 denominator), or `None` for fewer than
    /// two samples.
    pub fn sample_variance(&self) -> Option<f64> {
        (self.count >= 2).then(|| self.m2 / (self.count - 1) as f64)
    }

    /// Population variance (n denominator), or `None` before the first
    /// sample.
    pub fn population_variance(&self) -> Option<f64> {
        (self.count > 0).then(|| self.m2 / self.count as f64)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
