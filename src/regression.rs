//! Simple linear regression on paired observations.
//!
//! Fits both regression lines the classical treatment teaches: Y on X
//! (predicting Y from X) and X on Y, sharing one pass over the centred
//! sums. The two slopes and the correlation coefficient satisfy
//! `r² = b_YX · b_XY`, which doubles as an internal consistency check in
//! the tests.

use crate::stats;

/// A fitted simple linear regression over paired X/Y observations.
///
/// # Examples
/// ```
/// use statkit::regression::LinearRegression;
/// let x = [2.0, 4.0, 6.0, 8.0, 10.0];
/// let y = [4.0, 5.0, 7.0, 8.0, 11.0];
/// let fit = LinearRegression::fit(&x, &y).unwrap();
/// assert!((fit.slope_yx() - 0.85).abs() < 1e-12);
/// assert!((fit.r() - 0.9815).abs() < 1e-3);
/// assert!((fit.predict_y(7.0) - (7.0 + 0.85)).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LinearRegression {
    n: usize,
    mean_x: f64,
    mean_y: f64,
    slope_yx: f64,
    slope_xy: f64,
    r: f64,
}

impl LinearRegression {
    /// Fits both regression lines to the paired series.
    ///
    /// ```text
    /// b_YX = Σ(x−x̄)(y−ȳ) / Σ(x−x̄)²
    /// b_XY = Σ(x−x̄)(y−ȳ) / Σ(y−ȳ)²
    /// ```
    ///
    /// # Returns
    /// - `None` if the series differ in length, have fewer than two
    ///   points, contain NaN/Inf, or either series is constant (a
    ///   vertical or horizontal scatter has no two-way regression).
    pub fn fit(x: &[f64], y: &[f64]) -> Option<Self> {
        let n = x.len();
        if n != y.len() || n < 2 {
            return None;
        }
        if !x.iter().chain(y.iter()).all(|v| v.is_finite()) {
            return None;
        }

        let mean_x = stats::mean(x)?;
        let mean_y = stats::mean(y)?;

        let mut sum_xy = 0.0;
        let mut sum_xx = 0.0;
        let mut sum_yy = 0.0;
        for i in 0..n {
            let dx = x[i] - mean_x;
            let dy = y[i] - mean_y;
            sum_xy += dx * dy;
            sum_xx += dx * dx;
            sum_yy += dy * dy;
        }
        if sum_xx == 0.0 || sum_yy == 0.0 {
            return None;
        }

        Some(Self {
            n,
            mean_x,
            mean_y,
            slope_yx: sum_xy / sum_xx,
            slope_xy: sum_xy / sum_yy,
            r: sum_xy / (sum_xx * sum_yy).sqrt(),
        })
    }

    /// Number of observations the fit is based on.
    pub fn n(&self) -> usize {
        self.n
    }

    pub fn mean_x(&self) -> f64 {
        self.mean_x
    }

    pub fn mean_y(&self) -> f64 {
        self.mean_y
    }

    /// Slope of the Y-on-X regression line (b_YX).
    pub fn slope_yx(&self) -> f64 {
        self.slope_yx
    }

    /// Slope of the X-on-Y regression line (b_XY).
    pub fn slope_xy(&self) -> f64 {
        self.slope_xy
    }

    /// Intercept of the Y-on-X line: `a = ȳ − b_YX · x̄`.
    pub fn intercept(&self) -> f64 {
        self.mean_y - self.slope_yx * self.mean_x
    }

    /// Pearson correlation coefficient of the paired series.
    pub fn r(&self) -> f64 {
        self.r
    }

    /// Coefficient of determination r².
    pub fn r_squared(&self) -> f64 {
        self.r * self.r
    }

    /// Predicts Y at `x` from the Y-on-X line:
    /// `ŷ = ȳ + b_YX (x − x̄)`.
    pub fn predict_y(&self, x: f64) -> f64 {
        self.mean_y + self.slope_yx * (x - self.mean_x)
    }

    /// Predicts X at `y` from the X-on-Y line:
    /// `x̂ = x̄ + b_XY (y − ȳ)`.
    pub fn predict_x(&self, y: f64) -> f64 {
        self.mean_x + self.slope_xy * (y - self.mean_y)
    }
}
