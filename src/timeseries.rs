//! Time series decomposition.
//!
//! Trend fitting by semi-averages or least squares, centered moving
//! averages, ratio-to-moving-average seasonal indices, and seasonally
//! adjusted forecasts. Periods are 1-based throughout: the first
//! observation sits at period 1, and a forecast for the step after a
//! series of length n is evaluated at period n + 1.

use crate::stats;

/// A fitted linear trend `Y = intercept + slope · period`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendLine {
    pub intercept: f64,
    pub slope: f64,
}

impl TrendLine {
    /// Trend value at a 1-based period.
    pub fn value_at(&self, period: usize) -> f64 {
        self.intercept + self.slope * period as f64
    }
}

fn validate(values: &[f64], min_len: usize) -> bool {
    values.len() >= min_len && values.iter().all(|v| v.is_finite())
}

/// Fits a trend line by ordinary least squares on periods 1..=n.
///
/// # Returns
/// - `None` for fewer than two observations or non-finite input.
///
/// # Examples
/// ```
/// use statkit::timeseries::least_squares_trend;
/// // A perfectly linear series recovers its own line.
/// let trend = least_squares_trend(&[3.0, 5.0, 7.0, 9.0]).unwrap();
/// assert!((trend.slope - 2.0).abs() < 1e-12);
/// assert!((trend.intercept - 1.0).abs() < 1e-12);
/// ```
pub fn least_squares_trend(values: &[f64]) -> Option<TrendLine> {
    if !validate(values, 2) {
        return None;
    }
    let n = values.len();
    let x_mean = (n + 1) as f64 / 2.0;
    let y_mean = stats::mean(values)?;

    let mut sum_xy = 0.0;
    let mut sum_xx = 0.0;
    for (i, &y) in values.iter().enumerate() {
        let dx = (i + 1) as f64 - x_mean;
        sum_xy += dx * (y - y_mean);
        sum_xx += dx * dx;
    }

    let slope = sum_xy / sum_xx;
    Some(TrendLine {
        intercept: y_mean - slope * x_mean,
        slope,
    })
}

/// Fits a trend line by the method of semi-averages.
///
/// The series is split at `mid = n / 2`; the slope is the difference of
/// the half-means divided by `mid`, and the line is anchored so that it
/// passes through the first half's mean at that half's centre.
///
/// # Returns
/// - `None` for fewer than two observations or non-finite input.
pub fn semi_averages_trend(values: &[f64]) -> Option<TrendLine> {
    if !validate(values, 2) {
        return None;
    }
    let mid = values.len() / 2;
    let first_mean = stats::mean(&values[..mid])?;
    let second_mean = stats::mean(&values[mid..])?;

    let slope = (second_mean - first_mean) / mid as f64;
    // The first half's centre in 1-based periods is (mid + 1) / 2.
    let intercept = first_mean - slope * (mid + 1) as f64 / 2.0;
    Some(TrendLine { intercept, slope })
}

/// Centered moving average of the given odd or even `window`.
///
/// Positions the window cannot cover (the first and last `window / 2`
/// entries) are `None`.
///
/// # Returns
/// - `None` (outer) if the window is zero, exceeds the series length, or
///   the input is non-finite.
pub fn centered_moving_average(values: &[f64], window: usize) -> Option<Vec<Option<f64>>> {
    if window == 0 || window > values.len() || !validate(values, 1) {
        return None;
    }
    let n = values.len();
    let margin = window / 2;
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        if i < margin || i + margin >= n {
            out.push(None);
        } else {
            let start = i - margin;
            out.push(stats::mean(&values[start..start + window]));
        }
    }
    Some(out)
}

/// Ratio-to-moving-average seasonal indices, scaled by 100.
///
/// Where the moving average is undefined (window edges) or zero, the
/// index defaults to the neutral 100.
pub fn seasonal_indices(values: &[f64], moving_average: &[Option<f64>]) -> Option<Vec<f64>> {
    if values.len() != moving_average.len() || !validate(values, 1) {
        return None;
    }
    let indices = values
        .iter()
        .zip(moving_average)
        .map(|(&v, ma)| match ma {
            Some(m) if *m != 0.0 => v / m * 100.0,
            _ => 100.0,
        })
        .collect();
    Some(indices)
}

/// Removes the seasonal component: `values[i] / (indices[i] / 100)`.
///
/// # Returns
/// - `None` on length mismatch or a zero index.
pub fn deseasonalize(values: &[f64], indices: &[f64]) -> Option<Vec<f64>> {
    if values.len() != indices.len() || !validate(values, 1) {
        return None;
    }
    if indices.iter().any(|&s| s == 0.0 || !s.is_finite()) {
        return None;
    }
    Some(
        values
            .iter()
            .zip(indices)
            .map(|(&v, &s)| v / (s / 100.0))
            .collect(),
    )
}

/// Seasonally adjusted trend forecasts for the `periods` steps after a
/// series of length `n`.
///
/// Step `i` extrapolates the trend to period `n + i` and applies the
/// seasonal index for that step's position in a quarterly cycle; a
/// missing index is treated as the neutral 100.
pub fn forecast(trend: &TrendLine, seasonal: &[f64], n: usize, periods: usize) -> Vec<f64> {
    (1..=periods)
        .map(|i| {
            let index = seasonal.get(i % 4).copied().unwrap_or(100.0);
            trend.value_at(n + i) * index / 100.0
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_least_squares_on_line() {
        let values = [3.0, 5.0, 7.0, 9.0, 11.0];
        let trend = least_squares_trend(&values).unwrap();
        assert!((trend.slope - 2.0).abs() < 1e-12);
        assert!((trend.intercept - 1.0).abs() < 1e-12);
        for (i, &v) in values.iter().enumerate() {
            assert!((trend.value_at(i + 1) - v).abs() < 1e-12);
        }
    }

    #[test]
    fn test_least_squares_constant_series() {
        let trend = least_squares_trend(&[5.0, 5.0, 5.0, 5.0]).unwrap();
        assert_eq!(trend.slope, 0.0);
        assert!((trend.value_at(10) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_semi_averages_on_line() {
        // Linear data: both halves lie on the line, so the fit is exact.
        let values = [3.0, 5.0, 7.0, 9.0, 11.0, 13.0];
        let trend = semi_averages_trend(&values).unwrap();
        assert!((trend.slope - 2.0).abs() < 1e-12);
        assert!((trend.value_at(1) - 3.0).abs() < 1e-12);
        assert!((trend.value_at(6) - 13.0).abs() < 1e-12);
    }

    #[test]
    fn test_semi_averages_known() {
        // mid = 2, half means 15 and 27, slope = 6,
        // line through period 1.5 at value 15.
        let values = [12.0, 18.0, 24.0, 30.0];
        let trend = semi_averages_trend(&values).unwrap();
        assert!((trend.slope - 6.0).abs() < 1e-12);
        assert!((trend.value_at(1) - 12.0).abs() < 1e-12);
        assert!((trend.value_at(2) - 18.0).abs() < 1e-12);
    }

    #[test]
    fn test_trend_invalid_inputs() {
        assert!(least_squares_trend(&[]).is_none());
        assert!(least_squares_trend(&[1.0]).is_none());
        assert!(least_squares_trend(&[1.0, f64::NAN, 2.0]).is_none());
        assert!(semi_averages_trend(&[1.0]).is_none());
    }

    #[test]
    fn test_moving_average_window_three() {
        let values = [2.0, 4.0, 6.0, 8.0, 10.0];
        let ma = centered_moving_average(&values, 3).unwrap();
        assert_eq!(
            ma,
            vec![None, Some(4.0), Some(6.0), Some(8.0), None]
        );
    }

    #[test]
    fn test_moving_average_window_five() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
        let ma = centered_moving_average(&values, 5).unwrap();
        assert_eq!(ma[0], None);
        assert_eq!(ma[1], None);
        assert_eq!(ma[2], Some(3.0));
        assert_eq!(ma[4], Some(5.0));
        assert_eq!(ma[5], None);
    }

    #[test]
    fn test_moving_average_invalid_window() {
        let values = [1.0, 2.0, 3.0];
        assert!(centered_moving_average(&values, 0).is_none());
        assert!(centered_moving_average(&values, 4).is_none());
    }

    #[test]
    fn test_seasonal_indices() {
        let values = [2.0, 4.0, 6.0, 8.0, 10.0];
        let ma = centered_moving_average(&values, 3).unwrap();
        let indices = seasonal_indices(&values, &ma).unwrap();
        // Edges default to 100; interior ratios are value/MA × 100.
        assert_eq!(indices[0], 100.0);
        assert_eq!(indices[4], 100.0);
        assert!((indices[1] - 100.0).abs() < 1e-12);
        assert!((indices[2] - 100.0).abs() < 1e-12);
    }

    #[test]
    fn test_seasonal_indices_detect_spike() {
        let values = [10.0, 10.0, 20.0, 10.0, 10.0];
        let ma = centered_moving_average(&values, 5).unwrap();
        let indices = seasonal_indices(&values, &ma).unwrap();
        // Middle observation is 20 against a moving average of 12.
        assert!((indices[2] - 20.0 / 12.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_deseasonalize_inverts_indices() {
        let values = [110.0, 90.0, 105.0, 95.0];
        let indices = [110.0, 90.0, 105.0, 95.0];
        let adjusted = deseasonalize(&values, &indices).unwrap();
        for v in adjusted {
            assert!((v - 100.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_deseasonalize_rejects_zero_index() {
        assert!(deseasonalize(&[1.0, 2.0], &[100.0, 0.0]).is_none());
        assert!(deseasonalize(&[1.0], &[100.0, 50.0]).is_none());
    }

    #[test]
    fn test_forecast_neutral_seasonality() {
        let trend = TrendLine {
            intercept: 1.0,
            slope: 2.0,
        };
        let seasonal = [100.0; 8];
        let forecasts = forecast(&trend, &seasonal, 8, 3);
        assert_eq!(forecasts.len(), 3);
        assert!((forecasts[0] - trend.value_at(9)).abs() < 1e-12);
        assert!((forecasts[2] - trend.value_at(11)).abs() < 1e-12);
    }

    #[test]
    fn test_forecast_applies_quarterly_cycle() {
        let trend = TrendLine {
            intercept: 100.0,
            slope: 0.0,
        };
        let seasonal = [100.0, 120.0, 80.0, 100.0];
        let forecasts = forecast(&trend, &seasonal, 4, 4);
        // Steps 1..4 read the cycle at positions 1, 2, 3, 0.
        assert!((forecasts[0] - 120.0).abs() < 1e-12);
        assert!((forecasts[1] - 80.0).abs() < 1e-12);
        assert!((forecasts[2] - 100.0).abs() < 1e-12);
        assert!((forecasts[3] - 100.0).abs() < 1e-12);
    }

    #[test]
    fn test_forecast_missing_indices_default_neutral() {
        let trend = TrendLine {
            intercept: 10.0,
            slope: 0.0,
        };
        let forecasts = forecast(&trend, &[], 4, 2);
        assert_eq!(forecasts, vec![10.0, 10.0]);
    }
}
