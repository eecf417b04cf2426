//! Price index numbers.
//!
//! Unweighted (simple aggregative, average of price relatives) and
//! weighted (Laspeyres, Paasche, Marshall-Edgeworth, Fisher) index
//! formulas over parallel price and quantity series, plus the value
//! index. All indices are scaled by 100, so the base period reads as
//! exactly 100.
//!
//! Every function returns `None` when the series differ in length, are
//! empty, contain non-finite values, or the denominator aggregate is
//! zero.

/// Rejects mismatched, empty, or non-finite parallel series.
fn validate(series: &[&[f64]]) -> bool {
    let n = series[0].len();
    if n == 0 {
        return false;
    }
    series
        .iter()
        .all(|s| s.len() == n && s.iter().all(|v| v.is_finite()))
}

/// Σ pᵢ·qᵢ over paired slices.
fn weighted_sum(p: &[f64], q: &[f64]) -> f64 {
    p.iter().zip(q).map(|(a, b)| a * b).sum()
}

fn ratio_index(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator == 0.0 {
        None
    } else {
        Some(numerator / denominator * 100.0)
    }
}

/// Simple aggregative index: ΣP₁ / ΣP₀ × 100.
///
/// # Examples
/// ```
/// use statkit::index_numbers::simple_aggregative;
/// let p0 = [10.0, 20.0, 15.0, 30.0, 25.0];
/// let p1 = [12.0, 25.0, 18.0, 35.0, 28.0];
/// assert_eq!(simple_aggregative(&p0, &p1), Some(118.0));
/// ```
pub fn simple_aggregative(p0: &[f64], p1: &[f64]) -> Option<f64> {
    if !validate(&[p0, p1]) {
        return None;
    }
    ratio_index(p1.iter().sum(), p0.iter().sum())
}

/// Average of price relatives: Σ(P₁ᵢ/P₀ᵢ × 100) / n.
///
/// Any zero base price makes the corresponding relative undefined, so
/// the result is `None`.
pub fn average_of_relatives(p0: &[f64], p1: &[f64]) -> Option<f64> {
    if !validate(&[p0, p1]) {
        return None;
    }
    if p0.iter().any(|&p| p == 0.0) {
        return None;
    }
    let total: f64 = p0.iter().zip(p1).map(|(b, c)| c / b * 100.0).sum();
    Some(total / p0.len() as f64)
}

/// Laspeyres price index: ΣP₁Q₀ / ΣP₀Q₀ × 100 (base-period weights).
///
/// # Examples
/// ```
/// use statkit::index_numbers::laspeyres;
/// let p0 = [10.0, 20.0, 15.0, 30.0, 25.0];
/// let q0 = [100.0, 80.0, 120.0, 60.0, 90.0];
/// let p1 = [12.0, 25.0, 18.0, 35.0, 28.0];
/// let index = laspeyres(&p0, &q0, &p1).unwrap();
/// assert!((index - 118.1065).abs() < 1e-3);
/// ```
pub fn laspeyres(p0: &[f64], q0: &[f64], p1: &[f64]) -> Option<f64> {
    if !validate(&[p0, q0, p1]) {
        return None;
    }
    ratio_index(weighted_sum(p1, q0), weighted_sum(p0, q0))
}

/// Paasche price index: ΣP₁Q₁ / ΣP₀Q₁ × 100 (current-period weights).
pub fn paasche(p0: &[f64], p1: &[f64], q1: &[f64]) -> Option<f64> {
    if !validate(&[p0, p1, q1]) {
        return None;
    }
    ratio_index(weighted_sum(p1, q1), weighted_sum(p0, q1))
}

/// Marshall-Edgeworth index: ΣP₁(Q₀+Q₁) / ΣP₀(Q₀+Q₁) × 100.
pub fn marshall_edgeworth(p0: &[f64], q0: &[f64], p1: &[f64], q1: &[f64]) -> Option<f64> {
    if !validate(&[p0, q0, p1, q1]) {
        return None;
    }
    let weights: Vec<f64> = q0.iter().zip(q1).map(|(a, b)| a + b).collect();
    ratio_index(weighted_sum(p1, &weights), weighted_sum(p0, &weights))
}

/// Fisher's ideal index: √(Laspeyres × Paasche).
///
/// Satisfies the time-reversal test (index forward times index backward
/// equals 100²) and the factor-reversal test (price index times quantity
/// index equals the value index times 100).
pub fn fisher(p0: &[f64], q0: &[f64], p1: &[f64], q1: &[f64]) -> Option<f64> {
    let l = laspeyres(p0, q0, p1)?;
    let p = paasche(p0, p1, q1)?;
    Some((l * p).sqrt())
}

/// Value index: ΣP₁Q₁ / ΣP₀Q₀ × 100.
///
/// Measures the change in total expenditure, price and quantity movement
/// combined.
///
/// # Examples
/// ```
/// use statkit::index_numbers::value_index;
/// let p0 = [10.0, 20.0, 15.0, 30.0, 25.0];
/// let q0 = [100.0, 80.0, 120.0, 60.0, 90.0];
/// let p1 = [12.0, 25.0, 18.0, 35.0, 28.0];
/// let q1 = [105.0, 85.0, 115.0, 65.0, 95.0];
/// let v = value_index(&p0, &q0, &p1, &q1).unwrap();
/// assert!((v - 122.9586).abs() < 1e-3);
/// ```
pub fn value_index(p0: &[f64], q0: &[f64], p1: &[f64], q1: &[f64]) -> Option<f64> {
    if !validate(&[p0, q0, p1, q1]) {
        return None;
    }
    ratio_index(weighted_sum(p1, q1), weighted_sum(p0, q0))
}

#[cfg(test)]
mod tests {
    use super::*;

    const P0: [f64; 5] = [10.0, 20.0, 15.0, 30.0, 25.0];
    const Q0: [f64; 5] = [100.0, 80.0, 120.0, 60.0, 90.0];
    const P1: [f64; 5] = [12.0, 25.0, 18.0, 35.0, 28.0];
    const Q1: [f64; 5] = [105.0, 85.0, 115.0, 65.0, 95.0];

    #[test]
    fn test_simple_aggregative() {
        // ΣP1 = 118, ΣP0 = 100
        assert_eq!(simple_aggregative(&P0, &P1), Some(118.0));
    }

    #[test]
    fn test_average_of_relatives() {
        // relatives: 120, 125, 120, 116.667, 112
        let index = average_of_relatives(&P0, &P1).unwrap();
        assert!((index - 118.7333).abs() < 1e-3);
    }

    #[test]
    fn test_average_of_relatives_zero_base_price() {
        assert_eq!(average_of_relatives(&[0.0, 2.0], &[1.0, 3.0]), None);
    }

    #[test]
    fn test_laspeyres() {
        // ΣP1Q0 = 9980, ΣP0Q0 = 8450
        let index = laspeyres(&P0, &Q0, &P1).unwrap();
        assert!((index - 9980.0 / 8450.0 * 100.0).abs() < 1e-10);
        assert!((index - 118.1065).abs() < 1e-3);
    }

    #[test]
    fn test_paasche() {
        // ΣP1Q1 = 10390, ΣP0Q1 = 8800
        let index = paasche(&P0, &P1, &Q1).unwrap();
        assert!((index - 118.0682).abs() < 1e-3);
    }

    #[test]
    fn test_marshall_edgeworth() {
        let index = marshall_edgeworth(&P0, &Q0, &P1, &Q1).unwrap();
        assert!((index - 20370.0 / 17250.0 * 100.0).abs() < 1e-10);
    }

    #[test]
    fn test_fisher_between_laspeyres_and_paasche() {
        let l = laspeyres(&P0, &Q0, &P1).unwrap();
        let p = paasche(&P0, &P1, &Q1).unwrap();
        let f = fisher(&P0, &Q0, &P1, &Q1).unwrap();
        assert!(f >= l.min(p) && f <= l.max(p));
    }

    #[test]
    fn test_value_index() {
        // ΣP1Q1 = 10390, ΣP0Q0 = 8450
        let v = value_index(&P0, &Q0, &P1, &Q1).unwrap();
        assert!((v - 122.9586).abs() < 1e-3);
    }

    #[test]
    fn test_fisher_time_reversal() {
        let forward = fisher(&P0, &Q0, &P1, &Q1).unwrap();
        let backward = fisher(&P1, &Q1, &P0, &Q0).unwrap();
        assert!((forward * backward - 100.0 * 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_fisher_factor_reversal() {
        // Swapping the roles of prices and quantities gives the Fisher
        // quantity index; their product recovers the value index.
        let price = fisher(&P0, &Q0, &P1, &Q1).unwrap();
        let quantity = fisher(&Q0, &P0, &Q1, &P1).unwrap();
        let value = value_index(&P0, &Q0, &P1, &Q1).unwrap();
        assert!((price * quantity / 100.0 - value).abs() < 1e-6);
    }

    #[test]
    fn test_no_price_change_is_100() {
        assert_eq!(laspeyres(&P0, &Q0, &P0), Some(100.0));
        assert_eq!(paasche(&P0, &P0, &Q1), Some(100.0));
        assert_eq!(fisher(&P0, &Q0, &P0, &Q1), Some(100.0));
    }

    #[test]
    fn test_invalid_inputs() {
        assert_eq!(simple_aggregative(&[], &[]), None);
        assert_eq!(laspeyres(&P0, &Q0, &P1[..4]), None);
        assert_eq!(paasche(&[1.0, f64::NAN], &[1.0, 2.0], &[1.0, 1.0]), None);
        assert_eq!(laspeyres(&[1.0], &[0.0], &[2.0]), None); // zero denominator
    }
}
