//! Display rounding.
//!
//! Calculators round values for presentation at every step, but chained
//! computations must feed the un-rounded value forward; rounding an
//! intermediate and then computing with it compounds the error. This
//! module exists so callers round exactly once, at the display boundary.

/// Rounds `value` to `decimals` decimal places.
///
/// Multiply-round-divide by `10^decimals`, with `f64::round`'s
/// half-away-from-zero tie behaviour. Non-finite values pass through
/// unchanged.
///
/// # Examples
/// ```
/// use statkit::rounding::round_to;
/// assert_eq!(round_to(3.14159, 2), 3.14);
/// assert_eq!(round_to(2.675, 0), 3.0);
/// assert_eq!(round_to(-2.5, 0), -3.0);
/// ```
pub fn round_to(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let scale = 10_f64.powi(decimals as i32);
    (value * scale).round() / scale
}
