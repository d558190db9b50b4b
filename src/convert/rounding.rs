//! Named numeric policies shared by the conversion paths
//!
//! DEC -> MMS truncates while DEG -> MMS rounds. Both policies are kept
//! deliberately and each path calls the one it uses by name.

/// Truncate toward zero, as `parseInt` does on a scaled product
///
/// Values outside the `i64` range saturate.
pub fn truncate_to_int(value: f64) -> i64 {
    value.trunc() as i64
}

/// Round to the nearest integer, halves away from zero
pub fn round_to_int(value: f64) -> i64 {
    value.round() as i64
}

/// Round to a fixed number of fractional digits, halves away from zero
pub fn round_to_places(value: f64, places: usize) -> f64 {
    let factor = 10f64.powi(places as i32);
    let rounded = (value * factor).round() / factor;
    if rounded.is_finite() {
        rounded
    } else {
        value
    }
}

/// Format with exactly `places` fractional digits after rounding
///
/// An exact zero is printed unsigned; tiny negatives keep their sign.
pub fn format_fixed(value: f64, places: usize) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{:.*}", places, round_to_places(value, places))
}
