//! Division guard shared by every user-sourced divisor.

/// Returns `value`, or `1.0` when `value` is exactly zero.
///
/// Capacity, part mass and exchange rate can all legitimately be entered
/// as zero; dividing by the substitute keeps results finite. Non-zero
/// values, negatives and NaN pass through untouched.
#[inline]
#[must_use]
pub fn nonzero_divisor(value: f64) -> f64 {
    if value == 0.0 {
        1.0
    } else {
        value
    }
}
