//! Absorption of fixed costs into machine hours.

use printcost_core::guard::nonzero_divisor;

/// Monthly fixed cost per available printing hour.
///
/// A capacity of exactly zero is treated as one hour, so the result stays
/// finite (large, but never infinite or NaN).
#[inline]
#[must_use]
pub fn hourly_fixed_cost(total_monthly_fixed: f64, monthly_printing_hours: f64) -> f64 {
    total_monthly_fixed / nonzero_divisor(monthly_printing_hours)
}

/// Fixed overhead absorbed by one job, proportional to its machine time.
#[inline]
#[must_use]
pub fn overhead_per_piece(hourly_fixed_cost: f64, print_time_hours: f64) -> f64 {
    hourly_fixed_cost * print_time_hours
}
