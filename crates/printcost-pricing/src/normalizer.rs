//! Fixed-cost normalization.
//!
//! Each fixed-cost line item is restated as a monthly amount using the
//! 30-day month of [`TimePeriod::to_monthly`]. Items without a billing
//! period are already monthly and pass through unchanged.

use serde::Serialize;

use printcost_core::types::{FixedCosts, TimePeriod};

/// Converts `amount`, billed every `period`, to its monthly equivalent.
#[inline]
#[must_use]
pub fn normalize(amount: f64, period: TimePeriod) -> f64 {
    period.to_monthly(amount)
}

/// Fixed costs restated per month.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyFixedCosts {
    /// Rent per month.
    pub rent: f64,
    /// Fixed electricity charge per month.
    pub electricity_base: f64,
    /// Connectivity per month.
    pub internet: f64,
    /// Subscriptions per month.
    pub subscriptions: f64,
    /// Maintenance reserve per month.
    pub maintenance: f64,
    /// Depreciation reserve per month.
    pub depreciation: f64,
    /// Other overhead per month.
    pub other: f64,
}

impl MonthlyFixedCosts {
    /// Normalizes every line item of `fixed`.
    #[must_use]
    pub fn from_fixed_costs(fixed: &FixedCosts) -> Self {
        Self {
            rent: normalize(fixed.rent, fixed.rent_frequency),
            electricity_base: fixed.electricity_base,
            internet: normalize(fixed.internet, fixed.internet_frequency),
            subscriptions: fixed.subscriptions,
            maintenance: normalize(fixed.maintenance, fixed.maintenance_frequency),
            depreciation: fixed.depreciation,
            other: fixed.other,
        }
    }

    /// Total monthly fixed cost.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.rent
            + self.electricity_base
            + self.internet
            + self.subscriptions
            + self.maintenance
            + self.depreciation
            + self.other
    }
}

/// Total monthly fixed cost of `fixed`.
#[must_use]
pub fn total_monthly_fixed(fixed: &FixedCosts) -> f64 {
    MonthlyFixedCosts::from_fixed_costs(fixed).total()
}
