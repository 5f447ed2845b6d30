//! Figures derived from a result for display.

use serde::Serialize;

use printcost_core::guard::nonzero_divisor;
use printcost_core::types::{BreakdownComponent, CostBreakdown, PricingInput, PricingResult};

/// Hours in a month of round-the-clock printing.
pub const HOURS_PER_MONTH: f64 = 720.0;

/// Secondary figures shown next to the suggested price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayMetrics {
    /// Fully loaded cost per gram of part mass.
    pub cost_per_gram: f64,
    /// Filament expected to be lost to failed prints, in grams.
    pub wasted_grams: f64,
    /// Monthly fixed cost per printing hour.
    pub hourly_fixed_cost: f64,
    /// Desired profit margin, as entered.
    pub margin_percent: f64,
    /// Monthly printing hours as a share of [`HOURS_PER_MONTH`], capped at 100.
    pub capacity_utilization_percent: f64,
}

impl DisplayMetrics {
    /// Derives the display figures. A part mass of zero divides as 1.
    #[must_use]
    pub fn derive(input: &PricingInput, result: &PricingResult) -> Self {
        let variable = &input.variable_costs;
        Self {
            cost_per_gram: result.total_piece_cost / nonzero_divisor(variable.part_mass),
            wasted_grams: variable.part_mass * (variable.failure_rate_percent / 100.0),
            hourly_fixed_cost: result.hourly_fixed_cost,
            margin_percent: input.profit_settings.desired_margin_percent,
            capacity_utilization_percent: capacity_utilization(input.monthly_printing_hours),
        }
    }
}

/// Percentage of a 24/7 month covered by `monthly_hours`, between 0 and 100.
#[must_use]
pub fn capacity_utilization(monthly_hours: f64) -> f64 {
    (monthly_hours / HOURS_PER_MONTH * 100.0).clamp(0.0, 100.0)
}

/// One slice of the cost chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownShare {
    /// Which component.
    pub component: BreakdownComponent,
    /// Amount in native currency.
    pub amount: f64,
    /// Percentage of the breakdown sum.
    pub percent: f64,
}

/// Each breakdown component as a percentage of their sum, in display order.
///
/// When the sum is zero every share is 0 %. Zero-amount components are kept;
/// use [`non_zero`] to drop them for a chart.
#[must_use]
pub fn breakdown_shares(breakdown: &CostBreakdown) -> Vec<BreakdownShare> {
    let total = breakdown.subtotal();
    breakdown
        .entries()
        .into_iter()
        .map(|(component, amount)| BreakdownShare {
            component,
            amount,
            percent: if total == 0.0 {
                0.0
            } else {
                amount / total * 100.0
            },
        })
        .collect()
}

/// Drops components whose amount is zero.
#[must_use]
pub fn non_zero(shares: Vec<BreakdownShare>) -> Vec<BreakdownShare> {
    shares.into_iter().filter(|share| share.amount != 0.0).collect()
}
