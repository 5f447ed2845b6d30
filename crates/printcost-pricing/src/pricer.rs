//! Cost aggregation and margin application.
//!
//! The stages run in a fixed order, each compounding on the previous one:
//!
//! 1. `subtotal = filament + electricity + labor + overhead + other materials`
//! 2. `total_piece_cost = subtotal * (1 + failure_rate / 100)`
//! 3. `suggested_price = total_piece_cost * (1 + margin / 100)`
//! 4. `total_profit = suggested_price - total_piece_cost`
//!
//! The failure-rate buffer inflates the whole subtotal, including labor and
//! absorbed overhead, not only material.

use printcost_core::types::{CostBreakdown, PricingInput, PricingResult};

use crate::allocator::{hourly_fixed_cost, overhead_per_piece};
use crate::normalizer::total_monthly_fixed;
use crate::variable::VariableCostBreakdown;

/// Multiplier for a percentage markup: `1 + percent / 100`.
#[inline]
#[must_use]
pub fn markup_factor(percent: f64) -> f64 {
    1.0 + percent / 100.0
}

/// Inflates a subtotal by the expected failure rate.
#[inline]
#[must_use]
pub fn apply_failure_buffer(subtotal: f64, failure_rate_percent: f64) -> f64 {
    subtotal * markup_factor(failure_rate_percent)
}

/// Applies the desired profit margin to a fully loaded cost.
#[inline]
#[must_use]
pub fn apply_margin(total_piece_cost: f64, desired_margin_percent: f64) -> f64 {
    total_piece_cost * markup_factor(desired_margin_percent)
}

/// Computes the suggested price and cost breakdown of one piece.
///
/// Total and pure: any input produces a result, and equal inputs produce
/// bit-identical results. Negative values are not rejected; non-finite
/// values propagate. The only guard is on zero monthly capacity.
///
/// # Example
///
/// ```rust
/// use printcost_core::PricingInput;
/// use printcost_pricing::compute_pricing;
///
/// let mut input = PricingInput::default();
/// input.variable_costs.other_materials_cost = 100.0;
/// input.variable_costs.failure_rate_percent = 10.0;
/// input.profit_settings.desired_margin_percent = 50.0;
///
/// let result = compute_pricing(&input);
/// assert!((result.total_piece_cost - 110.0).abs() < 1e-9);
/// assert!((result.suggested_price - 165.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn compute_pricing(input: &PricingInput) -> PricingResult {
    let variable = &input.variable_costs;

    let hourly = hourly_fixed_cost(
        total_monthly_fixed(&input.fixed_costs),
        input.monthly_printing_hours,
    );
    let direct = VariableCostBreakdown::compute(variable, &input.labor_costs);
    let overhead = overhead_per_piece(hourly, variable.print_time_hours);

    let subtotal = direct.filament_cost
        + direct.electricity_cost
        + direct.labor_cost
        + overhead
        + direct.other_materials_cost;

    let total_piece_cost = apply_failure_buffer(subtotal, variable.failure_rate_percent);
    let suggested_price = apply_margin(
        total_piece_cost,
        input.profit_settings.desired_margin_percent,
    );

    PricingResult {
        hourly_fixed_cost: hourly,
        filament_cost: direct.filament_cost,
        electricity_cost: direct.electricity_cost,
        labor_cost: direct.labor_cost,
        total_piece_cost,
        suggested_price,
        total_profit: suggested_price - total_piece_cost,
        breakdown: CostBreakdown {
            fixed: overhead,
            filament: direct.filament_cost,
            electricity: direct.electricity_cost,
            labor: direct.labor_cost,
            materials: direct.other_materials_cost,
        },
    }
}

/// A pricing model.
///
/// Implementations must be pure: the result depends only on `input`.
pub trait CostModel: Send + Sync {
    /// Short identifier for logs and output.
    fn name(&self) -> &'static str;

    /// Prices one piece.
    fn price(&self, input: &PricingInput) -> PricingResult;
}

/// The absorption-costing model: overhead per machine hour, failure buffer
/// on the whole subtotal, margin on top.
#[derive(Debug, Clone, Copy, Default)]
pub struct PieceCostPricer;

impl PieceCostPricer {
    /// Creates the pricer.
    pub fn new() -> Self {
        Self
    }
}

impl CostModel for PieceCostPricer {
    fn name(&self) -> &'static str {
        "absorption"
    }

    fn price(&self, input: &PricingInput) -> PricingResult {
        compute_pricing(input)
    }
}

/// Recomputes only when the input differs from the last one seen.
///
/// Inputs containing NaN never compare equal, so they are always
/// recomputed; the result is the same either way.
#[derive(Debug)]
pub struct MemoizedPricer<M: CostModel> {
    model: M,
    last: Option<(PricingInput, PricingResult)>,
    computations: u64,
}

impl<M: CostModel> MemoizedPricer<M> {
    /// Wraps a model.
    pub fn new(model: M) -> Self {
        Self {
            model,
            last: None,
            computations: 0,
        }
    }

    /// Returns the result for `input`, reusing the previous one if the
    /// input is unchanged.
    pub fn price(&mut self, input: &PricingInput) -> PricingResult {
        if let Some((last_input, last_result)) = &self.last {
            if last_input == input {
                return *last_result;
            }
        }
        let result = self.model.price(input);
        self.computations += 1;
        self.last = Some((*input, result));
        result
    }

    /// Number of times the wrapped model actually ran.
    pub fn computations(&self) -> u64 {
        self.computations
    }

    /// The wrapped model.
    pub fn model(&self) -> &M {
        &self.model
    }
}
