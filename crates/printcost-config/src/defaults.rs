//! The documented starting input.
//!
//! Used whenever no snapshot has been saved yet. Amounts are in COP.

use printcost_core::types::{
    Currency, FixedCosts, LaborCosts, PricingInput, ProfitSettings, TimePeriod, VariableCosts,
};

/// Default monthly printing capacity (8 hours a day, 30 days).
pub const DEFAULT_MONTHLY_PRINTING_HOURS: f64 = 240.0;

/// Default COP per USD.
pub const DEFAULT_EXCHANGE_RATE: f64 = 4100.0;

/// Default profit margin, in percent.
pub const DEFAULT_MARGIN_PERCENT: f64 = 40.0;

/// Default failure rate, in percent.
pub const DEFAULT_FAILURE_RATE_PERCENT: f64 = 10.0;

/// Returns the default input record.
#[must_use]
pub fn default_input() -> PricingInput {
    PricingInput {
        fixed_costs: FixedCosts {
            rent: 0.0,
            rent_frequency: TimePeriod::Month,
            electricity_base: 0.0,
            internet: 45_000.0,
            internet_frequency: TimePeriod::Month,
            subscriptions: 15_000.0,
            maintenance: 25_000.0,
            maintenance_frequency: TimePeriod::Month,
            depreciation: 60_000.0,
            other: 0.0,
        },
        variable_costs: VariableCosts {
            filament_price_per_unit_mass: 105_000.0,
            part_mass: 50.0,
            print_time_hours: 4.0,
            printer_power_watts: 120.0,
            electricity_price_per_kwh: 850.0,
            failure_rate_percent: DEFAULT_FAILURE_RATE_PERCENT,
            other_materials_cost: 2_000.0,
        },
        labor_costs: LaborCosts {
            prep_time_hours: 0.25,
            post_process_time_hours: 0.5,
            hourly_rate: 15_000.0,
        },
        profit_settings: ProfitSettings {
            desired_margin_percent: DEFAULT_MARGIN_PERCENT,
        },
        monthly_printing_hours: DEFAULT_MONTHLY_PRINTING_HOURS,
        exchange_rate: DEFAULT_EXCHANGE_RATE,
        display_currency: Currency::COP,
    }
}
