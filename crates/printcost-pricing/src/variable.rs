//! Per-piece direct costs.
//!
//! Filament is priced per kilogram while part mass is entered in grams;
//! energy is drawn in watts but billed per kilowatt-hour.

use serde::Serialize;

use printcost_core::types::{LaborCosts, VariableCosts};

/// Grams in one kilogram (filament price basis to part mass unit).
pub const GRAMS_PER_KILOGRAM: f64 = 1000.0;

/// Watts in one kilowatt.
pub const WATTS_PER_KILOWATT: f64 = 1000.0;

/// Cost of `part_mass_grams` of filament priced per kilogram.
#[inline]
#[must_use]
pub fn filament_cost(price_per_kg: f64, part_mass_grams: f64) -> f64 {
    (price_per_kg / GRAMS_PER_KILOGRAM) * part_mass_grams
}

/// Energy used by a printer drawing `watts` for `hours`, in kWh.
#[inline]
#[must_use]
pub fn electricity_kwh(watts: f64, hours: f64) -> f64 {
    (watts * hours) / WATTS_PER_KILOWATT
}

/// Operator cost of preparation plus post-processing.
#[inline]
#[must_use]
pub fn labor_cost(labor: &LaborCosts) -> f64 {
    (labor.prep_time_hours + labor.post_process_time_hours) * labor.hourly_rate
}

/// Direct costs of one piece.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableCostBreakdown {
    /// Filament consumed.
    pub filament_cost: f64,
    /// Energy drawn, in kWh.
    pub electricity_kwh: f64,
    /// Energy cost.
    pub electricity_cost: f64,
    /// Operator time.
    pub labor_cost: f64,
    /// Other supplies, taken as entered.
    pub other_materials_cost: f64,
}

impl VariableCostBreakdown {
    /// Computes the direct costs of one piece.
    #[must_use]
    pub fn compute(variable: &VariableCosts, labor: &LaborCosts) -> Self {
        let kwh = electricity_kwh(variable.printer_power_watts, variable.print_time_hours);
        Self {
            filament_cost: filament_cost(
                variable.filament_price_per_unit_mass,
                variable.part_mass,
            ),
            electricity_kwh: kwh,
            electricity_cost: kwh * variable.electricity_price_per_kwh,
            labor_cost: labor_cost(labor),
            other_materials_cost: variable.other_materials_cost,
        }
    }
}
