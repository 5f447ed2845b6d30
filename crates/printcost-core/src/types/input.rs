//! The pricing input record.
//!
//! Monetary amounts are in the native currency's base unit. Every sub-record
//! deserializes missing fields as zero (or `month` for periods), matching a
//! form that coerces blank entries to 0. Snapshots written by the older
//! form layout use shorter field names; those are accepted as aliases.

use serde::{Deserialize, Serialize};

use super::{Currency, TimePeriod};

/// Recurring overhead, each item stated at its own billing period.
///
/// Items without a period field are already monthly.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FixedCosts {
    /// Workshop rent.
    pub rent: f64,
    /// Billing period of `rent`.
    pub rent_frequency: TimePeriod,
    /// Fixed monthly electricity charge, independent of usage.
    pub electricity_base: f64,
    /// Internet / connectivity.
    pub internet: f64,
    /// Billing period of `internet`.
    pub internet_frequency: TimePeriod,
    /// Software subscriptions (monthly).
    pub subscriptions: f64,
    /// Maintenance reserve.
    pub maintenance: f64,
    /// Billing period of `maintenance`.
    pub maintenance_frequency: TimePeriod,
    /// Equipment depreciation reserve (monthly).
    pub depreciation: f64,
    /// Any other monthly overhead.
    pub other: f64,
}

/// Direct costs of producing one piece.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VariableCosts {
    /// Filament price per kilogram.
    #[serde(alias = "filamentPricePerKg")]
    pub filament_price_per_unit_mass: f64,
    /// Part mass in grams.
    #[serde(alias = "partWeight")]
    pub part_mass: f64,
    /// Machine time for the job, in decimal hours.
    #[serde(alias = "printTime")]
    pub print_time_hours: f64,
    /// Average printer power draw in watts.
    #[serde(alias = "printerWatts")]
    pub printer_power_watts: f64,
    /// Energy price per kWh.
    #[serde(alias = "electricityKwhPrice")]
    pub electricity_price_per_kwh: f64,
    /// Expected waste / rework as a percentage.
    #[serde(alias = "failureRate")]
    pub failure_rate_percent: f64,
    /// Supplies consumed per piece (glue, inserts, packaging, ...).
    #[serde(alias = "otherMaterials")]
    pub other_materials_cost: f64,
}

/// Operator time spent on one piece.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LaborCosts {
    /// Slicing and machine preparation, in hours.
    #[serde(alias = "prepTime")]
    pub prep_time_hours: f64,
    /// Support removal, finishing and packing, in hours.
    #[serde(alias = "postProcessTime")]
    pub post_process_time_hours: f64,
    /// Cost of one operator hour.
    pub hourly_rate: f64,
}

/// Profit target.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfitSettings {
    /// Markup over the fully loaded cost, as a percentage.
    #[serde(alias = "desiredMargin")]
    pub desired_margin_percent: f64,
}

/// Complete input to one pricing computation.
///
/// `Default` is the all-zero record (an empty form); the documented
/// starting values live in the configuration crate.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PricingInput {
    /// Recurring overhead.
    pub fixed_costs: FixedCosts,
    /// Per-piece direct costs.
    pub variable_costs: VariableCosts,
    /// Per-piece operator time.
    pub labor_costs: LaborCosts,
    /// Profit target.
    pub profit_settings: ProfitSettings,
    /// Printing hours available per month; the fixed-cost denominator.
    pub monthly_printing_hours: f64,
    /// Native units per one display unit (e.g. COP per USD).
    pub exchange_rate: f64,
    /// Currency used when formatting results.
    #[serde(alias = "currency")]
    pub display_currency: Currency,
}

impl PricingInput {
    /// Returns a copy with a different display currency.
    #[must_use]
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.display_currency = currency;
        self
    }

    /// Returns a copy with a different exchange rate.
    #[must_use]
    pub fn with_exchange_rate(mut self, rate: f64) -> Self {
        self.exchange_rate = rate;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_camel_case_round_trip_keys() {
        let input = PricingInput::default();
        let value = serde_json::to_value(input).unwrap();
        assert!(value["variableCosts"].get("filamentPricePerUnitMass").is_some());
        assert!(value["fixedCosts"].get("rentFrequency").is_some());
        assert_eq!(value["displayCurrency"], json!("COP"));
    }

    #[test]
    fn test_legacy_snapshot_aliases() {
        let legacy = json!({
            "fixedCosts": { "rent": 300000, "rentFrequency": "month", "internet": 1500, "internetFrequency": "day" },
            "variableCosts": {
                "filamentPricePerKg": 90000, "partWeight": 20, "printTime": 2,
                "printerWatts": 200, "electricityKwhPrice": 800, "failureRate": 5, "otherMaterials": 100
            },
            "laborCosts": { "prepTime": 0.5, "postProcessTime": 1, "hourlyRate": 10000 },
            "profitSettings": { "desiredMargin": 30 },
            "monthlyPrintingHours": 200,
            "exchangeRate": 4000,
            "currency": "USD"
        });
        let input: PricingInput = serde_json::from_value(legacy).unwrap();
        assert_eq!(input.variable_costs.filament_price_per_unit_mass, 90000.0);
        assert_eq!(input.variable_costs.part_mass, 20.0);
        assert_eq!(input.labor_costs.post_process_time_hours, 1.0);
        assert_eq!(input.profit_settings.desired_margin_percent, 30.0);
        assert_eq!(input.fixed_costs.internet_frequency, TimePeriod::Day);
        assert_eq!(input.display_currency, Currency::USD);
    }

    #[test]
    fn test_missing_fields_default() {
        let input: PricingInput =
            serde_json::from_value(json!({ "fixedCosts": { "maintenance": 25000 } })).unwrap();
        assert_eq!(input.fixed_costs.maintenance, 25000.0);
        assert_eq!(input.fixed_costs.maintenance_frequency, TimePeriod::Month);
        assert_eq!(input.monthly_printing_hours, 0.0);
        assert_eq!(input.variable_costs, VariableCosts::default());
    }

    #[test]
    fn test_builders_do_not_touch_costs() {
        let base = PricingInput::default();
        let changed = base.with_currency(Currency::USD).with_exchange_rate(4100.0);
        assert_eq!(changed.display_currency, Currency::USD);
        assert_eq!(changed.exchange_rate, 4100.0);
        assert_eq!(changed.variable_costs, base.variable_costs);
    }
}
