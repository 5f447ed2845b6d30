//! Typed editing of [`PricingInput`] fields.
//!
//! Each editable field has a stable dotted key. Updates return a new record;
//! the receiver is never modified.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::{Currency, PricingInput, TimePeriod};
use crate::error::{CostError, CostResult};
use crate::format::parse_edit_amount;

/// Every editable field of a [`PricingInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputField {
    /// `fixed_costs.rent`
    Rent,
    /// `fixed_costs.rent_frequency`
    RentFrequency,
    /// `fixed_costs.electricity_base`
    ElectricityBase,
    /// `fixed_costs.internet`
    Internet,
    /// `fixed_costs.internet_frequency`
    InternetFrequency,
    /// `fixed_costs.subscriptions`
    Subscriptions,
    /// `fixed_costs.maintenance`
    Maintenance,
    /// `fixed_costs.maintenance_frequency`
    MaintenanceFrequency,
    /// `fixed_costs.depreciation`
    Depreciation,
    /// `fixed_costs.other`
    OtherFixed,
    /// `variable_costs.filament_price_per_unit_mass`
    FilamentPrice,
    /// `variable_costs.part_mass`
    PartMass,
    /// `variable_costs.print_time_hours`
    PrintTime,
    /// `variable_costs.printer_power_watts`
    PrinterPower,
    /// `variable_costs.electricity_price_per_kwh`
    ElectricityPrice,
    /// `variable_costs.failure_rate_percent`
    FailureRate,
    /// `variable_costs.other_materials_cost`
    OtherMaterials,
    /// `labor_costs.prep_time_hours`
    PrepTime,
    /// `labor_costs.post_process_time_hours`
    PostProcessTime,
    /// `labor_costs.hourly_rate`
    HourlyRate,
    /// `profit_settings.desired_margin_percent`
    Margin,
    /// `monthly_printing_hours`
    MonthlyHours,
    /// `exchange_rate`
    ExchangeRate,
    /// `display_currency`
    DisplayCurrency,
}

/// The kind of value a field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A real number.
    Amount,
    /// A billing period.
    Period,
    /// A display currency.
    Currency,
}

impl FieldKind {
    /// Short lower-case name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::Amount => "amount",
            FieldKind::Period => "period",
            FieldKind::Currency => "currency",
        }
    }

    fn describe(self) -> &'static str {
        match self {
            FieldKind::Amount => "a number",
            FieldKind::Period => "a time period",
            FieldKind::Currency => "a currency",
        }
    }
}

/// A value assignable to an [`InputField`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// A real number.
    Amount(f64),
    /// A billing period.
    Period(TimePeriod),
    /// A display currency.
    Currency(Currency),
}

impl FieldValue {
    /// The kind of this value.
    #[must_use]
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Amount(_) => FieldKind::Amount,
            FieldValue::Period(_) => FieldKind::Period,
            FieldValue::Currency(_) => FieldKind::Currency,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Amount(v) => write!(f, "{v}"),
            FieldValue::Period(p) => write!(f, "{}", p.as_str()),
            FieldValue::Currency(c) => write!(f, "{c}"),
        }
    }
}

impl InputField {
    /// All fields, in form order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        use InputField::*;
        &[
            Rent,
            RentFrequency,
            ElectricityBase,
            Internet,
            InternetFrequency,
            Subscriptions,
            Maintenance,
            MaintenanceFrequency,
            Depreciation,
            OtherFixed,
            FilamentPrice,
            PartMass,
            PrintTime,
            PrinterPower,
            ElectricityPrice,
            FailureRate,
            OtherMaterials,
            PrepTime,
            PostProcessTime,
            HourlyRate,
            Margin,
            MonthlyHours,
            ExchangeRate,
            DisplayCurrency,
        ]
    }

    /// Stable dotted key.
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            Self::Rent => "fixed.rent",
            Self::RentFrequency => "fixed.rent_frequency",
            Self::ElectricityBase => "fixed.electricity_base",
            Self::Internet => "fixed.internet",
            Self::InternetFrequency => "fixed.internet_frequency",
            Self::Subscriptions => "fixed.subscriptions",
            Self::Maintenance => "fixed.maintenance",
            Self::MaintenanceFrequency => "fixed.maintenance_frequency",
            Self::Depreciation => "fixed.depreciation",
            Self::OtherFixed => "fixed.other",
            Self::FilamentPrice => "variable.filament_price",
            Self::PartMass => "variable.part_mass",
            Self::PrintTime => "variable.print_time",
            Self::PrinterPower => "variable.printer_watts",
            Self::ElectricityPrice => "variable.electricity_price",
            Self::FailureRate => "variable.failure_rate",
            Self::OtherMaterials => "variable.other_materials",
            Self::PrepTime => "labor.prep_time",
            Self::PostProcessTime => "labor.post_process_time",
            Self::HourlyRate => "labor.hourly_rate",
            Self::Margin => "profit.margin",
            Self::MonthlyHours => "capacity.monthly_hours",
            Self::ExchangeRate => "display.exchange_rate",
            Self::DisplayCurrency => "display.currency",
        }
    }

    /// Path of the field in the legacy form's nested state, e.g.
    /// `variableCosts.partWeight`.
    #[must_use]
    pub fn legacy_path(&self) -> &'static str {
        match self {
            Self::Rent => "fixedCosts.rent",
            Self::RentFrequency => "fixedCosts.rentFrequency",
            Self::ElectricityBase => "fixedCosts.electricityBase",
            Self::Internet => "fixedCosts.internet",
            Self::InternetFrequency => "fixedCosts.internetFrequency",
            Self::Subscriptions => "fixedCosts.subscriptions",
            Self::Maintenance => "fixedCosts.maintenance",
            Self::MaintenanceFrequency => "fixedCosts.maintenanceFrequency",
            Self::Depreciation => "fixedCosts.depreciation",
            Self::OtherFixed => "fixedCosts.other",
            Self::FilamentPrice => "variableCosts.filamentPricePerKg",
            Self::PartMass => "variableCosts.partWeight",
            Self::PrintTime => "variableCosts.printTime",
            Self::PrinterPower => "variableCosts.printerWatts",
            Self::ElectricityPrice => "variableCosts.electricityKwhPrice",
            Self::FailureRate => "variableCosts.failureRate",
            Self::OtherMaterials => "variableCosts.otherMaterials",
            Self::PrepTime => "laborCosts.prepTime",
            Self::PostProcessTime => "laborCosts.postProcessTime",
            Self::HourlyRate => "laborCosts.hourlyRate",
            Self::Margin => "profitSettings.desiredMargin",
            Self::MonthlyHours => "monthlyPrintingHours",
            Self::ExchangeRate => "exchangeRate",
            Self::DisplayCurrency => "currency",
        }
    }

    /// One-line description with the unit.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Rent => "Workshop rent",
            Self::RentFrequency => "Rent billing period (day, month, year)",
            Self::ElectricityBase => "Fixed monthly electricity charge",
            Self::Internet => "Internet / connectivity",
            Self::InternetFrequency => "Internet billing period (day, month, year)",
            Self::Subscriptions => "Software subscriptions per month",
            Self::Maintenance => "Maintenance reserve",
            Self::MaintenanceFrequency => "Maintenance billing period (day, month, year)",
            Self::Depreciation => "Equipment depreciation per month",
            Self::OtherFixed => "Other monthly overhead",
            Self::FilamentPrice => "Filament price per kg",
            Self::PartMass => "Part mass in grams",
            Self::PrintTime => "Print time in hours",
            Self::PrinterPower => "Printer power draw in watts",
            Self::ElectricityPrice => "Energy price per kWh",
            Self::FailureRate => "Failure rate (%)",
            Self::OtherMaterials => "Other supplies per piece",
            Self::PrepTime => "Preparation time in hours",
            Self::PostProcessTime => "Post-processing time in hours",
            Self::HourlyRate => "Labor cost per hour",
            Self::Margin => "Desired profit margin (%)",
            Self::MonthlyHours => "Printing hours available per month",
            Self::ExchangeRate => "Native units per USD",
            Self::DisplayCurrency => "Display currency (COP, USD)",
        }
    }

    /// The kind of value the field accepts.
    #[must_use]
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::RentFrequency | Self::InternetFrequency | Self::MaintenanceFrequency => {
                FieldKind::Period
            }
            Self::DisplayCurrency => FieldKind::Currency,
            _ => FieldKind::Amount,
        }
    }

    /// Looks a field up by dotted key or legacy path (case-insensitive).
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim();
        Self::all().iter().copied().find(|field| {
            field.key().eq_ignore_ascii_case(key) || field.legacy_path().eq_ignore_ascii_case(key)
        })
    }

    /// Parses text into a value of this field's kind.
    ///
    /// Amounts go through [`parse_edit_amount`]: unparseable text becomes 0,
    /// while more than one decimal point is an error.
    ///
    /// [`parse_edit_amount`]: crate::format::parse_edit_amount
    pub fn parse_value(&self, text: &str) -> CostResult<FieldValue> {
        match self.kind() {
            FieldKind::Amount => parse_edit_amount(text).map(FieldValue::Amount),
            FieldKind::Period => text.parse().map(FieldValue::Period),
            FieldKind::Currency => text.parse().map(FieldValue::Currency),
        }
    }
}

impl FromStr for InputField {
    type Err = CostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| CostError::unknown_field(s))
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl PricingInput {
    /// Reads the current value of a field.
    #[must_use]
    pub fn value_of(&self, field: InputField) -> FieldValue {
        let fixed = &self.fixed_costs;
        let variable = &self.variable_costs;
        let labor = &self.labor_costs;
        match field {
            InputField::Rent => FieldValue::Amount(fixed.rent),
            InputField::RentFrequency => FieldValue::Period(fixed.rent_frequency),
            InputField::ElectricityBase => FieldValue::Amount(fixed.electricity_base),
            InputField::Internet => FieldValue::Amount(fixed.internet),
            InputField::InternetFrequency => FieldValue::Period(fixed.internet_frequency),
            InputField::Subscriptions => FieldValue::Amount(fixed.subscriptions),
            InputField::Maintenance => FieldValue::Amount(fixed.maintenance),
            InputField::MaintenanceFrequency => FieldValue::Period(fixed.maintenance_frequency),
            InputField::Depreciation => FieldValue::Amount(fixed.depreciation),
            InputField::OtherFixed => FieldValue::Amount(fixed.other),
            InputField::FilamentPrice => FieldValue::Amount(variable.filament_price_per_unit_mass),
            InputField::PartMass => FieldValue::Amount(variable.part_mass),
            InputField::PrintTime => FieldValue::Amount(variable.print_time_hours),
            InputField::PrinterPower => FieldValue::Amount(variable.printer_power_watts),
            InputField::ElectricityPrice => FieldValue::Amount(variable.electricity_price_per_kwh),
            InputField::FailureRate => FieldValue::Amount(variable.failure_rate_percent),
            InputField::OtherMaterials => FieldValue::Amount(variable.other_materials_cost),
            InputField::PrepTime => FieldValue::Amount(labor.prep_time_hours),
            InputField::PostProcessTime => FieldValue::Amount(labor.post_process_time_hours),
            InputField::HourlyRate => FieldValue::Amount(labor.hourly_rate),
            InputField::Margin => FieldValue::Amount(self.profit_settings.desired_margin_percent),
            InputField::MonthlyHours => FieldValue::Amount(self.monthly_printing_hours),
            InputField::ExchangeRate => FieldValue::Amount(self.exchange_rate),
            InputField::DisplayCurrency => FieldValue::Currency(self.display_currency),
        }
    }

    /// Returns a new record with one field replaced.
    pub fn with_value(&self, field: InputField, value: FieldValue) -> CostResult<PricingInput> {
        let mut next = *self;
        match (field, value) {
            (InputField::RentFrequency, FieldValue::Period(p)) => {
                next.fixed_costs.rent_frequency = p;
            }
            (InputField::InternetFrequency, FieldValue::Period(p)) => {
                next.fixed_costs.internet_frequency = p;
            }
            (InputField::MaintenanceFrequency, FieldValue::Period(p)) => {
                next.fixed_costs.maintenance_frequency = p;
            }
            (InputField::DisplayCurrency, FieldValue::Currency(c)) => next.display_currency = c,
            (field, FieldValue::Amount(v)) if field.kind() == FieldKind::Amount => {
                *next.amount_mut(field)? = v;
            }
            (field, value) => {
                return Err(CostError::FieldType {
                    field: field.key(),
                    expected: field.kind().describe(),
                    actual: value.kind().describe(),
                })
            }
        }
        Ok(next)
    }

    /// Parses `text` for `field` and returns the updated record.
    pub fn with_text(&self, field: InputField, text: &str) -> CostResult<PricingInput> {
        self.with_value(field, field.parse_value(text)?)
    }

    fn amount_mut(&mut self, field: InputField) -> CostResult<&mut f64> {
        let slot = match field {
            InputField::Rent => &mut self.fixed_costs.rent,
            InputField::ElectricityBase => &mut self.fixed_costs.electricity_base,
            InputField::Internet => &mut self.fixed_costs.internet,
            InputField::Subscriptions => &mut self.fixed_costs.subscriptions,
            InputField::Maintenance => &mut self.fixed_costs.maintenance,
            InputField::Depreciation => &mut self.fixed_costs.depreciation,
            InputField::OtherFixed => &mut self.fixed_costs.other,
            InputField::FilamentPrice => &mut self.variable_costs.filament_price_per_unit_mass,
            InputField::PartMass => &mut self.variable_costs.part_mass,
            InputField::PrintTime => &mut self.variable_costs.print_time_hours,
            InputField::PrinterPower => &mut self.variable_costs.printer_power_watts,
            InputField::ElectricityPrice => &mut self.variable_costs.electricity_price_per_kwh,
            InputField::FailureRate => &mut self.variable_costs.failure_rate_percent,
            InputField::OtherMaterials => &mut self.variable_costs.other_materials_cost,
            InputField::PrepTime => &mut self.labor_costs.prep_time_hours,
            InputField::PostProcessTime => &mut self.labor_costs.post_process_time_hours,
            InputField::HourlyRate => &mut self.labor_costs.hourly_rate,
            InputField::Margin => &mut self.profit_settings.desired_margin_percent,
            InputField::MonthlyHours => &mut self.monthly_printing_hours,
            InputField::ExchangeRate => &mut self.exchange_rate,
            InputField::RentFrequency
            | InputField::InternetFrequency
            | InputField::MaintenanceFrequency
            | InputField::DisplayCurrency => {
                return Err(CostError::FieldType {
                    field: field.key(),
                    expected: field.kind().describe(),
                    actual: FieldKind::Amount.describe(),
                })
            }
        };
        Ok(slot)
    }
}
