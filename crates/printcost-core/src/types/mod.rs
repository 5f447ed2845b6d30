//! Domain types for 3D printing cost calculation.
//!
//! - [`PricingInput`]: the complete input record and its sub-records
//! - [`PricingResult`]: the derived result record with its [`CostBreakdown`]
//! - [`TimePeriod`]: billing period of a fixed-cost line item
//! - [`Currency`]: display currency
//! - [`InputField`]: typed, key-addressable editing of input fields

mod currency;
mod field;
mod input;
mod period;
mod result;

pub use currency::Currency;
pub use field::{FieldKind, FieldValue, InputField};
pub use input::{FixedCosts, LaborCosts, PricingInput, ProfitSettings, VariableCosts};
pub use period::{TimePeriod, DAYS_PER_MONTH, MONTHS_PER_YEAR};
pub use result::{BreakdownComponent, CostBreakdown, PricingResult};
