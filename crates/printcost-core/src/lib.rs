//! # Printcost Core
//!
//! Core types for the Printcost 3D printing cost and pricing calculator.
//!
//! This crate provides the records exchanged with the pricing engine and the
//! presentation helpers around them:
//!
//! - **Types**: the input record, the result record, billing periods, currencies
//! - **Field editing**: typed, key-addressable updates that return new records
//! - **Formatting**: currency and number display, form-input coercion
//!
//! ## Example
//!
//! ```rust
//! use printcost_core::prelude::*;
//!
//! let input = PricingInput::default()
//!     .with_text(InputField::PartMass, "50")
//!     .unwrap();
//! assert_eq!(input.variable_costs.part_mass, 50.0);
//! assert_eq!(TimePeriod::Year.to_monthly(1200.0), 100.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::float_cmp)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::trivially_copy_pass_by_ref)]
#![allow(clippy::enum_glob_use)]
#![allow(clippy::too_many_lines)]

pub mod error;
pub mod format;
pub mod guard;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CostError, CostResult};
    pub use crate::format::{format_currency, format_number, parse_amount, parse_edit_amount};
    pub use crate::guard::nonzero_divisor;
    pub use crate::types::{
        BreakdownComponent, CostBreakdown, Currency, FieldKind, FieldValue, FixedCosts,
        InputField, LaborCosts, PricingInput, PricingResult, ProfitSettings, TimePeriod,
        VariableCosts,
    };
}

// Re-export commonly used types at crate root
pub use error::{CostError, CostResult};
pub use types::{Currency, InputField, PricingInput, PricingResult, TimePeriod};
