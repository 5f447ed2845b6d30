//! Cost normalization and pricing engine for 3D printing jobs.
//!
//! Given a [`PricingInput`](printcost_core::PricingInput) the engine produces
//! a [`PricingResult`](printcost_core::PricingResult): the fully loaded cost
//! of one piece, a suggested sale price and a cost breakdown.
//!
//! # Stages
//!
//! The computation is a fixed sequence of arithmetic stages:
//!
//! 1. [`normalizer`]: restate each fixed cost per month (30-day month)
//! 2. [`allocator`]: spread monthly fixed costs over printing hours and
//!    charge the job for its machine time
//! 3. [`variable`]: filament, energy and labor per piece
//! 4. [`pricer`]: sum, apply the failure-rate buffer, then the margin
//!
//! [`metrics`] derives the secondary display figures from a result.
//!
//! The engine is a total, pure function. It performs no validation, no I/O
//! and keeps no state; validation belongs to the caller.
//!
//! # Example
//!
//! ```rust
//! use printcost_core::{InputField, PricingInput};
//! use printcost_pricing::prelude::*;
//!
//! let input = PricingInput::default()
//!     .with_text(InputField::FilamentPrice, "100000")
//!     .and_then(|i| i.with_text(InputField::PartMass, "30"))
//!     .unwrap();
//!
//! let result = PieceCostPricer::new().price(&input);
//! assert_eq!(result.filament_cost, 3000.0);
//! assert_eq!(result.total_profit, result.suggested_price - result.total_piece_cost);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
#![allow(clippy::float_cmp)]

pub mod allocator;
pub mod metrics;
pub mod normalizer;
pub mod pricer;
pub mod variable;

pub use metrics::{
    breakdown_shares, capacity_utilization, non_zero, BreakdownShare, DisplayMetrics,
    HOURS_PER_MONTH,
};
pub use normalizer::MonthlyFixedCosts;
pub use pricer::{compute_pricing, CostModel, MemoizedPricer, PieceCostPricer};
pub use variable::VariableCostBreakdown;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use super::metrics::{breakdown_shares, non_zero, BreakdownShare, DisplayMetrics};
    pub use super::normalizer::{normalize, MonthlyFixedCosts};
    pub use super::pricer::{compute_pricing, CostModel, MemoizedPricer, PieceCostPricer};
    pub use super::variable::VariableCostBreakdown;
}
