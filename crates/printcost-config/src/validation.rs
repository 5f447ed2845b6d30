//! Validation of input records.
//!
//! The engine accepts any record. These checks only flag entries a user most
//! likely did not mean, so callers can warn about them.

use printcost_core::types::{FieldValue, InputField, PricingInput};

use crate::error::{Validate, ValidationError};

/// Rule name for values that are NaN or infinite.
pub const RULE_FINITE: &str = "finite";

/// Failure rates at or above this value are flagged.
pub const MAX_REASONABLE_FAILURE_RATE: f64 = 100.0;

impl Validate for PricingInput {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        for &field in InputField::all() {
            let FieldValue::Amount(value) = self.value_of(field) else {
                continue;
            };
            if !value.is_finite() {
                errors.push(ValidationError::with_rule(
                    field.key(),
                    "must be a finite number",
                    RULE_FINITE,
                ));
            } else if value < 0.0 {
                errors.push(ValidationError::with_rule(
                    field.key(),
                    "cannot be negative",
                    "non_negative",
                ));
            }
        }

        if self.exchange_rate == 0.0 {
            errors.push(ValidationError::with_rule(
                InputField::ExchangeRate.key(),
                "must be positive; a rate of zero is treated as 1",
                "positive",
            ));
        }

        if self.monthly_printing_hours == 0.0 {
            errors.push(ValidationError::with_rule(
                InputField::MonthlyHours.key(),
                "must be positive; zero hours is treated as 1",
                "positive",
            ));
        }

        if self.variable_costs.failure_rate_percent >= MAX_REASONABLE_FAILURE_RATE {
            errors.push(ValidationError::with_rule(
                InputField::FailureRate.key(),
                "must be below 100%",
                "range",
            ));
        }

        errors
    }
}
