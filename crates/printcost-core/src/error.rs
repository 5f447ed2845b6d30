//! Error types for the Printcost library.
//!
//! The pricing engine itself is total and never fails. These errors cover
//! the surrounding operations: typed field updates and value parsing.

use thiserror::Error;

/// A specialized Result type for Printcost operations.
pub type CostResult<T> = Result<T, CostError>;

/// The main error type for Printcost operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CostError {
    /// The field key does not name any editable input field.
    #[error("Unknown field: {key}")]
    UnknownField {
        /// The key that was not recognised.
        key: String,
    },

    /// A value of the wrong kind was assigned to a field.
    #[error("Field {field} expects {expected}, got {actual}")]
    FieldType {
        /// Dotted key of the field.
        field: &'static str,
        /// Kind of value the field accepts.
        expected: &'static str,
        /// Kind of value that was supplied.
        actual: &'static str,
    },

    /// A time period string could not be parsed.
    #[error("Invalid time period: {value}. Use day, month, or year.")]
    InvalidPeriod {
        /// The unparseable text.
        value: String,
    },

    /// Numeric text has more than one decimal point.
    #[error("Malformed number: {text}. Use at most one decimal point.")]
    MalformedNumber {
        /// The rejected text.
        text: String,
    },

    /// A currency code is not supported.
    #[error("Unsupported currency: {code}. Use COP or USD.")]
    UnsupportedCurrency {
        /// The unsupported code.
        code: String,
    },
}

impl CostError {
    /// Creates an unknown field error.
    #[must_use]
    pub fn unknown_field(key: impl Into<String>) -> Self {
        Self::UnknownField { key: key.into() }
    }

    /// Creates an invalid period error.
    #[must_use]
    pub fn invalid_period(value: impl Into<String>) -> Self {
        Self::InvalidPeriod {
            value: value.into(),
        }
    }

    /// Creates a malformed number error.
    #[must_use]
    pub fn malformed_number(text: impl Into<String>) -> Self {
        Self::MalformedNumber { text: text.into() }
    }

    /// Creates an unsupported currency error.
    #[must_use]
    pub fn unsupported_currency(code: impl Into<String>) -> Self {
        Self::UnsupportedCurrency { code: code.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CostError::unknown_field("variable.colour");
        assert!(err.to_string().contains("variable.colour"));
    }

    #[test]
    fn test_field_type_error() {
        let err = CostError::FieldType {
            field: "fixed.rent",
            expected: "a number",
            actual: "a time period",
        };
        assert_eq!(
            err.to_string(),
            "Field fixed.rent expects a number, got a time period"
        );
    }
}
