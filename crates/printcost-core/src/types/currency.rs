//! Display currencies.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CostError;

/// ISO 4217 currencies the calculator can display.
///
/// All pricing arithmetic happens in the native currency ([`Currency::COP`]);
/// other currencies are a display conversion through the exchange rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    /// Colombian Peso
    #[default]
    COP,
    /// United States Dollar
    USD,
}

impl Currency {
    /// The currency every cost input is stated in.
    pub const NATIVE: Currency = Currency::COP;

    /// Returns the ISO 4217 3-letter code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Currency::COP => "COP",
            Currency::USD => "USD",
        }
    }

    /// Returns the currency symbol.
    #[must_use]
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::COP => "COP",
            Currency::USD => "$",
        }
    }

    /// Returns the full currency name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Currency::COP => "Colombian Peso",
            Currency::USD => "United States Dollar",
        }
    }

    /// Returns the number of decimal places shown for the currency.
    #[must_use]
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::COP => 0,
            Currency::USD => 2,
        }
    }

    /// Returns true if amounts need no conversion for display.
    #[must_use]
    pub fn is_native(&self) -> bool {
        *self == Self::NATIVE
    }

    /// Parses a currency from a string code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "COP" => Some(Currency::COP),
            "USD" => Some(Currency::USD),
            _ => None,
        }
    }
}

impl FromStr for Currency {
    type Err = CostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| CostError::unsupported_currency(s))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_code() {
        assert_eq!(Currency::COP.code(), "COP");
        assert_eq!(Currency::USD.code(), "USD");
    }

    #[test]
    fn test_decimal_places() {
        assert_eq!(Currency::COP.decimal_places(), 0);
        assert_eq!(Currency::USD.decimal_places(), 2);
    }

    #[test]
    fn test_from_code() {
        assert_eq!(Currency::from_code("usd"), Some(Currency::USD));
        assert_eq!(Currency::from_code("COP"), Some(Currency::COP));
        assert_eq!(Currency::from_code("EUR"), None);
        assert!("".parse::<Currency>().is_err());
    }

    #[test]
    fn test_native() {
        assert_eq!(Currency::default(), Currency::NATIVE);
        assert!(Currency::COP.is_native());
        assert!(!Currency::USD.is_native());
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&Currency::USD).unwrap();
        assert_eq!(json, "\"USD\"");
        let parsed: Currency = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Currency::USD);
    }
}
