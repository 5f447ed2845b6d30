//! Billing period for recurring fixed costs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CostError;

/// Days in the calendar month used for normalization.
///
/// This is a fixed 30-day approximation, not calendar-accurate.
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Months per year.
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// How often a fixed-cost line item is billed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TimePeriod {
    /// Billed every day.
    Day,
    /// Billed every month.
    #[default]
    Month,
    /// Billed once a year.
    Year,
}

impl TimePeriod {
    /// Converts an amount billed at this period into its monthly equivalent.
    ///
    /// `Day` multiplies by 30, `Year` divides by 12, `Month` is unchanged.
    #[must_use]
    pub fn to_monthly(self, amount: f64) -> f64 {
        match self {
            TimePeriod::Day => amount * DAYS_PER_MONTH,
            TimePeriod::Month => amount,
            TimePeriod::Year => amount / MONTHS_PER_YEAR,
        }
    }

    /// Returns the lower-case identifier used in snapshots.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            TimePeriod::Day => "day",
            TimePeriod::Month => "month",
            TimePeriod::Year => "year",
        }
    }

    /// Parses a period from a loose text form.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "day" | "daily" | "d" => Some(TimePeriod::Day),
            "month" | "monthly" | "m" => Some(TimePeriod::Month),
            "year" | "yearly" | "annual" | "y" => Some(TimePeriod::Year),
            _ => None,
        }
    }

    /// All periods in ascending length.
    #[must_use]
    pub fn all() -> &'static [Self] {
        &[TimePeriod::Day, TimePeriod::Month, TimePeriod::Year]
    }
}

impl FromStr for TimePeriod {
    type Err = CostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| CostError::invalid_period(s))
    }
}

impl fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TimePeriod::Day => "Daily",
            TimePeriod::Month => "Monthly",
            TimePeriod::Year => "Yearly",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_monthly() {
        assert_eq!(TimePeriod::Day.to_monthly(1500.0), 45000.0);
        assert_eq!(TimePeriod::Month.to_monthly(45000.0), 45000.0);
        assert_eq!(TimePeriod::Year.to_monthly(540000.0), 45000.0);
    }

    #[test]
    fn test_to_monthly_zero() {
        for period in TimePeriod::all() {
            assert_eq!(period.to_monthly(0.0), 0.0);
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!(TimePeriod::parse("Daily"), Some(TimePeriod::Day));
        assert_eq!(TimePeriod::parse(" month "), Some(TimePeriod::Month));
        assert_eq!(TimePeriod::parse("annual"), Some(TimePeriod::Year));
        assert_eq!(TimePeriod::parse("fortnight"), None);
        assert!("week".parse::<TimePeriod>().is_err());
    }

    #[test]
    fn test_default() {
        assert_eq!(TimePeriod::default(), TimePeriod::Month);
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&TimePeriod::Year).unwrap();
        assert_eq!(json, "\"year\"");
        let parsed: TimePeriod = serde_json::from_str("\"day\"").unwrap();
        assert_eq!(parsed, TimePeriod::Day);
    }
}
