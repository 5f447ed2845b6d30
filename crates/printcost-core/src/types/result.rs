//! The pricing result record.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Components of the per-piece cost before the failure-rate buffer.
///
/// The buffer and the profit margin are applied on top of these and are
/// not decomposed here.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    /// Share of fixed overhead absorbed by the job's machine time.
    pub fixed: f64,
    /// Filament consumed.
    pub filament: f64,
    /// Energy drawn by the printer.
    pub electricity: f64,
    /// Operator time.
    pub labor: f64,
    /// Other supplies.
    pub materials: f64,
}

impl CostBreakdown {
    /// Sum of all components.
    #[must_use]
    pub fn subtotal(&self) -> f64 {
        self.fixed + self.filament + self.electricity + self.labor + self.materials
    }

    /// Components in display order.
    #[must_use]
    pub fn entries(&self) -> [(BreakdownComponent, f64); 5] {
        [
            (BreakdownComponent::Fixed, self.fixed),
            (BreakdownComponent::Filament, self.filament),
            (BreakdownComponent::Electricity, self.electricity),
            (BreakdownComponent::Labor, self.labor),
            (BreakdownComponent::Materials, self.materials),
        ]
    }

    /// Amount of a single component.
    #[must_use]
    pub fn get(&self, component: BreakdownComponent) -> f64 {
        match component {
            BreakdownComponent::Fixed => self.fixed,
            BreakdownComponent::Filament => self.filament,
            BreakdownComponent::Electricity => self.electricity,
            BreakdownComponent::Labor => self.labor,
            BreakdownComponent::Materials => self.materials,
        }
    }
}

/// Names a [`CostBreakdown`] component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreakdownComponent {
    /// Fixed overhead share.
    Fixed,
    /// Filament.
    Filament,
    /// Energy.
    Electricity,
    /// Labor.
    Labor,
    /// Other supplies.
    Materials,
}

impl BreakdownComponent {
    /// Lower-case identifier, as serialized.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            BreakdownComponent::Fixed => "fixed",
            BreakdownComponent::Filament => "filament",
            BreakdownComponent::Electricity => "electricity",
            BreakdownComponent::Labor => "labor",
            BreakdownComponent::Materials => "materials",
        }
    }

    /// Human-readable label for charts and tables.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            BreakdownComponent::Fixed => "Fixed costs",
            BreakdownComponent::Filament => "Filament",
            BreakdownComponent::Electricity => "Energy",
            BreakdownComponent::Labor => "Labor",
            BreakdownComponent::Materials => "Supplies / other",
        }
    }
}

impl fmt::Display for BreakdownComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Output of one pricing computation.
///
/// Derived entirely from a [`PricingInput`](super::PricingInput); it is
/// rebuilt after every input change and has no identity of its own.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingResult {
    /// Monthly fixed costs amortized per printing hour.
    pub hourly_fixed_cost: f64,
    /// Filament cost per piece.
    pub filament_cost: f64,
    /// Energy cost per piece.
    pub electricity_cost: f64,
    /// Labor cost per piece.
    pub labor_cost: f64,
    /// Fully loaded cost per piece, failure buffer included.
    pub total_piece_cost: f64,
    /// Price after the profit margin.
    pub suggested_price: f64,
    /// `suggested_price - total_piece_cost`.
    pub total_profit: f64,
    /// Pre-buffer cost components.
    pub breakdown: CostBreakdown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subtotal_and_entries() {
        let breakdown = CostBreakdown {
            fixed: 1.0,
            filament: 2.0,
            electricity: 3.0,
            labor: 4.0,
            materials: 5.0,
        };
        assert_eq!(breakdown.subtotal(), 15.0);

        let entries = breakdown.entries();
        assert_eq!(entries[0], (BreakdownComponent::Fixed, 1.0));
        assert_eq!(entries[4], (BreakdownComponent::Materials, 5.0));
        for (component, amount) in entries {
            assert_eq!(breakdown.get(component), amount);
        }
    }

    #[test]
    fn test_component_serde() {
        let json = serde_json::to_string(&BreakdownComponent::Electricity).unwrap();
        assert_eq!(json, "\"electricity\"");
    }
}
