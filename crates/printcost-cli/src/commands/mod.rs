//! CLI command implementations.

pub mod breakdown;
pub mod defaults;
pub mod quote;
pub mod state;

// Re-export submodules for convenience
pub use breakdown::BreakdownArgs;
pub use quote::QuoteArgs;
pub use state::StateArgs;

use std::str::FromStr;

use clap::Args;

use printcost_config::{JsonFileStore, SnapshotManager, SnapshotSource, Validate};
use printcost_core::types::{FieldValue, InputField};
use printcost_core::{CostError, Currency, PricingInput};

use crate::cli::{OutputFormat, Session};
use crate::error::{CliError, CliResult};
use crate::output::{print_header, print_info, print_output, print_warning, KeyValue};

/// A `key=value` edit to one input field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Assignment {
    /// Field being edited.
    pub field: InputField,
    /// Parsed value.
    pub value: FieldValue,
}

impl FromStr for Assignment {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, text) = s
            .split_once('=')
            .ok_or_else(|| CliError::InvalidAssignment(s.to_string()))?;
        let field: InputField = key.trim().parse()?;
        let value = field.parse_value(text.trim())?;
        Ok(Self { field, value })
    }
}

/// Edits applied on top of the saved input for one invocation.
#[derive(Args, Debug, Default)]
pub struct InputOverrides {
    /// Field edit as key=value (repeatable, see `state fields`)
    #[arg(short, long = "set", value_name = "KEY=VALUE")]
    pub set: Vec<Assignment>,

    /// Display currency (COP, USD)
    #[arg(short, long)]
    pub currency: Option<Currency>,

    /// COP per USD
    #[arg(short = 'x', long, value_parser = parse_finite)]
    pub exchange_rate: Option<f64>,
}

/// Parses a number, rejecting NaN and infinities.
fn parse_finite(s: &str) -> Result<f64, String> {
    let value: f64 = s.trim().parse().map_err(|e| format!("{e}"))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("{s} is not a finite number"))
    }
}

impl InputOverrides {
    /// Applies every edit in order, returning the edited record.
    pub fn apply(&self, base: PricingInput) -> Result<PricingInput, CostError> {
        let mut input = base;
        for assignment in &self.set {
            input = input.with_value(assignment.field, assignment.value)?;
        }
        if let Some(currency) = self.currency {
            input = input.with_currency(currency);
        }
        if let Some(rate) = self.exchange_rate {
            input = input.with_exchange_rate(rate);
        }
        Ok(input)
    }

    /// True when nothing is overridden.
    pub fn is_empty(&self) -> bool {
        self.set.is_empty() && self.currency.is_none() && self.exchange_rate.is_none()
    }
}

/// Opens the snapshot manager on the session's state file.
pub fn open_snapshot(session: &Session) -> SnapshotManager<JsonFileStore> {
    SnapshotManager::new(JsonFileStore::new(&session.state_path))
}

/// Loads the saved input and applies `overrides`.
pub fn load_input(session: &Session, overrides: &InputOverrides) -> CliResult<PricingInput> {
    let (input, source) = open_snapshot(session).load_with_source()?;
    if source == SnapshotSource::Defaults {
        tracing::debug!(path = %session.state_path.display(), "no saved input, using defaults");
    }
    if !overrides.is_empty() {
        tracing::debug!(edits = overrides.set.len(), "applying command-line edits");
    }
    Ok(overrides.apply(input)?)
}

/// Warns about questionable values, optionally only for one field.
pub fn report_findings(input: &PricingInput, only: Option<InputField>, session: &Session) {
    if session.quiet {
        return;
    }
    for finding in input.validate() {
        if only.map_or(true, |field| field.key() == finding.field) {
            print_warning(&finding.to_string());
        }
    }
}

/// One row per input field.
fn input_rows(input: &PricingInput) -> Vec<KeyValue> {
    InputField::all()
        .iter()
        .map(|&field| KeyValue::new(field.key(), input.value_of(field).to_string()))
        .collect()
}

/// Prints an input record in the session's format.
pub fn print_input(input: &PricingInput, title: &str, session: &Session) -> CliResult<()> {
    match session.format {
        OutputFormat::Table => {
            print_header(title);
            print_output(&input_rows(input), session.format)?;
        }
        OutputFormat::Json => crate::output::print_json(input)?,
        OutputFormat::Csv => print_output(&input_rows(input), session.format)?,
        OutputFormat::Minimal => {
            for row in input_rows(input) {
                println!("{}={}", row.key, row.value);
            }
        }
    }
    Ok(())
}

/// Prints where the record came from when it is not the saved state.
pub fn note_source(source: SnapshotSource, session: &Session) {
    if source == SnapshotSource::Defaults && session.chatty() {
        print_info("No saved input yet; showing defaults");
    }
}
