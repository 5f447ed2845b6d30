//! Quote command implementation.
//!
//! Prices one piece from the saved input plus any edits given on the command
//! line.

use clap::Args;
use serde::Serialize;

use printcost_core::format::{format_currency, format_number, format_percent};
use printcost_core::{Currency, PricingInput, PricingResult};
use printcost_pricing::{CostModel, DisplayMetrics, PieceCostPricer};

use crate::cli::{OutputFormat, Session};
use crate::commands::{load_input, open_snapshot, report_findings, InputOverrides};
use crate::error::CliResult;
use crate::output::{print_header, print_info, print_json, print_output, print_success, KeyValue};

/// Arguments for the quote command.
#[derive(Args, Debug)]
pub struct QuoteArgs {
    #[command(flatten)]
    pub overrides: InputOverrides,

    /// Persist the edited input as the new saved state
    #[arg(long)]
    pub save: bool,
}

/// Formatted headline amounts.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FormattedAmounts {
    total_piece_cost: String,
    suggested_price: String,
    total_profit: String,
}

/// Machine-readable quote. Amounts in `result` and `metrics` are native COP.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct QuoteReport {
    currency: Currency,
    exchange_rate: f64,
    result: PricingResult,
    metrics: DisplayMetrics,
    formatted: FormattedAmounts,
}

impl QuoteReport {
    fn new(input: &PricingInput, result: PricingResult) -> Self {
        let currency = input.display_currency;
        let rate = input.exchange_rate;
        Self {
            currency,
            exchange_rate: rate,
            result,
            metrics: DisplayMetrics::derive(input, &result),
            formatted: FormattedAmounts {
                total_piece_cost: format_currency(result.total_piece_cost, currency, rate),
                suggested_price: format_currency(result.suggested_price, currency, rate),
                total_profit: format_currency(result.total_profit, currency, rate),
            },
        }
    }

    fn rows(&self) -> Vec<KeyValue> {
        let currency = self.currency;
        let rate = self.exchange_rate;
        let result = &self.result;
        let metrics = &self.metrics;

        vec![
            KeyValue::new("Suggested price", &self.formatted.suggested_price),
            KeyValue::new("Piece cost", &self.formatted.total_piece_cost),
            KeyValue::new("Profit", &self.formatted.total_profit),
            KeyValue::separator(),
            KeyValue::money("Filament", result.filament_cost, currency, rate),
            KeyValue::money("Energy", result.electricity_cost, currency, rate),
            KeyValue::money("Labor", result.labor_cost, currency, rate),
            KeyValue::money("Fixed costs (machine time)", result.breakdown.fixed, currency, rate),
            KeyValue::money("Supplies / other", result.breakdown.materials, currency, rate),
            KeyValue::separator(),
            KeyValue::money("Fixed cost per hour", metrics.hourly_fixed_cost, currency, rate),
            KeyValue::money("Cost per gram", metrics.cost_per_gram, currency, rate),
            KeyValue::new(
                "Expected waste",
                format!("{} g", format_number(metrics.wasted_grams)),
            ),
            KeyValue::new("Margin", format_percent(metrics.margin_percent)),
            KeyValue::new(
                "Capacity use",
                format_percent(metrics.capacity_utilization_percent),
            ),
        ]
    }
}

/// Execute the quote command.
pub fn execute(args: QuoteArgs, session: &Session) -> CliResult<()> {
    let input = load_input(session, &args.overrides)?;
    let pricer = PieceCostPricer::new();
    let result = pricer.price(&input);
    tracing::debug!(
        model = pricer.name(),
        total_piece_cost = result.total_piece_cost,
        suggested_price = result.suggested_price,
        "priced piece"
    );

    report_findings(&input, None, session);

    let report = QuoteReport::new(&input, result);
    let rows = report.rows();

    match session.format {
        OutputFormat::Table => {
            print_header("Piece Quote");
            print_output(&rows, session.format)?;
            if session.chatty() && !input.display_currency.is_native() {
                print_info(&format!(
                    "Converted at {} COP per USD",
                    format_number(input.exchange_rate)
                ));
            }
        }
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Csv => {
            let rows: Vec<_> = rows.into_iter().filter(|r| !r.is_separator()).collect();
            print_output(&rows, session.format)?;
        }
        OutputFormat::Minimal => println!("{}", report.formatted.suggested_price),
    }

    if args.save {
        open_snapshot(session).save(&input)?;
        if session.chatty() {
            print_success(&format!("Saved input to {}", session.state_path.display()));
        }
    }

    Ok(())
}
