//! Breakdown command implementation.
//!
//! Shows each cost component of one piece and its share of the total.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use printcost_core::format::{format_currency, format_percent};
use printcost_core::PricingInput;
use printcost_pricing::{breakdown_shares, compute_pricing, non_zero, BreakdownShare};

use crate::cli::{OutputFormat, Session};
use crate::commands::{load_input, InputOverrides};
use crate::error::CliResult;
use crate::output::{print_header, print_json, print_output};

/// Arguments for the breakdown command.
#[derive(Args, Debug)]
pub struct BreakdownArgs {
    #[command(flatten)]
    pub overrides: InputOverrides,
}

/// One breakdown row.
#[derive(Debug, Serialize, Tabled)]
pub struct BreakdownRow {
    #[tabled(rename = "Component")]
    pub component: String,
    #[tabled(rename = "Amount")]
    pub amount: String,
    #[tabled(rename = "Share")]
    pub share: String,
}

fn rows(input: &PricingInput, shares: &[BreakdownShare]) -> Vec<BreakdownRow> {
    shares
        .iter()
        .map(|share| BreakdownRow {
            component: share.component.label().to_string(),
            amount: format_currency(share.amount, input.display_currency, input.exchange_rate),
            share: format_percent(share.percent),
        })
        .collect()
}

/// Execute the breakdown command.
pub fn execute(args: BreakdownArgs, session: &Session) -> CliResult<()> {
    let input = load_input(session, &args.overrides)?;
    let result = compute_pricing(&input);
    let shares = breakdown_shares(&result.breakdown);
    let charted = non_zero(shares.clone());

    match session.format {
        OutputFormat::Table => {
            print_header("Cost Breakdown (before failure buffer)");
            print_output(&rows(&input, &charted), session.format)?;
            println!(
                "Subtotal: {}",
                format_currency(
                    result.breakdown.subtotal(),
                    input.display_currency,
                    input.exchange_rate
                )
            );
        }
        OutputFormat::Json => print_json(&shares)?,
        OutputFormat::Csv => print_output(&rows(&input, &shares), session.format)?,
        OutputFormat::Minimal => {
            for share in &charted {
                println!("{} {}", share.component.as_str(), format_percent(share.percent));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use printcost_config::default_input;

    #[test]
    fn test_rows_follow_display_order() {
        let input = default_input();
        let result = compute_pricing(&input);
        let rows = rows(&input, &breakdown_shares(&result.breakdown));

        let labels: Vec<_> = rows.iter().map(|r| r.component.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Fixed costs", "Filament", "Energy", "Labor", "Supplies / other"]
        );
        assert_eq!(rows[1].amount, "COP 5,250");
        assert_eq!(rows[2].amount, "COP 408");
    }
}
