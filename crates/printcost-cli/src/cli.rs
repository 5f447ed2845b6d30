//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{BreakdownArgs, QuoteArgs, StateArgs};
use crate::error::{CliError, CliResult};

/// Printcost - cost and pricing calculator for 3D printing jobs
#[derive(Parser)]
#[command(name = "printcost")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// State file holding the last saved input
    #[arg(long, env = "PRINTCOST_STATE", global = true)]
    pub state: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Price a piece from the saved input, with optional edits
    Quote(QuoteArgs),

    /// Show how the piece cost splits into its components
    Breakdown(BreakdownArgs),

    /// Inspect and edit the saved input
    State(StateArgs),

    /// Show the default input
    Defaults,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the value)
    Minimal,
}

/// Settings shared by every command.
#[derive(Debug, Clone)]
pub struct Session {
    /// Output format.
    pub format: OutputFormat,
    /// Resolved state file.
    pub state_path: PathBuf,
    /// Suppress status lines.
    pub quiet: bool,
}

impl Session {
    /// Builds the session from parsed flags.
    pub fn from_cli(cli: &Cli) -> CliResult<Self> {
        let state_path = match &cli.state {
            Some(path) => path.clone(),
            None => default_state_path()?,
        };
        Ok(Self {
            format: cli.format,
            state_path,
            quiet: cli.quiet,
        })
    }

    /// True when status lines may be printed to stdout.
    pub fn chatty(&self) -> bool {
        !self.quiet && self.format == OutputFormat::Table
    }
}

/// `<config dir>/printcost/state.json`
fn default_state_path() -> CliResult<PathBuf> {
    let base = dirs::config_dir()
        .or_else(dirs::home_dir)
        .ok_or(CliError::NoConfigDir)?;
    Ok(base.join("printcost").join("state.json"))
}
