//! Printcost CLI - cost and pricing calculator for 3D printing jobs.
//!
//! # Usage
//!
//! ```bash
//! # Price a piece from the saved input
//! printcost quote
//!
//! # Try an edit without saving it, shown in USD
//! printcost quote --set variable.part_mass=80 --currency USD
//!
//! # Change the saved input
//! printcost state set labor.hourly_rate 18000
//!
//! # See where the cost goes
//! printcost breakdown --format json
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands, Session};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never mix with command output
    let default_filter = if cli.verbose {
        "printcost=debug,printcost_config=debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let session = Session::from_cli(&cli)?;
    tracing::debug!(state = %session.state_path.display(), "printcost v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Quote(args) => commands::quote::execute(args, &session)?,
        Commands::Breakdown(args) => commands::breakdown::execute(args, &session)?,
        Commands::State(args) => commands::state::execute(args, &session)?,
        Commands::Defaults => commands::defaults::execute(&session)?,
    }

    Ok(())
}
