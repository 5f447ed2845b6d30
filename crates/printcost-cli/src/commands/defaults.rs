//! Defaults command implementation.

use printcost_config::default_input;

use crate::cli::Session;
use crate::commands::print_input;
use crate::error::CliResult;

/// Execute the defaults command.
pub fn execute(session: &Session) -> CliResult<()> {
    print_input(&default_input(), "Default Input", session)
}
