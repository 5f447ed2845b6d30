//! CLI error types.

use printcost_config::ConfigError;
use printcost_core::CostError;
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// A `--set` argument without `=`.
    #[error("Invalid assignment: {0}. Use key=value.")]
    InvalidAssignment(String),

    /// No directory to keep the state file in.
    #[error("Could not determine config directory; pass --state <path>")]
    NoConfigDir,

    /// Field or value error.
    #[error(transparent)]
    Core(#[from] CostError),

    /// State store error.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Serialization(err.to_string())
    }
}

impl From<csv::Error> for CliError {
    fn from(err: csv::Error) -> Self {
        CliError::Serialization(err.to_string())
    }
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
