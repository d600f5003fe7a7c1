//! CLI error types.

use thiserror::Error;
use xirr_analytics::AnalyticsError;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Malformed `DATE:AMOUNT` flow.
    #[error("Invalid flow '{0}'. Use DATE:AMOUNT, e.g. 2024-01-15:-1000.")]
    InvalidFlow(String),

    /// Missing required argument.
    #[error("Missing required argument: {0}")]
    MissingArgument(String),

    /// The calculation produced no result.
    #[error("No result: {0}")]
    NoResult(#[from] AnalyticsError),

    /// Calculation error.
    #[error("Calculation error: {0}")]
    Calculation(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV input error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
