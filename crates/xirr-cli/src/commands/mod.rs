//! CLI command implementations.

pub mod calc;
pub mod npv;

pub use calc::CalcArgs;
pub use npv::NpvArgs;

use std::path::{Path, PathBuf};

use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use tracing::debug;

use xirr_analytics::XirrConfig;
use xirr_core::{CashFlow, CashFlowSeries, Date};

use crate::error::{CliError, CliResult};

/// Cash flow inputs shared by every command.
///
/// File rows come first, then `--flow` values in the order given. The first
/// flow is the discounting reference date.
#[derive(Args, Debug)]
pub struct FlowArgs {
    /// Cash flow as DATE:AMOUNT (repeatable), e.g. --flow 2024-01-15:-1000
    #[arg(long = "flow", value_name = "DATE:AMOUNT", value_parser = parse_flow)]
    pub flows: Vec<CashFlow>,

    /// CSV file with a `date,amount` header
    #[arg(long, value_name = "CSV")]
    pub file: Option<PathBuf>,
}

impl FlowArgs {
    /// Collects the flows from the file and the command line.
    pub fn load(&self) -> CliResult<CashFlowSeries> {
        let mut series = match &self.file {
            Some(path) => read_flows(path)?,
            None => CashFlowSeries::new(),
        };
        series.extend(self.flows.iter().copied());

        if series.is_empty() {
            return Err(CliError::MissingArgument(
                "no cash flows given; use --flow or --file".to_string(),
            ));
        }
        debug!(flows = series.len(), "loaded cash flows");
        Ok(series)
    }
}

/// Parses a `DATE:AMOUNT` flow.
pub fn parse_flow(s: &str) -> CliResult<CashFlow> {
    let invalid = || CliError::InvalidFlow(s.to_string());

    let (date, amount) = s.split_once(':').ok_or_else(invalid)?;
    let date = Date::parse(date).map_err(|_| invalid())?;
    let amount: f64 = amount.trim().parse().map_err(|_| invalid())?;
    if !amount.is_finite() {
        return Err(invalid());
    }
    Ok(CashFlow::new(date, amount))
}

/// Reads flows from a CSV file in row order.
pub fn read_flows(path: &Path) -> CliResult<CashFlowSeries> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;

    reader
        .deserialize::<CashFlow>()
        .map(|row| row.map_err(CliError::from))
        .collect()
}

/// Loads calculator settings, or the defaults when no file is given.
pub fn load_config(path: Option<&Path>) -> CliResult<XirrConfig> {
    let Some(path) = path else {
        return Ok(XirrConfig::default());
    };

    let text = std::fs::read_to_string(path)?;
    let config: XirrConfig = toml::from_str(&text)
        .map_err(|e| CliError::Config(format!("{}: {}", path.display(), e)))?;
    config
        .validate()
        .map_err(|e| CliError::Config(format!("{}: {}", path.display(), e)))?;

    debug!(path = %path.display(), ?config, "loaded configuration");
    Ok(config)
}

/// A cash flow row for display.
#[derive(Debug, Serialize, Tabled)]
pub struct FlowRow {
    #[tabled(rename = "Date")]
    pub date: String,
    #[tabled(rename = "Amount")]
    pub amount: String,
}

impl From<&CashFlow> for FlowRow {
    fn from(cf: &CashFlow) -> Self {
        Self {
            date: cf.date().to_string(),
            amount: format!("{:.2}", cf.amount()),
        }
    }
}
