//! Calc command implementation.
//!
//! Calculates the XIRR of a cash flow series.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use xirr_analytics::{XirrCalculator, XirrConfig};

use crate::cli::OutputFormat;
use crate::commands::{FlowArgs, FlowRow};
use crate::error::CliError;
use crate::output::{print_header, print_rows, print_single, KeyValue};

/// Arguments for the calc command.
#[derive(Args, Debug)]
pub struct CalcArgs {
    #[command(flatten)]
    pub input: FlowArgs,

    /// Starting growth factor (1 + annual rate). Overrides the config file.
    #[arg(short, long)]
    pub guess: Option<f64>,
}

/// XIRR calculation result.
#[derive(Debug, Serialize)]
pub struct CalcReport {
    pub xirr_percent: String,
    pub growth_factor: f64,
    pub annual_rate: f64,
    pub iterations: u32,
    pub method: String,
    pub flows: usize,
}

/// Execute the calc command.
pub fn execute(args: CalcArgs, config: XirrConfig, format: OutputFormat) -> Result<()> {
    let series = args.input.load()?;
    let config = match args.guess {
        Some(guess) => config.with_initial_guess(guess),
        None => config,
    };

    let result = XirrCalculator::with_config(config)
        .try_calculate(&series)
        .map_err(CliError::NoResult)?;

    let report = CalcReport {
        xirr_percent: format!("{:.2}", result.percentage),
        growth_factor: result.rate,
        annual_rate: result.annual_rate,
        iterations: result.iterations,
        method: result.method.to_string(),
        flows: series.len(),
    };

    match format {
        OutputFormat::Table => {
            print_header("Cash Flows");
            let rows: Vec<FlowRow> = series.iter().map(FlowRow::from).collect();
            print_rows(&rows, format)?;

            print_header("XIRR");
            let results = vec![
                KeyValue::new("XIRR", format!("{}%", report.xirr_percent)),
                KeyValue::new("Growth Factor", format!("{:.10}", report.growth_factor)),
                KeyValue::new("Iterations", report.iterations.to_string()),
                KeyValue::new("Method", report.method.clone()),
                KeyValue::new("Day Count", config.day_count.to_string()),
            ];
            print_rows(&results, format)?;
        }
        OutputFormat::Json | OutputFormat::Csv => print_single(&report, format)?,
        OutputFormat::Minimal => println!("{}", report.xirr_percent),
    }

    Ok(())
}
