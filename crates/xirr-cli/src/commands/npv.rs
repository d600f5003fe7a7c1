//! NPV command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use xirr_analytics::{NpvObjective, XirrConfig};

use crate::cli::OutputFormat;
use crate::commands::FlowArgs;
use crate::error::CliError;
use crate::output::{print_header, print_rows, print_single, KeyValue};

/// Arguments for the npv command.
#[derive(Args, Debug)]
pub struct NpvArgs {
    #[command(flatten)]
    pub input: FlowArgs,

    /// Growth factor (1 + annual rate), e.g. 1.05 for 5%
    #[arg(short, long)]
    pub rate: f64,
}

/// NPV calculation result.
#[derive(Debug, Serialize)]
pub struct NpvReport {
    pub growth_factor: f64,
    pub npv: f64,
    pub flows: usize,
}

/// Execute the npv command.
pub fn execute(args: NpvArgs, config: XirrConfig, format: OutputFormat) -> Result<()> {
    let series = args.input.load()?;

    let npv = NpvObjective::new(&series)
        .with_day_count(config.day_count)
        .npv(args.rate)
        .map_err(|e| CliError::Calculation(e.to_string()))?;

    let report = NpvReport {
        growth_factor: args.rate,
        npv,
        flows: series.len(),
    };

    match format {
        OutputFormat::Table => {
            print_header("Net Present Value");
            let results = vec![
                KeyValue::new("Growth Factor", report.growth_factor.to_string()),
                KeyValue::new(
                    "Reference Date",
                    series.reference_date().map(|d| d.to_string()).unwrap_or_default(),
                ),
                KeyValue::new("Flows", report.flows.to_string()),
                KeyValue::new("NPV", format!("{:.2}", report.npv)),
            ];
            print_rows(&results, format)?;
        }
        OutputFormat::Json | OutputFormat::Csv => print_single(&report, format)?,
        OutputFormat::Minimal => println!("{:.2}", report.npv),
    }

    Ok(())
}
