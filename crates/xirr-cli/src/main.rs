//! XIRR CLI - Command-line interface for irregular cash flow returns.
//!
//! # Usage
//!
//! ```bash
//! # XIRR from flows on the command line
//! xirr calc --flow 2008-01-01:-10000 --flow 2008-03-01:2750 --flow 2009-04-01:9000
//!
//! # XIRR from a CSV file with a date,amount header
//! xirr calc --file flows.csv --format json
//!
//! # NPV at a growth factor of 1.05
//! xirr npv --file flows.csv --rate 1.05
//! ```

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::print_error(&format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let format = cli.format;
    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Calc(args) => commands::calc::execute(args, config, format)?,
        Commands::Npv(args) => commands::npv::execute(args, config, format)?,
    }

    Ok(())
}

/// Logs go to stderr so stdout stays machine-readable.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "error",
        1 => "warn",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
