//! audcurve - Command-line interface for AUD forward curves.
//!
//! # Usage
//!
//! ```bash
//! # Show the discrete curve from RBA statistical tables
//! audcurve curve --f1 f1.1-data.csv --f2 f2-data.csv
//!
//! # Enter rates by hand, with a 30bp spread on BBSW
//! audcurve curve --short 4.35,4.34,4.30,4.20 --bonds 3.80,3.85,4.00,4.40 --spread 30
//!
//! # Compare linear and spline monthly curves
//! audcurve monthly --f1 f1.1-data.csv --f2 f2-data.csv --method both
//!
//! # Export both tables to AUD_Forward_Curve_<date>.csv
//! audcurve export --f1 f1.1-data.csv --f2 f2-data.csv
//!
//! # Evaluate the spline at month 18.5
//! audcurve query --f1 f1.1-data.csv --f2 f2-data.csv --month 18.5
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};
use commands::config::ConfigCommand;
use commands::{ConfigArgs, Context};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    // `config init` may target a file that does not exist yet.
    let creating = matches!(
        &cli.command,
        Commands::Config(ConfigArgs {
            command: ConfigCommand::Init(_)
        })
    );
    let (config, config_path, config_loaded) =
        commands::config::load_config(cli.config.clone(), creating)?;
    debug!(
        path = ?config_path,
        loaded = config_loaded,
        "configuration resolved"
    );

    let ctx = Context {
        format: cli.format,
        quiet: cli.quiet,
        config,
        config_path,
        config_loaded,
    };

    match cli.command {
        Commands::Curve(args) => commands::curve::execute(args, &ctx)?,
        Commands::Monthly(args) => commands::monthly::execute(args, &ctx)?,
        Commands::Export(args) => commands::export::execute(args, &ctx)?,
        Commands::Query(args) => commands::query::execute(args, &ctx)?,
        Commands::Schedule(args) => commands::schedule::execute(args, &ctx)?,
        Commands::Config(args) => commands::config::execute(args, &ctx)?,
    }

    Ok(())
}

/// Logs go to stderr so table and JSON output stay clean.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
