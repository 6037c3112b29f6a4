//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{ConfigArgs, CurveArgs, ExportArgs, MonthlyArgs, QueryArgs, ScheduleArgs};

/// audcurve - AUD forward curve builder
#[derive(Parser)]
#[command(name = "audcurve")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Configuration file (TOML)
    #[arg(short, long, env = "AUDCURVE_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Show the discrete curve
    Curve(CurveArgs),

    /// Show the monthly interpolated curve
    Monthly(MonthlyArgs),

    /// Write the curve and monthly tables to a CSV file
    Export(ExportArgs),

    /// Evaluate the curve at a (fractional) month
    Query(QueryArgs),

    /// Show the tenor schedule in effect
    Schedule(ScheduleArgs),

    /// Manage configuration
    Config(ConfigArgs),
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
    /// Minimal output (just the values)
    Minimal,
}
