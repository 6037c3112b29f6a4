//! CLI command implementations.

pub mod config;
pub mod curve;
pub mod export;
pub mod monthly;
pub mod query;
pub mod schedule;

pub use config::ConfigArgs;
pub use curve::CurveArgs;
pub use export::ExportArgs;
pub use monthly::MonthlyArgs;
pub use query::QueryArgs;
pub use schedule::ScheduleArgs;

use std::path::PathBuf;

use clap::Args;

use audcurve_curves::{BondYieldSet, CurveConfig, CurveInputs, CurveMode, ShortRateSet};
use audcurve_ext_file::{load_market_data, FetchResults, ManualSource, RbaFileSource};

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};
use crate::output::print_warning;

/// Settings shared by every command.
pub struct Context {
    /// Output format.
    pub format: OutputFormat,
    /// Suppress non-essential output.
    pub quiet: bool,
    /// Effective configuration.
    pub config: CurveConfig,
    /// Where the configuration lives (or would live).
    pub config_path: Option<PathBuf>,
    /// Whether `config_path` was read.
    pub config_loaded: bool,
}

/// Market data and curve parameters shared by the curve commands.
#[derive(Args, Debug, Clone, Default)]
pub struct MarketArgs {
    /// RBA F1.1 money market CSV
    #[arg(long, value_name = "FILE")]
    pub f1: Option<PathBuf>,

    /// RBA F2 government bond CSV
    #[arg(long, value_name = "FILE")]
    pub f2: Option<PathBuf>,

    /// Short rates in percent: CASH,1M,3M,6M (overrides --f1)
    #[arg(long, value_name = "RATES", allow_hyphen_values = true)]
    pub short: Option<String>,

    /// Bond yields in percent: 2Y,3Y,5Y,10Y (overrides --f2)
    #[arg(long, value_name = "RATES", allow_hyphen_values = true)]
    pub bonds: Option<String>,

    /// Spread subtracted from 1M/3M/6M, in basis points
    #[arg(short, long, allow_hyphen_values = true)]
    pub spread: Option<f64>,

    /// Leave the cash rate out of the curve
    #[arg(long)]
    pub reduced: bool,

    /// Last month of the monthly series
    #[arg(long)]
    pub horizon: Option<u32>,
}

/// Inputs resolved from flags, files and configuration.
pub struct ResolvedMarket {
    /// Curve inputs ready for derivation.
    pub inputs: CurveInputs,
    /// What the load produced, including errors.
    pub fetch: FetchResults,
}

impl MarketArgs {
    /// Loads the rate snapshots and applies flag overrides to the config.
    ///
    /// Explicit `--short`/`--bonds` values win over files. Load failures are
    /// reported as warnings; the affected snapshot stays missing.
    pub fn resolve(&self, ctx: &Context) -> CliResult<ResolvedMarket> {
        let short = self
            .short
            .as_deref()
            .map(|s| parse_rates("short", s))
            .transpose()?
            .map(|[cash, m1, m3, m6]| ShortRateSet::new(cash, m1, m3, m6));
        let bonds = self
            .bonds
            .as_deref()
            .map(|s| parse_rates("bonds", s))
            .transpose()?
            .map(|[y2, y3, y5, y10]| BondYieldSet::new(y2, y3, y5, y10));

        let fetch = if short.is_some() && bonds.is_some() {
            load_market_data(&ManualSource::new(short, bonds))
        } else {
            let files = RbaFileSource::new(
                self.f1.clone().or_else(|| ctx.config.f1_path.clone()),
                self.f2.clone().or_else(|| ctx.config.f2_path.clone()),
            );
            load_market_data(&files).with_manual(short, bonds)
        };

        if !ctx.quiet {
            for error in &fetch.errors {
                print_warning(error);
            }
        }

        let mut inputs = CurveInputs::from_config(&ctx.config, fetch.short_rates, fetch.bond_yields);
        if let Some(spread) = self.spread {
            inputs.spread_bps = spread;
        }
        if self.reduced {
            inputs.mode = CurveMode::Reduced;
        }
        if let Some(horizon) = self.horizon {
            if horizon == 0 {
                return Err(CliError::InvalidHorizon(horizon));
            }
            inputs.horizon_months = horizon;
        }

        Ok(ResolvedMarket { inputs, fetch })
    }
}

/// Parses exactly four comma-separated rates.
pub fn parse_rates(flag: &'static str, list: &str) -> CliResult<[f64; 4]> {
    let values = list
        .split(',')
        .map(|part| {
            let part = part.trim();
            part.parse::<f64>().map_err(|_| CliError::InvalidRate {
                flag,
                value: part.to_string(),
            })
        })
        .collect::<CliResult<Vec<f64>>>()?;

    <[f64; 4]>::try_from(values.as_slice()).map_err(|_| CliError::RateCount {
        flag,
        expected: 4,
        actual: values.len(),
    })
}
