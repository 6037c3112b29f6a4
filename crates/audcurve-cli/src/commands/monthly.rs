//! Monthly command implementation.
//!
//! Shows the interpolated monthly curve, linear, spline or both side by side.

use anyhow::Result;
use clap::{Args, ValueEnum};
use serde::Serialize;
use tabled::Tabled;

use audcurve_curves::export::monthly_rows;
use audcurve_curves::{derive_curves, InterpolationChoice, MonthlySeries};

use crate::cli::OutputFormat;
use crate::commands::{Context, MarketArgs};
use crate::output::{format_rate, print_header, print_info, print_output};

/// Arguments for the monthly command.
#[derive(Args, Debug)]
pub struct MonthlyArgs {
    #[command(flatten)]
    pub market: MarketArgs,

    /// Interpolation method
    #[arg(short, long, value_enum, default_value = "both")]
    pub method: MethodChoice,

    /// Show unfiltered values (skip the plausibility filter)
    #[arg(long)]
    pub raw: bool,
}

/// Interpolation method choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MethodChoice {
    /// Piecewise-linear
    Linear,
    /// Natural cubic spline
    Spline,
    /// Both, side by side
    Both,
}

#[derive(Tabled, Serialize)]
struct MonthRow {
    #[tabled(rename = "Month")]
    month: u32,
    #[tabled(rename = "Rate (%)")]
    rate: String,
}

#[derive(Tabled, Serialize)]
struct ComparisonRow {
    #[tabled(rename = "Month")]
    month: u32,
    #[tabled(rename = "Linear (%)")]
    linear: String,
    #[tabled(rename = "Spline (%)")]
    spline: String,
}

/// Execute the monthly command.
pub fn execute(args: MonthlyArgs, ctx: &Context) -> Result<()> {
    let resolved = args.market.resolve(ctx)?;
    let derived = derive_curves(&resolved.inputs);
    let curves = if args.raw {
        derived
    } else {
        derived.cleaned(ctx.config.bounds()?)
    };

    if ctx.format == OutputFormat::Table {
        print_header("Monthly Interpolated Forward Curve");
        if !ctx.quiet {
            print_info(&format!("Data source: {}", resolved.fetch.data_source()));
            print_info(&format!(
                "Horizon: {} months{}",
                resolved.inputs.horizon_months,
                if args.raw { " (unfiltered)" } else { "" }
            ));
        }
    }

    match args.method {
        MethodChoice::Linear => print_series(curves.series(InterpolationChoice::Linear), ctx),
        MethodChoice::Spline => print_series(curves.series(InterpolationChoice::Spline), ctx),
        MethodChoice::Both => {
            let rows: Vec<ComparisonRow> =
                monthly_rows(&curves.linear, &curves.spline, resolved.inputs.horizon_months)
                    .into_iter()
                    .filter(|row| !row.linear.is_empty() || !row.spline.is_empty())
                    .map(|row| ComparisonRow {
                        month: row.month,
                        linear: row.linear,
                        spline: row.spline,
                    })
                    .collect();

            match ctx.format {
                OutputFormat::Json => {
                    let output = serde_json::json!({
                        "linear": curves.linear,
                        "spline": curves.spline,
                    });
                    println!("{}", serde_json::to_string_pretty(&output)?);
                }
                _ => print_output(&rows, ctx.format)?,
            }
            Ok(())
        }
    }
}

fn print_series(series: &MonthlySeries, ctx: &Context) -> Result<()> {
    match ctx.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(series)?);
        }
        OutputFormat::Minimal => {
            for entry in series {
                println!("{}", format_rate(entry.rate));
            }
        }
        _ => {
            let rows: Vec<MonthRow> = series
                .iter()
                .map(|e| MonthRow {
                    month: e.month,
                    rate: format_rate(e.rate),
                })
                .collect();
            print_output(&rows, ctx.format)?;
        }
    }
    Ok(())
}
