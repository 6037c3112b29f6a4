//! Curve command implementation.
//!
//! Shows the discrete curve assembled from the current inputs.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use audcurve_curves::export::discrete_rows;
use audcurve_curves::{assemble_with_schedule, CurveInputs, RateField};

use crate::cli::OutputFormat;
use crate::commands::{Context, MarketArgs};
use crate::output::{format_rate, print_header, print_info, print_output};

/// Arguments for the curve command.
#[derive(Args, Debug)]
pub struct CurveArgs {
    #[command(flatten)]
    pub market: MarketArgs,
}

#[derive(Tabled, Serialize)]
struct CurveRow {
    #[tabled(rename = "Tenor")]
    tenor: String,
    #[tabled(rename = "Months")]
    months: u32,
    #[tabled(rename = "Raw (%)")]
    raw: String,
    #[tabled(rename = "Rate (%)")]
    rate: String,
    #[tabled(rename = "Source")]
    source: String,
}

/// Execute the curve command.
pub fn execute(args: CurveArgs, ctx: &Context) -> Result<()> {
    let resolved = args.market.resolve(ctx)?;
    let inputs = &resolved.inputs;

    let curve = assemble_with_schedule(
        &inputs.schedule,
        inputs.short_rates.as_ref(),
        inputs.bond_yields.as_ref(),
        inputs.spread_bps,
        inputs.mode,
    );

    let raw_rates: Vec<String> = inputs
        .schedule
        .for_mode(inputs.mode)
        .map(|spec| raw_rate(inputs, spec.field))
        .collect();

    let rows: Vec<CurveRow> = discrete_rows(&curve)
        .into_iter()
        .zip(raw_rates)
        .map(|(row, raw)| CurveRow {
            tenor: row.tenor,
            months: row.months,
            raw,
            rate: row.rate,
            source: row.source,
        })
        .collect();

    match ctx.format {
        OutputFormat::Table => {
            print_header("Forward Curve Data Points");
            if !ctx.quiet {
                print_info(&format!("Data source: {}", resolved.fetch.data_source()));
                print_info(&format!(
                    "Mode: {}, spread: {} bps",
                    inputs.mode, inputs.spread_bps
                ));
            }
            print_output(&rows, ctx.format)?;
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "mode": inputs.mode,
                "spread_bps": inputs.spread_bps,
                "data_source": resolved.fetch.data_source(),
                "last_update": resolved.fetch.last_update,
                "errors": resolved.fetch.errors,
                "points": curve.points(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Csv => print_output(&rows, ctx.format)?,
        OutputFormat::Minimal => {
            for point in &curve {
                println!("{}={}", point.label, format_rate(point.rate));
            }
        }
    }

    Ok(())
}

fn raw_rate(inputs: &CurveInputs, field: RateField) -> String {
    let value = if field.is_short_end() {
        inputs.short_rates.and_then(|s| s.get(field))
    } else {
        inputs.bond_yields.and_then(|b| b.get(field))
    };
    value.map(format_rate).unwrap_or_default()
}
