//! Query command implementation.
//!
//! Evaluates the continuous curve between (or beyond) the monthly grid.

use anyhow::Result;
use clap::{Args, ValueEnum};

use audcurve_curves::{assemble_with_schedule, InterpolationChoice};
use audcurve_math::Interpolator;

use crate::cli::OutputFormat;
use crate::commands::{Context, MarketArgs};
use crate::error::CliError;
use crate::output::{format_rate, print_header, print_output, KeyValue};

/// Arguments for the query command.
#[derive(Args, Debug)]
pub struct QueryArgs {
    #[command(flatten)]
    pub market: MarketArgs,

    /// Month to evaluate, fractions allowed (e.g. 18.5)
    #[arg(long)]
    pub month: f64,

    /// Interpolation method
    #[arg(short, long, value_enum, default_value = "spline")]
    pub method: QueryMethod,
}

/// Interpolation methods for a point query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum QueryMethod {
    /// Piecewise-linear, flat beyond the end points
    Linear,
    /// Natural cubic spline, end segments continued
    Spline,
}

impl From<QueryMethod> for InterpolationChoice {
    fn from(method: QueryMethod) -> Self {
        match method {
            QueryMethod::Linear => InterpolationChoice::Linear,
            QueryMethod::Spline => InterpolationChoice::Spline,
        }
    }
}

/// Execute the query command.
pub fn execute(args: QueryArgs, ctx: &Context) -> Result<()> {
    let resolved = args.market.resolve(ctx)?;
    let inputs = &resolved.inputs;

    let curve = assemble_with_schedule(
        &inputs.schedule,
        inputs.short_rates.as_ref(),
        inputs.bond_yields.as_ref(),
        inputs.spread_bps,
        inputs.mode,
    );
    if curve.len() < 2 {
        return Err(CliError::CurveTooShort(curve.len()).into());
    }

    let choice = InterpolationChoice::from(args.method);
    let interpolator = curve.interpolator(choice)?;
    let rate = interpolator.interpolate(args.month)?;
    let slope = interpolator.derivative(args.month)?;
    let in_range = interpolator.in_range(args.month);

    match ctx.format {
        OutputFormat::Table => {
            print_header("Curve Query Result");
            let results = vec![
                KeyValue::new("Month", args.month.to_string()),
                KeyValue::new("Method", choice.to_string()),
                KeyValue::from_rate("Rate", rate),
                KeyValue::new("Slope", format!("{:.6} %/month", slope)),
                KeyValue::new(
                    "Extrapolated",
                    if in_range { "no" } else { "yes" },
                ),
            ];
            print_output(&results, ctx.format)?;
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "month": args.month,
                "method": choice,
                "rate": rate,
                "slope": slope,
                "extrapolated": !in_range,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Csv => {
            println!("month,method,rate,slope");
            println!("{},{},{},{:.6}", args.month, choice, format_rate(rate), slope);
        }
        OutputFormat::Minimal => {
            println!("{}", format_rate(rate));
        }
    }

    Ok(())
}
