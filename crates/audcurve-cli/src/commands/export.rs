//! Export command implementation.
//!
//! Writes the discrete curve and the monthly comparison to one CSV file.

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Args;

use audcurve_curves::derive_curves;
use audcurve_ext_file::{default_export_file_name, write_export, write_export_file};

use crate::cli::OutputFormat;
use crate::commands::{Context, MarketArgs};
use crate::output::print_success;

/// Arguments for the export command.
#[derive(Args, Debug)]
pub struct ExportArgs {
    #[command(flatten)]
    pub market: MarketArgs,

    /// Output file; `-` for stdout. Defaults to AUD_Forward_Curve_<date>.csv
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Export unfiltered monthly values
    #[arg(long)]
    pub raw: bool,
}

/// Execute the export command.
pub fn execute(args: ExportArgs, ctx: &Context) -> Result<()> {
    let resolved = args.market.resolve(ctx)?;
    let derived = derive_curves(&resolved.inputs);
    let curves = if args.raw {
        derived
    } else {
        derived.cleaned(ctx.config.bounds()?)
    };
    let horizon = resolved.inputs.horizon_months;

    if args.output.as_deref() == Some(std::path::Path::new("-")) {
        write_export(
            std::io::stdout().lock(),
            &curves.discrete,
            &curves.linear,
            &curves.spline,
            horizon,
        )?;
        return Ok(());
    }

    let path = args.output.unwrap_or_else(|| {
        PathBuf::from(default_export_file_name(chrono::Local::now().date_naive()))
    });
    write_export_file(&path, &curves.discrete, &curves.linear, &curves.spline, horizon)
        .with_context(|| format!("Failed to export to {}", path.display()))?;

    match ctx.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "path": path,
                "points": curves.discrete.len(),
                "months": horizon,
                "data_source": resolved.fetch.data_source(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Minimal => println!("{}", path.display()),
        OutputFormat::Table | OutputFormat::Csv => {
            if !ctx.quiet {
                print_success(&format!(
                    "Exported {} points and {} months to {}",
                    curves.discrete.len(),
                    horizon,
                    path.display()
                ));
            }
        }
    }

    Ok(())
}
