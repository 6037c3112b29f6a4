//! Schedule command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use audcurve_curves::CurveMode;

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::output::{print_header, print_output};

/// Arguments for the schedule command.
#[derive(Args, Debug)]
pub struct ScheduleArgs {
    /// Mark entries as they apply to a reduced curve
    #[arg(long)]
    pub reduced: bool,
}

#[derive(Tabled, Serialize)]
struct ScheduleRow {
    #[tabled(rename = "Tenor")]
    label: String,
    #[tabled(rename = "Months")]
    months: u32,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Input")]
    field: String,
    #[tabled(rename = "Spread")]
    adjustable: bool,
    #[tabled(rename = "Used")]
    used: bool,
}

/// Execute the schedule command.
pub fn execute(args: ScheduleArgs, ctx: &Context) -> Result<()> {
    let schedule = ctx.config.schedule();
    let mode = if args.reduced {
        CurveMode::Reduced
    } else {
        ctx.config.mode
    };

    if ctx.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&schedule)?);
        return Ok(());
    }

    let used: Vec<&str> = schedule.for_mode(mode).map(|s| s.label.as_str()).collect();
    let rows: Vec<ScheduleRow> = schedule
        .iter()
        .map(|spec| ScheduleRow {
            label: spec.label.clone(),
            months: spec.months,
            category: spec.category.to_string(),
            field: spec.field.to_string(),
            adjustable: spec.adjustable,
            used: used.contains(&spec.label.as_str()),
        })
        .collect();

    if ctx.format == OutputFormat::Table {
        print_header(&format!("Tenor Schedule ({} mode)", mode));
    }
    print_output(&rows, ctx.format)
}
