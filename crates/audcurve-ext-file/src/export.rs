//! Two-table CSV export.
//!
//! The document is the discrete table under a `Forward Curve Data Points`
//! title, a blank line, then the monthly table under its own title. Each
//! table carries its own header row.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use audcurve_curves::export::{discrete_rows, monthly_rows};
use audcurve_curves::{DiscreteCurve, MonthlySeries};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

use crate::error::{SourceError, SourceResult};

/// Title line above the discrete table.
pub const DISCRETE_TITLE: &str = "Forward Curve Data Points";

/// Title line above the monthly table.
pub const MONTHLY_TITLE: &str = "Monthly Interpolated Forward Curve (Linear vs Cubic Spline)";

/// File name for an export made on `date`.
pub fn default_export_file_name(date: NaiveDate) -> String {
    format!("AUD_Forward_Curve_{}.csv", date.format("%Y-%m-%d"))
}

/// Header row of the discrete table.
pub const DISCRETE_HEADERS: [&str; 4] = ["Tenor", "Months", "Rate (%)", "Source"];

/// Header row of the monthly table.
pub const MONTHLY_HEADERS: [&str; 3] = [
    "Month",
    "Linear Interpolation (%)",
    "Cubic Spline Interpolation (%)",
];

/// Writes both tables to `writer`.
///
/// The monthly table has one row per month in `1..=horizon_months`, blank
/// where a series has no entry. Headers are written even for empty tables.
pub fn write_export<W: Write>(
    mut writer: W,
    curve: &DiscreteCurve,
    linear: &MonthlySeries,
    spline: &MonthlySeries,
    horizon_months: u32,
) -> SourceResult<()> {
    write_table(&mut writer, DISCRETE_TITLE, &DISCRETE_HEADERS, discrete_rows(curve))?;
    writeln!(writer).map_err(export_io)?;
    write_table(
        &mut writer,
        MONTHLY_TITLE,
        &MONTHLY_HEADERS,
        monthly_rows(linear, spline, horizon_months),
    )
}

fn write_table<W: Write, R: Serialize>(
    writer: &mut W,
    title: &str,
    headers: &[&str],
    rows: Vec<R>,
) -> SourceResult<()> {
    writeln!(writer, "{title}").map_err(export_io)?;

    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer.write_record(headers)?;
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush().map_err(export_io)
}

fn export_io(e: std::io::Error) -> SourceError {
    SourceError::io("<export>", e)
}

/// Writes the export document to a file.
pub fn write_export_file(
    path: impl AsRef<Path>,
    curve: &DiscreteCurve,
    linear: &MonthlySeries,
    spline: &MonthlySeries,
    horizon_months: u32,
) -> SourceResult<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| SourceError::io(path, e))?;
    write_export(file, curve, linear, spline, horizon_months)?;
    info!(path = %path.display(), points = curve.len(), "wrote curve export");
    Ok(())
}
