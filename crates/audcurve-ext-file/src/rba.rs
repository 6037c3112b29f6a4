//! Readers for the RBA statistical tables.
//!
//! The F1.1 (money market) and F2 (capital market) CSV downloads have a
//! block of title and description rows, then one row per business day with
//! the date in column 0. Rows are ragged, so they are read headerless and
//! flexible. The latest complete observation is the last row whose required
//! columns all parse as finite numbers.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use audcurve_curves::{BondYieldSet, ShortRateSet};
use tracing::{debug, info};

use crate::error::{SourceError, SourceResult};

/// F1.1 columns: cash rate, then 1M, 3M and 6M bank bill rates.
const F1_COLUMNS: [usize; 4] = [1, 7, 8, 9];

/// F2 columns: 2Y, 3Y, 5Y and 10Y government bond yields.
const F2_COLUMNS: [usize; 4] = [1, 2, 3, 4];

/// Reads the latest short rates from an F1.1 file.
///
/// Uses the last row with a date and a numeric cash, 1M, 3M and 6M rate.
pub fn read_short_rates(path: impl AsRef<Path>) -> SourceResult<ShortRateSet> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| SourceError::io(path, e))?;

    let (as_of, [cash, one_month, three_month, six_month]) =
        latest_complete_row(file, &F1_COLUMNS, true)?.ok_or_else(|| {
            SourceError::NoValidRow {
                table: "BBSW",
                path: path.to_path_buf(),
            }
        })?;

    info!(path = %path.display(), %as_of, "loaded short rates");
    Ok(ShortRateSet::new(cash, one_month, three_month, six_month))
}

/// Reads the latest bond yields from an F2 file.
///
/// Uses the last row with a numeric 2Y, 3Y, 5Y and 10Y yield.
pub fn read_bond_yields(path: impl AsRef<Path>) -> SourceResult<BondYieldSet> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| SourceError::io(path, e))?;

    let (as_of, [two_year, three_year, five_year, ten_year]) =
        latest_complete_row(file, &F2_COLUMNS, false)?.ok_or_else(|| {
            SourceError::NoValidRow {
                table: "bond yield",
                path: path.to_path_buf(),
            }
        })?;

    info!(path = %path.display(), %as_of, "loaded bond yields");
    Ok(BondYieldSet::new(two_year, three_year, five_year, ten_year))
}

/// Scans from the bottom for the first row with every column in `columns`
/// numeric. Returns the row's column 0 and the parsed values.
///
/// Only column 0 and the required columns are decoded. A cell that is not
/// valid UTF-8 makes its row incomplete; it does not fail the file.
fn latest_complete_row<R: Read>(
    reader: R,
    columns: &[usize; 4],
    require_date: bool,
) -> SourceResult<Option<(String, [f64; 4])>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let records = csv_reader
        .byte_records()
        .collect::<Result<Vec<_>, csv::Error>>()?;
    debug!(rows = records.len(), "parsed csv rows");

    for record in records.iter().rev() {
        let Some(Ok(label)) = record.get(0).map(std::str::from_utf8) else {
            continue;
        };
        if require_date && label.is_empty() {
            continue;
        }

        let mut values = [0.0; 4];
        let complete = columns.iter().zip(values.iter_mut()).all(|(&col, slot)| {
            let value = record
                .get(col)
                .and_then(|cell| std::str::from_utf8(cell).ok())
                .and_then(parse_rate);
            match value {
                Some(v) => {
                    *slot = v;
                    true
                }
                None => false,
            }
        });

        if complete {
            return Ok(Some((label.to_string(), values)));
        }
    }

    Ok(None)
}

fn parse_rate(cell: &str) -> Option<f64> {
    if cell.is_empty() {
        return None;
    }
    cell.parse::<f64>().ok().filter(|v| v.is_finite())
}
