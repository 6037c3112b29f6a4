//! Row shapes for the two exported tables.
//!
//! The discrete table lists every curve point. The monthly table puts the
//! linear and spline fills side by side, one row per month. Rates are
//! rendered with four decimals; a month missing from a series is blank.
//! Serialized field names are the column headers.

use serde::{Deserialize, Serialize};

use crate::monthly::MonthlySeries;
use crate::point::DiscreteCurve;

/// One discrete curve point, formatted for export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscreteRow {
    /// Tenor label.
    #[serde(rename = "Tenor")]
    pub tenor: String,
    /// Tenor in months.
    #[serde(rename = "Months")]
    pub months: u32,
    /// Rate with four decimals.
    #[serde(rename = "Rate (%)")]
    pub rate: String,
    /// Source label, e.g. `Govt Bond`.
    #[serde(rename = "Source")]
    pub source: String,
}

/// One month of both fills, formatted for export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyRow {
    /// Month index.
    #[serde(rename = "Month")]
    pub month: u32,
    /// Linear rate, blank when missing.
    #[serde(rename = "Linear Interpolation (%)")]
    pub linear: String,
    /// Spline rate, blank when missing.
    #[serde(rename = "Cubic Spline Interpolation (%)")]
    pub spline: String,
}

/// Formats a rate with four decimals.
pub fn format_rate(rate: f64) -> String {
    format!("{rate:.4}")
}

/// Rows of the discrete table, in curve order.
pub fn discrete_rows(curve: &DiscreteCurve) -> Vec<DiscreteRow> {
    curve
        .iter()
        .map(|p| DiscreteRow {
            tenor: p.label.clone(),
            months: p.months,
            rate: format_rate(p.rate),
            source: p.category.source_label(curve.mode()).to_string(),
        })
        .collect()
}

/// Rows of the monthly table for `month = 1..=horizon_months`.
///
/// Series are matched by month, so a linear fill that skipped early months
/// still lines up with the spline.
pub fn monthly_rows(
    linear: &MonthlySeries,
    spline: &MonthlySeries,
    horizon_months: u32,
) -> Vec<MonthlyRow> {
    let cell = |series: &MonthlySeries, month: u32| {
        series.rate_at(month).map(format_rate).unwrap_or_default()
    };

    (1..=horizon_months)
        .map(|month| MonthlyRow {
            month,
            linear: cell(linear, month),
            spline: cell(spline, month),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monthly::MonthlyRate;
    use crate::point::{CurveMode, CurvePoint, PointCategory};

    #[test]
    fn test_format_rate() {
        assert_eq!(format_rate(4.0), "4.0000");
        assert_eq!(format_rate(3.866_666_666), "3.8667");
        assert_eq!(format_rate(f64::NAN), "NaN");
    }

    #[test]
    fn test_discrete_rows_use_mode_labels() {
        let points = vec![CurvePoint::new("1M", 1, 4.04, PointCategory::ShortRate)];

        let full = DiscreteCurve::from_points(CurveMode::Full, points.clone());
        assert_eq!(
            discrete_rows(&full),
            vec![DiscreteRow {
                tenor: "1M".into(),
                months: 1,
                rate: "4.0400".into(),
                source: "BBSW (adj)".into(),
            }]
        );

        let reduced = DiscreteCurve::from_points(CurveMode::Reduced, points);
        assert_eq!(discrete_rows(&reduced)[0].source, "Spot (adj)");
    }

    #[test]
    fn test_monthly_rows_align_by_month() {
        let linear = MonthlySeries::new(vec![MonthlyRate::new(2, 4.1), MonthlyRate::new(3, 4.2)]);
        let spline = MonthlySeries::new(vec![
            MonthlyRate::new(1, 4.0),
            MonthlyRate::new(2, 4.15),
            MonthlyRate::new(3, 4.25),
        ]);

        let rows = monthly_rows(&linear, &spline, 4);
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].linear, "");
        assert_eq!(rows[0].spline, "4.0000");
        assert_eq!(rows[1].linear, "4.1000");
        assert_eq!(rows[3].month, 4);
        assert_eq!(rows[3].spline, "");
    }

    #[test]
    fn test_empty_inputs_give_blank_rows() {
        let rows = monthly_rows(&MonthlySeries::empty(), &MonthlySeries::empty(), 2);
        assert!(rows.iter().all(|r| r.linear.is_empty() && r.spline.is_empty()));
        assert!(discrete_rows(&DiscreteCurve::empty(CurveMode::Full)).is_empty());
    }
}
