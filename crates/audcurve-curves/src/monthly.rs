//! Dense monthly curves derived from a discrete curve.
//!
//! Two independent fills are provided:
//!
//! - [`linear_fill`]: straight lines between the bracketing points, flat past
//!   the last point, months before the first point skipped
//! - [`spline_fill`]: a natural cubic spline evaluated at every month
//!
//! Both take the horizon explicitly and produce entries for
//! `month = 1..=horizon` in order.

use std::fmt;

use audcurve_math::CubicSpline;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::point::{CurvePoint, DiscreteCurve};

/// Default horizon: eight years of months.
pub const DEFAULT_HORIZON_MONTHS: u32 = 96;

/// Which monthly fill to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterpolationChoice {
    /// Piecewise-linear.
    #[default]
    Linear,
    /// Natural cubic spline.
    Spline,
}

impl InterpolationChoice {
    /// Fills a monthly series with this method.
    pub fn fill(self, curve: &DiscreteCurve, horizon_months: u32) -> MonthlySeries {
        match self {
            Self::Linear => linear_fill(curve, horizon_months),
            Self::Spline => spline_fill(curve, horizon_months),
        }
    }
}

impl fmt::Display for InterpolationChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "linear"),
            Self::Spline => write!(f, "spline"),
        }
    }
}

/// One month of an interpolated curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRate {
    /// Month index, starting at 1.
    pub month: u32,
    /// Rate in percent.
    pub rate: f64,
}

impl MonthlyRate {
    /// Creates a monthly entry.
    pub fn new(month: u32, rate: f64) -> Self {
        Self { month, rate }
    }
}

/// A monthly curve kept in month order.
///
/// Every constructor sorts by month (stably), so [`MonthlySeries::rate_at`]
/// can binary-search. The fills never produce two entries for one month.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<MonthlyRate>", into = "Vec<MonthlyRate>")]
pub struct MonthlySeries {
    entries: Vec<MonthlyRate>,
}

impl MonthlySeries {
    /// Builds a series, ordering the entries by month.
    pub fn new(mut entries: Vec<MonthlyRate>) -> Self {
        entries.sort_by_key(|e| e.month);
        Self { entries }
    }

    /// An empty series.
    pub fn empty() -> Self {
        Self::default()
    }

    /// All entries.
    pub fn entries(&self) -> &[MonthlyRate] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries in month order.
    pub fn iter(&self) -> std::slice::Iter<'_, MonthlyRate> {
        self.entries.iter()
    }

    /// Rate for a month, `None` when the month has no entry.
    pub fn rate_at(&self, month: u32) -> Option<f64> {
        self.entries
            .binary_search_by_key(&month, |e| e.month)
            .ok()
            .map(|i| self.entries[i].rate)
    }
}

impl From<Vec<MonthlyRate>> for MonthlySeries {
    fn from(entries: Vec<MonthlyRate>) -> Self {
        Self::new(entries)
    }
}

impl From<MonthlySeries> for Vec<MonthlyRate> {
    fn from(series: MonthlySeries) -> Self {
        series.entries
    }
}

impl FromIterator<MonthlyRate> for MonthlySeries {
    fn from_iter<I: IntoIterator<Item = MonthlyRate>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for MonthlySeries {
    type Item = MonthlyRate;
    type IntoIter = std::vec::IntoIter<MonthlyRate>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a MonthlySeries {
    type Item = &'a MonthlyRate;
    type IntoIter = std::slice::Iter<'a, MonthlyRate>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Fills months `1..=horizon_months` by linear interpolation.
///
/// For each month the curve is scanned for `lower`, the point with the
/// largest `months <= m`, and `upper`, the point with the smallest
/// `months >= m`:
///
/// - both present with different months: linear interpolation
/// - `upper` missing or at the same month: `lower.rate`
/// - `lower` missing: the month is skipped
///
/// An empty curve gives an empty series.
pub fn linear_fill(curve: &DiscreteCurve, horizon_months: u32) -> MonthlySeries {
    let series: MonthlySeries = (1..=horizon_months)
        .filter_map(|month| linear_rate(curve.points(), month).map(|r| MonthlyRate::new(month, r)))
        .collect();

    if series.len() < horizon_months as usize && !curve.is_empty() {
        debug!(
            "linear fill skipped {} months before the first knot",
            horizon_months as usize - series.len()
        );
    }
    series
}

fn linear_rate(points: &[CurvePoint], month: u32) -> Option<f64> {
    // max_by_key keeps the last of equal months, min_by_key the first.
    let lower = points
        .iter()
        .filter(|p| p.months <= month)
        .max_by_key(|p| p.months)?;
    let upper = points
        .iter()
        .filter(|p| p.months >= month)
        .min_by_key(|p| p.months);

    match upper {
        Some(upper) if upper.months != lower.months => {
            let span = f64::from(upper.months - lower.months);
            let offset = f64::from(month - lower.months);
            Some(lower.rate + (upper.rate - lower.rate) * offset / span)
        }
        _ => Some(lower.rate),
    }
}

/// Fills months `1..=horizon_months` from a natural cubic spline.
///
/// Points are sorted by month before the fit. Each month uses the segment
/// `i` with `x[i] <= m < x[i+1]`, clamped to the first and last segments,
/// so months past the last point continue the last cubic.
///
/// Returns an empty series for fewer than two points, and logs a warning
/// and returns an empty series when two points share a month.
pub fn spline_fill(curve: &DiscreteCurve, horizon_months: u32) -> MonthlySeries {
    if curve.len() < 2 {
        return MonthlySeries::empty();
    }

    let spline = match CubicSpline::from_unsorted(&curve.knots()) {
        Ok(spline) => spline,
        Err(e) => {
            warn!("spline fill skipped: {e}");
            return MonthlySeries::empty();
        }
    };

    let coefficients = spline.coefficients();
    (1..=horizon_months)
        .map(|month| {
            let x = f64::from(month);
            let i = spline.segment(x);
            MonthlyRate::new(month, coefficients.evaluate(i, x - coefficients.xs[i]))
        })
        .collect()
}
