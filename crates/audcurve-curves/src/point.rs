//! Curve points and the discrete curve.

use std::fmt;

use audcurve_math::{CubicSpline, Interpolator, LinearInterpolator};
use serde::{Deserialize, Serialize};

use crate::error::CurveResult;
use crate::monthly::InterpolationChoice;

/// Provenance of a curve point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PointCategory {
    /// Overnight cash rate, never spread-adjusted.
    CashRate,
    /// Short-end term rate, spread-adjusted when its schedule entry says so.
    ShortRate,
    /// Government bond yield, passed through.
    BondYield,
}

impl PointCategory {
    /// Returns the source label shown in tables and exports.
    ///
    /// Short-end points read as bank bill rates when the curve is anchored
    /// on the cash rate and as spot rates when it is not.
    pub fn source_label(self, mode: CurveMode) -> &'static str {
        match (self, mode) {
            (Self::CashRate, _) => "Cash Rate",
            (Self::ShortRate, CurveMode::Full) => "BBSW (adj)",
            (Self::ShortRate, CurveMode::Reduced) => "Spot (adj)",
            (Self::BondYield, _) => "Govt Bond",
        }
    }
}

impl fmt::Display for PointCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::CashRate => "cash-rate",
            Self::ShortRate => "short-rate",
            Self::BondYield => "bond-yield",
        };
        write!(f, "{name}")
    }
}

/// Whether the discrete curve starts at the cash rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveMode {
    /// Cash rate at month 0, then short-end and bond points.
    #[default]
    Full,
    /// Short-end and bond points only.
    Reduced,
}

impl CurveMode {
    /// Maps an include-cash flag onto a mode.
    pub fn from_include_cash(include_cash: bool) -> Self {
        if include_cash {
            Self::Full
        } else {
            Self::Reduced
        }
    }

    /// True when the cash-rate point is part of the curve.
    pub fn includes_cash(self) -> bool {
        self == Self::Full
    }
}

impl fmt::Display for CurveMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full => write!(f, "full"),
            Self::Reduced => write!(f, "reduced"),
        }
    }
}

/// One tenor on the discrete curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Tenor display string, e.g. `3M` or `10Y`.
    pub label: String,
    /// Tenor in whole months; the interpolation abscissa.
    pub months: u32,
    /// Rate in percent.
    pub rate: f64,
    /// Where the rate came from.
    pub category: PointCategory,
}

impl CurvePoint {
    /// Creates a curve point.
    pub fn new(label: impl Into<String>, months: u32, rate: f64, category: PointCategory) -> Self {
        Self {
            label: label.into(),
            months,
            rate,
            category,
        }
    }
}

/// An ordered set of curve points built in one [`CurveMode`].
///
/// [`assemble`](crate::assemble) always produces strictly increasing
/// months. Curves built with [`DiscreteCurve::from_points`] carry whatever
/// order the caller gave; the interpolators do not rely on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscreteCurve {
    mode: CurveMode,
    points: Vec<CurvePoint>,
}

impl DiscreteCurve {
    /// Creates an empty curve.
    pub fn empty(mode: CurveMode) -> Self {
        Self {
            mode,
            points: Vec::new(),
        }
    }

    /// Wraps points as given, without reordering or validation.
    pub fn from_points(mode: CurveMode, points: Vec<CurvePoint>) -> Self {
        Self { mode, points }
    }

    /// The mode this curve was built in.
    pub fn mode(&self) -> CurveMode {
        self.mode
    }

    /// The curve points in stored order.
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the curve has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates over the points in stored order.
    pub fn iter(&self) -> std::slice::Iter<'_, CurvePoint> {
        self.points.iter()
    }

    /// Finds the point with the given label.
    pub fn point(&self, label: &str) -> Option<&CurvePoint> {
        self.points.iter().find(|p| p.label == label)
    }

    /// Returns `(months, rate)` pairs in stored order.
    pub fn knots(&self) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .map(|p| (f64::from(p.months), p.rate))
            .collect()
    }

    /// Builds a continuous interpolator over this curve's points.
    ///
    /// Linear holds the end rates flat outside the knots; the spline
    /// continues its end segments. Points are sorted first.
    ///
    /// # Errors
    ///
    /// Fails with fewer than two points or with coincident months.
    pub fn interpolator(&self, choice: InterpolationChoice) -> CurveResult<Box<dyn Interpolator>> {
        let mut knots = self.knots();
        knots.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

        let interpolator: Box<dyn Interpolator> = match choice {
            InterpolationChoice::Linear => {
                let (xs, ys) = knots.into_iter().unzip();
                Box::new(LinearInterpolator::new(xs, ys)?.with_flat_extrapolation())
            }
            InterpolationChoice::Spline => {
                Box::new(CubicSpline::from_unsorted(&knots)?.with_extrapolation())
            }
        };
        Ok(interpolator)
    }
}

impl<'a> IntoIterator for &'a DiscreteCurve {
    type Item = &'a CurvePoint;
    type IntoIter = std::slice::Iter<'a, CurvePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
