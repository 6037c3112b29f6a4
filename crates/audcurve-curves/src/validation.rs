//! Sanity filter for monthly series.
//!
//! Spline fills can overshoot and inputs can carry NaN. Before a monthly
//! series is shown or exported, entries outside a plausible rate band are
//! dropped. The discrete curve is never filtered.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{CurveError, CurveResult};
use crate::monthly::MonthlySeries;

/// Inclusive band of plausible rates, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateBounds {
    /// Lowest accepted rate.
    pub min: f64,
    /// Highest accepted rate.
    pub max: f64,
}

impl RateBounds {
    /// Lowest rate kept by [`clean`].
    pub const DEFAULT_MIN: f64 = 0.0;
    /// Highest rate kept by [`clean`].
    pub const DEFAULT_MAX: f64 = 30.0;

    /// Creates a band.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidConfig`] when either bound is not finite
    /// or `min > max`.
    pub fn new(min: f64, max: f64) -> CurveResult<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(CurveError::invalid_config(
                "rate bounds",
                format!("bounds must be finite, got [{min}, {max}]"),
            ));
        }
        if min > max {
            return Err(CurveError::invalid_config(
                "rate bounds",
                format!("min_rate {min} exceeds max_rate {max}"),
            ));
        }
        Ok(Self { min, max })
    }

    /// True for a finite rate inside the band.
    pub fn contains(&self, rate: f64) -> bool {
        rate.is_finite() && rate >= self.min && rate <= self.max
    }
}

impl Default for RateBounds {
    fn default() -> Self {
        Self {
            min: Self::DEFAULT_MIN,
            max: Self::DEFAULT_MAX,
        }
    }
}

/// Keeps entries with a finite rate in `[0, 30]`.
///
/// A filter, not a transform: kept entries are unchanged and
/// `clean(&clean(x)) == clean(x)`.
pub fn clean(series: &MonthlySeries) -> MonthlySeries {
    clean_with(series, RateBounds::default())
}

/// Keeps entries with a finite rate inside `bounds`.
pub fn clean_with(series: &MonthlySeries, bounds: RateBounds) -> MonthlySeries {
    let cleaned: MonthlySeries = series
        .iter()
        .filter(|e| bounds.contains(e.rate))
        .copied()
        .collect();

    let dropped = series.len() - cleaned.len();
    if dropped > 0 {
        warn!(
            "dropped {dropped} of {} monthly rates outside [{}, {}]",
            series.len(),
            bounds.min,
            bounds.max
        );
    }
    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monthly::MonthlyRate;

    fn series(rates: &[f64]) -> MonthlySeries {
        rates
            .iter()
            .zip(1..)
            .map(|(&rate, month)| MonthlyRate::new(month, rate))
            .collect()
    }

    #[test]
    fn test_clean_drops_bad_values() {
        let raw = series(&[4.0, f64::NAN, -0.01, 30.0, 30.01, f64::INFINITY, 0.0]);
        let cleaned = clean(&raw);

        let months: Vec<u32> = cleaned.iter().map(|e| e.month).collect();
        assert_eq!(months, vec![1, 4, 7]);
        assert_eq!(cleaned.rate_at(4), Some(30.0));
    }

    #[test]
    fn test_clean_is_idempotent() {
        let raw = series(&[4.0, 45.0, f64::NEG_INFINITY, 2.5]);
        let once = clean(&raw);
        assert_eq!(clean(&once), once);
    }

    #[test]
    fn test_clean_empty() {
        assert_eq!(clean(&MonthlySeries::empty()), MonthlySeries::empty());
    }

    #[test]
    fn test_custom_bounds() {
        let bounds = RateBounds::new(-1.0, 5.0).unwrap();
        let cleaned = clean_with(&series(&[-0.5, 5.5, 4.9]), bounds);
        assert_eq!(cleaned.len(), 2);
    }

    #[test]
    fn test_bounds_validation() {
        assert!(RateBounds::new(5.0, 1.0).is_err());
        assert!(RateBounds::new(f64::NAN, 1.0).is_err());
        assert!(RateBounds::new(2.0, 2.0).is_ok());
    }
}
