//! One-shot derivation of every curve from one set of inputs.
//!
//! Callers rebuild [`CurveInputs`] whenever a rate set, the spread, the mode
//! or the horizon changes and call [`derive_curves`] again. Nothing is
//! cached here.

use log::debug;

use crate::assembler::assemble_with_schedule;
use crate::config::CurveConfig;
use crate::monthly::{
    linear_fill, spline_fill, InterpolationChoice, MonthlySeries, DEFAULT_HORIZON_MONTHS,
};
use crate::point::{CurveMode, DiscreteCurve};
use crate::rates::{BondYieldSet, ShortRateSet};
use crate::schedule::TenorSchedule;
use crate::validation::{clean_with, RateBounds};

/// Everything the curves depend on.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveInputs {
    /// Short-end snapshot, `None` while unavailable.
    pub short_rates: Option<ShortRateSet>,
    /// Bond snapshot, `None` while unavailable.
    pub bond_yields: Option<BondYieldSet>,
    /// Spread in basis points.
    pub spread_bps: f64,
    /// Full or reduced curve.
    pub mode: CurveMode,
    /// Last month of the monthly series.
    pub horizon_months: u32,
    /// Tenor schedule.
    pub schedule: TenorSchedule,
}

impl CurveInputs {
    /// Inputs with zero spread, full mode, the default horizon and the
    /// standard schedule.
    pub fn new(short_rates: Option<ShortRateSet>, bond_yields: Option<BondYieldSet>) -> Self {
        Self {
            short_rates,
            bond_yields,
            spread_bps: 0.0,
            mode: CurveMode::Full,
            horizon_months: DEFAULT_HORIZON_MONTHS,
            schedule: TenorSchedule::standard(),
        }
    }

    /// Inputs seeded from a configuration.
    pub fn from_config(
        config: &CurveConfig,
        short_rates: Option<ShortRateSet>,
        bond_yields: Option<BondYieldSet>,
    ) -> Self {
        Self {
            short_rates,
            bond_yields,
            spread_bps: config.spread_bps,
            mode: config.mode,
            horizon_months: config.horizon_months,
            schedule: config.schedule(),
        }
    }

    /// Sets the spread.
    #[must_use]
    pub fn with_spread_bps(mut self, spread_bps: f64) -> Self {
        self.spread_bps = spread_bps;
        self
    }

    /// Sets the mode.
    #[must_use]
    pub fn with_mode(mut self, mode: CurveMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the horizon.
    #[must_use]
    pub fn with_horizon(mut self, horizon_months: u32) -> Self {
        self.horizon_months = horizon_months;
        self
    }

    /// Sets the schedule.
    #[must_use]
    pub fn with_schedule(mut self, schedule: TenorSchedule) -> Self {
        self.schedule = schedule;
        self
    }
}

/// The discrete curve and both raw monthly fills.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedCurves {
    /// Assembled tenor points.
    pub discrete: DiscreteCurve,
    /// Linear monthly fill.
    pub linear: MonthlySeries,
    /// Spline monthly fill.
    pub spline: MonthlySeries,
}

impl DerivedCurves {
    /// The monthly series for one interpolation method.
    pub fn series(&self, choice: InterpolationChoice) -> &MonthlySeries {
        match choice {
            InterpolationChoice::Linear => &self.linear,
            InterpolationChoice::Spline => &self.spline,
        }
    }

    /// A copy with both monthly series passed through the validator.
    #[must_use]
    pub fn cleaned(&self, bounds: RateBounds) -> Self {
        Self {
            discrete: self.discrete.clone(),
            linear: clean_with(&self.linear, bounds),
            spline: clean_with(&self.spline, bounds),
        }
    }
}

/// Assembles the discrete curve and fills both monthly series.
pub fn derive_curves(inputs: &CurveInputs) -> DerivedCurves {
    let discrete = assemble_with_schedule(
        &inputs.schedule,
        inputs.short_rates.as_ref(),
        inputs.bond_yields.as_ref(),
        inputs.spread_bps,
        inputs.mode,
    );
    let linear = linear_fill(&discrete, inputs.horizon_months);
    let spline = spline_fill(&discrete, inputs.horizon_months);

    debug!(
        "derived {} curve: {} points, {} linear months, {} spline months",
        inputs.mode,
        discrete.len(),
        linear.len(),
        spline.len()
    );

    DerivedCurves {
        discrete,
        linear,
        spline,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn market() -> (ShortRateSet, BondYieldSet) {
        (
            ShortRateSet::new(4.35, 4.34, 4.30, 4.20),
            BondYieldSet::new(3.80, 3.85, 4.00, 4.40),
        )
    }

    #[test]
    fn test_derive_full_pipeline() {
        let (short, bonds) = market();
        let inputs = CurveInputs::new(Some(short), Some(bonds)).with_spread_bps(30.0);
        let curves = derive_curves(&inputs);

        assert_eq!(curves.discrete.len(), 8);
        assert_eq!(curves.linear.len(), 96);
        assert_eq!(curves.spline.len(), 96);
        assert_relative_eq!(curves.linear.rate_at(12).unwrap(), 3.8667, epsilon = 1e-4);
    }

    #[test]
    fn test_derive_is_deterministic() {
        let (short, bonds) = market();
        let inputs = CurveInputs::new(Some(short), Some(bonds))
            .with_mode(CurveMode::Reduced)
            .with_horizon(48);
        assert_eq!(derive_curves(&inputs), derive_curves(&inputs));
    }

    #[test]
    fn test_derive_missing_bonds() {
        let (short, _) = market();
        let curves = derive_curves(&CurveInputs::new(Some(short), None));
        assert!(curves.discrete.is_empty());
        assert!(curves.linear.is_empty());
        assert!(curves.spline.is_empty());
    }

    #[test]
    fn test_series_selects_method() {
        let (short, bonds) = market();
        let curves = derive_curves(&CurveInputs::new(Some(short), Some(bonds)));
        assert_eq!(curves.series(InterpolationChoice::Linear), &curves.linear);
        assert_eq!(curves.series(InterpolationChoice::Spline), &curves.spline);
    }

    #[test]
    fn test_cleaned_filters_monthly_only() {
        let (_, bonds) = market();
        let short = ShortRateSet::new(f64::NAN, 4.34, 4.30, 4.20);
        let curves = derive_curves(&CurveInputs::new(Some(short), Some(bonds)));
        let cleaned = curves.cleaned(RateBounds::default());

        assert!(cleaned.discrete.points()[0].rate.is_nan());
        assert!(cleaned.linear.iter().all(|e| e.rate.is_finite()));
        assert!(cleaned.spline.len() <= curves.spline.len());
    }

    #[test]
    fn test_from_config() {
        let config = CurveConfig {
            spread_bps: 12.5,
            horizon_months: 24,
            mode: CurveMode::Reduced,
            ..CurveConfig::default()
        };
        let (short, bonds) = market();
        let inputs = CurveInputs::from_config(&config, Some(short), Some(bonds));

        assert_eq!(inputs.spread_bps, 12.5);
        assert_eq!(inputs.horizon_months, 24);
        let curves = derive_curves(&inputs);
        assert_eq!(curves.discrete.len(), 7);
        assert_eq!(curves.spline.len(), 24);
    }
}
