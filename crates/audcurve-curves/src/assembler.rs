//! Discrete curve assembly.
//!
//! Turns a short rate snapshot and a bond yield snapshot into the ordered
//! tenor points of a [`DiscreteCurve`], following a [`TenorSchedule`].

use crate::point::{CurveMode, CurvePoint, DiscreteCurve};
use crate::rates::{spread_adjustment, BondYieldSet, ShortRateSet};
use crate::schedule::TenorSchedule;

/// Assembles the discrete curve with the standard tenor schedule.
///
/// Produces `Cash, 1M, 3M, 6M, 2Y, 3Y, 5Y, 10Y` at months
/// `0, 1, 3, 6, 24, 36, 60, 120`; reduced mode leaves out the cash point.
/// The 1M, 3M and 6M rates are lowered by `spread_bps / 100`.
///
/// Either input missing gives an empty curve.
///
/// # Example
///
/// ```rust
/// use audcurve_curves::{assemble, BondYieldSet, CurveMode, ShortRateSet};
///
/// let short = ShortRateSet::new(4.35, 4.34, 4.30, 4.20);
/// let bonds = BondYieldSet::new(3.80, 3.85, 4.00, 4.40);
///
/// let curve = assemble(Some(&short), Some(&bonds), 30.0, CurveMode::Reduced);
/// assert_eq!(curve.len(), 7);
/// assert_eq!(curve.points()[0].label, "1M");
///
/// assert!(assemble(None, Some(&bonds), 30.0, CurveMode::Full).is_empty());
/// ```
pub fn assemble(
    short_rates: Option<&ShortRateSet>,
    bond_yields: Option<&BondYieldSet>,
    spread_bps: f64,
    mode: CurveMode,
) -> DiscreteCurve {
    assemble_with_schedule(
        &TenorSchedule::standard(),
        short_rates,
        bond_yields,
        spread_bps,
        mode,
    )
}

/// Assembles the discrete curve from a custom schedule.
///
/// Points come out in schedule order. Rates are copied as given: NaN or
/// negative inputs show up on the curve unchanged.
pub fn assemble_with_schedule(
    schedule: &TenorSchedule,
    short_rates: Option<&ShortRateSet>,
    bond_yields: Option<&BondYieldSet>,
    spread_bps: f64,
    mode: CurveMode,
) -> DiscreteCurve {
    let (Some(short_rates), Some(bond_yields)) = (short_rates, bond_yields) else {
        return DiscreteCurve::empty(mode);
    };

    let adjustment = spread_adjustment(spread_bps);
    let points = schedule
        .for_mode(mode)
        .map(|spec| {
            let raw = spec.field.read(short_rates, bond_yields);
            let rate = if spec.adjustable { raw - adjustment } else { raw };
            CurvePoint::new(spec.label.clone(), spec.months, rate, spec.category)
        })
        .collect();

    DiscreteCurve::from_points(mode, points)
}
