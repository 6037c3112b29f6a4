//! # audcurve Curves
//!
//! Curve construction for the audcurve tools.
//!
//! This crate turns a snapshot of short-end rates (cash rate plus 1M/3M/6M
//! bank bill swap rates) and government bond yields (2Y/3Y/5Y/10Y) into:
//!
//! - **Discrete Curve**: ordered tenor/rate points, see [`assemble`]
//! - **Linear Fill**: one rate per month by piecewise-linear interpolation,
//!   see [`linear_fill`]
//! - **Spline Fill**: one rate per month from a natural cubic spline, see
//!   [`spline_fill`]
//! - **Validation**: a filter that keeps plausible monthly rates, see [`clean`]
//!
//! [`derive_curves`] runs the whole pipeline for one set of inputs. Every
//! function is pure; callers decide when to recompute.
//!
//! ## Quick Start
//!
//! ```rust
//! use audcurve_curves::prelude::*;
//!
//! let short = ShortRateSet::new(4.35, 4.34, 4.30, 4.20);
//! let bonds = BondYieldSet::new(3.80, 3.85, 4.00, 4.40);
//!
//! let inputs = CurveInputs::new(Some(short), Some(bonds)).with_spread_bps(30.0);
//! let curves = derive_curves(&inputs);
//!
//! assert_eq!(curves.discrete.len(), 8);
//! assert_eq!(curves.spline.len(), 96);
//! let m12 = curves.linear.rate_at(12).unwrap();
//! assert!((m12 - 3.8667).abs() < 1e-4);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::float_cmp)]

pub mod assembler;
pub mod config;
pub mod derive;
pub mod error;
pub mod export;
pub mod monthly;
pub mod point;
pub mod rates;
pub mod schedule;
pub mod validation;

pub use assembler::{assemble, assemble_with_schedule};
pub use config::CurveConfig;
pub use derive::{derive_curves, CurveInputs, DerivedCurves};
pub use error::{CurveError, CurveResult};
pub use monthly::{
    linear_fill, spline_fill, InterpolationChoice, MonthlyRate, MonthlySeries,
    DEFAULT_HORIZON_MONTHS,
};
pub use point::{CurveMode, CurvePoint, DiscreteCurve, PointCategory};
pub use rates::{BondYieldSet, RateField, ShortRateSet};
pub use schedule::{TenorSchedule, TenorSpec};
pub use validation::{clean, clean_with, RateBounds};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::assembler::{assemble, assemble_with_schedule};
    pub use crate::config::CurveConfig;
    pub use crate::derive::{derive_curves, CurveInputs, DerivedCurves};
    pub use crate::error::{CurveError, CurveResult};
    pub use crate::monthly::{
        linear_fill, spline_fill, InterpolationChoice, MonthlyRate, MonthlySeries,
    };
    pub use crate::point::{CurveMode, CurvePoint, DiscreteCurve, PointCategory};
    pub use crate::rates::{BondYieldSet, RateField, ShortRateSet};
    pub use crate::schedule::{TenorSchedule, TenorSpec};
    pub use crate::validation::{clean, clean_with, RateBounds};
}
