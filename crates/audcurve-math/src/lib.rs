//! # audcurve Math
//!
//! Numerical building blocks for the audcurve tools.
//!
//! This crate provides:
//!
//! - **Interpolation**: [`LinearInterpolator`] with flat extrapolation and a
//!   natural [`CubicSpline`] that exposes its solved polynomial coefficients
//! - **Errors**: [`MathError`] for invalid knots and out-of-range queries
//!
//! Everything here works on plain `f64` abscissae. The curve crate maps
//! tenor months onto them.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::float_cmp)]

pub mod error;
pub mod interpolation;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::interpolation::{
        CubicSpline, Interpolator, LinearInterpolator, SplineCoefficients,
    };
}

pub use error::{MathError, MathResult};
pub use interpolation::{CubicSpline, Interpolator, LinearInterpolator, SplineCoefficients};
