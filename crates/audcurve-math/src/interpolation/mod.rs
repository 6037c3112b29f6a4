//! Interpolation methods for yield curve construction.
//!
//! # Available Methods
//!
//! - [`LinearInterpolator`]: straight lines between knots, optional flat
//!   extrapolation beyond the end knots
//! - [`CubicSpline`]: natural cubic spline (zero second derivative at both
//!   ends), optional polynomial extrapolation of the end segments
//!
//! | Method | Smoothness | Overshoot | Use Case |
//! |--------|------------|-----------|----------|
//! | Linear | C0 | Never | Tabular fills, sanity checks |
//! | Cubic Spline | C2 | Possible | Smooth monthly curves |
//!
//! Both methods return the knot value exactly when queried at a knot.

mod cubic_spline;
mod linear;

pub use cubic_spline::{CubicSpline, SplineCoefficients};
pub use linear::LinearInterpolator;

use crate::error::{MathError, MathResult};

/// Trait for interpolation methods.
///
/// All interpolation methods implement this trait, providing a unified
/// interface for curve construction.
pub trait Interpolator: Send + Sync {
    /// Returns the interpolated value at x.
    fn interpolate(&self, x: f64) -> MathResult<f64>;

    /// Returns the first derivative at x.
    fn derivative(&self, x: f64) -> MathResult<f64>;

    /// Returns true if extrapolation is allowed.
    fn allows_extrapolation(&self) -> bool {
        false
    }

    /// Returns the minimum x value in the data.
    fn min_x(&self) -> f64;

    /// Returns the maximum x value in the data.
    fn max_x(&self) -> f64;

    /// Checks if x is within the interpolation range.
    fn in_range(&self, x: f64) -> bool {
        x >= self.min_x() && x <= self.max_x()
    }
}

/// Validates a knot set shared by every interpolator.
///
/// Requires at least `required` points, equal lengths and strictly
/// increasing abscissae.
pub(crate) fn validate_knots(xs: &[f64], ys: &[f64], required: usize) -> MathResult<()> {
    if xs.len() < required {
        return Err(MathError::insufficient_data(required, xs.len()));
    }
    if xs.len() != ys.len() {
        return Err(MathError::invalid_input(format!(
            "xs and ys must have same length: {} vs {}",
            xs.len(),
            ys.len()
        )));
    }
    for i in 1..xs.len() {
        // NaN abscissae compare as None and are rejected too.
        if xs[i].partial_cmp(&xs[i - 1]) != Some(std::cmp::Ordering::Greater) {
            return Err(MathError::invalid_input(format!(
                "x values must be strictly increasing: x[{}] = {} follows {}",
                i,
                xs[i],
                xs[i - 1]
            )));
        }
    }
    Ok(())
}

/// Finds the index i such that xs[i] <= x < xs[i+1], clamped to the
/// first and last segments.
pub(crate) fn find_segment(xs: &[f64], x: f64) -> usize {
    let last = xs.len() - 2;
    match xs.binary_search_by(|probe| probe.partial_cmp(&x).unwrap_or(std::cmp::Ordering::Equal)) {
        Ok(i) => i.min(last),
        Err(i) => i.saturating_sub(1).min(last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_all_interpolators_through_points() {
        let months = vec![0.0, 1.0, 3.0, 6.0, 24.0, 36.0, 60.0, 120.0];
        let rates = vec![4.35, 4.04, 4.00, 3.90, 3.80, 3.85, 4.00, 4.40];

        let linear = LinearInterpolator::new(months.clone(), rates.clone()).unwrap();
        let spline = CubicSpline::new(months.clone(), rates.clone()).unwrap();

        for (m, r) in months.iter().zip(rates.iter()) {
            assert_relative_eq!(linear.interpolate(*m).unwrap(), *r, epsilon = 1e-12);
            assert_relative_eq!(spline.interpolate(*m).unwrap(), *r, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_derivative_consistency() {
        let months = vec![1.0, 3.0, 6.0, 24.0, 36.0];
        let rates = vec![4.04, 4.00, 3.90, 3.80, 3.85];

        let linear = LinearInterpolator::new(months.clone(), rates.clone()).unwrap();
        check_derivative(&linear, 12.0, "Linear");

        let spline = CubicSpline::new(months, rates).unwrap();
        check_derivative(&spline, 12.0, "CubicSpline");
        check_derivative(&spline, 30.0, "CubicSpline");
    }

    fn check_derivative(interp: &dyn Interpolator, t: f64, name: &str) {
        let h = 1e-6;
        let y_plus = interp.interpolate(t + h).unwrap();
        let y_minus = interp.interpolate(t - h).unwrap();
        let numerical = (y_plus - y_minus) / (2.0 * h);

        let analytical = interp.derivative(t).unwrap();

        assert!(
            (analytical - numerical).abs() < 1e-5,
            "{} derivative at t={}: analytical={}, numerical={}",
            name,
            t,
            analytical,
            numerical
        );
    }

    #[test]
    fn test_validate_knots_rejects_duplicates() {
        let err = validate_knots(&[0.0, 6.0, 6.0], &[1.0, 2.0, 3.0], 2).unwrap_err();
        assert!(matches!(err, MathError::InvalidInput { .. }));
    }

    #[test]
    fn test_validate_knots_rejects_nan() {
        assert!(validate_knots(&[0.0, f64::NAN], &[1.0, 2.0], 2).is_err());
    }

    #[test]
    fn test_find_segment_clamps() {
        let xs = [0.0, 1.0, 3.0, 6.0];
        assert_eq!(find_segment(&xs, -1.0), 0);
        assert_eq!(find_segment(&xs, 0.0), 0);
        assert_eq!(find_segment(&xs, 1.0), 1);
        assert_eq!(find_segment(&xs, 2.0), 1);
        assert_eq!(find_segment(&xs, 6.0), 2);
        assert_eq!(find_segment(&xs, 96.0), 2);
    }
}
