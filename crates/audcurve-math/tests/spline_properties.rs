//! Property-based tests for the interpolators.
//!
//! These tests verify properties that should hold for any strictly
//! increasing knot set:
//! - Both interpolators reproduce the knots
//! - Linear output stays inside the bracketing knot values
//! - Spline evaluation agrees with its own segment polynomials

use audcurve_math::prelude::*;
use proptest::prelude::*;

/// Generates strictly increasing abscissae with matching rates.
fn knots() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    prop::collection::vec((1u32..24, 0.0f64..10.0), 2..10).prop_map(|steps| {
        let mut x = 0.0;
        let mut xs = Vec::with_capacity(steps.len());
        let mut ys = Vec::with_capacity(steps.len());
        for (gap, rate) in steps {
            xs.push(x);
            ys.push(rate);
            x += f64::from(gap);
        }
        (xs, ys)
    })
}

proptest! {
    #[test]
    fn linear_reproduces_knots((xs, ys) in knots()) {
        let interp = LinearInterpolator::new(xs.clone(), ys.clone()).unwrap();
        for (x, y) in xs.iter().zip(ys.iter()) {
            prop_assert_eq!(interp.interpolate(*x).unwrap(), *y);
        }
    }

    #[test]
    fn spline_reproduces_knots((xs, ys) in knots()) {
        let spline = CubicSpline::new(xs.clone(), ys.clone()).unwrap();
        for (x, y) in xs.iter().zip(ys.iter()) {
            prop_assert!((spline.interpolate(*x).unwrap() - y).abs() < 1e-9);
        }
    }

    #[test]
    fn linear_is_bounded_by_brackets((xs, ys) in knots(), frac in 0.0f64..1.0) {
        let interp = LinearInterpolator::new(xs.clone(), ys.clone()).unwrap();
        for i in 0..xs.len() - 1 {
            let x = xs[i] + frac * (xs[i + 1] - xs[i]);
            let y = interp.interpolate(x).unwrap();
            let lo = ys[i].min(ys[i + 1]);
            let hi = ys[i].max(ys[i + 1]);
            prop_assert!(y >= lo - 1e-12 && y <= hi + 1e-12);
        }
    }

    #[test]
    fn spline_matches_segment_polynomials((xs, ys) in knots(), frac in 0.0f64..1.0) {
        let spline = CubicSpline::new(xs.clone(), ys).unwrap();
        let coeffs = spline.coefficients().clone();
        for i in 0..coeffs.segments() {
            let dx = frac * (xs[i + 1] - xs[i]);
            let direct = coeffs.ys[i]
                + coeffs.b[i] * dx
                + coeffs.c[i] * dx.powi(2)
                + coeffs.d[i] * dx.powi(3);
            let evaluated = spline.interpolate(xs[i] + dx).unwrap();
            prop_assert!((direct - evaluated).abs() < 1e-9);
        }
    }
}
