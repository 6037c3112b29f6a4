//! Natural cubic spline interpolation.

use crate::error::{MathError, MathResult};
use crate::interpolation::{find_segment, validate_knots, Interpolator};

/// Piecewise polynomial coefficients of a natural cubic spline.
///
/// On segment `i` the spline is
/// `y[i] + b[i]*dx + c[i]*dx^2 + d[i]*dx^3` with `dx = x - x[i]`.
/// `c` carries one entry per knot (both end entries are zero for a natural
/// spline), `b` and `d` one entry per segment.
#[derive(Debug, Clone, PartialEq)]
pub struct SplineCoefficients {
    /// Knot abscissae.
    pub xs: Vec<f64>,
    /// Knot values.
    pub ys: Vec<f64>,
    /// Linear coefficients, one per segment.
    pub b: Vec<f64>,
    /// Quadratic coefficients, one per knot.
    pub c: Vec<f64>,
    /// Cubic coefficients, one per segment.
    pub d: Vec<f64>,
}

impl SplineCoefficients {
    /// Solves the natural spline system for the given knots.
    ///
    /// Uses the tridiagonal forward sweep (`l`, `mu`, `z`) followed by a
    /// backward sweep for `c`, `b` and `d`. The caller guarantees at least
    /// two knots and strictly increasing abscissae.
    fn solve(xs: Vec<f64>, ys: Vec<f64>) -> Self {
        let n = xs.len();
        let h: Vec<f64> = xs.windows(2).map(|w| w[1] - w[0]).collect();

        let mut alpha = vec![0.0; n];
        for i in 1..n - 1 {
            alpha[i] = (3.0 / h[i]) * (ys[i + 1] - ys[i]) - (3.0 / h[i - 1]) * (ys[i] - ys[i - 1]);
        }

        // Natural boundary: l[0] = l[n-1] = 1, mu and z start at zero.
        let mut l = vec![1.0; n];
        let mut mu = vec![0.0; n];
        let mut z = vec![0.0; n];
        for i in 1..n - 1 {
            l[i] = 2.0 * (xs[i + 1] - xs[i - 1]) - h[i - 1] * mu[i - 1];
            mu[i] = h[i] / l[i];
            z[i] = (alpha[i] - h[i - 1] * z[i - 1]) / l[i];
        }

        let mut c = vec![0.0; n];
        let mut b = vec![0.0; n - 1];
        let mut d = vec![0.0; n - 1];
        for j in (0..n - 1).rev() {
            c[j] = z[j] - mu[j] * c[j + 1];
            b[j] = (ys[j + 1] - ys[j]) / h[j] - h[j] * (c[j + 1] + 2.0 * c[j]) / 3.0;
            d[j] = (c[j + 1] - c[j]) / (3.0 * h[j]);
        }

        Self { xs, ys, b, c, d }
    }

    /// Number of polynomial segments.
    pub fn segments(&self) -> usize {
        self.b.len()
    }

    /// Evaluates the polynomial of segment `i` at offset `dx` from its left knot.
    pub fn evaluate(&self, i: usize, dx: f64) -> f64 {
        self.ys[i] + self.b[i] * dx + self.c[i] * dx * dx + self.d[i] * dx * dx * dx
    }

    fn evaluate_derivative(&self, i: usize, dx: f64) -> f64 {
        self.b[i] + 2.0 * self.c[i] * dx + 3.0 * self.d[i] * dx * dx
    }

    fn evaluate_second_derivative(&self, i: usize, dx: f64) -> f64 {
        2.0 * self.c[i] + 6.0 * self.d[i] * dx
    }
}

/// Natural cubic spline interpolation.
///
/// Constructs a smooth curve through data points using piecewise cubic
/// polynomials with continuous first and second derivatives.
///
/// "Natural" means the second derivative is zero at the endpoints.
/// Two knots are enough; with two knots the spline is the straight line
/// between them.
///
/// # Example
///
/// ```rust
/// use audcurve_math::interpolation::{CubicSpline, Interpolator};
///
/// let months = vec![0.0, 6.0, 24.0, 60.0];
/// let rates = vec![4.35, 3.90, 3.80, 4.00];
///
/// let spline = CubicSpline::new(months, rates).unwrap();
/// let y = spline.interpolate(24.0).unwrap();
/// assert!((y - 3.80).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct CubicSpline {
    coefficients: SplineCoefficients,
    allow_extrapolation: bool,
}

impl CubicSpline {
    /// Creates a natural cubic spline interpolator.
    ///
    /// # Arguments
    ///
    /// * `xs` - X coordinates (must be strictly increasing)
    /// * `ys` - Y coordinates
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than 2 points, if lengths differ,
    /// or if the x values are not strictly increasing.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        validate_knots(&xs, &ys, 2)?;

        Ok(Self {
            coefficients: SplineCoefficients::solve(xs, ys),
            allow_extrapolation: false,
        })
    }

    /// Creates a spline from points in any order.
    ///
    /// Points are sorted by abscissa (stable) before the fit. Coincident
    /// abscissae are still rejected.
    pub fn from_unsorted(points: &[(f64, f64)]) -> MathResult<Self> {
        let mut sorted = points.to_vec();
        sorted.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
        let (xs, ys) = sorted.into_iter().unzip();
        Self::new(xs, ys)
    }

    /// Enables extrapolation beyond the data range.
    ///
    /// Outside the knots the first and last segment polynomials are
    /// continued.
    #[must_use]
    pub fn with_extrapolation(mut self) -> Self {
        self.allow_extrapolation = true;
        self
    }

    /// Returns the solved polynomial coefficients.
    pub fn coefficients(&self) -> &SplineCoefficients {
        &self.coefficients
    }

    /// Finds the segment i such that xs[i] <= x < xs[i+1], clamped to the
    /// first and last segments.
    pub fn segment(&self, x: f64) -> usize {
        find_segment(&self.coefficients.xs, x)
    }

    /// Returns the second derivative at x.
    pub fn second_derivative(&self, x: f64) -> MathResult<f64> {
        self.check_range(x)?;
        let i = self.segment(x);
        Ok(self
            .coefficients
            .evaluate_second_derivative(i, x - self.coefficients.xs[i]))
    }

    fn check_range(&self, x: f64) -> MathResult<()> {
        if !self.allow_extrapolation && !self.in_range(x) {
            return Err(MathError::ExtrapolationNotAllowed {
                x,
                min: self.min_x(),
                max: self.max_x(),
            });
        }
        Ok(())
    }
}

impl Interpolator for CubicSpline {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        self.check_range(x)?;
        let i = self.segment(x);
        Ok(self.coefficients.evaluate(i, x - self.coefficients.xs[i]))
    }

    fn derivative(&self, x: f64) -> MathResult<f64> {
        self.check_range(x)?;
        let i = self.segment(x);
        Ok(self
            .coefficients
            .evaluate_derivative(i, x - self.coefficients.xs[i]))
    }

    fn allows_extrapolation(&self) -> bool {
        self.allow_extrapolation
    }

    fn min_x(&self) -> f64 {
        self.coefficients.xs[0]
    }

    fn max_x(&self) -> f64 {
        self.coefficients.xs[self.coefficients.xs.len() - 1]
    }
}
