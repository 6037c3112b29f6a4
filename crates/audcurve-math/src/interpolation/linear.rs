//! Linear interpolation.

use crate::error::{MathError, MathResult};
use crate::interpolation::{find_segment, validate_knots, Interpolator};

/// Linear interpolation between data points.
///
/// Queries that land exactly on a knot return that knot's value without
/// any arithmetic, so tabulated rates survive a round trip bit for bit.
///
/// # Example
///
/// ```rust
/// use audcurve_math::interpolation::{LinearInterpolator, Interpolator};
///
/// let months = vec![6.0, 24.0];
/// let rates = vec![3.90, 3.80];
///
/// let interp = LinearInterpolator::new(months, rates).unwrap();
/// let y = interp.interpolate(12.0).unwrap();
/// assert!((y - 3.866_666_666_7).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct LinearInterpolator {
    xs: Vec<f64>,
    ys: Vec<f64>,
    flat_extrapolation: bool,
}

impl LinearInterpolator {
    /// Creates a new linear interpolator.
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
            xs,
            ys,
            flat_extrapolation: false,
        })
    }

    /// Holds the end values constant outside the knot range.
    #[must_use]
    pub fn with_flat_extrapolation(mut self) -> Self {
        self.flat_extrapolation = true;
        self
    }

    fn check_range(&self, x: f64) -> MathResult<()> {
        if !self.flat_extrapolation && !self.in_range(x) {
            return Err(MathError::ExtrapolationNotAllowed {
                x,
                min: self.min_x(),
                max: self.max_x(),
            });
        }
        Ok(())
    }
}

impl Interpolator for LinearInterpolator {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        self.check_range(x)?;

        let n = self.xs.len();
        if x <= self.xs[0] {
            return Ok(self.ys[0]);
        }
        if x >= self.xs[n - 1] {
            return Ok(self.ys[n - 1]);
        }

        let i = find_segment(&self.xs, x);
        let x0 = self.xs[i];
        let x1 = self.xs[i + 1];
        let y0 = self.ys[i];
        let y1 = self.ys[i + 1];

        if x == x0 {
            return Ok(y0);
        }

        Ok(y0 + (y1 - y0) * (x - x0) / (x1 - x0))
    }

    fn derivative(&self, x: f64) -> MathResult<f64> {
        self.check_range(x)?;

        // Flat beyond the end knots.
        if x < self.xs[0] || x > self.xs[self.xs.len() - 1] {
            return Ok(0.0);
        }

        let i = find_segment(&self.xs, x);
        Ok((self.ys[i + 1] - self.ys[i]) / (self.xs[i + 1] - self.xs[i]))
    }

    fn allows_extrapolation(&self) -> bool {
        self.flat_extrapolation
    }

    fn min_x(&self) -> f64 {
        self.xs[0]
    }

    fn max_x(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }
}
