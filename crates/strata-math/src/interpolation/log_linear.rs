//! Log-linear interpolation.
//!
//! Interpolates the logarithm of the values, which keeps every
//! interpolated value strictly positive. The standard choice for
//! discount factor curves.

use super::{find_segment, validate_xy, Interpolator};
use crate::error::{MathError, MathResult};

/// Log-linear interpolation between positive data points.
///
/// The interpolation formula is
///
/// ```text
/// y(x) = exp(linear_interpolate(x, ln y))
/// ```
///
/// Extrapolation is flat and returns the stored end values directly, not
/// an exponential of an extrapolated log.
#[derive(Debug, Clone)]
pub struct LogLinearInterpolator {
    xs: Vec<f64>,
    ys: Vec<f64>,
    /// Precomputed ln(y) values.
    log_ys: Vec<f64>,
}

impl LogLinearInterpolator {
    /// Creates a new log-linear interpolator.
    ///
    /// # Errors
    ///
    /// Returns an error on the common validation failures (fewer than 2
    /// points, mismatched lengths, non-finite data, non-increasing x) and
    /// additionally if any y value is not strictly positive.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        validate_xy(&xs, &ys)?;

        let mut log_ys = Vec::with_capacity(ys.len());
        for (i, &y) in ys.iter().enumerate() {
            if y <= 0.0 {
                return Err(MathError::invalid_input(format!(
                    "y[{i}] = {y} is not positive; log-linear requires positive values"
                )));
            }
            log_ys.push(y.ln());
        }

        Ok(Self { xs, ys, log_ys })
    }
}

impl Interpolator for LogLinearInterpolator {
    fn value(&self, x: f64) -> f64 {
        // Flat extrapolation returns the end y values themselves.
        if x <= self.xs[0] {
            return self.ys[0];
        }
        if x >= self.xs[self.xs.len() - 1] {
            return self.ys[self.ys.len() - 1];
        }

        let i = find_segment(&self.xs, x);
        let (x0, x1) = (self.xs[i], self.xs[i + 1]);
        let (ly0, ly1) = (self.log_ys[i], self.log_ys[i + 1]);

        let w = (x - x0) / (x1 - x0);
        (ly0 + w * (ly1 - ly0)).exp()
    }

    fn min_x(&self) -> f64 {
        self.xs[0]
    }

    fn max_x(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }
}
