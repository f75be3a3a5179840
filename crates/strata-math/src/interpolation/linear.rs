//! Linear interpolation.

use super::{find_segment, validate_xy, Interpolator};
use crate::error::MathResult;

/// Linear interpolation between data points, flat beyond the ends.
#[derive(Debug, Clone)]
pub struct LinearInterpolator {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl LinearInterpolator {
    /// Creates a new linear interpolator.
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than 2 points, the lengths
    /// differ, any entry is non-finite, or x is not strictly increasing.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        validate_xy(&xs, &ys)?;
        Ok(Self { xs, ys })
    }
}

impl Interpolator for LinearInterpolator {
    fn value(&self, x: f64) -> f64 {
        // Flat extrapolation outside the domain.
        if x <= self.xs[0] {
            return self.ys[0];
        }
        if x >= self.xs[self.xs.len() - 1] {
            return self.ys[self.ys.len() - 1];
        }

        let i = find_segment(&self.xs, x);
        let (x0, x1) = (self.xs[i], self.xs[i + 1]);
        let (y0, y1) = (self.ys[i], self.ys[i + 1]);

        let w = (x - x0) / (x1 - x0);
        y0 + w * (y1 - y0)
    }

    fn min_x(&self) -> f64 {
        self.xs[0]
    }

    fn max_x(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_through_points() {
        let interp =
            LinearInterpolator::new(vec![0.0, 1.0, 2.0], vec![0.0, 10.0, 20.0]).unwrap();

        assert_relative_eq!(interp.value(0.0), 0.0, epsilon = 1e-12);
        assert_relative_eq!(interp.value(1.0), 10.0, epsilon = 1e-12);
        assert_relative_eq!(interp.value(2.0), 20.0, epsilon = 1e-12);
    }

    #[test]
    fn test_midpoints() {
        let interp =
            LinearInterpolator::new(vec![0.0, 1.0, 2.0], vec![0.0, 10.0, 20.0]).unwrap();

        assert_relative_eq!(interp.value(0.5), 5.0, epsilon = 1e-12);
        assert_relative_eq!(interp.value(1.5), 15.0, epsilon = 1e-12);
    }

    #[test]
    fn test_flat_extrapolation() {
        let interp =
            LinearInterpolator::new(vec![0.0, 1.0, 2.0], vec![0.0, 10.0, 20.0]).unwrap();

        assert_relative_eq!(interp.value(-1.0), 0.0, epsilon = 1e-12);
        assert_relative_eq!(interp.value(3.0), 20.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rejects_invalid_data() {
        assert!(LinearInterpolator::new(vec![0.0], vec![1.0]).is_err());
        assert!(LinearInterpolator::new(vec![1.0, 0.0], vec![1.0, 2.0]).is_err());
    }

    #[test]
    fn test_range() {
        let interp = LinearInterpolator::new(vec![0.5, 2.5], vec![1.0, 2.0]).unwrap();
        assert_eq!(interp.min_x(), 0.5);
        assert_eq!(interp.max_x(), 2.5);
    }
}
