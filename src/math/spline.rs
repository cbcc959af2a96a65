use itertools::Itertools;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SplineError {
    #[error("cubic spline needs at least 3 control points, got {0}")]
    TooFewPoints(usize),

    #[error("x and y have different lengths ({x} vs {y})")]
    LengthMismatch { x: usize, y: usize },

    #[error("x values must be strictly increasing (violated at index {0})")]
    NotStrictlyIncreasing(usize),

    #[error("x = {x} is outside the interpolation domain [{min}, {max}]")]
    OutOfDomain { x: f64, min: f64, max: f64 },
}

/// Natural cubic spline over a fixed set of control points.
///
/// Knot second derivatives are solved once at construction (tridiagonal
/// sweep with zero curvature at both endpoints); evaluation is a binary
/// search for the segment plus the cubic form on it.
#[derive(Debug, Clone)]
pub struct CubicSpline {
    x: Vec<f64>,
    y: Vec<f64>,
    y2: Vec<f64>,
}

impl CubicSpline {
    pub fn new(x: &[f64], y: &[f64]) -> Result<CubicSpline, SplineError> {
        if x.len() != y.len() {
            return Err(SplineError::LengthMismatch {
                x: x.len(),
                y: y.len(),
            });
        }
        if x.len() < 3 {
            return Err(SplineError::TooFewPoints(x.len()));
        }
        if let Some(i) = x.windows(2).position(|w| w[1] <= w[0]) {
            return Err(SplineError::NotStrictlyIncreasing(i + 1));
        }

        let n = x.len();
        let h: Vec<f64> = x.iter().tuple_windows().map(|(a, b)| b - a).collect();

        // Forward sweep of the tridiagonal system, then back substitution.
        // y2[0] and y2[n-1] stay zero (natural boundary condition).
        let mut y2 = vec![0.0; n];
        let mut u = vec![0.0; n - 1];
        for i in 1..n - 1 {
            let sig = h[i - 1] / (x[i + 1] - x[i - 1]);
            let p = sig * y2[i - 1] + 2.0;
            y2[i] = (sig - 1.0) / p;
            let d = (y[i + 1] - y[i]) / h[i] - (y[i] - y[i - 1]) / h[i - 1];
            u[i] = (6.0 * d / (x[i + 1] - x[i - 1]) - sig * u[i - 1]) / p;
        }
        for i in (1..n - 1).rev() {
            y2[i] = y2[i] * y2[i + 1] + u[i];
        }

        Ok(CubicSpline {
            x: x.to_vec(),
            y: y.to_vec(),
            y2,
        })
    }

    /// The covered `(min, max)` x interval.
    pub fn domain(&self) -> (f64, f64) {
        (self.x[0], self.x[self.x.len() - 1])
    }

    /// Evaluates the spline at `xp`. Points outside [`Self::domain`] are
    /// rejected, never extrapolated.
    pub fn eval(&self, xp: f64) -> Result<f64, SplineError> {
        let (min, max) = self.domain();
        if !(min..=max).contains(&xp) {
            return Err(SplineError::OutOfDomain { x: xp, min, max });
        }

        let hi = self
            .x
            .partition_point(|&xk| xk < xp)
            .clamp(1, self.x.len() - 1);
        let lo = hi - 1;

        let h = self.x[hi] - self.x[lo];
        let a = (self.x[hi] - xp) / h;
        let b = (xp - self.x[lo]) / h;

        Ok(a * self.y[lo]
            + b * self.y[hi]
            + ((a * a * a - a) * self.y2[lo] + (b * b * b - b) * self.y2[hi]) * h * h / 6.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_reproduces_knots() {
        let x = [0.0, 1.0, 2.5, 4.0, 5.0];
        let y = [1.0, -1.0, 3.0, 0.5, 2.0];
        let s = CubicSpline::new(&x, &y).unwrap();

        for (&xk, &yk) in x.iter().zip(y.iter()) {
            assert_relative_eq!(s.eval(xk).unwrap(), yk, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_linear_data_is_exact() {
        let x = [0.0, 1.0, 2.0, 3.0, 4.0];
        let y: Vec<f64> = x.iter().map(|v| 2.0 * v + 1.0).collect();
        let s = CubicSpline::new(&x, &y).unwrap();

        // Linear data has zero curvature everywhere, so the natural spline
        // reduces to the line itself.
        assert_relative_eq!(s.eval(0.5).unwrap(), 2.0, epsilon = 1e-12);
        assert_relative_eq!(s.eval(2.75).unwrap(), 6.5, epsilon = 1e-12);
        assert_relative_eq!(s.eval(4.0).unwrap(), 9.0, epsilon = 1e-12);
    }

    #[test]
    fn test_interior_accuracy_on_smooth_data() {
        let x: Vec<f64> = (0..=10).map(f64::from).collect();
        let y: Vec<f64> = x.iter().map(|v| (v * 0.5).sin()).collect();
        let s = CubicSpline::new(&x, &y).unwrap();

        for i in 2..8 {
            let xp = f64::from(i) + 0.5;
            assert_relative_eq!(s.eval(xp).unwrap(), (xp * 0.5).sin(), epsilon = 1e-2);
        }
    }

    #[test]
    fn test_domain_is_enforced() {
        let s = CubicSpline::new(&[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0]).unwrap();

        assert_eq!(s.domain(), (0.0, 2.0));
        assert_eq!(
            s.eval(-0.1),
            Err(SplineError::OutOfDomain {
                x: -0.1,
                min: 0.0,
                max: 2.0
            })
        );
        assert_eq!(
            s.eval(2.1),
            Err(SplineError::OutOfDomain {
                x: 2.1,
                min: 0.0,
                max: 2.0
            })
        );
        assert!(s.eval(f64::NAN).is_err());
    }

    #[test]
    fn test_rejects_bad_control_points() {
        assert_eq!(
            CubicSpline::new(&[0.0, 1.0], &[0.0, 1.0]).unwrap_err(),
            SplineError::TooFewPoints(2)
        );
        assert_eq!(
            CubicSpline::new(&[0.0, 1.0, 2.0], &[0.0, 1.0]).unwrap_err(),
            SplineError::LengthMismatch { x: 3, y: 2 }
        );
        assert_eq!(
            CubicSpline::new(&[0.0, 2.0, 2.0, 3.0], &[0.0, 1.0, 2.0, 3.0]).unwrap_err(),
            SplineError::NotStrictlyIncreasing(2)
        );
    }
}
