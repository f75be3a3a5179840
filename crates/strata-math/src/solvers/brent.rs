//! Brent's root-finding algorithm.

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Brent's root-finding algorithm on a bracketing interval.
///
/// Combines the reliability of bisection with the speed of the secant
/// method and inverse quadratic interpolation. Interpolated steps are
/// only accepted when they stay well inside the bracket; otherwise the
/// iteration bisects.
///
/// Requires `a < b` and `f(a) * f(b) <= 0`. An exact root at either
/// endpoint returns immediately. Running out of iterations is not an
/// error: the best iterate is returned with `converged` set to false.
///
/// The function may mutate captured state between evaluations, which is
/// how curve bootstrapping rebuilds a trial curve inside the residual.
///
/// # Errors
///
/// Returns an error if the bracket is invalid, or if `f` produces a
/// non-finite value at the endpoints or during iteration.
///
/// # Example
///
/// ```rust
/// use strata_math::solvers::{brent, SolverConfig};
///
/// let f = |x: f64| x * x - 2.0;
/// let result = brent(f, 1.0, 2.0, &SolverConfig::default()).unwrap();
///
/// assert!(result.converged);
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
#[allow(clippy::many_single_char_names)]
pub fn brent<F>(mut f: F, a: f64, b: f64, config: &SolverConfig) -> MathResult<SolverResult>
where
    F: FnMut(f64) -> f64,
{
    if !(a < b) {
        return Err(MathError::invalid_input("brent requires a < b"));
    }

    let mut a = a;
    let mut b = b;
    let mut fa = f(a);
    let mut fb = f(b);

    if !fa.is_finite() {
        return Err(MathError::NonFiniteEvaluation { x: a });
    }
    if !fb.is_finite() {
        return Err(MathError::NonFiniteEvaluation { x: b });
    }

    if fa == 0.0 {
        return Ok(SolverResult {
            root: a,
            iterations: 0,
            residual: fa,
            converged: true,
        });
    }
    if fb == 0.0 {
        return Ok(SolverResult {
            root: b,
            iterations: 0,
            residual: fb,
            converged: true,
        });
    }

    if fa * fb > 0.0 {
        return Err(MathError::InvalidBracket { a, b, fa, fb });
    }

    let mut c = a;
    let mut fc = fa;
    let mut d = b - a;
    let mut e = d;

    for iteration in 1..=config.max_iterations {
        // Keep b the best iterate: |f(b)| <= |f(c)|.
        if fc.abs() < fb.abs() {
            a = b;
            b = c;
            c = a;
            fa = fb;
            fb = fc;
            fc = fa;
        }

        let tol = config.tol_abs.max(config.tol_rel * b.abs());
        let m = 0.5 * (c - b);

        if m.abs() <= tol || fb == 0.0 {
            return Ok(SolverResult {
                root: b,
                iterations: iteration,
                residual: fb,
                converged: true,
            });
        }

        let mut p = 0.0;
        let mut q = 1.0;
        let mut use_interp = false;

        if e.abs() > tol && fa.abs() > fb.abs() {
            use_interp = true;
            let s = fb / fa;

            if a == c {
                // Secant step.
                p = 2.0 * m * s;
                q = 1.0 - s;
            } else {
                // Inverse quadratic interpolation.
                let r = fb / fc;
                let t = fa / fc;
                p = s * (2.0 * m * t * (t - r) - (b - a) * (r - 1.0));
                q = (t - 1.0) * (r - 1.0) * (s - 1.0);
            }

            if p > 0.0 {
                q = -q;
            }
            p = p.abs();

            // Accept the interpolated step only if it stays well inside
            // the bracket and keeps shrinking.
            let min1 = 3.0 * m * q - (tol * q).abs();
            let min2 = (e * q).abs();
            if 2.0 * p >= min1.min(min2) {
                use_interp = false;
            }
        }

        if use_interp {
            e = d;
            d = p / q;
        } else {
            d = m;
            e = m;
        }

        a = b;
        fa = fb;

        if d.abs() > tol {
            b += d;
        } else {
            b += if m > 0.0 { tol } else { -tol };
        }

        fb = f(b);
        if !fb.is_finite() {
            return Err(MathError::NonFiniteEvaluation { x: b });
        }

        // Maintain the bracket.
        if (fb > 0.0 && fc > 0.0) || (fb < 0.0 && fc < 0.0) {
            c = a;
            fc = fa;
            d = b - a;
            e = d;
        }
    }

    Ok(SolverResult {
        root: b,
        iterations: config.max_iterations,
        residual: fb,
        converged: false,
    })
}
