//! Newton-Raphson root-finding with a numerical derivative.

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult, DERIVATIVE_BUMP, DERIVATIVE_FLOOR};

/// Newton-Raphson root-finding with a forward-difference derivative.
///
/// Uses the iteration `x_{n+1} = x_n - f(x_n) / f'(x_n)` with
/// `f'(x) ≈ (f(x + h) - f(x)) / h`, `h =` [`DERIVATIVE_BUMP`].
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `initial_guess` - Starting point for the iteration
/// * `config` - Solver configuration
///
/// # Returns
///
/// `Ok` with the root and iteration statistics. When the iteration cap is
/// reached before the tolerance, the result carries `converged = false`
/// and the best estimate; callers inspect the residual.
///
/// # Errors
///
/// Returns [`MathError::DerivativeUnderflow`] when the derivative
/// magnitude drops below [`DERIVATIVE_FLOOR`]. The error carries the
/// last estimate so callers can recover by accepting it.
///
/// # Example
///
/// ```rust
/// use parswap_math::solvers::{newton_raphson, SolverConfig};
///
/// // Find sqrt(2)
/// let f = |x: f64| x * x - 2.0;
/// let result = newton_raphson(f, 1.5, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-8);
/// ```
pub fn newton_raphson<F>(f: F, initial_guess: f64, config: &SolverConfig) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    let mut x = initial_guess;
    let mut fx = f(x);

    for iteration in 0..config.max_iterations {
        if fx.abs() < config.tolerance {
            return Ok(SolverResult {
                root: x,
                iterations: iteration,
                residual: fx,
                converged: true,
            });
        }

        let dfx = (f(x + DERIVATIVE_BUMP) - fx) / DERIVATIVE_BUMP;

        if dfx.abs() < DERIVATIVE_FLOOR {
            return Err(MathError::DerivativeUnderflow {
                value: dfx,
                last: x,
                iterations: iteration,
            });
        }

        x -= fx / dfx;
        fx = f(x);
    }

    Ok(SolverResult {
        root: x,
        iterations: config.max_iterations,
        residual: fx,
        converged: false,
    })
}
