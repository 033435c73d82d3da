//! minimize::line_search — backtracking step-length selection.
//!
//! Purpose
//! -------
//! Given the current iterate, its value and gradient, and a descent
//! direction, find a step length `α > 0` satisfying the Armijo-type
//! sufficient-decrease condition
//!
//! ```text
//! f(x + α·d) ≤ f(x) + c·α·∇f(x)·d
//! ```
//!
//! by shrinking a trial step geometrically until the condition holds.
//!
//! Key behaviors
//! -------------
//! - Evaluate only objective **values** at candidate points; gradient and
//!   Hessian recomputation is deferred to the caller once `α` is fixed.
//! - Fail fast with [`MinError::NonDescentDirection`] when
//!   `∇f(x)·d ≥ 0`, since backtracking is only guaranteed to terminate for
//!   strict descent directions.
//! - Treat non-finite trial values as rejections: the comparison fails and
//!   the step shrinks further, so overflowing probes far from the minimum
//!   are backed off rather than aborting the run.
//!
//! Invariants & assumptions
//! ------------------------
//! - `direction` has the same dimension as `x`; the engine has already
//!   validated both.
//! - The loop is not artificially bounded. For a strict descent direction
//!   the condition is satisfiable as `α → 0`, and in floating point the
//!   trial step eventually underflows to a candidate equal to `x`, where
//!   the condition holds with equality.
//!
//! Testing notes
//! -------------
//! - Unit tests cover immediate acceptance, geometric shrinking, the
//!   non-descent guard, and the non-finite-probe backoff.
use crate::minimize::{
    errors::{MinError, MinResult},
    traits::{LineSearchParams, Objective},
    types::{Grad, Point},
};

/// backtracking_line_search — accept the first sufficiently decreasing step.
///
/// Purpose
/// -------
/// Starting from `params.initial_step`, evaluate `f(x + α·d)` and accept
/// the first `α` with `f(x + α·d) ≤ f(x) + c·α·∇f(x)·d`, shrinking `α` by
/// `params.shrink` after every rejection.
///
/// Parameters
/// ----------
/// - `f`: objective; probed for values only.
/// - `x`: current iterate.
/// - `curr_val`: `f(x)`, already computed by the caller.
/// - `grad`: `∇f(x)`, already computed by the caller.
/// - `direction`: search direction `d`; must satisfy `∇f(x)·d < 0`.
/// - `params`: initial step, slope coefficient, and shrink factor.
///
/// Returns
/// -------
/// The accepted step length. Success is guaranteed under the
/// descent-direction precondition.
///
/// Errors
/// ------
/// - [`MinError::NonDescentDirection`] when `∇f(x)·d ≥ 0`.
/// - Propagates any error the objective returns while probing.
///
/// Notes
/// -----
/// - The directional derivative is computed once at entry and reused in
///   every Armijo check.
pub fn backtracking_line_search<F: Objective>(
    f: &F, x: &Point, curr_val: f64, grad: &Grad, direction: &Point, params: &LineSearchParams,
) -> MinResult<f64> {
    let slope = grad.dot(direction);
    if slope >= 0.0 {
        return Err(MinError::NonDescentDirection { slope });
    }

    let mut step = params.initial_step;
    loop {
        let candidate = x + &(direction * step);
        let trial_val = f.evaluate(&candidate, false)?.value;
        // NaN/inf probes fail this comparison and shrink like any rejection.
        if trial_val <= curr_val + params.slope_coeff * step * slope {
            return Ok(step);
        }
        step *= params.shrink;
    }
}
