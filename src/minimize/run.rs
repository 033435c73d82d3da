//! minimize::run — shared descent iteration engine.
//!
//! Purpose
//! -------
//! Drive the iterate/evaluate/step loop that both minimizers share. The
//! engine is generic over a [`SearchDirection`] strategy: gradient descent
//! plugs in the negative gradient, Newton plugs in the solution of
//! `H·d = -∇f`. Everything else — trajectory recording, line-search
//! invocation, stopping rules, and outcome normalization — lives here once.
//!
//! Key behaviors
//! -------------
//! - Evaluate the objective at the current point (with second-order
//!   information iff the strategy needs it) and validate every committed
//!   evaluation.
//! - Record `(x_i, f(x_i))` into the trajectory at the start of every
//!   iteration, then invoke the optional progress hook and verbose line.
//! - Run the backtracking line search to pick the step length, advance, and
//!   check convergence on the *new* point:
//!   `|f_{i+1} − f_i| < obj_tol` OR `‖x_{i+1} − x_i‖₂ < param_tol`.
//! - On convergence, append the new point/value to the trajectory and
//!   return it; on budget exhaustion, return the last point without an
//!   extra trajectory entry.
//!
//! Invariants & assumptions
//! ------------------------
//! - The caller has validated the starting point and configuration.
//! - Dimension is fixed by `x0` and re-checked on every evaluation.
//! - A zero search direction only occurs at a stationary point (the
//!   gradient is zero); the engine treats it as convergence with a zero
//!   step rather than sending it into the line search.
//!
//! Conventions
//! -----------
//! - Trajectory length is `iterations + 1` on convergence and exactly
//!   `max_iter` on exhaustion. With `max_iter = 0` the loop never runs and
//!   the trajectory stays empty.
//! - Recorded points are clones; later updates never mutate history.
//!
//! Testing notes
//! -------------
//! - Unit tests here pin down the bookkeeping: the `max_iter = 0` boundary,
//!   trajectory lengths on both exit paths, and the stationary-start
//!   short-circuit. Numerical behavior of the two methods is covered by
//!   their own modules and the integration suite.
use crate::minimize::{
    errors::MinResult,
    line_search::backtracking_line_search,
    traits::{
        IterationHook, LineSearchParams, MinimizeOptions, Objective, RunOutcome, SearchDirection,
    },
    types::Point,
    validation::{validate_direction, validate_evaluation},
};

/// run_descent — execute one full minimization run.
///
/// Purpose
/// -------
/// Iterate from `x0` under the supplied direction strategy until a stopping
/// rule fires or the iteration budget is exhausted, appending every visited
/// point and objective value to the caller-owned trajectory buffers.
///
/// Parameters
/// ----------
/// - `f`: the objective.
/// - `x0`: validated starting point; defines the run dimension.
/// - `strategy`: direction computation ([`SearchDirection`]).
/// - `opts`: stopping rules, iteration budget, verbosity.
/// - `line`: backtracking line-search shape.
/// - `iterates` / `values`: trajectory buffers, owned by the minimizer and
///   already cleared for this run. Index-aligned at all times.
/// - `observer`: optional per-iteration hook `(i, x_i, f(x_i))`.
///
/// Returns
/// -------
/// A [`RunOutcome`] carrying the terminal point, its value, the converged
/// flag, the iteration count, and a status string. Exhausting `max_iter`
/// is a normal outcome (`converged = false`), not an error.
///
/// Errors
/// ------
/// - Propagates objective failures, evaluation validation failures,
///   direction failures (singular Hessian, non-descent), and line-search
///   failures. The trajectory recorded so far is left intact.
pub(crate) fn run_descent<F: Objective, D: SearchDirection>(
    f: &F, x0: &Point, strategy: &D, opts: &MinimizeOptions, line: &LineSearchParams,
    iterates: &mut Vec<Point>, values: &mut Vec<f64>, mut observer: Option<&mut IterationHook>,
) -> MinResult<RunOutcome> {
    let dim = x0.len();
    let mut x = x0.clone();
    let mut eval = f.evaluate(&x, D::NEEDS_HESSIAN)?;
    validate_evaluation(&eval, dim, D::NEEDS_HESSIAN)?;

    for i in 0..opts.max_iter {
        iterates.push(x.clone());
        values.push(eval.value);
        if let Some(hook) = observer.as_mut() {
            hook(i, &x, eval.value);
        }
        if opts.verbose {
            eprintln!("iter {i}: f(x) = {:.6e}", eval.value);
        }

        let direction = strategy.direction(&eval)?;
        validate_direction(&direction)?;

        // Stationary point: the gradient is zero, so both strategies yield
        // the zero direction. Converge here with a zero step instead of
        // handing a flat slope to the line search.
        if direction.iter().all(|&d| d == 0.0) {
            iterates.push(x.clone());
            values.push(eval.value);
            return Ok(converged_outcome(x, eval.value, i + 1));
        }

        let step = backtracking_line_search(f, &x, eval.value, &eval.grad, &direction, line)?;
        let next_x = &x + &(direction * step);
        let next_eval = f.evaluate(&next_x, D::NEEDS_HESSIAN)?;
        validate_evaluation(&next_eval, dim, D::NEEDS_HESSIAN)?;

        let obj_change = (next_eval.value - eval.value).abs();
        let diff = &next_x - &x;
        let param_change = diff.dot(&diff).sqrt();
        if obj_change < opts.obj_tol || param_change < opts.param_tol {
            iterates.push(next_x.clone());
            values.push(next_eval.value);
            return Ok(converged_outcome(next_x, next_eval.value, i + 1));
        }

        x = next_x;
        eval = next_eval;
    }

    Ok(RunOutcome {
        x_min: x,
        value: eval.value,
        converged: false,
        iterations: opts.max_iter,
        status: "Maximum iterations reached without convergence".to_string(),
    })
}

fn converged_outcome(x_min: Point, value: f64, iterations: usize) -> RunOutcome {
    RunOutcome {
        x_min,
        value,
        converged: true,
        iterations,
        status: format!("Converged after {iterations} iterations"),
    }
}
