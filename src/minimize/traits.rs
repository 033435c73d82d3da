//! Public interface surface for line-search minimization.
//!
//! - [`Objective`]: trait users implement for their function.
//! - [`Evaluation`]: the bundled (value, gradient, optional Hessian) output.
//! - [`MinimizeOptions`] and [`LineSearchParams`]: configuration.
//! - [`RunOutcome`]: normalized result returned by `run()`.
//! - [`SearchDirection`]: internal seam between the shared engine and the
//!   per-method direction computation.
//!
//! Convention: minimizers *minimize* `f(x)` directly; there is no sign flip
//! anywhere in this crate. Gradients returned by [`Objective::evaluate`]
//! are gradients of `f`.
use crate::minimize::{
    errors::{MinError, MinResult},
    types::{
        DEFAULT_INITIAL_STEP, DEFAULT_MAX_ITER, DEFAULT_OBJ_TOL, DEFAULT_PARAM_TOL, DEFAULT_SHRINK,
        DEFAULT_SLOPE_COEFF, Grad, Hessian, Point,
    },
    validation::{verify_line_search_constant, verify_shrink_factor, verify_tolerance},
};

/// Bundled output of a single objective evaluation.
///
/// - `value`: scalar `f(x)`.
/// - `grad`: gradient `∇f(x)`, same dimension as the evaluated point.
/// - `hessian`: dense `n × n` Hessian. Must be `Some` whenever the
///   evaluation was requested with `need_hessian = true`; may be `None`
///   otherwise (value-only probes during line search never need it).
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub value: f64,
    pub grad: Grad,
    pub hessian: Option<Hessian>,
}

impl Evaluation {
    /// Convenience constructor for first-order evaluations.
    pub fn first_order(value: f64, grad: Grad) -> Self {
        Self { value, grad, hessian: None }
    }

    /// Convenience constructor for second-order evaluations.
    pub fn second_order(value: f64, grad: Grad, hessian: Hessian) -> Self {
        Self { value, grad, hessian: Some(hessian) }
    }
}

/// User-implemented objective interface.
///
/// Implementations must be deterministic and side-effect-free: the engine
/// may evaluate the same point more than once and assumes identical output.
/// Dimension and finiteness of the returned pieces are validated by the
/// engine at every committed iterate; smoothness is assumed, not checked.
///
/// Required:
/// - `evaluate(&Point, need_hessian) -> MinResult<Evaluation>`: return
///   `f(x)` and `∇f(x)`, plus the Hessian when `need_hessian` is `true`.
///   - Errors: return a descriptive [`MinError`] for domain failures.
///
/// A blanket impl covers plain closures, so test objectives can be written
/// as `|x: &Point, need_hessian: bool| -> MinResult<Evaluation> { ... }`.
pub trait Objective {
    fn evaluate(&self, x: &Point, need_hessian: bool) -> MinResult<Evaluation>;
}

impl<F> Objective for F
where
    F: Fn(&Point, bool) -> MinResult<Evaluation>,
{
    fn evaluate(&self, x: &Point, need_hessian: bool) -> MinResult<Evaluation> {
        self(x, need_hessian)
    }
}

/// Per-iteration progress hook.
///
/// Invoked once per iteration with `(iteration index, current point,
/// current value)` before the step is taken. This replaces any in-loop
/// printing so the engine stays silent and testable; attach one via
/// `with_observer` on either minimizer.
pub type IterationHook = Box<dyn FnMut(usize, &Point, f64)>;

/// Internal seam between the shared engine and the two methods.
///
/// `NEEDS_HESSIAN` tells the engine whether evaluations must carry
/// second-order information; `direction` maps the current evaluation to a
/// search direction. Implementations must produce strict descent
/// directions whenever the gradient is non-zero.
pub trait SearchDirection {
    const NEEDS_HESSIAN: bool;

    fn direction(&self, eval: &Evaluation) -> MinResult<Point>;
}

/// Stopping rules and iteration budget for a single run.
///
/// Fields:
/// - `obj_tol` — terminate when the change in objective value between two
///   consecutive iterations falls below this threshold.
/// - `param_tol` — terminate when the euclidean distance between two
///   consecutive iterate locations falls below this threshold.
/// - `max_iter` — hard cap on the number of iterations. `0` is allowed and
///   makes `run()` return immediately with `converged = false`.
/// - `verbose` — if `true`, the engine prints one progress line per
///   iteration to stderr.
///
/// Default: `obj_tol = 1e-12`, `param_tol = 1e-8`, `max_iter = 100`,
/// `verbose = false`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinimizeOptions {
    pub obj_tol: f64,
    pub param_tol: f64,
    pub max_iter: usize,
    pub verbose: bool,
}

impl MinimizeOptions {
    /// Construct validated options.
    ///
    /// # Rules
    /// - `obj_tol` and `param_tol` must be **finite and strictly positive**.
    /// - `max_iter` is unrestricted; `0` disables iteration entirely.
    ///
    /// # Errors
    /// - [`MinError::InvalidObjTol`] / [`MinError::InvalidParamTol`] for
    ///   non-finite or non-positive tolerances.
    pub fn new(obj_tol: f64, param_tol: f64, max_iter: usize) -> MinResult<Self> {
        verify_tolerance(obj_tol, |tol, reason| MinError::InvalidObjTol { tol, reason })?;
        verify_tolerance(param_tol, |tol, reason| MinError::InvalidParamTol { tol, reason })?;
        Ok(Self { obj_tol, param_tol, max_iter, verbose: false })
    }

    /// Enable or disable per-iteration stderr progress lines.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

impl Default for MinimizeOptions {
    fn default() -> Self {
        Self {
            obj_tol: DEFAULT_OBJ_TOL,
            param_tol: DEFAULT_PARAM_TOL,
            max_iter: DEFAULT_MAX_ITER,
            verbose: false,
        }
    }
}

/// Shape of the backtracking line search.
///
/// - `initial_step` — first trial step length `α₀`.
/// - `slope_coeff` — Armijo coefficient `c` in
///   `f(x + α·d) ≤ f(x) + c·α·∇f(x)·d`.
/// - `shrink` — geometric factor applied to rejected trial steps.
///
/// Default: `initial_step = 1.0`, `slope_coeff = 0.01`, `shrink = 0.5`.
/// The full first trial step keeps the exact Newton step reachable on
/// quadratic objectives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSearchParams {
    pub initial_step: f64,
    pub slope_coeff: f64,
    pub shrink: f64,
}

impl LineSearchParams {
    /// Construct validated line-search parameters.
    ///
    /// # Rules
    /// - `initial_step` must be finite and strictly positive.
    /// - `slope_coeff` and `shrink` must lie strictly inside `(0, 1)`.
    ///
    /// # Errors
    /// - [`MinError::InvalidInitialStep`], [`MinError::InvalidSlopeCoeff`],
    ///   or [`MinError::InvalidShrinkFactor`] for out-of-range values.
    pub fn new(initial_step: f64, slope_coeff: f64, shrink: f64) -> MinResult<Self> {
        if !initial_step.is_finite() {
            return Err(MinError::InvalidInitialStep {
                step: initial_step,
                reason: "Initial step must be finite.",
            });
        }
        if initial_step <= 0.0 {
            return Err(MinError::InvalidInitialStep {
                step: initial_step,
                reason: "Initial step must be positive.",
            });
        }
        verify_line_search_constant(slope_coeff)?;
        verify_shrink_factor(shrink)?;
        Ok(Self { initial_step, slope_coeff, shrink })
    }
}

impl Default for LineSearchParams {
    fn default() -> Self {
        Self {
            initial_step: DEFAULT_INITIAL_STEP,
            slope_coeff: DEFAULT_SLOPE_COEFF,
            shrink: DEFAULT_SHRINK,
        }
    }
}

/// Canonical result returned by `run()` on either minimizer.
///
/// - `x_min`: terminal point of the run.
/// - `value`: objective value at `x_min`.
/// - `converged`: `true` if a stopping rule fired, `false` if the iteration
///   budget ran out first.
/// - `iterations`: number of iterations executed.
/// - `status`: human-readable termination description.
///
/// The terminal point is always carried here even when it is not part of
/// the recorded trajectory (exhaustion case).
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutcome {
    pub x_min: Point,
    pub value: f64,
    pub converged: bool,
    pub iterations: usize,
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Validation rules of `MinimizeOptions::new` and `LineSearchParams::new`.
    // - Default values of both configuration types.
    // - The blanket `Objective` impl for closures.
    //
    // They intentionally DO NOT cover:
    // - Engine behavior driven by these options; that lives in `run` tests.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that default options match the documented stock values.
    //
    // Given
    // -----
    // - `MinimizeOptions::default()` and `LineSearchParams::default()`.
    //
    // Expect
    // ------
    // - obj_tol 1e-12, param_tol 1e-8, max_iter 100, quiet.
    // - initial_step 1.0, slope_coeff 0.01, shrink 0.5.
    fn defaults_match_documented_values() {
        let opts = MinimizeOptions::default();
        assert_eq!(opts.obj_tol, 1e-12);
        assert_eq!(opts.param_tol, 1e-8);
        assert_eq!(opts.max_iter, 100);
        assert!(!opts.verbose);

        let ls = LineSearchParams::default();
        assert_eq!(ls.initial_step, 1.0);
        assert_eq!(ls.slope_coeff, 0.01);
        assert_eq!(ls.shrink, 0.5);
    }

    #[test]
    // Purpose
    // -------
    // Verify that non-positive or non-finite tolerances are rejected.
    //
    // Given
    // -----
    // - obj_tol = 0.0, then param_tol = NaN.
    //
    // Expect
    // ------
    // - `InvalidObjTol` and `InvalidParamTol` respectively.
    fn options_reject_bad_tolerances() {
        let zero_obj = MinimizeOptions::new(0.0, 1e-8, 100);
        assert!(matches!(zero_obj, Err(MinError::InvalidObjTol { .. })));

        let nan_param = MinimizeOptions::new(1e-12, f64::NAN, 100);
        assert!(matches!(nan_param, Err(MinError::InvalidParamTol { .. })));
    }

    #[test]
    // Purpose
    // -------
    // Verify that max_iter = 0 is an accepted configuration.
    //
    // Given
    // -----
    // - Valid tolerances and a zero iteration budget.
    //
    // Expect
    // ------
    // - Construction succeeds; the boundary behavior itself is tested in
    //   the engine tests.
    fn options_accept_zero_max_iter() {
        let opts = MinimizeOptions::new(1e-12, 1e-8, 0);
        assert!(opts.is_ok());
        assert_eq!(opts.unwrap().max_iter, 0);
    }

    #[test]
    // Purpose
    // -------
    // Verify the open-interval constraints on line-search constants.
    //
    // Given
    // -----
    // - shrink = 1.0 (boundary), slope_coeff = 0.0 (boundary),
    //   initial_step = -0.5.
    //
    // Expect
    // ------
    // - Each construction fails with its dedicated variant.
    fn line_search_params_reject_boundary_values() {
        assert!(matches!(
            LineSearchParams::new(1.0, 0.01, 1.0),
            Err(MinError::InvalidShrinkFactor { .. })
        ));
        assert!(matches!(
            LineSearchParams::new(1.0, 0.0, 0.5),
            Err(MinError::InvalidSlopeCoeff { .. })
        ));
        assert!(matches!(
            LineSearchParams::new(-0.5, 0.01, 0.5),
            Err(MinError::InvalidInitialStep { .. })
        ));
    }

    #[test]
    // Purpose
    // -------
    // Verify that a plain closure satisfies `Objective` via the blanket impl.
    //
    // Given
    // -----
    // - A closure returning f(x) = x·x with gradient 2x and no Hessian.
    //
    // Expect
    // ------
    // - `evaluate` forwards to the closure and returns its output.
    fn closures_implement_objective() {
        let f = |x: &Point, _need_hessian: bool| -> MinResult<Evaluation> {
            Ok(Evaluation::first_order(x.dot(x), x.mapv(|v| 2.0 * v)))
        };

        let x = array![1.0, 2.0];
        let eval = f.evaluate(&x, false).unwrap();
        assert_eq!(eval.value, 5.0);
        assert_eq!(eval.grad, array![2.0, 4.0]);
        assert!(eval.hessian.is_none());
    }
}
