//! minimize::gradient_descent — steepest-descent minimization.
//!
//! Purpose
//! -------
//! Minimize a smooth objective by stepping along the negative gradient,
//! with the step length chosen by the shared backtracking line search.
//! First-order only: the Hessian is never requested from the objective.
//!
//! Key behaviors
//! -------------
//! - Direction `d = -∇f(x)` at every iterate, which is a strict descent
//!   direction whenever the gradient is non-zero.
//! - Delegates iteration, trajectory recording, stopping rules, and
//!   outcome normalization to the shared engine in
//!   [`run`](crate::minimize::run).
//!
//! Conventions
//! -----------
//! - `run()` restarts from the original `x0` on every call and clears the
//!   recorded trajectory first; a [`GradientDescent`] instance never
//!   resumes a previous run.
//! - `path()` is valid at any time: it reflects progress so far during a
//!   run (e.g. from inside an observer) and the full history afterwards.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the direction computation, construction validation,
//!   and restart semantics; convergence scenarios live in the integration
//!   suite.
use crate::minimize::{
    errors::MinResult,
    run::run_descent,
    traits::{
        Evaluation, IterationHook, LineSearchParams, MinimizeOptions, Objective, RunOutcome,
        SearchDirection,
    },
    types::Point,
    validation::validate_initial_point,
};

/// Direction strategy: steepest descent, `d = -∇f(x)`.
pub(crate) struct GradientStep;

impl SearchDirection for GradientStep {
    const NEEDS_HESSIAN: bool = false;

    fn direction(&self, eval: &Evaluation) -> MinResult<Point> {
        Ok(eval.grad.mapv(|g| -g))
    }
}

/// Gradient-descent minimizer with backtracking line search.
///
/// Construct with an objective, a starting point, and stopping rules;
/// call [`run`](GradientDescent::run) once; read the recorded trajectory
/// via [`path`](GradientDescent::path) afterwards.
///
/// The instance owns its trajectory exclusively. Independent instances
/// share no state and may run on separate threads without synchronization.
pub struct GradientDescent<F: Objective> {
    f: F,
    x0: Point,
    opts: MinimizeOptions,
    line: LineSearchParams,
    iterates: Vec<Point>,
    values: Vec<f64>,
    observer: Option<IterationHook>,
}

impl<F: Objective> GradientDescent<F> {
    /// Create a minimizer for `f` starting from `x0`.
    ///
    /// # Errors
    /// - [`MinError::EmptyInitialPoint`] /
    ///   [`MinError::InvalidInitialPoint`] for a degenerate start point.
    ///
    /// [`MinError::EmptyInitialPoint`]: crate::minimize::errors::MinError::EmptyInitialPoint
    /// [`MinError::InvalidInitialPoint`]: crate::minimize::errors::MinError::InvalidInitialPoint
    pub fn new(f: F, x0: Point, opts: MinimizeOptions) -> MinResult<Self> {
        validate_initial_point(&x0)?;
        Ok(Self {
            f,
            x0,
            opts,
            line: LineSearchParams::default(),
            iterates: Vec::new(),
            values: Vec::new(),
            observer: None,
        })
    }

    /// Override the backtracking line-search shape.
    pub fn with_line_search(mut self, line: LineSearchParams) -> Self {
        self.line = line;
        self
    }

    /// Attach a per-iteration progress hook `(i, x_i, f(x_i))`.
    pub fn with_observer(mut self, hook: IterationHook) -> Self {
        self.observer = Some(hook);
        self
    }

    /// Execute the minimization.
    ///
    /// Restarts from `x0` and clears the trajectory on every invocation.
    /// Exhausting the iteration budget is reported as
    /// `converged = false`, not as an error.
    ///
    /// # Errors
    /// Propagates objective failures, dimension/finiteness violations, and
    /// line-search failures; the trajectory recorded up to the failure
    /// stays readable via [`path`](GradientDescent::path).
    pub fn run(&mut self) -> MinResult<RunOutcome> {
        self.iterates.clear();
        self.values.clear();
        run_descent(
            &self.f,
            &self.x0,
            &GradientStep,
            &self.opts,
            &self.line,
            &mut self.iterates,
            &mut self.values,
            self.observer.as_mut(),
        )
    }

    /// Recorded trajectory: index-aligned `(points, objective values)`.
    pub fn path(&self) -> (&[Point], &[f64]) {
        (&self.iterates, &self.values)
    }
}
