//! minimize::newton — damped Newton minimization.
//!
//! Purpose
//! -------
//! Minimize a smooth objective by stepping along the Newton direction, the
//! solution `d` of the linear system `H(x)·d = -∇f(x)`, with the step
//! length chosen by the shared backtracking line search. Each iteration
//! requests second-order information from the objective.
//!
//! Key behaviors
//! -------------
//! - Solve the Newton system by LU decomposition; the Hessian is never
//!   inverted explicitly.
//! - Bridge the `ndarray` Hessian into a `nalgebra::DMatrix` for the
//!   factorization, copying column by column to match `DMatrix`'s
//!   column-major storage.
//! - Surface a singular factorization as
//!   [`MinError::SingularHessian`] and abort the run; substituting a
//!   fallback direction would silently change the method's identity, so
//!   none is attempted.
//!
//! Invariants & assumptions
//! ------------------------
//! - The Hessian has been validated (square, `n × n`, finite) before the
//!   solve.
//! - The Newton direction is a strict descent direction when the Hessian
//!   is positive definite; for indefinite Hessians the line search's
//!   non-descent guard is the backstop.
//!
//! Conventions
//! -----------
//! - Same public surface, restart semantics, and trajectory contract as
//!   [`GradientDescent`](crate::minimize::gradient_descent::GradientDescent).
//!
//! Testing notes
//! -------------
//! - Unit tests cover the linear solve against analytic solutions, the
//!   singular-Hessian failure, and the missing-Hessian contract violation.
//! - One-step convergence on positive-definite quadratics is pinned down
//!   in the integration suite.
use crate::minimize::{
    errors::{MinError, MinResult},
    run::run_descent,
    traits::{
        Evaluation, IterationHook, LineSearchParams, MinimizeOptions, Objective, RunOutcome,
        SearchDirection,
    },
    types::{Grad, Hessian, Point},
    validation::validate_initial_point,
};
use nalgebra::{DMatrix, DVector};
use ndarray::Array1;

/// Direction strategy: solve `H·d = -∇f(x)`.
pub(crate) struct NewtonStep;

impl SearchDirection for NewtonStep {
    const NEEDS_HESSIAN: bool = true;

    fn direction(&self, eval: &Evaluation) -> MinResult<Point> {
        let hessian = eval.hessian.as_ref().ok_or(MinError::MissingHessian)?;
        newton_direction(&eval.grad, hessian)
    }
}

/// newton_direction — LU solve of the Newton system.
///
/// Purpose
/// -------
/// Compute the Newton direction `d` from `H·d = -g` without forming
/// `H⁻¹`. The `ndarray` Hessian is copied into a `nalgebra::DMatrix`
/// (column-major writes, matching its internal storage) and factorized.
///
/// Returns
/// -------
/// The direction as a [`Point`].
///
/// Errors
/// ------
/// - [`MinError::SingularHessian`] when the LU factorization finds no
///   solution (singular or numerically rank-deficient Hessian).
///
/// Notes
/// -----
/// - No symmetrization is applied; the Hessian is used as supplied.
pub fn newton_direction(grad: &Grad, hessian: &Hessian) -> MinResult<Point> {
    let n = grad.len();
    let mut h = DMatrix::<f64>::zeros(n, n);
    for j in 0..n {
        for i in 0..n {
            h[(i, j)] = hessian[[i, j]];
        }
    }
    let rhs = DVector::from_iterator(n, grad.iter().map(|&g| -g));
    match h.lu().solve(&rhs) {
        Some(d) => Ok(Array1::from_iter(d.iter().copied())),
        None => Err(MinError::SingularHessian),
    }
}

/// Newton minimizer with backtracking line search.
///
/// Identical iteration skeleton and surface as
/// [`GradientDescent`](crate::minimize::gradient_descent::GradientDescent),
/// with the direction solved from the Hessian each step. A singular
/// Hessian aborts the run; it is never papered over with a gradient step.
pub struct NewtonMinimizer<F: Objective> {
    f: F,
    x0: Point,
    opts: MinimizeOptions,
    line: LineSearchParams,
    iterates: Vec<Point>,
    values: Vec<f64>,
    observer: Option<IterationHook>,
}

impl<F: Objective> NewtonMinimizer<F> {
    /// Create a minimizer for `f` starting from `x0`.
    ///
    /// # Errors
    /// - [`MinError::EmptyInitialPoint`] /
    ///   [`MinError::InvalidInitialPoint`] for a degenerate start point.
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
    /// Propagates objective failures, dimension/finiteness violations,
    /// [`MinError::SingularHessian`], [`MinError::MissingHessian`], and
    /// line-search failures; the trajectory recorded up to the failure
    /// stays readable via [`path`](NewtonMinimizer::path).
    pub fn run(&mut self) -> MinResult<RunOutcome> {
        self.iterates.clear();
        self.values.clear();
        run_descent(
            &self.f,
            &self.x0,
            &NewtonStep,
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
