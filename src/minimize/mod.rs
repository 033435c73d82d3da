//! minimize — line-search descent methods for smooth unconstrained problems.
//!
//! Purpose
//! -------
//! Provide the full minimization layer of the crate: two peer minimizers
//! ([`GradientDescent`] and [`NewtonMinimizer`]) sharing one backtracking
//! line search and one iteration engine. Callers implement [`Objective`] for
//! their function, choose tolerances, run a minimizer once, and read back
//! the full iterate/value trajectory afterwards.
//!
//! Key behaviors
//! -------------
//! - Evaluate user objectives through the [`Objective`] trait, which returns
//!   value, gradient, and (on request) Hessian in a single [`Evaluation`].
//! - Pick step lengths with a backtracking line search enforcing an
//!   Armijo-type sufficient-decrease condition
//!   ([`line_search::backtracking_line_search`]).
//! - Drive both methods through the shared engine in [`run`], which records
//!   every visited point and objective value, checks the objective-change
//!   and parameter-distance stopping rules, and normalizes results into a
//!   [`RunOutcome`].
//! - Compute the Newton direction by an LU solve of `H·d = -∇f` (never by
//!   explicit inversion); a singular Hessian is a hard
//!   [`errors::MinError::SingularHessian`] failure.
//! - Centralize configuration ([`MinimizeOptions`], [`LineSearchParams`])
//!   and validation logic ([`validation`]) so the engine can assume sane,
//!   finite inputs.
//!
//! Invariants & assumptions
//! ------------------------
//! - Objectives are deterministic and side-effect-free; smoothness and
//!   convexity are assumed where the algorithms probe, never validated.
//! - Point, gradient, and Hessian dimensions agree and stay constant for an
//!   entire run; every evaluation is re-checked and violations surface as
//!   [`errors::MinError`] values, not panics.
//! - Line search is only entered with a strict descent direction
//!   (`∇f(x)·d < 0`); the minimizers guarantee this by construction and the
//!   search fails fast otherwise.
//! - Each minimizer instance owns its run state and trajectory exclusively;
//!   independent instances may run on separate threads with no
//!   synchronization.
//!
//! Conventions
//! -----------
//! - Vectors and matrices use the canonical aliases [`types::Point`],
//!   [`types::Grad`], [`types::Hessian`] (`ndarray` over `f64`).
//! - Running out of the iteration budget is a normal outcome
//!   (`converged = false`), not an error.
//! - The trajectory holds the point *before* each line-search step, plus one
//!   final entry appended on convergence only. On exhaustion it holds
//!   exactly `max_iter` entries.
//! - Progress reporting is opt-in: a per-iteration callback hook and a
//!   `verbose` flag. The algorithms themselves never print.
//!
//! Downstream usage
//! ----------------
//! - Reporting layers (contour-plot overlays, convergence curves) consume
//!   the index-aligned sequences returned by `path()` on either minimizer.
//! - Test harnesses construct objectives as plain closures via the blanket
//!   [`Objective`] impl.
//!
//! Testing notes
//! -------------
//! - Unit tests in submodules cover: Armijo acceptance and shrinking in
//!   [`line_search`], direction computation and singular solves in
//!   [`newton`], stopping-rule and trajectory bookkeeping in [`run`], and
//!   configuration validation in [`traits`] / [`validation`].
//! - Integration tests exercise both minimizers end to end on quadratic,
//!   Rosenbrock, linear, and exponential objectives.

pub mod errors;
pub mod gradient_descent;
pub mod line_search;
pub mod newton;
pub mod run;
pub mod traits;
pub mod types;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{MinError, MinResult};
pub use self::gradient_descent::GradientDescent;
pub use self::newton::NewtonMinimizer;
pub use self::traits::{
    Evaluation, IterationHook, LineSearchParams, MinimizeOptions, Objective, RunOutcome,
};
pub use self::types::{Grad, Hessian, Point, Value};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use unconstrained_min::minimize::prelude::*;
//
// to import the main minimization surface in a single line.

pub mod prelude {
    pub use super::errors::{MinError, MinResult};
    pub use super::gradient_descent::GradientDescent;
    pub use super::newton::NewtonMinimizer;
    pub use super::traits::{
        Evaluation, LineSearchParams, MinimizeOptions, Objective, RunOutcome,
    };
    pub use super::types::{Grad, Hessian, Point, Value};
}
