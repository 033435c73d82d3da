//! minimize::types — shared numeric aliases and default constants.
//!
//! Purpose
//! -------
//! Centralize the core numeric types and tuning constants used across the
//! minimization layer. Defining these in one place keeps the rest of the
//! code agnostic to `ndarray` generics and gives every default a single,
//! named home.
//!
//! Conventions
//! -----------
//! - [`Point`] and [`Grad`] are treated conceptually as column vectors with
//!   length equal to the problem dimension.
//! - [`Hessian`] is a dense square matrix with dimension
//!   `point.len() × point.len()` when present.
//! - The `DEFAULT_*` constants encode the stock stopping rules and
//!   line-search shape; callers override them via [`MinimizeOptions`] and
//!   [`LineSearchParams`].
//!
//! [`MinimizeOptions`]: crate::minimize::traits::MinimizeOptions
//! [`LineSearchParams`]: crate::minimize::traits::LineSearchParams
use ndarray::{Array1, Array2};

/// Iterate point `x` in parameter space.
///
/// Alias for `ndarray::Array1<f64>`, used as the canonical vector type
/// throughout the minimizers.
pub type Point = Array1<f64>;

/// Gradient vector `∇f(x)`, matching the shape of [`Point`].
pub type Grad = Array1<f64>;

/// Dense Hessian matrix; `n × n` for `n = point.len()`.
pub type Hessian = Array2<f64>;

/// Scalar objective value `f(x)`.
pub type Value = f64;

/// Default tolerance on the change in objective value between two
/// consecutive iterations.
pub const DEFAULT_OBJ_TOL: f64 = 1e-12;

/// Default tolerance on the euclidean distance between two consecutive
/// iterate locations.
pub const DEFAULT_PARAM_TOL: f64 = 1e-8;

/// Default hard cap on the number of iterations per run.
pub const DEFAULT_MAX_ITER: usize = 100;

/// Default first trial step length for the backtracking line search.
///
/// Starting from the full step keeps the exact Newton step reachable on
/// quadratic objectives.
pub const DEFAULT_INITIAL_STEP: f64 = 1.0;

/// Default Armijo slope coefficient `c` in the sufficient-decrease
/// condition `f(x + α·d) ≤ f(x) + c·α·∇f(x)·d`.
pub const DEFAULT_SLOPE_COEFF: f64 = 0.01;

/// Default geometric shrink factor applied to rejected trial steps.
pub const DEFAULT_SHRINK: f64 = 0.5;
