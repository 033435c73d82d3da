//! unconstrained_min — line-search minimization of smooth multivariate functions.
//!
//! Purpose
//! -------
//! Serve as the crate root for the minimization library. The crate provides
//! two classical descent methods — gradient descent and damped Newton — both
//! driven by a backtracking line search that enforces an Armijo-type
//! sufficient-decrease condition.
//!
//! Key behaviors
//! -------------
//! - Expose the [`minimize`] module as the public crate surface: minimizers,
//!   the [`minimize::Objective`] trait, configuration types, and the shared
//!   error enum.
//! - Keep all heavy numerical work in the inner modules; this file declares
//!   modules only.
//!
//! Conventions
//! -----------
//! - Vectors and matrices crossing the public API are `ndarray` containers
//!   over `f64`, behind the aliases in [`minimize::types`].
//! - Public entrypoints that can fail return
//!   [`minimize::errors::MinResult<T>`]; the crate never intentionally
//!   panics or uses `unsafe`.
//!
//! Downstream usage
//! ----------------
//! - Callers construct a [`minimize::GradientDescent`] or
//!   [`minimize::NewtonMinimizer`] with an objective, a start point, and
//!   tolerances; call `run()`; and read the recorded trajectory via `path()`
//!   for reporting or plotting.
//! - `use unconstrained_min::minimize::prelude::*;` imports the main surface
//!   in a single line.

pub mod minimize;
