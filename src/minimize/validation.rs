//! Validation helpers for the minimization layer.
//!
//! This module centralizes the consistency checks used across the engine
//! and the configuration types:
//!
//! - **Tolerance and constant checks**: [`verify_tolerance`],
//!   [`verify_line_search_constant`], [`verify_shrink_factor`] keep the
//!   option constructors honest.
//! - **Initial point**: [`validate_initial_point`] rejects empty or
//!   non-finite start points before a run begins.
//! - **Objective output**: [`validate_evaluation`] enforces finiteness and
//!   dimension agreement for every committed evaluation, including Hessian
//!   presence when the method needs one.
//! - **Directions**: [`validate_direction`] rejects non-finite search
//!   directions coming out of a linear solve.
//!
//! These helpers standardize error reporting by returning domain-specific
//! [`MinError`] variants, so the engine can assume sane, finite inputs.
use crate::minimize::{
    errors::{MinError, MinResult},
    traits::Evaluation,
    types::Point,
};

/// Validate a convergence tolerance: must be finite and strictly positive.
///
/// The `make_err` closure builds the caller's error variant so the same
/// check serves both tolerance fields.
pub fn verify_tolerance<E>(tol: f64, make_err: E) -> MinResult<()>
where
    E: Fn(f64, &'static str) -> MinError,
{
    if !tol.is_finite() {
        return Err(make_err(tol, "Tolerance must be finite."));
    }
    if tol <= 0.0 {
        return Err(make_err(tol, "Tolerance must be positive."));
    }
    Ok(())
}

/// Validate the Armijo slope coefficient: strictly inside (0, 1).
pub fn verify_line_search_constant(coeff: f64) -> MinResult<()> {
    if !coeff.is_finite() || coeff <= 0.0 || coeff >= 1.0 {
        return Err(MinError::InvalidSlopeCoeff {
            coeff,
            reason: "Slope coefficient must lie strictly inside (0, 1).",
        });
    }
    Ok(())
}

/// Validate the backtracking shrink factor: strictly inside (0, 1).
pub fn verify_shrink_factor(factor: f64) -> MinResult<()> {
    if !factor.is_finite() || factor <= 0.0 || factor >= 1.0 {
        return Err(MinError::InvalidShrinkFactor {
            factor,
            reason: "Shrink factor must lie strictly inside (0, 1).",
        });
    }
    Ok(())
}

/// Validate a starting point before a run begins.
///
/// Checks:
/// - non-zero dimension,
/// - every coordinate finite (`NaN` and `±∞` are rejected).
///
/// # Errors
/// - [`MinError::EmptyInitialPoint`] for a zero-length vector.
/// - [`MinError::InvalidInitialPoint`] with the index/value of the first
///   offending coordinate.
pub fn validate_initial_point(x0: &Point) -> MinResult<()> {
    if x0.is_empty() {
        return Err(MinError::EmptyInitialPoint);
    }
    for (index, &value) in x0.iter().enumerate() {
        if !value.is_finite() {
            return Err(MinError::InvalidInitialPoint { index, value });
        }
    }
    Ok(())
}

/// Validate a committed objective evaluation against the run dimension.
///
/// Checks:
/// - `value` is finite,
/// - `grad.len() == dim` and every gradient element is finite,
/// - when `need_hessian`, a Hessian is present, is `dim × dim`, and has
///   only finite entries.
///
/// Line-search probes are value-only and skip this path; only evaluations
/// the engine commits to (the current and next iterate) are checked.
///
/// # Errors
/// - [`MinError::NonFiniteValue`], [`MinError::GradientDimMismatch`],
///   [`MinError::InvalidGradient`], [`MinError::MissingHessian`],
///   [`MinError::HessianDimMismatch`], or [`MinError::InvalidHessian`],
///   reporting the first offending element.
pub fn validate_evaluation(eval: &Evaluation, dim: usize, need_hessian: bool) -> MinResult<()> {
    if !eval.value.is_finite() {
        return Err(MinError::NonFiniteValue { value: eval.value });
    }
    if eval.grad.len() != dim {
        return Err(MinError::GradientDimMismatch { expected: dim, found: eval.grad.len() });
    }
    for (index, &value) in eval.grad.iter().enumerate() {
        if !value.is_finite() {
            return Err(MinError::InvalidGradient {
                index,
                value,
                reason: "Gradient elements must be finite.",
            });
        }
    }
    if need_hessian {
        let hessian = eval.hessian.as_ref().ok_or(MinError::MissingHessian)?;
        if hessian.nrows() != dim || hessian.ncols() != dim {
            return Err(MinError::HessianDimMismatch {
                expected: dim,
                found: (hessian.nrows(), hessian.ncols()),
            });
        }
        for ((row, col), &value) in hessian.indexed_iter() {
            if !value.is_finite() {
                return Err(MinError::InvalidHessian { row, col, value });
            }
        }
    }
    Ok(())
}

/// Validate that a computed search direction has only finite coordinates.
///
/// # Errors
/// Returns [`MinError::InvalidDirection`] with the index/value of the first
/// non-finite coordinate.
pub fn validate_direction(direction: &Point) -> MinResult<()> {
    for (index, &value) in direction.iter().enumerate() {
        if !value.is_finite() {
            return Err(MinError::InvalidDirection { index, value });
        }
    }
    Ok(())
}
