/// Crate-wide result alias for minimizer operations.
pub type MinResult<T> = Result<T, MinError>;

/// Error surface for the minimization layer.
///
/// Running out of the iteration budget is deliberately **not** represented
/// here: it is a normal outcome reported through
/// [`RunOutcome::converged`](crate::minimize::traits::RunOutcome). Every
/// variant below aborts the current run; the trajectory recorded up to the
/// failure point stays inspectable for diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub enum MinError {
    // ---- Configuration ----
    /// Objective-change tolerance must be finite and strictly positive.
    InvalidObjTol {
        tol: f64,
        reason: &'static str,
    },
    /// Parameter-distance tolerance must be finite and strictly positive.
    InvalidParamTol {
        tol: f64,
        reason: &'static str,
    },
    /// Initial trial step must be finite and strictly positive.
    InvalidInitialStep {
        step: f64,
        reason: &'static str,
    },
    /// Armijo slope coefficient must lie strictly inside (0, 1).
    InvalidSlopeCoeff {
        coeff: f64,
        reason: &'static str,
    },
    /// Backtracking shrink factor must lie strictly inside (0, 1).
    InvalidShrinkFactor {
        factor: f64,
        reason: &'static str,
    },

    // ---- Initial point ----
    /// Starting point has zero dimension.
    EmptyInitialPoint,
    /// Starting point coordinates need to be finite.
    InvalidInitialPoint {
        index: usize,
        value: f64,
    },

    // ---- Objective output ----
    /// Objective returned a non-finite value at a committed iterate.
    NonFiniteValue {
        value: f64,
    },
    /// Gradient dimension does not match the point dimension.
    GradientDimMismatch {
        expected: usize,
        found: usize,
    },
    /// Gradient elements need to be finite.
    InvalidGradient {
        index: usize,
        value: f64,
        reason: &'static str,
    },
    /// Hessian dimensions do not match the point dimension.
    HessianDimMismatch {
        expected: usize,
        found: (usize, usize),
    },
    /// Hessian entries need to be finite.
    InvalidHessian {
        row: usize,
        col: usize,
        value: f64,
    },
    /// Objective did not return a Hessian although one was requested.
    MissingHessian,

    // ---- Direction ----
    /// Directional derivative `∇f(x)·d` is non-negative; backtracking would
    /// not terminate.
    NonDescentDirection {
        slope: f64,
    },
    /// The Newton system `H·d = -∇f` has no LU solution.
    SingularHessian,
    /// Computed direction has non-finite coordinates.
    InvalidDirection {
        index: usize,
        value: f64,
    },
}

impl std::error::Error for MinError {}

impl std::fmt::Display for MinError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Configuration ----
            MinError::InvalidObjTol { tol, reason } => {
                write!(f, "Invalid objective tolerance {tol}: {reason}")
            }
            MinError::InvalidParamTol { tol, reason } => {
                write!(f, "Invalid parameter tolerance {tol}: {reason}")
            }
            MinError::InvalidInitialStep { step, reason } => {
                write!(f, "Invalid initial step length {step}: {reason}")
            }
            MinError::InvalidSlopeCoeff { coeff, reason } => {
                write!(f, "Invalid slope coefficient {coeff}: {reason}")
            }
            MinError::InvalidShrinkFactor { factor, reason } => {
                write!(f, "Invalid shrink factor {factor}: {reason}")
            }

            // ---- Initial point ----
            MinError::EmptyInitialPoint => {
                write!(f, "Initial point must have at least one coordinate")
            }
            MinError::InvalidInitialPoint { index, value } => {
                write!(f, "Invalid initial point at index {index}: {value}, must be finite")
            }

            // ---- Objective output ----
            MinError::NonFiniteValue { value } => {
                write!(f, "Non-finite objective value: {value}")
            }
            MinError::GradientDimMismatch { expected, found } => {
                write!(f, "Gradient dimension mismatch: expected {expected}, found {found}")
            }
            MinError::InvalidGradient { index, value, reason } => {
                write!(f, "Invalid gradient at index {index}: {value}: {reason}")
            }
            MinError::HessianDimMismatch { expected, found } => {
                write!(
                    f,
                    "Hessian dimension mismatch: expected ({expected}, {expected}), found {found:?}"
                )
            }
            MinError::InvalidHessian { row, col, value } => {
                write!(f, "Invalid Hessian at ({row}, {col}): {value}, must be finite")
            }
            MinError::MissingHessian => {
                write!(f, "Objective returned no Hessian although one was requested")
            }

            // ---- Direction ----
            MinError::NonDescentDirection { slope } => {
                write!(
                    f,
                    "Non-descent direction: directional derivative {slope} is >= 0, \
                     backtracking would not terminate"
                )
            }
            MinError::SingularHessian => {
                write!(f, "Singular Hessian: the Newton system has no solution")
            }
            MinError::InvalidDirection { index, value } => {
                write!(f, "Invalid direction at index {index}: {value}, must be finite")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Display formatting for representative variants of each error group.
    //
    // They intentionally DO NOT cover:
    // - Every variant's exact wording; messages are asserted on key content
    //   only so wording can evolve.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that structured payloads show up in the rendered message.
    //
    // Given
    // -----
    // - A `GradientDimMismatch` with distinct expected/found values.
    //
    // Expect
    // ------
    // - Both numbers appear in the Display output.
    fn display_includes_dimension_payload() {
        let err = MinError::GradientDimMismatch { expected: 2, found: 3 };
        let msg = err.to_string();
        assert!(msg.contains('2'));
        assert!(msg.contains('3'));
    }

    #[test]
    // Purpose
    // -------
    // Verify that the non-descent guard reports the offending slope.
    //
    // Given
    // -----
    // - A `NonDescentDirection` with a positive slope.
    //
    // Expect
    // ------
    // - The slope value appears in the Display output.
    fn display_includes_slope_for_non_descent() {
        let err = MinError::NonDescentDirection { slope: 0.25 };
        assert!(err.to_string().contains("0.25"));
    }
}
