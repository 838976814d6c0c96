//! Error types for root finding.

use thiserror::Error;

/// A specialized Result type for root-finding operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur while configuring or running a root finder.
///
/// Numeric payloads are widened to `f64` regardless of the precision the
/// solver ran in.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// Tolerance is zero, negative, or not finite.
    #[error("Invalid tolerance: {tolerance:e} (must be positive and finite)")]
    InvalidTolerance {
        /// The rejected tolerance.
        tolerance: f64,
    },

    /// Derivative vanished (or the Newton step blew up) during iteration.
    #[error("Singular derivative at iteration {index}: f'({x}) = {slope:.2e}")]
    SingularDerivative {
        /// Zero-based iteration at which the derivative was singular.
        index: usize,
        /// Estimate at which the derivative was evaluated.
        x: f64,
        /// The offending derivative value.
        slope: f64,
    },

    /// Iteration cap reached before the step fell below tolerance.
    #[error("Did not converge within {iterations} iterations (last step: {last_step:.2e})")]
    NonConvergence {
        /// Number of iterations attempted.
        iterations: u32,
        /// Absolute size of the last Newton step.
        last_step: f64,
    },

    /// Non-finite initial guess, function value, or iterate.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },

    /// An observer asked the solver to stop.
    #[error("Stopped by observer after {iterations} iterations")]
    Stopped {
        /// Number of iterations recorded before stopping.
        iterations: usize,
    },
}

impl MathError {
    /// Creates an invalid tolerance error.
    #[must_use]
    pub fn invalid_tolerance(tolerance: f64) -> Self {
        Self::InvalidTolerance { tolerance }
    }

    /// Creates a singular derivative error.
    #[must_use]
    pub fn singular_derivative(index: usize, x: f64, slope: f64) -> Self {
        Self::SingularDerivative { index, x, slope }
    }

    /// Creates a non-convergence error.
    #[must_use]
    pub fn non_convergence(iterations: u32, last_step: f64) -> Self {
        Self::NonConvergence {
            iterations,
            last_step,
        }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}
