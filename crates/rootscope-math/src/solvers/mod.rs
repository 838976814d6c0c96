//! Root-finding algorithms.
//!
//! This module provides a traced Newton-Raphson solver:
//!
//! - [`RootFinder`]: owns a configuration and the trace of its last solve
//! - [`newton_raphson`]: one-shot convenience returning a [`Solution`]
//!
//! Every pass of the loop is captured as an [`IterationRecord`], so callers can
//! inspect or plot how the estimate moved. An [`IterationObserver`] sees the
//! records as they are produced and can stop the solve early.
//!
//! # Example
//!
//! ```rust
//! use rootscope_math::solvers::RootFinder;
//!
//! let mut finder = RootFinder::new(0.001).unwrap();
//! let root = finder
//!     .solve(&(|x: f64| x * x - 4.0, |x: f64| 2.0 * x), -4.0)
//!     .unwrap();
//!
//! assert!((root + 2.0).abs() < 1e-6);
//! assert_eq!(finder.iterations()[0].x, -4.0);
//! assert_eq!(finder.iterations().len(), 4);
//! ```

mod newton;
mod observe;
mod trace;

pub use newton::{newton_raphson, RootFinder};
pub use observe::{IterationObserver, ObserverAction};
pub use trace::IterationRecord;

use serde::{Deserialize, Serialize};

use crate::error::{MathError, MathResult};
use crate::scalar::Scalar;

/// Default maximum iterations for root-finding algorithms.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Configuration for the Newton-Raphson solver.
///
/// The default tolerance is `sqrt(T::epsilon())`, which keeps the same
/// relative meaning for `f32` and `f64`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig<T> {
    /// Iteration stops once `|delta_x|` drops below this value.
    pub tolerance: T,
    /// Maximum number of iterations.
    pub max_iterations: u32,
    /// Derivatives with magnitude at or below this value are treated as zero.
    pub singularity_threshold: T,
}

impl<T: Scalar> Default for SolverConfig<T> {
    fn default() -> Self {
        Self {
            tolerance: T::epsilon().sqrt(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            singularity_threshold: T::epsilon(),
        }
    }
}

impl<T: Scalar> SolverConfig<T> {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: T, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
            ..Self::default()
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: T) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the threshold below which a derivative counts as zero.
    #[must_use]
    pub fn with_singularity_threshold(mut self, threshold: T) -> Self {
        self.singularity_threshold = threshold;
        self
    }

    /// Checks that the configuration can drive a terminating solve.
    pub fn validate(&self) -> MathResult<()> {
        if !self.tolerance.is_finite() || self.tolerance <= T::zero() {
            return Err(MathError::invalid_tolerance(self.tolerance.to_f64_lossy()));
        }
        if self.max_iterations == 0 {
            return Err(MathError::invalid_input("max_iterations must be at least 1"));
        }
        if !self.singularity_threshold.is_finite() || self.singularity_threshold < T::zero() {
            return Err(MathError::invalid_input(format!(
                "singularity threshold must be finite and non-negative, got {}",
                self.singularity_threshold
            )));
        }
        Ok(())
    }
}

/// Result of a successful solve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution<T> {
    /// The root found.
    pub root: T,
    /// `equation(root)`.
    pub residual: T,
    /// Every iteration, in order.
    pub iterations: Vec<IterationRecord<T>>,
}

impl<T> Solution<T> {
    /// Number of iterations used.
    #[must_use]
    pub fn iteration_count(&self) -> usize {
        self.iterations.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_solver_config() {
        let config = SolverConfig::default()
            .with_tolerance(1e-8)
            .with_max_iterations(50);

        assert!((config.tolerance - 1e-8_f64).abs() < f64::EPSILON);
        assert_eq!(config.max_iterations, 50);
        assert_eq!(config.singularity_threshold, f64::EPSILON);
    }

    #[test]
    fn test_default_tolerance_tracks_precision() {
        let single = SolverConfig::<f32>::default();
        let double = SolverConfig::<f64>::default();

        assert_relative_eq!(single.tolerance, f32::EPSILON.sqrt());
        assert_relative_eq!(double.tolerance, f64::EPSILON.sqrt());
        assert_eq!(double.max_iterations, DEFAULT_MAX_ITERATIONS);
    }

    #[test]
    fn test_validate_rejects_bad_tolerance() {
        for tolerance in [0.0, -1e-3, f64::NAN, f64::INFINITY] {
            let err = SolverConfig::new(tolerance, 10).validate().unwrap_err();
            assert!(matches!(err, MathError::InvalidTolerance { .. }));
        }
    }

    #[test]
    fn test_validate_rejects_zero_iterations() {
        let err = SolverConfig::new(1e-3, 0).validate().unwrap_err();
        assert!(matches!(err, MathError::InvalidInput { .. }));
    }

    #[test]
    fn test_validate_rejects_bad_threshold() {
        let config = SolverConfig::new(1e-3_f32, 10).with_singularity_threshold(-1.0);
        assert!(config.validate().is_err());

        let config = SolverConfig::new(1e-3_f32, 10).with_singularity_threshold(0.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config = SolverConfig::new(0.001, 25).with_singularity_threshold(0.0);
        let json = serde_json::to_string(&config).unwrap();
        let back: SolverConfig<f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
