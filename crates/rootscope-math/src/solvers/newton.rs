//! Newton-Raphson root-finding algorithm.

use crate::error::{MathError, MathResult};
use crate::problem::Problem;
use crate::scalar::Scalar;
use crate::solvers::{IterationObserver, IterationRecord, ObserverAction, Solution, SolverConfig};

/// Traced Newton-Raphson root finder.
///
/// Uses the iteration:
/// `x_{n+1} = x_n - f(x_n) / f'(x_n)`
///
/// and keeps going while `|f(x_n) / f'(x_n)| >= tolerance`. The loop always runs
/// at least once, even when the initial guess is already a root, and never more
/// than `max_iterations` times.
///
/// Each pass appends an [`IterationRecord`] to the trace. The trace is cleared
/// at the start of every solve, so it always describes the most recent call.
/// A failed solve keeps the records of the steps that completed: a step whose
/// derivative is singular or whose evaluations are not finite is not recorded.
///
/// A finder is not meant to be shared across threads while solving; use one
/// instance per concurrent solve.
///
/// # Example
///
/// ```rust
/// use rootscope_math::problem::Polynomial;
/// use rootscope_math::solvers::RootFinder;
///
/// // 2x^3 - 4x^2 + 6 has a single real root at -1
/// let cubic = Polynomial::new(vec![6.0_f64, 0.0, -4.0, 2.0]);
///
/// let mut finder = RootFinder::new(1e-6).unwrap();
/// let root = finder.solve(&cubic, -4.0).unwrap();
///
/// assert!((root + 1.0).abs() < 1e-6);
/// for record in finder.iterations() {
///     println!("{record}");
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RootFinder<T> {
    config: SolverConfig<T>,
    trace: Vec<IterationRecord<T>>,
}

impl<T: Scalar> RootFinder<T> {
    /// Creates a finder with the given tolerance and default limits.
    ///
    /// # Errors
    ///
    /// Returns `MathError::InvalidTolerance` if `tolerance` is not positive and finite.
    pub fn new(tolerance: T) -> MathResult<Self> {
        Self::with_config(SolverConfig::default().with_tolerance(tolerance))
    }

    /// Creates a finder from a full configuration.
    pub fn with_config(config: SolverConfig<T>) -> MathResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            trace: Vec::new(),
        })
    }

    /// Returns the convergence tolerance.
    #[must_use]
    pub fn tolerance(&self) -> T {
        self.config.tolerance
    }

    /// Returns the solver configuration.
    #[must_use]
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }

    /// Returns the trace of the most recent solve.
    #[must_use]
    pub fn iterations(&self) -> &[IterationRecord<T>] {
        &self.trace
    }

    /// Returns the last recorded iteration, if any.
    #[must_use]
    pub fn last_iteration(&self) -> Option<&IterationRecord<T>> {
        self.trace.last()
    }

    /// Consumes the finder, returning its trace.
    #[must_use]
    pub fn into_iterations(self) -> Vec<IterationRecord<T>> {
        self.trace
    }

    /// Finds a root of `problem` starting from `initial_guess`.
    ///
    /// # Errors
    ///
    /// - `MathError::InvalidInput` if the initial guess, an evaluation, or an
    ///   iterate is not finite.
    /// - `MathError::SingularDerivative` if the derivative is within the
    ///   singularity threshold of zero.
    /// - `MathError::NonConvergence` if `max_iterations` passes did not bring
    ///   the step below tolerance.
    pub fn solve<P>(&mut self, problem: &P, initial_guess: T) -> MathResult<T>
    where
        P: Problem<T> + ?Sized,
    {
        self.solve_observed(problem, initial_guess, ())
    }

    /// Like [`solve`](Self::solve), reporting each record to `observer` as it
    /// is appended.
    ///
    /// A [`ObserverAction::Stop`] aborts with `MathError::Stopped` unless the
    /// observed step already converged.
    pub fn solve_observed<P, O>(
        &mut self,
        problem: &P,
        initial_guess: T,
        mut observer: O,
    ) -> MathResult<T>
    where
        P: Problem<T> + ?Sized,
        O: IterationObserver<T>,
    {
        self.trace.clear();

        if !initial_guess.is_finite() {
            return Err(MathError::invalid_input(format!(
                "initial guess must be finite, got {initial_guess}"
            )));
        }

        let tolerance = self.config.tolerance;
        let mut x = initial_guess;
        let mut last_step = T::infinity();

        for index in 0..self.config.max_iterations as usize {
            let (y, slope) = problem.evaluate(x);

            if !y.is_finite() || !slope.is_finite() {
                log::warn!(
                    "non-finite evaluation at iteration {index}: f({x}) = {y}, f'({x}) = {slope}"
                );
                return Err(MathError::invalid_input(format!(
                    "non-finite evaluation at iteration {index}: f({x}) = {y}, f'({x}) = {slope}"
                )));
            }

            let delta_x = y / slope;

            // A tiny but non-zero slope can still overflow the step.
            if slope.abs() <= self.config.singularity_threshold || !delta_x.is_finite() {
                log::warn!("singular derivative at iteration {index}: f'({x}) = {slope}");
                return Err(MathError::singular_derivative(
                    index,
                    x.to_f64_lossy(),
                    slope.to_f64_lossy(),
                ));
            }

            let record = IterationRecord {
                index,
                x,
                y,
                slope,
                delta_x,
            };
            log::trace!("{record:.6}");
            self.trace.push(record);
            let action = observer.observe(&record);

            x = record.next_x();
            last_step = delta_x.abs();

            if record.is_converged(tolerance) {
                log::debug!(
                    "newton-raphson converged to {x} after {} iterations",
                    self.trace.len()
                );
                return Ok(x);
            }

            if action == ObserverAction::Stop {
                return Err(MathError::Stopped {
                    iterations: self.trace.len(),
                });
            }

            if !x.is_finite() {
                return Err(MathError::invalid_input(format!(
                    "iterate overflowed at iteration {index}"
                )));
            }
        }

        log::warn!(
            "newton-raphson did not converge within {} iterations (last step {last_step})",
            self.config.max_iterations
        );
        Err(MathError::non_convergence(
            self.config.max_iterations,
            last_step.to_f64_lossy(),
        ))
    }
}

/// Newton-Raphson in one call.
///
/// Builds a [`RootFinder`] from `config`, solves, and returns the root together
/// with its residual and the full trace.
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `df` - The derivative of the function
/// * `initial_guess` - Starting point for the iteration
/// * `config` - Solver configuration
///
/// # Example
///
/// ```rust
/// use rootscope_math::solvers::{newton_raphson, SolverConfig};
///
/// // Find root of x^2 - 2 (i.e., sqrt(2))
/// let f = |x: f64| x * x - 2.0;
/// let df = |x: f64| 2.0 * x;
///
/// let solution = newton_raphson(f, df, 1.5, &SolverConfig::default()).unwrap();
/// assert!((solution.root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// assert!(solution.iteration_count() < 10);
/// ```
pub fn newton_raphson<T, F, DF>(
    f: F,
    df: DF,
    initial_guess: T,
    config: &SolverConfig<T>,
) -> MathResult<Solution<T>>
where
    T: Scalar,
    F: Fn(T) -> T,
    DF: Fn(T) -> T,
{
    let mut finder = RootFinder::with_config(*config)?;
    let problem = (f, df);
    let root = finder.solve(&problem, initial_guess)?;

    Ok(Solution {
        root,
        residual: problem.equation(root),
        iterations: finder.into_iterations(),
    })
}
