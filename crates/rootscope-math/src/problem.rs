//! Scalar problems a root finder can be pointed at.
//!
//! A [`Problem`] is a pair of pure functions: the equation whose root is
//! sought and its derivative. The derivative is always supplied by the caller.
//!
//! Any `(equation, derivative)` tuple of closures is a problem:
//!
//! ```rust
//! use rootscope_math::problem::Problem;
//!
//! let problem = (|x: f64| x * x - 4.0, |x: f64| 2.0 * x);
//! assert_eq!(problem.equation(-4.0), 12.0);
//! assert_eq!(problem.derivative(-4.0), -8.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::scalar::Scalar;

/// A differentiable scalar function.
pub trait Problem<T: Scalar> {
    /// Evaluates the function at `x`.
    fn equation(&self, x: T) -> T;

    /// Evaluates the derivative of the function at `x`.
    fn derivative(&self, x: T) -> T;

    /// Evaluates the function and its derivative together.
    ///
    /// Override when both can be computed in a single pass.
    fn evaluate(&self, x: T) -> (T, T) {
        (self.equation(x), self.derivative(x))
    }
}

impl<T, F, D> Problem<T> for (F, D)
where
    T: Scalar,
    F: Fn(T) -> T,
    D: Fn(T) -> T,
{
    fn equation(&self, x: T) -> T {
        (self.0)(x)
    }

    fn derivative(&self, x: T) -> T {
        (self.1)(x)
    }
}

impl<T: Scalar, P: Problem<T> + ?Sized> Problem<T> for &P {
    fn equation(&self, x: T) -> T {
        (**self).equation(x)
    }

    fn derivative(&self, x: T) -> T {
        (**self).derivative(x)
    }

    fn evaluate(&self, x: T) -> (T, T) {
        (**self).evaluate(x)
    }
}

/// A polynomial with coefficients in ascending powers of `x`.
///
/// # Example
///
/// ```rust
/// use rootscope_math::problem::{Polynomial, Problem};
///
/// // 2x^3 - 4x^2 + 6
/// let p = Polynomial::new(vec![6.0, 0.0, -4.0, 2.0]);
/// assert_eq!(p.equation(-1.0), 0.0);
/// assert_eq!(p.derivative(-1.0), 14.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polynomial<T> {
    coefficients: Vec<T>,
}

impl<T: Scalar> Polynomial<T> {
    /// Creates a polynomial from coefficients `[c0, c1, c2, ...]`.
    ///
    /// An empty coefficient list is the zero polynomial.
    #[must_use]
    pub fn new(coefficients: Vec<T>) -> Self {
        Self { coefficients }
    }
}

impl<T: Scalar> Problem<T> for Polynomial<T> {
    fn equation(&self, x: T) -> T {
        self.evaluate(x).0
    }

    fn derivative(&self, x: T) -> T {
        self.evaluate(x).1
    }

    // Horner's scheme carrying the derivative alongside the value.
    fn evaluate(&self, x: T) -> (T, T) {
        let mut value = T::zero();
        let mut slope = T::zero();
        for &c in self.coefficients.iter().rev() {
            slope = slope * x + value;
            value = value * x + c;
        }
        (value, slope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_closure_pair() {
        let problem = (|x: f64| x * x * x - 27.0, |x: f64| 3.0 * x * x);
        assert_relative_eq!(problem.equation(3.0), 0.0);
        assert_relative_eq!(problem.derivative(3.0), 27.0);
        assert_eq!(problem.evaluate(2.0), (-19.0, 12.0));
    }

    #[test]
    fn test_polynomial_matches_closed_form() {
        let p = Polynomial::new(vec![6.0, 0.0, -4.0, 2.0]);
        for &x in &[-4.0, -1.0, 0.0, 0.5, 3.0] {
            let (value, slope) = p.evaluate(x);
            assert_relative_eq!(value, 2.0 * x * x * x - 4.0 * x * x + 6.0, epsilon = 1e-12);
            assert_relative_eq!(slope, 6.0 * x * x - 8.0 * x, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_zero_polynomial() {
        let p = Polynomial::<f64>::new(Vec::new());
        assert_eq!(p.evaluate(10.0), (0.0, 0.0));
    }

    #[test]
    fn test_reference_through_pointer() {
        let p = Polynomial::new(vec![-4.0_f32, 0.0, 1.0]);
        let by_ref = &p;
        assert_eq!(by_ref.equation(2.0), 0.0);
        assert_eq!(by_ref.derivative(2.0), 4.0);
    }
}
