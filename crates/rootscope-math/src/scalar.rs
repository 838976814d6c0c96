//! Floating-point bound shared by the solvers.

use std::fmt;

use num_traits::Float;

/// Floating-point type a [`RootFinder`](crate::solvers::RootFinder) can run in.
///
/// Implemented for every [`Float`] that can also be printed, which in practice
/// means `f32` and `f64`.
pub trait Scalar: Float + fmt::Debug + fmt::Display {
    /// Widens the value to `f64` for error reporting and logging.
    ///
    /// Values that cannot be represented become `NaN`.
    fn to_f64_lossy(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

impl<T> Scalar for T where T: Float + fmt::Debug + fmt::Display {}
