//! Per-iteration snapshots of a Newton-Raphson run.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::scalar::Scalar;

/// One pass of the Newton-Raphson loop.
///
/// The record holds the estimate the step acted on, not the updated one:
/// the next estimate is `x - delta_x`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IterationRecord<T> {
    /// Zero-based position in the trace.
    pub index: usize,
    /// Estimate before this step's update.
    pub x: T,
    /// `equation(x)`.
    pub y: T,
    /// `derivative(x)`.
    pub slope: T,
    /// The Newton step `y / slope`.
    pub delta_x: T,
}

impl<T: Scalar> IterationRecord<T> {
    /// Returns the estimate this step produced.
    #[must_use]
    pub fn next_x(&self) -> T {
        self.x - self.delta_x
    }

    /// Returns true if this step satisfied the tolerance.
    #[must_use]
    pub fn is_converged(&self, tolerance: T) -> bool {
        self.delta_x.abs() < tolerance
    }
}

/// Formats as `index = 0 x = -4.00 y = 12.00 slope = -8.00 delta_x = -1.50`.
///
/// Two decimals unless a precision is given (`{:.6}`).
impl<T: Scalar> fmt::Display for IterationRecord<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prec = f.precision().unwrap_or(2);
        write!(
            f,
            "index = {} x = {:.prec$} y = {:.prec$} slope = {:.prec$} delta_x = {:.prec$}",
            self.index,
            self.x,
            self.y,
            self.slope,
            self.delta_x,
            prec = prec
        )
    }
}
