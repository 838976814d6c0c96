//! # Rootscope Math
//!
//! Newton-Raphson root finding for scalar functions, with a full trace of
//! every iteration for inspection or plotting.
//!
//! This crate provides:
//!
//! - **Solvers**: [`RootFinder`](solvers::RootFinder), a bounded Newton-Raphson loop
//! - **Problems**: the [`Problem`](problem::Problem) contract plus a polynomial problem
//! - **Traces**: [`IterationRecord`](solvers::IterationRecord) snapshots, serializable with serde
//!
//! ## Design Philosophy
//!
//! - **Generic**: one algorithm for `f32` and `f64`
//! - **Bounded**: every solve terminates, either with a root or a typed error
//! - **Observable**: the trace can be read after a solve or streamed while it runs
//!
//! ```rust
//! use rootscope_math::prelude::*;
//!
//! let mut finder = RootFinder::new(0.001).unwrap();
//! let root = finder
//!     .solve(&(|x: f64| x * x - 4.0, |x: f64| 2.0 * x), -4.0)
//!     .unwrap();
//!
//! assert!((root + 2.0).abs() < 1e-3);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]

pub mod error;
pub mod problem;
pub mod scalar;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::problem::{Polynomial, Problem};
    pub use crate::scalar::Scalar;
    pub use crate::solvers::{
        newton_raphson, IterationObserver, IterationRecord, ObserverAction, RootFinder, Solution,
        SolverConfig, DEFAULT_MAX_ITERATIONS,
    };
}

pub use error::{MathError, MathResult};
