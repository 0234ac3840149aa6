//! # residual-grid: grid-search residual evaluation for point-source deformation
//!
//! Exhaustive scoring of a parametric point-source deformation model against
//! observed displacement time series.
//!
//! ## What does it compute?
//!
//! Each observation point `i` at `(x_i, y_i)` carries a displacement series
//! `d[k, i]` on a shared time axis `t[k]`. A candidate source at `(X, Y)` with
//! spatial width `σ` and decay rate `A` predicts
//!
//! ```text
//! fit(k, i) = -A · t[k] · exp(-dist_i² / (2σ²))
//! ```
//!
//! For every combination of candidate X, Y, σ and A, the crate measures how
//! well that prediction matches the observations:
//!
//! 1. Observations within 3σ of `(X, Y)` are sorted into three annuli:
//!    `near` (≤ 1σ), `mid` (≤ 2σ) and `far` (≤ 3σ). Points beyond 3σ are ignored.
//! 2. For each amplitude, every in-range observation gets a time-averaged
//!    scaled residual `mean_k min(1, |fit - d| / max(|fit|, |d|))` in [0, 1].
//! 3. Residuals are averaged per annulus. An empty annulus scores 1.0.
//! 4. The three annulus scores are averaged into a combined score.
//!
//! Lower is better. The search is exhaustive over the supplied grid; there is
//! no optimizer.
//!
//! ## Quick Start
//!
//! ```rust
//! use residual_grid::prelude::*;
//!
//! // One observation at the origin, one time sample.
//! let x = vec![0.0];
//! let y = vec![0.0];
//! let t = vec![1.0];
//! let d = vec![-0.5];
//!
//! let search = GridSearch::new()
//!     .x_axis(vec![0.0])
//!     .y_axis(vec![0.0])
//!     .sigma_axis(vec![1.0])
//!     .amplitude_axis(vec![0.5])
//!     .build()?;
//!
//! let result = search.evaluate(&x, &y, &t, &d)?;
//!
//! assert_eq!(result.value(0, 0, 0, 0, Slot::NEAR), 0.0);
//! assert_eq!(result.count(0, 0, 0, DistanceBin::Near), 1);
//! println!("{}", result);
//! # Result::<(), GridError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Candidates: x=1 y=1 sigma=1 amplitude=1 (1 cells)
//!   Accumulator: [1, 1, 1, 1, 4]
//!
//! Best Fit:
//!   x:         0.0000
//!   y:         0.0000
//!   sigma:     1.0000
//!   amplitude: 0.5000
//!   residual:  0.666667
//! ```
//!
//! ## Output Layout
//!
//! The flat buffers in [`GridResult`](prelude::GridResult) follow the
//! column-major layout expected by downstream array consumers:
//!
//! | Buffer        | Logical shape          | Last index                       |
//! |---------------|------------------------|----------------------------------|
//! | `accumulator` | `[Sy, Sx, Ss, Sa, 4]`  | near, mid, far, average          |
//! | `counts`      | `[Sy, Sx, Ss, 3]`      | near, mid, far                   |
//!
//! The first index varies fastest, and the Y axis is stored **reversed**:
//! buffer row 0 holds the last Y candidate. Use `value()` and `count()` to read
//! by logical index without worrying about either detail.
//!
//! ## Parameters
//!
//! | Parameter                  | Default        | Options                    | Description                                 |
//! |----------------------------|----------------|----------------------------|---------------------------------------------|
//! | **x_axis / y_axis**        | required       | finite values              | Candidate source positions                  |
//! | **sigma_axis**             | required       | finite, > 0                | Candidate spatial decay widths              |
//! | **amplitude_axis**         | required       | finite values              | Candidate decay rates (sign applied inside) |
//! | **zero_residual_policy**   | `Zero`         | `Zero`, `Propagate`        | Residual when model and data are both 0     |
//! | **displacement_layout**    | `SeriesMajor`  | `SeriesMajor`, `TimeMajor` | Storage order of the `T x N` matrix         |
//! | **backend**                | `Sequential`   | `Sequential`, `Parallel`   | Grid traversal                              |
//! | **verbose**                | false          | true/false                 | Log axis ranges and timing at `info`        |
//!
//! ## Units
//!
//! Units must be consistent: if displacements are in mm and times in months,
//! amplitudes are in mm/month. Coordinates, X/Y candidates and sigma share a
//! length unit.
//!
//! ## Zero/zero samples
//!
//! When the modeled and observed values are both exactly zero, the scaled
//! residual is 0/0. With the default `ZeroResidualPolicy::Zero` such a sample
//! counts as a perfect match; `Propagate` keeps it as NaN so it surfaces in the
//! output. Omit `t = 0` from the time axis: the model is zero there.
//!
//! ## Parallel Execution
//!
//! With the default `parallel` feature, `Backend::Parallel` evaluates cells on
//! the rayon thread pool. Cells are independent and each performs the same
//! arithmetic as in sequential mode, so both backends produce bit-identical
//! buffers.
//!
//! ## Logging
//!
//! Diagnostics are emitted as `tracing` events. The library installs no
//! subscriber; attach one (e.g. `tracing-subscriber`) to see them.

#![deny(missing_docs)]

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and basic utilities.
//
// Contains errors, distance bins, flat index layouts, input views,
// output buffers and the backend enum.
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains squared distance, the Gaussian kernel and the scaled residual.
mod math;

// Layer 3: Algorithms - the residual evaluation.
//
// Contains distance classification, the temporal fit and single-cell
// accumulation and normalization.
mod algorithms;

// Layer 4: Engine - orchestration and execution control.
//
// Contains input validation, grid traversal and result assembly.
mod engine;

// Layer 5: Adapters - execution adapters.
//
// Contains the batch evaluator wrapping validation, allocation and execution.
mod adapters;

// High-level fluent API.
//
// Provides the `GridSearch` builder.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use residual_grid::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        Backend, BestFit, DisplacementLayout, DistanceBin, GridError, GridEvaluator, GridResult,
        GridSearchBuilder as GridSearch, GridShape, Slot, ZeroResidualPolicy,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal adapters.
    pub mod adapters {
        pub use crate::adapters::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
