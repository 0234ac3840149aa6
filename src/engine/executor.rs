//! Execution engine for grid-search residual evaluation.
//!
//! ## Purpose
//!
//! This module drives the evaluation kernel over the whole candidate grid. It
//! allocates the zeroed output buffers, walks every (sigma, x, y) cell with the
//! selected backend, scatters each finished cell into the flat buffers and
//! emits diagnostic log events.
//!
//! ## Design notes
//!
//! * **One code path**: instrumentation is driven by `verbose`, not by a
//!   separate kernel. Diagnostics are `tracing` events at `info` when verbose
//!   and `debug` otherwise.
//! * **Parallel scatter**: the parallel backend evaluates cells into
//!   `CellOutput` records on the rayon pool and scatters them from a single
//!   writer. Each cell performs exactly the same arithmetic in either backend,
//!   so the output is bit-identical.
//!
//! ## Invariants
//!
//! * Every cell is evaluated exactly once and normalized only after all of its
//!   observations are processed.
//! * Sequential order is sigma outer, then x, then y. Any other order yields
//!   the same output because cells are independent.
//!
//! ## Non-goals
//!
//! * This module does not validate inputs (handled by `validator`).
//! * This module does not search or refine the grid; evaluation is exhaustive.

// External dependencies
use std::time::Instant;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::cell::CellContext;
use crate::math::distance::value_range;
use crate::math::residual::ZeroResidualPolicy;
use crate::primitives::backend::Backend;
use crate::primitives::buffer::{CellBuffer, GridBuffer};
use crate::primitives::inputs::{CandidateAxes, Observations};
use crate::primitives::layout::{AccumulatorLayout, GridShape};

/// Emit a diagnostic event at `info` when verbose, `debug` otherwise.
macro_rules! diagnostic {
    ($verbose:expr, $($arg:tt)+) => {
        if $verbose {
            tracing::info!($($arg)+);
        } else {
            tracing::debug!($($arg)+);
        }
    };
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for grid execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExecutorConfig {
    /// Residual assigned when model and observation are both zero.
    pub zero_residual_policy: ZeroResidualPolicy,

    /// Grid traversal backend.
    pub backend: Backend,

    /// Raise diagnostic events to `info`.
    pub verbose: bool,
}

// ============================================================================
// Executor
// ============================================================================

/// Runs the evaluation kernel over a full candidate grid.
#[derive(Debug, Clone, Copy, Default)]
pub struct GridExecutor {
    config: ExecutorConfig,
}

impl GridExecutor {
    /// Create an executor with the given configuration.
    pub fn new(config: ExecutorConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    pub fn config(&self) -> &ExecutorConfig {
        &self.config
    }

    /// Evaluate every cell of the grid spanned by `axes`.
    ///
    /// Inputs must already be validated; the kernel indexes without checks
    /// beyond Rust's own slice bounds.
    pub fn run<T>(&self, observations: Observations<'_, T>, axes: CandidateAxes<'_, T>) -> GridBuffer<T>
    where
        T: Float + Send + Sync,
    {
        let shape = axes.shape();
        let verbose = self.config.verbose;
        self.log_axes(&axes);

        let ctx = CellContext {
            observations,
            axes,
            policy: self.config.zero_residual_policy,
        };
        let mut grid = GridBuffer::zeroed(shape);
        let started = Instant::now();

        if shape.cell_count() == 0 {
            diagnostic!(verbose, "candidate grid is empty, nothing to evaluate");
        } else if self.config.backend.is_parallel() {
            run_parallel(&ctx, shape, &mut grid);
        } else {
            run_sequential(&ctx, shape, &mut grid);
        }

        let elapsed = started.elapsed();
        diagnostic!(
            verbose,
            cells = shape.cell_count(),
            observations = observations.len(),
            elapsed_secs = elapsed.as_secs_f64(),
            "grid evaluation finished"
        );
        grid
    }

    fn log_axes<T: Float>(&self, axes: &CandidateAxes<'_, T>) {
        let verbose = self.config.verbose;
        let dims = AccumulatorLayout::new(axes.shape()).dims();
        diagnostic!(
            verbose,
            "accumulator dimensions: [y:{}, x:{}, s:{}, a:{}, r:{}]",
            dims[0],
            dims[1],
            dims[2],
            dims[3],
            dims[4]
        );
        for (name, values) in [
            ("x", axes.x),
            ("y", axes.y),
            ("sigma", axes.sigma),
            ("amplitude", axes.amplitude),
        ] {
            if let Some((min, max)) = value_range(values) {
                diagnostic!(
                    verbose,
                    axis = name,
                    min = min.to_f64().unwrap_or(f64::NAN),
                    max = max.to_f64().unwrap_or(f64::NAN),
                    steps = values.len(),
                    "candidate axis"
                );
            }
        }
    }
}

// ============================================================================
// Backends
// ============================================================================

/// Sigma outer, then x, then y, reusing one scratch buffer.
fn run_sequential<T: Float>(ctx: &CellContext<'_, T>, shape: GridShape, grid: &mut GridBuffer<T>) {
    let mut buffer = CellBuffer::new(shape.amplitude);
    for s in 0..shape.sigma {
        for gx in 0..shape.x {
            for gy in 0..shape.y {
                let cell = ctx.evaluate(gx, gy, s, &mut buffer);
                grid.write_cell(&cell);
            }
        }
    }
}

/// Cells evaluated on the rayon pool, scattered by a single writer.
#[cfg(feature = "parallel")]
fn run_parallel<T>(ctx: &CellContext<'_, T>, shape: GridShape, grid: &mut GridBuffer<T>)
where
    T: Float + Send + Sync,
{
    use rayon::prelude::*;

    let cells: Vec<_> = (0..shape.cell_count())
        .into_par_iter()
        .map_init(
            || CellBuffer::new(shape.amplitude),
            |buffer, idx| {
                let (gx, gy, s) = cell_indices(idx, shape);
                ctx.evaluate(gx, gy, s, buffer)
            },
        )
        .collect();

    for cell in &cells {
        grid.write_cell(cell);
    }
}

#[cfg(not(feature = "parallel"))]
fn run_parallel<T: Float>(ctx: &CellContext<'_, T>, shape: GridShape, grid: &mut GridBuffer<T>) {
    run_sequential(ctx, shape, grid);
}

/// Decompose a linear cell index in sigma/x/y order.
#[inline]
pub fn cell_indices(idx: usize, shape: GridShape) -> (usize, usize, usize) {
    let gy = idx % shape.y;
    let gx = (idx / shape.y) % shape.x;
    let s = idx / (shape.y * shape.x);
    (gx, gy, s)
}
