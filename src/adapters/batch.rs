//! Batch adapter: the boundary around the evaluation kernel.
//!
//! ## Purpose
//!
//! This module provides the configured evaluator returned by the builder. Each
//! call to `evaluate` validates the observation buffers, allocates zeroed
//! output buffers with the downstream shapes, invokes the kernel exactly once
//! and hands back a `GridResult`.
//!
//! ## Design notes
//!
//! * **Processing**: Processes the entire candidate grid in a single call.
//! * **Delegation**: Delegates computation to the execution engine.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * `x` and `y` have the same length N.
//! * The displacement buffer holds exactly `t.len() * N` values.
//! * Candidate axes were validated when the evaluator was built.
//!
//! ## Non-goals
//!
//! * This adapter keeps no state between calls.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{ExecutorConfig, GridExecutor};
use crate::engine::output::GridResult;
use crate::engine::validator::Validator;
use crate::primitives::errors::GridError;
use crate::primitives::inputs::{CandidateAxes, DisplacementLayout, Observations};

/// A validated, ready-to-run grid search.
#[derive(Debug, Clone)]
pub struct GridEvaluator<T> {
    pub(crate) x_axis: Vec<T>,
    pub(crate) y_axis: Vec<T>,
    pub(crate) sigma_axis: Vec<T>,
    pub(crate) amplitude_axis: Vec<T>,
    pub(crate) displacement_layout: DisplacementLayout,
    pub(crate) executor: GridExecutor,
}

impl<T: Float + Send + Sync> GridEvaluator<T> {
    /// Score every candidate against the observations.
    ///
    /// - `x`, `y`: observation coordinates (length N).
    /// - `t`: time samples (length T, without t = 0).
    /// - `d`: displacement matrix, `T * N` values in the configured layout.
    pub fn evaluate(&self, x: &[T], y: &[T], t: &[T], d: &[T]) -> Result<GridResult<T>, GridError> {
        Validator::validate_observations(x, y, t, d)?;

        let observations = Observations::new(x, y, t, d, self.displacement_layout);
        let axes = self.axes();
        let (accumulator, counts) = self.executor.run(observations, axes).into_parts();

        Ok(GridResult {
            accumulator,
            counts,
            shape: axes.shape(),
            x_axis: self.x_axis.clone(),
            y_axis: self.y_axis.clone(),
            sigma_axis: self.sigma_axis.clone(),
            amplitude_axis: self.amplitude_axis.clone(),
        })
    }

    /// Borrowed view of the configured candidate axes.
    pub fn axes(&self) -> CandidateAxes<'_, T> {
        CandidateAxes {
            x: &self.x_axis,
            y: &self.y_axis,
            sigma: &self.sigma_axis,
            amplitude: &self.amplitude_axis,
        }
    }

    /// Execution configuration.
    pub fn config(&self) -> &ExecutorConfig {
        self.executor.config()
    }
}
