//! High-level API for grid-search residual evaluation.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for the four candidate axes and the execution options, and
//! produces a validated [`GridEvaluator`].
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for every option.
//! * **Validated**: Axes are validated when `.build()` is called; observation
//!   buffers are validated on every `evaluate` call.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`GridSearchBuilder`] via `GridSearch::new()`.
//! 2. Set the candidate axes (`.x_axis()`, `.y_axis()`, `.sigma_axis()`, `.amplitude_axis()`).
//! 3. Optionally set the zero/zero policy, displacement layout, backend and verbosity.
//! 4. Call `.build()` and then `.evaluate(&x, &y, &t, &d)`.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{ExecutorConfig, GridExecutor};
use crate::engine::validator::Validator;
use crate::primitives::inputs::CandidateAxes;

// Publicly re-exported types
pub use crate::adapters::batch::GridEvaluator;
pub use crate::engine::output::{BestFit, GridResult};
pub use crate::math::residual::ZeroResidualPolicy;
pub use crate::primitives::backend::Backend;
pub use crate::primitives::bins::{DistanceBin, Slot};
pub use crate::primitives::errors::GridError;
pub use crate::primitives::inputs::DisplacementLayout;
pub use crate::primitives::layout::GridShape;

/// Fluent builder for configuring a grid search.
#[derive(Debug, Clone)]
pub struct GridSearchBuilder<T> {
    /// Candidate source X positions.
    pub x_axis: Option<Vec<T>>,

    /// Candidate source Y positions.
    pub y_axis: Option<Vec<T>>,

    /// Candidate spatial decay widths.
    pub sigma_axis: Option<Vec<T>>,

    /// Candidate decay rates (non-negative by convention).
    pub amplitude_axis: Option<Vec<T>>,

    /// Residual for samples where model and observation are both zero (default: Zero).
    pub zero_residual_policy: Option<ZeroResidualPolicy>,

    /// Storage order of the displacement matrix (default: SeriesMajor).
    pub displacement_layout: Option<DisplacementLayout>,

    /// Grid traversal backend (default: Sequential).
    pub backend: Option<Backend>,

    /// Raise diagnostic log events to `info` (default: false).
    pub verbose: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float + Send + Sync> Default for GridSearchBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float + Send + Sync> GridSearchBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            x_axis: None,
            y_axis: None,
            sigma_axis: None,
            amplitude_axis: None,
            zero_residual_policy: None,
            displacement_layout: None,
            backend: None,
            verbose: None,
            duplicate_param: None,
        }
    }

    /// Set the candidate source X positions.
    pub fn x_axis(mut self, values: impl Into<Vec<T>>) -> Self {
        if self.x_axis.is_some() {
            self.duplicate_param = Some("x_axis");
        }
        self.x_axis = Some(values.into());
        self
    }

    /// Set the candidate source Y positions.
    pub fn y_axis(mut self, values: impl Into<Vec<T>>) -> Self {
        if self.y_axis.is_some() {
            self.duplicate_param = Some("y_axis");
        }
        self.y_axis = Some(values.into());
        self
    }

    /// Set the candidate spatial decay widths. Each must be finite and > 0.
    pub fn sigma_axis(mut self, values: impl Into<Vec<T>>) -> Self {
        if self.sigma_axis.is_some() {
            self.duplicate_param = Some("sigma_axis");
        }
        self.sigma_axis = Some(values.into());
        self
    }

    /// Set the candidate decay rates. The model applies them with a negative sign.
    pub fn amplitude_axis(mut self, values: impl Into<Vec<T>>) -> Self {
        if self.amplitude_axis.is_some() {
            self.duplicate_param = Some("amplitude_axis");
        }
        self.amplitude_axis = Some(values.into());
        self
    }

    /// Set the residual used when model and observation are both exactly zero.
    pub fn zero_residual_policy(mut self, policy: ZeroResidualPolicy) -> Self {
        if self.zero_residual_policy.is_some() {
            self.duplicate_param = Some("zero_residual_policy");
        }
        self.zero_residual_policy = Some(policy);
        self
    }

    /// Set the storage order of the displacement matrix.
    pub fn displacement_layout(mut self, layout: DisplacementLayout) -> Self {
        if self.displacement_layout.is_some() {
            self.duplicate_param = Some("displacement_layout");
        }
        self.displacement_layout = Some(layout);
        self
    }

    /// Set the grid traversal backend.
    pub fn backend(mut self, backend: Backend) -> Self {
        if self.backend.is_some() {
            self.duplicate_param = Some("backend");
        }
        self.backend = Some(backend);
        self
    }

    /// Shorthand for `backend(Backend::Parallel)`.
    pub fn parallel(self) -> Self {
        self.backend(Backend::Parallel)
    }

    /// Raise diagnostic events (axis ranges, elapsed time) to `info`.
    pub fn verbose(mut self, enabled: bool) -> Self {
        if self.verbose.is_some() {
            self.duplicate_param = Some("verbose");
        }
        self.verbose = Some(enabled);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Validate the configuration and build the evaluator.
    pub fn build(self) -> Result<GridEvaluator<T>, GridError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let x_axis = self.x_axis.ok_or(GridError::MissingAxis("x_axis"))?;
        let y_axis = self.y_axis.ok_or(GridError::MissingAxis("y_axis"))?;
        let sigma_axis = self.sigma_axis.ok_or(GridError::MissingAxis("sigma_axis"))?;
        let amplitude_axis = self
            .amplitude_axis
            .ok_or(GridError::MissingAxis("amplitude_axis"))?;

        Validator::validate_axes(&CandidateAxes {
            x: &x_axis,
            y: &y_axis,
            sigma: &sigma_axis,
            amplitude: &amplitude_axis,
        })?;

        let executor = GridExecutor::new(ExecutorConfig {
            zero_residual_policy: self.zero_residual_policy.unwrap_or_default(),
            backend: self.backend.unwrap_or_default(),
            verbose: self.verbose.unwrap_or(false),
        });

        Ok(GridEvaluator {
            x_axis,
            y_axis,
            sigma_axis,
            amplitude_axis,
            displacement_layout: self.displacement_layout.unwrap_or_default(),
            executor,
        })
    }
}
