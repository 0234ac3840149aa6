//! Input validation for grid-search inputs.
//!
//! ## Purpose
//!
//! The evaluation kernel performs no bounds checking. This module establishes
//! everything it relies on before it runs: matching coordinate lengths, a
//! displacement matrix of the right size, finite geometry, and strictly
//! positive sigma candidates.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free (apart from log events).
//! * A validated observation set never overflows a `u32` bin counter.
//!
//! ## Non-goals
//!
//! * Displacement values are not checked for finiteness; NaN samples are
//!   legitimate "missing" markers and propagate into the affected cells.
//! * This module does not correct or filter invalid inputs.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::GridError;
use crate::primitives::inputs::CandidateAxes;

/// Largest observation count a bin counter can hold.
pub const MAX_OBSERVATIONS: usize = u32::MAX as usize;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for grid-search inputs.
///
/// All methods return `Result<(), GridError>` and fail fast upon the first
/// violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Observation Validation
    // ========================================================================

    /// Validate observation coordinates, time axis and displacement matrix.
    pub fn validate_observations<T: Float>(
        x: &[T],
        y: &[T],
        t: &[T],
        d: &[T],
    ) -> Result<(), GridError> {
        // Check 1: Matching coordinate lengths
        if x.len() != y.len() {
            return Err(GridError::MismatchedCoordinates {
                x_len: x.len(),
                y_len: y.len(),
            });
        }

        // Check 2: Non-empty time axis. An empty observation set is valid.
        if t.is_empty() {
            return Err(GridError::EmptyInput);
        }

        // Check 3: Counter capacity
        if x.len() > MAX_OBSERVATIONS {
            return Err(GridError::TooManyObservations {
                got: x.len(),
                max: MAX_OBSERVATIONS,
            });
        }

        // Check 4: Displacement matrix is T x N
        let expected = t.len().saturating_mul(x.len());
        if d.len() != expected {
            return Err(GridError::MismatchedDisplacements {
                expected,
                got: d.len(),
            });
        }

        // Check 5: Finite geometry and times
        Self::validate_finite("x", x)?;
        Self::validate_finite("y", y)?;
        Self::validate_finite("t", t)?;

        if t.iter().any(|&tk| tk == T::zero()) {
            tracing::warn!(
                "time axis contains t = 0; the model is identically zero there and the sample only adds a constant residual"
            );
        }

        Ok(())
    }

    // ========================================================================
    // Axis Validation
    // ========================================================================

    /// Validate all four candidate axes.
    pub fn validate_axes<T: Float>(axes: &CandidateAxes<'_, T>) -> Result<(), GridError> {
        Self::validate_finite("x_axis", axes.x)?;
        Self::validate_finite("y_axis", axes.y)?;
        Self::validate_sigma_axis(axes.sigma)?;
        Self::validate_finite("amplitude_axis", axes.amplitude)?;
        Ok(())
    }

    /// Validate the sigma candidates: each must be finite and strictly positive.
    pub fn validate_sigma_axis<T: Float>(sigma: &[T]) -> Result<(), GridError> {
        for &s in sigma {
            if !s.is_finite() || s <= T::zero() {
                return Err(GridError::InvalidSigma(s.to_f64().unwrap_or(f64::NAN)));
            }
        }
        Ok(())
    }

    /// Validate that every value in a named buffer is finite.
    pub fn validate_finite<T: Float>(name: &str, values: &[T]) -> Result<(), GridError> {
        for (i, &val) in values.iter().enumerate() {
            if !val.is_finite() {
                return Err(GridError::InvalidNumericValue(format!(
                    "{}[{}]={}",
                    name,
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        Ok(())
    }

    // ========================================================================
    // Builder Validation
    // ========================================================================

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), GridError> {
        if let Some(param) = duplicate_param {
            return Err(GridError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
