//! Error types for grid-search residual evaluation.
//!
//! ## Purpose
//!
//! This module defines the single error enum reported by the boundary layer
//! (validator and builder). The evaluation kernel itself has no failure path;
//! every variant here describes a precondition that is checked before the
//! kernel runs.
//!
//! ## Invariants
//!
//! * Errors are raised before any output buffer is written.
//! * Numeric payloads are widened to `f64` so the enum is not generic.

// External dependencies
use thiserror::Error;

/// Errors reported while configuring or invoking a grid search.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    /// The time axis is empty.
    #[error("Input arrays are empty")]
    EmptyInput,

    /// Observation x and y coordinates differ in length.
    #[error("Length mismatch: x has {x_len} points, y has {y_len}")]
    MismatchedCoordinates {
        /// Number of x coordinates.
        x_len: usize,
        /// Number of y coordinates.
        y_len: usize,
    },

    /// Displacement buffer is not `times * observations` long.
    #[error("Displacement size mismatch: expected {expected} values (times x observations), got {got}")]
    MismatchedDisplacements {
        /// `t.len() * x.len()`.
        expected: usize,
        /// Actual displacement buffer length.
        got: usize,
    },

    /// More observations than a bin counter can hold.
    #[error("Too many observations: got {got}, at most {max} are supported")]
    TooManyObservations {
        /// Number of observations supplied.
        got: usize,
        /// Counter ceiling.
        max: usize,
    },

    /// A coordinate, time sample or candidate value is NaN or infinite.
    #[error("Invalid numeric value: {0}")]
    InvalidNumericValue(String),

    /// A sigma candidate is not strictly positive and finite.
    #[error("Invalid sigma: {0} (must be > 0 and finite)")]
    InvalidSigma(f64),

    /// A candidate axis was never configured on the builder.
    #[error("Missing candidate axis: {0}")]
    MissingAxis(&'static str),

    /// A builder setter was called more than once.
    #[error(
        "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
    )]
    DuplicateParameter {
        /// Name of the repeated parameter.
        parameter: &'static str,
    },
}
