//! Scaled per-sample residual.
//!
//! ## Purpose
//!
//! This module computes the normalized discrepancy between one modeled and one
//! observed displacement:
//!
//! ```text
//! r = min(1, |fit - obs| / max(|fit|, |obs|))
//! ```
//!
//! The ratio is relative to the larger magnitude, so it is scale-free and
//! saturates at 1 once the two values differ by as much as the larger one
//! (in particular whenever they have opposite signs).
//!
//! ## Key concepts
//!
//! * **Zero/zero**: when both values are exactly zero the quotient is 0/0.
//!   `ZeroResidualPolicy` decides what that sample contributes.
//!
//! ## Invariants
//!
//! * For finite inputs that are not both zero, `r` is in [0, 1].
//! * A NaN displacement always yields NaN, regardless of policy.
//! * An infinite displacement against a finite fit yields NaN (inf/inf).

// External dependencies
use num_traits::Float;

/// Residual assigned to a sample whose modeled and observed values are both zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ZeroResidualPolicy {
    /// Two exact zeros are a perfect match: residual 0.
    #[default]
    Zero,

    /// Keep the undefined 0/0 quotient as NaN and let it reach the output.
    Propagate,
}

/// Scaled residual between a modeled and an observed value.
#[inline]
pub fn scaled_residual<T: Float>(fit: T, obs: T, policy: ZeroResidualPolicy) -> T {
    let diff = (fit - obs).abs();
    if diff.is_nan() {
        return diff;
    }

    let scale = fit.abs().max(obs.abs());
    if scale == T::zero() {
        return match policy {
            ZeroResidualPolicy::Zero => T::zero(),
            ZeroResidualPolicy::Propagate => T::nan(),
        };
    }

    // inf/inf stays NaN, never clamped
    let ratio = diff / scale;
    if ratio.is_nan() || ratio < T::one() {
        ratio
    } else {
        T::one()
    }
}
