//! Per-amplitude temporal fit.
//!
//! ## Purpose
//!
//! Stage 2 of a grid cell: for one observation and one candidate amplitude,
//! compare the time-linear model against the observed series sample by sample
//! and average the scaled residuals over the time axis.
//!
//! ```text
//! fit_k = -amp * t_k * w
//! R     = (1/T) Σ_k min(1, |fit_k - d_k| / max(|fit_k|, |d_k|))
//! ```
//!
//! ## Invariants
//!
//! * `R` is in [0, 1] whenever every sample residual is.
//! * The amplitude is always applied with a negative sign.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::residual::{ZeroResidualPolicy, scaled_residual};

/// Time-averaged scaled residual for one (observation, amplitude) pair.
///
/// `weight` is the Gaussian attenuation at the observation's distance and
/// `series` yields the observed displacements aligned with `times`.
#[inline]
pub fn time_averaged_residual<T, I>(
    times: &[T],
    series: I,
    amplitude: T,
    weight: T,
    policy: ZeroResidualPolicy,
) -> T
where
    T: Float,
    I: IntoIterator<Item = T>,
{
    let neg_amp = -amplitude;
    let total = times
        .iter()
        .zip(series)
        .map(|(&tk, obs)| scaled_residual(neg_amp * tk * weight, obs, policy))
        .fold(T::zero(), |acc, r| acc + r);

    let n = T::from(times.len()).unwrap_or_else(T::one);
    total / n
}
