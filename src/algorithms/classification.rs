//! Distance classification into concentric sigma bins.
//!
//! ## Purpose
//!
//! Stage 1 of a grid cell: each observation's squared distance to the
//! candidate source is compared against σ², 4σ² and 9σ². Observations beyond
//! 3σ are dropped from the cell entirely.
//!
//! ## Invariants
//!
//! * Bounds are inclusive: a distance equal to a threshold lands in the inner bin.
//! * `classify` returns `None` exactly when `dist > 9σ²` (or `dist` is NaN).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::kernel::GaussianKernel;
use crate::primitives::bins::DistanceBin;

/// Squared bin radii and the Gaussian kernel for one sigma candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SigmaBands<T> {
    near_sq: T,
    mid_sq: T,
    far_sq: T,
    kernel: GaussianKernel<T>,
}

impl<T: Float> SigmaBands<T> {
    /// Precompute thresholds for `sigma`.
    pub fn new(sigma: T) -> Self {
        let sigma_sq = sigma * sigma;
        let four = T::from(4.0).unwrap_or_else(T::one);
        let nine = T::from(9.0).unwrap_or_else(T::one);
        Self {
            near_sq: sigma_sq,
            mid_sq: four * sigma_sq,
            far_sq: nine * sigma_sq,
            kernel: GaussianKernel::from_sigma_sq(sigma_sq),
        }
    }

    /// Bin of an observation at squared distance `dist_sq`, if within 3σ.
    #[inline]
    pub fn classify(&self, dist_sq: T) -> Option<DistanceBin> {
        if !(dist_sq <= self.far_sq) {
            None
        } else if dist_sq <= self.near_sq {
            Some(DistanceBin::Near)
        } else if dist_sq <= self.mid_sq {
            Some(DistanceBin::Mid)
        } else {
            Some(DistanceBin::Far)
        }
    }

    /// Gaussian weight at squared distance `dist_sq`.
    #[inline]
    pub fn weight(&self, dist_sq: T) -> T {
        self.kernel.weight(dist_sq)
    }
}
