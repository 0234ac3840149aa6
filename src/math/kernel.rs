//! Gaussian spatial attenuation.
//!
//! ## Purpose
//!
//! The point-source model attenuates the source's time-linear decay by a
//! Gaussian of the distance to the source:
//!
//! ```text
//! w = exp(-dist² / (2σ²))
//! ```
//!
//! ## Invariants
//!
//! * `w` is in (0, 1] for finite distance and positive sigma.
//! * `w == 1` exactly at the source.

// External dependencies
use num_traits::Float;

/// Precomputed Gaussian kernel for one sigma candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianKernel<T> {
    /// `1 / (2σ²)`.
    inv_two_sigma_sq: T,
}

impl<T: Float> GaussianKernel<T> {
    /// Build the kernel from sigma².
    #[inline]
    pub fn from_sigma_sq(sigma_sq: T) -> Self {
        let half = T::from(0.5).unwrap_or_else(|| T::one() / (T::one() + T::one()));
        Self {
            inv_two_sigma_sq: half / sigma_sq,
        }
    }

    /// Weight for a squared distance.
    #[inline]
    pub fn weight(&self, dist_sq: T) -> T {
        (-dist_sq * self.inv_two_sigma_sq).exp()
    }
}
