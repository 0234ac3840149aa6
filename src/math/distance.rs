//! Planar distance between observations and candidate sources.
//!
//! ## Purpose
//!
//! The model only ever needs the *squared* Euclidean distance in the plane:
//! bin thresholds are compared against squared radii and the Gaussian weight
//! takes the squared distance directly, so no square root is taken.
//!
//! ## Invariants
//!
//! * Distance is always non-negative for finite inputs.
//! * Distance is zero if and only if the points coincide.

// External dependencies
use num_traits::Float;

/// Squared Euclidean distance between `(px, py)` and `(cx, cy)`.
#[inline]
pub fn squared_distance<T: Float>(px: T, py: T, cx: T, cy: T) -> T {
    let dx = px - cx;
    let dy = py - cy;
    dx * dx + dy * dy
}

/// Minimum and maximum of a set of values, or `None` if empty.
///
/// Used for diagnostic summaries of candidate axes.
pub fn value_range<T: Float>(values: &[T]) -> Option<(T, T)> {
    if values.is_empty() {
        return None;
    }
    let mut min = T::infinity();
    let mut max = T::neg_infinity();
    for &val in values {
        if val < min {
            min = val;
        }
        if val > max {
            max = val;
        }
    }
    Some((min, max))
}
