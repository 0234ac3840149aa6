//! Borrowed views over the evaluator's inputs.
//!
//! ## Purpose
//!
//! The evaluator reads caller-owned flat buffers and never copies them. This
//! module wraps those buffers in small borrowed views: the observation set
//! (coordinates, time axis, displacement matrix) and the four candidate axes.
//!
//! ## Key concepts
//!
//! * **Displacement layout**: the `T x N` matrix is either series-major
//!   (`d[k + i*T]`, column-major, each observation's series contiguous) or
//!   time-major (`d[k*N + i]`, row-major).
//!
//! ## Invariants
//!
//! * Views perform no validation; shape consistency is established by
//!   `engine::validator` before the kernel runs.

// External dependencies
use core::iter::{Copied, StepBy};
use core::slice::Iter;

// Internal dependencies
use crate::primitives::layout::GridShape;

// ============================================================================
// Displacement Matrix
// ============================================================================

/// Storage order of the displacement matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DisplacementLayout {
    /// Column-major: `d[k + i*T]`. Each observation's series is contiguous.
    #[default]
    SeriesMajor,

    /// Row-major: `d[k*N + i]`. Each time sample's snapshot is contiguous.
    TimeMajor,
}

/// Read-only view of the `T x N` displacement matrix.
#[derive(Debug, Clone, Copy)]
pub struct Displacements<'a, T> {
    data: &'a [T],
    times: usize,
    points: usize,
    layout: DisplacementLayout,
}

impl<'a, T: Copy> Displacements<'a, T> {
    /// Wrap a flat buffer of `times * points` values.
    pub fn new(data: &'a [T], times: usize, points: usize, layout: DisplacementLayout) -> Self {
        Self {
            data,
            times,
            points,
            layout,
        }
    }

    /// Time series of observation `i`, in time order.
    #[inline]
    pub fn series(&self, i: usize) -> StepBy<Copied<Iter<'a, T>>> {
        match self.layout {
            DisplacementLayout::SeriesMajor => {
                let start = i * self.times;
                self.data[start..start + self.times].iter().copied().step_by(1)
            }
            DisplacementLayout::TimeMajor => self.data[i..].iter().copied().step_by(self.points),
        }
    }
}

// ============================================================================
// Observation Set
// ============================================================================

/// Observation points with their displacement series.
#[derive(Debug, Clone, Copy)]
pub struct Observations<'a, T> {
    /// X coordinate per observation.
    pub x: &'a [T],
    /// Y coordinate per observation.
    pub y: &'a [T],
    /// Shared time axis (sample at t = 0 omitted by the caller).
    pub t: &'a [T],
    /// Displacement matrix.
    pub d: Displacements<'a, T>,
}

impl<'a, T: Copy> Observations<'a, T> {
    /// Bundle raw buffers into an observation view.
    pub fn new(x: &'a [T], y: &'a [T], t: &'a [T], d: &'a [T], layout: DisplacementLayout) -> Self {
        Self {
            x,
            y,
            t,
            d: Displacements::new(d, t.len(), x.len(), layout),
        }
    }

    /// Number of observation points.
    #[inline]
    pub fn len(&self) -> usize {
        self.x.len()
    }
}

// ============================================================================
// Candidate Axes
// ============================================================================

/// The four candidate-value axes spanning the search grid.
#[derive(Debug, Clone, Copy)]
pub struct CandidateAxes<'a, T> {
    /// Source X positions.
    pub x: &'a [T],
    /// Source Y positions.
    pub y: &'a [T],
    /// Spatial decay widths.
    pub sigma: &'a [T],
    /// Decay rates (applied with a negative sign).
    pub amplitude: &'a [T],
}

impl<T> CandidateAxes<'_, T> {
    /// Axis lengths.
    #[inline]
    pub fn shape(&self) -> GridShape {
        GridShape::new(
            self.x.len(),
            self.y.len(),
            self.sigma.len(),
            self.amplitude.len(),
        )
    }
}
