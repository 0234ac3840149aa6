//! Result type returned by a grid search.
//!
//! ## Purpose
//!
//! `GridResult` owns the flat accumulator and counts buffers in the downstream
//! column-major layout (Y inverted), together with the candidate axes that
//! produced them, and offers logical accessors and a best-fit lookup.
//!
//! ## Invariants
//!
//! * `accumulator.len() == Sy * Sx * Ss * Sa * 4` and `counts.len() == Sy * Sx * Ss * 3`.
//! * Accessors take logical indices; the Y inversion is applied internally.

// External dependencies
use core::fmt::{self, Display, Formatter};
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::cell_indices;
use crate::primitives::bins::{DistanceBin, Slot};
use crate::primitives::layout::{AccumulatorLayout, CountsLayout, GridShape};

// ============================================================================
// Best Fit
// ============================================================================

/// Candidate with the smallest average residual.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BestFit<T> {
    /// X candidate index.
    pub x_index: usize,
    /// Y candidate index (logical).
    pub y_index: usize,
    /// Sigma candidate index.
    pub sigma_index: usize,
    /// Amplitude candidate index.
    pub amplitude_index: usize,
    /// Source X position.
    pub x: T,
    /// Source Y position.
    pub y: T,
    /// Spatial decay width.
    pub sigma: T,
    /// Decay rate.
    pub amplitude: T,
    /// Average normalized residual at this candidate.
    pub residual: T,
}

// ============================================================================
// Grid Result
// ============================================================================

/// Populated accumulator and counts for a full candidate grid.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridResult<T> {
    /// Flat accumulator, logical shape `[Sy, Sx, Ss, Sa, 4]`.
    pub accumulator: Vec<T>,

    /// Flat counts, logical shape `[Sy, Sx, Ss, 3]`.
    pub counts: Vec<u32>,

    /// Axis lengths.
    pub shape: GridShape,

    /// X candidates used.
    pub x_axis: Vec<T>,

    /// Y candidates used.
    pub y_axis: Vec<T>,

    /// Sigma candidates used.
    pub sigma_axis: Vec<T>,

    /// Amplitude candidates used.
    pub amplitude_axis: Vec<T>,
}

impl<T: Float> GridResult<T> {
    /// Accumulator value at logical `(x, y, sigma, amplitude, slot)`.
    #[inline]
    pub fn value(&self, x: usize, y: usize, sigma: usize, amplitude: usize, slot: Slot) -> T {
        let idx = AccumulatorLayout::new(self.shape).offset(x, y, sigma, amplitude, slot);
        self.accumulator[idx]
    }

    /// Observation count at logical `(x, y, sigma, bin)`.
    #[inline]
    pub fn count(&self, x: usize, y: usize, sigma: usize, bin: DistanceBin) -> u32 {
        let idx = CountsLayout::new(self.shape).offset(x, y, sigma, bin);
        self.counts[idx]
    }

    /// Total observations within 3σ of cell `(x, y, sigma)`.
    pub fn cell_total(&self, x: usize, y: usize, sigma: usize) -> u64 {
        DistanceBin::ALL
            .iter()
            .map(|&bin| u64::from(self.count(x, y, sigma, bin)))
            .sum()
    }

    /// Accumulator dimensions in storage order.
    pub fn accumulator_dims(&self) -> [usize; 5] {
        AccumulatorLayout::new(self.shape).dims()
    }

    /// Counts dimensions in storage order.
    pub fn counts_dims(&self) -> [usize; 4] {
        CountsLayout::new(self.shape).dims()
    }

    /// Candidate with the smallest `average` residual.
    ///
    /// Ties keep the first candidate in sigma, x, y, amplitude order. NaN
    /// averages are skipped. Returns `None` for an empty grid or when every
    /// average is NaN.
    pub fn best_fit(&self) -> Option<BestFit<T>> {
        let shape = self.shape;
        if shape.is_empty() {
            return None;
        }

        let mut best: Option<(usize, usize, usize, usize, T)> = None;
        for idx in 0..shape.cell_count() {
            let (gx, gy, s) = cell_indices(idx, shape);
            for a in 0..shape.amplitude {
                let v = self.value(gx, gy, s, a, Slot::Average);
                if v.is_nan() {
                    continue;
                }
                match best {
                    Some((.., current)) if v >= current => {}
                    _ => best = Some((gx, gy, s, a, v)),
                }
            }
        }

        best.map(|(gx, gy, s, a, residual)| BestFit {
            x_index: gx,
            y_index: gy,
            sigma_index: s,
            amplitude_index: a,
            x: self.x_axis[gx],
            y: self.y_axis[gy],
            sigma: self.sigma_axis[s],
            amplitude: self.amplitude_axis[a],
            residual,
        })
    }
}

impl<T: Float + Display> Display for GridResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = self.shape;
        writeln!(f, "Summary:")?;
        writeln!(
            f,
            "  Candidates: x={} y={} sigma={} amplitude={} ({} cells)",
            s.x,
            s.y,
            s.sigma,
            s.amplitude,
            s.cell_count()
        )?;
        let [d0, d1, d2, d3, d4] = self.accumulator_dims();
        writeln!(f, "  Accumulator: [{}, {}, {}, {}, {}]", d0, d1, d2, d3, d4)?;

        match self.best_fit() {
            Some(best) => {
                writeln!(f)?;
                writeln!(f, "Best Fit:")?;
                writeln!(f, "  x:         {:.4}", best.x)?;
                writeln!(f, "  y:         {:.4}", best.y)?;
                writeln!(f, "  sigma:     {:.4}", best.sigma)?;
                writeln!(f, "  amplitude: {:.4}", best.amplitude)?;
                write!(f, "  residual:  {:.6}", best.residual)
            }
            None => write!(f, "  Best fit:  none"),
        }
    }
}
