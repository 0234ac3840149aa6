//! Evaluation of a single (x, y, sigma) grid cell.
//!
//! ## Purpose
//!
//! This module runs all four stages for one candidate cell: classify every
//! observation, fit every amplitude against the in-range observations,
//! accumulate per bin, then normalize by bin counts and derive the average.
//!
//! ## Design notes
//!
//! * **Self-contained**: a cell reads only shared immutable inputs and writes
//!   only its own `CellBuffer`, so cells can be evaluated in any order or
//!   concurrently.
//! * **Empty bins**: a bin with no observations scores 1.0, the worst
//!   possible residual, so absence of data is never rewarded.
//!
//! ## Invariants
//!
//! * `near + mid + far` counts equal the observations within 3σ.
//! * Normalization happens only after every observation has been processed.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::classification::SigmaBands;
use crate::algorithms::temporal::time_averaged_residual;
use crate::math::distance::squared_distance;
use crate::math::residual::ZeroResidualPolicy;
use crate::primitives::bins::{BIN_COUNT, DistanceBin, SLOT_COUNT};
use crate::primitives::buffer::{CellBuffer, CellOutput};
use crate::primitives::inputs::{CandidateAxes, Observations};

// ============================================================================
// Cell Context
// ============================================================================

/// Shared read-only inputs for evaluating grid cells.
#[derive(Debug, Clone, Copy)]
pub struct CellContext<'a, T> {
    /// Observation set.
    pub observations: Observations<'a, T>,
    /// Candidate axes.
    pub axes: CandidateAxes<'a, T>,
    /// Zero/zero residual policy.
    pub policy: ZeroResidualPolicy,
}

impl<T: Float> CellContext<'_, T> {
    /// Evaluate cell `(gx, gy, s)` using `buffer` as scratch space.
    pub fn evaluate(&self, gx: usize, gy: usize, s: usize, buffer: &mut CellBuffer<T>) -> CellOutput<T> {
        buffer.clear();
        let bands = SigmaBands::new(self.axes.sigma[s]);
        self.accumulate(self.axes.x[gx], self.axes.y[gy], &bands, buffer);

        CellOutput {
            gx,
            gy,
            s,
            counts: buffer.counts(),
            values: normalize(buffer),
        }
    }

    /// Stages 1-3: classify, fit and accumulate every observation.
    fn accumulate(&self, cx: T, cy: T, bands: &SigmaBands<T>, buffer: &mut CellBuffer<T>) {
        let obs = &self.observations;
        for i in 0..obs.len() {
            let dist_sq = squared_distance(obs.x[i], obs.y[i], cx, cy);
            let Some(bin) = bands.classify(dist_sq) else {
                continue;
            };
            buffer.increment(bin);

            let weight = bands.weight(dist_sq);
            for (a, &amp) in self.axes.amplitude.iter().enumerate() {
                let r = time_averaged_residual(obs.t, obs.d.series(i), amp, weight, self.policy);
                buffer.add(a, bin, r);
            }
        }
    }
}

// ============================================================================
// Normalization
// ============================================================================

/// Stage 4: per-amplitude normalized bin residuals and their average.
///
/// Returns one `[near, mid, far, average]` row per amplitude.
pub fn normalize<T: Float>(buffer: &CellBuffer<T>) -> Vec<[T; SLOT_COUNT]> {
    let three = T::from(BIN_COUNT).unwrap_or_else(T::one);
    (0..buffer.amplitudes())
        .map(|a| {
            let mut row = [T::zero(); SLOT_COUNT];
            for bin in DistanceBin::ALL {
                row[bin.index()] = match buffer.count(bin) {
                    0 => T::one(),
                    n => buffer.sum(a, bin) / T::from(n).unwrap_or_else(T::one),
                };
            }
            row[SLOT_COUNT - 1] = (row[0] + row[1] + row[2]) / three;
            row
        })
        .collect()
}
