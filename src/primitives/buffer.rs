//! Output buffers and per-cell scratch space.
//!
//! ## Purpose
//!
//! This module holds the storage the evaluator writes into: the flat
//! accumulator and counts buffers handed back to the caller, and a reusable
//! per-cell scratch buffer that collects bin sums while one grid cell is being
//! evaluated.
//!
//! ## Design notes
//!
//! * **Cell-local accumulation**: a cell's bin sums live in `CellBuffer` until
//!   the cell is normalized, then are scattered into `GridBuffer` in one step.
//!   Cells therefore never share mutable state, which is what lets the
//!   parallel backend run without locks.
//! * **Recycling**: `CellBuffer` is cleared, not reallocated, between cells.
//!
//! ## Invariants
//!
//! * `GridBuffer` is zero-initialized on creation.
//! * Every cell is written to `GridBuffer` exactly once.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::bins::{BIN_COUNT, DistanceBin, SLOT_COUNT, Slot};
use crate::primitives::layout::{AccumulatorLayout, CountsLayout, GridShape};

// ============================================================================
// Cell Buffer
// ============================================================================

/// Scratch space for the (x, y, sigma) cell currently being evaluated.
#[derive(Debug, Clone)]
pub struct CellBuffer<T> {
    /// Raw (pre-normalization) residual sums per amplitude and bin.
    sums: Vec<[T; BIN_COUNT]>,

    /// Observations assigned to each bin.
    counts: [u32; BIN_COUNT],
}

impl<T: Float> CellBuffer<T> {
    /// Create a buffer sized for `amplitudes` candidate amplitudes.
    pub fn new(amplitudes: usize) -> Self {
        Self {
            sums: vec![[T::zero(); BIN_COUNT]; amplitudes],
            counts: [0; BIN_COUNT],
        }
    }

    /// Reset sums and counts for the next cell. Keeps capacity.
    #[inline]
    pub fn clear(&mut self) {
        for row in self.sums.iter_mut() {
            *row = [T::zero(); BIN_COUNT];
        }
        self.counts = [0; BIN_COUNT];
    }

    /// Record one more observation in `bin`.
    #[inline]
    pub fn increment(&mut self, bin: DistanceBin) {
        self.counts[bin.index()] += 1;
    }

    /// Add a time-averaged residual for amplitude `a` into `bin`.
    #[inline]
    pub fn add(&mut self, a: usize, bin: DistanceBin, value: T) {
        let cell = &mut self.sums[a][bin.index()];
        *cell = *cell + value;
    }

    /// Raw residual sum for amplitude `a` in `bin`.
    #[inline]
    pub fn sum(&self, a: usize, bin: DistanceBin) -> T {
        self.sums[a][bin.index()]
    }

    /// Observation count for `bin`.
    #[inline]
    pub fn count(&self, bin: DistanceBin) -> u32 {
        self.counts[bin.index()]
    }

    /// Observation counts for all bins.
    #[inline]
    pub fn counts(&self) -> [u32; BIN_COUNT] {
        self.counts
    }

    /// Number of candidate amplitudes.
    #[inline]
    pub fn amplitudes(&self) -> usize {
        self.sums.len()
    }
}

// ============================================================================
// Cell Output
// ============================================================================

/// Finished, normalized result of one (x, y, sigma) cell.
#[derive(Debug, Clone, PartialEq)]
pub struct CellOutput<T> {
    /// X candidate index.
    pub gx: usize,
    /// Y candidate index (logical, not inverted).
    pub gy: usize,
    /// Sigma candidate index.
    pub s: usize,
    /// Observations per bin.
    pub counts: [u32; BIN_COUNT],
    /// Per amplitude: near, mid, far, average.
    pub values: Vec<[T; SLOT_COUNT]>,
}

// ============================================================================
// Grid Buffer
// ============================================================================

/// Flat accumulator and counts buffers in the downstream layout.
#[derive(Debug, Clone)]
pub struct GridBuffer<T> {
    /// Accumulator `[Sy, Sx, Ss, Sa, 4]`.
    pub accumulator: Vec<T>,
    /// Counts `[Sy, Sx, Ss, 3]`.
    pub counts: Vec<u32>,
    acc_layout: AccumulatorLayout,
    cnt_layout: CountsLayout,
}

impl<T: Float> GridBuffer<T> {
    /// Allocate zero-initialized buffers for `shape`.
    pub fn zeroed(shape: GridShape) -> Self {
        let acc_layout = AccumulatorLayout::new(shape);
        let cnt_layout = CountsLayout::new(shape);
        Self {
            accumulator: vec![T::zero(); acc_layout.len()],
            counts: vec![0; cnt_layout.len()],
            acc_layout,
            cnt_layout,
        }
    }

    /// Scatter a finished cell into the flat buffers.
    pub fn write_cell(&mut self, cell: &CellOutput<T>) {
        for bin in DistanceBin::ALL {
            let idx = self.cnt_layout.offset(cell.gx, cell.gy, cell.s, bin);
            self.counts[idx] = cell.counts[bin.index()];
        }
        for (a, row) in cell.values.iter().enumerate() {
            for slot in [Slot::NEAR, Slot::MID, Slot::FAR, Slot::Average] {
                let idx = self.acc_layout.offset(cell.gx, cell.gy, cell.s, a, slot);
                self.accumulator[idx] = row[slot.index()];
            }
        }
    }

    /// Consume the buffer, returning `(accumulator, counts)`.
    pub fn into_parts(self) -> (Vec<T>, Vec<u32>) {
        (self.accumulator, self.counts)
    }
}
