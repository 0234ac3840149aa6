//! Flat index mapping for the output buffers.
//!
//! ## Purpose
//!
//! The accumulator and counts arrays are handed back as flat buffers in the
//! column-major layout downstream consumers expect. This module owns the pure
//! functions mapping logical indices to flat offsets, so the numeric loops
//! never do index arithmetic themselves.
//!
//! ## Key concepts
//!
//! * **Logical shape**: accumulator `[Sy, Sx, Ss, Sa, 4]`, counts `[Sy, Sx, Ss, 3]`,
//!   first index fastest.
//! * **Y inversion**: buffer row 0 holds the *last* Y candidate, so a logical
//!   `gy` is stored at `Sy - 1 - gy`.
//!
//! ## Invariants
//!
//! * Both layouts are bijections from their logical index space onto `0..len()`.
//! * Offsets for one (x, y, sigma) cell never coincide with another cell's.

// Internal dependencies
use crate::primitives::bins::{BIN_COUNT, DistanceBin, SLOT_COUNT, Slot};

// ============================================================================
// Grid Shape
// ============================================================================

/// Sizes of the four candidate axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridShape {
    /// Number of X candidates.
    pub x: usize,
    /// Number of Y candidates.
    pub y: usize,
    /// Number of sigma candidates.
    pub sigma: usize,
    /// Number of amplitude candidates.
    pub amplitude: usize,
}

impl GridShape {
    /// Create a shape from axis lengths.
    pub const fn new(x: usize, y: usize, sigma: usize, amplitude: usize) -> Self {
        Self {
            x,
            y,
            sigma,
            amplitude,
        }
    }

    /// Number of (x, y, sigma) cells.
    #[inline]
    pub const fn cell_count(&self) -> usize {
        self.x * self.y * self.sigma
    }

    /// Whether any axis is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.cell_count() == 0 || self.amplitude == 0
    }

    /// Offset of the (x, y, sigma) cell within one slot plane, Y inverted.
    #[inline]
    const fn plane_offset(&self, gx: usize, gy: usize, s: usize) -> usize {
        (self.y - 1 - gy) + gx * self.y + s * self.y * self.x
    }
}

// ============================================================================
// Accumulator Layout
// ============================================================================

/// Index mapping for the 5-D accumulator `[Sy, Sx, Ss, Sa, 4]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccumulatorLayout {
    shape: GridShape,
}

impl AccumulatorLayout {
    /// Layout for the given grid shape.
    pub const fn new(shape: GridShape) -> Self {
        Self { shape }
    }

    /// Total number of elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.shape.cell_count() * self.shape.amplitude * SLOT_COUNT
    }

    /// Logical dimensions in storage order.
    pub const fn dims(&self) -> [usize; 5] {
        [
            self.shape.y,
            self.shape.x,
            self.shape.sigma,
            self.shape.amplitude,
            SLOT_COUNT,
        ]
    }

    /// Flat offset of `(gx, gy, s, a, slot)`.
    ///
    /// ```text
    /// (Sy-1-gy) + gx*Sy + s*Sy*Sx + a*Sy*Sx*Ss + slot*Sy*Sx*Ss*Sa
    /// ```
    #[inline]
    pub const fn offset(&self, gx: usize, gy: usize, s: usize, a: usize, slot: Slot) -> usize {
        let plane = self.shape.cell_count();
        self.shape.plane_offset(gx, gy, s)
            + a * plane
            + slot.index() * plane * self.shape.amplitude
    }
}

// ============================================================================
// Counts Layout
// ============================================================================

/// Index mapping for the 4-D counts array `[Sy, Sx, Ss, 3]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountsLayout {
    shape: GridShape,
}

impl CountsLayout {
    /// Layout for the given grid shape.
    pub const fn new(shape: GridShape) -> Self {
        Self { shape }
    }

    /// Total number of elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.shape.cell_count() * BIN_COUNT
    }

    /// Logical dimensions in storage order.
    pub const fn dims(&self) -> [usize; 4] {
        [self.shape.y, self.shape.x, self.shape.sigma, BIN_COUNT]
    }

    /// Flat offset of `(gx, gy, s, bin)`.
    ///
    /// ```text
    /// (Sy-1-gy) + gx*Sy + s*Sy*Sx + bin*Sy*Sx*Ss
    /// ```
    #[inline]
    pub const fn offset(&self, gx: usize, gy: usize, s: usize, bin: DistanceBin) -> usize {
        self.shape.plane_offset(gx, gy, s) + bin.index() * self.shape.cell_count()
    }
}
