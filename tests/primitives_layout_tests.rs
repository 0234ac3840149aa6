#![cfg(feature = "dev")]
//! Tests for the flat output layouts and input views.
//!
//! ## Test Organization
//!
//! 1. **Accumulator Layout** - offsets, Y inversion, bijection
//! 2. **Counts Layout** - offsets and bijection
//! 3. **Displacement Views** - series-major and time-major access
//! 4. **Cell Buffers** - scratch accumulation and scatter

use residual_grid::internals::primitives::bins::{DistanceBin, Slot};
use residual_grid::internals::primitives::buffer::{CellBuffer, CellOutput, GridBuffer};
use residual_grid::internals::primitives::inputs::{DisplacementLayout, Displacements};
use residual_grid::internals::primitives::layout::{AccumulatorLayout, CountsLayout, GridShape};

// ============================================================================
// Accumulator Layout Tests
// ============================================================================

#[test]
fn test_accumulator_offset_formula() {
    let shape = GridShape::new(3, 4, 2, 5);
    let layout = AccumulatorLayout::new(shape);

    // (Sy-1-gy) + gx*Sy + s*Sy*Sx + a*Sy*Sx*Ss + slot*Sy*Sx*Ss*Sa
    let expected = (4 - 1 - 1) + 2 * 4 + 4 * 3 + 3 * (4 * 3 * 2) + 3 * (4 * 3 * 2 * 5);
    assert_eq!(layout.offset(2, 1, 1, 3, Slot::Average), expected);
    assert_eq!(layout.offset(0, 3, 0, 0, Slot::NEAR), 0);
    assert_eq!(layout.offset(0, 0, 0, 0, Slot::NEAR), 3);
}

#[test]
fn test_accumulator_offsets_are_a_bijection() {
    let shape = GridShape::new(3, 2, 4, 2);
    let layout = AccumulatorLayout::new(shape);
    let mut seen = vec![false; layout.len()];

    for s in 0..shape.sigma {
        for gx in 0..shape.x {
            for gy in 0..shape.y {
                for a in 0..shape.amplitude {
                    for slot in [Slot::NEAR, Slot::MID, Slot::FAR, Slot::Average] {
                        let idx = layout.offset(gx, gy, s, a, slot);
                        assert!(!seen[idx], "offset {} visited twice", idx);
                        seen[idx] = true;
                    }
                }
            }
        }
    }
    assert!(seen.iter().all(|&v| v));
}

#[test]
fn test_layout_dims_and_len() {
    let shape = GridShape::new(3, 2, 4, 5);
    assert_eq!(shape.cell_count(), 24);
    assert_eq!(AccumulatorLayout::new(shape).dims(), [2, 3, 4, 5, 4]);
    assert_eq!(AccumulatorLayout::new(shape).len(), 2 * 3 * 4 * 5 * 4);
    assert_eq!(CountsLayout::new(shape).dims(), [2, 3, 4, 3]);
    assert_eq!(CountsLayout::new(shape).len(), 2 * 3 * 4 * 3);
}

#[test]
fn test_empty_shape() {
    assert!(GridShape::new(0, 3, 3, 3).is_empty());
    assert!(GridShape::new(3, 3, 3, 0).is_empty());
    assert!(!GridShape::new(1, 1, 1, 1).is_empty());
    assert_eq!(AccumulatorLayout::new(GridShape::new(2, 2, 2, 0)).len(), 0);
    assert_eq!(CountsLayout::new(GridShape::new(2, 2, 2, 0)).len(), 24);
}

// ============================================================================
// Counts Layout Tests
// ============================================================================

#[test]
fn test_counts_offset_formula() {
    let shape = GridShape::new(3, 4, 2, 5);
    let layout = CountsLayout::new(shape);

    // (Sy-1-gy) + gx*Sy + s*Sy*Sx + bin*Sy*Sx*Ss
    let expected = (4 - 1 - 2) + 4 + 4 * 3 + 2 * (4 * 3 * 2);
    assert_eq!(layout.offset(1, 2, 1, DistanceBin::Far), expected);
}

#[test]
fn test_counts_offsets_are_a_bijection() {
    let shape = GridShape::new(2, 5, 3, 1);
    let layout = CountsLayout::new(shape);
    let mut seen = vec![false; layout.len()];

    for s in 0..shape.sigma {
        for gx in 0..shape.x {
            for gy in 0..shape.y {
                for bin in DistanceBin::ALL {
                    let idx = layout.offset(gx, gy, s, bin);
                    assert!(!seen[idx]);
                    seen[idx] = true;
                }
            }
        }
    }
    assert!(seen.iter().all(|&v| v));
}

// ============================================================================
// Displacement View Tests
// ============================================================================

#[test]
fn test_displacement_views_agree() {
    // 3 times x 2 observations; value = 10 * k + i
    let series_major = [0.0, 10.0, 20.0, 1.0, 11.0, 21.0];
    let time_major = [0.0, 1.0, 10.0, 11.0, 20.0, 21.0];

    let a = Displacements::new(&series_major, 3, 2, DisplacementLayout::SeriesMajor);
    let b = Displacements::new(&time_major, 3, 2, DisplacementLayout::TimeMajor);

    for i in 0..2 {
        let sa: Vec<f64> = a.series(i).collect();
        let sb: Vec<f64> = b.series(i).collect();
        assert_eq!(sa, sb);
        let expected: Vec<f64> = (0..3).map(|k| (10 * k + i) as f64).collect();
        assert_eq!(sa, expected);
    }
    assert_eq!(DisplacementLayout::default(), DisplacementLayout::SeriesMajor);
}

// ============================================================================
// Cell Buffer Tests
// ============================================================================

#[test]
fn test_cell_buffer_accumulates_and_clears() {
    let mut buffer = CellBuffer::<f64>::new(2);
    buffer.increment(DistanceBin::Mid);
    buffer.increment(DistanceBin::Mid);
    buffer.add(1, DistanceBin::Mid, 0.25);
    buffer.add(1, DistanceBin::Mid, 0.5);

    assert_eq!(buffer.counts(), [0, 2, 0]);
    assert_eq!(buffer.sum(1, DistanceBin::Mid), 0.75);
    assert_eq!(buffer.sum(0, DistanceBin::Mid), 0.0);
    assert_eq!(buffer.amplitudes(), 2);

    buffer.clear();
    assert_eq!(buffer.counts(), [0, 0, 0]);
    assert_eq!(buffer.sum(1, DistanceBin::Mid), 0.0);
    assert_eq!(buffer.amplitudes(), 2);
}

#[test]
fn test_grid_buffer_scatter() {
    let shape = GridShape::new(1, 2, 1, 1);
    let mut grid = GridBuffer::<f64>::zeroed(shape);
    assert!(grid.accumulator.iter().all(|&v| v == 0.0));

    grid.write_cell(&CellOutput {
        gx: 0,
        gy: 0,
        s: 0,
        counts: [4, 5, 6],
        values: vec![[0.1, 0.2, 0.3, 0.2]],
    });

    let (accumulator, counts) = grid.into_parts();
    // gy = 0 is stored at row Sy - 1 = 1
    assert_eq!(counts, vec![0, 4, 0, 5, 0, 6]);
    assert_eq!(accumulator, vec![0.0, 0.1, 0.0, 0.2, 0.0, 0.3, 0.0, 0.2]);
}
