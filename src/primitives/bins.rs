//! Distance bins and accumulator slots.
//!
//! ## Purpose
//!
//! Observations around a candidate source are stratified into three concentric
//! annuli at 1, 2 and 3 sigma. This module names those annuli and the four
//! accumulator slots (the three bins plus their derived average).
//!
//! ## Invariants
//!
//! * `DistanceBin::index()` is 0, 1, 2 for near, mid, far.
//! * `Slot::index()` matches the last index of the accumulator layout.

/// Number of distance bins per grid cell.
pub const BIN_COUNT: usize = 3;

/// Number of accumulator slots per (cell, amplitude): three bins plus average.
pub const SLOT_COUNT: usize = 4;

/// Concentric distance class of an observation relative to a candidate source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DistanceBin {
    /// Squared distance within sigma².
    Near,

    /// Squared distance within 4·sigma².
    Mid,

    /// Squared distance within 9·sigma².
    Far,
}

impl DistanceBin {
    /// All bins in distance order.
    pub const ALL: [DistanceBin; BIN_COUNT] = [DistanceBin::Near, DistanceBin::Mid, DistanceBin::Far];

    /// Position of this bin in the counts layout.
    #[inline]
    pub const fn index(&self) -> usize {
        match self {
            DistanceBin::Near => 0,
            DistanceBin::Mid => 1,
            DistanceBin::Far => 2,
        }
    }
}

/// Slot of the accumulator's last dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Normalized residual of a distance bin.
    Bin(DistanceBin),

    /// Mean of the three normalized bin residuals.
    Average,
}

impl Slot {
    /// Near-bin slot.
    pub const NEAR: Slot = Slot::Bin(DistanceBin::Near);

    /// Mid-bin slot.
    pub const MID: Slot = Slot::Bin(DistanceBin::Mid);

    /// Far-bin slot.
    pub const FAR: Slot = Slot::Bin(DistanceBin::Far);

    /// Position of this slot in the accumulator layout.
    #[inline]
    pub const fn index(&self) -> usize {
        match self {
            Slot::Bin(bin) => bin.index(),
            Slot::Average => 3,
        }
    }
}

impl From<DistanceBin> for Slot {
    fn from(bin: DistanceBin) -> Self {
        Slot::Bin(bin)
    }
}
