//! Execution backend selection.
//!
//! ## Purpose
//!
//! This module defines the `Backend` enum used to choose how the candidate
//! grid is traversed. Grid cells are independent, so the choice never affects
//! the output, only how the work is scheduled.
//!
//! ## Design notes
//!
//! * **Feature-gated**: `Parallel` requires the `parallel` feature (rayon).
//!   Without it the executor falls back to sequential traversal.
//!
//! ## Non-goals
//!
//! * This module does not schedule work itself (handled by `engine::executor`).

/// Execution backend for grid traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Backend {
    /// Single-threaded traversal: sigma outer, then x, then y.
    #[default]
    Sequential,

    /// Cells evaluated on the rayon thread pool.
    Parallel,
}

impl Backend {
    /// Whether this backend will actually run in parallel in this build.
    #[inline]
    pub const fn is_parallel(&self) -> bool {
        matches!(self, Backend::Parallel) && cfg!(feature = "parallel")
    }
}
