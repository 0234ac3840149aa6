//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! The residual evaluation itself, one grid cell at a time:
//! - Distance classification into sigma bins
//! - Per-amplitude temporal fit
//! - Bin accumulation and cell normalization
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Single-cell evaluation and normalization.
pub mod cell;

/// Distance classification.
pub mod classification;

/// Temporal fit.
pub mod temporal;
