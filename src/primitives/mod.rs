//! Layer 1: Primitives
//!
//! # Purpose
//!
//! Basic data structures shared by every other layer: error types, distance
//! bins, flat index layouts, output buffers and the execution backend enum.
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
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Execution backend selection.
pub mod backend;

/// Distance bins and accumulator slots.
pub mod bins;

/// Output buffers and per-cell scratch space.
pub mod buffer;

/// Error types.
pub mod errors;

/// Borrowed views over observations and candidate axes.
pub mod inputs;

/// Flat index mapping for output buffers.
pub mod layout;
