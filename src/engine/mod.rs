//! Layer 4: Engine
//!
//! # Purpose
//!
//! Orchestration of a full grid search: input validation, traversal of every
//! candidate cell with the selected backend, and result assembly.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Grid traversal and diagnostics.
pub mod executor;

/// Result type.
pub mod output;

/// Input validation.
pub mod validator;
