//! Layer 5: Adapters
//!
//! # Purpose
//!
//! Execution adapters sitting between the public builder and the engine. The
//! batch adapter validates inputs, allocates outputs and runs the kernel once
//! per call.

/// Single-call batch evaluation.
pub mod batch;
