//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used by the evaluator:
//! - Squared planar distance
//! - Gaussian spatial attenuation
//! - Scaled per-sample residuals
//!
//! These are reusable building blocks with no grid-specific logic.
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
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Squared planar distance.
pub mod distance;

/// Gaussian attenuation kernel.
pub mod kernel;

/// Scaled residual and zero/zero policy.
pub mod residual;
