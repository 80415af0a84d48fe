//! Error types for geometry operations.
//!
//! Most operations here cannot fail: floating-point edge cases produce
//! `NaN`/`Inf` and out-of-range indexing panics. Only conversions from
//! runtime-sized input return errors.

use thiserror::Error;

/// Errors that can occur when building geometric values from runtime data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// The input has a different number of components than the target type.
    #[error("dimension mismatch: expected {expected} components, found {found}")]
    DimensionMismatch {
        /// Number of components the target type holds.
        expected: usize,
        /// Number of components supplied.
        found: usize,
    },
}
