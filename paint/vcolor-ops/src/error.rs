//! Error types for host-facing operations.

use thiserror::Error;

/// Result type for operations.
pub type OpResult<T> = Result<T, OpError>;

/// User-input errors that cancel an operation before any mutation.
///
/// Everything else recoverable (objects without UVs, stale palette entry
/// ids) is absorbed at the operation boundary and surfaced through
/// [`crate::OpReport`] messages instead.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum OpError {
    /// A color read requires an active vertex and none is selected.
    #[error("there is no active vertex selected")]
    NoActiveVertex,

    /// The active selection element is not a single vertex.
    #[error("the active selection is not a single vertex; select one active vertex")]
    AmbiguousActiveVertex,
}
