//! Error types for UV island operations.

use thiserror::Error;

/// Result type for island operations.
pub type IslandResult<T> = Result<T, IslandError>;

/// Errors that can occur during island partitioning.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IslandError {
    /// The mesh carries no UV layer.
    #[error("mesh has no UV coordinates")]
    MissingUvs,
}
