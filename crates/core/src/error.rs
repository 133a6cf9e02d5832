//! Error types shared across the workspace.

use std::collections::TryReserveError;

use thiserror::Error;

/// Main error type for scene math operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Growing the transform stack's backing storage failed.
    #[error("transform stack allocation failed: {0}")]
    Allocation(#[from] TryReserveError),
}

/// Result type alias using the workspace's [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;
