//! Grid error types.

use thiserror::Error;

/// Errors raised while building a [`Grid`](crate::Grid).
///
/// Once a grid exists none of its operations can fail: every coordinate
/// wraps onto a valid cell.
#[derive(Debug, Error)]
pub enum GridError {
    /// Width or height is zero, the rows of a snapshot are ragged, or the
    /// cell count does not fit in memory.
    #[error("invalid grid dimension: {width}x{height}")]
    InvalidDimension { width: usize, height: usize },

    /// The OS refused to hand out entropy for a random seed.
    #[error("failed to gather entropy: {0}")]
    Entropy(#[from] getrandom::Error),
}

/// Result type for grid construction.
pub type GridResult<T> = Result<T, GridError>;
