//! Error types for grid and controller operations
//!
//! Every error here is synchronous and recoverable: a failed request is
//! rejected before any state changes, and the caller may simply try again
//! with valid arguments.

use thiserror::Error;

/// Errors produced by [`GridState`](crate::grid::GridState) and
/// [`RunController`](crate::control::RunController) request validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    /// A grid dimension was zero. Both columns and rows must be positive.
    #[error("grid dimensions must be positive")]
    InvalidDimension,

    /// A row/column pair fell outside the current grid.
    #[error("cell ({row}, {col}) is outside the grid")]
    OutOfBounds { row: usize, col: usize },

    /// A raw cell value other than 0 (dead) or 1 (alive).
    #[error("cell value {0} is not 0 or 1")]
    InvalidValue(u8),

    /// A tick interval of zero milliseconds.
    #[error("tick interval must be positive")]
    InvalidInterval,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridError>;
