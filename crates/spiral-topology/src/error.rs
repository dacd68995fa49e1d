//! Error types for spiral-topology.

use thiserror::Error;

use crate::SquareCoord;

/// Result type for spiral-topology operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while walking the spiral.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An input value is outside the accepted domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A neighbor sum no longer fits in a `u64`.
    #[error("neighbor sum overflowed at spiral index {index}")]
    Overflow { index: u64 },

    /// A grid cell was written twice.
    #[error("cell {0} has already been written")]
    CellOccupied(SquareCoord),
}
