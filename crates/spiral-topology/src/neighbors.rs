//! 8-Connection Neighbor Computation
//!
//! Every cell on the square grid has exactly 8 neighbors:
//! - 4 orthogonal neighbors (sharing an edge)
//! - 4 diagonal neighbors (sharing a corner)

use crate::{SquareCoord, DIAGONAL_CONNECTIONS, NEIGHBORS_PER_CELL, ORTHOGONAL_CONNECTIONS};

/// All 8 neighbor directions for a cell.
#[derive(Debug, Clone, Copy)]
pub struct Neighbors {
    /// The 4 orthogonal neighbor directions
    pub orthogonal: [SquareCoord; ORTHOGONAL_CONNECTIONS],
    /// The 4 diagonal neighbor directions
    pub diagonal: [SquareCoord; DIAGONAL_CONNECTIONS],
}

impl Neighbors {
    /// Get the standard neighbor directions.
    ///
    /// These are the same for every cell - the grid is translation-invariant.
    pub const fn directions() -> Self {
        Self {
            orthogonal: SquareCoord::ORTHOGONAL_DIRECTIONS,
            diagonal: SquareCoord::DIAGONAL_DIRECTIONS,
        }
    }

    /// Get all 8 neighbor directions as a single array.
    pub fn all_directions() -> [SquareCoord; NEIGHBORS_PER_CELL] {
        let dirs = Self::directions();
        let mut result = [SquareCoord::ORIGIN; NEIGHBORS_PER_CELL];

        result[..ORTHOGONAL_CONNECTIONS].copy_from_slice(&dirs.orthogonal);
        result[ORTHOGONAL_CONNECTIONS..].copy_from_slice(&dirs.diagonal);

        result
    }

    /// Get all 8 neighbors of a given coordinate.
    pub fn of(coord: SquareCoord) -> [SquareCoord; NEIGHBORS_PER_CELL] {
        Self::all_directions().map(|dir| coord + dir)
    }
}

/// Check if two coordinates are neighbors (within the 8-connection set).
pub fn are_neighbors(a: SquareCoord, b: SquareCoord) -> bool {
    let diff = b - a;
    Neighbors::all_directions().contains(&diff)
}

/// Count how many of a cell's 8 neighbors are present.
pub fn count_present_neighbors<F>(coord: SquareCoord, is_present: F) -> usize
where
    F: Fn(SquareCoord) -> bool,
{
    Neighbors::of(coord)
        .iter()
        .filter(|&&n| is_present(n))
        .count()
}

/// Sum the values of a cell's 8 neighbors, treating absent cells as 0.
///
/// Returns `None` if the sum overflows.
pub fn sum_present_neighbors<F>(coord: SquareCoord, value_at: F) -> Option<u64>
where
    F: Fn(SquareCoord) -> Option<u64>,
{
    Neighbors::of(coord)
        .iter()
        .filter_map(|&n| value_at(n))
        .try_fold(0u64, |acc, v| acc.checked_add(v))
}
