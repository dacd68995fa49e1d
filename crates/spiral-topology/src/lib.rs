//! Spiral Memory Topology
//!
//! Square spiral enumeration of the integer grid with 8-connected neighbors,
//! a sparse write-once grid, and the neighbor-sum spiral built on top of it.
//!
//! # Square Spiral
//!
//! Cells are numbered from the origin outward, one Chebyshev ring at a time.
//! Ring n holds 8n cells and rings 0 through n hold exactly (2n+1)² cells, so
//! index ↔ coordinate conversion is closed-form in both directions.
//!
//! # Neighbor-Sum Spiral
//!
//! Walking the same order, each new cell receives the sum of the values
//! already written among its 8 neighbors, starting from 1 at the origin.
//!
//! # Puzzle
//!
//! [`puzzle::solve`] answers both halves of the spiral memory puzzle for a
//! validated [`Target`].

mod coord;
mod error;
mod grid;
mod neighbors;
pub mod puzzle;
mod render;
mod spiral;
mod sum_spiral;

pub use coord::SquareCoord;
pub use error::{Error, Result};
pub use grid::SparseGrid;
pub use neighbors::{are_neighbors, count_present_neighbors, sum_present_neighbors, Neighbors};
pub use puzzle::{Answers, Target};
pub use render::render_rings;
pub use spiral::{
    coord_to_spiral, slots_in_ring, spiral_distance, spiral_to_coord, total_slots_through, Spiral,
    SpiralIndex,
};
pub use sum_spiral::{NeighborSumSpiral, SEED_VALUE};

/// Total number of neighbors per cell (invariant: always 8)
pub const NEIGHBORS_PER_CELL: usize = 8;

/// Neighbors sharing an edge
pub const ORTHOGONAL_CONNECTIONS: usize = 4;

/// Neighbors sharing only a corner
pub const DIAGONAL_CONNECTIONS: usize = 4;

// Compile-time assertion of the 8-neighbor invariant
const _: () = assert!(ORTHOGONAL_CONNECTIONS + DIAGONAL_CONNECTIONS == NEIGHBORS_PER_CELL);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbor_invariant() {
        assert_eq!(
            ORTHOGONAL_CONNECTIONS + DIAGONAL_CONNECTIONS,
            NEIGHBORS_PER_CELL
        );
    }

    #[test]
    fn every_cell_sees_eight_neighbors() {
        for coord in Spiral::take_slots(50) {
            assert_eq!(count_present_neighbors(coord, |_| true), NEIGHBORS_PER_CELL);
        }
    }
}
