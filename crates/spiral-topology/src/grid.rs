//! Sparse write-once grid.
//!
//! Only visited cells are stored. A cell keeps the first value written to it;
//! later writes are rejected and the grid never shrinks.

use std::collections::HashMap;

use crate::neighbors::sum_present_neighbors;
use crate::{Error, Result, SquareCoord};

/// Sparse mapping from coordinate to value.
#[derive(Debug, Clone, Default)]
pub struct SparseGrid {
    cells: HashMap<SquareCoord, u64>,
}

impl SparseGrid {
    /// Create an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a grid holding a single seed cell.
    pub fn seeded(coord: SquareCoord, value: u64) -> Self {
        let mut cells = HashMap::new();
        cells.insert(coord, value);
        Self { cells }
    }

    /// Value written at `coord`, if any.
    pub fn get(&self, coord: SquareCoord) -> Option<u64> {
        self.cells.get(&coord).copied()
    }

    /// Whether `coord` has been written.
    pub fn contains(&self, coord: SquareCoord) -> bool {
        self.cells.contains_key(&coord)
    }

    /// Write `value` at `coord`.
    ///
    /// Fails with [`Error::CellOccupied`] if the cell already holds a value.
    pub fn write(&mut self, coord: SquareCoord, value: u64) -> Result<()> {
        if self.cells.contains_key(&coord) {
            return Err(Error::CellOccupied(coord));
        }
        self.cells.insert(coord, value);
        Ok(())
    }

    /// Sum of the values written around `coord`, with unwritten cells
    /// counting as 0. `None` on overflow.
    pub fn neighbor_sum(&self, coord: SquareCoord) -> Option<u64> {
        sum_present_neighbors(coord, |n| self.get(n))
    }

    /// Number of written cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether no cell has been written.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
