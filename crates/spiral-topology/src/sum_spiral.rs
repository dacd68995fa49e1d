//! Neighbor-sum spiral.
//!
//! Walks the square spiral writing into each new cell the sum of the values
//! already written around it. The origin is seeded with 1, so the sequence
//! starts 1, 1, 2, 4, 5, 10, 11, 23, 25, 26, 54, ...
//!
//! Each cell after the origin touches the previous cell of the walk, so the
//! sequence never decreases; it grows without bound, so any finite threshold
//! is eventually exceeded.

use tracing::{debug, trace};

use crate::{spiral_to_coord, Error, Result, SparseGrid, SpiralIndex, SquareCoord};

/// Value seeded at the origin.
pub const SEED_VALUE: u64 = 1;

/// Lazy generator over the neighbor-sum spiral.
///
/// Owns the grid it writes into. A fresh generator replays the same
/// sequence from the origin.
#[derive(Debug, Clone)]
pub struct NeighborSumSpiral {
    grid: SparseGrid,
    next: SpiralIndex,
    error: Option<Error>,
}

impl NeighborSumSpiral {
    /// Create a generator positioned at the origin.
    pub fn new() -> Self {
        Self {
            grid: SparseGrid::seeded(SquareCoord::ORIGIN, SEED_VALUE),
            next: SpiralIndex::ORIGIN,
            error: None,
        }
    }

    /// Cells written so far.
    pub fn grid(&self) -> &SparseGrid {
        &self.grid
    }

    /// Index of the next term to be produced.
    pub fn next_index(&self) -> SpiralIndex {
        self.next
    }

    /// The error that ended iteration, if any.
    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    /// Produce the next term, writing it into the grid.
    fn advance(&mut self) -> Result<u64> {
        let index = self.next;

        let value = if index == SpiralIndex::ORIGIN {
            SEED_VALUE
        } else {
            let coord = spiral_to_coord(index);
            let sum = self
                .grid
                .neighbor_sum(coord)
                .ok_or(Error::Overflow { index: index.value() })?;
            self.grid.write(coord, sum)?;
            trace!("wrote {} at {} {}", sum, index, coord);
            sum
        };

        self.next = SpiralIndex(index.value() + 1);
        Ok(value)
    }

    /// Generate terms until one is strictly greater than `threshold` and
    /// return it.
    ///
    /// Each freshly written term is checked as soon as it is produced.
    ///
    /// # Errors
    ///
    /// [`Error::Overflow`] if a term no longer fits in a `u64` before the
    /// threshold is passed.
    pub fn first_exceeding(mut self, threshold: u64) -> Result<u64> {
        loop {
            let value = self.advance()?;
            if value > threshold {
                debug!(
                    "first term above {} is {} at {} ({} cells written)",
                    threshold,
                    value,
                    SpiralIndex(self.next.value() - 1),
                    self.grid.len()
                );
                return Ok(value);
            }
        }
    }
}

impl Default for NeighborSumSpiral {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for NeighborSumSpiral {
    type Item = u64;

    /// Yields terms until one overflows; the cause is kept in
    /// [`NeighborSumSpiral::error`].
    fn next(&mut self) -> Option<Self::Item> {
        if self.error.is_some() {
            return None;
        }

        match self.advance() {
            Ok(value) => Some(value),
            Err(err) => {
                self.error = Some(err);
                None
            }
        }
    }
}
