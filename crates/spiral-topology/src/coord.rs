//! Square grid coordinate system.
//!
//! Plain Cartesian coordinates with x growing right and y growing up. Rings
//! are measured with the Chebyshev metric, so ring `r` is the square annulus
//! whose cells satisfy `max(|x|, |y|) = r`.

use std::ops::{Add, Neg, Sub};

/// A position on the square grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SquareCoord {
    /// Horizontal position
    pub x: i64,
    /// Vertical position
    pub y: i64,
}

impl SquareCoord {
    /// Origin of the coordinate system.
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    /// Create a new coordinate.
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Manhattan distance between two coordinates: |dx| + |dy|.
    pub const fn manhattan_distance(&self, other: &Self) -> u64 {
        (self.x - other.x).unsigned_abs() + (self.y - other.y).unsigned_abs()
    }

    /// Chebyshev distance between two coordinates: max(|dx|, |dy|).
    pub fn chebyshev_distance(&self, other: &Self) -> u64 {
        let dx = (self.x - other.x).unsigned_abs();
        let dy = (self.y - other.y).unsigned_abs();
        dx.max(dy)
    }

    /// Ring number in the spiral (0 = origin, 1 = first ring, etc.)
    pub fn ring(&self) -> u64 {
        self.chebyshev_distance(&Self::ORIGIN)
    }

    /// The four orthogonal neighbor directions.
    pub const ORTHOGONAL_DIRECTIONS: [Self; 4] = [
        Self { x: 1, y: 0 },  // East
        Self { x: 0, y: 1 },  // North
        Self { x: -1, y: 0 }, // West
        Self { x: 0, y: -1 }, // South
    ];

    /// The four diagonal neighbor directions.
    pub const DIAGONAL_DIRECTIONS: [Self; 4] = [
        Self { x: 1, y: 1 },   // Northeast
        Self { x: -1, y: 1 },  // Northwest
        Self { x: -1, y: -1 }, // Southwest
        Self { x: 1, y: -1 },  // Southeast
    ];

    /// Get all four orthogonal neighbors.
    pub fn orthogonal_neighbors(&self) -> [Self; 4] {
        Self::ORTHOGONAL_DIRECTIONS.map(|d| *self + d)
    }

    /// Get all four diagonal neighbors.
    pub fn diagonal_neighbors(&self) -> [Self; 4] {
        Self::DIAGONAL_DIRECTIONS.map(|d| *self + d)
    }
}

impl Add for SquareCoord {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for SquareCoord {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Neg for SquareCoord {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl From<(i64, i64)> for SquareCoord {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for SquareCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
