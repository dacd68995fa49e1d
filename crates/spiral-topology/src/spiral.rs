//! Square spiral enumeration.
//!
//! Deterministic enumeration of the square grid, starting at the origin and
//! winding counter-clockwise outward. The first step goes right, then the
//! walk turns up, and every ring fully encloses the previous one.
//!
//! # Ring Structure
//!
//! - Ring 0: Just the origin (1 slot)
//! - Ring n > 0: All coordinates with max(|x|, |y|) = n (8n slots)
//!
//! Ring n starts one step right of the bottom-right corner of ring n-1, at
//! `(n, -n + 1)`, and walks four sides of length 2n: right edge upward, top
//! edge leftward, left edge downward, bottom edge rightward. Each side ends
//! on a corner, so the last slot of ring n is `(n, -n)`.
//!
//! ```text
//! 16  15  14  13  12
//! 17   4   3   2  11
//! 18   5   0   1  10
//! 19   6   7   8   9
//! 20  21  22  23  24
//! ```

use crate::{Error, SquareCoord};

/// A spiral index - unique slot identifier in the spiral enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpiralIndex(pub u64);

impl SpiralIndex {
    /// Origin slot.
    pub const ORIGIN: Self = Self(0);

    /// Create from raw index.
    #[inline]
    pub const fn new(index: u64) -> Self {
        Self(index)
    }

    /// Get the raw index value.
    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Determine which ring this index falls in.
    ///
    /// Ring 0: index 0
    /// Ring 1: indices 1-8
    /// Ring 2: indices 9-24
    /// Ring n: indices from (2n-1)² to (2n+1)²-1
    pub fn ring(&self) -> u64 {
        if self.0 == 0 {
            return 0;
        }

        // Ring n ends on the odd square (2n+1)², so the floor square root
        // of the index pins the ring without any search.
        (self.0.isqrt() - 1) / 2 + 1
    }

    /// Offset within the ring (0 to 8n-1 for ring n > 0).
    pub fn offset_in_ring(&self) -> u64 {
        let ring = self.ring();
        if ring == 0 {
            return 0;
        }
        self.0 - total_slots_through(ring - 1)
    }
}

impl From<u64> for SpiralIndex {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<SpiralIndex> for u64 {
    fn from(value: SpiralIndex) -> Self {
        value.0
    }
}

impl TryFrom<i64> for SpiralIndex {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u64::try_from(value).map(Self).map_err(|_| {
            Error::InvalidArgument(format!("spiral index must be non-negative, got {value}"))
        })
    }
}

impl std::fmt::Display for SpiralIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Total number of slots in ring n.
///
/// - Ring 0: 1 slot (origin)
/// - Ring n > 0: 8n slots
#[inline]
pub const fn slots_in_ring(ring: u64) -> u64 {
    if ring == 0 {
        1
    } else {
        8 * ring
    }
}

/// Total slots through ring n (inclusive).
///
/// Formula: (2n+1)²
#[inline]
pub const fn total_slots_through(ring: u64) -> u64 {
    let side = 2 * ring + 1;
    side * side
}

/// Iterator over spiral coordinates.
#[derive(Debug, Clone)]
pub struct Spiral {
    current: u64,
    limit: Option<u64>,
}

impl Spiral {
    /// Create an infinite spiral iterator starting from origin.
    pub fn new() -> Self {
        Self {
            current: 0,
            limit: None,
        }
    }

    /// Create a spiral iterator that yields `count` coordinates.
    pub fn take_slots(count: u64) -> Self {
        Self {
            current: 0,
            limit: Some(count),
        }
    }

    /// Create a spiral iterator for a specific ring range.
    pub fn rings(start_ring: u64, end_ring: u64) -> Self {
        let start_slot = if start_ring == 0 {
            0
        } else {
            total_slots_through(start_ring - 1)
        };
        let end_slot = total_slots_through(end_ring);

        Self {
            current: start_slot,
            limit: Some(end_slot),
        }
    }
}

impl Default for Spiral {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Spiral {
    type Item = SquareCoord;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(limit) = self.limit {
            if self.current >= limit {
                return None;
            }
        }

        let coord = spiral_to_coord(SpiralIndex(self.current));
        self.current += 1;
        Some(coord)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.limit {
            Some(limit) => {
                let remaining = limit.saturating_sub(self.current);
                (remaining as usize, Some(remaining as usize))
            }
            None => (usize::MAX, None),
        }
    }
}

/// Convert a spiral index to square grid coordinates.
pub fn spiral_to_coord(index: SpiralIndex) -> SquareCoord {
    if index.0 == 0 {
        return SquareCoord::ORIGIN;
    }

    let ring = index.ring();
    let offset = index.offset_in_ring();

    // Four sides of length 2n; position along a side runs from -n+1 to n
    let side_len = 2 * ring;
    let side = offset / side_len;
    let r = ring as i64;
    let along = (offset % side_len) as i64 - r + 1;

    match side {
        0 => SquareCoord::new(r, along),   // Right edge, upward
        1 => SquareCoord::new(-along, r),  // Top edge, leftward
        2 => SquareCoord::new(-r, -along), // Left edge, downward
        _ => SquareCoord::new(along, -r),  // Bottom edge, rightward
    }
}

/// Convert square grid coordinates to a spiral index.
///
/// Inverse of `spiral_to_coord`.
pub fn coord_to_spiral(coord: SquareCoord) -> SpiralIndex {
    if coord == SquareCoord::ORIGIN {
        return SpiralIndex::ORIGIN;
    }

    let ring = coord.ring();
    let r = ring as i64;

    // Each side owns its far corner, so the near corner belongs to the
    // previous side.
    let (side, along) = if coord.x == r && coord.y > -r {
        (0, coord.y)
    } else if coord.y == r && coord.x < r {
        (1, -coord.x)
    } else if coord.x == -r && coord.y < r {
        (2, -coord.y)
    } else {
        (3, coord.x)
    };

    let base = total_slots_through(ring - 1);
    let pos = (along + r - 1) as u64;
    SpiralIndex(base + side * 2 * ring + pos)
}

/// Manhattan distance from the origin to the cell holding `index`.
pub fn spiral_distance(index: SpiralIndex) -> u64 {
    spiral_to_coord(index).manhattan_distance(&SquareCoord::ORIGIN)
}
