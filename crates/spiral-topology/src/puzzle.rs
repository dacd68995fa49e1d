//! Spiral memory puzzle answers.
//!
//! Values are written into the square spiral starting with 1 at the origin,
//! so value `n` lives at spiral index `n - 1`.
//!
//! - Part one: Manhattan distance from the cell holding the target to the
//!   origin.
//! - Part two: first neighbor-sum spiral term strictly greater than the
//!   target.

use std::str::FromStr;

use tracing::debug;

use crate::{spiral_distance, Error, NeighborSumSpiral, Result, SpiralIndex};

/// A validated puzzle input: a positive integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Target(u64);

impl Target {
    /// Create a target, rejecting zero.
    pub fn new(value: u64) -> Result<Self> {
        if value == 0 {
            return Err(Error::InvalidArgument(
                "target must be a positive integer, got 0".to_string(),
            ));
        }
        Ok(Self(value))
    }

    /// Get the raw target value.
    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Spiral index of the cell holding this value.
    #[inline]
    pub const fn index(&self) -> SpiralIndex {
        SpiralIndex(self.0 - 1)
    }
}

impl TryFrom<i64> for Target {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        let value = u64::try_from(value).map_err(|_| {
            Error::InvalidArgument(format!("target must be a positive integer, got {value}"))
        })?;
        Self::new(value)
    }
}

impl FromStr for Target {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        match s.parse::<u64>() {
            Ok(value) => Self::new(value),
            Err(_) => match s.parse::<i64>() {
                Ok(value) => Self::try_from(value),
                Err(_) => Err(Error::InvalidArgument(format!(
                    "target must be a positive integer, got {s:?}"
                ))),
            },
        }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Both puzzle answers for one target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Answers {
    /// Manhattan distance from the target's cell to the origin
    pub distance: u64,
    /// First neighbor-sum spiral term greater than the target
    pub first_larger: u64,
}

/// Manhattan distance from the cell holding `target` to the origin.
pub fn part_one(target: Target) -> u64 {
    spiral_distance(target.index())
}

/// First neighbor-sum spiral term strictly greater than `target`.
///
/// # Errors
///
/// [`Error::Overflow`] if the answer does not fit in a `u64`.
pub fn part_two(target: Target) -> Result<u64> {
    NeighborSumSpiral::new().first_exceeding(target.value())
}

/// Compute both answers.
pub fn solve(target: Target) -> Result<Answers> {
    let distance = part_one(target);
    debug!("target {} sits at {}, distance {}", target, target.index(), distance);

    let first_larger = part_two(target)?;
    Ok(Answers {
        distance,
        first_larger,
    })
}
