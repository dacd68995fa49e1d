//! Text layout of the spiral.

use crate::{coord_to_spiral, SpiralIndex, SquareCoord};

/// Column separator between cells.
const SEPARATOR: &str = "  ";

/// Lay out rings `0..=rings` as a text grid, top row first.
///
/// Each cell shows `value(index)` for the spiral index at that position,
/// right-aligned to the widest value. Rows are joined with `\n` and carry no
/// trailing newline.
pub fn render_rings<F>(rings: u64, value: F) -> String
where
    F: Fn(SpiralIndex) -> u64,
{
    let r = rings as i64;

    let rows: Vec<Vec<String>> = (-r..=r)
        .rev()
        .map(|y| {
            (-r..=r)
                .map(|x| value(coord_to_spiral(SquareCoord::new(x, y))).to_string())
                .collect()
        })
        .collect();

    let width = rows.iter().flatten().map(String::len).max().unwrap_or(0);

    rows.iter()
        .map(|row| {
            row.iter()
                .map(|cell| format!("{cell:>width$}"))
                .collect::<Vec<_>>()
                .join(SEPARATOR)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
