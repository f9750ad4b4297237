use crate::core::buffer::PixelBuffer;
use crate::core::color::Color;
use crate::core::grid::GridSize;
use super::brush::footprint_at;

/// Axis-aligned box between two opposite corners. Outline edges are
/// thickened by `stroke`; filled boxes ignore it.
pub fn draw_rectangle(
    pixels: &mut PixelBuffer,
    start: usize,
    end: usize,
    color: Color,
    stroke: u8,
    filled: bool,
    size: GridSize,
) {
    let (r1, c1) = size.row_col(start);
    let (r2, c2) = size.row_col(end);
    let (min_row, max_row) = (r1.min(r2), r1.max(r2));
    let (min_col, max_col) = (c1.min(c2), c1.max(c2));

    if filled {
        for row in min_row..=max_row {
            for col in min_col..=max_col {
                pixels.set(size.index(row, col), Some(color));
            }
        }
        return;
    }

    let mut plot = |row: usize, col: usize| {
        for cell in footprint_at(row as i64, col as i64, stroke, size) {
            pixels.set(cell, Some(color));
        }
    };
    for col in min_col..=max_col {
        plot(min_row, col);
        plot(max_row, col);
    }
    for row in min_row..=max_row {
        plot(row, min_col);
        plot(row, max_col);
    }
}
