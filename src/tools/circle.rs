use crate::core::buffer::PixelBuffer;
use crate::core::color::Color;
use crate::core::grid::GridSize;
use super::brush::footprint_at;
use super::geometry::Geometry;

/// Circle centred on `center` passing through `edge`. The radius is the
/// exact Euclidean distance; the outline rounds it for the midpoint walk.
pub fn draw_circle(
    pixels: &mut PixelBuffer,
    center: usize,
    edge: usize,
    color: Color,
    stroke: u8,
    filled: bool,
    size: GridSize,
) {
    let (cr, cc) = size.row_col(center);
    let (er, ec) = size.row_col(edge);
    let (cr, cc) = (cr as i64, cc as i64);
    let radius = Geometry::distance(cr, cc, er as i64, ec as i64);

    if filled {
        for row in 0..size.height {
            for col in 0..size.width {
                if Geometry::distance(row as i64, col as i64, cr, cc) <= radius {
                    pixels.set(size.index(row, col), Some(color));
                }
            }
        }
        return;
    }

    Geometry::midpoint_circle(cc, cr, radius, |x, y| {
        for cell in footprint_at(y, x, stroke, size) {
            pixels.set(cell, Some(color));
        }
    });
}
