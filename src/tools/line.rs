use crate::core::buffer::PixelBuffer;
use crate::core::color::Color;
use crate::core::grid::GridSize;
use super::brush::footprint_at;
use super::geometry::Geometry;

/// Overwrites every cell of the stroke-thickened Bresenham line between two
/// cells.
pub fn draw_line(pixels: &mut PixelBuffer, start: usize, end: usize, color: Color, stroke: u8, size: GridSize) {
    let (r1, c1) = size.row_col(start);
    let (r2, c2) = size.row_col(end);
    Geometry::bresenham_line(c1 as i64, r1 as i64, c2 as i64, r2 as i64, |x, y| {
        for cell in footprint_at(y, x, stroke, size) {
            pixels.set(cell, Some(color));
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    const INK: Color = Color::new(1, 2, 3);

    fn painted(buf: &PixelBuffer) -> Vec<usize> {
        (0..buf.len()).filter(|&i| buf.get(i).is_some()).collect()
    }

    #[test]
    fn test_line_horizontal_row() {
        let size = GridSize::new(4, 4).unwrap();
        let mut buf = PixelBuffer::for_grid(size);
        draw_line(&mut buf, 0, 3, INK, 1, size);
        assert_eq!(painted(&buf), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_line_includes_endpoints() {
        let size = GridSize::new(9, 7).unwrap();
        let (a, b) = (size.index(6, 1), size.index(0, 8));
        let mut buf = PixelBuffer::for_grid(size);
        draw_line(&mut buf, a, b, INK, 1, size);
        assert!(buf.get(a).is_some());
        assert!(buf.get(b).is_some());
    }

    #[test]
    fn test_line_thick_stroke() {
        let size = GridSize::new(5, 5).unwrap();
        let mut buf = PixelBuffer::for_grid(size);
        draw_line(&mut buf, size.index(2, 0), size.index(2, 4), INK, 3, size);
        // rows 1..=3 fully painted
        assert_eq!(buf.painted_count(), 5 + 5 + 5);
    }
}
