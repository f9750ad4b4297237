use crate::core::grid::GridSize;
use super::geometry::Geometry;

/// Cells covered by a round brush of `thickness` centred on `(row, col)`,
/// clipped to the grid. The centre itself may lie off the grid.
pub fn footprint_at(row: i64, col: i64, thickness: u8, size: GridSize) -> Vec<usize> {
    if thickness <= 1 {
        return size.checked_index(row, col).into_iter().collect();
    }
    let radius = i64::from(thickness / 2);
    let mut cells = Vec::new();
    for r in row - radius..=row + radius {
        for c in col - radius..=col + radius {
            if Geometry::distance(r, c, row, col) <= radius as f64 {
                if let Some(index) = size.checked_index(r, c) {
                    cells.push(index);
                }
            }
        }
    }
    cells
}

/// Brush cells around an in-grid `center`. Out-of-range centers stamp
/// nothing.
pub fn brush_footprint(center: usize, thickness: u8, size: GridSize) -> Vec<usize> {
    if !size.contains_index(center) {
        return Vec::new();
    }
    let (row, col) = size.row_col(center);
    footprint_at(row as i64, col as i64, thickness, size)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(w: usize, h: usize) -> GridSize {
        GridSize::new(w, h).unwrap()
    }

    #[test]
    fn test_footprint_single() {
        assert_eq!(brush_footprint(5, 1, grid(4, 4)), vec![5]);
        assert!(brush_footprint(16, 1, grid(4, 4)).is_empty());
    }

    #[test]
    fn test_footprint_radius_one_is_plus() {
        let mut cells = brush_footprint(5, 3, grid(4, 4));
        cells.sort();
        assert_eq!(cells, vec![1, 4, 5, 6, 9]);
    }

    #[test]
    fn test_footprint_contains_center_and_grows() {
        let size = grid(16, 16);
        let center = size.index(7, 8);
        let mut last = 0;
        for t in 1..=10 {
            let cells = brush_footprint(center, t, size);
            assert!(cells.contains(&center));
            assert!(cells.len() >= last);
            last = cells.len();
        }
    }

    #[test]
    fn test_footprint_clipped_at_corner() {
        let cells = brush_footprint(0, 3, grid(4, 4));
        assert_eq!(cells.len(), 3);
    }

    #[test]
    fn test_footprint_off_grid_center() {
        // thick stroke point just outside still reaches the edge column
        let cells = footprint_at(0, -1, 3, grid(4, 4));
        assert_eq!(cells, vec![0]);
    }
}
