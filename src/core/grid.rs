use serde::{Deserialize, Serialize};
use crate::core::error::{CoreError, Result};

pub const MIN_GRID_SIZE: usize = 1;
pub const MAX_GRID_SIZE: usize = 256;

/// Row-major cell address. No bounds checking, callers must check.
#[inline]
pub fn to_index(row: usize, col: usize, width: usize) -> usize {
    row * width + col
}

#[inline]
pub fn to_row_col(index: usize, width: usize) -> (usize, usize) {
    (index / width, index % width)
}

#[inline]
pub fn in_bounds(row: i64, col: i64, width: usize, height: usize) -> bool {
    row >= 0 && col >= 0 && (row as usize) < height && (col as usize) < width
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridSize {
    pub width: usize,
    pub height: usize,
}

impl GridSize {
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let valid = |v: usize| (MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&v);
        if !valid(width) || !valid(height) {
            return Err(CoreError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    pub fn contains_index(&self, index: usize) -> bool {
        index < self.cell_count()
    }

    pub fn row_col(&self, index: usize) -> (usize, usize) {
        to_row_col(index, self.width)
    }

    pub fn index(&self, row: usize, col: usize) -> usize {
        to_index(row, col, self.width)
    }

    /// Index of a signed cell position, `None` when it falls off the grid.
    pub fn checked_index(&self, row: i64, col: i64) -> Option<usize> {
        if in_bounds(row, col, self.width, self.height) {
            Some(to_index(row as usize, col as usize, self.width))
        } else {
            None
        }
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self { width: 32, height: 32 }
    }
}

/// Axis-aligned inclusive rectangle of cells, produced by the crop tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropRegion {
    pub min_row: usize,
    pub max_row: usize,
    pub min_col: usize,
    pub max_col: usize,
    pub width: usize,
    pub height: usize,
}

impl CropRegion {
    /// Span between two in-grid indices, clamped to the grid.
    pub fn between(a: usize, b: usize, size: GridSize) -> Self {
        let (r1, c1) = size.row_col(a);
        let (r2, c2) = size.row_col(b);
        let last_row = size.height - 1;
        let last_col = size.width - 1;
        let min_row = r1.min(r2).min(last_row);
        let max_row = r1.max(r2).min(last_row);
        let min_col = c1.min(c2).min(last_col);
        let max_col = c1.max(c2).min(last_col);
        Self {
            min_row,
            max_row,
            min_col,
            max_col,
            width: max_col - min_col + 1,
            height: max_row - min_row + 1,
        }
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        (self.min_row..=self.max_row).contains(&row) && (self.min_col..=self.max_col).contains(&col)
    }

    /// Whether the region lies inside a grid of `size`.
    pub fn fits(&self, size: GridSize) -> bool {
        self.min_row <= self.max_row
            && self.min_col <= self.max_col
            && self.max_row < size.height
            && self.max_col < size.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_math() {
        assert_eq!(to_index(2, 3, 4), 11);
        assert_eq!(to_row_col(11, 4), (2, 3));
        assert!(in_bounds(0, 0, 4, 4));
        assert!(!in_bounds(-1, 0, 4, 4));
        assert!(!in_bounds(0, 4, 4, 4));
    }

    #[test]
    fn test_grid_size_limits() {
        assert!(GridSize::new(256, 1).is_ok());
        assert_eq!(GridSize::new(0, 8), Err(CoreError::InvalidDimensions { width: 0, height: 8 }));
        assert!(GridSize::new(8, 257).is_err());
    }

    #[test]
    fn test_crop_region_normalizes_corners() {
        let size = GridSize::new(8, 8).unwrap();
        let region = CropRegion::between(size.index(5, 6), size.index(1, 2), size);
        assert_eq!((region.min_row, region.max_row), (1, 5));
        assert_eq!((region.min_col, region.max_col), (2, 6));
        assert_eq!((region.width, region.height), (5, 5));
    }

    #[test]
    fn test_crop_region_fits() {
        let big = GridSize::new(8, 8).unwrap();
        let region = CropRegion::between(0, 63, big);
        assert!(region.fits(big));
        assert!(!region.fits(GridSize::new(4, 4).unwrap()));
    }
}
