use std::collections::BTreeSet;
use serde::{Deserialize, Serialize};
use super::buffer::PixelBuffer;
use super::grid::GridSize;

/// Set of selected cell indices on the active layer/frame buffer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection {
    indices: BTreeSet<usize>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_indices(indices: impl IntoIterator<Item = usize>) -> Self {
        Self { indices: indices.into_iter().collect() }
    }

    /// Inclusive span between two cells.
    pub fn rectangle(start: usize, end: usize, size: GridSize) -> Self {
        if !size.contains_index(start) || !size.contains_index(end) {
            return Self::new();
        }
        let (r1, c1) = size.row_col(start);
        let (r2, c2) = size.row_col(end);
        let mut indices = BTreeSet::new();
        for row in r1.min(r2)..=r1.max(r2) {
            for col in c1.min(c2)..=c1.max(c2) {
                indices.insert(size.index(row, col));
            }
        }
        Self { indices }
    }

    /// Path cells plus every cell inside the polygon they trace. Paths under
    /// three points select only themselves.
    pub fn lasso(path: &[usize], size: GridSize) -> Self {
        let mut indices: BTreeSet<usize> = path.iter().copied().filter(|&i| size.contains_index(i)).collect();
        if path.len() < 3 {
            return Self { indices };
        }

        let polygon: Vec<(f64, f64)> = path
            .iter()
            .map(|&i| {
                let (row, col) = size.row_col(i);
                (col as f64, row as f64)
            })
            .collect();

        let (mut min_col, mut max_col) = (usize::MAX, 0);
        let (mut min_row, mut max_row) = (usize::MAX, 0);
        for &i in path {
            let (row, col) = size.row_col(i);
            min_col = min_col.min(col);
            max_col = max_col.max(col);
            min_row = min_row.min(row);
            max_row = max_row.max(row);
        }

        for row in min_row..=max_row.min(size.height - 1) {
            for col in min_col..=max_col {
                if point_in_polygon(col as f64, row as f64, &polygon) {
                    indices.insert(size.index(row, col));
                }
            }
        }
        Self { indices }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn clear(&mut self) {
        self.indices.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }

    /// Shifts every index by `(dr, dc)`, dropping cells that leave the grid.
    pub fn translated(&self, dr: i64, dc: i64, size: GridSize) -> Self {
        let indices = self
            .indices
            .iter()
            .filter_map(|&i| {
                let (row, col) = size.row_col(i);
                size.checked_index(row as i64 + dr, col as i64 + dc)
            })
            .collect();
        Self { indices }
    }

    /// Applies a selection move to `original`: vacate every selected cell,
    /// then write each selected cell's original value at its shifted position.
    /// Targets off the grid are dropped.
    pub fn move_pixels(&self, original: &PixelBuffer, dr: i64, dc: i64, size: GridSize) -> PixelBuffer {
        let mut out = PixelBuffer::normalize(Some(original), size.width, size.height);
        for i in self.iter() {
            out.set(i, None);
        }
        for i in self.iter() {
            let (row, col) = size.row_col(i);
            if let Some(target) = size.checked_index(row as i64 + dr, col as i64 + dc) {
                out.set(target, original.get(i));
            }
        }
        out
    }
}

/// Even-odd ray casting. Points are `(x, y)` = `(col, row)`.
pub fn point_in_polygon(x: f64, y: f64, polygon: &[(f64, f64)]) -> bool {
    let mut inside = false;
    let mut j = polygon.len().wrapping_sub(1);
    for i in 0..polygon.len() {
        let (xi, yi) = polygon[i];
        let (xj, yj) = polygon[j];
        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}
