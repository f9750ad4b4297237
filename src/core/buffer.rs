use serde::{Deserialize, Serialize};
use super::color::Color;
use super::grid::{CropRegion, GridSize};

/// Row-major cells of one layer in one frame. `None` is an empty cell.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PixelBuffer {
    cells: Vec<Option<Color>>,
}

impl PixelBuffer {
    pub fn empty(len: usize) -> Self {
        Self { cells: vec![None; len] }
    }

    pub fn for_grid(size: GridSize) -> Self {
        Self::empty(size.cell_count())
    }

    pub fn from_cells(cells: Vec<Option<Color>>) -> Self {
        Self { cells }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    pub fn cells(&self) -> &[Option<Color>] {
        &self.cells
    }

    pub fn into_cells(self) -> Vec<Option<Color>> {
        self.cells
    }

    /// Out-of-range reads are empty.
    pub fn get(&self, index: usize) -> Option<Color> {
        self.cells.get(index).copied().flatten()
    }

    /// Out-of-range writes are ignored.
    pub fn set(&mut self, index: usize, color: Option<Color>) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = color;
        }
    }

    /// Positional pad/truncate to `width * height` cells. A missing or
    /// mis-sized buffer is copied index-for-index into a fresh empty one; a
    /// correctly sized buffer comes back unchanged.
    pub fn normalize(buffer: Option<&PixelBuffer>, width: usize, height: usize) -> PixelBuffer {
        let len = width * height;
        match buffer {
            Some(existing) if existing.len() == len => existing.clone(),
            Some(existing) => {
                let mut out = PixelBuffer::empty(len);
                let copied = existing.len().min(len);
                out.cells[..copied].copy_from_slice(&existing.cells[..copied]);
                out
            }
            None => PixelBuffer::empty(len),
        }
    }

    pub fn normalize_in_place(&mut self, size: GridSize) {
        if self.len() != size.cell_count() {
            self.cells.resize(size.cell_count(), None);
        }
    }

    /// Copies content at matching row/col into a buffer of the new size.
    pub fn resized(&self, from: GridSize, to: GridSize) -> PixelBuffer {
        let mut out = PixelBuffer::for_grid(to);
        let rows = from.height.min(to.height);
        let cols = from.width.min(to.width);
        for row in 0..rows {
            for col in 0..cols {
                out.set(to.index(row, col), self.get(from.index(row, col)));
            }
        }
        out
    }

    /// Extracts the sub-rectangle `region` as a buffer of its own size.
    pub fn cropped(&self, from: GridSize, region: &CropRegion) -> PixelBuffer {
        let mut out = PixelBuffer::empty(region.width * region.height);
        for row in region.min_row..=region.max_row.min(from.height.saturating_sub(1)) {
            for col in region.min_col..=region.max_col.min(from.width.saturating_sub(1)) {
                let target = (row - region.min_row) * region.width + (col - region.min_col);
                out.set(target, self.get(from.index(row, col)));
            }
        }
        out
    }

    pub fn painted_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}

impl From<Vec<Option<Color>>> for PixelBuffer {
    fn from(cells: Vec<Option<Color>>) -> Self {
        Self { cells }
    }
}
