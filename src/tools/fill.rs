use crate::core::buffer::PixelBuffer;
use crate::core::color::Color;
use crate::core::grid::GridSize;
use crate::core::store::PixelStore;
use super::tool_trait::{Tool, ToolOutcome};

/// 4-connected flood fill from `start`. Returns the indices that were
/// replaced, each exactly once. No-op when the start cell already holds
/// `fill`.
pub fn flood_fill(pixels: &mut PixelBuffer, start: usize, fill: Color, size: GridSize) -> Vec<usize> {
    if !size.contains_index(start) || start >= pixels.len() {
        return Vec::new();
    }
    let target = pixels.get(start);
    if target == Some(fill) {
        return Vec::new();
    }

    let mut visited = vec![false; size.cell_count()];
    let mut filled = Vec::new();
    let mut stack = vec![start];

    while let Some(index) = stack.pop() {
        if visited[index] || pixels.get(index) != target {
            continue;
        }
        visited[index] = true;
        pixels.set(index, Some(fill));
        filled.push(index);

        let (row, col) = size.row_col(index);
        let (row, col) = (row as i64, col as i64);
        for (r, c) in [(row - 1, col), (row + 1, col), (row, col - 1), (row, col + 1)] {
            if let Some(next) = size.checked_index(r, c) {
                if !visited[next] {
                    stack.push(next);
                }
            }
        }
    }
    filled
}

pub struct FillTool;

impl FillTool {
    pub fn new() -> Self { Self }
}

impl Default for FillTool {
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for FillTool {
    fn on_pointer_down(&mut self, index: Option<usize>, store: &mut PixelStore) -> ToolOutcome {
        let Some(start) = index else {
            return ToolOutcome::Idle;
        };
        let color = store.settings.color;
        let size = store.size;
        let filled = flood_fill(store.active_pixels_mut(), start, color, size);
        if filled.is_empty() {
            ToolOutcome::Idle
        } else {
            ToolOutcome::Finished
        }
    }

    fn on_pointer_move(&mut self, _index: Option<usize>, _store: &mut PixelStore) -> ToolOutcome {
        ToolOutcome::Idle
    }

    fn on_pointer_up(&mut self, _index: Option<usize>, _store: &mut PixelStore) -> ToolOutcome {
        ToolOutcome::Idle
    }

    fn as_any(&self) -> &dyn std::any::Any { self }
    fn as_any_mut(&mut self) -> &mut dyn std::any::Any { self }
}
