use crate::core::blend::{blend_erase, blend_paint};
use crate::core::store::PixelStore;
use super::brush::brush_footprint;
use super::tool_trait::{Tool, ToolOutcome};

/// Freehand brush. The eraser is the same tool with `is_eraser` set.
pub struct PencilTool {
    pub is_eraser: bool,
    drawing: bool,
}

impl PencilTool {
    pub fn new(is_eraser: bool) -> Self {
        Self { is_eraser, drawing: false }
    }

    /// Stamps the brush footprint at `index`, blending each cell against its
    /// live value. Returns whether any cell changed.
    pub fn stamp(&self, index: usize, store: &mut PixelStore) -> bool {
        let settings = store.settings;
        let size = store.size;
        let cells = brush_footprint(index, settings.brush_thickness(), size);
        let pixels = store.active_pixels_mut();
        let mut changed = false;
        for cell in cells {
            let existing = pixels.get(cell);
            let next = if self.is_eraser {
                blend_erase(existing, settings.brush_opacity())
            } else {
                Some(blend_paint(existing, settings.color, settings.brush_opacity()))
            };
            if next != existing {
                pixels.set(cell, next);
                changed = true;
            }
        }
        changed
    }

    fn stamp_event(&self, index: Option<usize>, store: &mut PixelStore) -> ToolOutcome {
        match index {
            Some(i) if self.stamp(i, store) => ToolOutcome::Preview,
            _ => ToolOutcome::Idle,
        }
    }
}

impl Tool for PencilTool {
    fn on_pointer_down(&mut self, index: Option<usize>, store: &mut PixelStore) -> ToolOutcome {
        self.drawing = true;
        self.stamp_event(index, store)
    }

    fn on_pointer_move(&mut self, index: Option<usize>, store: &mut PixelStore) -> ToolOutcome {
        if !self.drawing {
            return ToolOutcome::Idle;
        }
        self.stamp_event(index, store)
    }

    fn on_pointer_up(&mut self, _index: Option<usize>, _store: &mut PixelStore) -> ToolOutcome {
        if !self.drawing {
            return ToolOutcome::Idle;
        }
        self.drawing = false;
        ToolOutcome::Finished
    }

    fn on_cancel(&mut self, _store: &mut PixelStore) {
        self.drawing = false;
    }

    fn is_active(&self) -> bool {
        self.drawing
    }

    fn as_any(&self) -> &dyn std::any::Any { self }
    fn as_any_mut(&mut self) -> &mut dyn std::any::Any { self }
}
