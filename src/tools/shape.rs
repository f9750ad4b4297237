use crate::core::buffer::PixelBuffer;
use crate::core::store::PixelStore;
use super::circle::draw_circle;
use super::line::draw_line;
use super::rectangle::draw_rectangle;
use super::tool_trait::{Tool, ToolOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Line,
    Rectangle,
    Circle,
}

/// Drag tool for lines, rectangles and circles. Every preview is redrawn from
/// the buffer captured at pointer-down.
pub struct ShapeTool {
    pub kind: ShapeKind,
    start: Option<usize>,
    original: Option<PixelBuffer>,
}

impl ShapeTool {
    pub fn new(kind: ShapeKind) -> Self {
        Self { kind, start: None, original: None }
    }

    pub fn start_index(&self) -> Option<usize> {
        self.start
    }

    /// Shape from `start` to `end` drawn over a copy of `original`.
    pub fn render(&self, original: &PixelBuffer, start: usize, end: usize, store: &PixelStore) -> PixelBuffer {
        let size = store.size;
        let settings = store.settings;
        let mut out = PixelBuffer::normalize(Some(original), size.width, size.height);
        if !size.contains_index(start) || !size.contains_index(end) {
            return out;
        }
        let (color, stroke, filled) = (settings.color, settings.stroke_width(), settings.fill_shapes);
        match self.kind {
            ShapeKind::Line => draw_line(&mut out, start, end, color, stroke, size),
            ShapeKind::Rectangle => draw_rectangle(&mut out, start, end, color, stroke, filled, size),
            ShapeKind::Circle => draw_circle(&mut out, start, end, color, stroke, filled, size),
        }
        out
    }

    fn reset(&mut self) {
        self.start = None;
        self.original = None;
    }
}

impl Tool for ShapeTool {
    fn on_pointer_down(&mut self, index: Option<usize>, store: &mut PixelStore) -> ToolOutcome {
        self.reset();
        if let Some(i) = index {
            self.start = Some(i);
            self.original = Some(store.active_pixels());
        }
        ToolOutcome::Idle
    }

    fn on_pointer_move(&mut self, index: Option<usize>, store: &mut PixelStore) -> ToolOutcome {
        let (Some(start), Some(original)) = (self.start, self.original.as_ref()) else {
            return ToolOutcome::Idle;
        };
        let next = match index {
            Some(end) => self.render(original, start, end, store),
            None => original.clone(),
        };
        store.set_active_pixels(next);
        ToolOutcome::Preview
    }

    fn on_pointer_up(&mut self, index: Option<usize>, store: &mut PixelStore) -> ToolOutcome {
        let (Some(start), Some(original)) = (self.start, self.original.take()) else {
            self.reset();
            return ToolOutcome::Idle;
        };
        let next = match index {
            Some(end) => self.render(&original, start, end, store),
            None => original,
        };
        store.set_active_pixels(next);
        self.reset();
        ToolOutcome::Finished
    }

    fn on_cancel(&mut self, store: &mut PixelStore) {
        if let Some(original) = self.original.take() {
            store.set_active_pixels(original);
        }
        self.reset();
    }

    fn is_active(&self) -> bool {
        self.start.is_some()
    }

    fn as_any(&self) -> &dyn std::any::Any { self }
    fn as_any_mut(&mut self) -> &mut dyn std::any::Any { self }
}
