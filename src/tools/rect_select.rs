use crate::core::selection::Selection;
use crate::core::store::PixelStore;
use super::tool_trait::{Tool, ToolOutcome};

pub struct RectSelectTool {
    start: Option<usize>,
    moved: bool,
}

impl RectSelectTool {
    pub fn new() -> Self {
        Self { start: None, moved: false }
    }
}

impl Default for RectSelectTool {
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for RectSelectTool {
    fn on_pointer_down(&mut self, index: Option<usize>, store: &mut PixelStore) -> ToolOutcome {
        self.moved = false;
        self.start = index;
        store.selection.clear();
        ToolOutcome::Idle
    }

    fn on_pointer_move(&mut self, index: Option<usize>, store: &mut PixelStore) -> ToolOutcome {
        let Some(start) = self.start else {
            return ToolOutcome::Idle;
        };
        self.moved = true;
        match index {
            Some(end) => {
                store.selection = Selection::rectangle(start, end, store.size);
                ToolOutcome::Preview
            }
            None => ToolOutcome::Idle,
        }
    }

    /// A click without a drag leaves nothing selected.
    fn on_pointer_up(&mut self, index: Option<usize>, store: &mut PixelStore) -> ToolOutcome {
        let Some(start) = self.start.take() else {
            return ToolOutcome::Idle;
        };
        match index {
            Some(end) if self.moved => store.selection = Selection::rectangle(start, end, store.size),
            _ => store.selection.clear(),
        }
        self.moved = false;
        ToolOutcome::Finished
    }

    fn on_cancel(&mut self, store: &mut PixelStore) {
        if self.start.take().is_some() {
            store.selection.clear();
        }
        self.moved = false;
    }

    fn is_active(&self) -> bool {
        self.start.is_some()
    }

    fn as_any(&self) -> &dyn std::any::Any { self }
    fn as_any_mut(&mut self) -> &mut dyn std::any::Any { self }
}
