use crate::core::selection::Selection;
use crate::core::store::PixelStore;
use super::tool_trait::{Tool, ToolOutcome};

/// Freehand selection. The traced path lives in `store.lasso_path` so the
/// host can draw it while dragging.
pub struct LassoSelectTool {
    drawing: bool,
    moved: bool,
}

impl LassoSelectTool {
    pub fn new() -> Self {
        Self { drawing: false, moved: false }
    }
}

impl Default for LassoSelectTool {
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for LassoSelectTool {
    fn on_pointer_down(&mut self, index: Option<usize>, store: &mut PixelStore) -> ToolOutcome {
        self.drawing = true;
        self.moved = false;
        store.selection.clear();
        store.lasso_path.clear();
        if let Some(i) = index {
            store.lasso_path.push(i);
        }
        ToolOutcome::Idle
    }

    fn on_pointer_move(&mut self, index: Option<usize>, store: &mut PixelStore) -> ToolOutcome {
        if !self.drawing {
            return ToolOutcome::Idle;
        }
        self.moved = true;
        let Some(i) = index else {
            return ToolOutcome::Idle;
        };
        if store.lasso_path.last() == Some(&i) {
            return ToolOutcome::Idle;
        }
        store.lasso_path.push(i);
        store.selection = Selection::lasso(&store.lasso_path, store.size);
        ToolOutcome::Preview
    }

    fn on_pointer_up(&mut self, _index: Option<usize>, store: &mut PixelStore) -> ToolOutcome {
        if !self.drawing {
            return ToolOutcome::Idle;
        }
        self.drawing = false;
        if !store.lasso_path.is_empty() {
            if self.moved {
                store.selection = Selection::lasso(&store.lasso_path, store.size);
            } else {
                store.selection.clear();
            }
            store.lasso_path.clear();
        }
        self.moved = false;
        ToolOutcome::Finished
    }

    fn on_cancel(&mut self, store: &mut PixelStore) {
        if self.drawing {
            store.clear_selection();
        }
        self.drawing = false;
        self.moved = false;
    }

    fn is_active(&self) -> bool {
        self.drawing
    }

    fn as_any(&self) -> &dyn std::any::Any { self }
    fn as_any_mut(&mut self) -> &mut dyn std::any::Any { self }
}
