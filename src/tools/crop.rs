use crate::core::grid::CropRegion;
use crate::core::store::PixelStore;
use super::tool_trait::{Tool, ToolOutcome};

/// Drags out a crop proposal. Applying it is a separate command.
pub struct CropTool {
    start: Option<usize>,
    pub proposal: Option<CropRegion>,
}

impl CropTool {
    pub fn new() -> Self {
        Self { start: None, proposal: None }
    }

    fn propose(&mut self, index: Option<usize>, store: &PixelStore) -> ToolOutcome {
        match (self.start, index) {
            (Some(start), Some(end)) if store.size.contains_index(end) => {
                self.proposal = Some(CropRegion::between(start, end, store.size));
                ToolOutcome::Preview
            }
            _ => ToolOutcome::Idle,
        }
    }
}

impl Default for CropTool {
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for CropTool {
    fn on_pointer_down(&mut self, index: Option<usize>, store: &mut PixelStore) -> ToolOutcome {
        self.start = index.filter(|&i| store.size.contains_index(i));
        if self.start.is_some() {
            self.proposal = None;
        }
        ToolOutcome::Idle
    }

    fn on_pointer_move(&mut self, index: Option<usize>, store: &mut PixelStore) -> ToolOutcome {
        self.propose(index, store)
    }

    fn on_pointer_up(&mut self, index: Option<usize>, store: &mut PixelStore) -> ToolOutcome {
        let outcome = self.propose(index, store);
        self.start = None;
        outcome
    }

    fn on_cancel(&mut self, _store: &mut PixelStore) {
        self.start = None;
        self.proposal = None;
    }

    fn is_active(&self) -> bool {
        self.start.is_some()
    }

    fn as_any(&self) -> &dyn std::any::Any { self }
    fn as_any_mut(&mut self) -> &mut dyn std::any::Any { self }
}
