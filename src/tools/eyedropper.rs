use crate::core::store::PixelStore;
use super::tool_trait::{Tool, ToolOutcome};

/// Color picker. Reads the active layer/frame cell, never writes.
pub struct EyedropperTool;

impl EyedropperTool {
    pub fn new() -> Self { Self }
}

impl Default for EyedropperTool {
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for EyedropperTool {
    fn on_pointer_down(&mut self, index: Option<usize>, store: &mut PixelStore) -> ToolOutcome {
        let picked = index.and_then(|i| store.active_pixels().get(i));
        match picked {
            Some(color) => {
                store.settings.color = color;
                ToolOutcome::SettingsChanged
            }
            None => ToolOutcome::Idle,
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
