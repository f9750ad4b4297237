use crate::core::store::PixelStore;
use std::any::Any;

/// What a pointer event did to the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolOutcome {
    /// Nothing changed.
    Idle,
    /// Buffer or selection changed, interaction still running.
    Preview,
    /// Interaction is over and may have changed the document.
    Finished,
    /// Tool settings changed (color picked), document untouched.
    SettingsChanged,
}

impl ToolOutcome {
    pub fn is_finished(&self) -> bool {
        matches!(self, ToolOutcome::Finished)
    }
}

/// Pointer-driven editing tool. `index` is the cell under the pointer, `None`
/// when the pointer is off the grid. Implementations never fail: bad indices
/// are no-ops.
pub trait Tool: Any {
    fn on_pointer_down(&mut self, index: Option<usize>, store: &mut PixelStore) -> ToolOutcome;
    fn on_pointer_move(&mut self, index: Option<usize>, store: &mut PixelStore) -> ToolOutcome;
    fn on_pointer_up(&mut self, index: Option<usize>, store: &mut PixelStore) -> ToolOutcome;
    /// Abandons a running interaction, restoring whatever it replaced.
    fn on_cancel(&mut self, _store: &mut PixelStore) {}
    fn is_active(&self) -> bool {
        false
    }
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}
