use crate::core::frame::Frame;
use crate::core::grid::GridSize;
use crate::core::layer::Layer;
use crate::core::store::PixelStore;

/// Deep copy of everything undo can restore: grid size plus every layer
/// and frame with its buffers. Tool settings and the selection are not part
/// of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditableState {
    pub size: GridSize,
    pub layers: Vec<Layer>,
    pub frames: Vec<Frame>,
}

impl EditableState {
    pub fn capture(store: &PixelStore) -> Self {
        Self {
            size: store.size,
            layers: store.layers.clone(),
            frames: store.frames.clone(),
        }
    }

    /// Writes the snapshot back. Active indices are clamped. The live
    /// selection survives unless the grid size changed.
    pub fn restore(&self, store: &mut PixelStore) {
        let size_changed = store.size != self.size;
        store.size = self.size;
        store.layers = self.layers.clone();
        store.frames = self.frames.clone();
        store.normalize_document();
        if size_changed {
            store.clear_selection();
        }
    }
}
