use std::time::Instant;
use crate::core::store::PixelStore;
use crate::history::manager::HistoryManager;
use crate::history::snapshot::EditableState;

/// Mutable view handed to the document services.
pub struct CanvasContext<'a> {
    pub store: &'a mut PixelStore,
    pub history: &'a mut HistoryManager<EditableState>,
    pub now: Instant,
}

impl<'a> CanvasContext<'a> {
    /// Records the current document unless it matches the entry under the
    /// history pointer. Returns whether an entry was pushed.
    pub fn commit(&mut self) -> bool {
        let state = EditableState::capture(self.store);
        if *self.history.current() == state {
            return false;
        }
        self.history.record_at(&state, self.now)
    }
}
