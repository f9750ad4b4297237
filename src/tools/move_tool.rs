use crate::core::buffer::PixelBuffer;
use crate::core::selection::Selection;
use crate::core::store::PixelStore;
use super::tool_trait::{Tool, ToolOutcome};

struct MoveSession {
    start: usize,
    pixels: PixelBuffer,
    selection: Selection,
}

/// Drags the live selection and the cells under it. Engaged by the tool
/// manager whenever a left click lands inside the selection.
pub struct MoveTool {
    session: Option<MoveSession>,
}

impl MoveTool {
    pub fn new() -> Self {
        Self { session: None }
    }

    /// Writes the state for the pointer at `index` relative to the drag start.
    fn apply(session: &MoveSession, index: usize, store: &mut PixelStore) {
        let size = store.size;
        if !size.contains_index(index) {
            return;
        }
        let (sr, sc) = size.row_col(session.start);
        let (er, ec) = size.row_col(index);
        let dr = er as i64 - sr as i64;
        let dc = ec as i64 - sc as i64;
        let moved = session.selection.move_pixels(&session.pixels, dr, dc, size);
        store.set_active_pixels(moved);
        store.selection = session.selection.translated(dr, dc, size);
    }

    fn restore(session: MoveSession, store: &mut PixelStore) {
        store.set_active_pixels(session.pixels);
        store.selection = session.selection;
    }
}

impl Default for MoveTool {
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for MoveTool {
    fn on_pointer_down(&mut self, index: Option<usize>, store: &mut PixelStore) -> ToolOutcome {
        self.session = index
            .filter(|&i| store.selection.contains(i))
            .map(|start| MoveSession {
                start,
                pixels: store.active_pixels(),
                selection: store.selection.clone(),
            });
        ToolOutcome::Idle
    }

    /// Off-grid moves keep the last preview.
    fn on_pointer_move(&mut self, index: Option<usize>, store: &mut PixelStore) -> ToolOutcome {
        match (&self.session, index) {
            (Some(session), Some(i)) => {
                Self::apply(session, i, store);
                ToolOutcome::Preview
            }
            _ => ToolOutcome::Idle,
        }
    }

    /// Releasing off the grid cancels the whole move.
    fn on_pointer_up(&mut self, index: Option<usize>, store: &mut PixelStore) -> ToolOutcome {
        let Some(session) = self.session.take() else {
            return ToolOutcome::Idle;
        };
        match index {
            Some(i) => Self::apply(&session, i, store),
            None => Self::restore(session, store),
        }
        ToolOutcome::Finished
    }

    fn on_cancel(&mut self, store: &mut PixelStore) {
        if let Some(session) = self.session.take() {
            Self::restore(session, store);
        }
    }

    fn is_active(&self) -> bool {
        self.session.is_some()
    }

    fn as_any(&self) -> &dyn std::any::Any { self }
    fn as_any_mut(&mut self) -> &mut dyn std::any::Any { self }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::color::Color;
    use crate::core::grid::GridSize;

    const RED: Option<Color> = Some(Color::new(255, 0, 0));

    fn setup() -> PixelStore {
        let mut s = PixelStore::new(GridSize::new(4, 4).unwrap());
        s.active_pixels_mut().set(5, RED);
        s.selection = Selection::from_indices([5, 6]);
        s
    }

    #[test]
    fn test_move_outside_selection_is_inert() {
        let mut s = setup();
        let mut tool = MoveTool::new();
        tool.on_pointer_down(Some(0), &mut s);
        assert!(!tool.is_active());
    }

    #[test]
    fn test_move_translates_pixels_and_selection() {
        let mut s = setup();
        let mut tool = MoveTool::new();
        tool.on_pointer_down(Some(5), &mut s);
        tool.on_pointer_move(Some(10), &mut s);
        assert_eq!(s.active_pixels().get(10), RED);
        assert_eq!(s.active_pixels().get(5), None);
        assert_eq!(s.selection, Selection::from_indices([10, 11]));
        assert_eq!(tool.on_pointer_up(Some(9), &mut s), ToolOutcome::Finished);
        assert_eq!(s.active_pixels().get(9), RED);
        assert_eq!(s.selection, Selection::from_indices([9, 10]));
    }

    #[test]
    fn test_move_up_outside_reverts() {
        let mut s = setup();
        let before = s.active_pixels();
        let mut tool = MoveTool::new();
        tool.on_pointer_down(Some(6), &mut s);
        tool.on_pointer_move(Some(3), &mut s);
        tool.on_pointer_up(None, &mut s);
        assert_eq!(s.active_pixels(), before);
        assert_eq!(s.selection, Selection::from_indices([5, 6]));
    }
}
