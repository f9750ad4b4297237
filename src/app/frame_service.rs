use log::debug;
use rust_i18n::t;
use crate::app::context::CanvasContext;
use crate::core::error::{CoreError, Result};
use crate::core::frame::Frame;
use crate::core::store::PixelStore;

pub struct FrameService;

impl FrameService {
    fn check(store: &PixelStore, index: usize) -> Result<()> {
        if index < store.frames.len() { Ok(()) } else { Err(CoreError::FrameNotFound(index)) }
    }

    /// Inserts an empty frame after the active one and selects it.
    pub fn add_frame(mut ctx: CanvasContext) -> Result<usize> {
        let store = &mut *ctx.store;
        store.normalize_document();
        let index = (store.active_frame + 1).min(store.frames.len());
        let id = store.alloc_frame_id()?;
        let frame = Frame::new(id, Frame::default_name(store.frames.len() + 1), store.layers.len(), store.size);
        store.frames.insert(index, frame);
        store.active_frame = index;
        store.clear_selection();
        debug!("added frame {} at {}", id, index);
        ctx.commit();
        Ok(index)
    }

    pub fn duplicate_frame(mut ctx: CanvasContext, index: usize) -> Result<usize> {
        let store = &mut *ctx.store;
        Self::check(store, index)?;
        store.normalize_document();
        let id = store.alloc_frame_id()?;
        let mut copy = store.frames[index].clone();
        copy.id = id;
        copy.name = t!("frame.copy_name", name = copy.name.as_str()).to_string();
        store.frames.insert(index + 1, copy);
        store.active_frame = index + 1;
        store.clear_selection();
        ctx.commit();
        Ok(index + 1)
    }

    pub fn delete_frame(mut ctx: CanvasContext, index: usize) -> Result<()> {
        let store = &mut *ctx.store;
        Self::check(store, index)?;
        if store.frames.len() <= 1 {
            return Err(CoreError::LastFrame);
        }
        let removed = store.frames.remove(index);
        if store.active_frame > index || store.active_frame >= store.frames.len() {
            store.active_frame = store.active_frame.saturating_sub(1);
        }
        store.clear_selection();
        debug!("deleted frame {} at {}", removed.id, index);
        ctx.commit();
        Ok(())
    }

    pub fn move_frame(mut ctx: CanvasContext, from: usize, to: usize) -> Result<()> {
        let store = &mut *ctx.store;
        Self::check(store, from)?;
        let to = to.min(store.frames.len() - 1);
        if from == to {
            return Ok(());
        }
        let active_id = store.frames.get(store.active_frame).map(|f| f.id);
        let frame = store.frames.remove(from);
        store.frames.insert(to, frame);
        if let Some(pos) = active_id.and_then(|id| store.frames.iter().position(|f| f.id == id)) {
            store.active_frame = pos;
        }
        ctx.commit();
        Ok(())
    }

    pub fn rename_frame(mut ctx: CanvasContext, index: usize, name: &str) -> Result<()> {
        Self::check(ctx.store, index)?;
        let trimmed = name.trim();
        if trimmed.is_empty() || ctx.store.frames[index].name == trimmed {
            return Ok(());
        }
        ctx.store.frames[index].name = trimmed.to_string();
        ctx.commit();
        Ok(())
    }

    pub fn toggle_visibility(mut ctx: CanvasContext, index: usize) -> Result<()> {
        Self::check(ctx.store, index)?;
        let frame = &mut ctx.store.frames[index];
        frame.visible = !frame.visible;
        ctx.commit();
        Ok(())
    }

    /// Turning frames off keeps them all; tools go back to editing frame 0.
    pub fn set_frames_enabled(store: &mut PixelStore, enabled: bool) {
        if store.frames_enabled == enabled {
            return;
        }
        store.frames_enabled = enabled;
        store.clear_selection();
        debug!("frames enabled: {}", enabled);
    }

    pub fn set_active_frame(store: &mut PixelStore, index: usize) -> Result<()> {
        Self::check(store, index)?;
        if store.active_frame != index {
            store.active_frame = index;
            store.clear_selection();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::color::Color;
    use crate::core::grid::GridSize;
    use crate::history::manager::HistoryManager;
    use crate::history::snapshot::EditableState;
    use std::time::Instant;

    fn setup() -> (PixelStore, HistoryManager<EditableState>) {
        let mut store = PixelStore::new(GridSize::new(2, 2).unwrap());
        store.frames_enabled = true;
        let history = HistoryManager::new(EditableState::capture(&store), 50);
        (store, history)
    }

    fn ctx<'a>(s: &'a mut PixelStore, h: &'a mut HistoryManager<EditableState>) -> CanvasContext<'a> {
        CanvasContext { store: s, history: h, now: Instant::now() }
    }

    #[test]
    fn test_frame_add_after_active() {
        let (mut s, mut h) = setup();
        FrameService::add_frame(ctx(&mut s, &mut h)).unwrap();
        FrameService::set_active_frame(&mut s, 0).unwrap();
        let idx = FrameService::add_frame(ctx(&mut s, &mut h)).unwrap();
        assert_eq!(idx, 1);
        assert_eq!(s.frames.len(), 3);
        assert_eq!(s.frames[1].name, "Frame 3");
        assert_eq!(s.active_frame, 1);
        assert_eq!(h.len(), 3);
    }

    #[test]
    fn test_frame_duplicate_and_delete() {
        let (mut s, mut h) = setup();
        s.active_pixels_mut().set(3, Some(Color::BLACK));
        FrameService::duplicate_frame(ctx(&mut s, &mut h), 0).unwrap();
        assert_eq!(s.frames[1].layer_pixels[0].get(3), Some(Color::BLACK));
        assert_ne!(s.frames[0].id, s.frames[1].id);

        FrameService::delete_frame(ctx(&mut s, &mut h), 1).unwrap();
        assert_eq!(s.active_frame, 0);
        assert_eq!(FrameService::delete_frame(ctx(&mut s, &mut h), 0), Err(CoreError::LastFrame));
        assert_eq!(FrameService::set_active_frame(&mut s, 3), Err(CoreError::FrameNotFound(3)));
    }

    #[test]
    fn test_frame_move_tracks_active() {
        let (mut s, mut h) = setup();
        FrameService::add_frame(ctx(&mut s, &mut h)).unwrap();
        let active_id = s.frames[1].id;
        FrameService::move_frame(ctx(&mut s, &mut h), 1, 0).unwrap();
        assert_eq!(s.frames[0].id, active_id);
        assert_eq!(s.active_frame, 0);
    }

    #[test]
    fn test_frames_disabled_edits_first_frame() {
        let (mut s, mut h) = setup();
        FrameService::add_frame(ctx(&mut s, &mut h)).unwrap();
        FrameService::set_frames_enabled(&mut s, false);
        assert_eq!(s.edit_frame_index(), 0);
        assert_eq!(s.frames.len(), 2);
    }
}
