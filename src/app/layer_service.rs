use log::debug;
use rust_i18n::t;
use crate::app::context::CanvasContext;
use crate::core::buffer::PixelBuffer;
use crate::core::error::{CoreError, Result};
use crate::core::layer::Layer;
use crate::core::store::PixelStore;

/// Structural layer edits. Every frame keeps exactly one buffer per layer,
/// so each operation updates `layer_pixels` of all frames in lockstep.
pub struct LayerService;

impl LayerService {
    fn check(store: &PixelStore, index: usize) -> Result<()> {
        if index < store.layers.len() { Ok(()) } else { Err(CoreError::LayerNotFound(index)) }
    }

    pub fn add_layer(mut ctx: CanvasContext) -> Result<usize> {
        let store = &mut *ctx.store;
        store.normalize_document();
        let index = store.layers.len();
        let id = store.alloc_layer_id()?;
        store.layers.push(Layer::new(id, Layer::default_name(index + 1)));
        let size = store.size;
        for frame in &mut store.frames {
            frame.layer_pixels.push(PixelBuffer::for_grid(size));
        }
        store.active_layer = index;
        debug!("added layer {} at {}", id, index);
        ctx.commit();
        Ok(index)
    }

    pub fn delete_layer(mut ctx: CanvasContext, index: usize) -> Result<()> {
        let store = &mut *ctx.store;
        Self::check(store, index)?;
        if store.layers.len() <= 1 {
            return Err(CoreError::LastLayer);
        }
        store.normalize_document();
        let removed = store.layers.remove(index);
        for frame in &mut store.frames {
            frame.layer_pixels.remove(index);
        }
        if store.active_layer > index || store.active_layer >= store.layers.len() {
            store.active_layer = store.active_layer.saturating_sub(1);
        }
        store.clear_selection();
        debug!("deleted layer {} at {}", removed.id, index);
        ctx.commit();
        Ok(())
    }

    /// Copies the layer and its pixels in every frame, right above the source.
    pub fn duplicate_layer(mut ctx: CanvasContext, index: usize) -> Result<usize> {
        let store = &mut *ctx.store;
        Self::check(store, index)?;
        store.normalize_document();
        let id = store.alloc_layer_id()?;
        let source = &store.layers[index];
        let copy = Layer {
            id,
            name: t!("layer.copy_name", name = source.name.as_str()).to_string(),
            visible: source.visible,
        };
        store.layers.insert(index + 1, copy);
        for frame in &mut store.frames {
            let pixels = frame.layer_pixels[index].clone();
            frame.layer_pixels.insert(index + 1, pixels);
        }
        store.active_layer = index + 1;
        ctx.commit();
        Ok(index + 1)
    }

    /// Moves the layer at `from` to position `to`, clamped to the stack.
    pub fn move_layer(mut ctx: CanvasContext, from: usize, to: usize) -> Result<()> {
        let store = &mut *ctx.store;
        Self::check(store, from)?;
        let to = to.min(store.layers.len() - 1);
        if from == to {
            return Ok(());
        }
        store.normalize_document();
        let active_id = store.layers.get(store.active_layer).map(|l| l.id);
        let layer = store.layers.remove(from);
        store.layers.insert(to, layer);
        for frame in &mut store.frames {
            let pixels = frame.layer_pixels.remove(from);
            frame.layer_pixels.insert(to, pixels);
        }
        if let Some(pos) = active_id.and_then(|id| store.layers.iter().position(|l| l.id == id)) {
            store.active_layer = pos;
        }
        ctx.commit();
        Ok(())
    }

    pub fn rename_layer(mut ctx: CanvasContext, index: usize, name: &str) -> Result<()> {
        Self::check(ctx.store, index)?;
        let trimmed = name.trim();
        if trimmed.is_empty() || ctx.store.layers[index].name == trimmed {
            return Ok(());
        }
        ctx.store.layers[index].name = trimmed.to_string();
        ctx.commit();
        Ok(())
    }

    pub fn toggle_visibility(mut ctx: CanvasContext, index: usize) -> Result<()> {
        Self::check(ctx.store, index)?;
        let layer = &mut ctx.store.layers[index];
        layer.visible = !layer.visible;
        ctx.commit();
        Ok(())
    }

    pub fn set_active_layer(store: &mut PixelStore, index: usize) -> Result<()> {
        Self::check(store, index)?;
        store.active_layer = index;
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
        let store = PixelStore::new(GridSize::new(2, 2).unwrap());
        let history = HistoryManager::new(EditableState::capture(&store), 50);
        (store, history)
    }

    fn ctx<'a>(s: &'a mut PixelStore, h: &'a mut HistoryManager<EditableState>) -> CanvasContext<'a> {
        CanvasContext { store: s, history: h, now: Instant::now() }
    }

    #[test]
    fn test_layer_add_delete() {
        let (mut s, mut h) = setup();
        s.frames_enabled = true;
        s.frames.push(crate::core::frame::Frame::new(9, "Frame 2", 1, s.size));
        let idx = LayerService::add_layer(ctx(&mut s, &mut h)).unwrap();
        assert_eq!(idx, 1);
        assert_eq!(s.layers[1].name, "Layer 2");
        assert!(s.frames.iter().all(|f| f.layer_pixels.len() == 2));
        assert_eq!(h.len(), 2);

        LayerService::delete_layer(ctx(&mut s, &mut h), 0).unwrap();
        assert_eq!(s.layers.len(), 1);
        assert_eq!(s.active_layer, 0);
        assert_eq!(LayerService::delete_layer(ctx(&mut s, &mut h), 0), Err(CoreError::LastLayer));
        assert_eq!(LayerService::delete_layer(ctx(&mut s, &mut h), 4), Err(CoreError::LayerNotFound(4)));
    }

    #[test]
    fn test_layer_duplicate_copies_pixels() {
        let (mut s, mut h) = setup();
        s.active_pixels_mut().set(1, Some(Color::BLACK));
        LayerService::duplicate_layer(ctx(&mut s, &mut h), 0).unwrap();
        assert_eq!(s.frames[0].layer_pixels[1].get(1), Some(Color::BLACK));
        assert_ne!(s.layers[0].id, s.layers[1].id);
        assert_eq!(s.active_layer, 1);
    }

    #[test]
    fn test_layer_move_keeps_buffers_aligned() {
        let (mut s, mut h) = setup();
        LayerService::add_layer(ctx(&mut s, &mut h)).unwrap();
        s.frames[0].layer_pixels[1].set(0, Some(Color::WHITE));
        let moved_id = s.layers[1].id;
        LayerService::move_layer(ctx(&mut s, &mut h), 1, 0).unwrap();
        assert_eq!(s.layers[0].id, moved_id);
        assert_eq!(s.frames[0].layer_pixels[0].get(0), Some(Color::WHITE));
        assert_eq!(s.active_layer, 0);
    }

    #[test]
    fn test_layer_rename_and_visibility() {
        let (mut s, mut h) = setup();
        LayerService::rename_layer(ctx(&mut s, &mut h), 0, "  Ink  ").unwrap();
        assert_eq!(s.layers[0].name, "Ink");
        LayerService::rename_layer(ctx(&mut s, &mut h), 0, "   ").unwrap();
        assert_eq!(s.layers[0].name, "Ink");
        LayerService::toggle_visibility(ctx(&mut s, &mut h), 0).unwrap();
        assert!(!s.layers[0].visible);
        assert_eq!(h.len(), 3);
    }
}
