use log::debug;
use crate::app::context::CanvasContext;
use crate::core::buffer::PixelBuffer;
use crate::core::error::{CoreError, Result};
use crate::core::frame::Frame;
use crate::core::layer::Layer;
use crate::core::store::PixelStore;

/// Context actions on the live selection of the active layer/frame.
pub struct SelectionService;

impl SelectionService {
    fn require_selection(store: &PixelStore) -> Result<()> {
        if store.selection.is_empty() { Err(CoreError::EmptySelection) } else { Ok(()) }
    }

    /// Selected cells of the active buffer on an otherwise empty buffer.
    fn extract(store: &PixelStore) -> PixelBuffer {
        let source = store.active_pixels();
        let mut out = PixelBuffer::for_grid(store.size);
        for i in store.selection.iter() {
            out.set(i, source.get(i));
        }
        out
    }

    fn vacate(store: &mut PixelStore) {
        let selected: Vec<usize> = store.selection.iter().collect();
        let pixels = store.active_pixels_mut();
        for i in selected {
            pixels.set(i, None);
        }
    }

    pub fn delete_selection(mut ctx: CanvasContext) -> Result<()> {
        Self::require_selection(ctx.store)?;
        Self::vacate(ctx.store);
        ctx.store.clear_selection();
        ctx.commit();
        Ok(())
    }

    pub fn split_to_layer(ctx: CanvasContext) -> Result<usize> {
        Self::to_layer(ctx, true)
    }

    pub fn copy_to_layer(ctx: CanvasContext) -> Result<usize> {
        Self::to_layer(ctx, false)
    }

    pub fn split_to_frame(ctx: CanvasContext) -> Result<usize> {
        Self::to_frame(ctx, true)
    }

    pub fn copy_to_frame(ctx: CanvasContext) -> Result<usize> {
        Self::to_frame(ctx, false)
    }

    /// New top layer holding the selected cells in the edited frame and an
    /// empty buffer everywhere else.
    fn to_layer(mut ctx: CanvasContext, remove: bool) -> Result<usize> {
        let store = &mut *ctx.store;
        Self::require_selection(store)?;
        store.normalize_document();
        let id = store.alloc_layer_id()?;
        let extracted = Self::extract(store);
        if remove {
            Self::vacate(store);
        }

        let index = store.layers.len();
        store.layers.push(Layer::new(id, Layer::default_name(index + 1)));
        let edit_frame = store.edit_frame_index();
        let size = store.size;
        for (i, frame) in store.frames.iter_mut().enumerate() {
            if i == edit_frame {
                frame.layer_pixels.push(extracted.clone());
            } else {
                frame.layer_pixels.push(PixelBuffer::for_grid(size));
            }
        }
        store.active_layer = index;
        if remove {
            store.clear_selection();
        }
        debug!("selection moved to layer {} (split: {})", id, remove);
        ctx.commit();
        Ok(index)
    }

    /// New frame after the edited one: a copy of it where the active layer
    /// holds only the selected cells.
    fn to_frame(mut ctx: CanvasContext, remove: bool) -> Result<usize> {
        let store = &mut *ctx.store;
        Self::require_selection(store)?;
        store.normalize_document();
        let extracted = Self::extract(store);
        let edit_frame = store.edit_frame_index();
        let layer = store.edit_layer_index();

        let id = store.alloc_frame_id()?;
        let mut frame = Frame::new(id, Frame::default_name(store.frames.len() + 1), 0, store.size);
        frame.layer_pixels = store.frames[edit_frame].layer_pixels.clone();
        frame.layer_pixels[layer] = extracted;

        if remove {
            Self::vacate(store);
        }
        store.frames.insert(edit_frame + 1, frame);
        store.active_frame = edit_frame + 1;
        if remove {
            store.clear_selection();
        }
        debug!("selection moved to frame {} (split: {})", id, remove);
        ctx.commit();
        Ok(edit_frame + 1)
    }
}
