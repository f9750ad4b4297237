use rayon::prelude::*;
use crate::core::buffer::PixelBuffer;
use crate::core::frame::Frame;
use crate::core::grid::GridSize;
use crate::core::layer::Layer;
use crate::core::store::PixelStore;

pub struct Compositor;

impl Compositor {
    /// Flattens one frame. Layers are visited bottom to top; visible layers'
    /// painted cells overwrite what is below, empty cells never do.
    pub fn composite(layers: &[Layer], frame: &Frame, size: GridSize) -> PixelBuffer {
        let mut out = PixelBuffer::for_grid(size);
        for (index, layer) in layers.iter().enumerate() {
            if !layer.visible {
                continue;
            }
            let Some(pixels) = frame.pixels(index) else { continue };
            for (i, cell) in pixels.cells().iter().enumerate().take(size.cell_count()) {
                if cell.is_some() {
                    out.set(i, *cell);
                }
            }
        }
        out
    }

    /// Composite of the frame tools are editing.
    pub fn composite_active(store: &PixelStore) -> PixelBuffer {
        match store.frames.get(store.edit_frame_index()) {
            Some(frame) => Self::composite(&store.layers, frame, store.size),
            None => PixelBuffer::for_grid(store.size),
        }
    }

    /// One composite per visible frame, in timeline order. With frames
    /// disabled only the first frame is exported.
    pub fn composite_frames(store: &PixelStore) -> Vec<PixelBuffer> {
        if !store.frames_enabled {
            return store
                .frames
                .first()
                .map(|f| vec![Self::composite(&store.layers, f, store.size)])
                .unwrap_or_default();
        }
        store
            .frames
            .par_iter()
            .filter(|f| f.visible)
            .map(|f| Self::composite(&store.layers, f, store.size))
            .collect()
    }
}
