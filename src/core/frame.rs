use rust_i18n::t;
use serde::{Deserialize, Serialize};
use super::buffer::PixelBuffer;
use super::grid::GridSize;

/// One animation frame: a buffer for every layer, in layer order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    pub id: u32,
    pub name: String,
    #[serde(default = "default_visible")]
    pub visible: bool,
    pub layer_pixels: Vec<PixelBuffer>,
}

fn default_visible() -> bool {
    true
}

impl Frame {
    pub fn new(id: u32, name: impl Into<String>, layer_count: usize, size: GridSize) -> Self {
        Self {
            id,
            name: name.into(),
            visible: true,
            layer_pixels: (0..layer_count).map(|_| PixelBuffer::for_grid(size)).collect(),
        }
    }

    pub fn default_name(position: usize) -> String {
        t!("frame.default_name", num = position).to_string()
    }

    pub fn pixels(&self, layer: usize) -> Option<&PixelBuffer> {
        self.layer_pixels.get(layer)
    }

    /// Buffer for `layer`, grown and normalized on access so a frame loaded
    /// with a missing or mis-sized buffer heals itself.
    pub fn pixels_mut(&mut self, layer: usize, size: GridSize) -> &mut PixelBuffer {
        if self.layer_pixels.len() <= layer {
            self.layer_pixels.resize_with(layer + 1, || PixelBuffer::for_grid(size));
        }
        let buffer = &mut self.layer_pixels[layer];
        buffer.normalize_in_place(size);
        buffer
    }

    /// Makes `layer_pixels` exactly `layer_count` buffers of `size` cells.
    pub fn normalize(&mut self, layer_count: usize, size: GridSize) {
        self.layer_pixels.resize_with(layer_count, || PixelBuffer::for_grid(size));
        for buffer in &mut self.layer_pixels {
            buffer.normalize_in_place(size);
        }
    }
}
