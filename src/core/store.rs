use log::debug;
use super::buffer::PixelBuffer;
use super::color::Color;
use super::frame::Frame;
use super::grid::{CropRegion, GridSize};
use super::layer::Layer;
use super::selection::Selection;
use super::settings::ToolSettings;
use crate::core::error::{CoreError, Result};

pub const DEFAULT_FPS: u32 = 8;
pub const MAX_FPS: u32 = 60;

/// The live editable document plus the transient editing state that tools
/// share (settings, selection, lasso path).
#[derive(Debug, Clone)]
pub struct PixelStore {
    pub size: GridSize,
    pub layers: Vec<Layer>,
    pub frames: Vec<Frame>,
    pub frames_enabled: bool,
    pub active_layer: usize,
    pub active_frame: usize,
    pub next_layer_id: u32,
    pub next_frame_id: u32,
    pub settings: ToolSettings,
    pub selection: Selection,
    pub lasso_path: Vec<usize>,
    pub background: Color,
    fps: u32,
}

impl PixelStore {
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            layers: vec![Layer::new(1, Layer::default_name(1))],
            frames: vec![Frame::new(1, Frame::default_name(1), 1, size)],
            frames_enabled: false,
            active_layer: 0,
            active_frame: 0,
            next_layer_id: 2,
            next_frame_id: 2,
            settings: ToolSettings::default(),
            selection: Selection::new(),
            lasso_path: Vec::new(),
            background: Color::WHITE,
            fps: DEFAULT_FPS,
        }
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn set_fps(&mut self, fps: u32) {
        self.fps = fps.clamp(1, MAX_FPS);
    }

    /// Frame that tools edit. Only frame 0 is edited while animation frames
    /// are disabled.
    pub fn edit_frame_index(&self) -> usize {
        if self.frames_enabled {
            self.active_frame.min(self.frames.len().saturating_sub(1))
        } else {
            0
        }
    }

    pub fn edit_layer_index(&self) -> usize {
        self.active_layer.min(self.layers.len().saturating_sub(1))
    }

    /// Normalized copy of the active layer/frame buffer.
    pub fn active_pixels(&self) -> PixelBuffer {
        let buffer = self
            .frames
            .get(self.edit_frame_index())
            .and_then(|f| f.pixels(self.edit_layer_index()));
        PixelBuffer::normalize(buffer, self.size.width, self.size.height)
    }

    pub fn active_pixels_mut(&mut self) -> &mut PixelBuffer {
        let frame_index = self.edit_frame_index();
        let layer_index = self.edit_layer_index();
        let size = self.size;
        if self.frames.is_empty() {
            // No frame exists, so the counter value cannot collide.
            let id = self.alloc_frame_id().unwrap_or(self.next_frame_id);
            self.frames.push(Frame::new(id, Frame::default_name(1), self.layers.len(), size));
        }
        self.frames[frame_index].pixels_mut(layer_index, size)
    }

    pub fn set_active_pixels(&mut self, buffer: PixelBuffer) {
        let normalized = PixelBuffer::normalize(Some(&buffer), self.size.width, self.size.height);
        *self.active_pixels_mut() = normalized;
    }

    pub fn alloc_layer_id(&mut self) -> Result<u32> {
        let id = self.next_layer_id;
        self.next_layer_id = id.checked_add(1).ok_or(CoreError::IdsExhausted)?;
        Ok(id)
    }

    pub fn alloc_frame_id(&mut self) -> Result<u32> {
        let id = self.next_frame_id;
        self.next_frame_id = id.checked_add(1).ok_or(CoreError::IdsExhausted)?;
        Ok(id)
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.lasso_path.clear();
    }

    /// Brings every frame to one buffer per layer at the current grid size
    /// and clamps the active indices.
    pub fn normalize_document(&mut self) {
        let layer_count = self.layers.len();
        for frame in &mut self.frames {
            frame.normalize(layer_count, self.size);
        }
        self.active_layer = self.edit_layer_index();
        self.active_frame = self.active_frame.min(self.frames.len().saturating_sub(1));
    }

    /// Row/col-preserving resize of every buffer.
    pub fn resize(&mut self, width: usize, height: usize) -> Result<()> {
        let to = GridSize::new(width, height)?;
        let from = self.size;
        if from == to {
            return Ok(());
        }
        for frame in &mut self.frames {
            for buffer in &mut frame.layer_pixels {
                let normalized = PixelBuffer::normalize(Some(&*buffer), from.width, from.height);
                *buffer = normalized.resized(from, to);
            }
        }
        self.size = to;
        self.normalize_document();
        self.clear_selection();
        debug!("grid resized {}x{} -> {}x{}", from.width, from.height, width, height);
        Ok(())
    }

    /// Extracts `region` from every buffer and adopts its size.
    pub fn crop(&mut self, region: &CropRegion) -> Result<()> {
        if !region.fits(self.size) {
            return Err(CoreError::NoCropRegion);
        }
        let to = GridSize::new(region.width, region.height)?;
        let from = self.size;
        for frame in &mut self.frames {
            for buffer in &mut frame.layer_pixels {
                let normalized = PixelBuffer::normalize(Some(&*buffer), from.width, from.height);
                *buffer = normalized.cropped(from, region);
            }
        }
        self.size = to;
        self.normalize_document();
        self.clear_selection();
        debug!("grid cropped to {}x{} at ({}, {})", to.width, to.height, region.min_row, region.min_col);
        Ok(())
    }

    /// Replaces the document with imported frames. Each buffer becomes the
    /// single layer of its own frame.
    pub fn adopt_import(&mut self, frames: Vec<PixelBuffer>, width: usize, height: usize) -> Result<()> {
        let size = GridSize::new(width, height)?;
        if frames.is_empty() {
            return Err(CoreError::EmptyImport);
        }
        if let Some(bad) = frames.iter().find(|b| b.len() != size.cell_count()) {
            return Err(CoreError::BufferSizeMismatch { width, height, actual: bad.len() });
        }

        self.size = size;
        self.layers = vec![Layer::new(1, Layer::default_name(1))];
        self.next_layer_id = 2;
        self.frames = frames
            .into_iter()
            .enumerate()
            .map(|(i, buffer)| Frame {
                id: i as u32 + 1,
                name: Frame::default_name(i + 1),
                visible: true,
                layer_pixels: vec![buffer],
            })
            .collect();
        self.next_frame_id = self.frames.len() as u32 + 1;
        self.frames_enabled = self.frames.len() > 1;
        self.active_layer = 0;
        self.active_frame = 0;
        self.clear_selection();
        debug!("imported {} frame(s) at {}x{}", self.frames.len(), width, height);
        Ok(())
    }
}

impl Default for PixelStore {
    fn default() -> Self {
        Self::new(GridSize::default())
    }
}
