use log::warn;
use serde::{Deserialize, Serialize};
use crate::app::state::ToolType;
use crate::core::color::Color;
use crate::core::frame::Frame;
use crate::core::grid::GridSize;
use crate::core::layer::Layer;
use crate::core::store::{PixelStore, DEFAULT_FPS};
use crate::format::error::{FormatError, Result};

pub const PROJECT_VERSION: &str = "1.0";

fn default_fps() -> u32 {
    DEFAULT_FPS
}

fn default_level() -> u8 {
    1
}

/// Saved project (`project.json`). Cells are `"#RRGGBB"` strings or `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDocument {
    pub version: String,
    pub grid_width: usize,
    pub grid_height: usize,
    #[serde(default = "default_background")]
    pub canvas_background_color: Color,
    #[serde(default)]
    pub selected_tool: ToolType,
    #[serde(default = "default_color")]
    pub current_color: Color,
    #[serde(default = "default_level")]
    pub brush_thickness: u8,
    #[serde(default = "default_opacity")]
    pub brush_opacity: u8,
    #[serde(default = "default_level")]
    pub stroke_width: u8,
    #[serde(default)]
    pub fill_shapes: bool,
    #[serde(default)]
    pub layers: Vec<Layer>,
    #[serde(default)]
    pub next_layer_id: u32,
    #[serde(default)]
    pub frames_enabled: bool,
    #[serde(default)]
    pub next_frame_id: u32,
    pub frames: Vec<Frame>,
    #[serde(default)]
    pub active_frame_index: usize,
    #[serde(default = "default_fps")]
    pub fps: u32,
    #[serde(default)]
    pub active_layer_index: usize,
}

fn default_background() -> Color {
    Color::WHITE
}

fn default_color() -> Color {
    Color::WHITE
}

fn default_opacity() -> u8 {
    10
}

impl ProjectDocument {
    pub fn capture(store: &PixelStore, selected_tool: ToolType) -> Self {
        Self {
            version: PROJECT_VERSION.to_string(),
            grid_width: store.size.width,
            grid_height: store.size.height,
            canvas_background_color: store.background,
            selected_tool,
            current_color: store.settings.color,
            brush_thickness: store.settings.brush_thickness(),
            brush_opacity: store.settings.brush_opacity(),
            stroke_width: store.settings.stroke_width(),
            fill_shapes: store.settings.fill_shapes,
            layers: store.layers.clone(),
            next_layer_id: store.next_layer_id,
            frames_enabled: store.frames_enabled,
            next_frame_id: store.next_frame_id,
            frames: store.frames.clone(),
            active_frame_index: store.active_frame,
            fps: store.fps(),
            active_layer_index: store.active_layer,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let doc: ProjectDocument = serde_json::from_str(text)?;
        if doc.version != PROJECT_VERSION {
            return Err(FormatError::UnsupportedVersion(doc.version));
        }
        Ok(doc)
    }

    /// Builds a live store. Counters are raised past every id in use and
    /// each frame is normalized to one buffer per layer at the grid size.
    /// Documents without a layer list get one default layer per buffer slot.
    pub fn into_store(self) -> Result<(PixelStore, ToolType)> {
        let size = GridSize::new(self.grid_width, self.grid_height)?;
        if self.frames.is_empty() {
            return Err(FormatError::InvalidData("project has no frames".into()));
        }

        let mut layers = self.layers;
        if layers.is_empty() {
            let slots = self.frames.iter().map(|f| f.layer_pixels.len()).max().unwrap_or(0).max(1);
            layers = (0..slots).map(|i| Layer::new(i as u32 + 1, Layer::default_name(i + 1))).collect();
        }

        let mut store = PixelStore::new(size);
        store.settings.color = self.current_color;
        store.settings.set_brush_thickness(self.brush_thickness);
        store.settings.set_brush_opacity(self.brush_opacity);
        store.settings.set_stroke_width(self.stroke_width);
        store.settings.fill_shapes = self.fill_shapes;
        store.background = self.canvas_background_color;
        store.frames_enabled = self.frames_enabled;
        store.set_fps(self.fps);

        let max_layer_id = layers.iter().map(|l| l.id).max().unwrap_or(0);
        let max_frame_id = self.frames.iter().map(|f| f.id).max().unwrap_or(0);
        if self.next_layer_id <= max_layer_id || self.next_frame_id <= max_frame_id {
            warn!("project id counters behind ids in use, raising them");
        }
        let (Some(layer_floor), Some(frame_floor)) = (max_layer_id.checked_add(1), max_frame_id.checked_add(1)) else {
            return Err(FormatError::InvalidData("layer or frame id out of range".into()));
        };
        store.next_layer_id = self.next_layer_id.max(layer_floor);
        store.next_frame_id = self.next_frame_id.max(frame_floor);

        store.layers = layers;
        store.frames = self.frames;
        store.active_layer = self.active_layer_index;
        store.active_frame = self.active_frame_index;
        store.normalize_document();
        Ok((store, self.selected_tool))
    }
}
