use serde::{Deserialize, Serialize};
use super::color::Color;

pub const MIN_LEVEL: u8 = 1;
pub const MAX_LEVEL: u8 = 10;

fn clamp_level(value: u8) -> u8 {
    value.clamp(MIN_LEVEL, MAX_LEVEL)
}

/// Per-pointer-event inputs supplied by the host toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ToolSettings {
    pub color: Color,
    brush_thickness: u8,
    brush_opacity: u8,
    stroke_width: u8,
    pub fill_shapes: bool,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            brush_thickness: 1,
            brush_opacity: MAX_LEVEL,
            stroke_width: 1,
            fill_shapes: false,
        }
    }
}

impl ToolSettings {
    pub fn brush_thickness(&self) -> u8 {
        clamp_level(self.brush_thickness)
    }

    pub fn brush_opacity(&self) -> u8 {
        clamp_level(self.brush_opacity)
    }

    pub fn stroke_width(&self) -> u8 {
        clamp_level(self.stroke_width)
    }

    pub fn set_brush_thickness(&mut self, value: u8) {
        self.brush_thickness = clamp_level(value);
    }

    pub fn set_brush_opacity(&mut self, value: u8) {
        self.brush_opacity = clamp_level(value);
    }

    pub fn set_stroke_width(&mut self, value: u8) {
        self.stroke_width = clamp_level(value);
    }
}
