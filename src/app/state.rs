use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ToolType {
    #[default]
    Pencil,
    Eraser,
    Fill,
    Line,
    Rectangle,
    Circle,
    RectangleSelection,
    LassoSelection,
    ColorPicker,
    Crop,
}

impl ToolType {
    pub const ALL: [ToolType; 10] = [
        ToolType::Pencil,
        ToolType::Eraser,
        ToolType::Fill,
        ToolType::Line,
        ToolType::Rectangle,
        ToolType::Circle,
        ToolType::RectangleSelection,
        ToolType::LassoSelection,
        ToolType::ColorPicker,
        ToolType::Crop,
    ];

    pub fn is_selection_tool(&self) -> bool {
        matches!(self, ToolType::RectangleSelection | ToolType::LassoSelection)
    }

    /// Right button on these erases regardless of which one is active.
    pub fn is_brush(&self) -> bool {
        matches!(self, ToolType::Pencil | ToolType::Eraser)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum PointerButton {
    #[default]
    Primary,
    Secondary,
}
