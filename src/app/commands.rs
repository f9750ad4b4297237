use crate::app::state::ToolType;
use crate::core::buffer::PixelBuffer;
use crate::core::color::Color;

#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    SetTool(ToolType),
    SetColor(Color),
    SetBrushThickness(u8),
    SetBrushOpacity(u8),
    SetStrokeWidth(u8),
    SetFillShapes(bool),

    AddLayer,
    DeleteLayer(usize),
    DuplicateLayer(usize),
    MoveLayer(usize, usize),
    RenameLayer(usize, String),
    ToggleLayerVisibility(usize),
    SetActiveLayer(usize),

    AddFrame,
    DeleteFrame(usize),
    DuplicateFrame(usize),
    MoveFrame(usize, usize),
    RenameFrame(usize, String),
    ToggleFrameVisibility(usize),
    SetActiveFrame(usize),
    SetFramesEnabled(bool),
    SetFps(u32),

    DeleteSelection,
    SplitSelectionToLayer,
    CopySelectionToLayer,
    SplitSelectionToFrame,
    CopySelectionToFrame,
    ClearSelection,

    ResizeGrid(usize, usize),
    ApplyCrop,
    SetBackground(Color),

    Import { frames: Vec<PixelBuffer>, width: usize, height: usize },

    Undo,
    Redo,
    CancelCurrentTool,
}
