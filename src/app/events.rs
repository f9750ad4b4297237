use crate::app::state::PointerButton;
use crate::core::error::CoreError;

/// Pointer input in cell space. `index` is `None` when the pointer is off the
/// grid; out-of-range indices are treated the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    PointerDown { index: Option<usize>, button: PointerButton },
    PointerMove { index: Option<usize> },
    PointerUp { index: Option<usize> },
    CancelTool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEffect {
    None,
    SettingsChanged,
    RedrawCanvas,
    /// Something was written to history; implies a redraw.
    ToolCommitted,
    Error(CoreError),
}

impl EngineEffect {
    fn rank(&self) -> u8 {
        match self {
            EngineEffect::None => 0,
            EngineEffect::SettingsChanged => 1,
            EngineEffect::RedrawCanvas => 2,
            EngineEffect::ToolCommitted => 3,
            EngineEffect::Error(_) => 4,
        }
    }

    pub fn merge(self, other: EngineEffect) -> EngineEffect {
        if other.rank() > self.rank() { other } else { self }
    }

    pub fn needs_redraw(&self) -> bool {
        matches!(self, EngineEffect::RedrawCanvas | EngineEffect::ToolCommitted)
    }
}
