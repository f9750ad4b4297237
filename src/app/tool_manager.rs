use log::trace;
use std::collections::HashMap;
use crate::app::state::{PointerButton, ToolType};
use crate::core::grid::CropRegion;
use crate::core::store::PixelStore;
use crate::tools::crop::CropTool;
use crate::tools::eyedropper::EyedropperTool;
use crate::tools::fill::FillTool;
use crate::tools::lasso_select::LassoSelectTool;
use crate::tools::move_tool::MoveTool;
use crate::tools::pencil::PencilTool;
use crate::tools::rect_select::RectSelectTool;
use crate::tools::shape::{ShapeKind, ShapeTool};
use crate::tools::tool_trait::{Tool, ToolOutcome};

/// Which handler owns the running interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Tool(ToolType),
    /// Right button on pencil or eraser.
    SecondaryErase,
    MoveSelection,
}

pub struct ToolManager {
    pub active_type: ToolType,
    pub tools: HashMap<ToolType, Box<dyn Tool>>,
    pub is_drawing: bool,
    route: Option<Route>,
    secondary_eraser: Box<dyn Tool>,
    move_tool: Box<dyn Tool>,
}

impl ToolManager {
    pub fn new() -> Self {
        let mut tools: HashMap<ToolType, Box<dyn Tool>> = HashMap::new();
        tools.insert(ToolType::Pencil, Box::new(PencilTool::new(false)));
        tools.insert(ToolType::Eraser, Box::new(PencilTool::new(true)));
        tools.insert(ToolType::Fill, Box::new(FillTool::new()));
        tools.insert(ToolType::Line, Box::new(ShapeTool::new(ShapeKind::Line)));
        tools.insert(ToolType::Rectangle, Box::new(ShapeTool::new(ShapeKind::Rectangle)));
        tools.insert(ToolType::Circle, Box::new(ShapeTool::new(ShapeKind::Circle)));
        tools.insert(ToolType::RectangleSelection, Box::new(RectSelectTool::new()));
        tools.insert(ToolType::LassoSelection, Box::new(LassoSelectTool::new()));
        tools.insert(ToolType::ColorPicker, Box::new(EyedropperTool::new()));
        tools.insert(ToolType::Crop, Box::new(CropTool::new()));

        Self {
            active_type: ToolType::Pencil,
            tools,
            is_drawing: false,
            route: None,
            secondary_eraser: Box::new(PencilTool::new(true)),
            move_tool: Box::new(MoveTool::new()),
        }
    }

    pub fn route(&self) -> Option<Route> {
        self.route
    }

    /// Switches tools, abandoning any running interaction. Leaving the
    /// selection tools drops the selection and lasso path, leaving crop
    /// drops its proposal.
    pub fn set_tool(&mut self, tool_type: ToolType, store: &mut PixelStore) {
        if self.active_type == tool_type { return; }
        self.cancel(store);
        if self.active_type == ToolType::Crop {
            self.clear_crop_proposal();
        }
        trace!("tool {:?} -> {:?}", self.active_type, tool_type);
        self.active_type = tool_type;
        if !tool_type.is_selection_tool() {
            store.clear_selection();
        }
    }

    fn handler_mut(&mut self, route: Route) -> Option<&mut Box<dyn Tool>> {
        match route {
            Route::Tool(t) => self.tools.get_mut(&t),
            Route::SecondaryErase => Some(&mut self.secondary_eraser),
            Route::MoveSelection => Some(&mut self.move_tool),
        }
    }

    pub fn handle_pointer_down(&mut self, index: Option<usize>, button: PointerButton, store: &mut PixelStore) -> ToolOutcome {
        let primary = button == PointerButton::Primary;
        let route = if primary && !store.selection.is_empty() && index.is_some_and(|i| store.selection.contains(i)) {
            Route::MoveSelection
        } else {
            if primary && !store.selection.is_empty() {
                store.clear_selection();
            }
            if !primary && self.active_type.is_brush() {
                Route::SecondaryErase
            } else {
                Route::Tool(self.active_type)
            }
        };

        trace!("pointer down at {:?} routed to {:?}", index, route);
        self.is_drawing = true;
        self.route = Some(route);
        match self.handler_mut(route) {
            Some(tool) => tool.on_pointer_down(index, store),
            None => ToolOutcome::Idle,
        }
    }

    pub fn handle_pointer_move(&mut self, index: Option<usize>, store: &mut PixelStore) -> ToolOutcome {
        if !self.is_drawing { return ToolOutcome::Idle; }
        let Some(route) = self.route else { return ToolOutcome::Idle };
        match self.handler_mut(route) {
            Some(tool) => tool.on_pointer_move(index, store),
            None => ToolOutcome::Idle,
        }
    }

    pub fn handle_pointer_up(&mut self, index: Option<usize>, store: &mut PixelStore) -> ToolOutcome {
        if !self.is_drawing { return ToolOutcome::Idle; }
        self.is_drawing = false;
        let Some(route) = self.route.take() else { return ToolOutcome::Idle };
        trace!("pointer up at {:?} on {:?}", index, route);
        match self.handler_mut(route) {
            Some(tool) => tool.on_pointer_up(index, store),
            None => ToolOutcome::Idle,
        }
    }

    pub fn cancel(&mut self, store: &mut PixelStore) {
        self.is_drawing = false;
        if let Some(route) = self.route.take() {
            trace!("cancel {:?}", route);
            if let Some(tool) = self.handler_mut(route) {
                tool.on_cancel(store);
            }
        }
    }

    /// Latest region dragged with the crop tool.
    pub fn crop_proposal(&self) -> Option<CropRegion> {
        let tool = self.tools.get(&ToolType::Crop)?;
        tool.as_any().downcast_ref::<CropTool>().and_then(|t| t.proposal)
    }

    pub fn clear_crop_proposal(&mut self) {
        if let Some(tool) = self.tools.get_mut(&ToolType::Crop) {
            if let Some(crop) = tool.as_any_mut().downcast_mut::<CropTool>() {
                crop.proposal = None;
            }
        }
    }
}

impl Default for ToolManager {
    fn default() -> Self {
        Self::new()
    }
}
