use std::time::Instant;
use log::debug;
use crate::app::commands::AppCommand;
use crate::app::engine::Engine;
use crate::app::events::EngineEffect;
use crate::app::frame_service::FrameService;
use crate::app::layer_service::LayerService;
use crate::app::selection_service::SelectionService;
use crate::core::error::Result;

pub struct CommandHandler;

fn effect_of<T>(result: Result<T>, ok: EngineEffect) -> EngineEffect {
    match result {
        Ok(_) => ok,
        Err(e) => {
            debug!("command rejected: {}", e);
            EngineEffect::Error(e)
        }
    }
}

impl CommandHandler {
    pub fn execute(engine: &mut Engine, cmd: AppCommand, now: Instant) -> EngineEffect {
        match cmd {
            AppCommand::SetTool(tool) => {
                let (store, tools) = engine.parts_mut();
                tools.set_tool(tool, store);
                EngineEffect::RedrawCanvas
            }
            AppCommand::SetColor(color) => {
                engine.settings_mut().color = color;
                EngineEffect::SettingsChanged
            }
            AppCommand::SetBrushThickness(v) => {
                engine.settings_mut().set_brush_thickness(v);
                EngineEffect::SettingsChanged
            }
            AppCommand::SetBrushOpacity(v) => {
                engine.settings_mut().set_brush_opacity(v);
                EngineEffect::SettingsChanged
            }
            AppCommand::SetStrokeWidth(v) => {
                engine.settings_mut().set_stroke_width(v);
                EngineEffect::SettingsChanged
            }
            AppCommand::SetFillShapes(filled) => {
                engine.settings_mut().fill_shapes = filled;
                EngineEffect::SettingsChanged
            }

            AppCommand::AddLayer => {
                engine.begin_edit(now);
                effect_of(LayerService::add_layer(engine.context(now)), EngineEffect::ToolCommitted)
            }
            AppCommand::DeleteLayer(i) => {
                engine.begin_edit(now);
                effect_of(LayerService::delete_layer(engine.context(now), i), EngineEffect::ToolCommitted)
            }
            AppCommand::DuplicateLayer(i) => {
                engine.begin_edit(now);
                effect_of(LayerService::duplicate_layer(engine.context(now), i), EngineEffect::ToolCommitted)
            }
            AppCommand::MoveLayer(from, to) => {
                engine.begin_edit(now);
                effect_of(LayerService::move_layer(engine.context(now), from, to), EngineEffect::ToolCommitted)
            }
            AppCommand::RenameLayer(i, name) => {
                engine.begin_edit(now);
                effect_of(LayerService::rename_layer(engine.context(now), i, &name), EngineEffect::ToolCommitted)
            }
            AppCommand::ToggleLayerVisibility(i) => {
                engine.begin_edit(now);
                effect_of(LayerService::toggle_visibility(engine.context(now), i), EngineEffect::ToolCommitted)
            }
            AppCommand::SetActiveLayer(i) => {
                engine.begin_edit(now);
                effect_of(LayerService::set_active_layer(engine.store_mut(), i), EngineEffect::RedrawCanvas)
            }

            AppCommand::AddFrame => {
                engine.begin_edit(now);
                effect_of(FrameService::add_frame(engine.context(now)), EngineEffect::ToolCommitted)
            }
            AppCommand::DeleteFrame(i) => {
                engine.begin_edit(now);
                effect_of(FrameService::delete_frame(engine.context(now), i), EngineEffect::ToolCommitted)
            }
            AppCommand::DuplicateFrame(i) => {
                engine.begin_edit(now);
                effect_of(FrameService::duplicate_frame(engine.context(now), i), EngineEffect::ToolCommitted)
            }
            AppCommand::MoveFrame(from, to) => {
                engine.begin_edit(now);
                effect_of(FrameService::move_frame(engine.context(now), from, to), EngineEffect::ToolCommitted)
            }
            AppCommand::RenameFrame(i, name) => {
                engine.begin_edit(now);
                effect_of(FrameService::rename_frame(engine.context(now), i, &name), EngineEffect::ToolCommitted)
            }
            AppCommand::ToggleFrameVisibility(i) => {
                engine.begin_edit(now);
                effect_of(FrameService::toggle_visibility(engine.context(now), i), EngineEffect::ToolCommitted)
            }
            AppCommand::SetActiveFrame(i) => {
                engine.begin_edit(now);
                effect_of(FrameService::set_active_frame(engine.store_mut(), i), EngineEffect::RedrawCanvas)
            }
            AppCommand::SetFramesEnabled(enabled) => {
                engine.begin_edit(now);
                FrameService::set_frames_enabled(engine.store_mut(), enabled);
                EngineEffect::RedrawCanvas
            }
            AppCommand::SetFps(fps) => {
                engine.store_mut().set_fps(fps);
                EngineEffect::SettingsChanged
            }

            AppCommand::DeleteSelection => {
                engine.begin_edit(now);
                effect_of(SelectionService::delete_selection(engine.context(now)), EngineEffect::ToolCommitted)
            }
            AppCommand::SplitSelectionToLayer => {
                engine.begin_edit(now);
                effect_of(SelectionService::split_to_layer(engine.context(now)), EngineEffect::ToolCommitted)
            }
            AppCommand::CopySelectionToLayer => {
                engine.begin_edit(now);
                effect_of(SelectionService::copy_to_layer(engine.context(now)), EngineEffect::ToolCommitted)
            }
            AppCommand::SplitSelectionToFrame => {
                engine.begin_edit(now);
                effect_of(SelectionService::split_to_frame(engine.context(now)), EngineEffect::ToolCommitted)
            }
            AppCommand::CopySelectionToFrame => {
                engine.begin_edit(now);
                effect_of(SelectionService::copy_to_frame(engine.context(now)), EngineEffect::ToolCommitted)
            }
            AppCommand::ClearSelection => {
                engine.begin_edit(now);
                engine.store_mut().clear_selection();
                EngineEffect::RedrawCanvas
            }

            AppCommand::ResizeGrid(w, h) => effect_of(engine.resize_grid(w, h, now), EngineEffect::ToolCommitted),
            AppCommand::ApplyCrop => effect_of(engine.apply_crop(now), EngineEffect::ToolCommitted),
            AppCommand::SetBackground(color) => {
                engine.store_mut().background = color;
                EngineEffect::RedrawCanvas
            }
            AppCommand::Import { frames, width, height } => {
                effect_of(engine.import_frames(frames, width, height, now), EngineEffect::ToolCommitted)
            }

            AppCommand::Undo => {
                if engine.undo_at(now) { EngineEffect::RedrawCanvas } else { EngineEffect::None }
            }
            AppCommand::Redo => {
                if engine.redo_at(now) { EngineEffect::RedrawCanvas } else { EngineEffect::None }
            }
            AppCommand::CancelCurrentTool => {
                let (store, tools) = engine.parts_mut();
                if tools.is_drawing {
                    tools.cancel(store);
                    EngineEffect::RedrawCanvas
                } else {
                    EngineEffect::None
                }
            }
        }
    }
}
