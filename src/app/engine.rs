use std::collections::VecDeque;
use std::time::Instant;
use log::{debug, warn};
use crate::app::command_handler::CommandHandler;
use crate::app::commands::AppCommand;
use crate::app::config::EngineConfig;
use crate::app::context::CanvasContext;
use crate::app::events::{EngineEffect, InputEvent};
use crate::app::state::{PointerButton, ToolType};
use crate::app::tool_manager::ToolManager;
use crate::core::buffer::PixelBuffer;
use crate::core::error::{CoreError, Result};
use crate::core::grid::CropRegion;
use crate::core::settings::ToolSettings;
use crate::core::store::PixelStore;
use crate::format::project::ProjectDocument;
use crate::history::manager::HistoryManager;
use crate::history::snapshot::EditableState;
use crate::render::compositor::Compositor;
use crate::tools::tool_trait::ToolOutcome;

/// Snapshot taken when a drag ended, written to history once `due` passes.
#[derive(Debug, Clone)]
struct PendingRecord {
    state: EditableState,
    due: Instant,
}

pub struct Engine {
    store: PixelStore,
    history: HistoryManager<EditableState>,
    tool_manager: ToolManager,
    config: EngineConfig,
    pending: VecDeque<PendingRecord>,
}

impl Engine {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        let mut store = PixelStore::new(config.grid_size());
        store.frames_enabled = config.frames_enabled;
        let history = HistoryManager::new(EditableState::capture(&store), config.history_capacity)
            .with_settle(config.replay_settle());
        Self {
            store,
            history,
            tool_manager: ToolManager::new(),
            config,
            pending: VecDeque::new(),
        }
    }

    pub fn store(&self) -> &PixelStore { &self.store }
    pub fn history(&self) -> &HistoryManager<EditableState> { &self.history }
    pub fn tool_manager(&self) -> &ToolManager { &self.tool_manager }
    pub fn config(&self) -> &EngineConfig { &self.config }
    pub fn active_tool(&self) -> ToolType { self.tool_manager.active_type }

    pub fn settings_mut(&mut self) -> &mut ToolSettings {
        &mut self.store.settings
    }

    pub(crate) fn store_mut(&mut self) -> &mut PixelStore {
        &mut self.store
    }

    pub(crate) fn parts_mut(&mut self) -> (&mut PixelStore, &mut ToolManager) {
        (&mut self.store, &mut self.tool_manager)
    }

    pub(crate) fn context(&mut self, now: Instant) -> CanvasContext<'_> {
        CanvasContext {
            store: &mut self.store,
            history: &mut self.history,
            now,
        }
    }

    pub fn can_undo(&self) -> bool { self.history.can_undo() }
    pub fn can_redo(&self) -> bool { self.history.can_redo() }
    pub fn pending_commits(&self) -> usize { self.pending.len() }

    pub fn handle_input(&mut self, event: InputEvent) -> EngineEffect {
        self.handle_input_at(event, Instant::now())
    }

    pub fn handle_input_at(&mut self, event: InputEvent, now: Instant) -> EngineEffect {
        match event {
            InputEvent::PointerDown { index, button } => self.pointer_down(self.on_grid(index), button, now),
            InputEvent::PointerMove { index } => {
                let index = self.on_grid(index);
                let outcome = self.tool_manager.handle_pointer_move(index, &mut self.store);
                Self::outcome_effect(outcome)
            }
            InputEvent::PointerUp { index } => self.pointer_up(self.on_grid(index), now),
            InputEvent::CancelTool => {
                if !self.tool_manager.is_drawing {
                    return EngineEffect::None;
                }
                self.tool_manager.cancel(&mut self.store);
                EngineEffect::RedrawCanvas
            }
        }
    }

    /// Indices past the end of the grid count as off-canvas.
    fn on_grid(&self, index: Option<usize>) -> Option<usize> {
        match index {
            Some(i) if !self.store.size.contains_index(i) => {
                warn!("pointer index {} outside {}x{} grid", i, self.store.size.width, self.store.size.height);
                None
            }
            other => other,
        }
    }

    fn outcome_effect(outcome: ToolOutcome) -> EngineEffect {
        match outcome {
            ToolOutcome::Idle => EngineEffect::None,
            ToolOutcome::Preview | ToolOutcome::Finished => EngineEffect::RedrawCanvas,
            ToolOutcome::SettingsChanged => EngineEffect::SettingsChanged,
        }
    }

    fn pointer_down(&mut self, index: Option<usize>, button: PointerButton, now: Instant) -> EngineEffect {
        let mut effect = self.flush_pending(now);
        self.history.end_replay();

        // A down without a matching up finishes the previous drag where the
        // new one starts.
        if self.tool_manager.is_drawing {
            effect = effect.merge(self.pointer_up(index, now));
            effect = effect.merge(self.flush_pending(now));
        }

        let outcome = self.tool_manager.handle_pointer_down(index, button, &mut self.store);
        if outcome.is_finished() {
            self.tool_manager.handle_pointer_up(index, &mut self.store);
            if self.context(now).commit() {
                return effect.merge(EngineEffect::ToolCommitted);
            }
        }
        effect.merge(Self::outcome_effect(outcome))
    }

    fn pointer_up(&mut self, index: Option<usize>, now: Instant) -> EngineEffect {
        let outcome = self.tool_manager.handle_pointer_up(index, &mut self.store);
        if outcome.is_finished() {
            self.pending.push_back(PendingRecord {
                state: EditableState::capture(&self.store),
                due: now + self.config.commit_delay(),
            });
        }
        Self::outcome_effect(outcome)
    }

    /// Writes deferred drag commits whose delay has elapsed.
    pub fn tick(&mut self, now: Instant) -> EngineEffect {
        let mut committed = false;
        while self.pending.front().is_some_and(|p| p.due <= now) {
            if let Some(record) = self.pending.pop_front() {
                committed |= self.commit_state(record.state, now);
            }
        }
        if committed { EngineEffect::ToolCommitted } else { EngineEffect::None }
    }

    /// Writes every deferred commit regardless of its delay.
    pub fn flush_pending(&mut self, now: Instant) -> EngineEffect {
        let mut committed = false;
        while let Some(record) = self.pending.pop_front() {
            committed |= self.commit_state(record.state, now);
        }
        if committed { EngineEffect::ToolCommitted } else { EngineEffect::None }
    }

    fn commit_state(&mut self, state: EditableState, now: Instant) -> bool {
        if *self.history.current() == state {
            return false;
        }
        self.history.record_at(&state, now)
    }

    /// Records the live document as a host-driven history step. Ignored
    /// while an undo or redo is settling.
    pub fn record_history_at(&mut self, now: Instant) -> bool {
        let state = EditableState::capture(&self.store);
        self.commit_state(state, now)
    }

    /// Settles everything in flight before a document-level edit: deferred
    /// commits land first and a running drag is abandoned.
    pub(crate) fn begin_edit(&mut self, now: Instant) {
        self.flush_pending(now);
        self.history.end_replay();
        if self.tool_manager.is_drawing {
            self.tool_manager.cancel(&mut self.store);
        }
    }

    pub fn undo(&mut self) -> bool {
        self.undo_at(Instant::now())
    }

    pub fn undo_at(&mut self, now: Instant) -> bool {
        self.prepare_replay(now);
        match self.history.undo_at(now) {
            Some(state) => {
                state.restore(&mut self.store);
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        self.redo_at(Instant::now())
    }

    pub fn redo_at(&mut self, now: Instant) -> bool {
        self.prepare_replay(now);
        match self.history.redo_at(now) {
            Some(state) => {
                state.restore(&mut self.store);
                true
            }
            None => false,
        }
    }

    /// A crop proposal is dropped since the restored grid may not contain it.
    fn prepare_replay(&mut self, now: Instant) {
        self.flush_pending(now);
        if self.tool_manager.is_drawing {
            self.tool_manager.cancel(&mut self.store);
        }
        self.tool_manager.clear_crop_proposal();
    }

    pub fn execute(&mut self, cmd: AppCommand) -> EngineEffect {
        self.execute_at(cmd, Instant::now())
    }

    pub fn execute_at(&mut self, cmd: AppCommand, now: Instant) -> EngineEffect {
        CommandHandler::execute(self, cmd, now)
    }

    pub fn crop_proposal(&self) -> Option<CropRegion> {
        self.tool_manager.crop_proposal()
    }

    pub fn apply_crop(&mut self, now: Instant) -> Result<()> {
        let region = self
            .crop_proposal()
            .filter(|r| r.fits(self.store.size))
            .ok_or(CoreError::NoCropRegion)?;
        self.begin_edit(now);
        self.store.crop(&region)?;
        self.tool_manager.clear_crop_proposal();
        self.context(now).commit();
        Ok(())
    }

    pub fn resize_grid(&mut self, width: usize, height: usize, now: Instant) -> Result<()> {
        self.begin_edit(now);
        self.store.resize(width, height)?;
        self.tool_manager.clear_crop_proposal();
        self.context(now).commit();
        Ok(())
    }

    pub fn import_frames(&mut self, frames: Vec<PixelBuffer>, width: usize, height: usize, now: Instant) -> Result<()> {
        self.begin_edit(now);
        self.store.adopt_import(frames, width, height)?;
        self.tool_manager.clear_crop_proposal();
        self.context(now).commit();
        Ok(())
    }

    /// Composite of the frame being edited, for display.
    pub fn composite(&self) -> PixelBuffer {
        Compositor::composite_active(&self.store)
    }

    pub fn to_document(&self) -> ProjectDocument {
        ProjectDocument::capture(&self.store, self.tool_manager.active_type)
    }

    /// Replaces the whole document. History restarts from the loaded state.
    pub fn load_document(&mut self, doc: ProjectDocument) -> crate::format::error::Result<()> {
        let (store, tool) = doc.into_store()?;
        self.pending.clear();
        self.tool_manager.cancel(&mut self.store);
        self.tool_manager.clear_crop_proposal();
        self.store = store;
        self.tool_manager.set_tool(tool, &mut self.store);
        self.history.reset(EditableState::capture(&self.store));
        debug!("project loaded at {}x{}", self.store.size.width, self.store.size.height);
        Ok(())
    }

    pub fn save_project_json(&self) -> crate::format::error::Result<String> {
        self.to_document().to_json()
    }

    pub fn load_project_json(&mut self, text: &str) -> crate::format::error::Result<()> {
        self.load_document(ProjectDocument::from_json(text)?)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
