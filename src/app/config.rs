use std::time::Duration;
use serde::{Deserialize, Serialize};
use crate::core::grid::GridSize;
use crate::format::error::{FormatError, Result};
use crate::history::manager::{DEFAULT_CAPACITY, DEFAULT_SETTLE};

/// Startup knobs for an [`Engine`](crate::app::engine::Engine). Missing
/// fields fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    pub width: usize,
    pub height: usize,
    pub history_capacity: usize,
    pub replay_settle_ms: u64,
    pub commit_delay_ms: u64,
    pub frames_enabled: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: 32,
            height: 32,
            history_capacity: DEFAULT_CAPACITY,
            replay_settle_ms: DEFAULT_SETTLE.as_millis() as u64,
            commit_delay_ms: 10,
            frames_enabled: false,
        }
    }
}

impl EngineConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        let config: EngineConfig =
            serde_json::from_str(text).map_err(|e| FormatError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        GridSize::new(self.width, self.height)?;
        if self.history_capacity == 0 {
            return Err(FormatError::InvalidConfig("historyCapacity must be at least 1".into()));
        }
        Ok(())
    }

    pub fn grid_size(&self) -> GridSize {
        GridSize::new(self.width, self.height).unwrap_or_default()
    }

    pub fn replay_settle(&self) -> Duration {
        Duration::from_millis(self.replay_settle_ms)
    }

    pub fn commit_delay(&self) -> Duration {
        Duration::from_millis(self.commit_delay_ms)
    }
}
