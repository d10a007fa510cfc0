//! Simulation configuration, loadable from JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::ConfigError;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same arena.
    pub seed: u64,
    /// Fixed tick rate used by drivers that step at a constant rate.
    pub tick_rate: u32,
    /// Upper bound on the delta time fed to systems in one tick (seconds).
    pub max_frame_time: f32,
    pub arena: ArenaConfig,
}

/// Layout and actor tuning for a generated arena.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub width: f32,
    pub height: f32,
    pub enemy_count: u32,
    pub enemy_life: f32,
    pub enemy_armor: f32,
    pub player_life: f32,
    pub player_armor: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            tick_rate: TICK_RATE,
            max_frame_time: MAX_FRAME_TIME,
            arena: ArenaConfig::default(),
        }
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
            enemy_count: ARENA_ENEMY_COUNT,
            enemy_life: ENEMY_LIFE,
            enemy_armor: ENEMY_ARMOR,
            player_life: PLAYER_LIFE,
            player_armor: PLAYER_ARMOR,
        }
    }
}

impl SimConfig {
    /// Parse and validate a config from a JSON string.
    /// Missing fields fall back to their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Seconds per tick at the configured tick rate.
    pub fn dt(&self) -> f32 {
        1.0 / self.tick_rate as f32
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_rate == 0 {
            return Err(ConfigError::Invalid("tick_rate must be at least 1".into()));
        }
        if !(self.max_frame_time > 0.0) || !self.max_frame_time.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "max_frame_time must be positive and finite, got {}",
                self.max_frame_time
            )));
        }
        let size_ok = |v: f32| v > 0.0 && v.is_finite();
        if !size_ok(self.arena.width) || !size_ok(self.arena.height) {
            return Err(ConfigError::Invalid(format!(
                "arena must have a positive finite size, got {}x{}",
                self.arena.width, self.arena.height
            )));
        }
        Ok(())
    }
}
