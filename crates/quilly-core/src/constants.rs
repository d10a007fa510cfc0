//! Simulation constants and tuning parameters.

/// Default simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick at the default tick rate.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

/// Longest frame the simulation accepts in one step (seconds).
/// Larger deltas (debugger pauses, window drags) are clamped to this.
pub const MAX_FRAME_TIME: f32 = 0.25;

/// Default RNG seed.
pub const DEFAULT_SEED: u64 = 42;

// --- Arena ---

pub const ARENA_WIDTH: f32 = 32.0;
pub const ARENA_HEIGHT: f32 = 18.0;
pub const ARENA_ENEMY_COUNT: u32 = 8;

// --- Actors ---

pub const PLAYER_LIFE: f32 = 100.0;
pub const PLAYER_ARMOR: f32 = 2.0;
pub const ENEMY_LIFE: f32 = 20.0;
pub const ENEMY_ARMOR: f32 = 0.0;

/// Actor sprite size in world units.
pub const ACTOR_SIZE: f32 = 1.0;

// --- Depth layers ---

pub const LAYER_BACKGROUND: i32 = 0;
pub const LAYER_ACTORS: i32 = 1;
pub const LAYER_FOREGROUND: i32 = 2;

// --- Textures ---

pub const PLAYER_TEXTURE: u32 = 1;
pub const ENEMY_TEXTURE: u32 = 2;
