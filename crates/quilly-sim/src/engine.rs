//! Simulation engine: drives one tick of the game world.
//!
//! `SimulationEngine` owns the entity store and the combat system, runs
//! the per-tick systems in order, and renders frames on request. It has no
//! windowing or GPU dependency, so it runs headless in tests.

use hecs::World;
use tracing::info;

use quilly_core::config::SimConfig;
use quilly_core::types::SimTime;

use crate::gfx::{FrameReport, PhysicsWorld, SpriteBatch, Viewport};
use crate::store::EntityStore;
use crate::systems;
use crate::systems::combat::CombatSystem;

/// Outcome of one simulation tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickReport {
    /// Delta time actually applied after clamping.
    pub dt: f32,
    /// Entities destroyed by the end-of-tick sweep.
    pub removed: usize,
}

/// The simulation engine. Owns the ECS store and all sim state.
pub struct SimulationEngine {
    store: EntityStore,
    combat: CombatSystem,
    config: SimConfig,
    time: SimTime,
}

impl SimulationEngine {
    /// Create an engine with an empty world and the combat listener attached.
    pub fn new(config: SimConfig) -> Self {
        let mut store = EntityStore::new();
        let mut combat = CombatSystem::new();
        combat.attach(&mut store);
        info!(seed = config.seed, tick_rate = config.tick_rate, "simulation started");

        Self {
            store,
            combat,
            config,
            time: SimTime::default(),
        }
    }

    /// Advance the simulation by `dt` seconds.
    ///
    /// Order: contact refresh, combat, removal sweep. Entities killed this
    /// tick are gone before the next `render`.
    pub fn tick<P: PhysicsWorld + ?Sized>(&mut self, dt: f32, physics: &P) -> TickReport {
        let dt = dt.max(0.0).min(self.config.max_frame_time);

        systems::contacts::run(self.store.world_mut(), physics);
        self.combat.run(self.store.world_mut(), dt);
        let removed = systems::cleanup::run(&mut self.store);

        self.time.advance(dt);
        TickReport { dt, removed }
    }

    /// Draw the current world state.
    pub fn render<V, B, P>(&self, viewport: &mut V, batch: &mut B, physics: &mut P) -> FrameReport
    where
        V: Viewport + ?Sized,
        B: SpriteBatch + ?Sized,
        P: PhysicsWorld + ?Sized,
    {
        systems::render::run(self.store.world(), viewport, batch, physics)
    }

    /// Detach the combat system from the store, as when it leaves the engine.
    pub fn shutdown(&mut self) {
        self.combat.detach(&mut self.store);
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut EntityStore {
        &mut self.store
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        self.store.world()
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn combat(&self) -> &CombatSystem {
        &self.combat
    }
}
