//! Simulation engine for Quilly Jumper.
//!
//! Wraps the hecs ECS world in an `EntityStore` with lifecycle listeners,
//! resolves combat each tick, and draws frames in painter's order through
//! injected graphics collaborators.

pub mod engine;
pub mod gfx;
pub mod store;
pub mod systems;
pub mod world_setup;

pub use engine::SimulationEngine;
