//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are functions over `&mut World` (or `&World` for read-only).
//! Persistent state lives in components; `CombatSystem` only keeps its
//! store subscription.

pub mod cleanup;
pub mod combat;
pub mod contacts;
pub mod render;
