//! ECS components for hecs entities.
//!
//! Components are plain data structs with no game logic.
//! Systems in `quilly-sim` own the behavior.

use std::collections::HashSet;

use glam::Vec2;
use hecs::Entity;
use serde::{Deserialize, Serialize};

use crate::enums::EntityType;
use crate::types::TextureId;

/// Spatial state of an entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// Current simulated position (bottom-left corner).
    pub position: Vec2,
    /// Sub-frame smoothed position. Written by the interpolation step,
    /// only ever read by rendering.
    pub interpolated_position: Vec2,
    /// Width and height in world units.
    pub size: Vec2,
    /// Depth layer. Lower layers draw first (background).
    pub z: i32,
}

impl Transform {
    pub fn new(position: Vec2, size: Vec2, z: i32) -> Self {
        Self {
            position,
            interpolated_position: position,
            size,
            z,
        }
    }
}

/// Visual representation. Never drawn while `texture` is unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Render {
    pub texture: Option<TextureId>,
}

/// Damage carried by an attack (projectile, melee hitbox).
#[derive(Debug, Clone, Default)]
pub struct Damage {
    /// Damage magnitude before armor.
    pub damage: f32,
    /// Remaining seconds before the attack expires.
    pub life_span: f32,
    /// Entity that caused this damage. Only used to look up its faction.
    pub source: Option<Entity>,
    /// Victims already hit by this damage instance.
    pub damaged_entities: HashSet<Entity>,
}

impl Damage {
    pub fn new(damage: f32, life_span: f32, source: Option<Entity>) -> Self {
        Self {
            damage,
            life_span,
            source,
            damaged_entities: HashSet::new(),
        }
    }
}

/// Entities currently overlapping this one. Refreshed every tick from physics.
#[derive(Debug, Clone, Default)]
pub struct Collision {
    pub entities: HashSet<Entity>,
}

/// Health and flat damage reduction of a damageable entity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub life: f32,
    pub armor: f32,
}

/// Faction tag used for hostility checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityTypeTag {
    pub kind: EntityType,
}

/// Marks an entity for destruction by the end-of-tick sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Removed;
