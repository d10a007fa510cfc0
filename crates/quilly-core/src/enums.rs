//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Kind of an entity. Only `Player` and `Enemy` take part in combat.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityType {
    Player,
    Enemy,
    Item,
    #[default]
    Scenery,
}
