//! Entity spawn factories for setting up the simulation world.
//!
//! Creates players, enemies and attack hitboxes with the component
//! bundles the combat and render systems expect.

use glam::Vec2;
use hecs::Entity;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use quilly_core::components::*;
use quilly_core::config::ArenaConfig;
use quilly_core::constants::*;
use quilly_core::enums::EntityType;
use quilly_core::types::TextureId;

use crate::store::EntityStore;

/// Spawn one player and `enemy_count` enemies scattered over the arena.
/// Returns the player entity.
pub fn spawn_arena(store: &mut EntityStore, rng: &mut ChaCha8Rng, arena: &ArenaConfig) -> Entity {
    let player = spawn_player(
        store,
        Vec2::new(arena.width * 0.5, arena.height * 0.5),
        Stats {
            life: arena.player_life,
            armor: arena.player_armor,
        },
    );

    let max_x = (arena.width - ACTOR_SIZE).max(0.0);
    let max_y = (arena.height - ACTOR_SIZE).max(0.0);
    for _ in 0..arena.enemy_count {
        let position = Vec2::new(rng.gen_range(0.0..=max_x), rng.gen_range(0.0..=max_y));
        spawn_enemy(
            store,
            position,
            Stats {
                life: arena.enemy_life,
                armor: arena.enemy_armor,
            },
        );
    }

    player
}

pub fn spawn_player(store: &mut EntityStore, position: Vec2, stats: Stats) -> Entity {
    spawn_actor(store, EntityType::Player, PLAYER_TEXTURE, position, stats)
}

pub fn spawn_enemy(store: &mut EntityStore, position: Vec2, stats: Stats) -> Entity {
    spawn_actor(store, EntityType::Enemy, ENEMY_TEXTURE, position, stats)
}

fn spawn_actor(
    store: &mut EntityStore,
    kind: EntityType,
    texture: u32,
    position: Vec2,
    stats: Stats,
) -> Entity {
    store.spawn((
        Transform::new(position, Vec2::splat(ACTOR_SIZE), LAYER_ACTORS),
        Render {
            texture: Some(TextureId(texture)),
        },
        stats,
        EntityTypeTag { kind },
        Collision::default(),
    ))
}

/// Spawn an invisible attack hitbox owned by `source`.
pub fn spawn_attack(
    store: &mut EntityStore,
    source: Entity,
    position: Vec2,
    size: Vec2,
    damage: f32,
    life_span: f32,
) -> Entity {
    store.spawn((
        Transform::new(position, size, LAYER_ACTORS),
        Damage::new(damage, life_span, Some(source)),
        Collision::default(),
    ))
}
