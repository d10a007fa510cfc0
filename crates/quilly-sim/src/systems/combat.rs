//! Combat resolution: attack lifespan, damage vs armor, and death marking.
//!
//! Runs over every entity with `Damage` + `Collision` that is not already
//! marked `Removed`. Each attack hits a given victim at most once; the
//! removal listener keeps `damaged_entities` free of dead handles so a
//! recycled identity is never mistaken for a victim that was already hit.

use hecs::{Entity, World};
use tracing::{debug, trace};

use quilly_core::components::{Collision, Damage, EntityTypeTag, Removed, Stats};
use quilly_core::enums::EntityType;

use crate::store::{EntityListener, EntityStore, ListenerId};

/// Combat system state: its store subscription and a reusable query buffer.
#[derive(Debug, Default)]
pub struct CombatSystem {
    listener: Option<ListenerId>,
    sources: Vec<Entity>,
}

impl CombatSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to entity removals for the whole store. Idempotent.
    pub fn attach(&mut self, store: &mut EntityStore) {
        if self.listener.is_none() {
            self.listener = Some(store.add_listener(Box::new(DamagedEntityPurge)));
        }
    }

    pub fn detach(&mut self, store: &mut EntityStore) {
        if let Some(id) = self.listener.take() {
            store.remove_listener(id);
        }
    }

    pub fn is_attached(&self) -> bool {
        self.listener.is_some()
    }

    /// Resolve one tick of combat.
    pub fn run(&mut self, world: &mut World, dt: f32) {
        self.sources.clear();
        self.sources.extend(
            world
                .query_mut::<(&Damage, &Collision)>()
                .without::<&Removed>()
                .into_iter()
                .map(|(entity, _)| entity),
        );

        for i in 0..self.sources.len() {
            process_entity(world, self.sources[i], dt);
        }
    }
}

fn process_entity(world: &mut World, entity: Entity, dt: f32) {
    let expired = match world.get::<&mut Damage>(entity) {
        Ok(mut damage) => {
            damage.life_span -= dt;
            damage.life_span <= 0.0
        }
        Err(_) => return,
    };

    if expired {
        match world.insert_one(entity, Removed) {
            Ok(()) => trace!(?entity, "attack expired"),
            Err(_) => trace!(?entity, "expired attack already despawned"),
        }
        return;
    }

    let partners: Vec<Entity> = match world.get::<&Collision>(entity) {
        Ok(collision) => collision.entities.iter().copied().collect(),
        Err(_) => return,
    };
    let (amount, source) = match world.get::<&Damage>(entity) {
        Ok(damage) => (damage.damage, damage.source),
        Err(_) => return,
    };

    for victim in partners {
        if !is_enemy(world, source, victim) {
            continue;
        }
        let already_hit = world
            .get::<&Damage>(entity)
            .map(|damage| damage.damaged_entities.contains(&victim))
            .unwrap_or(true);
        if already_hit {
            continue;
        }

        let life = match world.get::<&mut Stats>(victim) {
            Ok(mut stats) => {
                let dealt = (amount - stats.armor).max(0.0);
                stats.life -= dealt;
                debug!(?victim, dealt, life = stats.life, "damage dealt");
                stats.life
            }
            Err(_) => continue,
        };

        if life <= 0.0 && world.insert_one(victim, Removed).is_err() {
            trace!(?victim, "killed victim already despawned");
            continue;
        }

        // Recorded even when armor absorbed everything.
        if let Ok(mut damage) = world.get::<&mut Damage>(entity) {
            damage.damaged_entities.insert(victim);
        }
    }
}

/// Players hurt enemies and enemies hurt players. Nothing else is hostile,
/// and a missing or dead source or an untagged target never is.
pub fn is_enemy(world: &World, source: Option<Entity>, target: Entity) -> bool {
    let Some(source) = source else {
        return false;
    };
    let (Ok(source_type), Ok(target_type)) = (
        world.get::<&EntityTypeTag>(source),
        world.get::<&EntityTypeTag>(target),
    ) else {
        return false;
    };

    matches!(
        (source_type.kind, target_type.kind),
        (EntityType::Player, EntityType::Enemy) | (EntityType::Enemy, EntityType::Player)
    )
}

/// Drop `entity` from every attack's hit list.
pub fn purge_damaged(world: &mut World, entity: Entity) {
    for (_, damage) in world.query_mut::<&mut Damage>() {
        damage.damaged_entities.remove(&entity);
    }
}

/// Removal listener registered by `CombatSystem::attach`.
struct DamagedEntityPurge;

impl EntityListener for DamagedEntityPurge {
    fn entity_removed(&mut self, world: &mut World, entity: Entity) {
        purge_damaged(world, entity);
    }
}
