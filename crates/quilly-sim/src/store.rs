//! Entity store: the hecs `World` plus lifecycle listeners and deferred removal.
//!
//! hecs has no notion of listeners or pending removal, so spawning and
//! despawning go through `EntityStore`. Systems still query the inner
//! `World` directly.

use hecs::{DynamicBundle, Entity, World};
use tracing::trace;

use quilly_core::components::Removed;
use quilly_core::error::StoreError;

/// Receives entity lifecycle notifications from an `EntityStore`.
pub trait EntityListener {
    fn entity_added(&mut self, _world: &mut World, _entity: Entity) {}

    /// Called once per entity, after it has been despawned.
    fn entity_removed(&mut self, world: &mut World, entity: Entity);
}

/// Handle returned by `EntityStore::add_listener`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u32);

/// Owns the ECS world and fans out lifecycle events to listeners.
pub struct EntityStore {
    world: World,
    listeners: Vec<(ListenerId, Box<dyn EntityListener>)>,
    next_listener_id: u32,
    removal_buffer: Vec<Entity>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self {
            world: World::new(),
            listeners: Vec::new(),
            next_listener_id: 0,
            removal_buffer: Vec::new(),
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Spawn an entity and notify listeners.
    pub fn spawn(&mut self, components: impl DynamicBundle) -> Entity {
        let entity = self.world.spawn(components);
        self.notify_added(entity);
        entity
    }

    /// Spawn an entity re-using a specific handle, as a pooling allocator would.
    /// A live entity already holding `handle` is destroyed first and listeners
    /// see its removal before the new entity's addition.
    pub fn spawn_at(&mut self, handle: Entity, components: impl DynamicBundle) {
        if self.world.despawn(handle).is_ok() {
            self.notify_removed(handle);
        }
        self.world.spawn_at(handle, components);
        self.notify_added(handle);
    }

    /// Attach the `Removed` marker. The entity stays alive until `flush_removals`.
    pub fn mark_for_removal(&mut self, entity: Entity) -> Result<(), StoreError> {
        self.world.insert_one(entity, Removed)?;
        Ok(())
    }

    pub fn add_listener(&mut self, listener: Box<dyn EntityListener>) -> ListenerId {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, listener));
        trace!(?id, "entity listener added");
        id
    }

    /// Returns false if no listener with this id was registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        let removed = self.listeners.len() != before;
        if removed {
            trace!(?id, "entity listener removed");
        }
        removed
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Despawn every entity carrying `Removed` and notify listeners once each.
    /// Returns the number of entities destroyed.
    pub fn flush_removals(&mut self) -> usize {
        self.removal_buffer.clear();
        self.removal_buffer.extend(
            self.world
                .query_mut::<&Removed>()
                .into_iter()
                .map(|(entity, _)| entity),
        );

        let mut despawned = 0;
        for i in 0..self.removal_buffer.len() {
            let entity = self.removal_buffer[i];
            if self.world.despawn(entity).is_err() {
                continue;
            }
            despawned += 1;
            self.notify_removed(entity);
        }
        self.removal_buffer.clear();
        despawned
    }

    fn notify_added(&mut self, entity: Entity) {
        for (_, listener) in &mut self.listeners {
            listener.entity_added(&mut self.world, entity);
        }
    }

    fn notify_removed(&mut self, entity: Entity) {
        for (_, listener) in &mut self.listeners {
            listener.entity_removed(&mut self.world, entity);
        }
    }
}

impl Default for EntityStore {
    fn default() -> Self {
        Self::new()
    }
}
