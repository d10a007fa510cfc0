//! Contact refresh: copies this tick's physics overlaps into `Collision`.
//!
//! Collision sets are rebuilt from scratch every tick. Only entities that
//! already carry a `Collision` component receive partners.

use hecs::{Entity, World};

use quilly_core::components::Collision;

use crate::gfx::PhysicsWorld;

pub fn run<P: PhysicsWorld + ?Sized>(world: &mut World, physics: &P) {
    for (_entity, collision) in world.query_mut::<&mut Collision>() {
        collision.entities.clear();
    }

    for (a, b) in physics.contacts() {
        if a == b {
            continue;
        }
        add_partner(world, a, b);
        add_partner(world, b, a);
    }
}

fn add_partner(world: &mut World, entity: Entity, partner: Entity) {
    if !world.contains(partner) {
        return;
    }
    if let Ok(mut collision) = world.get::<&mut Collision>(entity) {
        collision.entities.insert(partner);
    }
}
