//! Frame render system: sorts sprites by layer and height, draws them in one
//! batch pass, then overlays the physics debug geometry.
//!
//! This system is read-only. It never modifies the world.

use hecs::{Entity, World};
use tracing::error;

use quilly_core::components::{Render, Transform};
use quilly_core::types::{SpriteRect, TextureId};

use crate::gfx::{BatchScope, FrameReport, PhysicsWorld, SpriteBatch, Viewport};

/// One entity's draw call, resolved from its components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawItem {
    pub entity: Entity,
    pub z: i32,
    pub texture: Option<TextureId>,
    pub rect: SpriteRect,
}

/// Collect every `Render` + `Transform` entity in painter's order:
/// ascending depth layer, then ascending interpolated y.
///
/// Recomputed from scratch each frame; positions move continuously.
pub fn draw_order(world: &World) -> Vec<DrawItem> {
    let mut items: Vec<DrawItem> = world
        .query::<(&Render, &Transform)>()
        .iter()
        .map(|(entity, (render, transform))| DrawItem {
            entity,
            z: transform.z,
            texture: render.texture,
            rect: SpriteRect::new(transform.interpolated_position, transform.size),
        })
        .collect();

    items.sort_by(|a, b| a.z.cmp(&b.z).then(a.rect.y.total_cmp(&b.rect.y)));
    items
}

/// Draw one frame.
pub fn run<V, B, P>(world: &World, viewport: &mut V, batch: &mut B, physics: &mut P) -> FrameReport
where
    V: Viewport + ?Sized,
    B: SpriteBatch + ?Sized,
    P: PhysicsWorld + ?Sized,
{
    let items = draw_order(world);

    viewport.apply();
    let projection = viewport.combined();
    batch.set_projection(projection);

    let mut report = FrameReport::default();
    {
        let mut scope = BatchScope::begin(batch);
        for item in &items {
            let Some(texture) = item.texture else {
                error!(entity = ?item.entity, "entity has no texture for rendering");
                report.skipped += 1;
                continue;
            };
            scope.draw(texture, item.rect);
            report.drawn += 1;
        }
    }

    physics.debug_render(&projection);
    report
}
