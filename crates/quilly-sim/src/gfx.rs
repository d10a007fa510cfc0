//! Graphics and physics capabilities consumed by the simulation.
//!
//! The simulation never talks to a GPU or physics engine directly.
//! Backends implement these traits; tests use in-memory fakes.

use glam::Mat4;
use hecs::Entity;

use quilly_core::types::{SpriteRect, TextureId};

/// Camera viewport.
pub trait Viewport {
    /// Make this viewport current (glViewport and friends).
    fn apply(&mut self);

    /// Combined projection * view matrix of the viewport's camera.
    fn combined(&self) -> Mat4;
}

/// Sprite batch that collects draw calls between `begin` and `end`.
pub trait SpriteBatch {
    fn set_projection(&mut self, projection: Mat4);
    fn begin(&mut self);
    fn draw(&mut self, texture: TextureId, rect: SpriteRect);
    /// Flush pending sprites.
    fn end(&mut self);
}

/// Output side of the physics engine.
pub trait PhysicsWorld {
    /// Every pair of entities whose bodies currently overlap.
    fn contacts(&self) -> Vec<(Entity, Entity)>;

    /// Draw body outlines for debugging.
    fn debug_render(&mut self, projection: &Mat4);
}

/// Scoped batch acquisition. `end` runs when the scope is dropped,
/// whichever way the draw loop exits.
pub struct BatchScope<'a, B: SpriteBatch + ?Sized> {
    batch: &'a mut B,
}

impl<'a, B: SpriteBatch + ?Sized> BatchScope<'a, B> {
    pub fn begin(batch: &'a mut B) -> Self {
        batch.begin();
        Self { batch }
    }

    pub fn draw(&mut self, texture: TextureId, rect: SpriteRect) {
        self.batch.draw(texture, rect);
    }
}

impl<B: SpriteBatch + ?Sized> Drop for BatchScope<'_, B> {
    fn drop(&mut self) {
        self.batch.end();
    }
}

/// Outcome of one draw pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// Sprites submitted to the batch.
    pub drawn: usize,
    /// Entities skipped because they had no texture.
    pub skipped: usize,
}
