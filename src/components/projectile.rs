//! A single projectile.
//!
//! Projectiles move in a straight line at constant velocity and switch
//! themselves off once their rectangle is fully outside the viewport. A
//! disabled projectile is inert: [`Projectile::update`] becomes a no-op and
//! the owning [`ProjectileManager`](super::projectilemanager::ProjectileManager)
//! drops it at the end of the tick.

use crate::components::bounds::{Bounded, BoundedEntity};
use crate::geometry::{Rectangle, Vec2};

/// Identifier of a projectile, unique within its manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProjectileId(pub u64);

#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    id: ProjectileId,
    body: BoundedEntity,
    velocity: Vec2,
    enabled: bool,
}

impl Projectile {
    pub fn new(id: ProjectileId, position: Vec2, velocity: Vec2, size: Vec2) -> Self {
        Self {
            id,
            body: BoundedEntity::new(position, size),
            velocity,
            enabled: true,
        }
    }

    pub fn id(&self) -> ProjectileId {
        self.id
    }

    pub fn position(&self) -> Vec2 {
        self.body.position
    }

    pub fn size(&self) -> Vec2 {
        self.body.size
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn disable(&mut self) {
        self.enabled = false;
    }

    /// Advance by `velocity * delta` and disable once fully outside `viewport`.
    pub fn update(&mut self, delta: f32, viewport: &Rectangle) {
        if !self.enabled {
            return;
        }

        self.body.position += self.velocity * delta;

        if self.bounds().is_outside(viewport) {
            self.enabled = false;
        }
    }
}

impl Bounded for Projectile {
    fn bounds(&self) -> Rectangle {
        self.body.bounds()
    }
}
