//! Static obstacles and hittable targets.
//!
//! Both are plain collision data with no update logic. Inside the ECS they
//! are marker components next to a [`MapPosition`](super::mapposition::MapPosition)
//! and a [`BoxCollider`](super::boxcollider::BoxCollider); outside the ECS a
//! [`StaticObstacle`] can be handed to [`Player::tick`](super::player::Player::tick)
//! directly.

use bevy_ecs::prelude::Component;

use crate::components::bounds::{Bounded, BoundedEntity};
use crate::geometry::{Rectangle, Vec2};

/// Marker for entities the player is pushed out of.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Obstacle;

/// Marker for entities projectiles report hits against.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Target;

/// Immutable obstacle bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StaticObstacle {
    body: BoundedEntity,
}

impl StaticObstacle {
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            body: BoundedEntity::new(position, size),
        }
    }

    /// Obstacle of `size` centred on `center`.
    pub fn centered(center: Vec2, size: Vec2) -> Self {
        Self::new(center - size * 0.5, size)
    }
}

impl Bounded for StaticObstacle {
    fn bounds(&self) -> Rectangle {
        self.body.bounds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_obstacle() {
        let o = StaticObstacle::centered(Vec2::new(400.0, 300.0), Vec2::splat(100.0));
        assert_eq!(o.bounds(), Rectangle::new(350.0, 250.0, 100.0, 100.0));
    }
}
