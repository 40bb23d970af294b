//! Bounded capability shared by everything that can collide.
//!
//! [`Bounded`] is the only polymorphism in the simulation: the player,
//! obstacles, targets and projectiles all expose an axis-aligned rectangle
//! and the collision routines accept any `Bounded` value.

use crate::geometry::{Rectangle, Vec2};

/// Anything with an axis-aligned bounding rectangle.
pub trait Bounded {
    fn bounds(&self) -> Rectangle;

    /// Strict AABB overlap against another bounded value.
    fn intersects(&self, other: &dyn Bounded) -> bool {
        self.bounds().intersects(&other.bounds())
    }
}

impl Bounded for Rectangle {
    fn bounds(&self) -> Rectangle {
        *self
    }
}

/// Plain position + size pair.
///
/// The position is the top-left corner; the size is never negative.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundedEntity {
    pub position: Vec2,
    pub size: Vec2,
}

impl BoundedEntity {
    /// Create a bounded entity. Negative size components are clamped to zero.
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            size: size.max(Vec2::ZERO),
        }
    }

    pub fn center(&self) -> Vec2 {
        self.position + self.size * 0.5
    }
}

impl Bounded for BoundedEntity {
    fn bounds(&self) -> Rectangle {
        Rectangle::from_pos_size(self.position, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_match_position_and_size() {
        let e = BoundedEntity::new(Vec2::new(3.0, 4.0), Vec2::new(10.0, 20.0));
        assert_eq!(e.bounds(), Rectangle::new(3.0, 4.0, 10.0, 20.0));
    }

    #[test]
    fn test_negative_size_is_clamped() {
        let e = BoundedEntity::new(Vec2::ZERO, Vec2::new(-5.0, 8.0));
        assert_eq!(e.size, Vec2::new(0.0, 8.0));
    }

    #[test]
    fn test_intersects_across_types() {
        let e = BoundedEntity::new(Vec2::ZERO, Vec2::splat(10.0));
        let r = Rectangle::new(9.0, 9.0, 2.0, 2.0);
        assert!(e.intersects(&r));
        // Rectangle's inherent intersects only takes another Rectangle.
        assert!(Bounded::intersects(&r, &e));
        let touching = Rectangle::new(10.0, 0.0, 2.0, 2.0);
        assert!(!e.intersects(&touching));
    }

    #[test]
    fn test_center() {
        let e = BoundedEntity::new(Vec2::new(10.0, 10.0), Vec2::new(4.0, 6.0));
        assert_eq!(e.center(), Vec2::new(12.0, 13.0));
    }
}
