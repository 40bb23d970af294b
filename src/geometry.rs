//! Axis-aligned rectangle math.
//!
//! [`Rectangle`] follows the field layout of the renderer's rectangle type
//! (`x`, `y`, `width`, `height`) so positions and sizes can be handed to a
//! drawing layer unchanged. Rectangles are half-open: they cover
//! `[x, x + width) × [y, y + height)`, so two rectangles that only share an
//! edge do not intersect.

pub use glam::Vec2;

/// Axis-aligned rectangle in world units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rectangle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rectangle {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a rectangle from a top-left corner and a size.
    pub fn from_pos_size(position: Vec2, size: Vec2) -> Self {
        Self::new(position.x, position.y, size.x, size.y)
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Strict overlap test. Touching edges and zero-sized rectangles never
    /// intersect.
    pub fn intersects(&self, other: &Rectangle) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Intersection rectangle, or `None` when the rectangles do not overlap.
    pub fn intersection(&self, other: &Rectangle) -> Option<Rectangle> {
        if !self.intersects(other) {
            return None;
        }
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        Some(Rectangle::new(left, top, right - left, bottom - top))
    }

    /// True when `other` lies completely inside this rectangle.
    pub fn contains_rect(&self, other: &Rectangle) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// True when this rectangle shares no area with `area`.
    ///
    /// Unlike `!intersects`, a zero-sized rectangle sitting inside `area`
    /// is not considered outside.
    pub fn is_outside(&self, area: &Rectangle) -> bool {
        self.x >= area.right()
            || self.right() <= area.x
            || self.y >= area.bottom()
            || self.bottom() <= area.y
    }

    pub fn translated(&self, delta: Vec2) -> Rectangle {
        Rectangle::new(self.x + delta.x, self.y + delta.y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_overlapping_rectangles_intersect() {
        let a = Rectangle::new(0.0, 0.0, 10.0, 10.0);
        let b = Rectangle::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Rectangle::new(0.0, 0.0, 10.0, 10.0);
        let right = Rectangle::new(10.0, 0.0, 10.0, 10.0);
        let below = Rectangle::new(0.0, 10.0, 10.0, 10.0);
        assert!(!a.intersects(&right));
        assert!(!a.intersects(&below));
    }

    #[test]
    fn test_zero_size_never_intersects() {
        let a = Rectangle::new(0.0, 0.0, 10.0, 10.0);
        let point = Rectangle::new(5.0, 5.0, 0.0, 0.0);
        assert!(!a.intersects(&point));
    }

    #[test]
    fn test_intersection_rectangle() {
        let a = Rectangle::new(5.0, 5.0, 10.0, 10.0);
        let b = Rectangle::new(10.0, 5.0, 10.0, 10.0);
        let overlap = a.intersection(&b).unwrap();
        assert!(approx_eq(overlap.x, 10.0));
        assert!(approx_eq(overlap.y, 5.0));
        assert!(approx_eq(overlap.width, 5.0));
        assert!(approx_eq(overlap.height, 10.0));
    }

    #[test]
    fn test_intersection_none_when_apart() {
        let a = Rectangle::new(0.0, 0.0, 1.0, 1.0);
        let b = Rectangle::new(3.0, 3.0, 1.0, 1.0);
        assert!(a.intersection(&b).is_none());
    }

    #[test]
    fn test_center() {
        let r = Rectangle::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.center(), Vec2::new(25.0, 40.0));
    }

    #[test]
    fn test_contains_rect() {
        let area = Rectangle::new(0.0, 0.0, 800.0, 600.0);
        assert!(area.contains_rect(&Rectangle::new(0.0, 0.0, 800.0, 600.0)));
        assert!(area.contains_rect(&Rectangle::new(10.0, 10.0, 5.0, 5.0)));
        assert!(!area.contains_rect(&Rectangle::new(799.0, 0.0, 5.0, 5.0)));
        assert!(!area.contains_rect(&Rectangle::new(-1.0, 0.0, 5.0, 5.0)));
    }

    #[test]
    fn test_is_outside() {
        let area = Rectangle::new(0.0, 0.0, 100.0, 100.0);
        assert!(Rectangle::new(100.0, 10.0, 5.0, 5.0).is_outside(&area));
        assert!(Rectangle::new(-5.0, 10.0, 5.0, 5.0).is_outside(&area));
        assert!(Rectangle::new(10.0, -6.0, 5.0, 5.0).is_outside(&area));
        assert!(!Rectangle::new(98.0, 10.0, 5.0, 5.0).is_outside(&area));
        assert!(!Rectangle::new(50.0, 50.0, 0.0, 0.0).is_outside(&area));
    }
}
