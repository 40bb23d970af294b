//! Viewport size resource.
//!
//! Stores the dimensions of the playfield in world units. The player is
//! clamped into it and projectiles are retired once they leave it.

use bevy_ecs::prelude::Resource;

use crate::geometry::Rectangle;

/// Current viewport size.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct ScreenSize {
    /// Width in world units.
    pub w: i32,
    /// Height in world units.
    pub h: i32,
}

impl ScreenSize {
    /// Viewport rectangle anchored at the origin.
    pub fn viewport(&self) -> Rectangle {
        Rectangle::new(0.0, 0.0, self.w as f32, self.h as f32)
    }
}
