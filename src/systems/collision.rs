//! Minimum-translation push-out against static obstacles.
//!
//! A moving rectangle that overlaps an obstacle is moved out along the axis
//! with the smaller overlap extent, on the side of the obstacle its own
//! centre is on. Equal extents resolve vertically.
//!
//! The push lands the mover's edge on the obstacle's edge. When the mover
//! straddles that edge the distance equals the overlap extent; when one
//! rectangle spans the other on that axis it is the larger distance needed
//! to clear the obstacle.
//!
//! Obstacles are processed once each, in order, and every resolution starts
//! from the position produced by the previous one. There is no iteration to
//! a fixed point, so being pushed out of one obstacle can leave the mover
//! inside another.

use log::debug;

use crate::components::bounds::Bounded;
use crate::geometry::{Rectangle, Vec2};

/// Displacement that moves `mover` out of `obstacle`, or zero when they do
/// not overlap.
pub fn push_out(mover: &Rectangle, obstacle: &Rectangle) -> Vec2 {
    let Some(overlap) = mover.intersection(obstacle) else {
        return Vec2::ZERO;
    };
    let center = obstacle.center();
    let mover_center = mover.center();

    if overlap.width < overlap.height {
        if mover_center.x < center.x {
            Vec2::new(obstacle.x - mover.right(), 0.0)
        } else {
            Vec2::new(obstacle.right() - mover.x, 0.0)
        }
    } else if mover_center.y < center.y {
        Vec2::new(0.0, obstacle.y - mover.bottom())
    } else {
        Vec2::new(0.0, obstacle.bottom() - mover.y)
    }
}

/// Resolve `mover` against every obstacle in turn.
///
/// Returns the total displacement to apply to the mover's position.
pub fn resolve_obstacles<O: Bounded>(mover: &Rectangle, obstacles: &[O]) -> Vec2 {
    let mut rect = *mover;
    let mut total = Vec2::ZERO;

    for obstacle in obstacles {
        let delta = push_out(&rect, &obstacle.bounds());
        if delta != Vec2::ZERO {
            debug!(
                "Pushed out of obstacle at ({:.1}, {:.1}) by ({:.1}, {:.1})",
                rect.x, rect.y, delta.x, delta.y
            );
            rect = rect.translated(delta);
            total += delta;
        }
    }

    total
}
