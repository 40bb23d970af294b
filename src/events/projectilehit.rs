//! Projectile impact events.
//!
//! [`player_tick_system`](crate::systems::player::player_tick_system) triggers
//! one [`ProjectileHitEvent`] per projectile/target overlap it observes, in
//! projectile order and then target order. Projectiles are not consumed by a
//! hit; the same projectile keeps reporting while it overlaps a target.
//!
//! [`observe_projectile_hit`] is the stock observer: it records the hit in
//! the [`HitTally`] resource. Register your own observer for damage, sounds
//! or despawning.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::projectile::ProjectileId;
use crate::geometry::Rectangle;
use crate::resources::hittally::HitTally;

/// Event fired when an enabled projectile overlaps a target entity.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct ProjectileHitEvent {
    pub projectile: ProjectileId,
    pub target: Entity,
    /// Projectile bounds at the moment of the hit.
    pub bounds: Rectangle,
}

/// Count the hit in [`HitTally`].
pub fn observe_projectile_hit(trigger: On<ProjectileHitEvent>, mut tally: ResMut<HitTally>) {
    let hit = trigger.event();
    debug!(
        "Projectile {:?} hit {:?} at ({:.1}, {:.1})",
        hit.projectile, hit.target, hit.bounds.x, hit.bounds.y
    );
    tally.record(hit.target);
}
