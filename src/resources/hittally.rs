//! Running count of projectile impacts.
//!
//! Filled by [`observe_projectile_hit`](crate::events::projectilehit::observe_projectile_hit)
//! so drivers and tests can read back what the projectiles struck without
//! registering their own observers.

use bevy_ecs::prelude::*;
use rustc_hash::FxHashMap;

#[derive(Resource, Debug, Clone, Default)]
pub struct HitTally {
    per_target: FxHashMap<Entity, u32>,
    total: u32,
}

impl HitTally {
    pub fn record(&mut self, target: Entity) {
        *self.per_target.entry(target).or_insert(0) += 1;
        self.total += 1;
    }

    /// Hits recorded against `target`.
    pub fn hits(&self, target: Entity) -> u32 {
        self.per_target.get(&target).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    /// Number of distinct targets hit at least once.
    pub fn targets_hit(&self) -> usize {
        self.per_target.len()
    }

    pub fn clear(&mut self) {
        self.per_target.clear();
        self.total = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_counts_per_target() {
        let mut world = World::new();
        let a = world.spawn_empty().id();
        let b = world.spawn_empty().id();

        let mut tally = HitTally::default();
        tally.record(a);
        tally.record(a);
        tally.record(b);

        assert_eq!(tally.hits(a), 2);
        assert_eq!(tally.hits(b), 1);
        assert_eq!(tally.total(), 3);
        assert_eq!(tally.targets_hit(), 2);

        tally.clear();
        assert_eq!(tally.total(), 0);
        assert_eq!(tally.hits(a), 0);
    }
}
