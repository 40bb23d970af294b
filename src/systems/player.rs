//! Player tick system.
//!
//! Runs [`Player::tick`] for every player entity using the shared
//! [`WorldTime`], [`ScreenSize`] and [`InputState`] resources, with every
//! [`Obstacle`] and [`Target`] entity's collider as collision input.
//!
//! The player's [`MapPosition`] is read before the tick and written back
//! after it, so other systems may move the player between frames. Each
//! reported hit becomes a [`ProjectileHitEvent`] aimed at the target entity.
//!
//! Obstacles and targets are ordered by entity before being handed to the
//! player, which makes push-out order and hit order stable across runs.

use bevy_ecs::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::obstacle::{Obstacle, Target};
use crate::components::player::{Player, TickInput};
use crate::events::projectilehit::ProjectileHitEvent;
use crate::geometry::Rectangle;
use crate::resources::input::{InputMode, InputState};
use crate::resources::screensize::ScreenSize;
use crate::resources::worldtime::WorldTime;

pub fn player_tick_system(
    mut players: Query<(&mut Player, &mut MapPosition)>,
    obstacles: Query<(Entity, &MapPosition, &BoxCollider), (With<Obstacle>, Without<Player>)>,
    targets: Query<(Entity, &MapPosition, &BoxCollider), (With<Target>, Without<Player>)>,
    time: Res<WorldTime>,
    screensize: Res<ScreenSize>,
    input: Res<InputState>,
    mode: Option<Res<InputMode>>,
    mut commands: Commands,
) {
    let mode = mode.map(|m| *m).unwrap_or_default();
    let tick = TickInput::new(
        time.delta,
        input.movement_direction(mode),
        input.fire_requested(mode),
        screensize.viewport(),
    );

    let obstacle_rects: Vec<Rectangle> = sorted_rects(obstacles.iter())
        .into_iter()
        .map(|(_, rect)| rect)
        .collect();
    let (target_entities, target_rects): (Vec<Entity>, Vec<Rectangle>) =
        sorted_rects(targets.iter()).into_iter().unzip();

    for (mut player, mut position) in players.iter_mut() {
        player.set_position(position.pos);
        let hits = player.tick(&tick, &obstacle_rects, &target_rects);
        position.pos = player.position();

        for hit in hits {
            commands.trigger(ProjectileHitEvent {
                projectile: hit.projectile,
                target: target_entities[hit.target],
                bounds: hit.bounds,
            });
        }
    }
}

fn sorted_rects<'a>(
    iter: impl Iterator<Item = (Entity, &'a MapPosition, &'a BoxCollider)>,
) -> Vec<(Entity, Rectangle)> {
    let mut rects: Vec<(Entity, Rectangle)> = iter
        .map(|(entity, position, collider)| (entity, collider.rect(position.pos)))
        .collect();
    rects.sort_by_key(|(entity, _)| *entity);
    rects
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::projectilehit::observe_projectile_hit;
    use crate::geometry::Vec2;
    use crate::resources::hittally::HitTally;

    fn make_world(delta: f32) -> World {
        let mut world = World::new();
        world.insert_resource(WorldTime {
            delta,
            ..WorldTime::default()
        });
        world.insert_resource(ScreenSize { w: 800, h: 600 });
        world.insert_resource(InputState::default());
        world.insert_resource(InputMode::Keyboard);
        world.insert_resource(HitTally::default());
        world.add_observer(observe_projectile_hit);
        world
    }

    fn run(world: &mut World) {
        let mut schedule = Schedule::default();
        schedule.add_systems(player_tick_system);
        schedule.run(world);
    }

    #[test]
    fn test_player_position_synced_to_mapposition() {
        let mut world = make_world(0.1);
        let player = world
            .spawn((Player::default(), MapPosition::new(100.0, 100.0)))
            .id();
        world.resource_mut::<InputState>().maindirection_right.set(true);

        run(&mut world);

        let pos = world.get::<MapPosition>(player).unwrap().pos;
        assert!((pos.x - 140.0).abs() < 1e-4);
        assert!((pos.y - 100.0).abs() < 1e-4);
    }

    #[test]
    fn test_mapposition_edits_are_picked_up() {
        let mut world = make_world(0.0);
        let player = world
            .spawn((Player::default(), MapPosition::new(0.0, 0.0)))
            .id();
        world.get_mut::<MapPosition>(player).unwrap().pos = Vec2::new(200.0, 150.0);

        run(&mut world);

        let p = world.get::<Player>(player).unwrap();
        assert_eq!(p.position(), Vec2::new(200.0, 150.0));
    }

    #[test]
    fn test_hits_are_tallied_per_target() {
        let mut world = make_world(0.05);
        world.spawn((Player::default(), MapPosition::new(0.0, 0.0)));
        let target = world
            .spawn((Target, MapPosition::new(40.0, 0.0), BoxCollider::new(30.0, 40.0)))
            .id();
        let far = world
            .spawn((Target, MapPosition::new(700.0, 500.0), BoxCollider::new(30.0, 30.0)))
            .id();
        world.resource_mut::<InputState>().action_fire.set(true);

        run(&mut world);

        let tally = world.resource::<HitTally>();
        assert_eq!(tally.hits(target), 1);
        assert_eq!(tally.hits(far), 0);
    }
}
