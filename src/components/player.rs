//! The controllable entity.
//!
//! [`Player`] owns its position, movement speed, the last direction it aimed
//! in and its [`ProjectileManager`]. Everything else it needs for a tick
//! (elapsed time, movement direction, fire flag, viewport, obstacles and
//! targets) is passed to [`Player::tick`] fresh every frame.
//!
//! # Tick order
//!
//! 1. advance the game clock by `delta`
//! 2. integrate `position += direction * speed * delta`
//! 3. clamp the rectangle into the viewport
//! 4. push out of overlapping obstacles, one at a time
//! 5. fire if requested and the cooldown allows it
//! 6. advance, hit-test and cull projectiles
//!
//! # Aiming
//!
//! Projectiles always travel at the configured bullet speed: any nonzero
//! movement direction is normalized before it is used as the aim. With no
//! movement input the player fires along the last direction it moved or
//! fired in, and falls back to the +x axis before that.

use bevy_ecs::prelude::Component;

use crate::components::bounds::{Bounded, BoundedEntity};
use crate::components::projectile::ProjectileId;
use crate::components::projectilemanager::{LauncherConfig, ProjectileHit, ProjectileManager};
use crate::error::{self, ConfigError};
use crate::geometry::{Rectangle, Vec2};
use crate::systems::collision;

const DEFAULT_SPEED: f32 = 400.0;
const DEFAULT_SIZE: f32 = 32.0;

/// Construction parameters for a [`Player`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerConfig {
    /// Initial top-left position.
    pub position: Vec2,
    pub size: Vec2,
    /// Movement speed in world units per second.
    pub speed: f32,
    /// Clamp the movement vector to length 1 so diagonals are not faster.
    pub normalize_diagonal: bool,
    pub launcher: LauncherConfig,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            size: Vec2::splat(DEFAULT_SIZE),
            speed: DEFAULT_SPEED,
            normalize_diagonal: true,
            launcher: LauncherConfig::default(),
        }
    }
}

impl PlayerConfig {
    /// Check sizes and speed, returning the config unchanged when valid.
    pub fn validated(self) -> Result<Self, ConfigError> {
        error::positive("player_width", self.size.x)?;
        error::positive("player_height", self.size.y)?;
        error::non_negative("player_speed", self.speed)?;
        if !self.position.is_finite() {
            return Err(ConfigError::InvalidValue {
                key: "player_position",
                value: if self.position.x.is_finite() {
                    self.position.y
                } else {
                    self.position.x
                },
            });
        }
        Ok(self)
    }
}

/// Per-tick input resolved by the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickInput {
    /// Seconds since the previous tick.
    pub delta: f32,
    /// Movement direction, components roughly in `[-1, 1]`.
    pub direction: Vec2,
    pub fire: bool,
    pub viewport: Rectangle,
}

impl TickInput {
    pub fn new(delta: f32, direction: Vec2, fire: bool, viewport: Rectangle) -> Self {
        Self {
            delta,
            direction,
            fire,
            viewport,
        }
    }
}

#[derive(Component, Debug, Clone)]
pub struct Player {
    body: BoundedEntity,
    speed: f32,
    normalize_diagonal: bool,
    last_aim: Vec2,
    elapsed: f64,
    launcher: ProjectileManager,
}

impl Default for Player {
    fn default() -> Self {
        Self::new(PlayerConfig::default())
    }
}

impl Player {
    pub fn new(config: PlayerConfig) -> Self {
        Self {
            body: BoundedEntity::new(config.position, config.size),
            speed: config.speed,
            normalize_diagonal: config.normalize_diagonal,
            last_aim: Vec2::X,
            elapsed: 0.0,
            launcher: ProjectileManager::new(config.launcher),
        }
    }

    pub fn position(&self) -> Vec2 {
        self.body.position
    }

    pub fn size(&self) -> Vec2 {
        self.body.size
    }

    pub fn center(&self) -> Vec2 {
        self.body.center()
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Unit vector used when firing without movement input.
    pub fn last_aim(&self) -> Vec2 {
        self.last_aim
    }

    /// Game clock: the sum of every `delta` this player has been ticked with.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn launcher(&self) -> &ProjectileManager {
        &self.launcher
    }

    /// Teleport without collision handling.
    pub fn set_position(&mut self, position: Vec2) {
        self.body.position = position;
    }

    /// Run one simulation tick and return the projectile hits it produced.
    pub fn tick<O: Bounded, T: Bounded>(
        &mut self,
        input: &TickInput,
        obstacles: &[O],
        targets: &[T],
    ) -> Vec<ProjectileHit> {
        self.elapsed += f64::from(input.delta);

        self.integrate(input.delta, input.direction);
        self.clamp_to(&input.viewport);
        self.resolve_obstacles(obstacles);

        if let Some(aim) = input.direction.try_normalize() {
            self.last_aim = aim;
        }
        if input.fire {
            self.fire(input.direction);
        }

        self.launcher.update(input.delta, &input.viewport, targets)
    }

    /// `position += direction * speed * delta`.
    pub fn integrate(&mut self, delta: f32, direction: Vec2) {
        let direction = if self.normalize_diagonal {
            direction.clamp_length_max(1.0)
        } else {
            direction
        };
        self.body.position += direction * self.speed * delta;
    }

    /// Keep the player rectangle inside `viewport`.
    ///
    /// The far edge wins, so a viewport smaller than the player leaves the
    /// player at a position before the viewport origin instead of failing.
    pub fn clamp_to(&mut self, viewport: &Rectangle) {
        let size = self.body.size;
        let pos = &mut self.body.position;

        if pos.x < viewport.x {
            pos.x = viewport.x;
        }
        if pos.y < viewport.y {
            pos.y = viewport.y;
        }
        if pos.x + size.x > viewport.right() {
            pos.x = viewport.right() - size.x;
        }
        if pos.y + size.y > viewport.bottom() {
            pos.y = viewport.bottom() - size.y;
        }
    }

    /// Push the player out of each overlapping obstacle in order.
    pub fn resolve_obstacles<O: Bounded>(&mut self, obstacles: &[O]) {
        let delta = collision::resolve_obstacles(&self.bounds(), obstacles);
        self.body.position += delta;
    }

    /// Aim direction for a shot given the current movement input.
    pub fn aim_direction(&self, direction: Vec2) -> Vec2 {
        direction
            .try_normalize()
            .or_else(|| self.last_aim.try_normalize())
            .unwrap_or(Vec2::X)
    }

    /// Fire from the player's centre if the cooldown allows it.
    pub fn fire(&mut self, direction: Vec2) -> Option<ProjectileId> {
        let aim = self.aim_direction(direction);
        let id = self.launcher.try_fire(self.elapsed, self.center(), aim)?;
        self.last_aim = aim;
        Some(id)
    }
}

impl Bounded for Player {
    fn bounds(&self) -> Rectangle {
        self.body.bounds()
    }
}
